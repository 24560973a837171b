use pinocchio::program_error::ProgramError;
use pinocchio_log::log;

// Custom codes line up with the ones Anchor clients already decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum SocialtippingError {
    /// Instruction data is shorter than a discriminator.
    InstructionMissing = 100,
    /// No handler is registered for the discriminator.
    InstructionFallbackNotFound = 101,
    /// The program was invoked under an id other than `crate::ID`.
    DeclaredProgramIdMismatch = 4100,
}

impl SocialtippingError {
    pub const fn code(self) -> u32 {
        self as u32
    }

    pub const fn name(self) -> &'static str {
        match self {
            SocialtippingError::InstructionMissing => "InstructionMissing",
            SocialtippingError::InstructionFallbackNotFound => "InstructionFallbackNotFound",
            SocialtippingError::DeclaredProgramIdMismatch => "DeclaredProgramIdMismatch",
        }
    }

    pub const fn message(self) -> &'static str {
        match self {
            SocialtippingError::InstructionMissing => "8 byte instruction identifier not provided",
            SocialtippingError::InstructionFallbackNotFound => "Fallback functions are not supported",
            SocialtippingError::DeclaredProgramIdMismatch => {
                "The declared program id does not match the actual program id"
            }
        }
    }

    /// Emits the same line Anchor programs print for a failed instruction.
    pub fn log(self) {
        log!(
            "AnchorError occurred. Error Code: {}. Error Number: {}. Error Message: {}.",
            self.name(),
            self.code(),
            self.message()
        );
    }
}

// map internal errors to standard program error
pub fn to_program_error(err: SocialtippingError) -> ProgramError {
    ProgramError::Custom(err.code())
}

impl From<SocialtippingError> for ProgramError {
    fn from(err: SocialtippingError) -> Self {
        to_program_error(err)
    }
}
