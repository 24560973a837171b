use shank::ShankInstruction;

use crate::error::SocialtippingError;

pub mod initialize;
pub use initialize::*;

/// Length of the tag that prefixes every instruction's data.
pub const DISCRIMINATOR_LEN: usize = 8;

/// `sha256("global:initialize")[..8]`
pub const INITIALIZE_DISCRIMINATOR: [u8; DISCRIMINATOR_LEN] =
    [175, 175, 109, 31, 13, 152, 155, 237];

#[derive(Clone, Copy, Debug, PartialEq, Eq, ShankInstruction)]
pub enum SocialtippingInstruction {
    /// Logs a greeting with the program id. Takes no accounts and no arguments.
    Initialize,
}

impl SocialtippingInstruction {
    pub const fn discriminator(&self) -> [u8; DISCRIMINATOR_LEN] {
        match self {
            SocialtippingInstruction::Initialize => INITIALIZE_DISCRIMINATOR,
        }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            SocialtippingInstruction::Initialize => "Initialize",
        }
    }
}

impl TryFrom<&[u8]> for SocialtippingInstruction {
    type Error = SocialtippingError;

    fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
        let disc = data
            .get(..DISCRIMINATOR_LEN)
            .ok_or(SocialtippingError::InstructionMissing)?;

        match disc {
            d if d == &INITIALIZE_DISCRIMINATOR[..] => Ok(SocialtippingInstruction::Initialize),
            _ => Err(SocialtippingError::InstructionFallbackNotFound),
        }
    }
}
