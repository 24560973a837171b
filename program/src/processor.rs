use pinocchio::{account_info::AccountInfo, pubkey::Pubkey, ProgramResult};
use pinocchio_log::log;

use crate::{
    error::{to_program_error, SocialtippingError},
    instruction::{self, SocialtippingInstruction},
};

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let ix = decode_instruction(program_id, instruction_data).map_err(|err| {
        err.log();
        to_program_error(err)
    })?;

    log!("Instruction: {}", ix.name());

    match ix {
        SocialtippingInstruction::Initialize => {
            instruction::initialize::process_initialize(program_id, accounts)
        }
    }
}

// Program id first, then the discriminator.
fn decode_instruction(
    program_id: &Pubkey,
    instruction_data: &[u8],
) -> Result<SocialtippingInstruction, SocialtippingError> {
    if *program_id != crate::ID {
        return Err(SocialtippingError::DeclaredProgramIdMismatch);
    }
    SocialtippingInstruction::try_from(instruction_data)
}
