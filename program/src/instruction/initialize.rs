use pinocchio::{account_info::AccountInfo, program_error::ProgramError, pubkey::Pubkey, ProgramResult};
use pinocchio_log::log;

/// Longest base58 rendering of a 32-byte key.
pub const MAX_BASE58_PUBKEY_LEN: usize = 44;

pub fn process_initialize(program_id: &Pubkey, _accounts: &[AccountInfo]) -> ProgramResult {
    // No accounts are declared; anything passed along is ignored.
    let mut buf = [0u8; MAX_BASE58_PUBKEY_LEN];
    let id = encode_pubkey(program_id, &mut buf)?;
    log!("Greetings from: {}", id);

    Ok(())
}

/// Base58-encodes `pubkey` into `buf` without allocating.
pub fn encode_pubkey<'a>(
    pubkey: &Pubkey,
    buf: &'a mut [u8; MAX_BASE58_PUBKEY_LEN],
) -> Result<&'a str, ProgramError> {
    let len = bs58::encode(pubkey)
        .onto(&mut buf[..])
        .map_err(|_| ProgramError::InvalidArgument)?;
    core::str::from_utf8(&buf[..len]).map_err(|_| ProgramError::InvalidArgument)
}
