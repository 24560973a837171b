#![allow(dead_code)]

use solana_program_test::{ProgramTest, ProgramTestBanksClientExt};
use socialtipping::instruction::SocialtippingInstruction;
use std::{env, path::Path};

pub use solana_program_test::{BanksClient, ProgramTestContext};
pub use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::Transaction,
};

pub fn program_id() -> Pubkey {
    Pubkey::new_from_array(socialtipping::ID)
}

pub fn program_test() -> ProgramTest {
    // Workspace member: cargo-build-sbf writes to the workspace target dir
    let deploy_dir = format!("{}/../target/deploy", env!("CARGO_MANIFEST_DIR"));
    env::set_var("BPF_OUT_DIR", &deploy_dir);
    let so_path = Path::new(&deploy_dir).join("socialtipping.so");
    assert!(
        so_path.exists(),
        "SBF artifact not found at {}.\nBuild first: `cargo-build-sbf --no-default-features --features sbf --manifest-path program/Cargo.toml`",
        so_path.display()
    );

    let mut pt = ProgramTest::default();
    pt.prefer_bpf(true);
    pt.add_upgradeable_program_to_genesis("socialtipping", &program_id());
    pt
}

pub fn initialize_ix() -> Instruction {
    Instruction {
        program_id: program_id(),
        accounts: vec![],
        data: SocialtippingInstruction::Initialize.discriminator().to_vec(),
    }
}

pub fn signed_tx(ctx: &ProgramTestContext, ixs: &[Instruction]) -> Transaction {
    Transaction::new_signed_with_payer(
        ixs,
        Some(&ctx.payer.pubkey()),
        &[&ctx.payer],
        ctx.last_blockhash,
    )
}

pub async fn refresh_blockhash(ctx: &mut ProgramTestContext) {
    ctx.last_blockhash = ctx
        .banks_client
        .get_new_latest_blockhash(&ctx.last_blockhash)
        .await
        .unwrap();
}
