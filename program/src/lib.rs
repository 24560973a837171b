#![cfg_attr(feature = "sbf", no_std)]

#[cfg(feature = "std")]
extern crate std;

// Downstream programs link with `no-entrypoint` to avoid a duplicate symbol.
#[cfg(all(feature = "bpf-entrypoint", not(feature = "no-entrypoint")))]
pub mod entrypoint;

pub mod error;
pub mod instruction;
pub mod processor;

pinocchio_pubkey::declare_id!("DafEaM7Us45XUh4NPz5AgkRWoicgwcXEnLsYt4zgLJou");

#[cfg(feature = "sbf")]
#[panic_handler]
fn panic(_info: &core::panic::PanicInfo) -> ! {
    loop {}
}

// The program never allocates; the greeting is encoded on the stack.
#[cfg(feature = "sbf")]
pinocchio::no_allocator!();
