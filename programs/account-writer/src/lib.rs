#![no_std]

//! On-chain program that writes caller-supplied bytes into the data of an
//! account it owns.
//!
//! A `Write` runs as a fixed pipeline where every stage consumes the value
//! produced by the previous one:
//!
//! ```text
//! instruction data -> Instruction          (decoding)
//! accounts         -> WriteTarget          (validating)
//! WriteTarget      -> CheckedWrite         (bounds checking)
//! CheckedWrite     -> mutated account data (writing)
//! ```
//!
//! [`writer::write`] only accepts a [`bounds::CheckedWrite`], which can only
//! be built from a [`validator::WriteTarget`], so the account data cannot be
//! borrowed mutably before both checks have passed. Any failure returns
//! before the write stage and leaves the account untouched.
//!
//! The program binary is built with the `bpf-entrypoint` feature:
//! ```ignore
//! cargo build-sbf --features bpf-entrypoint
//! ```

// Host builds of the `cdylib` take the panic handler from `std`.
#[cfg(not(any(target_os = "solana", target_arch = "bpf")))]
extern crate std;

pub mod bounds;
#[cfg(feature = "bpf-entrypoint")]
mod entrypoint;
pub mod initialize;
pub mod processor;
pub mod validator;
pub mod writer;

pub use account_writer_sdk::{check_id, id, ID};

/// Maximum number of accounts read by any instruction.
pub const MAX_ACCOUNTS: usize = 3;
