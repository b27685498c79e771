#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Types shared by the account writer program and the clients that invoke
//! it.
//!
//! The account writer program copies caller-supplied bytes into the data of
//! an account it owns, at a caller-supplied offset. Every write is checked
//! before a single byte is touched: the target must be writable and owned by
//! the program, and the byte range must fit inside the data the account
//! already has. Accounts are never resized by a write.
//!
//! ## Instruction format
//!
//! Instruction data starts with a one byte discriminator followed by a
//! little-endian `u64` argument:
//!
//! ```text
//! +---------------+-----------------+---------------------------+
//! | discriminator | argument (u64)  | payload                   |
//! | 1 byte        | 8 bytes, LE     | remaining bytes           |
//! +---------------+-----------------+---------------------------+
//! ```
//!
//! * [`Write`](instruction::WriteInstruction) (`0`): the argument is the
//!   offset into the target account data; the payload is copied there.
//! * [`Initialize`](instruction::InitializeInstruction) (`1`): the argument
//!   is the size of the account to create; no payload is allowed.
//!
//! To build the instruction data off-chain (requires the `alloc` feature):
//! ```ignore
//! use account_writer_sdk::instruction::WriteInstruction;
//!
//! let data = WriteInstruction {
//!     offset: 10,
//!     payload: &[0xAA, 0xBB, 0xBB],
//! }
//! .pack();
//! ```
//!
//! ## Errors
//!
//! Failures specific to the program are reported as
//! `ProgramError::Custom(code)` where `code` is a [`WriteError`]. Clients can
//! map the code back with `WriteError::try_from(code)`.
//!
//! ## Crate features
//!
//! ### `alloc`
//!
//! The `alloc` feature is enabled by default and adds helpers that return
//! owned instruction data, such as [`instruction::WriteInstruction::pack`].
//!
//! ### `cpi`
//!
//! The `cpi` feature enables the cross-program invocation helpers for
//! programs that want to call the account writer:
//! ```ignore
//! use account_writer_sdk::cpi::Write;
//!
//! Write {
//!     target: &accounts[0],
//!     offset: 0,
//!     payload: b"hello",
//! }
//! .invoke()?;
//! ```

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(feature = "cpi")]
pub mod cpi;
pub mod error;
pub mod instruction;

pub use error::WriteError;

solana_address::declare_id!("GPC3dYY661U9nDQrUfoh3ubxwy4WmzyjddtvQGFuG1bD");
