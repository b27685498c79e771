//! Instruction data encoding.

use {
    crate::error::WriteError, core::mem::MaybeUninit, solana_program_error::ProgramError,
};
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Length of the fixed part of the instruction data: discriminator and the
/// `u64` argument.
pub const HEADER_LEN: usize = 1 + core::mem::size_of::<u64>();

#[inline(always)]
fn write_bytes(destination: &mut [MaybeUninit<u8>], source: &[u8]) {
    let len = destination.len().min(source.len());
    // SAFETY:
    // - Both pointers have alignment 1.
    // - For valid (non-UB) references, the borrow checker guarantees no overlap.
    // - `len` is bounded by both slice lengths.
    unsafe {
        core::ptr::copy_nonoverlapping(source.as_ptr(), destination.as_mut_ptr() as *mut u8, len);
    }
}

/// Encode the fixed part of the instruction data into `data`.
#[inline(always)]
fn write_header(data: &mut [MaybeUninit<u8>], discriminator: u8, argument: u64) {
    // discriminator
    data[0].write(discriminator);
    // offset or space
    write_bytes(&mut data[1..HEADER_LEN], &argument.to_le_bytes());
}

/// Instructions understood by the program.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Instruction<'a> {
    Write(WriteInstruction<'a>),
    Initialize(InitializeInstruction),
}

impl<'a> Instruction<'a> {
    /// Decode instruction data.
    ///
    /// The returned instruction borrows its payload from `data`.
    pub fn unpack(data: &'a [u8]) -> Result<Self, WriteError> {
        let (&discriminator, rest) = data
            .split_first()
            .ok_or(WriteError::MalformedInstruction)?;
        let (argument, payload) = rest
            .split_first_chunk::<8>()
            .ok_or(WriteError::MalformedInstruction)?;
        let argument = u64::from_le_bytes(*argument);

        match discriminator {
            WriteInstruction::DISCRIMINATOR => Ok(Instruction::Write(WriteInstruction {
                offset: argument,
                payload,
            })),
            InitializeInstruction::DISCRIMINATOR if payload.is_empty() => {
                Ok(Instruction::Initialize(InitializeInstruction { space: argument }))
            }
            _ => Err(WriteError::MalformedInstruction),
        }
    }
}

/// Copy `payload` into the data of the target account at `offset`.
///
/// Accounts expected by this instruction:
///
///   0. `[writable]` The target account, owned by the program.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WriteInstruction<'a> {
    /// Byte position in the target account data where the write starts.
    pub offset: u64,

    /// Bytes to write.
    pub payload: &'a [u8],
}

impl WriteInstruction<'_> {
    pub const DISCRIMINATOR: u8 = 0;

    /// Length of the encoded instruction data.
    #[inline(always)]
    pub fn packed_len(&self) -> usize {
        HEADER_LEN + self.payload.len()
    }

    /// Encode the instruction into the start of `data`.
    ///
    /// Returns the number of bytes written, or `InvalidArgument` when `data`
    /// is shorter than [`packed_len`](Self::packed_len).
    pub fn pack_into(&self, data: &mut [MaybeUninit<u8>]) -> Result<usize, ProgramError> {
        let len = self.packed_len();
        let data = data.get_mut(..len).ok_or(ProgramError::InvalidArgument)?;

        write_header(data, Self::DISCRIMINATOR, self.offset);
        // payload
        write_bytes(&mut data[HEADER_LEN..], self.payload);

        Ok(len)
    }

    #[cfg(feature = "alloc")]
    pub fn pack(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.packed_len());
        if let Ok(len) = self.pack_into(data.spare_capacity_mut()) {
            // SAFETY: `pack_into` initialized the first `len` bytes.
            unsafe { data.set_len(len) };
        }
        data
    }
}

/// Create a zero-filled account of `space` bytes owned by the program.
///
/// Accounts expected by this instruction:
///
///   0. `[writable, signer]` The new account.
///   1. `[writable, signer]` The funding account.
///   2. `[]` The system program.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InitializeInstruction {
    /// Size of the account data in bytes.
    pub space: u64,
}

impl InitializeInstruction {
    pub const DISCRIMINATOR: u8 = 1;

    /// Length of the encoded instruction data.
    pub const LEN: usize = HEADER_LEN;

    /// Encode the instruction into the start of `data`.
    pub fn pack_into(&self, data: &mut [MaybeUninit<u8>]) -> Result<usize, ProgramError> {
        let data = data
            .get_mut(..Self::LEN)
            .ok_or(ProgramError::InvalidArgument)?;
        write_header(data, Self::DISCRIMINATOR, self.space);
        Ok(Self::LEN)
    }

    #[cfg(feature = "alloc")]
    pub fn pack(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(Self::LEN);
        if let Ok(len) = self.pack_into(data.spare_capacity_mut()) {
            // SAFETY: `pack_into` initialized the first `len` bytes.
            unsafe { data.set_len(len) };
        }
        data
    }
}
