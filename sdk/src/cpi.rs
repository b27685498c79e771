//! Cross-program invocation helpers.

use {
    crate::instruction::{InitializeInstruction, WriteInstruction, HEADER_LEN},
    core::{mem::MaybeUninit, slice::from_raw_parts},
    solana_account_view::AccountView,
    solana_instruction_view::{
        cpi::{invoke_signed_with_bounds, Signer},
        InstructionAccount, InstructionView,
    },
    solana_program_error::{ProgramError, ProgramResult},
};

/// Maximum payload accepted by [`Write`].
///
/// The instruction data is assembled on the stack, so the payload is capped
/// well below the runtime's CPI instruction data limit.
pub const MAX_CPI_PAYLOAD_LEN: usize = 1024;

const UNINIT_BYTE: MaybeUninit<u8> = MaybeUninit::<u8>::uninit();

/// Write bytes into an account owned by the account writer program.
///
/// Accounts expected by this instruction:
///
///   0. `[writable]` The target account.
pub struct Write<'a, 'b> {
    /// The target account.
    pub target: &'a AccountView,

    /// Byte position in the target account data.
    pub offset: u64,

    /// Bytes to write.
    pub payload: &'b [u8],
}

impl Write<'_, '_> {
    #[inline(always)]
    pub fn invoke(&self) -> ProgramResult {
        self.invoke_signed(&[])
    }

    pub fn invoke_signed(&self, signers: &[Signer]) -> ProgramResult {
        if self.payload.len() > MAX_CPI_PAYLOAD_LEN {
            return Err(ProgramError::InvalidArgument);
        }

        // Instruction accounts.

        let instruction_accounts = [InstructionAccount::writable(self.target.address())];

        // Instruction data.

        let mut instruction_data = [UNINIT_BYTE; HEADER_LEN + MAX_CPI_PAYLOAD_LEN];
        let data_len = WriteInstruction {
            offset: self.offset,
            payload: self.payload,
        }
        .pack_into(&mut instruction_data)?;

        let instruction = InstructionView {
            program_id: &crate::ID,
            accounts: &instruction_accounts,
            // SAFETY: the first `data_len` bytes are initialized.
            data: unsafe { from_raw_parts(instruction_data.as_ptr() as _, data_len) },
        };

        invoke_signed_with_bounds::<1>(&instruction, &[self.target], signers)
    }
}

/// Create a zero-filled account owned by the account writer program.
///
/// Accounts expected by this instruction:
///
///   0. `[writable, signer]` The new account.
///   1. `[writable, signer]` The funding account.
///   2. `[]` The system program.
pub struct Initialize<'a> {
    /// The new account.
    pub account: &'a AccountView,

    /// The funding account.
    pub payer: &'a AccountView,

    /// The system program.
    pub system_program: &'a AccountView,

    /// Size of the account data in bytes.
    pub space: u64,
}

impl Initialize<'_> {
    #[inline(always)]
    pub fn invoke(&self) -> ProgramResult {
        self.invoke_signed(&[])
    }

    pub fn invoke_signed(&self, signers: &[Signer]) -> ProgramResult {
        // Instruction accounts.

        let instruction_accounts = [
            InstructionAccount::writable_signer(self.account.address()),
            InstructionAccount::writable_signer(self.payer.address()),
            InstructionAccount::readonly(self.system_program.address()),
        ];

        // Instruction data.

        let mut instruction_data = [UNINIT_BYTE; InitializeInstruction::LEN];
        let data_len = InitializeInstruction { space: self.space }.pack_into(&mut instruction_data)?;

        let instruction = InstructionView {
            program_id: &crate::ID,
            accounts: &instruction_accounts,
            // SAFETY: the first `data_len` bytes are initialized.
            data: unsafe { from_raw_parts(instruction_data.as_ptr() as _, data_len) },
        };

        invoke_signed_with_bounds::<3>(
            &instruction,
            &[self.account, self.payer, self.system_program],
            signers,
        )
    }
}
