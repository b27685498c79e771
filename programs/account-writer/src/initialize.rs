//! Creation of program-owned accounts.

use {
    account_writer_sdk::{instruction::InitializeInstruction, WriteError},
    pinocchio_system::create_account_with_minimum_balance,
    solana_account_view::AccountView,
    solana_address::Address,
    solana_program_error::{ProgramError, ProgramResult},
};

/// Accounts of an `Initialize` instruction that passed validation.
pub struct InitializeAccounts<'a> {
    pub account: &'a AccountView,
    pub payer: &'a AccountView,
}

impl<'a> InitializeAccounts<'a> {
    pub fn validate(accounts: &'a [AccountView]) -> Result<Self, ProgramError> {
        let [account, payer, system_program, ..] = accounts else {
            return Err(ProgramError::NotEnoughAccountKeys);
        };

        if !account.is_signer() || !payer.is_signer() {
            return Err(ProgramError::MissingRequiredSignature);
        }

        if !account.is_writable() || !payer.is_writable() {
            return Err(WriteError::NotWritable.into());
        }

        if system_program.address() != &pinocchio_system::ID {
            return Err(ProgramError::IncorrectProgramId);
        }

        Ok(Self { account, payer })
    }
}

/// Size of the new account in bytes.
///
/// A `space` wider than `usize` fails with `OffsetOverflow`: it is the same
/// condition as a write range that cannot be addressed, and it keeps the
/// error codes of both instructions in a single table.
pub fn space(instruction: &InitializeInstruction) -> Result<usize, WriteError> {
    usize::try_from(instruction.space).map_err(|_| WriteError::OffsetOverflow)
}

/// Create a rent-exempt, zero-filled account of `space` bytes owned by
/// `program_id`, funded by the payer.
///
/// An account that already holds lamports is topped up, assigned and
/// allocated instead.
pub fn allocate(
    program_id: &Address,
    accounts: InitializeAccounts,
    space: usize,
) -> ProgramResult {
    create_account_with_minimum_balance(accounts.account, space, program_id, accounts.payer, None)
}
