//! Target account validation.

use {
    account_writer_sdk::WriteError, solana_account_view::AccountView, solana_address::Address,
    solana_program_error::ProgramError,
};

/// Position of the target account in the accounts list.
pub const TARGET_ACCOUNT_INDEX: usize = 0;

/// An account that passed validation and may be written to.
///
/// Only [`WriteTarget::validate`] creates values of this type.
pub struct WriteTarget<'a> {
    account: &'a AccountView,
}

impl<'a> WriteTarget<'a> {
    /// Select the target account and check that it is writable and owned by
    /// `program_id`.
    ///
    /// The writable check runs first, so a read-only account owned by
    /// another program fails with [`WriteError::NotWritable`].
    pub fn validate(
        program_id: &Address,
        accounts: &'a [AccountView],
    ) -> Result<Self, ProgramError> {
        let account = accounts
            .get(TARGET_ACCOUNT_INDEX)
            .ok_or(ProgramError::NotEnoughAccountKeys)?;

        if !account.is_writable() {
            return Err(WriteError::NotWritable.into());
        }

        if !account.owned_by(program_id) {
            return Err(WriteError::InvalidOwner.into());
        }

        Ok(Self { account })
    }

    #[inline(always)]
    pub fn account(&self) -> &'a AccountView {
        self.account
    }

    /// Current length of the account data.
    #[inline(always)]
    pub fn data_len(&self) -> usize {
        self.account.data_len()
    }
}
