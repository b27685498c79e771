//! Copies a checked payload into the account data.

use {
    crate::bounds::CheckedWrite, account_writer_sdk::WriteError,
    solana_program_error::ProgramResult,
};

/// Copy the payload of `checked` into the target account data.
///
/// The account data is borrowed mutably only for the duration of the copy.
pub fn write(checked: CheckedWrite) -> ProgramResult {
    let mut data = checked.target().account().try_borrow_mut()?;

    // The range was checked against the length of this same account, so the
    // lookup only fails if the data shrank in between.
    let destination = data
        .get_mut(checked.range())
        .ok_or(WriteError::OutOfBounds)?;
    destination.copy_from_slice(checked.payload());

    Ok(())
}
