//! Instruction dispatch and the stages each instruction runs through.

use {
    crate::{
        bounds::CheckedWrite,
        initialize::{self, InitializeAccounts},
        validator::WriteTarget,
        writer,
    },
    account_writer_sdk::{
        error::describe,
        instruction::{InitializeInstruction, Instruction, WriteInstruction},
    },
    pinocchio_log::log,
    solana_account_view::AccountView,
    solana_address::Address,
    solana_program_error::{ProgramError, ProgramResult},
};

/// Stages an instruction goes through.
///
/// Stages run in order and none is retried; a failure at any stage ends the
/// instruction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    Decoding,
    Validating,
    BoundsChecking,
    Writing,
    Allocating,
}

impl Stage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Stage::Decoding => "decoding",
            Stage::Validating => "validating",
            Stage::BoundsChecking => "bounds checking",
            Stage::Writing => "writing",
            Stage::Allocating => "allocating",
        }
    }

    /// Pass the result of this stage through, logging a failure.
    #[inline(always)]
    fn run<T, E: Into<ProgramError>>(self, result: Result<T, E>) -> Result<T, ProgramError> {
        result.map_err(|error| {
            let error = error.into();
            log!("Failed while {}: {}", self.as_str(), describe(&error));
            error
        })
    }
}

pub fn process_instruction(
    program_id: &Address,
    accounts: &[AccountView],
    instruction_data: &[u8],
) -> ProgramResult {
    match Stage::Decoding.run(Instruction::unpack(instruction_data))? {
        Instruction::Write(instruction) => process_write(program_id, accounts, &instruction),
        Instruction::Initialize(instruction) => {
            process_initialize(program_id, accounts, &instruction)
        }
    }
}

/// Write the instruction payload into the target account.
pub fn process_write(
    program_id: &Address,
    accounts: &[AccountView],
    instruction: &WriteInstruction,
) -> ProgramResult {
    let target = Stage::Validating.run(WriteTarget::validate(program_id, accounts))?;

    let checked = Stage::BoundsChecking.run(CheckedWrite::new(
        target,
        instruction.offset,
        instruction.payload,
    ))?;

    Stage::Writing.run(writer::write(checked))?;

    log!(
        "Wrote {} bytes at offset {}",
        instruction.payload.len(),
        instruction.offset
    );

    Ok(())
}

/// Create a program-owned account that later writes can target.
pub fn process_initialize(
    program_id: &Address,
    accounts: &[AccountView],
    instruction: &InitializeInstruction,
) -> ProgramResult {
    let accounts = Stage::Validating.run(InitializeAccounts::validate(accounts))?;
    let space = Stage::Validating.run(initialize::space(instruction))?;

    Stage::Allocating.run(initialize::allocate(program_id, accounts, space))?;

    log!("Initialized account with {} bytes", space);

    Ok(())
}
