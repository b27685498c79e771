mod common;

use {
    account_writer_program::{processor::process_instruction, ID},
    account_writer_sdk::{instruction::InitializeInstruction, WriteError},
    common::{unique_address, TestAccount},
    solana_address::Address,
    solana_program_error::ProgramError,
};

const SYSTEM_PROGRAM: Address = Address::new_from_array([0; 32]);

struct Accounts {
    account: TestAccount,
    payer: TestAccount,
    system_program: TestAccount,
}

impl Accounts {
    fn new() -> Self {
        Self {
            account: TestAccount::zeroed(&SYSTEM_PROGRAM, 0).signer().with_lamports(0),
            payer: TestAccount::zeroed(&SYSTEM_PROGRAM, 0).signer(),
            system_program: TestAccount::new(SYSTEM_PROGRAM, &unique_address(), &[]).read_only(),
        }
    }

    fn initialize(&mut self, space: u64) -> Result<(), ProgramError> {
        let data = InitializeInstruction { space }.pack();
        process_instruction(
            &ID,
            &[
                self.account.view(),
                self.payer.view(),
                self.system_program.view(),
            ],
            &data,
        )
    }
}

#[test]
fn test_system_program_id() {
    assert_eq!(pinocchio_system::ID, SYSTEM_PROGRAM);
}

#[test]
fn test_missing_accounts() {
    let mut accounts = Accounts::new();
    let data = InitializeInstruction { space: 64 }.pack();

    assert_eq!(
        process_instruction(
            &ID,
            &[accounts.account.view(), accounts.payer.view()],
            &data
        ),
        Err(ProgramError::NotEnoughAccountKeys)
    );
}

#[test]
fn test_new_account_must_sign() {
    let mut accounts = Accounts::new();
    accounts.account = TestAccount::zeroed(&SYSTEM_PROGRAM, 0);

    assert_eq!(
        accounts.initialize(64),
        Err(ProgramError::MissingRequiredSignature)
    );
}

#[test]
fn test_payer_must_sign() {
    let mut accounts = Accounts::new();
    accounts.payer = TestAccount::zeroed(&SYSTEM_PROGRAM, 0);

    assert_eq!(
        accounts.initialize(64),
        Err(ProgramError::MissingRequiredSignature)
    );
}

#[test]
fn test_new_account_must_be_writable() {
    let mut accounts = Accounts::new();
    accounts.account = TestAccount::zeroed(&SYSTEM_PROGRAM, 0)
        .signer()
        .read_only();

    assert_eq!(
        accounts.initialize(64),
        Err(ProgramError::from(WriteError::NotWritable))
    );
}

#[test]
fn test_wrong_system_program() {
    let mut accounts = Accounts::new();
    accounts.system_program = TestAccount::zeroed(&SYSTEM_PROGRAM, 0).read_only();

    assert_eq!(
        accounts.initialize(64),
        Err(ProgramError::IncorrectProgramId)
    );
}

#[test]
fn test_space_must_fit_address_width() {
    // Every `u64` fits on 64-bit targets.
    if usize::BITS < u64::BITS {
        let mut accounts = Accounts::new();

        assert_eq!(
            accounts.initialize(u64::MAX),
            Err(ProgramError::from(WriteError::OffsetOverflow))
        );
    }
}

#[test]
fn test_trailing_bytes_are_malformed() {
    let mut accounts = Accounts::new();
    let mut data = InitializeInstruction { space: 64 }.pack();
    data.extend_from_slice(&[0; 4]);

    assert_eq!(
        process_instruction(
            &ID,
            &[
                accounts.account.view(),
                accounts.payer.view(),
                accounts.system_program.view(),
            ],
            &data
        ),
        Err(ProgramError::from(WriteError::MalformedInstruction))
    );
}
