use solana_program_error::ProgramError;

/// Errors returned by the account writer program.
///
/// Each variant is reported to the runtime as `ProgramError::Custom` with the
/// variant's discriminant as the code.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum WriteError {
    /// The instruction data cannot be decoded.
    MalformedInstruction = 0,

    /// The target account is not writable.
    NotWritable = 1,

    /// The target account is not owned by the program.
    InvalidOwner = 2,

    /// `offset + length` cannot be represented in the address width.
    OffsetOverflow = 3,

    /// `offset + length` exceeds the account data.
    OutOfBounds = 4,
}

impl WriteError {
    /// Short description used in program logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            WriteError::MalformedInstruction => "malformed instruction",
            WriteError::NotWritable => "account not writable",
            WriteError::InvalidOwner => "account not owned by program",
            WriteError::OffsetOverflow => "offset overflow",
            WriteError::OutOfBounds => "write out of bounds",
        }
    }
}

impl From<WriteError> for ProgramError {
    fn from(error: WriteError) -> Self {
        ProgramError::Custom(error as u32)
    }
}

impl TryFrom<u32> for WriteError {
    type Error = ProgramError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(WriteError::MalformedInstruction),
            1 => Ok(WriteError::NotWritable),
            2 => Ok(WriteError::InvalidOwner),
            3 => Ok(WriteError::OffsetOverflow),
            4 => Ok(WriteError::OutOfBounds),
            _ => Err(ProgramError::InvalidArgument),
        }
    }
}

/// Describe a program error for logging.
///
/// Custom codes are resolved to [`WriteError`] descriptions; the runtime
/// errors the program can surface get their own wording.
pub fn describe(error: &ProgramError) -> &'static str {
    match error {
        ProgramError::Custom(code) => match WriteError::try_from(*code) {
            Ok(error) => error.as_str(),
            Err(_) => "unknown custom error",
        },
        ProgramError::NotEnoughAccountKeys => "not enough account keys",
        ProgramError::AccountBorrowFailed => "account data already borrowed",
        ProgramError::MissingRequiredSignature => "missing required signature",
        ProgramError::IncorrectProgramId => "incorrect program id",
        ProgramError::InvalidArgument => "invalid argument",
        _ => "runtime error",
    }
}
