//! Bounds checking of writes against the account data.

use {
    crate::validator::WriteTarget, account_writer_sdk::WriteError, core::ops::Range,
    pinocchio::hint::unlikely,
};

/// Compute the byte range `[offset, offset + len)` and check that it fits in
/// `data_len` bytes.
///
/// Returns [`WriteError::OffsetOverflow`] when the offset does not fit the
/// address width or the end of the range overflows, and
/// [`WriteError::OutOfBounds`] when the range ends past `data_len`.
#[inline]
pub fn check_range(data_len: usize, offset: u64, len: usize) -> Result<Range<usize>, WriteError> {
    let start = usize::try_from(offset).map_err(|_| WriteError::OffsetOverflow)?;
    let end = start.checked_add(len).ok_or(WriteError::OffsetOverflow)?;

    // `start <= end` holds, so this also covers `start > data_len`.
    if unlikely(end > data_len) {
        return Err(WriteError::OutOfBounds);
    }

    Ok(start..end)
}

/// A write whose range was checked against a validated target.
pub struct CheckedWrite<'a, 'b> {
    target: WriteTarget<'a>,
    range: Range<usize>,
    payload: &'b [u8],
}

impl<'a, 'b> CheckedWrite<'a, 'b> {
    /// Check that `payload` fits in the target data at `offset`.
    pub fn new(
        target: WriteTarget<'a>,
        offset: u64,
        payload: &'b [u8],
    ) -> Result<Self, WriteError> {
        let range = check_range(target.data_len(), offset, payload.len())?;

        Ok(Self {
            target,
            range,
            payload,
        })
    }

    #[inline(always)]
    pub fn target(&self) -> &WriteTarget<'a> {
        &self.target
    }

    /// Byte range that the payload will occupy.
    #[inline(always)]
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    #[inline(always)]
    pub fn payload(&self) -> &'b [u8] {
        self.payload
    }
}
