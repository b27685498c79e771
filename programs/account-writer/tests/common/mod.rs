#![allow(dead_code)]

use {
    solana_account_view::{AccountView, RuntimeAccount, NOT_BORROWED},
    solana_address::Address,
    std::mem::size_of,
};

/// Offset of the account data in the runtime input: the `RuntimeAccount`
/// header is followed directly by the data.
const DATA_OFFSET: usize = size_of::<RuntimeAccount>();

/// An account laid out in host memory the way the runtime serializes it.
pub struct TestAccount {
    // 8-bytes aligned backing memory.
    memory: Vec<u64>,
    data_len: usize,
}

impl TestAccount {
    pub fn new(address: Address, owner: &Address, data: &[u8]) -> Self {
        debug_assert_eq!(DATA_OFFSET, 88);

        let words = (DATA_OFFSET + data.len()).div_ceil(size_of::<u64>());
        let mut account = Self {
            memory: vec![0u64; words],
            data_len: data.len(),
        };

        let bytes = account.bytes_mut();
        // (borrow_state, signer, writable, executable and padding)
        bytes[0] = NOT_BORROWED;
        bytes[2] = 1;
        // address
        bytes[8..40].copy_from_slice(address.as_ref());
        // owner
        bytes[40..72].copy_from_slice(owner.as_ref());
        // lamports
        bytes[72..80].copy_from_slice(&1_000_000u64.to_le_bytes());
        // data_len
        bytes[80..88].copy_from_slice(&(data.len() as u64).to_le_bytes());
        bytes[DATA_OFFSET..DATA_OFFSET + data.len()].copy_from_slice(data);

        account
    }

    /// A zero-filled account of `len` bytes.
    pub fn zeroed(owner: &Address, len: usize) -> Self {
        Self::new(unique_address(), owner, &vec![0; len])
    }

    pub fn read_only(mut self) -> Self {
        self.bytes_mut()[2] = 0;
        self
    }

    pub fn signer(mut self) -> Self {
        self.bytes_mut()[1] = 1;
        self
    }

    pub fn with_lamports(mut self, lamports: u64) -> Self {
        self.bytes_mut()[72..80].copy_from_slice(&lamports.to_le_bytes());
        self
    }

    /// Current account data.
    pub fn data(&self) -> &[u8] {
        &self.bytes()[DATA_OFFSET..DATA_OFFSET + self.data_len]
    }

    /// View of the account as the program receives it.
    ///
    /// The view points into `self`, which must outlive it.
    pub fn view(&mut self) -> AccountView {
        let raw = self.memory.as_mut_ptr() as *mut RuntimeAccount;
        // SAFETY: `AccountView` is a wrapper over a pointer to the
        // `RuntimeAccount`, which `memory` holds followed by the data.
        unsafe { core::mem::transmute::<*mut RuntimeAccount, AccountView>(raw) }
    }

    fn bytes(&self) -> &[u8] {
        // SAFETY: `memory` is valid for `len * 8` bytes.
        unsafe {
            core::slice::from_raw_parts(
                self.memory.as_ptr() as *const u8,
                self.memory.len() * size_of::<u64>(),
            )
        }
    }

    fn bytes_mut(&mut self) -> &mut [u8] {
        // SAFETY: `memory` is valid for `len * 8` bytes.
        unsafe {
            core::slice::from_raw_parts_mut(
                self.memory.as_mut_ptr() as *mut u8,
                self.memory.len() * size_of::<u64>(),
            )
        }
    }
}

/// A distinct address on every call.
pub fn unique_address() -> Address {
    use std::sync::atomic::{AtomicU64, Ordering};

    static NEXT: AtomicU64 = AtomicU64::new(1);

    let mut bytes = [0u8; 32];
    bytes[..8].copy_from_slice(&NEXT.fetch_add(1, Ordering::Relaxed).to_le_bytes());
    Address::new_from_array(bytes)
}
