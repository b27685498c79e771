use {
    crate::{processor::process_instruction, MAX_ACCOUNTS},
    pinocchio::{no_allocator, nostd_panic_handler, program_entrypoint},
};

program_entrypoint!(process_instruction, MAX_ACCOUNTS);
no_allocator!();
nostd_panic_handler!();
