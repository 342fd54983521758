//! Terminal output helpers for consistent CLI formatting

mod printer;

pub use printer::{
    print_batch_failure, print_batch_ok, print_header, print_info, print_key_value, print_success,
    print_warning,
};
