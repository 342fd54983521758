//! Terminal output helpers for consistent CLI formatting

/// Check if color output is enabled
fn use_color() -> bool {
    std::env::var("NO_COLOR").is_err()
}

/// Print a success message (green checkmark)
pub fn print_success(message: &str) {
    if use_color() {
        println!("\x1b[32m✓\x1b[0m {}", message);
    } else {
        println!("OK: {}", message);
    }
}

/// Print a warning message (yellow)
pub fn print_warning(message: &str) {
    if use_color() {
        eprintln!("\x1b[33mWarning:\x1b[0m {}", message);
    } else {
        eprintln!("Warning: {}", message);
    }
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{}", message);
}

/// Print the per-batch success tally
pub fn print_batch_ok(created: u64, updated: u64, skipped: u64) {
    if use_color() {
        println!("  \x1b[32m✓\x1b[0m {created} created, {updated} updated, {skipped} skipped");
    } else {
        println!("  OK: {created} created, {updated} updated, {skipped} skipped");
    }
}

/// Print a per-batch failure or error tally
pub fn print_batch_failure(message: &str) {
    if use_color() {
        println!("  \x1b[31m✗\x1b[0m {}", message);
    } else {
        println!("  FAILED: {}", message);
    }
}

/// Print a header with decorative border
pub fn print_header(title: &str) {
    let border = "═".repeat(50);
    println!();
    println!("{}", border);
    println!("{:^50}", title);
    println!("{}", border);
}

/// Print a key-value pair with consistent formatting
pub fn print_key_value(key: &str, value: &str) {
    if use_color() {
        println!("  \x1b[1m{}:\x1b[0m {}", key, value);
    } else {
        println!("  {}: {}", key, value);
    }
}
