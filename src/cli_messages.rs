//! CLI command messaging system
//!
//! Consistent one-line output for the `configure` and `reset` commands and
//! for startup warnings.

const INFO: &str = "\x1b[1;33m[INFO]\x1b[0m";
const WARN: &str = "\x1b[1;91m[WARN]\x1b[0m";
const ERROR: &str = "\x1b[1;31m[ERROR]\x1b[0m";
const SUCCESS: &str = "\x1b[1;32m[SUCCESS]\x1b[0m";

/// Tagged title, with details tab-separated when present.
fn tagged_line(tag: &str, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", tag, title)
    } else {
        format!("{} {}\t {}", tag, title, details)
    }
}

/// Neutral progress line, e.g. before `reset` removes the saved settings.
pub fn print_info(title: &str, details: &str) {
    println!("{}", tagged_line(INFO, title, details));
}

/// Recoverable problem, printed to stderr; the command carries on.
pub fn print_warn(title: &str, details: &str) {
    eprintln!("{}", tagged_line(WARN, title, details));
}

/// Fatal problem, printed to stderr before the command exits non-zero.
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{}", tagged_line(ERROR, title, ""));
    if let Some(details) = details {
        eprintln!("{}", tagged_line(ERROR, "Details:", details));
    }
}

pub fn print_success(title: &str, details: &str) {
    println!("{}", tagged_line(SUCCESS, title, details));
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_warn {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_warn($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}
