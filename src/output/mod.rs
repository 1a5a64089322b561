//! Output module for console output and progress.
//!
//! Provides:
//! - Colored console output
//! - A spinner for the running recording

pub mod console;
pub mod progress;

pub use console::{
    print_area, print_banner, print_error, print_info, print_recording_summary, print_success,
    print_warning,
};
pub use progress::create_spinner;
