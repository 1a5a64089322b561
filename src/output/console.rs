//! Console output utilities.

use std::path::Path;

use chrono::NaiveDateTime;
use console::style;

use crate::api::AreaPrefecture;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a success message.
pub fn print_success(message: &str) {
    println!("{} {}", style("OK").green().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════╗
║     rdkdler                           ║
║     radiko time-shift recorder        ║
╚═══════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print what is about to be recorded.
pub fn print_recording_summary(
    station_id: &str,
    from: &NaiveDateTime,
    to: &NaiveDateTime,
    output: &Path,
    premium: bool,
) {
    println!();
    println!("{}", style("Recording:").bold());
    println!("  Station: {}", station_id);
    println!("  From: {}", from);
    println!("  To: {}", to);
    println!("  Output: {}", output.display());
    println!("  Premium: {}", if premium { "yes" } else { "no" });
    println!();
}

/// Print a prefecture with its area id.
pub fn print_area(label: &str, area: AreaPrefecture) {
    println!(
        "  {}: {} ({})",
        style(label).bold(),
        area.kanji_name(),
        area.area_id()
    );
}
