//! Output formatting utilities

use colored::Colorize;

/// Print a section header
pub(crate) fn section(title: &str) {
    println!("\n{}", format!("=== {title} ===").cyan().bold());
}

/// Print a key-value pair
pub(crate) fn kv(key: &str, value: impl std::fmt::Display) {
    println!("  {}: {}", key.white().bold(), value);
}

/// Print the headline rating figure, two decimal places
pub(crate) fn rating(value: f32) {
    println!("\n  {}\n", format!("{value:.2}").red().bold());
}

/// Print a commentary line: bold headline, plain message
pub(crate) fn commentary(headline: &str, message: &str) {
    println!("{} {message}", headline.bold());
}
