//! Terminal output for the strkey commands
//!
//! Status lines go to stderr except `success`; report fields go to stdout as
//! aligned `label: value` rows.

use colored::Colorize;

/// Column the values of a report start at; fits the longest field label.
const LABEL_WIDTH: usize = "Payload Length".len();

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print a warning message
pub fn warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow().bold(), message);
}

/// Print a report title
pub fn header(text: &str) {
    println!("\n{}", text.bold().underline());
}

/// Print one report field
pub fn key_value(key: &str, value: &str) {
    println!("  {} {}", label(key).cyan(), value);
}

/// Print a field holding secret material, flagged so it stands out in a scrollback
pub fn secret_value(key: &str, value: &str) {
    println!(
        "  {} {} {}",
        label(key).cyan(),
        value.red(),
        "(secret)".dimmed()
    );
}

/// `key:` padded to the value column. Padding is applied before colouring so
/// escape codes do not skew the alignment.
fn label(key: &str) -> String {
    format!("{:<width$}", format!("{key}:"), width = LABEL_WIDTH + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_align_values() {
        assert_eq!(label("Seed"), "Seed:          ");
        assert_eq!(label("Payload Length"), "Payload Length:");
        assert_eq!(label("Version").len(), label("Account").len());
    }

    #[test]
    fn test_long_label_is_not_truncated() {
        assert_eq!(label("Unusually Long Label"), "Unusually Long Label:");
    }
}
