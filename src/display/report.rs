//! Report formatting utilities for terminal output

use crate::models::Milliunits;

/// Format an amount with the given symbol, red when negative
pub fn format_money_colored(amount: Milliunits, symbol: &str) -> String {
    let text = amount.format_with_symbol(symbol);
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", text) // Red for negative
    } else {
        text
    }
}

/// A heading followed by a dashed underline of the same width
pub fn underlined(title: &str) -> String {
    format!("{}\n{}\n", title, "-".repeat(title.chars().count()))
}

/// Join names for a single report line
pub fn join_names<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_underlined_matches_title_width() {
        assert_eq!(underlined("Risk"), "Risk\n----\n");
        assert_eq!(underlined("£ due"), "£ due\n-----\n");
    }

    #[test]
    fn test_colored_negative() {
        let text = format_money_colored(Milliunits::new(-1000), "£");
        assert!(text.starts_with("\x1b[31m"));
        assert!(text.contains("-£1.00"));
        assert_eq!(format_money_colored(Milliunits::new(1000), "£"), "£1.00");
    }

    #[test]
    fn test_join_names() {
        assert_eq!(join_names(&["A", "B"]), "A, B");
        assert_eq!(join_names::<&str>(&[]), "");
    }
}
