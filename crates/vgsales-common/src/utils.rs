//! Shared display helpers

/// Formats a sales figure the way the dashboard shows it, e.g. `"82.53M"`.
pub fn format_sales(millions: f64) -> String {
    format!("{millions:.2}M")
}

/// Truncates a label to a maximum length with ellipsis.
///
/// Game titles in the dataset run long enough to crowd category axes.
pub fn truncate_label(input: &str, max_length: usize) -> String {
    if input.chars().count() <= max_length {
        input.to_string()
    } else {
        let keep = max_length.saturating_sub(3);
        let truncated: String = input.chars().take(keep).collect();
        format!("{truncated}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_sales() {
        assert_eq!(format_sales(82.53), "82.53M");
        assert_eq!(format_sales(0.0), "0.00M");
        assert_eq!(format_sales(1.005), "1.00M");
    }

    #[test]
    fn test_truncate_label() {
        let input = "The Legend of Zelda: Ocarina of Time";
        assert_eq!(truncate_label(input, 20), "The Legend of Zel...");

        assert_eq!(truncate_label("Tetris", 20), "Tetris");
        assert_eq!(truncate_label("ab", 2), "ab");
    }
}
