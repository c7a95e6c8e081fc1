//! Extract numbered function descriptions from captioning-model output.

use regex::Regex;
use std::sync::OnceLock;

/// A numbered list line: `3. Print the result`
fn numbered_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s*(.*)$").expect("valid pattern"))
}

/// Collect the text of every numbered line, in order.
/// Lines that don't look like list entries are dropped.
pub fn numbered_tasks(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| numbered_line().captures(line))
        .map(|caps| caps[1].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_numbered_lines_in_order() {
        let text = "1. Parse input\n2. Compute sum\nNote: ignore this\n3. Print result";
        assert_eq!(
            numbered_tasks(text),
            vec!["Parse input", "Compute sum", "Print result"]
        );
    }

    #[test]
    fn strips_number_and_period() {
        assert_eq!(
            numbered_tasks("12. Read the config file"),
            vec!["Read the config file"]
        );
    }

    #[test]
    fn drops_non_matching_lines() {
        let text = "Intro paragraph\n- bullet\n  1. indented does not count\n1) wrong delimiter";
        assert!(numbered_tasks(text).is_empty());
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(numbered_tasks("").is_empty());
    }

    #[test]
    fn number_without_text_yields_empty_task() {
        // "7." still matches the pattern; the capture is just empty
        assert_eq!(numbered_tasks("7."), vec![""]);
    }
}
