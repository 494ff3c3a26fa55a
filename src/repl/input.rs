//! Input normalisation for REPL lines.

/// Lowercases `text` and splits it into words on any run of whitespace.
pub fn clean_input(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}
