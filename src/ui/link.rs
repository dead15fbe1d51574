use console::Term;

/// Wrap `text` in an OSC 8 terminal hyperlink to `url`
pub fn hyperlink(url: &str, text: &str) -> String {
    format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", url, text)
}

/// Render `url` so it can be clicked in the operator's terminal.
///
/// Falls back to the bare URL when stdout is not a terminal, so piped output
/// stays copyable.
pub fn clickable_link(url: &str) -> String {
    if Term::stdout().is_term() {
        hyperlink(url, url)
    } else {
        url.to_string()
    }
}
