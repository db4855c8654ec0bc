/// Splits `text` into lines on `\n`.
///
/// A terminating newline does not open an extra empty line, and empty input
/// has no lines at all. When `strip_carriage_returns` is set, one trailing
/// `\r` is removed from each line so CRLF input classifies like LF input.
pub fn split_lines(text: &str, strip_carriage_returns: bool) -> Vec<&str> {
    if text.is_empty() {
        return vec![];
    }

    let body = text.strip_suffix('\n').unwrap_or(text);

    body.split('\n')
        .map(|line| {
            if strip_carriage_returns {
                line.strip_suffix('\r').unwrap_or(line)
            } else {
                line
            }
        })
        .collect()
}
