/// Canonicalize raw review text for classifier input.
///
/// Lowercases, drops everything that is not a word character or whitespace,
/// collapses whitespace runs to single spaces, and trims. Total over strings,
/// deterministic, and idempotent; the result may be empty (the classifier
/// handles empty input, rejecting it is the caller's job).
///
/// Only the classifier ever sees this form — persisted reviews keep the raw
/// text.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.to_lowercase().chars() {
        if c.is_whitespace() {
            pending_space = true;
        } else if c.is_alphanumeric() || c == '_' {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        }
        // Punctuation and symbols are dropped entirely
    }

    out
}
