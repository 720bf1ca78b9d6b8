//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

/// Trim the root import path out of a package name.
///
/// Only paths strictly longer than `root` are touched. The first occurrence
/// of `root` is removed wherever it appears, then surrounding `/` are
/// trimmed.
pub fn shorten<'a>(name: &'a str, root: &str) -> std::borrow::Cow<'a, str> {
    if name.len() <= root.len() {
        return name.into();
    }
    let replaced = name.replacen(root, "", 1);
    replaced.trim_matches('/').to_string().into()
}
