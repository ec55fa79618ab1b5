/// Splits a compound quota header on any of `delimiters`. Runs of delimiters
/// collapse, so no token is empty.
pub(crate) fn tokenize_quota_header<'a>(header: &'a str, delimiters: &[char]) -> Vec<&'a str> {
    header
        .split(|c: char| delimiters.contains(&c))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}
