/// Length of the longest common prefix of two byte strings.
pub fn common_prefix(xs: &[u8], ys: &[u8]) -> usize {
    Iterator::zip(xs.iter(), ys.iter())
        .take_while(|(&x, &y)| x == y)
        .count()
}

/// Truncates a byte string to at most `max` bytes.
pub fn truncate(s: &[u8], max: usize) -> &[u8] {
    &s[..Ord::min(s.len(), max)]
}
