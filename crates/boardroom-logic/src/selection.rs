//! Parsing of free-text roster selections like `"1, 3 5"`.

/// Parse a 1-based index list into sorted, de-duplicated, in-range
/// 0-based indices.
///
/// Tokens may be separated by commas and/or whitespace. Tokens that are
/// not numbers, are zero, or point outside the roster are dropped
/// silently rather than failing the whole input.
pub fn parse_selection(input: &str, roster_len: usize) -> Vec<usize> {
    let mut picked: Vec<usize> = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<usize>().ok())
        .filter(|&n| n >= 1 && n <= roster_len)
        .map(|n| n - 1)
        .collect();
    picked.sort_unstable();
    picked.dedup();
    picked
}
