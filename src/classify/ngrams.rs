// Contiguous n-gram windows over a token sequence.

/// Every run of `n` adjacent tokens, joined with a single space so it can be
/// looked up directly against multi-word corpus phrases.
///
/// Yields nothing when there are fewer than `n` tokens, or when `n` is 0.
pub fn ngrams(tokens: &[String], n: usize) -> impl Iterator<Item = String> + '_ {
    let windows = if n == 0 {
        tokens[..0].windows(1)
    } else {
        tokens.windows(n)
    };
    windows.map(|window| window.join(" "))
}
