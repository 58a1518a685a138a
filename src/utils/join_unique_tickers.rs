use std::collections::BTreeSet;

/// Deduplicates ticker values by exact equality, sorts them ascending and joins them with
/// `delimiter`.
///
/// ### Example:
/// ```rust
/// use listing_dedupe::join_unique_tickers;
///
/// let tickers = ["ONE:CN", "DFK:GR", "OCQLF:US", "ONE:CN"];
/// assert_eq!(
///     join_unique_tickers(tickers, ", "),
///     "DFK:GR, OCQLF:US, ONE:CN"
/// );
/// ```
pub fn join_unique_tickers<'a, I>(tickers: I, delimiter: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    tickers
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>()
        .join(delimiter)
}
