//! Client-side filtering for lists that are fetched in full.

/// Keeps the items where `term` occurs, ignoring case, in either of the two
/// text fields returned by `fields`.
///
/// A blank term returns every item unchanged.
pub fn filter_local<T, F>(items: &[T], term: &str, fields: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> [&str; 2],
{
    if term.trim().is_empty() {
        return items.to_vec();
    }

    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            fields(*item)
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
