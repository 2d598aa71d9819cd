//! Round-robin credential selection.

/// Pick the key for call number `counter` and return the next counter.
///
/// Returns `None` for an empty pool.
///
/// ```
/// use gazette_models::rotate;
///
/// let pool = vec!["a".to_string(), "b".to_string()];
/// assert_eq!(rotate(&pool, 0), Some(("a", 1)));
/// assert_eq!(rotate(&pool, 1), Some(("b", 2)));
/// assert_eq!(rotate(&pool, 2), Some(("a", 3)));
/// assert_eq!(rotate(&[], 5), None);
/// ```
pub fn rotate(pool: &[String], counter: usize) -> Option<(&str, usize)> {
    if pool.is_empty() {
        return None;
    }
    Some((pool[counter % pool.len()].as_str(), counter.wrapping_add(1)))
}
