use catalog_core::entities::Item;

/// The first `limit` items, cloned for a response body.
#[must_use]
pub fn take_limited(items: &[Item], limit: usize) -> Vec<Item> {
    items.iter().take(limit).cloned().collect()
}

/// Saturating `usize` to `u32` for response counters.
#[must_use]
pub fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}
