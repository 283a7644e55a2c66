//! Shared helper utilities for factory methods.

/// Counter for generating unique values in tests.
///
/// Unique columns (user email, catalog name) are derived from this counter so that
/// factories can be called repeatedly within one database.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}
