use rand::Rng;

/// Source of random indices for the random-pick endpoints.
///
/// Injected through `AppState` so tests can substitute a deterministic
/// picker instead of the thread-local RNG.
pub trait IndexPicker: Send + Sync {
    /// Pick an index in `0..len`. Callers guarantee `len > 0`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Production picker backed by the thread-local RNG.
#[derive(Debug, Default)]
pub struct ThreadRngPicker;

impl IndexPicker for ThreadRngPicker {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

/// Always picks the same index (clamped to the collection), for tests.
#[cfg(test)]
pub struct FixedPicker(pub usize);

#[cfg(test)]
impl IndexPicker for FixedPicker {
    fn pick_index(&self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}
