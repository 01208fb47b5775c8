use crate::storage::StoreError;
use tracing::info;

/// The smash counter: a single non-negative integer with process lifetime.
#[derive(Debug, Default)]
pub struct SmashCounter {
    value: i64,
}

impl SmashCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one and return the new total.
    pub fn increment(&mut self) -> i64 {
        self.value += 1;
        self.value
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    /// Overwrite the counter. Negative values are rejected before any
    /// mutation happens.
    pub fn set(&mut self, value: i64) -> Result<i64, StoreError> {
        if value < 0 {
            return Err(StoreError::InvalidInput(
                "Valid non-negative number required".to_string(),
            ));
        }
        self.value = value;
        info!(smashes = value, "Counter set");
        Ok(self.value)
    }

    /// Zero the counter, returning `(previous, new)`.
    pub fn reset(&mut self) -> (i64, i64) {
        let previous = self.value;
        self.value = 0;
        info!(previous, "Counter reset");
        (previous, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_counts_up_from_zero() {
        let mut counter = SmashCounter::new();
        for expected in 1i64..=5 {
            assert_eq!(counter.increment(), expected);
        }
        assert_eq!(counter.value(), 5);
    }

    #[test]
    fn set_overwrites_rather_than_adds() {
        let mut counter = SmashCounter::new();
        counter.increment();
        assert_eq!(counter.set(10).unwrap(), 10);
        assert_eq!(counter.value(), 10);
        assert_eq!(counter.set(0).unwrap(), 0);
    }

    #[test]
    fn negative_set_is_rejected_and_leaves_value_unchanged() {
        let mut counter = SmashCounter::new();
        counter.set(7).unwrap();

        let err = counter.set(-1).unwrap_err();
        assert!(matches!(err, StoreError::InvalidInput(_)));
        assert_eq!(counter.value(), 7);
    }

    #[test]
    fn reset_reports_the_previous_value() {
        let mut counter = SmashCounter::new();
        counter.set(42).unwrap();
        assert_eq!(counter.reset(), (42, 0));
        assert_eq!(counter.reset(), (0, 0));
    }
}
