//! Shared test utilities for domain testing
//!
//! - `TestMongo`: MongoDB container with automatic cleanup (feature: "mongo")
//! - `TestDataBuilder`: Deterministic test data generation (always available)
//! - `assertions`: Custom assertion helpers (always available)
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDataBuilder, TestMongo};
//!
//! #[tokio::test]
//! async fn my_mongo_test() {
//!     let mongo = TestMongo::new().await;
//!     let builder = TestDataBuilder::from_test_name("my_test");
//!
//!     let db = mongo.database(&builder.database_name());
//!     let dates = builder.candidate_dates(3);
//! }
//! ```

#[cfg(feature = "mongo")]
mod mongo;

#[cfg(feature = "mongo")]
pub use mongo::TestMongo;

/// Builder for test data with deterministic values
///
/// The same seed always yields the same names and dates, so failures are
/// reproducible.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (seed is the hash of the name)
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_event");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Unique name for a test resource
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("event", "main"), "test-event-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Participant name
    pub fn user_name(&self, suffix: &str) -> String {
        self.name("user", suffix)
    }

    /// Database name isolating one test's collections
    pub fn database_name(&self) -> String {
        format!("test_{}", self.seed)
    }

    /// `count` consecutive midnight-UTC dates in ISO-8601 form, starting on a
    /// seed-dependent day of January 2025.
    pub fn candidate_dates(&self, count: usize) -> Vec<String> {
        let start = (self.seed % 20) as usize + 1;
        (0..count)
            .map(|offset| {
                let day = start + offset;
                let (month, day) = (1 + (day - 1) / 28, (day - 1) % 28 + 1);
                format!("2025-{:02}-{:02}T00:00:00.000Z", month, day)
            })
            .collect()
    }
}

/// Test assertion helpers
pub mod assertions {
    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert that `id` looks like a store-assigned ObjectId (24 hex chars)
    pub fn assert_object_id(id: &str, context: &str) {
        assert!(
            id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit()),
            "{}: expected a 24-char hex id, got {:?}",
            context,
            id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_builder_deterministic() {
        let builder1 = TestDataBuilder::new(42);
        let builder2 = TestDataBuilder::new(42);

        assert_eq!(builder1.name("event", "test"), builder2.name("event", "test"));
        assert_eq!(builder1.candidate_dates(3), builder2.candidate_dates(3));
    }

    #[test]
    fn test_data_builder_different_names() {
        let builder1 = TestDataBuilder::from_test_name("test1");
        let builder2 = TestDataBuilder::from_test_name("test2");

        assert_ne!(builder1.database_name(), builder2.database_name());
    }

    #[test]
    fn test_candidate_dates_are_ordered_and_distinct() {
        let dates = TestDataBuilder::new(19).candidate_dates(15);
        assert_eq!(dates.len(), 15);
        assert!(dates.windows(2).all(|w| w[0] < w[1]));
        assert!(dates.iter().all(|d| d.ends_with("T00:00:00.000Z")));
    }

    #[test]
    fn test_assert_object_id_accepts_hex() {
        assertions::assert_object_id("65a1f0c2e4b0a1b2c3d4e5f6", "hex id");
    }
}
