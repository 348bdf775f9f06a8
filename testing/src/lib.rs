//! # Admin Console Testing
//!
//! Testing utilities and helpers for the admin console architecture.
//!
//! This crate provides:
//! - Deterministic clock mocks
//! - A fluent `ReducerTest` harness with Given-When-Then syntax
//! - Assertion helpers for effect lists
//!
//! ## Example
//!
//! ```ignore
//! use admin_console_testing::{ReducerTest, assertions, test_clock};
//!
//! ReducerTest::new(SessionReducer::new())
//!     .with_env(test_environment())
//!     .given_state(ConsoleState::default())
//!     .when_action(ConsoleAction::LogoutRequested)
//!     .then_state(|state| {
//!         assert!(state.session.token.is_none());
//!     })
//!     .run();
//! ```

use admin_console_core::environment::Clock;
use chrono::{DateTime, Utc};

pub mod reducer_test;

pub use mocks::{FixedClock, test_clock};
pub use reducer_test::{ReducerTest, assertions};

/// Mock implementations for testing.
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use admin_console_testing::mocks::FixedClock;
    /// use admin_console_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2026-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded timestamp fails to parse, which should never
    /// happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2026-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }
}
