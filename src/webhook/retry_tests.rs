//! Tests for `RetryPolicy`.

use super::RetryPolicy;
use std::time::Duration;

mod retry_policy_defaults {
    use super::*;

    #[test]
    fn new_creates_policy_with_defaults() {
        let policy = RetryPolicy::new();

        assert_eq!(policy.safety_margin, RetryPolicy::DEFAULT_SAFETY_MARGIN);
        assert_eq!(policy.max_rate_limit_retries, None);
    }

    #[test]
    fn default_trait_matches_new() {
        assert_eq!(RetryPolicy::new(), RetryPolicy::default());
    }

    #[test]
    fn default_safety_margin_is_1_second() {
        assert_eq!(RetryPolicy::DEFAULT_SAFETY_MARGIN, Duration::from_secs(1));
    }
}

mod retry_policy_builder {
    use super::*;

    #[test]
    fn with_safety_margin_sets_value() {
        let policy = RetryPolicy::new().with_safety_margin(Duration::from_millis(100));
        assert_eq!(policy.safety_margin, Duration::from_millis(100));
    }

    #[test]
    fn with_max_rate_limit_retries_sets_value() {
        let policy = RetryPolicy::new().with_max_rate_limit_retries(2);
        assert_eq!(policy.max_rate_limit_retries, Some(2));
    }
}

mod delay_for {
    use super::*;

    #[test]
    fn adds_safety_margin_to_retry_after() {
        let policy = RetryPolicy::new();

        assert_eq!(policy.delay_for(2.5), Duration::from_millis(3500));
    }

    #[test]
    fn rounds_fractional_millis_up() {
        let policy = RetryPolicy::new().with_safety_margin(Duration::ZERO);

        assert_eq!(policy.delay_for(0.0001), Duration::from_millis(1));
        assert_eq!(policy.delay_for(1.2341), Duration::from_millis(1235));
    }

    #[test]
    fn invalid_values_wait_only_the_margin() {
        let policy = RetryPolicy::new();

        assert_eq!(policy.delay_for(-3.0), Duration::from_secs(1));
        assert_eq!(policy.delay_for(f64::NAN), Duration::from_secs(1));
        assert_eq!(policy.delay_for(f64::INFINITY), Duration::from_secs(1));
    }
}

mod should_retry {
    use super::*;

    #[test]
    fn unbounded_by_default() {
        let policy = RetryPolicy::new();

        assert!(policy.should_retry(0));
        assert!(policy.should_retry(u32::MAX));
    }

    #[test]
    fn bounded_policy_stops_at_limit() {
        let policy = RetryPolicy::new().with_max_rate_limit_retries(2);

        assert!(policy.should_retry(0));
        assert!(policy.should_retry(1));
        assert!(!policy.should_retry(2));
    }

    #[test]
    fn zero_limit_never_retries() {
        let policy = RetryPolicy::new().with_max_rate_limit_retries(0);

        assert!(!policy.should_retry(0));
    }
}
