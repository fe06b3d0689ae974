use serde::{Deserialize, Serialize};

use crate::SerialDate;

/// Which endpoints of a date range count as inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateInterval {
    /// Open range: neither endpoint
    IncludeNone,
    /// Half-open range: the earlier endpoint only
    IncludeFirst,
    /// Half-open range: the later endpoint only
    IncludeSecond,
    /// Closed range: both endpoints
    #[default]
    IncludeBoth,
}

impl DateInterval {
    /// Tests serial `d` against `left..right` with this policy's endpoint rules.
    /// Expects `left <= right`.
    pub const fn contains(self, d: i32, left: i32, right: i32) -> bool {
        match self {
            Self::IncludeNone => d > left && d < right,
            Self::IncludeFirst => d >= left && d < right,
            Self::IncludeSecond => d > left && d <= right,
            Self::IncludeBoth => d >= left && d <= right,
        }
    }
}

impl SerialDate {
    /// Checks whether this date lies between `d1` and `d2`, both endpoints included.
    /// The bounds may be given in either order.
    pub fn is_in_range(&self, d1: &Self, d2: &Self) -> bool {
        self.is_in_range_with(d1, d2, DateInterval::IncludeBoth)
    }

    /// Checks whether this date lies between `d1` and `d2` under `include`.
    /// The earlier of the two bounds is the first endpoint regardless of argument order.
    pub fn is_in_range_with(&self, d1: &Self, d2: &Self, include: DateInterval) -> bool {
        let left = d1.serial().min(d2.serial());
        let right = d1.serial().max(d2.serial());
        include.contains(self.serial(), left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_is_in_range_default_includes_both() {
        let may31 = date(31, 5, 2004);
        let may30 = date(30, 5, 2004);
        let jun30 = date(30, 6, 2004);

        assert!(may31.is_in_range(&may30, &jun30));
        assert!(may31.is_in_range(&jun30, &may30));
        assert!(may30.is_in_range(&may30, &jun30));
        assert!(jun30.is_in_range(&may30, &jun30));
        assert!(!date(1, 7, 2004).is_in_range(&may30, &jun30));
        assert_eq!(DateInterval::default(), DateInterval::IncludeBoth);
    }

    #[test]
    fn test_policy_cases() {
        struct TestCase {
            policy:      DateInterval,
            at_first:    bool,
            inside:      bool,
            at_second:   bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                policy:      DateInterval::IncludeNone,
                at_first:    false,
                inside:      true,
                at_second:   false,
                description: "open range",
            },
            TestCase {
                policy:      DateInterval::IncludeFirst,
                at_first:    true,
                inside:      true,
                at_second:   false,
                description: "first endpoint only",
            },
            TestCase {
                policy:      DateInterval::IncludeSecond,
                at_first:    false,
                inside:      true,
                at_second:   true,
                description: "second endpoint only",
            },
            TestCase {
                policy:      DateInterval::IncludeBoth,
                at_first:    true,
                inside:      true,
                at_second:   true,
                description: "closed range",
            },
        ];

        let first = date(1, 3, 2004);
        let inside = date(15, 3, 2004);
        let second = date(31, 3, 2004);
        let outside = date(1, 4, 2004);

        for case in &cases {
            for (d1, d2) in [(&first, &second), (&second, &first)] {
                assert_eq!(
                    first.is_in_range_with(d1, d2, case.policy),
                    case.at_first,
                    "first endpoint, {}",
                    case.description
                );
                assert_eq!(
                    inside.is_in_range_with(d1, d2, case.policy),
                    case.inside,
                    "interior date, {}",
                    case.description
                );
                assert_eq!(
                    second.is_in_range_with(d1, d2, case.policy),
                    case.at_second,
                    "second endpoint, {}",
                    case.description
                );
                assert!(
                    !outside.is_in_range_with(d1, d2, case.policy),
                    "outside date, {}",
                    case.description
                );
            }
        }
    }

    #[test]
    fn test_single_day_range() {
        let d = date(29, 2, 2004);
        assert!(d.is_in_range_with(&d, &d, DateInterval::IncludeBoth));
        assert!(!d.is_in_range_with(&d, &d, DateInterval::IncludeFirst));
        assert!(!d.is_in_range_with(&d, &d, DateInterval::IncludeSecond));
        assert!(!d.is_in_range_with(&d, &d, DateInterval::IncludeNone));
    }

    #[test]
    fn test_contains_raw_serials() {
        assert!(DateInterval::IncludeFirst.contains(10, 10, 20));
        assert!(!DateInterval::IncludeFirst.contains(20, 10, 20));
        assert!(DateInterval::IncludeSecond.contains(20, 10, 20));
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&DateInterval::IncludeFirst).expect("failed to serialize interval");
        assert_eq!(json, r#""IncludeFirst""#);
        let parsed: DateInterval = serde_json::from_str(&json).expect("failed to deserialize interval");
        assert_eq!(parsed, DateInterval::IncludeFirst);
    }
}
