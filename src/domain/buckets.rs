// Time-of-day bucket tables driving the generators
use super::series::Posture;
use std::ops::Range;

pub const BASE_HEART_RATE: f64 = 70.0;
pub const BASE_TEMPERATURE: f64 = 36.5;

/// Probability that a sitting sample is relabelled as bad posture.
pub const BAD_POSTURE_PROBABILITY: f64 = 0.2;

/// Inclusive uniform offset `[low, high]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spread {
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    pub offset: f64,
    pub spread: Spread,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActivityParams {
    /// Inclusive range of steps added during one interval.
    pub steps: (u64, u64),
    pub movement: Spread,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PostureParams {
    /// Cumulative choice over `(posture, weight)`; weights sum to 1.
    pub weights: &'static [(Posture, f64)],
}

/// Hour-of-day rule. `hours` are half-open ranges over 0..24.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketRule<P> {
    pub name: &'static str,
    pub hours: &'static [Range<u32>],
    pub params: P,
}

impl<P> BucketRule<P> {
    pub fn covers(&self, hour: u32) -> bool {
        self.hours.iter().any(|range| range.contains(&hour))
    }
}

/// Ordered rules evaluated first-match, with a fallback for uncovered hours.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BucketTable<P: 'static> {
    pub rules: &'static [BucketRule<P>],
    pub fallback: BucketRule<P>,
}

impl<P> BucketTable<P> {
    pub fn lookup(&self, hour: u32) -> &BucketRule<P> {
        self.rules
            .iter()
            .find(|rule| rule.covers(hour))
            .unwrap_or(&self.fallback)
    }
}

const fn spread(low: f64, high: f64) -> Spread {
    Spread { low, high }
}

pub static HEART_RATE_BUCKETS: BucketTable<Baseline> = BucketTable {
    rules: &[
        BucketRule {
            name: "morning",
            hours: &[6..9],
            params: Baseline { offset: 20.0, spread: spread(-5.0, 15.0) },
        },
        BucketRule {
            name: "midday",
            hours: &[12..14],
            params: Baseline { offset: 10.0, spread: spread(-3.0, 10.0) },
        },
        BucketRule {
            name: "evening exercise",
            hours: &[17..20],
            params: Baseline { offset: 30.0, spread: spread(-5.0, 20.0) },
        },
    ],
    fallback: BucketRule {
        name: "rest",
        hours: &[0..24],
        params: Baseline { offset: 0.0, spread: spread(-8.0, 8.0) },
    },
};

pub static TEMPERATURE_BUCKETS: BucketTable<Baseline> = BucketTable {
    rules: &[
        BucketRule {
            name: "night",
            hours: &[0..6],
            params: Baseline { offset: -0.3, spread: spread(-0.2, 0.1) },
        },
        BucketRule {
            name: "afternoon",
            hours: &[12..18],
            params: Baseline { offset: 0.2, spread: spread(-0.1, 0.3) },
        },
    ],
    fallback: BucketRule {
        name: "day",
        hours: &[0..24],
        params: Baseline { offset: 0.0, spread: spread(-0.2, 0.2) },
    },
};

pub static ACTIVITY_BUCKETS: BucketTable<ActivityParams> = BucketTable {
    rules: &[
        BucketRule {
            name: "morning",
            hours: &[7..9],
            params: ActivityParams { steps: (300, 800), movement: spread(7.0, 10.0) },
        },
        BucketRule {
            name: "lunch",
            hours: &[12..14],
            params: ActivityParams { steps: (200, 500), movement: spread(4.0, 7.0) },
        },
        BucketRule {
            name: "exercise",
            hours: &[17..19],
            params: ActivityParams { steps: (1000, 2000), movement: spread(8.0, 10.0) },
        },
        BucketRule {
            name: "night",
            hours: &[22..24, 0..6],
            params: ActivityParams { steps: (0, 20), movement: spread(0.0, 2.0) },
        },
    ],
    fallback: BucketRule {
        name: "day",
        hours: &[0..24],
        params: ActivityParams { steps: (50, 300), movement: spread(3.0, 6.0) },
    },
};

pub static POSTURE_BUCKETS: BucketTable<PostureParams> = BucketTable {
    rules: &[
        BucketRule {
            name: "sleep",
            hours: &[0..7],
            params: PostureParams { weights: &[(Posture::Lying, 1.0)] },
        },
        BucketRule {
            name: "work",
            hours: &[8..12, 14..18],
            params: PostureParams {
                weights: &[(Posture::Sitting, 0.8), (Posture::Standing, 0.2)],
            },
        },
        BucketRule {
            name: "lunch",
            hours: &[12..14],
            params: PostureParams {
                weights: &[(Posture::Sitting, 0.6), (Posture::Standing, 0.4)],
            },
        },
    ],
    fallback: BucketRule {
        name: "evening",
        hours: &[0..24],
        params: PostureParams {
            weights: &[
                (Posture::Sitting, 0.5),
                (Posture::Standing, 0.4),
                (Posture::Lying, 0.1),
            ],
        },
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_wins() {
        assert_eq!(HEART_RATE_BUCKETS.lookup(6).name, "morning");
        assert_eq!(HEART_RATE_BUCKETS.lookup(8).name, "morning");
        assert_eq!(HEART_RATE_BUCKETS.lookup(9).name, "rest");
        assert_eq!(HEART_RATE_BUCKETS.lookup(19).name, "evening exercise");
        assert_eq!(HEART_RATE_BUCKETS.lookup(20).name, "rest");
    }

    #[test]
    fn test_split_ranges() {
        assert_eq!(ACTIVITY_BUCKETS.lookup(23).name, "night");
        assert_eq!(ACTIVITY_BUCKETS.lookup(3).name, "night");
        assert_eq!(ACTIVITY_BUCKETS.lookup(6).name, "day");
        assert_eq!(POSTURE_BUCKETS.lookup(15).name, "work");
        assert_eq!(POSTURE_BUCKETS.lookup(12).name, "lunch");
        // 07:00 falls between sleep and work
        assert_eq!(POSTURE_BUCKETS.lookup(7).name, "evening");
    }

    #[test]
    fn test_every_hour_resolves() {
        for hour in 0..24 {
            assert!(TEMPERATURE_BUCKETS.lookup(hour).covers(hour));
            assert!(ACTIVITY_BUCKETS.lookup(hour).covers(hour));
        }
    }

    #[test]
    fn test_posture_weights_sum_to_one() {
        let tables = POSTURE_BUCKETS.rules.iter().chain(std::iter::once(&POSTURE_BUCKETS.fallback));
        for rule in tables {
            let total: f64 = rule.params.weights.iter().map(|(_, w)| w).sum();
            assert!((total - 1.0).abs() < 1e-9, "{} sums to {}", rule.name, total);
        }
    }
}
