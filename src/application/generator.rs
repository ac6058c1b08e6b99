// Mock vest data - time-of-day biased random series
use crate::domain::buckets::{
    ACTIVITY_BUCKETS, BAD_POSTURE_PROBABILITY, BASE_HEART_RATE, BASE_TEMPERATURE, Baseline,
    BucketRule, BucketTable, HEART_RATE_BUCKETS, POSTURE_BUCKETS, PostureParams, Spread,
    TEMPERATURE_BUCKETS,
};
use crate::domain::series::{
    ActivityReading, GeneratedSeries, MetricKind, Posture, Sample, SampleSeries, SampleWindow,
};
use chrono::{NaiveDateTime, Timelike};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub fn generate_series<R: Rng + ?Sized>(
    kind: MetricKind,
    window: SampleWindow,
    now: NaiveDateTime,
    rng: &mut R,
) -> GeneratedSeries {
    let series = match kind {
        MetricKind::HeartRate => GeneratedSeries::HeartRate(generate_heart_rate(window, now, rng)),
        MetricKind::Temperature => GeneratedSeries::Temperature(generate_temperature(window, now, rng)),
        MetricKind::Activity => GeneratedSeries::Activity(generate_activity(window, now, rng)),
        MetricKind::Posture => GeneratedSeries::Posture(generate_posture(window, now, rng)),
    };

    tracing::debug!("Generated {} {} samples", series.len(), series.kind().as_str());
    series
}

/// Heart rate in whole BPM around a 70 BPM resting baseline.
pub fn generate_heart_rate<R: Rng + ?Sized>(
    window: SampleWindow,
    now: NaiveDateTime,
    rng: &mut R,
) -> SampleSeries<u32> {
    window
        .timestamps(now)
        .map(|timestamp| {
            let bucket = bucket_at(&HEART_RATE_BUCKETS, MetricKind::HeartRate, timestamp);
            let bpm = draw_baseline(BASE_HEART_RATE, &bucket.params, rng);
            Sample::new(timestamp, bpm.round().max(0.0) as u32)
        })
        .collect()
}

/// Body temperature in °C, one decimal.
pub fn generate_temperature<R: Rng + ?Sized>(
    window: SampleWindow,
    now: NaiveDateTime,
    rng: &mut R,
) -> SampleSeries<f64> {
    window
        .timestamps(now)
        .map(|timestamp| {
            let bucket = bucket_at(&TEMPERATURE_BUCKETS, MetricKind::Temperature, timestamp);
            let celsius = draw_baseline(BASE_TEMPERATURE, &bucket.params, rng);
            Sample::new(timestamp, round_tenths(celsius))
        })
        .collect()
}

/// Running step total plus movement intensity.
pub fn generate_activity<R: Rng + ?Sized>(
    window: SampleWindow,
    now: NaiveDateTime,
    rng: &mut R,
) -> SampleSeries<ActivityReading> {
    let mut total_steps = 0u64;

    window
        .timestamps(now)
        .map(|timestamp| {
            let params = bucket_at(&ACTIVITY_BUCKETS, MetricKind::Activity, timestamp).params;
            let (low, high) = params.steps;
            total_steps += rng.gen_range(low..=high);
            let movement = draw_spread(&params.movement, rng);

            Sample::new(
                timestamp,
                ActivityReading {
                    steps: total_steps,
                    movement_intensity: round_tenths(movement),
                },
            )
        })
        .collect()
}

/// Posture per bucket, then a second pass turning some sitting samples into bad posture.
pub fn generate_posture<R: Rng + ?Sized>(
    window: SampleWindow,
    now: NaiveDateTime,
    rng: &mut R,
) -> SampleSeries<Posture> {
    let mut samples: Vec<Sample<Posture>> = window
        .timestamps(now)
        .map(|timestamp| {
            let bucket = bucket_at(&POSTURE_BUCKETS, MetricKind::Posture, timestamp);
            Sample::new(timestamp, choose_posture(&bucket.params, rng))
        })
        .collect();

    for sample in samples.iter_mut() {
        if sample.value == Posture::Sitting && rng.gen_bool(BAD_POSTURE_PROBABILITY) {
            sample.value = Posture::BadPosture;
        }
    }

    SampleSeries::new(samples)
}

fn bucket_at<P: 'static>(
    table: &'static BucketTable<P>,
    kind: MetricKind,
    timestamp: NaiveDateTime,
) -> &'static BucketRule<P> {
    let bucket = table.lookup(timestamp.hour());
    tracing::trace!("{} at {} uses the '{}' bucket", kind.as_str(), timestamp, bucket.name);
    bucket
}

fn draw_baseline<R: Rng + ?Sized>(base: f64, params: &Baseline, rng: &mut R) -> f64 {
    base + params.offset + draw_spread(&params.spread, rng)
}

fn draw_spread<R: Rng + ?Sized>(spread: &Spread, rng: &mut R) -> f64 {
    rng.gen_range(spread.low..=spread.high)
}

fn choose_posture<R: Rng + ?Sized>(params: &PostureParams, rng: &mut R) -> Posture {
    let (first, _) = params.weights[0];
    if params.weights.len() == 1 {
        return first;
    }

    let roll = rng.gen_range(0.0..1.0);
    let mut cumulative = 0.0;
    for &(posture, weight) in params.weights {
        cumulative += weight;
        if roll < cumulative {
            return posture;
        }
    }

    // Rounding left the roll above the last boundary
    params.weights[params.weights.len() - 1].0
}

/// Seeded generator when a seed is given, OS entropy otherwise.
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 14)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn full_day() -> SampleWindow {
        SampleWindow::from_hours(24, 5).unwrap()
    }

    fn has_one_decimal(value: f64) -> bool {
        ((value * 10.0).round() - value * 10.0).abs() < 1e-9
    }

    #[test]
    fn test_series_length_and_spacing() {
        let mut rng = StdRng::seed_from_u64(7);
        let window = SampleWindow::default();

        for kind in [
            MetricKind::HeartRate,
            MetricKind::Temperature,
            MetricKind::Activity,
            MetricKind::Posture,
        ] {
            let series = generate_series(kind, window, at(18, 0), &mut rng);
            assert_eq!(series.kind(), kind);
            assert_eq!(series.len(), 145);
        }

        let hr = generate_heart_rate(window, at(18, 0), &mut rng);
        let stamps: Vec<_> = hr.iter().map(|s| s.timestamp).collect();
        assert_eq!(stamps[0], at(6, 0));
        for pair in stamps.windows(2) {
            assert_eq!(pair[1] - pair[0], TimeDelta::minutes(5));
        }
    }

    #[test]
    fn test_heart_rate_stays_inside_bucket_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        let series = generate_heart_rate(full_day(), at(23, 55), &mut rng);

        for sample in &series {
            let range = match sample.timestamp.hour() {
                6..=8 => 85..=105,
                12..=13 => 77..=90,
                17..=19 => 95..=120,
                _ => 62..=78,
            };
            assert!(range.contains(&sample.value), "{} at {}", sample.value, sample.timestamp);
        }
    }

    #[test]
    fn test_temperature_has_one_decimal() {
        let mut rng = StdRng::seed_from_u64(3);
        let series = generate_temperature(full_day(), at(23, 55), &mut rng);

        for sample in &series {
            assert!(has_one_decimal(sample.value), "{}", sample.value);
            assert!((35.9..=37.0).contains(&sample.value), "{}", sample.value);
        }
    }

    #[test]
    fn test_steps_never_decrease() {
        let mut rng = StdRng::seed_from_u64(5);
        let series = generate_activity(full_day(), at(23, 55), &mut rng);

        let readings: Vec<_> = series.iter().map(|s| s.value).collect();
        for pair in readings.windows(2) {
            assert!(pair[1].steps >= pair[0].steps);
        }
        for reading in &readings {
            assert!(has_one_decimal(reading.movement_intensity));
            assert!((0.0..=10.0).contains(&reading.movement_intensity));
        }
        // 24h of activity is well past the night-only minimum
        assert!(readings.last().unwrap().steps > 10_000);
    }

    #[test]
    fn test_posture_follows_the_clock() {
        let mut rng = StdRng::seed_from_u64(9);
        let series = generate_posture(full_day(), at(23, 55), &mut rng);

        for sample in &series {
            match sample.timestamp.hour() {
                0..=6 => assert_eq!(sample.value, Posture::Lying),
                8..=17 => assert_ne!(sample.value, Posture::Lying),
                _ => {}
            }
        }
        assert!(series.iter().any(|s| s.value == Posture::BadPosture));
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let window = SampleWindow::default();
        let first = generate_series(MetricKind::HeartRate, window, at(18, 0), &mut StdRng::seed_from_u64(42));
        let second = generate_series(MetricKind::HeartRate, window, at(18, 0), &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_bucket_at_follows_the_sample_hour() {
        assert_eq!(bucket_at(&HEART_RATE_BUCKETS, MetricKind::HeartRate, at(18, 30)).name, "evening exercise");
        assert_eq!(bucket_at(&ACTIVITY_BUCKETS, MetricKind::Activity, at(23, 5)).name, "night");
        assert_eq!(bucket_at(&POSTURE_BUCKETS, MetricKind::Posture, at(7, 0)).name, "evening");
    }

    #[test]
    fn test_round_tenths() {
        assert_eq!(round_tenths(36.54), 36.5);
        assert_eq!(round_tenths(36.56), 36.6);
        assert_eq!(round_tenths(-0.04), 0.0);
    }
}
