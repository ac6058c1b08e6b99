// Simulated vest - random readings in place of real sensor ingestion
use crate::application::alerts::{AlertRules, derive_alerts};
use crate::application::generator::{
    generate_activity, generate_heart_rate, generate_posture, generate_series, generate_temperature,
    seeded_rng,
};
use crate::application::vitals_source::{VitalsSnapshot, VitalsSource};
use crate::domain::error::GenerationError;
use crate::domain::series::{GeneratedSeries, MetricKind, SampleWindow};
use chrono::NaiveDateTime;
use rand::rngs::StdRng;

#[derive(Debug, Clone)]
pub struct SimulatedVest {
    rules: AlertRules,
    default_seed: Option<u64>,
}

impl SimulatedVest {
    pub fn new(rules: AlertRules, default_seed: Option<u64>) -> Self {
        Self {
            rules,
            default_seed,
        }
    }

    /// Request seed, then configured seed, then OS entropy.
    pub fn rng(&self, seed: Option<u64>) -> StdRng {
        seeded_rng(seed.or(self.default_seed))
    }
}

impl VitalsSource for SimulatedVest {
    fn capture(
        &self,
        window: SampleWindow,
        now: NaiveDateTime,
        seed: Option<u64>,
    ) -> Result<VitalsSnapshot, GenerationError> {
        let mut rng = self.rng(seed);

        let heart_rate = generate_heart_rate(window, now, &mut rng);
        let temperature = generate_temperature(window, now, &mut rng);
        let activity = generate_activity(window, now, &mut rng);
        let posture = generate_posture(window, now, &mut rng);
        let alerts = derive_alerts(&self.rules, &heart_rate, &temperature, &posture, now, &mut rng);

        tracing::debug!(
            "Captured {} samples per series and {} alerts",
            window.len(),
            alerts.len()
        );

        Ok(VitalsSnapshot {
            captured_at: now,
            window,
            heart_rate,
            temperature,
            activity,
            posture,
            alerts,
        })
    }

    fn series(
        &self,
        kind: MetricKind,
        window: SampleWindow,
        now: NaiveDateTime,
        seed: Option<u64>,
    ) -> Result<GeneratedSeries, GenerationError> {
        Ok(generate_series(kind, window, now, &mut self.rng(seed)))
    }
}
