// History service - Demo daily summaries, independent of the live series
use crate::application::generator::seeded_rng;
use crate::domain::error::GenerationError;
use crate::domain::history::{DailyHeartRate, DailySteps, History};
use chrono::{Days, NaiveDate};
use rand::Rng;

pub const MAX_HISTORY_DAYS: u32 = 90;

#[derive(Debug, Clone)]
pub struct HistoryService {
    default_seed: Option<u64>,
}

impl HistoryService {
    pub fn new(default_seed: Option<u64>) -> Self {
        Self { default_seed }
    }

    /// One summary per day for `days` days ending at `today`, most recent first.
    pub fn get_history(
        &self,
        days: u32,
        today: NaiveDate,
        seed: Option<u64>,
    ) -> Result<History, GenerationError> {
        if days == 0 || days > MAX_HISTORY_DAYS {
            return Err(GenerationError::invalid(format!(
                "history must cover 1 to {} days, got {}",
                MAX_HISTORY_DAYS, days
            )));
        }

        let mut rng = seeded_rng(seed.or(self.default_seed));
        let dates: Vec<NaiveDate> = (0..days)
            .map(|offset| {
                today.checked_sub_days(Days::new(offset as u64)).ok_or_else(|| {
                    GenerationError::invalid(format!("{} days before {} is out of range", offset, today))
                })
            })
            .collect::<Result<_, _>>()?;

        let heart_rate = dates
            .iter()
            .map(|&date| {
                let avg = rng.gen_range(65..=80);
                DailyHeartRate {
                    date,
                    min: avg - rng.gen_range(5..=15),
                    avg,
                    max: avg + rng.gen_range(15..=40),
                }
            })
            .collect();

        let steps = dates
            .iter()
            .map(|&date| DailySteps {
                date,
                steps: rng.gen_range(3_000..=12_000),
            })
            .collect();

        tracing::debug!("Generated {} days of history", days);

        Ok(History {
            days: days as usize,
            heart_rate,
            steps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()
    }

    #[test]
    fn test_week_of_history() {
        let history = HistoryService::new(None).get_history(7, today(), Some(1)).unwrap();

        assert_eq!(history.heart_rate.len(), 7);
        assert_eq!(history.steps.len(), 7);
        assert_eq!(history.heart_rate[0].date, today());
        assert_eq!(history.heart_rate[6].date, NaiveDate::from_ymd_opt(2024, 3, 8).unwrap());

        for day in &history.heart_rate {
            assert!((65..=80).contains(&day.avg));
            assert!(day.min < day.avg && day.avg < day.max);
            assert!((50..=75).contains(&day.min));
            assert!((80..=120).contains(&day.max));
        }
        for day in &history.steps {
            assert!((3_000..=12_000).contains(&day.steps));
        }
    }

    #[test]
    fn test_history_bounds() {
        let service = HistoryService::new(None);
        assert!(service.get_history(0, today(), None).is_err());
        assert!(service.get_history(MAX_HISTORY_DAYS + 1, today(), None).is_err());
        assert!(service.get_history(MAX_HISTORY_DAYS, today(), None).is_ok());
    }

    #[test]
    fn test_history_is_seedable() {
        let service = HistoryService::new(Some(5));
        assert_eq!(
            service.get_history(7, today(), None).unwrap(),
            service.get_history(7, today(), Some(5)).unwrap()
        );
    }
}
