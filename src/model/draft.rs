use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use thiserror::Error;

/// Unit the pause bounds are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PauseUnit {
    #[default]
    Seconds,
    Minutes,
    Hours,
}

impl PauseUnit {
    pub fn label(&self) -> &'static str {
        match self {
            PauseUnit::Seconds => "seconds",
            PauseUnit::Minutes => "minutes",
            PauseUnit::Hours => "hours",
        }
    }

    pub fn cycle(&self) -> PauseUnit {
        match self {
            PauseUnit::Seconds => PauseUnit::Minutes,
            PauseUnit::Minutes => PauseUnit::Hours,
            PauseUnit::Hours => PauseUnit::Seconds,
        }
    }
}

/// When the task should begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StartPolicy {
    #[default]
    Immediate,
    Scheduled,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("pause bounds must be whole numbers")]
    PauseNotNumeric,
    #[error("minimum pause cannot exceed maximum")]
    PauseOrder,
    #[error("date must look like YYYY-MM-DD")]
    BadDate,
    #[error("time must look like HH:MM")]
    BadTime,
}

/// Raw pacing form state. Fields hold whatever the user typed; nothing is
/// checked until [`PacingDraft::validate`] at submission.
#[derive(Debug, Clone)]
pub struct PacingDraft {
    pub min_pause: String,
    pub max_pause: String,
    pub unit: PauseUnit,
    pub start: StartPolicy,
    pub date: String,
    pub time: String,
}

impl PacingDraft {
    pub fn new(min_pause: &str, max_pause: &str) -> Self {
        PacingDraft {
            min_pause: min_pause.to_string(),
            max_pause: max_pause.to_string(),
            unit: PauseUnit::default(),
            start: StartPolicy::default(),
            date: String::new(),
            time: String::new(),
        }
    }

    /// Check the form and produce a submittable plan.
    ///
    /// The schedule date is parsed for shape only; a date in the past is
    /// accepted as typed.
    pub fn validate(&self) -> Result<PacingPlan, DraftError> {
        let min: u32 = self
            .min_pause
            .trim()
            .parse()
            .map_err(|_| DraftError::PauseNotNumeric)?;
        let max: u32 = self
            .max_pause
            .trim()
            .parse()
            .map_err(|_| DraftError::PauseNotNumeric)?;
        if min > max {
            return Err(DraftError::PauseOrder);
        }
        let start_at = match self.start {
            StartPolicy::Immediate => None,
            StartPolicy::Scheduled => {
                let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
                    .map_err(|_| DraftError::BadDate)?;
                let time = NaiveTime::parse_from_str(self.time.trim(), "%H:%M")
                    .map_err(|_| DraftError::BadTime)?;
                Some(NaiveDateTime::new(date, time))
            }
        };
        Ok(PacingPlan {
            min_pause: min,
            max_pause: max,
            unit: self.unit,
            start_at,
        })
    }
}

/// Validated pacing parameters carried into a submitted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacingPlan {
    pub min_pause: u32,
    pub max_pause: u32,
    pub unit: PauseUnit,
    pub start_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate_to_immediate_plan() {
        let plan = PacingDraft::new("30", "60").validate().unwrap();
        assert_eq!(plan.min_pause, 30);
        assert_eq!(plan.max_pause, 60);
        assert_eq!(plan.unit, PauseUnit::Seconds);
        assert_eq!(plan.start_at, None);
    }

    #[test]
    fn pause_bounds_must_be_numbers() {
        let mut draft = PacingDraft::new("30", "60");
        draft.min_pause = "abc".into();
        assert_eq!(draft.validate(), Err(DraftError::PauseNotNumeric));

        let mut draft = PacingDraft::new("30", "60");
        draft.max_pause = "".into();
        assert_eq!(draft.validate(), Err(DraftError::PauseNotNumeric));
    }

    #[test]
    fn min_above_max_is_rejected() {
        let draft = PacingDraft::new("90", "60");
        assert_eq!(draft.validate(), Err(DraftError::PauseOrder));
    }

    #[test]
    fn equal_bounds_are_fine() {
        let plan = PacingDraft::new("45", "45").validate().unwrap();
        assert_eq!((plan.min_pause, plan.max_pause), (45, 45));
    }

    #[test]
    fn whitespace_around_numbers_is_tolerated() {
        let plan = PacingDraft::new(" 10 ", "30 ").validate().unwrap();
        assert_eq!(plan.min_pause, 10);
    }

    #[test]
    fn scheduled_start_needs_well_formed_date_and_time() {
        let mut draft = PacingDraft::new("30", "60");
        draft.start = StartPolicy::Scheduled;
        draft.date = "2025-13-40".into();
        draft.time = "14:00".into();
        assert_eq!(draft.validate(), Err(DraftError::BadDate));

        draft.date = "2025-11-05".into();
        draft.time = "25:99".into();
        assert_eq!(draft.validate(), Err(DraftError::BadTime));

        draft.time = "14:30".into();
        let plan = draft.validate().unwrap();
        let at = plan.start_at.unwrap();
        assert_eq!(at.format("%Y-%m-%d %H:%M").to_string(), "2025-11-05 14:30");
    }

    #[test]
    fn past_dates_are_accepted_as_typed() {
        let mut draft = PacingDraft::new("30", "60");
        draft.start = StartPolicy::Scheduled;
        draft.date = "2001-01-01".into();
        draft.time = "00:00".into();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn unit_cycles_through_all_three() {
        let u = PauseUnit::Seconds;
        assert_eq!(u.cycle(), PauseUnit::Minutes);
        assert_eq!(u.cycle().cycle(), PauseUnit::Hours);
        assert_eq!(u.cycle().cycle().cycle(), PauseUnit::Seconds);
    }
}
