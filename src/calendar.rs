use chrono::{Datelike, NaiveDate};

use crate::engine::hierarchy::HierarchyLevel;

/// Monthly reporting deadlines per hierarchy level.
///
/// Each level must have passed the dossier on by its day-of-month.
/// Defaults come from `HierarchyLevel::default_deadline_day`; deployments
/// override them with `CIRCUIT_DEADLINE_<LEVEL>` environment variables
/// (values 1..=31). Days beyond a month's length clamp to its last day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineCalendar {
    days: [u32; HierarchyLevel::ALL.len()],
}

fn env_key(level: HierarchyLevel) -> &'static str {
    match level {
        HierarchyLevel::Direction => "CIRCUIT_DEADLINE_DIRECTION",
        HierarchyLevel::MinistrySg => "CIRCUIT_DEADLINE_SG_MINISTERE",
        HierarchyLevel::GovernmentSg => "CIRCUIT_DEADLINE_SGG",
        HierarchyLevel::PrimeMinister => "CIRCUIT_DEADLINE_PM",
        HierarchyLevel::PresidencySg => "CIRCUIT_DEADLINE_SGPR",
        HierarchyLevel::President => "CIRCUIT_DEADLINE_PRESIDENCE",
    }
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(28)
}

impl Default for DeadlineCalendar {
    fn default() -> DeadlineCalendar {
        let mut days = [0u32; HierarchyLevel::ALL.len()];
        for (slot, level) in days.iter_mut().zip(HierarchyLevel::ALL) {
            *slot = level.default_deadline_day();
        }
        DeadlineCalendar { days }
    }
}

impl DeadlineCalendar {
    pub fn new() -> DeadlineCalendar {
        DeadlineCalendar::default()
    }

    /// Calendar with per-level overrides from the environment.
    pub fn from_env() -> DeadlineCalendar {
        DeadlineCalendar::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` but with an injectable variable source. Invalid
    /// values keep the default, with a warning.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> DeadlineCalendar {
        let mut calendar = DeadlineCalendar::default();
        for (i, level) in HierarchyLevel::ALL.into_iter().enumerate() {
            let key = env_key(level);
            if let Some(val) = lookup(key) {
                match val.parse::<u32>() {
                    Ok(day) if (1..=31).contains(&day) => calendar.days[i] = day,
                    _ => log::warn!(
                        "{} invalid ({}) — keeping default {}",
                        key,
                        val,
                        calendar.days[i]
                    ),
                }
            }
        }
        calendar
    }

    pub fn deadline_day(&self, level: HierarchyLevel) -> u32 {
        let idx = HierarchyLevel::ALL.iter().position(|l| *l == level).unwrap_or(0);
        self.days[idx]
    }

    /// This level's deadline in a given month, clamped to month length.
    /// `None` only for an out-of-range year/month pair.
    pub fn deadline_in(&self, level: HierarchyLevel, year: i32, month: u32) -> Option<NaiveDate> {
        let day = self.deadline_day(level).min(last_day_of_month(year, month));
        NaiveDate::from_ymd_opt(year, month, day)
    }

    /// The next deadline on or after `today`.
    pub fn next_deadline(&self, level: HierarchyLevel, today: NaiveDate) -> Option<NaiveDate> {
        let this_month = self.deadline_in(level, today.year(), today.month())?;
        if this_month >= today {
            return Some(this_month);
        }
        let (year, month) = if today.month() == 12 {
            (today.year() + 1, 1)
        } else {
            (today.year(), today.month() + 1)
        };
        self.deadline_in(level, year, month)
    }

    /// Whether `today` is past this month's deadline for the level.
    pub fn is_overdue(&self, level: HierarchyLevel, today: NaiveDate) -> bool {
        self.deadline_in(level, today.year(), today.month())
            .map(|deadline| today > deadline)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn defaults_follow_the_levels() {
        let cal = DeadlineCalendar::new();
        assert_eq!(cal.deadline_day(HierarchyLevel::Direction), 5);
        assert_eq!(cal.deadline_day(HierarchyLevel::President), 28);
    }

    #[test]
    fn february_clamps_late_days() {
        let mut cal = DeadlineCalendar::new();
        cal.days = [31; HierarchyLevel::ALL.len()];
        assert_eq!(
            cal.deadline_in(HierarchyLevel::Direction, 2026, 2),
            Some(date(2026, 2, 28))
        );
        assert_eq!(
            cal.deadline_in(HierarchyLevel::Direction, 2024, 2),
            Some(date(2024, 2, 29))
        );
    }

    #[test]
    fn overdue_is_strictly_after_the_deadline() {
        let cal = DeadlineCalendar::new();
        assert!(!cal.is_overdue(HierarchyLevel::Direction, date(2026, 3, 5)));
        assert!(cal.is_overdue(HierarchyLevel::Direction, date(2026, 3, 6)));
    }

    #[test]
    fn next_deadline_rolls_into_the_next_month() {
        let cal = DeadlineCalendar::new();
        assert_eq!(
            cal.next_deadline(HierarchyLevel::Direction, date(2026, 3, 6)),
            Some(date(2026, 4, 5))
        );
        assert_eq!(
            cal.next_deadline(HierarchyLevel::Direction, date(2026, 12, 10)),
            Some(date(2027, 1, 5))
        );
        assert_eq!(
            cal.next_deadline(HierarchyLevel::Direction, date(2026, 3, 5)),
            Some(date(2026, 3, 5))
        );
    }

    #[test]
    fn lookup_overrides_apply_and_bad_values_fall_back() {
        let cal = DeadlineCalendar::from_lookup(|key| match key {
            "CIRCUIT_DEADLINE_SGG" => Some("18".to_string()),
            "CIRCUIT_DEADLINE_PM" => Some("quarante".to_string()),
            _ => None,
        });
        assert_eq!(cal.deadline_day(HierarchyLevel::GovernmentSg), 18);
        assert_eq!(
            cal.deadline_day(HierarchyLevel::PrimeMinister),
            HierarchyLevel::PrimeMinister.default_deadline_day()
        );
    }
}
