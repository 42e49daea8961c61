//! Schedule planning — turns a template's day-offsets into concrete
//! session dates.
//!
//! The server performs the authoritative expansion when a schedule is
//! created; this module exists for the create-schedule preview (dates are
//! shown before anything is persisted) and for the gap-list adjustment
//! behind the session-count stepper on the template form.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Default spacing for gaps appended when a template grows.
const DEFAULT_GAP_DAYS: u32 = 7;

/// One planned dose: position and concrete calendar date. No identity —
/// nothing has been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedSession {
    pub session_number: u32,
    pub session_date: NaiveDate,
}

/// Expand `gaps` into dated sessions anchored at `start_date`.
///
/// Session *i* (1-based) lands on `start_date + gaps[i-1]` days. An empty
/// gap list yields an empty plan; offsets are not required to be
/// monotonic, and out-of-order dates are produced as given.
pub fn plan_sessions(gaps: &[u32], start_date: NaiveDate) -> Vec<PlannedSession> {
    gaps.iter()
        .enumerate()
        .map(|(i, &gap)| PlannedSession {
            session_number: (i + 1) as u32,
            // Saturates at the calendar bound rather than panicking.
            session_date: start_date
                .checked_add_days(Days::new(u64::from(gap)))
                .unwrap_or(NaiveDate::MAX),
        })
        .collect()
}

/// Resize a gap list to `new_count` entries.
///
/// Shrinking truncates. Growing appends `last_gap + 7` for every added
/// slot; the base is the last gap of the ORIGINAL list, so all appended
/// slots share one value and the user tunes them afterwards.
pub fn resize_gaps(gaps: &[u32], new_count: usize) -> Vec<u32> {
    let mut resized = gaps.to_vec();
    if new_count <= resized.len() {
        resized.truncate(new_count);
        return resized;
    }
    let fill = resized
        .last()
        .copied()
        .unwrap_or(0)
        .saturating_add(DEFAULT_GAP_DAYS);
    resized.resize(new_count, fill);
    resized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn rabies_protocol_lands_on_expected_dates() {
        let plan = plan_sessions(&[0, 7, 14], date(2024, 1, 1));
        assert_eq!(plan.len(), 3);
        assert_eq!(plan[0].session_date, date(2024, 1, 1));
        assert_eq!(plan[1].session_date, date(2024, 1, 8));
        assert_eq!(plan[2].session_date, date(2024, 1, 15));
        assert_eq!(
            plan.iter().map(|s| s.session_number).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn empty_gap_list_yields_empty_plan() {
        assert!(plan_sessions(&[], date(2024, 1, 1)).is_empty());
    }

    #[test]
    fn zero_gap_lands_on_start_date() {
        let plan = plan_sessions(&[0], date(2024, 6, 15));
        assert_eq!(plan[0].session_date, date(2024, 6, 15));
    }

    #[test]
    fn non_monotonic_gaps_are_expanded_as_given() {
        let plan = plan_sessions(&[14, 0, 7], date(2024, 1, 1));
        assert_eq!(plan[0].session_date, date(2024, 1, 15));
        assert_eq!(plan[1].session_date, date(2024, 1, 1));
        assert_eq!(plan[2].session_date, date(2024, 1, 8));
    }

    #[test]
    fn plan_crosses_month_and_year_boundaries() {
        let plan = plan_sessions(&[0, 31], date(2023, 12, 15));
        assert_eq!(plan[1].session_date, date(2024, 1, 15));
    }

    #[test]
    fn resize_shrink_truncates() {
        assert_eq!(resize_gaps(&[0, 7, 14, 21], 2), vec![0, 7]);
    }

    #[test]
    fn resize_grow_appends_last_plus_seven() {
        // All appended slots share one fill value, matching the form's
        // stepper behavior.
        assert_eq!(resize_gaps(&[0, 7], 4), vec![0, 7, 14, 14]);
    }

    #[test]
    fn resize_from_empty_fills_with_default_spacing() {
        assert_eq!(resize_gaps(&[], 2), vec![7, 7]);
    }

    #[test]
    fn resize_to_same_count_is_identity() {
        assert_eq!(resize_gaps(&[0, 21], 2), vec![0, 21]);
    }
}
