//! Deadline classification for the dashboard alert strip and the bell badge.

use chrono::NaiveDate;

use crate::jobs::aggregate::JobSummary;

/// A job inside the attention window, with its distance from today in days
/// (negative when overdue).
#[derive(Debug, Clone, PartialEq)]
pub struct DueJob {
    pub job: JobSummary,
    pub days: i64,
}

impl DueJob {
    pub fn is_overdue(&self) -> bool {
        self.days < 0
    }
}

/// Delivery dates are date-only columns; a stray timestamp suffix is cut off
/// before parsing.
fn parse_due_date(raw: &str) -> Option<NaiveDate> {
    let date_part = raw.split('T').next().unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Jobs needing attention: open (not Completed or Dispatched), carrying a
/// parseable delivery date that is at most 7 days out. Overdue jobs stay in
/// the list no matter how old. Sorted soonest first; ties keep list order.
pub fn upcoming_jobs(jobs: &[JobSummary], today: NaiveDate) -> Vec<DueJob> {
    let mut due: Vec<DueJob> = jobs
        .iter()
        .filter(|j| !j.is_closed())
        .filter_map(|j| {
            let date = parse_due_date(&j.expected_delivery_date)?;
            let days = (date - today).num_days();
            (days <= 7).then(|| DueJob {
                job: j.clone(),
                days,
            })
        })
        .collect();
    due.sort_by_key(|d| d.days);
    due
}

/// The badge text next to a due job.
pub fn due_label(days: i64) -> String {
    match days {
        d if d < 0 => format!("{} Days Overdue", -d),
        0 => "Due Today".to_string(),
        1 => "Due Tomorrow".to_string(),
        d => format!("In {} Days", d),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: i64, due: &str, status: &str) -> JobSummary {
        JobSummary {
            id,
            expected_delivery_date: due.into(),
            status: status.into(),
            ..Default::default()
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn window_is_seven_days_with_unbounded_overdue() {
        let jobs = vec![
            job(1, "2025-03-17", "Received"),
            job(2, "2025-03-18", "Received"),
            job(3, "2025-01-01", "In Production"),
        ];
        let due = upcoming_jobs(&jobs, today());
        let ids: Vec<i64> = due.iter().map(|d| d.job.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert!(due[0].is_overdue());
        assert_eq!(due[1].days, 7);
    }

    #[test]
    fn closed_and_undated_jobs_are_excluded() {
        let jobs = vec![
            job(1, "2025-03-10", "Completed"),
            job(2, "2025-03-10", "Dispatched"),
            job(3, "", "Received"),
            job(4, "not a date", "Received"),
            job(5, "2025-03-10", "Quality Check"),
        ];
        let due = upcoming_jobs(&jobs, today());
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].job.id, 5);
        assert_eq!(due[0].days, 0);
    }

    #[test]
    fn sorted_soonest_first_keeping_list_order_on_ties() {
        let jobs = vec![
            job(1, "2025-03-12", "Received"),
            job(2, "2025-03-09", "Received"),
            job(3, "2025-03-12", "Received"),
            job(4, "2025-03-11", "Received"),
        ];
        let ids: Vec<i64> = upcoming_jobs(&jobs, today())
            .iter()
            .map(|d| d.job.id)
            .collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn timestamp_suffixes_are_tolerated() {
        let jobs = vec![job(1, "2025-03-11T00:00:00", "Received")];
        let due = upcoming_jobs(&jobs, today());
        assert_eq!(due[0].days, 1);
    }

    #[test]
    fn badge_labels() {
        assert_eq!(due_label(-3), "3 Days Overdue");
        assert_eq!(due_label(-1), "1 Days Overdue");
        assert_eq!(due_label(0), "Due Today");
        assert_eq!(due_label(1), "Due Tomorrow");
        assert_eq!(due_label(5), "In 5 Days");
    }
}
