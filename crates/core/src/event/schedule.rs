//! Home-view partition of active events into upcoming and past.

use chrono::{DateTime, Utc};

use super::types::EventStatus;

/// Which home list an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventWindow {
    /// Still running or not yet started.
    Upcoming,
    /// Already over.
    Past,
}

/// The two disjoint home lists.
#[derive(Debug, Clone)]
pub struct HomePartition<T> {
    /// Events with no end date or an end date in the future, start ascending.
    pub upcoming: Vec<T>,
    /// Ended events, end date descending.
    pub past: Vec<T>,
}

/// Classifies one event for the home view.
///
/// Only `active` events appear at all; an event with no `end_date` never
/// becomes past.
#[must_use]
pub fn classify(
    status: EventStatus,
    end_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<EventWindow> {
    if status != EventStatus::Active {
        return None;
    }

    match end_date {
        Some(end) if end < now => Some(EventWindow::Past),
        _ => Some(EventWindow::Upcoming),
    }
}

/// Partitions events into the home lists.
///
/// `events` must already be ordered by `start_date` ascending; the upcoming
/// list keeps that order and the past list is re-sorted by `end_date`
/// descending.
pub fn partition_home<T, S, E>(
    events: Vec<T>,
    now: DateTime<Utc>,
    status_of: S,
    end_date_of: E,
) -> HomePartition<T>
where
    S: Fn(&T) -> EventStatus,
    E: Fn(&T) -> Option<DateTime<Utc>>,
{
    let mut upcoming = Vec::new();
    let mut past = Vec::new();

    for event in events {
        match classify(status_of(&event), end_date_of(&event), now) {
            Some(EventWindow::Upcoming) => upcoming.push(event),
            Some(EventWindow::Past) => past.push(event),
            None => {}
        }
    }

    past.sort_by(|a, b| end_date_of(b).cmp(&end_date_of(a)));

    HomePartition { upcoming, past }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, d, 12, 0, 0).unwrap()
    }

    struct Fixture {
        name: &'static str,
        status: EventStatus,
        end_date: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_classify_windows() {
        let now = ts(15);

        assert_eq!(
            classify(EventStatus::Active, None, now),
            Some(EventWindow::Upcoming)
        );
        assert_eq!(
            classify(EventStatus::Active, Some(ts(20)), now),
            Some(EventWindow::Upcoming)
        );
        assert_eq!(
            classify(EventStatus::Active, Some(ts(10)), now),
            Some(EventWindow::Past)
        );
        // end_date equal to now is not yet past
        assert_eq!(
            classify(EventStatus::Active, Some(now), now),
            Some(EventWindow::Upcoming)
        );
    }

    #[test]
    fn test_non_active_events_are_hidden() {
        let now = ts(15);

        assert_eq!(classify(EventStatus::Draft, None, now), None);
        assert_eq!(classify(EventStatus::Suspended, Some(ts(20)), now), None);
        assert_eq!(classify(EventStatus::Completed, Some(ts(10)), now), None);
    }

    #[test]
    fn test_partition_scenario() {
        let now = ts(15);
        let events = vec![
            Fixture {
                name: "future",
                status: EventStatus::Active,
                end_date: Some(ts(25)),
            },
            Fixture {
                name: "ended",
                status: EventStatus::Active,
                end_date: Some(ts(5)),
            },
            Fixture {
                name: "draft",
                status: EventStatus::Draft,
                end_date: Some(ts(25)),
            },
        ];

        let split = partition_home(events, now, |e| e.status, |e| e.end_date);

        let upcoming: Vec<_> = split.upcoming.iter().map(|e| e.name).collect();
        let past: Vec<_> = split.past.iter().map(|e| e.name).collect();
        assert_eq!(upcoming, vec!["future"]);
        assert_eq!(past, vec!["ended"]);
    }

    #[test]
    fn test_past_is_ordered_by_end_descending() {
        let now = ts(20);
        let events = vec![
            Fixture {
                name: "first-to-end",
                status: EventStatus::Active,
                end_date: Some(ts(2)),
            },
            Fixture {
                name: "last-to-end",
                status: EventStatus::Active,
                end_date: Some(ts(10)),
            },
            Fixture {
                name: "middle",
                status: EventStatus::Active,
                end_date: Some(ts(6)),
            },
        ];

        let split = partition_home(events, now, |e| e.status, |e| e.end_date);

        let past: Vec<_> = split.past.iter().map(|e| e.name).collect();
        assert_eq!(past, vec!["last-to-end", "middle", "first-to-end"]);
        assert!(split.upcoming.is_empty());
    }
}
