//! # Availability Calculator
//!
//! Enumerates the bookable start instants for one employee on one day.
//! Candidates are generated at a fixed granularity from the business's UTC
//! open time; a candidate survives if the whole appointment fits before the
//! close time and it overlaps no existing reservation.
//!
//! Overlap uses half-open interval semantics `[start, start + duration)`:
//! two intervals conflict iff `a.start < b.end && b.start < a.end`. Exact
//! back-to-back bookings therefore do not conflict.
//!
//! The calculator is pure and lazy: it holds a snapshot of the booked
//! intervals it was built with and yields slots on demand. Nothing is
//! cached between calls; callers rebuild it per query.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

/// Default spacing between candidate slot starts, in minutes.
pub const DEFAULT_GRANULARITY_MINUTES: i64 = 15;

/// Half-open time interval `[start, end)` on the UTC timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Interval {
    pub fn starting_at(start: DateTime<Utc>, duration: Duration) -> Self {
        Self {
            start,
            end: start + duration,
        }
    }

    /// Half-open overlap test; touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Lazy iterator over the available slot starts of one day, ascending.
#[derive(Debug, Clone)]
pub struct AvailableSlots {
    cursor: DateTime<Utc>,
    close: DateTime<Utc>,
    duration: Duration,
    granularity: Duration,
    booked: Vec<Interval>,
}

impl AvailableSlots {
    /// Builds the calculator for `date`, with `open`/`close` as UTC
    /// times-of-day and `booked` the employee's blocking reservations.
    pub fn new(
        date: NaiveDate,
        open: NaiveTime,
        close: NaiveTime,
        duration: Duration,
        granularity: Duration,
        booked: Vec<Interval>,
    ) -> Self {
        // A non-positive granularity would never advance the cursor.
        let granularity = if granularity > Duration::zero() {
            granularity
        } else {
            Duration::minutes(DEFAULT_GRANULARITY_MINUTES)
        };

        Self {
            cursor: Utc.from_utc_datetime(&date.and_time(open)),
            close: Utc.from_utc_datetime(&date.and_time(close)),
            duration,
            granularity,
            booked,
        }
    }
}

impl Iterator for AvailableSlots {
    type Item = DateTime<Utc>;

    fn next(&mut self) -> Option<DateTime<Utc>> {
        while self.cursor < self.close {
            let candidate = Interval::starting_at(self.cursor, self.duration);

            // Candidate ends are monotonic, so the first one past closing
            // time exhausts the day.
            if candidate.end > self.close {
                self.cursor = self.close;
                return None;
            }

            self.cursor += self.granularity;

            if !self.booked.iter().any(|booked| booked.overlaps(&candidate)) {
                return Some(candidate.start);
            }
        }

        None
    }
}
