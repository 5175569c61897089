//! # Time Normalizer
//!
//! Working hours are stored as UTC times-of-day and reservations as UTC
//! instants, while clients speak local wall-clock time in a named IANA zone.
//! This module owns both directions of that conversion.
//!
//! Because working hours carry no date component, converting them requires
//! an anchor calendar date to resolve the zone's offset. The offset is
//! sampled at noon of the anchor date, so a DST transition at the edge of
//! the day cannot flip conversions halfway through a query; slot
//! computation always anchors on the queried date, which keeps every
//! conversion within a single request consistent.

use std::sync::Arc;

use chrono::{
    DateTime, Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    TimeZone, Utc,
};
use chrono_tz::Tz;

use crate::errors::{BookingError, BookingResult};

/// Capability that resolves a named timezone to a fixed UTC offset for a
/// given calendar date.
///
/// Abstracted as a trait so the tz database dependency can be swapped for a
/// canned table in tests.
pub trait OffsetResolver: Send + Sync {
    fn resolve(&self, zone: &str, date: NaiveDate) -> BookingResult<FixedOffset>;
}

/// Production resolver backed by the embedded IANA database (chrono-tz).
#[derive(Debug, Default, Clone, Copy)]
pub struct TzdbResolver;

impl OffsetResolver for TzdbResolver {
    fn resolve(&self, zone: &str, date: NaiveDate) -> BookingResult<FixedOffset> {
        let tz: Tz = zone
            .parse()
            .map_err(|_| BookingError::InvalidTimezone(zone.to_string()))?;

        // Noon sidesteps the ambiguous/skipped wall times around a DST jump.
        let noon = date.and_time(NaiveTime::MIN) + Duration::hours(12);
        let offset = match tz.offset_from_local_datetime(&noon) {
            LocalResult::Single(offset) => offset.fix(),
            LocalResult::Ambiguous(earliest, _) => earliest.fix(),
            LocalResult::None => tz.offset_from_utc_datetime(&noon).fix(),
        };

        Ok(offset)
    }
}

/// Converts between local wall-clock values and their UTC representation.
#[derive(Clone)]
pub struct TimeNormalizer {
    resolver: Arc<dyn OffsetResolver>,
}

impl TimeNormalizer {
    pub fn new(resolver: Arc<dyn OffsetResolver>) -> Self {
        Self { resolver }
    }

    /// Normalizer backed by the embedded tz database.
    pub fn tzdb() -> Self {
        Self::new(Arc::new(TzdbResolver))
    }

    /// Parses an `HH:mm` wall-clock string.
    pub fn parse_hhmm(value: &str) -> BookingResult<NaiveTime> {
        NaiveTime::parse_from_str(value, "%H:%M")
            .map_err(|_| BookingError::InvalidTimeFormat(value.to_string()))
    }

    /// Interprets `local` as wall-clock time in `zone` on `anchor` and
    /// returns the equivalent UTC time-of-day.
    pub fn to_utc_time_of_day(
        &self,
        local: &str,
        zone: &str,
        anchor: NaiveDate,
    ) -> BookingResult<NaiveTime> {
        let time = Self::parse_hhmm(local)?;
        let offset = self.resolver.resolve(zone, anchor)?;
        let utc = anchor.and_time(time) - offset_duration(offset);
        Ok(utc.time())
    }

    /// Inverse of [`to_utc_time_of_day`](Self::to_utc_time_of_day),
    /// formatted `HH:mm`.
    pub fn to_local_time_of_day(
        &self,
        utc: NaiveTime,
        zone: &str,
        anchor: NaiveDate,
    ) -> BookingResult<String> {
        let offset = self.resolver.resolve(zone, anchor)?;
        let local = anchor.and_time(utc) + offset_duration(offset);
        Ok(local.format("%H:%M").to_string())
    }

    /// Interprets a local wall-clock timestamp in `zone` as a UTC instant.
    pub fn to_utc_instant(&self, local: NaiveDateTime, zone: &str) -> BookingResult<DateTime<Utc>> {
        let offset = self.resolver.resolve(zone, local.date())?;
        Ok(Utc.from_utc_datetime(&(local - offset_duration(offset))))
    }

    /// Converts a UTC instant to the client's local wall-clock timestamp,
    /// for display. The offset is resolved on the instant's own UTC date.
    pub fn to_local_instant(&self, utc: DateTime<Utc>, zone: &str) -> BookingResult<NaiveDateTime> {
        let offset = self.resolver.resolve(zone, utc.date_naive())?;
        Ok(utc.naive_utc() + offset_duration(offset))
    }

    /// Validates `zone` against the resolver without converting anything.
    pub fn check_zone(&self, zone: &str, date: NaiveDate) -> BookingResult<()> {
        self.resolver.resolve(zone, date).map(|_| ())
    }
}

fn offset_duration(offset: FixedOffset) -> Duration {
    Duration::seconds(offset.local_minus_utc() as i64)
}
