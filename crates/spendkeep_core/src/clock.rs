//! Time source seam for controllers and statistics.

use chrono::{DateTime, NaiveDate, Utc};

pub trait Clock {
    /// Current instant, used for record timestamps and ids.
    fn now(&self) -> DateTime<Utc>;
    /// Current UTC calendar date, used for "today" statistics and form
    /// limits.
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self { now }
    }

    /// Pins the clock to noon UTC of `date`.
    pub fn at_date(date: NaiveDate) -> Self {
        let noon = date.and_hms_opt(12, 0, 0).expect("noon is a valid time");
        Self::new(noon.and_utc())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, FixedClock, SystemClock};
    use chrono::{NaiveDate, TimeZone, Utc};

    #[test]
    fn today_is_the_utc_date_of_now() {
        let late = FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 14, 23, 59, 59).unwrap());
        assert_eq!(late.today(), NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());

        let before = Utc::now().date_naive();
        let today = SystemClock.today();
        let after = Utc::now().date_naive();
        assert!(before <= today && today <= after);
    }
}
