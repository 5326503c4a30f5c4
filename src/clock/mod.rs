//! Clock module: where the renderer reads "now" from.
//!
//! `SystemClock` reads the wall clock on every call. `FixedClock` pins "now"
//! to one instant, which keeps rendering deterministic:
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use reltime::{Clock, FixedClock};
//!
//! let pinned = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
//! let clock = FixedClock(pinned);
//! assert_eq!(clock.now(), pinned);
//! assert_eq!(clock.now(), pinned);
//! ```

use chrono::{DateTime, Utc};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the wall clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant. Used to pin "now" in tests and from `--now`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}
