//! reltime library crate: relative time phrases ("2 godziny temu", "in 3 days").
//!
//! All modules are public so that `tests/` integration tests and the binary can
//! reach them; the common entry points are re-exported at the crate root.

pub mod clock;
pub mod config;
pub mod date;
pub mod error;
pub mod locale;
pub mod relative;
pub mod units;
pub mod util;

pub use clock::{Clock, FixedClock, SystemClock};
pub use date::IntoInstant;
pub use error::RelativeTimeError;
pub use locale::{FormatRelative, Locale, Numeric, RelativeTimeFormatter};
pub use relative::{relative_time, relative_time_at, shared_formatter, Rendered, Renderer};
pub use units::{select_unit, DurationUnit, Tense, UnitSelection};
