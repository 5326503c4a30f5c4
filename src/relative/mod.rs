//! Relative module: the renderer tying clock, unit selection and formatting together.
//!
//! `Renderer` owns a clock and a formatter and turns a date into a phrase:
//! difference from "now" in milliseconds, unit selection, then the formatter is
//! called with the negated magnitude and the tense so past dates read as "… ago".
//!
//! The free functions use the system clock and the process-wide formatter
//! returned by [`shared_formatter`].

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::Serialize;

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::date::IntoInstant;
use crate::error::RelativeTimeError;
use crate::locale::{FormatRelative, Locale, Numeric, RelativeTimeFormatter};
use crate::units::{select_unit, DurationUnit, UnitSelection};

static FORMATTER: Lazy<Result<RelativeTimeFormatter, String>> = Lazy::new(|| {
    RelativeTimeFormatter::try_new(Locale::Pl, Numeric::Auto).map_err(|e| match e {
        RelativeTimeError::FormatterData(detail) => detail,
        other => other.to_string(),
    })
});

/// Shared formatter: Polish, numeric `auto`. Built on first use, read-only afterwards.
pub fn shared_formatter() -> Result<&'static RelativeTimeFormatter, RelativeTimeError> {
    FORMATTER
        .as_ref()
        .map_err(|e| RelativeTimeError::FormatterData(e.clone()))
}

/// Everything computed while rendering one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    pub target: DateTime<Utc>,
    pub now: DateTime<Utc>,
    /// `now - target` in milliseconds; positive means the target is in the past.
    pub difference_ms: i64,
    #[serde(flatten)]
    pub selection: UnitSelection,
    pub text: String,
}

#[derive(Debug, Clone)]
pub struct Renderer<C = SystemClock, F = &'static RelativeTimeFormatter> {
    clock: C,
    formatter: F,
}

impl Renderer {
    /// System clock with the shared formatter.
    pub fn shared() -> Result<Self, RelativeTimeError> {
        Ok(Renderer::new(SystemClock, shared_formatter()?))
    }
}

impl<C: Clock, F: FormatRelative> Renderer<C, F> {
    pub fn new(clock: C, formatter: F) -> Self {
        Self { clock, formatter }
    }

    /// Render `date` relative to the clock's current instant.
    pub fn render(
        &self,
        date: impl IntoInstant,
        smallest: DurationUnit,
    ) -> Result<String, RelativeTimeError> {
        Ok(self.describe(date, smallest)?.text)
    }

    /// Like [`Renderer::render`], but returns the intermediate values as well.
    ///
    /// "Now" is read from the clock on every call.
    pub fn describe(
        &self,
        date: impl IntoInstant,
        smallest: DurationUnit,
    ) -> Result<Rendered, RelativeTimeError> {
        let target = date.into_instant()?;
        let now = self.clock.now();
        let difference_ms = now.signed_duration_since(target).num_milliseconds();

        let selection = select_unit(difference_ms, smallest);
        tracing::debug!(
            %target,
            %now,
            difference_ms,
            unit = %selection.unit,
            magnitude = selection.magnitude,
            "selected unit"
        );

        // magnitude cannot be i64::MIN: the smallest divisor is 1000
        let text = self
            .formatter
            .format(-selection.magnitude, selection.tense, selection.unit);

        Ok(Rendered {
            target,
            now,
            difference_ms,
            selection,
            text,
        })
    }
}

/// Render `date` against the system clock with the shared formatter.
///
/// ```no_run
/// use reltime::{relative_time, DurationUnit};
///
/// let phrase = relative_time("2024-01-10T10:00:00Z", DurationUnit::Second)?;
/// println!("{phrase}");
/// # Ok::<(), reltime::RelativeTimeError>(())
/// ```
pub fn relative_time(
    date: impl IntoInstant,
    smallest: DurationUnit,
) -> Result<String, RelativeTimeError> {
    Renderer::shared()?.render(date, smallest)
}

/// Render `date` against a pinned `now` with the shared formatter.
pub fn relative_time_at(
    date: impl IntoInstant,
    smallest: DurationUnit,
    now: DateTime<Utc>,
) -> Result<String, RelativeTimeError> {
    Renderer::new(FixedClock(now), shared_formatter()?).render(date, smallest)
}
