//! Units module: the fixed duration table and the unit selector.
//!
//! `DurationUnit` is a closed, ordered set of units whose discriminants are their
//! lengths in milliseconds. Month and year are fixed averages over a 365-day year,
//! not calendar arithmetic. `select_unit` picks the largest unit the difference
//! fits into without going below the caller's floor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RelativeTimeError;

/// A duration unit, valued in milliseconds.
///
/// Variants are declared in ascending order, so the derived `Ord` is the unit rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(i64)]
pub enum DurationUnit {
    #[default]
    Second = 1_000,
    Minute = 60_000,
    Hour = 3_600_000,
    Day = 86_400_000,
    /// One twelfth of a 365-day year (30.4166 days).
    Month = 2_628_000_000,
    /// 365 days.
    Year = 31_536_000_000,
}

impl DurationUnit {
    /// All units in ascending order.
    pub const ALL: [DurationUnit; 6] = [
        DurationUnit::Second,
        DurationUnit::Minute,
        DurationUnit::Hour,
        DurationUnit::Day,
        DurationUnit::Month,
        DurationUnit::Year,
    ];

    /// Length of the unit in milliseconds.
    pub const fn as_millis(self) -> i64 {
        self as i64
    }

    /// Semantic label passed to the locale formatter ("second" … "year").
    pub const fn label(self) -> &'static str {
        match self {
            DurationUnit::Second => "second",
            DurationUnit::Minute => "minute",
            DurationUnit::Hour => "hour",
            DurationUnit::Day => "day",
            DurationUnit::Month => "month",
            DurationUnit::Year => "year",
        }
    }

    /// The next larger unit, or `None` for `Year`.
    pub const fn larger(self) -> Option<DurationUnit> {
        match self {
            DurationUnit::Second => Some(DurationUnit::Minute),
            DurationUnit::Minute => Some(DurationUnit::Hour),
            DurationUnit::Hour => Some(DurationUnit::Day),
            DurationUnit::Day => Some(DurationUnit::Month),
            DurationUnit::Month => Some(DurationUnit::Year),
            DurationUnit::Year => None,
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DurationUnit {
    type Err = RelativeTimeError;

    /// Accepts the singular label, its plural, and the usual short forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "s" | "sec" | "second" | "seconds" => Ok(DurationUnit::Second),
            "m" | "min" | "minute" | "minutes" => Ok(DurationUnit::Minute),
            "h" | "hour" | "hours" => Ok(DurationUnit::Hour),
            "d" | "day" | "days" => Ok(DurationUnit::Day),
            "mo" | "month" | "months" => Ok(DurationUnit::Month),
            "y" | "year" | "years" => Ok(DurationUnit::Year),
            _ => Err(RelativeTimeError::UnknownUnit(s.to_string())),
        }
    }
}

/// Direction of a difference. Kept apart from the magnitude so a count that
/// truncates to zero still knows which side of "now" it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tense {
    /// The target is at or before "now".
    Past,
    Future,
}

impl Tense {
    /// Tense of `now - target` in milliseconds.
    pub const fn of_difference(difference_ms: i64) -> Tense {
        if difference_ms < 0 {
            Tense::Future
        } else {
            Tense::Past
        }
    }
}

/// The unit chosen for a difference and the whole count of that unit.
///
/// `magnitude` carries the sign of the difference: positive for the past,
/// negative for the future. `tense` is taken from the untruncated difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UnitSelection {
    pub unit: DurationUnit,
    pub magnitude: i64,
    pub tense: Tense,
}

/// Select the largest unit for `difference_ms` that is not below `floor`.
///
/// A unit is a candidate when the absolute difference is shorter than the next
/// larger unit and the floor does not exceed it; the first candidate in ascending
/// order wins and anything left over is expressed in years. The magnitude is the
/// quotient truncated toward zero, so `-1.5 h` becomes `-1`, not `-2`.
///
/// # Example
///
/// ```
/// use reltime::units::{select_unit, DurationUnit};
///
/// let sel = select_unit(2_500, DurationUnit::Second);
/// assert_eq!(sel.unit, DurationUnit::Second);
/// assert_eq!(sel.magnitude, 2);
/// ```
pub fn select_unit(difference_ms: i64, floor: DurationUnit) -> UnitSelection {
    let distance = difference_ms.unsigned_abs();

    let unit = DurationUnit::ALL
        .into_iter()
        .filter(|unit| *unit >= floor)
        .find(|unit| match unit.larger() {
            Some(next) => distance < next.as_millis() as u64,
            None => false,
        })
        .unwrap_or(DurationUnit::Year);

    UnitSelection {
        unit,
        magnitude: difference_ms / unit.as_millis(),
        tense: Tense::of_difference(difference_ms),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: i64 = DurationUnit::Second.as_millis();
    const MINUTE: i64 = DurationUnit::Minute.as_millis();
    const HOUR: i64 = DurationUnit::Hour.as_millis();
    const DAY: i64 = DurationUnit::Day.as_millis();
    const MONTH: i64 = DurationUnit::Month.as_millis();
    const YEAR: i64 = DurationUnit::Year.as_millis();

    fn sel(unit: DurationUnit, magnitude: i64) -> UnitSelection {
        UnitSelection {
            unit,
            magnitude,
            tense: Tense::of_difference(magnitude),
        }
    }

    fn future(unit: DurationUnit, magnitude: i64) -> UnitSelection {
        UnitSelection {
            unit,
            magnitude,
            tense: Tense::Future,
        }
    }

    #[test]
    fn test_unit_lengths() {
        assert_eq!(SECOND, 1_000);
        assert_eq!(MINUTE, 60 * SECOND);
        assert_eq!(HOUR, 60 * MINUTE);
        assert_eq!(DAY, 24 * HOUR);
        assert_eq!(YEAR, 365 * DAY);
        assert_eq!(MONTH * 12, YEAR);
    }

    #[test]
    fn test_units_are_ordered_by_length() {
        for pair in DurationUnit::ALL.windows(2) {
            assert!(pair[0] < pair[1], "{} should rank below {}", pair[0], pair[1]);
            assert!(pair[0].as_millis() < pair[1].as_millis());
        }
    }

    #[test]
    fn test_select_unit_seconds() {
        assert_eq!(select_unit(0, DurationUnit::Second), sel(DurationUnit::Second, 0));
        assert_eq!(select_unit(2_500, DurationUnit::Second), sel(DurationUnit::Second, 2));
        assert_eq!(select_unit(59_999, DurationUnit::Second), sel(DurationUnit::Second, 59));
    }

    #[test]
    fn test_select_unit_boundaries() {
        assert_eq!(select_unit(MINUTE, DurationUnit::Second), sel(DurationUnit::Minute, 1));
        assert_eq!(select_unit(HOUR - 1, DurationUnit::Second), sel(DurationUnit::Minute, 59));
        assert_eq!(select_unit(HOUR, DurationUnit::Second), sel(DurationUnit::Hour, 1));
        assert_eq!(select_unit(DAY - 1, DurationUnit::Second), sel(DurationUnit::Hour, 23));
        assert_eq!(select_unit(DAY, DurationUnit::Second), sel(DurationUnit::Day, 1));
        assert_eq!(select_unit(MONTH - 1, DurationUnit::Second), sel(DurationUnit::Day, 30));
        assert_eq!(select_unit(MONTH, DurationUnit::Second), sel(DurationUnit::Month, 1));
        assert_eq!(select_unit(YEAR - 1, DurationUnit::Second), sel(DurationUnit::Month, 11));
        assert_eq!(select_unit(YEAR, DurationUnit::Second), sel(DurationUnit::Year, 1));
    }

    #[test]
    fn test_select_unit_respects_floor() {
        // 2 hours with a day floor: reported as 0 days
        assert_eq!(select_unit(2 * HOUR, DurationUnit::Day), sel(DurationUnit::Day, 0));
        // 30 seconds with a minute floor
        assert_eq!(select_unit(30 * SECOND, DurationUnit::Minute), sel(DurationUnit::Minute, 0));
        // 5 days with a month floor
        assert_eq!(select_unit(5 * DAY, DurationUnit::Month), sel(DurationUnit::Month, 0));
    }

    #[test]
    fn test_select_unit_year_floor_always_years() {
        assert_eq!(select_unit(0, DurationUnit::Year), sel(DurationUnit::Year, 0));
        assert_eq!(select_unit(10 * DAY, DurationUnit::Year), sel(DurationUnit::Year, 0));
        assert_eq!(select_unit(3 * YEAR, DurationUnit::Year), sel(DurationUnit::Year, 3));
    }

    #[test]
    fn test_select_unit_future_uses_absolute_distance() {
        assert_eq!(select_unit(-2 * HOUR, DurationUnit::Second), sel(DurationUnit::Hour, -2));
        assert_eq!(select_unit(-3 * DAY, DurationUnit::Second), sel(DurationUnit::Day, -3));
        assert_eq!(select_unit(-YEAR, DurationUnit::Second), sel(DurationUnit::Year, -1));
    }

    #[test]
    fn test_select_unit_truncates_toward_zero() {
        // -1.5 hours: truncation gives -1, mathematical floor would give -2
        assert_eq!(select_unit(-(HOUR + HOUR / 2), DurationUnit::Second), sel(DurationUnit::Hour, -1));
        // -0.5 seconds truncates to zero
        assert_eq!(select_unit(-500, DurationUnit::Second), future(DurationUnit::Second, 0));
    }

    #[test]
    fn test_select_unit_zero_count_keeps_direction() {
        // 2 hours ahead with a day floor truncates to 0 days but stays in the future
        let ahead = select_unit(-2 * HOUR, DurationUnit::Day);
        assert_eq!(ahead, future(DurationUnit::Day, 0));
        assert_eq!(ahead.tense, Tense::Future);

        let behind = select_unit(2 * HOUR, DurationUnit::Day);
        assert_eq!(behind.magnitude, 0);
        assert_eq!(behind.tense, Tense::Past);

        // exactly now counts as past
        assert_eq!(select_unit(0, DurationUnit::Second).tense, Tense::Past);
    }

    #[test]
    fn test_select_unit_extreme_values() {
        let max = select_unit(i64::MAX, DurationUnit::Second);
        assert_eq!(max.unit, DurationUnit::Year);
        assert_eq!(max.magnitude, i64::MAX / YEAR);

        let min = select_unit(i64::MIN, DurationUnit::Second);
        assert_eq!(min.unit, DurationUnit::Year);
        assert_eq!(min.magnitude, i64::MIN / YEAR);
    }

    #[test]
    fn test_select_unit_never_below_floor() {
        let samples = [0, 1, 999, MINUTE, 5 * HOUR, 3 * DAY, 2 * MONTH, 7 * YEAR, -4 * DAY];
        for floor in DurationUnit::ALL {
            for diff in samples {
                let picked = select_unit(diff, floor);
                assert!(
                    picked.unit >= floor,
                    "select_unit({diff}, {floor}) returned {}",
                    picked.unit
                );
            }
        }
    }

    #[test]
    fn test_duration_unit_from_str() {
        assert_eq!("second".parse::<DurationUnit>().unwrap(), DurationUnit::Second);
        assert_eq!("Minutes".parse::<DurationUnit>().unwrap(), DurationUnit::Minute);
        assert_eq!("h".parse::<DurationUnit>().unwrap(), DurationUnit::Hour);
        assert_eq!(" day ".parse::<DurationUnit>().unwrap(), DurationUnit::Day);
        assert_eq!("mo".parse::<DurationUnit>().unwrap(), DurationUnit::Month);
        assert_eq!("years".parse::<DurationUnit>().unwrap(), DurationUnit::Year);

        let err = "fortnight".parse::<DurationUnit>().unwrap_err();
        assert!(
            matches!(err, RelativeTimeError::UnknownUnit(ref s) if s == "fortnight"),
            "unexpected error: {err:?}"
        );
    }

    #[test]
    fn test_duration_unit_display_is_label() {
        assert_eq!(DurationUnit::Month.to_string(), "month");
        assert_eq!(DurationUnit::default(), DurationUnit::Second);
    }
}
