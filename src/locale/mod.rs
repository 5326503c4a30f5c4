//! Locale module: the relative-time formatting capability.
//!
//! `FormatRelative` is the seam the renderer talks to. It follows the
//! `format(value, tense, unit)` convention: negative values lie in the past,
//! positive values in the future, and `tense` gives the direction of a zero.
//! `RelativeTimeFormatter` is the built-in implementation, backed by the ICU4X
//! relative-time formatter and its compiled CLDR data for Polish and English.

use std::fmt;
use std::str::FromStr;

use fixed_decimal::{FixedDecimal, Sign};
use icu_experimental::relativetime::options::{
    Numeric as IcuNumeric, RelativeTimeFormatterOptions,
};
use icu_experimental::relativetime::RelativeTimeFormatter as IcuFormatter;
use icu_locid::locale;
use icu_provider::DataLocale;
use serde::{Deserialize, Serialize};
use writeable::Writeable;

use crate::error::RelativeTimeError;
use crate::units::{DurationUnit, Tense};

/// Renders a signed count of a unit as a phrase.
pub trait FormatRelative {
    fn format(&self, value: i64, tense: Tense, unit: DurationUnit) -> String;
}

impl<F: FormatRelative + ?Sized> FormatRelative for &F {
    fn format(&self, value: i64, tense: Tense, unit: DurationUnit) -> String {
        (**self).format(value, tense, unit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Pl,
    En,
}

impl Locale {
    pub const fn tag(self) -> &'static str {
        match self {
            Locale::Pl => "pl",
            Locale::En => "en",
        }
    }

    fn data_locale(self) -> DataLocale {
        match self {
            Locale::Pl => DataLocale::from(locale!("pl")),
            Locale::En => DataLocale::from(locale!("en")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = RelativeTimeError;

    /// Matches on the language subtag, so `pl-PL` and `en_GB` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let language = s.trim().split(['-', '_']).next().unwrap_or_default();
        match language.to_ascii_lowercase().as_str() {
            "pl" => Ok(Locale::Pl),
            "en" => Ok(Locale::En),
            _ => Err(RelativeTimeError::UnknownLocale(s.to_string())),
        }
    }
}

/// Whether idiomatic phrases ("yesterday") may replace counted ones ("1 day ago").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Numeric {
    #[default]
    Auto,
    Always,
}

impl fmt::Display for Numeric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Numeric::Auto => f.write_str("auto"),
            Numeric::Always => f.write_str("always"),
        }
    }
}

impl FromStr for Numeric {
    type Err = RelativeTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Numeric::Auto),
            "always" => Ok(Numeric::Always),
            _ => Err(RelativeTimeError::UnknownNumeric(s.to_string())),
        }
    }
}

/// Built-in relative-time formatter: one ICU4X long-form formatter per unit.
///
/// Immutable once constructed, so one instance can be shared between threads.
pub struct RelativeTimeFormatter {
    locale: Locale,
    numeric: Numeric,
    second: IcuFormatter,
    minute: IcuFormatter,
    hour: IcuFormatter,
    day: IcuFormatter,
    month: IcuFormatter,
    year: IcuFormatter,
}

impl RelativeTimeFormatter {
    /// Load the CLDR data for `locale` for all six units.
    pub fn try_new(locale: Locale, numeric: Numeric) -> Result<Self, RelativeTimeError> {
        let data_locale = locale.data_locale();
        let mut options = RelativeTimeFormatterOptions::default();
        options.numeric = match numeric {
            Numeric::Auto => IcuNumeric::Auto,
            Numeric::Always => IcuNumeric::Always,
        };
        let data_error = |e| formatter_data_error(locale, e);

        Ok(Self {
            locale,
            numeric,
            second: IcuFormatter::try_new_long_second(&data_locale, options).map_err(data_error)?,
            minute: IcuFormatter::try_new_long_minute(&data_locale, options).map_err(data_error)?,
            hour: IcuFormatter::try_new_long_hour(&data_locale, options).map_err(data_error)?,
            day: IcuFormatter::try_new_long_day(&data_locale, options).map_err(data_error)?,
            month: IcuFormatter::try_new_long_month(&data_locale, options).map_err(data_error)?,
            year: IcuFormatter::try_new_long_year(&data_locale, options).map_err(data_error)?,
        })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn numeric(&self) -> Numeric {
        self.numeric
    }

    fn unit_formatter(&self, unit: DurationUnit) -> &IcuFormatter {
        match unit {
            DurationUnit::Second => &self.second,
            DurationUnit::Minute => &self.minute,
            DurationUnit::Hour => &self.hour,
            DurationUnit::Day => &self.day,
            DurationUnit::Month => &self.month,
            DurationUnit::Year => &self.year,
        }
    }
}

fn formatter_data_error(locale: Locale, e: impl fmt::Debug) -> RelativeTimeError {
    RelativeTimeError::FormatterData(format!("{locale}: {e:?}"))
}

impl fmt::Debug for RelativeTimeFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelativeTimeFormatter")
            .field("locale", &self.locale)
            .field("numeric", &self.numeric)
            .finish_non_exhaustive()
    }
}

impl FormatRelative for RelativeTimeFormatter {
    fn format(&self, value: i64, tense: Tense, unit: DurationUnit) -> String {
        let mut decimal = FixedDecimal::from(value);
        // a zero count still needs a direction: "-0" is past, "+0" is future
        if value == 0 && tense == Tense::Past {
            decimal.set_sign(Sign::Negative);
        }
        self.unit_formatter(unit)
            .format(decimal)
            .write_to_string()
            .into_owned()
    }
}
