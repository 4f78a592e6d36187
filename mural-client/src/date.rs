//! pt-BR rendering of post timestamps.
//!
//! Relative durations are bucketed the same way date-fns' `formatDistance`
//! does it, so that "3 dias" means the same thing here as on the rest of the
//! web.

use std::fmt;

use chrono::{Datelike, Locale, Months, TimeZone};

use crate::api::Time;

const PUBLISHED_FORMAT: &str = "%-d de %b às %H:%Mh";

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_TWO_MONTHS: i64 = 86400;

/// Eg. `3 de mai às 20:00h`
pub fn format_published<Tz>(time: &Time, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    time.with_timezone(tz)
        .format_localized(PUBLISHED_FORMAT, Locale::pt_BR)
        .to_string()
}

/// Eg. `há cerca de 2 horas`
pub fn relative_to_now(time: &Time, now: &Time) -> String {
    let direction = match time > now {
        true => Direction::Future,
        false => Direction::Past,
    };
    direction.apply(&distance(time, now))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Past,
    Future,
}

impl Direction {
    pub fn apply(&self, d: &Distance) -> String {
        match self {
            Direction::Past => format!("há {d}"),
            Direction::Future => format!("em {d}"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Distance {
    LessThanAMinute,
    Minutes(i64),
    AboutHours(i64),
    Days(i64),
    AboutMonths(i64),
    Months(i64),
    AboutYears(i64),
    OverYears(i64),
    AlmostYears(i64),
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn plural(n: i64, one: &str, many: &str) -> String {
            match n {
                1 => format!("1 {one}"),
                n => format!("{n} {many}"),
            }
        }
        match *self {
            Distance::LessThanAMinute => write!(f, "menos de um minuto"),
            Distance::Minutes(n) => write!(f, "{}", plural(n, "minuto", "minutos")),
            Distance::AboutHours(n) => write!(f, "cerca de {}", plural(n, "hora", "horas")),
            Distance::Days(n) => write!(f, "{}", plural(n, "dia", "dias")),
            Distance::AboutMonths(n) => write!(f, "cerca de {}", plural(n, "mês", "meses")),
            Distance::Months(n) => write!(f, "{}", plural(n, "mês", "meses")),
            Distance::AboutYears(n) => write!(f, "cerca de {}", plural(n, "ano", "anos")),
            Distance::OverYears(n) => write!(f, "mais de {}", plural(n, "ano", "anos")),
            Distance::AlmostYears(n) => write!(f, "quase {}", plural(n, "ano", "anos")),
        }
    }
}

/// Humanized distance between two instants, regardless of their order
pub fn distance(a: &Time, b: &Time) -> Distance {
    let (earlier, later) = match a <= b {
        true => (a, b),
        false => (b, a),
    };
    let seconds = (*later - *earlier).num_seconds();
    let minutes = round_div(seconds, 60);

    if minutes < 2 {
        return match minutes {
            0 => Distance::LessThanAMinute,
            _ => Distance::Minutes(1),
        };
    }
    if minutes < 45 {
        return Distance::Minutes(minutes);
    }
    if minutes < 90 {
        return Distance::AboutHours(1);
    }
    if minutes < MINUTES_IN_DAY {
        return Distance::AboutHours(round_div(minutes, 60));
    }
    if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        return Distance::Days(1);
    }
    if minutes < MINUTES_IN_MONTH {
        return Distance::Days(round_div(minutes, MINUTES_IN_DAY));
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        return Distance::AboutMonths(round_div(minutes, MINUTES_IN_MONTH));
    }

    let months = full_months_between(earlier, later);
    if months < 12 {
        return Distance::Months(round_div(minutes, MINUTES_IN_MONTH));
    }
    let years = months / 12;
    match months % 12 {
        0..=2 => Distance::AboutYears(years),
        3..=8 => Distance::OverYears(years),
        _ => Distance::AlmostYears(years + 1),
    }
}

/// Rounds half up, for non-negative operands
fn round_div(n: i64, d: i64) -> i64 {
    (n + d / 2) / d
}

fn full_months_between(earlier: &Time, later: &Time) -> i64 {
    let months = (later.year() as i64 - earlier.year() as i64) * 12 + later.month() as i64
        - earlier.month() as i64;
    if months <= 0 {
        return 0;
    }
    // Shifting by months clamps to the last day of shorter months
    match earlier.checked_add_months(Months::new(months as u32)) {
        Some(shifted) if shifted > *later => months - 1,
        _ => months,
    }
}
