use std::fmt::{Debug, Display, Formatter};

use crate::{
    quantity::{price::Price, ratios::Percent, time::Minutes},
    station::Currency,
};

/// Human-friendly duration: `45 min`, `1 h`, or `1 h 30 min`.
pub struct FormattedDuration(pub Minutes);

impl Display for FormattedDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0.hours_and_minutes() {
            (0, minutes) => write!(f, "{minutes} min"),
            (hours, 0) => write!(f, "{hours} h"),
            (hours, minutes) => write!(f, "{hours} h {minutes} min"),
        }
    }
}

impl Debug for FormattedDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

pub struct FormattedPrice<'a>(pub Price, pub &'a Currency);

impl Display for FormattedPrice<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.0, self.1)
    }
}

pub struct FormattedPercentage(pub Percent);

impl Debug for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.0.0.normalize())
    }
}
