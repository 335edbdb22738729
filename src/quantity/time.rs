quantity!(
    /// Whole minutes of play time.
    Minutes, via: i64, suffix: "min", precision: 0
);

impl Minutes {
    pub const ONE_HOUR: Self = Self(60);

    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Round the duration up to the nearest multiple of the interval.
    ///
    /// A duration already on the boundary is left as is. Both values must be positive.
    /// Returns [`None`] when the rounded duration does not fit.
    pub fn ceil_to_multiple_of(self, interval: Self) -> Option<Self> {
        match self.0 % interval.0 {
            0 => Some(self),
            remainder => (self.0 - remainder).checked_add(interval.0).map(Self),
        }
    }

    /// Split into whole hours and the remaining minutes.
    pub const fn hours_and_minutes(self) -> (i64, i64) {
        (self.0 / Self::ONE_HOUR.0, self.0 % Self::ONE_HOUR.0)
    }
}
