use rust_decimal::Decimal;

quantity!(Percent, via: Decimal, suffix: "%", precision: 1);

impl Percent {
    pub const HUNDRED: Self = Self(Decimal::ONE_HUNDRED);

    /// Clamp into `0..=100`.
    #[must_use]
    pub fn clamped(self) -> Self {
        self.clamp(Self::ZERO, Self::HUNDRED)
    }

    /// Convert the percentage into `0..=1` (for a clamped value).
    pub fn to_ratio(self) -> Decimal {
        self.0 / Decimal::ONE_HUNDRED
    }
}
