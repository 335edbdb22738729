use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use rust_decimal::{Decimal, RoundingStrategy};

quantity!(
    /// Monetary amount in the station type's currency.
    Price, via: Decimal
);

impl Price {
    const CENT_PLACES: u32 = 2;

    /// Round to cents, half away from zero.
    #[must_use]
    pub fn round_to_cents(self) -> Self {
        Self(self.0.round_dp_with_strategy(Self::CENT_PLACES, RoundingStrategy::MidpointAwayFromZero))
    }

    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }
}

impl Mul<Decimal> for Price {
    type Output = Self;

    fn mul(self, rhs: Decimal) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl Display for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}", self.round_to_cents().0)
    }
}

impl Debug for Price {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
