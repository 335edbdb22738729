use rust_decimal::Decimal;

use crate::quantity::{price::Price, time::Minutes};

quantity!(
    /// Price of one hour of play.
    HourlyRate, via: Decimal, suffix: "/h", precision: 2
);

impl HourlyRate {
    /// Unrounded price of the duration, or [`None`] on overflow.
    ///
    /// Rounding to cents is up to the caller.
    pub fn checked_mul(self, duration: Minutes) -> Option<Price> {
        self.0
            .checked_mul(Decimal::from(duration.0))?
            .checked_div(Decimal::from(Minutes::ONE_HOUR.0))
            .map(Price)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::dec;

    use super::*;

    #[test]
    fn test_mul_minutes() {
        assert_eq!(HourlyRate(dec!(20)).checked_mul(Minutes(60)), Some(Price(dec!(20))));
        assert_eq!(HourlyRate(dec!(15)).checked_mul(Minutes(45)), Some(Price(dec!(11.25))));
    }

    #[test]
    fn test_mul_keeps_precision() {
        // 10/h for 10 minutes is 1.666…, rounded only by the caller:
        let price = HourlyRate(dec!(10)).checked_mul(Minutes(10)).unwrap();
        assert!(price.0 > dec!(1.66) && price.0 < dec!(1.67));
        assert_eq!(price.round_to_cents(), Price(dec!(1.67)));
    }

    #[test]
    fn test_mul_overflow() {
        assert_eq!(HourlyRate(Decimal::MAX).checked_mul(Minutes(60)), None);
        assert!(HourlyRate(dec!(20)).checked_mul(Minutes(i64::MAX)).is_some());
    }
}
