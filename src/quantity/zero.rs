use rust_decimal::Decimal;

pub trait Zero {
    const ZERO: Self;
}

impl Zero for i64 {
    const ZERO: Self = 0;
}

impl Zero for Decimal {
    const ZERO: Self = Decimal::ZERO;
}
