#[macro_use]
pub mod macros;

pub mod price;
pub mod rate;
pub mod ratios;
pub mod time;
mod zero;

pub use self::zero::Zero;
