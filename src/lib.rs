#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

pub mod catalog;
pub mod cli;
pub mod fmt;
pub mod prelude;
pub mod quantity;
pub mod station;
pub mod tables;
pub mod tariff;
