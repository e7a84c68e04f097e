//! A simple arithmetic calculator, independent of the ledger.

mod buffer;
mod expression;
mod page;

pub use page::{get_calculator_page, press_calculator_key};
