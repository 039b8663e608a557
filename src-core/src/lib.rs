pub mod alerts;
pub mod basket;
pub mod catalog;
pub mod discounts;
pub mod history;
pub mod recommendations;

pub mod constants;
pub mod errors;
pub mod utils;

pub use catalog::*;
pub use discounts::*;
