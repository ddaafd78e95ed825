//! Fuel log analytics.
//!
//! Validates a raw table, normalizes each refill into a typed record with
//! distance and mileage, then rolls the records up per calendar month and
//! over the whole log.

pub mod analyzer;
pub mod monthly;
pub mod normalize;
pub mod rollup;
pub mod schema;
pub mod types;
pub mod utility;
