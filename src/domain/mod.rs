pub mod aggregation;
pub mod entry;
pub mod error;
pub mod filter;
pub mod repositories;
pub mod tag;
