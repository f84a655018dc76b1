pub mod csv_export;
pub mod di;
pub mod json;
pub mod repositories;
