// src/application/mod.rs
pub mod error;
pub mod services;

// Re-export key services for easier imports
pub use services::entry_service_impl::EntryServiceImpl;
