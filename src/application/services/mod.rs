pub mod entry_service;
pub mod entry_service_impl;
