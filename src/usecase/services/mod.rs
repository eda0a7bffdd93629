pub mod listing_service;
pub mod retrigger_service;
