pub mod enums;
pub mod listing;
pub mod records;
