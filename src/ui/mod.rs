pub mod figures;
pub mod filters;
pub mod listing;
pub mod state;
