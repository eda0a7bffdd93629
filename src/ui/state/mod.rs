pub mod filter_state;
pub mod selection;
