pub mod not_found;
pub mod process_ai;
