#[cfg(feature = "ssr")]
pub mod health;
pub mod notify;
pub mod process_ai;
pub mod validation;
pub mod web;
