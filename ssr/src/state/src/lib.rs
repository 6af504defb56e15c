#[cfg(feature = "ssr")]
pub mod server;
pub mod upload_form;
