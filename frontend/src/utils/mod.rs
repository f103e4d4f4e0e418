pub mod api;
pub mod browser;
