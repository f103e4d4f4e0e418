pub mod contact;
pub mod footer;
pub mod hero;
pub mod lightbox;
pub mod nav;
pub mod philosophy;
pub mod portfolio;
pub mod services;
