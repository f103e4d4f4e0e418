pub mod contact;
pub mod filter;
pub mod lightbox;
pub mod share;
