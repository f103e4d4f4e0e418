pub mod portfolio;

pub use portfolio::{Category, PortfolioItem, PORTFOLIO};
