mod portfolio;

pub use portfolio::PortfolioPage;
