//! Embedded site content

use folio_common::{ContentError, Portfolio};
use tracing::{info, warn};

const PORTFOLIO_JSON: &str = include_str!("../../content/portfolio.json");

/// Parse the content document compiled into the binary.
pub fn load_portfolio() -> Result<Portfolio, ContentError> {
    let portfolio = Portfolio::from_json(PORTFOLIO_JSON)?;

    for key in portfolio.orphan_gallery_keys() {
        warn!("Gallery images registered for \"{key}\" but no project has that title");
    }

    info!(
        "Loaded portfolio content: {} projects, {} gallery entries",
        portfolio.projects.len(),
        portfolio.gallery.keys().count()
    );

    Ok(portfolio)
}
