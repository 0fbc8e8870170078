//! Embedded page content
//!
//! `config/portfolio.yaml` is compiled into the binary and parsed once.

use std::sync::OnceLock;

use folio_types::Portfolio;

use crate::error::{FolioError, Result};

/// Embedded copy of `config/portfolio.yaml`
pub const PORTFOLIO_YAML: &str = include_str!("../config/portfolio.yaml");

static CATALOG: OnceLock<Portfolio> = OnceLock::new();

pub fn parse_portfolio(yaml: &str) -> Result<Portfolio> {
    serde_yaml::from_str(yaml).map_err(|e| FolioError::config("portfolio.yaml", e))
}

/// The page content. An unparsable embedded file renders an empty page
/// rather than a broken one; the content test keeps that from shipping.
pub fn catalog() -> &'static Portfolio {
    CATALOG.get_or_init(|| match parse_portfolio(PORTFOLIO_YAML) {
        Ok(portfolio) => {
            tracing::debug!(
                projects = portfolio.projects.len(),
                skills = portfolio.skills.len(),
                "content catalog loaded"
            );
            portfolio
        }
        Err(e) => {
            tracing::error!("Embedded portfolio content is invalid: {}", e);
            Portfolio::default()
        }
    })
}
