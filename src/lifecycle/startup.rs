//! Startup orchestration.
//!
//! # Responsibilities
//! - Compose the route registry from the page modules
//! - Fail fast on any routing configuration error
//!
//! # Design Decisions
//! - The registry is built once and frozen behind an Arc
//! - Listeners start only after routing is known good

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::pages::faq;
use crate::routing::{RouteError, RouteRegistry};

/// Mount every page section at the prefixes `config` names.
pub fn build_registry(config: &SiteConfig) -> Result<Arc<RouteRegistry>, RouteError> {
    let mut registry = RouteRegistry::new();
    faq::register(&mut registry, &config.site.faq_prefix)?;

    tracing::info!(
        faq_prefix = %config.site.faq_prefix,
        routes = registry.route_count(),
        "Route registry built"
    );

    Ok(Arc::new(registry))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_registry_defaults() {
        let registry = build_registry(&SiteConfig::default()).unwrap();
        assert_eq!(registry.route_count(), 5);
        assert!(registry.resolve("/faq/http-adapter").is_ok());
    }

    #[test]
    fn test_build_registry_custom_prefix() {
        let mut config = SiteConfig::default();
        config.site.faq_prefix = "docs/faq".into();

        let registry = build_registry(&config).unwrap();
        assert!(registry.resolve("/docs/faq/global-prefix").is_ok());
        assert!(registry.resolve("/faq/global-prefix").unwrap_err().is_not_found());
    }
}
