//! Route table: an ordered, validated set of routes.
//!
//! # Responsibilities
//! - Validate entries once, at construction
//! - Resolve an exact path segment to its entry
//! - Enumerate entries in declaration order
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc without locks)
//! - Exact, case-sensitive matching; first match wins
//! - Explicit NotFound rather than a synthesized fallback

use std::collections::HashMap;

use crate::pages::Component;
use crate::routing::error::RouteError;
use crate::routing::registry::RouteRegistry;
use crate::routing::route::RouteEntry;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a table, rejecting duplicate or malformed paths and empty titles.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteError> {
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(entries.len());

        for (index, entry) in entries.iter().enumerate() {
            validate_segment(&entry.path)?;

            if entry.data.title.trim().is_empty() {
                return Err(RouteError::EmptyTitle {
                    path: entry.path.clone(),
                });
            }

            if let Some(first) = seen.insert(entry.path.as_str(), index) {
                return Err(RouteError::DuplicatePath {
                    path: entry.path.clone(),
                    first,
                    second: index,
                });
            }
        }

        Ok(Self { entries })
    }

    /// Look up an exact path segment.
    pub fn resolve(&self, path: &str) -> Result<&RouteEntry, RouteError> {
        self.entries
            .iter()
            .find(|entry| entry.path == path)
            .ok_or_else(|| RouteError::NotFound {
                path: path.to_string(),
            })
    }

    /// Fail unless every component in `declarations` has at least one route.
    pub fn ensure_routed(self, declarations: &[&Component]) -> Result<Self, RouteError> {
        match declarations
            .iter()
            .find(|&&component| !self.entries.iter().any(|e| e.component == component))
        {
            Some(missing) => Err(RouteError::UnroutedComponent {
                component: missing.name,
            }),
            None => Ok(self),
        }
    }

    /// Mount this table under `prefix` in the parent registry.
    pub fn register(self, registry: &mut RouteRegistry, prefix: &str) -> Result<(), RouteError> {
        registry.register(prefix, self)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteEntry;
    type IntoIter = std::slice::Iter<'a, RouteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn validate_segment(path: &str) -> Result<(), RouteError> {
    let reason = if path.is_empty() {
        "path is empty"
    } else if path.starts_with('/') {
        "leading slash"
    } else if path.ends_with('/') {
        "trailing slash"
    } else if path.contains('/') {
        "must be a single segment"
    } else {
        return Ok(());
    };

    Err(RouteError::InvalidPath {
        path: path.to_string(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    static HOME: Component = Component::new("HomeComponent", "app-home");
    static ABOUT: Component = Component::new("AboutComponent", "app-about");

    fn sample() -> RouteTable {
        RouteTable::new(vec![
            RouteEntry::new("home", &HOME, "Home"),
            RouteEntry::new("about", &ABOUT, "About"),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_declared_paths() {
        let table = sample();
        for entry in table.iter() {
            assert_eq!(table.resolve(&entry.path).unwrap(), entry);
        }
        assert_eq!(table.resolve("about").unwrap().component, &ABOUT);
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let table = sample();
        assert!(table.resolve("Home").unwrap_err().is_not_found());
        assert!(table.resolve("").unwrap_err().is_not_found());
        assert!(table.resolve("home/").unwrap_err().is_not_found());
    }

    #[test]
    fn test_duplicate_path_rejected() {
        let err = RouteTable::new(vec![
            RouteEntry::new("home", &HOME, "Home"),
            RouteEntry::new("about", &ABOUT, "About"),
            RouteEntry::new("home", &ABOUT, "Home again"),
        ])
        .unwrap_err();

        assert_eq!(
            err,
            RouteError::DuplicatePath {
                path: "home".into(),
                first: 0,
                second: 2,
            }
        );
        assert!(err.to_string().contains("'home'"));
    }

    #[test]
    fn test_malformed_paths_rejected() {
        for path in ["", "/home", "home/", "a/b"] {
            let err = RouteTable::new(vec![RouteEntry::new(path, &HOME, "Home")]).unwrap_err();
            assert!(
                matches!(err, RouteError::InvalidPath { .. }),
                "{path:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_empty_title_rejected() {
        let err = RouteTable::new(vec![RouteEntry::new("home", &HOME, "  ")]).unwrap_err();
        assert_eq!(err, RouteError::EmptyTitle { path: "home".into() });
    }

    #[test]
    fn test_unrouted_declaration_rejected() {
        let table = RouteTable::new(vec![RouteEntry::new("home", &HOME, "Home")]).unwrap();
        let err = table.ensure_routed(&[&HOME, &ABOUT]).unwrap_err();
        assert_eq!(err, RouteError::UnroutedComponent { component: "AboutComponent" });

        assert_eq!(sample().ensure_routed(&[&HOME, &ABOUT]).unwrap(), sample());
    }

    #[test]
    fn test_declaration_order_preserved() {
        let table = sample();
        assert_eq!(table.paths().collect::<Vec<_>>(), vec!["home", "about"]);
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
    }
}
