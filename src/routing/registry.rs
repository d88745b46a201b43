//! Route registry: the parent composition system child tables mount into.
//!
//! # Responsibilities
//! - Mount child route tables under path prefixes
//! - Resolve full URL paths to a route entry
//! - Enumerate every mounted route for link generation
//!
//! # Design Decisions
//! - Built at startup, then frozen behind an Arc
//! - Deeper prefixes are tried first, ties keep mount order
//! - A miss is reported, never replaced by a fallback page

use serde::Serialize;

use crate::routing::error::RouteError;
use crate::routing::matcher::{normalize_path, PrefixMatcher};
use crate::routing::route::RouteEntry;
use crate::routing::table::RouteTable;

/// A child table mounted under a prefix.
#[derive(Debug)]
struct Mount {
    matcher: PrefixMatcher,
    table: RouteTable,
}

/// A successful resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub prefix: &'a str,
    pub entry: &'a RouteEntry,
}

/// A mounted route as seen by link and sitemap generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub url: String,
    pub title: String,
    pub component: &'static str,
}

#[derive(Debug, Default)]
pub struct RouteRegistry {
    /// Mounts in registration order.
    mounts: Vec<Mount>,
    /// Indices into `mounts`, deepest prefix first.
    lookup_order: Vec<usize>,
}

impl RouteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `table` as a child route set under `prefix`.
    pub fn register(&mut self, prefix: &str, table: RouteTable) -> Result<(), RouteError> {
        let prefix = validate_prefix(prefix)?;

        if self.mounts.iter().any(|m| m.matcher.prefix() == prefix) {
            return Err(RouteError::DuplicateMount {
                prefix: prefix.to_string(),
            });
        }

        tracing::debug!(prefix = %prefix, routes = table.len(), "Mounting route table");

        self.mounts.push(Mount {
            matcher: PrefixMatcher::new(prefix),
            table,
        });

        let mut order: Vec<usize> = (0..self.mounts.len()).collect();
        order.sort_by_key(|&i| std::cmp::Reverse(self.mounts[i].matcher.depth()));
        self.lookup_order = order;

        Ok(())
    }

    /// Resolve an absolute or relative URL path.
    pub fn resolve(&self, url_path: &str) -> Result<Resolved<'_>, RouteError> {
        let path = normalize_path(url_path);

        for &index in &self.lookup_order {
            let mount = &self.mounts[index];
            let Some(rest) = mount.matcher.strip(path) else {
                continue;
            };

            if let Ok(entry) = mount.table.resolve(rest) {
                return Ok(Resolved {
                    prefix: mount.matcher.prefix(),
                    entry,
                });
            }
        }

        Err(RouteError::NotFound {
            path: url_path.to_string(),
        })
    }

    /// Every mounted route, in mount order then declaration order.
    pub fn links(&self) -> Vec<Link> {
        self.mounts
            .iter()
            .flat_map(|mount| {
                mount.table.iter().map(move |entry| Link {
                    url: mount.matcher.join(&entry.path),
                    title: entry.data.title.clone(),
                    component: entry.component.name,
                })
            })
            .collect()
    }

    /// Total number of routes across all mounts.
    pub fn route_count(&self) -> usize {
        self.mounts.iter().map(|m| m.table.len()).sum()
    }
}

fn validate_prefix(prefix: &str) -> Result<&str, RouteError> {
    let reason = if prefix.starts_with('/') || prefix.ends_with('/') {
        "leading or trailing slash"
    } else if !prefix.is_empty() && prefix.split('/').any(str::is_empty) {
        "empty segment"
    } else {
        return Ok(prefix);
    };

    Err(RouteError::InvalidPrefix {
        prefix: prefix.to_string(),
        reason,
    })
}
