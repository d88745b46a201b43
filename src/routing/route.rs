//! Route entries.

use crate::pages::Component;

/// Metadata attached to a route. Does not take part in resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteData {
    /// Display title the host applies while the route is active.
    pub title: String,
}

/// A single path segment bound to a page component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub component: &'static Component,
    pub data: RouteData,
}

impl RouteEntry {
    pub fn new(
        path: impl Into<String>,
        component: &'static Component,
        title: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            component,
            data: RouteData {
                title: title.into(),
            },
        }
    }

    pub fn title(&self) -> &str {
        &self.data.title
    }
}
