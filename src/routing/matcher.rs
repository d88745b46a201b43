//! Mount prefix matching.
//!
//! # Responsibilities
//! - Normalize request paths (leading slash, one trailing slash)
//! - Match a mount prefix on segment boundaries
//!
//! # Design Decisions
//! - Path matching is case-sensitive
//! - Empty prefix = root mount, matches everything
//! - `/faqs/x` never matches the `faq` prefix

/// Strip the leading slash and at most one trailing slash.
pub fn normalize_path(path: &str) -> &str {
    let path = path.strip_prefix('/').unwrap_or(path);
    path.strip_suffix('/').unwrap_or(path)
}

/// Matches the leading segments of a normalized path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixMatcher {
    prefix: String,
}

impl PrefixMatcher {
    /// Create a matcher for an already validated prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Number of segments in the prefix, used to try deeper mounts first.
    pub fn depth(&self) -> usize {
        if self.prefix.is_empty() {
            0
        } else {
            self.prefix.split('/').count()
        }
    }

    /// Returns the remainder of `path` below the prefix, if it matches.
    pub fn strip<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.prefix.is_empty() {
            return Some(path);
        }

        let rest = path.strip_prefix(self.prefix.as_str())?;
        if rest.is_empty() {
            Some(rest)
        } else {
            rest.strip_prefix('/')
        }
    }

    /// Join a child path onto the prefix as an absolute URL path.
    pub fn join(&self, child: &str) -> String {
        match (self.prefix.is_empty(), child.is_empty()) {
            (true, _) => format!("/{child}"),
            (false, true) => format!("/{}", self.prefix),
            (false, false) => format!("/{}/{child}", self.prefix),
        }
    }
}
