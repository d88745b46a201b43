//! Page components.
//!
//! Pages are leaves owned by the client application. The server only needs
//! enough of each one to mount it: a name for logs and listings, and the
//! selector of the element the client renders the page into.

pub mod faq;

/// A renderable page unit.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Component {
    /// Type-like identifier, e.g. `GlobalPrefixComponent`.
    pub name: &'static str,

    /// Custom element tag the page mounts on, e.g. `app-global-prefix`.
    pub selector: &'static str,
}

impl Component {
    pub const fn new(name: &'static str, selector: &'static str) -> Self {
        Self { name, selector }
    }
}
