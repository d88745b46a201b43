//! Response bodies: the page shell, the not-found page and the sitemap.
//!
//! The server never renders page content. A hit returns the application
//! shell with the route title applied and the page component's element for
//! the client to mount into.

use std::fmt::Write;

use crate::routing::{Link, RouteEntry};

/// HTML shell for a resolved route.
pub fn page_shell(entry: &RouteEntry) -> String {
    let selector = entry.component.selector;
    shell(entry.title(), &format!("<{selector}></{selector}>"))
}

/// HTML shell for a resolution miss.
pub fn not_found_shell(app_title: &str, path: &str) -> String {
    shell(
        &format!("Page not found - {app_title}"),
        &format!(
            "<main class=\"not-found\">\n<h1>Page not found</h1>\n\
             <p>No page at <code>{}</code>.</p>\n</main>",
            escape(path)
        ),
    )
}

fn shell(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{}</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n",
        escape(title)
    )
}

/// XML sitemap with absolute URLs under `base_url`.
pub fn sitemap(base_url: &str, links: &[Link]) -> String {
    let base_url = base_url.trim_end_matches('/');
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for link in links {
        // Writing to a String cannot fail.
        let _ = writeln!(xml, "  <url><loc>{}{}</loc></url>", escape(base_url), escape(&link.url));
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Escape text for HTML and XML bodies.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
