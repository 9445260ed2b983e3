//! Atom feed parsing for the arXiv query API.

use tracing::warn;

use crate::core::models::PaperMetadata;

pub const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

/// Extract the paper title and abstract from an arXiv Atom response.
///
/// The feed carries its own `<title>` ahead of the entries, so the last `title`
/// and the last `summary` element in the Atom namespace belong to the queried
/// paper. Missing elements and unparsable bodies both yield empty strings.
#[must_use]
pub fn parse_feed(xml: &str) -> PaperMetadata {
    let doc = match roxmltree::Document::parse(xml) {
        Ok(doc) => doc,
        Err(e) => {
            warn!("arXiv response is not valid XML: {}", e);
            return PaperMetadata::default();
        }
    };

    let last_text = |name: &str| {
        doc.descendants()
            .filter(|n| n.is_element() && n.has_tag_name((ATOM_NS, name)))
            .last()
            .map(|n| element_text(&n).trim().to_string())
            .unwrap_or_default()
    };

    PaperMetadata {
        title: last_text("title"),
        abstract_text: last_text("summary"),
    }
}

fn element_text(node: &roxmltree::Node<'_, '_>) -> String {
    node.descendants()
        .filter(roxmltree::Node::is_text)
        .filter_map(|n| n.text())
        .collect()
}
