//! The rendering pipeline: payload in, decorated tree + label data out.
//!
//! The presentation layer calls [`SearchRenderer::render`] directly with
//! the payload it received; there is no event wiring here. Every call is
//! self-contained and reentrant. Callers decorating the same tree from
//! several threads must serialize those calls themselves.

use crate::highlight::{highlight_by_tag, highlight_terms};
use crate::paging::compute_window;
use crate::query::extract_terms;
use crate::tree::parser::parse_results;
use crate::tree::ResultNode;

/// Attribute carrying tag identifiers on result elements, unless overridden.
const DEFAULT_TAG_ATTR: &str = "strong";

/// One page of search results as delivered by the search backend.
#[derive(Debug, Clone)]
pub struct SearchResultsPayload {
    /// Raw query in the search syntax.
    pub query: String,
    /// Total hits across all pages.
    pub total: u64,
    /// Server-rendered markup, one fragment per result row.
    pub results: Vec<String>,
    /// When present, highlighting is by tag identifier instead of by term.
    pub tag_ids: Option<Vec<String>>,
    /// The backend truncated the result set.
    pub max_reached: bool,
}

/// Everything the presentation layer needs to draw the page.
#[derive(Debug, Clone)]
pub struct RenderedResults {
    /// The decorated result tree, owned by the caller from here on.
    pub root: ResultNode,
    /// Extracted display terms, phrases first (for display/debugging).
    pub terms: Vec<String>,
    /// Inclusive first ordinal shown, 0 when there are no results.
    pub start: u64,
    /// Inclusive last ordinal shown, clamped to the total.
    pub end: u64,
    pub total: u64,
}

/// Stateless renderer: page size and tag-attribute configuration only.
pub struct SearchRenderer {
    page_size: u64,
    tag_attr: String,
}

impl SearchRenderer {
    pub fn new(page_size: u64) -> Self {
        Self {
            page_size,
            tag_attr: DEFAULT_TAG_ATTR.to_string(),
        }
    }

    /// Override the attribute holding tag identifiers.
    pub fn with_tag_attr(mut self, attr: impl Into<String>) -> Self {
        self.tag_attr = attr.into();
        self
    }

    /// Build and decorate the result tree for one page.
    ///
    /// Empty or truncated result sets come back as an empty, undecorated
    /// container; the presentation layer renders its own message for
    /// those. Terms and the window are computed either way so the label
    /// can still be drawn.
    pub fn render(&self, payload: &SearchResultsPayload, page_number: u64) -> RenderedResults {
        let (start, end) = compute_window(payload.total, page_number, self.page_size);
        let terms = extract_terms(&payload.query);

        let root = if payload.total == 0 || payload.results.is_empty() || payload.max_reached {
            log::debug!(
                "no rows to decorate (total={}, max_reached={})",
                payload.total,
                payload.max_reached
            );
            ResultNode::results_container(Vec::new())
        } else {
            let mut root = parse_results(&payload.results);
            self.decorate(&mut root, payload);
            root
        };

        RenderedResults {
            root,
            terms,
            start,
            end,
            total: payload.total,
        }
    }

    /// Apply the right highlighter to a tree the caller already owns.
    pub fn decorate(&self, root: &mut ResultNode, payload: &SearchResultsPayload) {
        match payload.tag_ids.as_deref() {
            Some(ids) if !ids.is_empty() => {
                log::debug!("highlighting by {} tag identifier(s)", ids.len());
                highlight_by_tag(root, &self.tag_attr, ids);
            }
            _ => {
                let terms = extract_terms(&payload.query);
                log::debug!("highlighting {} extracted term(s)", terms.len());
                highlight_terms(root, &terms);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(query: &str, rows: &[&str]) -> SearchResultsPayload {
        let _ = env_logger::builder().is_test(true).try_init();
        SearchResultsPayload {
            query: query.to_string(),
            total: rows.len() as u64,
            results: rows.iter().map(|r| r.to_string()).collect(),
            tag_ids: None,
            max_reached: false,
        }
    }

    #[test]
    fn renders_terms_window_and_marks() {
        let renderer = SearchRenderer::new(50);
        let out = renderer.render(
            &payload("t=love AND grace", &["<p>love and grace abound</p>"]),
            1,
        );
        assert_eq!(out.terms, vec!["love", "grace"]);
        assert_eq!((out.start, out.end), (1, 1));
        assert_eq!(out.root.highlighted_count(), 2);
    }

    #[test]
    fn tag_ids_win_over_terms() {
        let renderer = SearchRenderer::new(50);
        let mut p = payload("t=love", &[r#"<span strong="G25">agapao</span>"#]);
        p.tag_ids = Some(vec!["G25".to_string()]);
        let out = renderer.render(&p, 1);
        // The tagged span is marked; the word "love" appears nowhere.
        assert_eq!(out.root.highlighted_count(), 1);
    }

    #[test]
    fn empty_tag_id_list_falls_back_to_terms() {
        let renderer = SearchRenderer::new(50);
        let mut p = payload("t=agapao", &["<p>agapao</p>"]);
        p.tag_ids = Some(Vec::new());
        let out = renderer.render(&p, 1);
        assert_eq!(out.root.highlighted_count(), 1);
    }

    #[test]
    fn zero_total_yields_empty_tree_and_window() {
        let renderer = SearchRenderer::new(50);
        let out = renderer.render(&payload("t=nothing", &[]), 1);
        assert_eq!((out.start, out.end), (0, 0));
        assert!(out.root.children.is_empty());
    }

    #[test]
    fn truncated_results_are_not_decorated() {
        let renderer = SearchRenderer::new(50);
        let mut p = payload("t=the", &["<p>the</p>"]);
        p.total = 1_000_000;
        p.max_reached = true;
        let out = renderer.render(&p, 1);
        assert!(out.root.children.is_empty());
        assert_eq!(out.total, 1_000_000);
    }

    #[test]
    fn custom_tag_attribute() {
        let renderer = SearchRenderer::new(50).with_tag_attr("morph");
        let mut p = payload("t=x", &[r#"<span morph="V-PAI">word</span>"#]);
        p.tag_ids = Some(vec!["V-PAI".to_string()]);
        let out = renderer.render(&p, 1);
        assert_eq!(out.root.highlighted_count(), 1);
    }
}
