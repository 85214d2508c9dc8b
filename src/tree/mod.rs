pub mod parser;

use std::collections::HashMap;

/// Class token appended to a node's `class` attribute when it is marked.
pub const HIGHLIGHT_CLASS: &str = "highlighted";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    Element,
    Text,
}

/// A node in the rendered search-result tree.
///
/// The tree is owned by the caller; the highlighters decorate it in place
/// and never restructure anything outside the text run being wrapped.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultNode {
    pub tag: String,
    pub attributes: HashMap<String, String>,
    pub text: String,
    pub children: Vec<ResultNode>,
    pub node_type: NodeType,
}

impl ResultNode {
    pub fn element(
        tag: impl Into<String>,
        attrs: HashMap<String, String>,
        children: Vec<ResultNode>,
    ) -> Self {
        Self {
            tag: tag.into(),
            attributes: attrs,
            text: String::new(),
            children,
            node_type: NodeType::Element,
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            tag: String::new(),
            attributes: HashMap::new(),
            text: content.into(),
            children: Vec::new(),
            node_type: NodeType::Text,
        }
    }

    /// Container for one page of results, one child per result row.
    pub fn results_container(children: Vec<ResultNode>) -> Self {
        Self::element("div", HashMap::new(), children)
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|s| s.as_str())
    }

    /// Recursively count all nodes in this subtree
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Collect all text content recursively
    pub fn collect_text(&self) -> String {
        let mut buf = String::new();
        self.collect_text_inner(&mut buf);
        buf
    }

    fn collect_text_inner(&self, buf: &mut String) {
        if !self.text.is_empty() {
            if !buf.is_empty() {
                buf.push(' ');
            }
            buf.push_str(self.text.trim());
        }
        for child in &self.children {
            child.collect_text_inner(buf);
        }
    }

    /// Whether this node already carries the highlight marker.
    pub fn is_highlighted(&self) -> bool {
        self.attr("class")
            .map(|c| c.split_whitespace().any(|t| t == HIGHLIGHT_CLASS))
            .unwrap_or(false)
    }

    /// Append the highlight marker to the `class` attribute, keeping any
    /// classes already present. Marking twice is a no-op.
    pub fn mark_highlighted(&mut self) {
        if self.is_highlighted() {
            return;
        }
        let class = self.attributes.entry("class".to_string()).or_default();
        if !class.is_empty() {
            class.push(' ');
        }
        class.push_str(HIGHLIGHT_CLASS);
    }

    /// Count marked nodes in this subtree.
    pub fn highlighted_count(&self) -> usize {
        let own = usize::from(self.is_highlighted());
        own + self
            .children
            .iter()
            .map(|c| c.highlighted_count())
            .sum::<usize>()
    }
}
