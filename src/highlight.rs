//! Decorates a result tree in place: by extracted term, or by tag identifier.
//!
//! Both entry points are additive and tolerate empty input. Applying the
//! same terms again finds nothing new — already-marked subtrees are not
//! descended into — so a caller re-rendering the same page cannot corrupt
//! the tree.

use crate::tree::{NodeType, ResultNode};
use regex::Regex;
use std::collections::HashMap;

/// Mark every whole-word, case-insensitive occurrence of each term.
///
/// Matched slices of a text run are wrapped in a `span` carrying the
/// highlight marker; the surrounding text is kept byte-for-byte. Terms are
/// applied one pass at a time, so overlapping terms never undo each
/// other's marks. Blank terms are skipped.
pub fn highlight_terms(root: &mut ResultNode, terms: &[String]) {
    for term in terms {
        if term.trim().is_empty() {
            continue;
        }
        let pattern = format!(r"(?i)\b{}\b", regex::escape(term));
        match Regex::new(&pattern) {
            Ok(re) => wrap_matches(root, &re),
            // An escaped literal always compiles; a term long enough to
            // blow the regex size limit is simply not highlighted.
            Err(e) => log::debug!("skipping unhighlightable term {:?}: {}", term, e),
        }
    }
}

fn wrap_matches(node: &mut ResultNode, re: &Regex) {
    if node.is_highlighted() {
        return;
    }
    let mut rebuilt = Vec::with_capacity(node.children.len());
    for mut child in node.children.drain(..) {
        if child.node_type == NodeType::Text && re.is_match(&child.text) {
            split_text_run(&child.text, re, &mut rebuilt);
        } else {
            wrap_matches(&mut child, re);
            rebuilt.push(child);
        }
    }
    node.children = rebuilt;
}

fn split_text_run(text: &str, re: &Regex, out: &mut Vec<ResultNode>) {
    let mut last = 0;
    for m in re.find_iter(text) {
        if m.start() > last {
            out.push(ResultNode::text(&text[last..m.start()]));
        }
        let mut span = ResultNode::element(
            "span",
            HashMap::new(),
            vec![ResultNode::text(m.as_str())],
        );
        span.mark_highlighted();
        out.push(span);
        last = m.end();
    }
    if last < text.len() {
        out.push(ResultNode::text(&text[last..]));
    }
}

/// Mark every element whose whitespace-separated `attr` token set contains
/// one of the identifiers. Empty `tag_ids` leaves the tree untouched.
pub fn highlight_by_tag(root: &mut ResultNode, attr: &str, tag_ids: &[String]) {
    if tag_ids.is_empty() {
        return;
    }
    let tagged = root
        .attr(attr)
        .is_some_and(|v| v.split_whitespace().any(|t| tag_ids.iter().any(|id| id == t)));
    if tagged {
        root.mark_highlighted();
    }
    for child in &mut root.children {
        highlight_by_tag(child, attr, tag_ids);
    }
}
