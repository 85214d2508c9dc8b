use crate::tree::ResultNode;
use scraper::{ElementRef, Html, Node};
use std::collections::HashMap;

/// Tags whose children should be stripped (invisible/script content)
const SKIP_CHILDREN: &[&str] = &["script", "style", "noscript", "svg"];

/// Parse one server-rendered result row into a subtree.
///
/// The fragment parser wraps loose content in an implicit root; we keep that
/// wrapper as the row's element so a row of bare text still has a markable
/// parent.
pub fn parse_fragment(html: &str) -> ResultNode {
    let fragment = Html::parse_fragment(html);
    let mut row = convert_element(fragment.root_element());
    row.tag = "div".to_string();
    row
}

/// Parse a page of result rows into a single container tree.
pub fn parse_results(rows: &[String]) -> ResultNode {
    ResultNode::results_container(rows.iter().map(|r| parse_fragment(r)).collect())
}

fn convert_element(el: ElementRef<'_>) -> ResultNode {
    let tag = el.value().name.local.as_ref().to_string();
    let attributes: HashMap<String, String> = el
        .value()
        .attrs()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    // Skip children of invisible elements
    if SKIP_CHILDREN.contains(&tag.as_str()) {
        return ResultNode::element(tag, attributes, Vec::new());
    }

    let mut children = Vec::new();

    for child_ref in el.children() {
        match child_ref.value() {
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child_ref) {
                    children.push(convert_element(child_el));
                }
            }
            Node::Text(t) => {
                let s = t.text.to_string();
                if !s.trim().is_empty() {
                    children.push(ResultNode::text(s));
                }
            }
            _ => {}
        }
    }

    ResultNode::element(tag, attributes, children)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_result_row() {
        let row = parse_fragment(
            r#"<span class="verse" strong="G25 G26">Beloved, let us love one another</span>"#,
        );
        assert_eq!(row.collect_text(), "Beloved, let us love one another");
        let span = &row.children[0];
        assert_eq!(span.tag, "span");
        assert_eq!(span.attr("strong"), Some("G25 G26"));
    }

    #[test]
    fn strips_script_children() {
        let row = parse_fragment(r#"<p>Visible</p><script>alert("hidden");</script>"#);
        let text = row.collect_text();
        assert!(text.contains("Visible"));
        assert!(!text.contains("alert"));
    }

    #[test]
    fn bare_text_row_still_has_a_parent_element() {
        let row = parse_fragment("just text");
        assert_eq!(row.tag, "div");
        assert_eq!(row.collect_text(), "just text");
    }

    #[test]
    fn page_of_rows_becomes_one_container() {
        let rows = vec!["<p>one</p>".to_string(), "<p>two</p>".to_string()];
        let tree = parse_results(&rows);
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.collect_text(), "one two");
    }
}
