/// Block-level pass: footnote extraction, headings and flat lists
use crate::ast::{BlockOutput, Footnotes, ListState};
use log::{debug, trace};
use regex::Regex;
use std::sync::LazyLock;

/// `[^N]: body` at the very start of a line.
static FOOTNOTE_DEF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[\^([0-9]+)\]: ?(.*)$").unwrap());

/// `N. content`
static ORDERED_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.\s(.+)$").unwrap());

const UNORDERED_MARKERS: [&str; 3] = ["* ", "- ", "+ "];

/// Classification of a single residual line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Line<'a> {
    Heading { level: u8, text: &'a str },
    OrderedItem(&'a str),
    UnorderedItem(&'a str),
    Text(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    // Longest prefix first isn't needed: "## " never starts with "# ".
    for (level, prefix) in [(1, "# "), (2, "## "), (3, "### ")] {
        if let Some(text) = line.strip_prefix(prefix) {
            return Line::Heading { level, text };
        }
    }

    if let Some(caps) = ORDERED_ITEM_RE.captures(line) {
        if let Some(content) = caps.get(2) {
            return Line::OrderedItem(content.as_str());
        }
    }

    for marker in UNORDERED_MARKERS {
        if let Some(text) = line.strip_prefix(marker) {
            return Line::UnorderedItem(text);
        }
    }

    Line::Text(line)
}

/// Pull footnote definitions out of the document.
///
/// Returns the lines that are not definitions, in their original order.
pub fn extract_footnotes<'a, I>(lines: I) -> (Vec<&'a str>, Footnotes)
where
    I: IntoIterator<Item = &'a str>,
{
    let mut footnotes = Footnotes::new();
    let mut residual = Vec::new();

    for line in lines {
        match FOOTNOTE_DEF_RE.captures(line) {
            Some(caps) => {
                let label = &caps[1];
                let body = caps.get(2).map_or("", |m| m.as_str());
                trace!("footnote definition [^{label}]");
                footnotes.insert(label, body);
            }
            None => residual.push(line),
        }
    }

    (residual, footnotes)
}

/// Accumulates block output and tracks the open list.
struct BlockWriter {
    out: String,
    list: ListState,
}

impl BlockWriter {
    fn new() -> Self {
        BlockWriter {
            out: String::new(),
            list: ListState::None,
        }
    }

    fn push_line(&mut self, fragment: &str) {
        self.out.push_str(fragment);
        self.out.push('\n');
    }

    fn close_list(&mut self) {
        if let Some(tag) = self.list.closing_tag() {
            self.push_line(tag);
        }
        self.list = ListState::None;
    }

    /// Switch to `kind`, closing a list of the other kind first.
    fn enter_list(&mut self, kind: ListState) {
        if self.list == kind {
            return;
        }
        self.close_list();
        match kind {
            ListState::Unordered => self.push_line("<ul>"),
            ListState::Ordered => self.push_line("<ol>"),
            ListState::None => {}
        }
        self.list = kind;
    }

    fn item(&mut self, kind: ListState, content: &str) {
        self.enter_list(kind);
        self.push_line(&format!("<li>{}</li>", content));
    }

    fn finish(mut self) -> String {
        self.close_list();
        self.out
    }
}

/// Resolve block structure for a document given as lines.
///
/// Footnote definitions are removed and returned separately. Headings and
/// list items become tags; every other line passes through untouched so
/// paragraphs can be resolved after inline substitution.
pub fn process_blocks<'a, I>(lines: I) -> BlockOutput
where
    I: IntoIterator<Item = &'a str>,
{
    let (residual, footnotes) = extract_footnotes(lines);
    let mut writer = BlockWriter::new();

    for line in residual.iter().copied() {
        let kind = classify(line);
        trace!("{kind:?}");
        match kind {
            Line::Heading { level, text } => {
                writer.close_list();
                writer.push_line(&format!("<h{level}>{text}</h{level}>"));
            }
            Line::OrderedItem(content) => writer.item(ListState::Ordered, content),
            Line::UnorderedItem(content) => writer.item(ListState::Unordered, content),
            Line::Text(text) => {
                writer.close_list();
                writer.push_line(text);
            }
        }
    }

    let body = writer.finish();
    debug!(
        "block pass: {} lines, {} footnote definitions",
        residual.len(),
        footnotes.len()
    );

    BlockOutput { body, footnotes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn blocks(input: &str) -> BlockOutput {
        process_blocks(input.lines())
    }

    #[test]
    fn test_classify_headings_before_lists() {
        assert_eq!(
            classify("# 1. not a list"),
            Line::Heading {
                level: 1,
                text: "1. not a list"
            }
        );
        assert_eq!(
            classify("### Third"),
            Line::Heading {
                level: 3,
                text: "Third"
            }
        );
        assert_eq!(classify("#### Fourth"), Line::Text("#### Fourth"));
        assert_eq!(classify("#NoSpace"), Line::Text("#NoSpace"));
    }

    #[test]
    fn test_classify_list_items() {
        assert_eq!(classify("12. twelve"), Line::OrderedItem("twelve"));
        assert_eq!(classify("1.no space"), Line::Text("1.no space"));
        assert_eq!(classify("1. "), Line::Text("1. "));
        assert_eq!(classify("* star"), Line::UnorderedItem("star"));
        assert_eq!(classify("+ plus"), Line::UnorderedItem("plus"));
        assert_eq!(classify("- dash"), Line::UnorderedItem("dash"));
        assert_eq!(classify("-dash"), Line::Text("-dash"));
    }

    #[test]
    fn test_extract_footnotes() {
        let (residual, footnotes) =
            extract_footnotes(["text[^1]", "[^1]: body  ", "[^2]:tight", " [^3]: indented"]);

        assert_eq!(residual, vec!["text[^1]", " [^3]: indented"]);
        assert_eq!(footnotes.get("1"), Some("body  "));
        assert_eq!(footnotes.get("2"), Some("tight"));
        assert_eq!(footnotes.get("3"), None);
    }

    #[test]
    fn test_non_numeric_footnote_label_is_content() {
        let output = blocks("[^a]: not a footnote");
        assert!(output.footnotes.is_empty());
        assert_eq!(output.body, "[^a]: not a footnote\n");
    }

    #[test]
    fn test_headings() {
        let output = blocks("# One\n## Two\n### Three");
        assert_eq!(output.body, "<h1>One</h1>\n<h2>Two</h2>\n<h3>Three</h3>\n");
    }

    #[test]
    fn test_unordered_list_closed_at_end() {
        let output = blocks("- a\n* b\n+ c");
        assert_eq!(
            output.body,
            "<ul>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_switching_list_kinds() {
        let output = blocks("- a\n1. b\n2. c\n- d");
        assert_eq!(
            output.body,
            "<ul>\n<li>a</li>\n</ul>\n<ol>\n<li>b</li>\n<li>c</li>\n</ol>\n<ul>\n<li>d</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_heading_closes_list() {
        let output = blocks("1. a\n# Title\ntext");
        assert_eq!(
            output.body,
            "<ol>\n<li>a</li>\n</ol>\n<h1>Title</h1>\ntext\n"
        );
    }

    #[test]
    fn test_blank_line_closes_list_once() {
        let output = blocks("- a\n   \n- b");
        assert_eq!(
            output.body,
            "<ul>\n<li>a</li>\n</ul>\n   \n<ul>\n<li>b</li>\n</ul>\n"
        );
    }

    #[test]
    fn test_footnote_definition_does_not_close_list() {
        let output = blocks("- a\n[^1]: note\n- b");
        assert_eq!(output.body, "<ul>\n<li>a</li>\n<li>b</li>\n</ul>\n");
        assert_eq!(output.footnotes.get("1"), Some("note"));
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(blocks(""), BlockOutput::default());
    }
}
