/// HTML assembly: paragraphs, footnote section and the document shell
use crate::ast::Footnotes;
use crate::inline::process_inline;

/// Lines starting with one of these are already block markup.
///
/// `</ol>` is not in the set, so a closing ordered-list tag gets wrapped
/// like any other line.
const BLOCK_PREFIXES: [&str; 8] = [
    "<h1>", "<h2>", "<h3>", "<ul>", "</ul>", "<li>", "<ol>", "<p>",
];

fn is_block_line(line: &str) -> bool {
    BLOCK_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
}

/// Wrap each plain line in `<p>`, dropping blank lines.
pub fn wrap_paragraphs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }
        if is_block_line(line) {
            out.push_str(line);
        } else {
            out.push_str("<p>");
            out.push_str(line);
            out.push_str("</p>");
        }
        out.push('\n');
    }
    out
}

/// Append the footnote section to `out`. Does nothing when there are no
/// footnotes.
pub fn render_footnotes(footnotes: &Footnotes, out: &mut String) {
    if footnotes.is_empty() {
        return;
    }

    out.push_str("<div class=\"footnotes\">\n<hr>\n<ol>\n");
    for (label, body) in footnotes.iter() {
        out.push_str(&format!(
            "<li id=\"fn{label}\">{} <a href=\"#fnref{label}\" class=\"footnote-backref\">&#8617;</a></li>\n",
            process_inline(body)
        ));
    }
    out.push_str("</ol>\n</div>\n");
}

/// Wrap an HTML fragment in a minimal standalone document.
pub fn wrap_document(fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n    <title>Converted Markdown</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        fragment
    )
}
