/// A small line-oriented Markdown to HTML fragment converter
pub mod ast;
pub mod error;
pub mod inline;
pub mod parser;
pub mod reader;
pub mod renderer;

pub use error::{Error, Result};

use inline::process_inline;
use log::debug;
use parser::process_blocks;
use renderer::{render_footnotes, wrap_paragraphs};

/// Convert markdown text to an HTML fragment.
///
/// Never fails: markup that does not match any rule is passed through as
/// literal text.
pub fn markdown_to_html(markdown: &str) -> String {
    let blocks = process_blocks(markdown.lines());
    let inline = process_inline(&blocks.body);
    let mut html = wrap_paragraphs(&inline);
    render_footnotes(&blocks.footnotes, &mut html);
    debug!(
        "converted {} bytes of markdown into {} bytes of html",
        markdown.len(),
        html.len()
    );
    html
}
