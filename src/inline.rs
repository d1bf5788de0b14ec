/// Inline pass: ordered regex substitutions for spans
use log::trace;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// One substitution: every non-overlapping match of `pattern` is replaced
/// by `template` (with `${n}` capture references) in a single sweep.
pub struct InlineRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub template: &'static str,
}

impl InlineRule {
    fn new(name: &'static str, pattern: &str, template: &'static str) -> Self {
        InlineRule {
            name,
            pattern: Regex::new(pattern).unwrap(),
            template,
        }
    }
}

/// The rule table, in application order.
///
/// Images must precede links so the `!` is consumed with the image. Bold
/// must precede italic so `**` is not read as two empty emphasis markers.
pub static RULES: LazyLock<[InlineRule; 5]> = LazyLock::new(|| {
    [
        InlineRule::new(
            "footnote-ref",
            r"\[\^([0-9]+)\]",
            r##"<sup><a href="#fn${1}" id="fnref${1}">${1}</a></sup>"##,
        ),
        InlineRule::new(
            "image",
            r"!\[(.*?)\]\((.+?)\)",
            r#"<img src="${2}" alt="${1}">"#,
        ),
        InlineRule::new("link", r"\[(.+?)\]\((.+?)\)", r#"<a href="${2}">${1}</a>"#),
        InlineRule::new("bold", r"\*\*([^*]+?)\*\*", "<strong>${1}</strong>"),
        InlineRule::new("italic", r"\*([^*]+?)\*", "<em>${1}</em>"),
    ]
});

/// Apply every inline rule to `text`, in table order.
///
/// Each rule rewrites the output of the previous one. A rule never rescans
/// its own replacements. Unterminated markers are left as they are.
pub fn process_inline(text: &str) -> String {
    let mut current = text.to_string();

    for rule in RULES.iter() {
        let mut hits = 0usize;
        let replaced = rule.pattern.replace_all(&current, |caps: &Captures<'_>| {
            hits += 1;
            let mut dst = String::new();
            caps.expand(rule.template, &mut dst);
            dst
        });
        if let Cow::Owned(rewritten) = replaced {
            trace!("inline rule {}: {} matches", rule.name, hits);
            current = rewritten;
        }
    }

    current
}
