use crate::emit::{HtmlEmitOptions, emit_html_with_options};
use crate::empty_span::filter_empty_spans;
use crate::resolver::{OpenKinds, resolve_borders};
use crate::tag::{TagRole, TagSeq};
use crate::tokenizer::tokenize;
use crate::word_boundary::filter_cross_word;

/// Splits input into paragraphs, one per line. The `\n` separators are not part of any paragraph.
pub fn split_paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

/// Runs every stage over one paragraph and returns the resolved tags.
pub fn build_tags(paragraph: &str) -> TagSeq {
    let mut tags = tokenize(paragraph);
    filter_cross_word(&mut tags);
    resolve_borders(&mut tags, OpenKinds::new());
    filter_empty_spans(&mut tags);
    log::debug!(
        "paragraph of {} tags, {} pairs",
        tags.len(),
        tags.iter()
            .filter(|tag| tag.role == TagRole::Closing)
            .count()
    );
    tags
}

/// Converts the whole input to HTML.
pub fn render(text: &str) -> String {
    render_with_options(text, &HtmlEmitOptions::default())
}

pub fn render_with_options(text: &str, options: &HtmlEmitOptions) -> String {
    split_paragraphs(text)
        .map(|paragraph| emit_html_with_options(&build_tags(paragraph), options))
        .collect::<Vec<_>>()
        .join("\n")
}
