//! Converts a small underscore-flavoured Markdown subset to HTML, one paragraph per line.
//!
//! Each paragraph goes through four stages that rewrite the same tag sequence:
//! [`tokenize`], [`filter_cross_word`], [`resolve_borders`] and [`filter_empty_spans`].
//! [`emit_html`] then prints the result.

mod emit;
mod empty_span;
mod link;
mod paragraph;
mod resolver;
mod span;
mod tag;
mod tokenizer;
mod word_boundary;

pub use emit::{HtmlEmitOptions, emit_html, emit_html_with_options};
pub use empty_span::filter_empty_spans;
pub use link::{LinkParts, split_link};
pub use paragraph::{build_tags, render, render_with_options, split_paragraphs};
pub use resolver::{OpenKinds, resolve_borders};
pub use span::{Span, SpanError};
pub use tag::{Tag, TagKind, TagRole, TagSeq};
pub use tokenizer::{ESCAPABLE, tokenize};
pub use word_boundary::filter_cross_word;
