use crate::link::split_link;
use crate::tag::{Tag, TagKind, TagRole};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HtmlEmitOptions {
    /// Escape `&`, `<`, `>` and `"` inside `href` and `title` values.
    pub escape_link_attributes: bool,
}

/// Emits HTML for one resolved paragraph. Text is written verbatim.
pub fn emit_html(tags: &[Tag]) -> String {
    emit_html_with_options(tags, &HtmlEmitOptions::default())
}

pub fn emit_html_with_options(tags: &[Tag], options: &HtmlEmitOptions) -> String {
    let mut out = String::new();
    for tag in tags {
        emit_tag(&mut out, tag, options);
    }
    out
}

fn emit_tag(out: &mut String, tag: &Tag, options: &HtmlEmitOptions) {
    if tag.kind == TagKind::Text {
        out.push_str(&tag.content);
        return;
    }
    match (tag.role, tag.kind.html_name()) {
        (TagRole::Opening, Some(name)) => {
            out.push('<');
            out.push_str(name);
            out.push('>');
        }
        (TagRole::Closing, Some(name)) => {
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        (TagRole::Single, _) if tag.kind == TagKind::Link => emit_link(out, &tag.content, options),
        _ => out.push_str(&tag.content),
    }
}

fn emit_link(out: &mut String, raw: &str, options: &HtmlEmitOptions) {
    let Some(parts) = split_link(raw) else {
        out.push_str(raw);
        return;
    };
    let attr = |value: &str| {
        if options.escape_link_attributes {
            escape_attr(value)
        } else {
            value.to_string()
        }
    };
    out.push_str(&format!("<a href=\"{}\"", attr(parts.destination)));
    if let Some(title) = parts.title {
        out.push_str(&format!(" title=\"{}\"", attr(title)));
    }
    out.push('>');
    out.push_str(parts.text);
    out.push_str("</a>");
}

fn escape_attr(text: &str) -> String {
    let mut out = String::new();
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
