use crate::span::Span;

pub type TagSeq = Vec<Tag>;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TagKind {
    Text,
    Header,
    Emphasis,
    Strong,
    Escape,
    Link,
}

impl TagKind {
    /// Kinds that need an opener and a closer; only these ever reach the resolver stack.
    pub fn is_pairable(self) -> bool {
        matches!(self, TagKind::Header | TagKind::Emphasis | TagKind::Strong)
    }

    pub fn html_name(self) -> Option<&'static str> {
        match self {
            TagKind::Header => Some("h1"),
            TagKind::Emphasis => Some("em"),
            TagKind::Strong => Some("strong"),
            TagKind::Link => Some("a"),
            TagKind::Text | TagKind::Escape => None,
        }
    }
}

impl std::fmt::Display for TagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TagKind::Text => "text",
            TagKind::Header => "header",
            TagKind::Emphasis => "emphasis",
            TagKind::Strong => "strong",
            TagKind::Escape => "escape",
            TagKind::Link => "link",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TagRole {
    Opening,
    Closing,
    Completed,
    Single,
    None,
}

/// One candidate tag of a paragraph.
///
/// `content` is what the tag stands for: the characters to print for text and
/// escapes, the delimiter for markup, the raw `[text](target)` for links.
/// `span` is the range of paragraph characters the tokenizer consumed for it.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tag {
    pub kind: TagKind,
    pub role: TagRole,
    pub content: String,
    pub span: Span,
}

impl Tag {
    pub fn new(kind: TagKind, role: TagRole, content: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            role,
            content: content.into(),
            span,
        }
    }

    pub fn text(content: impl Into<String>, span: Span) -> Self {
        Self::new(TagKind::Text, TagRole::None, content, span)
    }

    pub(crate) fn header_closer(at: usize) -> Self {
        Self::new(
            TagKind::Header,
            TagRole::Closing,
            String::new(),
            Span { start: at, end: at },
        )
    }

    /// Turns the tag into plain text. Content and span are kept.
    pub fn demote(&mut self) {
        self.kind = TagKind::Text;
        self.role = TagRole::None;
    }

    pub fn is_text(&self) -> bool {
        self.kind == TagKind::Text
    }

    pub fn is_space(&self) -> bool {
        let mut chars = self.content.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => self.kind == TagKind::Text && ch.is_whitespace(),
            _ => false,
        }
    }

    pub fn starts_with_letter(&self) -> bool {
        self.content
            .chars()
            .next()
            .is_some_and(|ch| ch.is_alphabetic())
    }

    pub fn starts_with_digit(&self) -> bool {
        self.content.chars().next().is_some_and(|ch| ch.is_numeric())
    }
}

/// The tags on either side of a position; `None` marks the paragraph boundary.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Neighbors<'a> {
    pub prev: Option<&'a Tag>,
    pub next: Option<&'a Tag>,
}

impl<'a> Neighbors<'a> {
    pub fn of(tags: &'a [Tag], index: usize) -> Self {
        let prev = index.checked_sub(1).and_then(|prev| tags.get(prev));
        let next = tags.get(index + 1);
        Self { prev, next }
    }

    // The boundary reads as a space.
    pub fn prev_is_space(&self) -> bool {
        self.prev.is_none_or(Tag::is_space)
    }

    pub fn next_is_space(&self) -> bool {
        self.next.is_none_or(Tag::is_space)
    }

    pub fn inside_word(&self) -> bool {
        match (self.prev, self.next) {
            (Some(prev), Some(next)) => prev.starts_with_letter() && next.starts_with_letter(),
            _ => false,
        }
    }

    pub fn letter_meets_digit(&self) -> bool {
        match (self.prev, self.next) {
            (Some(prev), Some(next)) => {
                (prev.starts_with_letter() && next.starts_with_digit())
                    || (prev.starts_with_digit() && next.starts_with_letter())
            }
            _ => false,
        }
    }
}
