use crate::link::LinkScanner;
use crate::span::Span;
use crate::tag::{Tag, TagKind, TagRole, TagSeq};

/// Characters a backslash turns into literal text.
pub const ESCAPABLE: [char; 5] = ['_', '#', '\\', '[', ']'];

/// Splits one paragraph into candidate tags.
///
/// The spans of the returned tags cover the paragraph without gaps or overlaps.
pub fn tokenize(paragraph: &str) -> TagSeq {
    let chars: Vec<char> = paragraph.chars().collect();
    Tokenizer::new(&chars).run()
}

struct Tokenizer<'a> {
    chars: &'a [char],
    links: LinkScanner,
    tags: TagSeq,
}

impl<'a> Tokenizer<'a> {
    fn new(chars: &'a [char]) -> Self {
        Self {
            chars,
            links: LinkScanner::new(chars),
            tags: Vec::with_capacity(chars.len()),
        }
    }

    fn run(mut self) -> TagSeq {
        let mut pos = 0;
        while pos < self.chars.len() {
            let tag = self.tag_at(pos);
            pos = tag.span.end;
            self.tags.push(tag);
        }
        self.tags
    }

    fn tag_at(&self, pos: usize) -> Tag {
        let ch = self.chars[pos];
        let next = self.chars.get(pos + 1).copied();
        match ch {
            '#' if pos == 0 && next == Some(' ') => {
                Tag::new(TagKind::Header, TagRole::Opening, "# ", Span::at(pos, 2))
            }
            '_' if next == Some('_') => {
                Tag::new(TagKind::Strong, TagRole::Opening, "__", Span::at(pos, 2))
            }
            '_' => Tag::new(TagKind::Emphasis, TagRole::Opening, "_", Span::at(pos, 1)),
            '\\' => match next {
                Some(escaped) if ESCAPABLE.contains(&escaped) => Tag::new(
                    TagKind::Escape,
                    TagRole::Completed,
                    escaped.to_string(),
                    Span::at(pos, 2),
                ),
                _ => Tag::text("\\", Span::at(pos, 1)),
            },
            '[' => match self.links.match_at(pos) {
                Some(close) => {
                    let raw: String = self.chars[pos..=close].iter().collect();
                    Tag::new(
                        TagKind::Link,
                        TagRole::Single,
                        raw,
                        Span::at(pos, close + 1 - pos),
                    )
                }
                None => Tag::text("[", Span::at(pos, 1)),
            },
            _ => Tag::text(ch.to_string(), Span::at(pos, 1)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::tokenize;
    use crate::tag::{TagKind, TagRole};
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<(TagKind, String)> {
        tokenize(source)
            .into_iter()
            .map(|tag| (tag.kind, tag.content))
            .collect()
    }

    #[test]
    fn underscores_become_markers() {
        assert_eq!(
            kinds("__a_"),
            vec![
                (TagKind::Strong, "__".to_string()),
                (TagKind::Text, "a".to_string()),
                (TagKind::Emphasis, "_".to_string()),
            ]
        );
        // Three underscores are a strong marker followed by an emphasis marker.
        assert_eq!(
            kinds("___"),
            vec![
                (TagKind::Strong, "__".to_string()),
                (TagKind::Emphasis, "_".to_string()),
            ]
        );
    }

    #[test]
    fn header_only_at_paragraph_start() {
        let tags = tokenize("# a # b");
        assert_eq!(tags[0].kind, TagKind::Header);
        assert_eq!(tags[0].content, "# ");
        assert!(tags[1..].iter().all(|tag| tag.kind == TagKind::Text));
        assert_eq!(tokenize("#a")[0].kind, TagKind::Text);
        assert_eq!(tokenize("#")[0].kind, TagKind::Text);
    }

    #[test]
    fn escapes_keep_only_the_escaped_char() {
        let tags = tokenize("\\_x\\q\\");
        assert_eq!(tags[0].kind, TagKind::Escape);
        assert_eq!(tags[0].role, TagRole::Completed);
        assert_eq!(tags[0].content, "_");
        assert_eq!((tags[0].span.start, tags[0].span.end), (0, 2));
        assert_eq!(tags[1].content, "x");
        assert_eq!(tags[2].kind, TagKind::Text);
        assert_eq!(tags[2].content, "\\");
        assert_eq!(tags[3].content, "q");
        assert_eq!(tags[4].content, "\\");
        assert_eq!(tags.len(), 5);
    }

    #[test]
    fn link_is_consumed_whole() {
        let tags = tokenize("a [l](u) b");
        assert_eq!(tags.len(), 5);
        assert_eq!(tags[2].kind, TagKind::Link);
        assert_eq!(tags[2].role, TagRole::Single);
        assert_eq!(tags[2].content, "[l](u)");
        assert_eq!((tags[2].span.start, tags[2].span.end), (2, 8));
    }

    #[test]
    fn broken_link_leaves_bracket_as_text() {
        let tags = tokenize("[]()");
        assert_eq!(tags.len(), 4);
        assert!(tags.iter().all(|tag| tag.kind == TagKind::Text));
    }

    #[test]
    fn spans_reconstruct_the_paragraph() {
        let source = "# Заголовок __с _разными_\\_ [l](u \"t\")__ \\";
        let chars: Vec<char> = source.chars().collect();
        let rebuilt: String = tokenize(source)
            .iter()
            .flat_map(|tag| tag.span.slice(&chars).iter().copied())
            .collect();
        assert_eq!(rebuilt, source);
    }
}
