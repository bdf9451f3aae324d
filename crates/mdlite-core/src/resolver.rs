use crate::tag::{Neighbors, Tag, TagKind, TagRole, TagSeq};

/// Which pairable kinds currently have an unmatched opener.
///
/// Belongs to a single paragraph: build a fresh one for every call to [`resolve_borders`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OpenKinds {
    header: bool,
    strong: bool,
    emphasis: bool,
}

impl OpenKinds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self, kind: TagKind) -> bool {
        match kind {
            TagKind::Header => self.header,
            TagKind::Strong => self.strong,
            TagKind::Emphasis => self.emphasis,
            TagKind::Text | TagKind::Escape | TagKind::Link => false,
        }
    }

    fn set(&mut self, kind: TagKind, open: bool) {
        match kind {
            TagKind::Header => self.header = open,
            TagKind::Strong => self.strong = open,
            TagKind::Emphasis => self.emphasis = open,
            TagKind::Text | TagKind::Escape | TagKind::Link => {}
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Rejection {
    OpensWhileOpen,
    ClosesWhileClosed,
    LetterMeetsDigit,
    Isolated,
}

impl Rejection {
    fn reason(self) -> &'static str {
        match self {
            Rejection::OpensWhileOpen => "opener while the same kind is open",
            Rejection::ClosesWhileClosed => "closer without an open tag",
            Rejection::LetterMeetsDigit => "between a letter and a digit",
            Rejection::Isolated => "surrounded by spaces",
        }
    }
}

/// Matches openers with closers and demotes every marker that cannot take part in a pair.
///
/// Escapes and links are skipped. A closer pairs with the top of the stack when the
/// kinds agree; a mismatch means the spans cross and the whole open stack turns into text.
/// Strong may not open inside an open emphasis. A header still open at the end is closed
/// by a synthetic tag appended to the sequence; anything else left open is demoted.
pub fn resolve_borders(tags: &mut TagSeq, mut open: OpenKinds) {
    let mut stack: Vec<usize> = Vec::new();
    let end = tags.last().map_or(0, |tag| tag.span.end);

    for index in 0..tags.len() {
        let kind = tags[index].kind;
        if !kind.is_pairable() {
            continue;
        }
        if let Some(rejection) = reject(tags, index, &open) {
            demote(tags, index, rejection.reason());
            continue;
        }

        if open.is_open(kind) {
            if let Some(top) = stack.pop() {
                let top_kind = tags[top].kind;
                if top_kind == kind {
                    tags[index].role = TagRole::Closing;
                    open.set(kind, false);
                    continue;
                }
                open.set(top_kind, false);
                open.set(kind, false);
                demote(tags, top, "crossed by another span");
                demote(tags, index, "closes across another span");
                while let Some(rest) = stack.pop() {
                    open.set(tags[rest].kind, false);
                    demote(tags, rest, "crossed by another span");
                }
                continue;
            }
        }

        if let Some(&top) = stack.last() {
            if tags[top].kind == TagKind::Emphasis && kind == TagKind::Strong {
                demote(tags, index, "strong inside emphasis");
                continue;
            }
        }

        stack.push(index);
        open.set(kind, true);
    }

    while let Some(index) = stack.pop() {
        let kind = tags[index].kind;
        open.set(kind, false);
        if kind == TagKind::Header {
            tags.push(Tag::header_closer(end));
        } else if tags[index].role != TagRole::Single {
            demote(tags, index, "never closed");
        }
    }
}

fn reject(tags: &[Tag], index: usize, open: &OpenKinds) -> Option<Rejection> {
    let neighbors = Neighbors::of(tags, index);
    let prev_space = neighbors.prev_is_space();
    let next_space = neighbors.next_is_space();
    let is_open = open.is_open(tags[index].kind);

    if prev_space && !next_space && is_open {
        Some(Rejection::OpensWhileOpen)
    } else if next_space && !prev_space && !is_open {
        Some(Rejection::ClosesWhileClosed)
    } else if neighbors.letter_meets_digit() {
        Some(Rejection::LetterMeetsDigit)
    } else if prev_space && next_space {
        Some(Rejection::Isolated)
    } else {
        None
    }
}

fn demote(tags: &mut [Tag], index: usize, reason: &str) {
    log::trace!("demote {} at {}: {}", tags[index].kind, index, reason);
    tags[index].demote();
}
