//! Inline link grammar: `[text](destination)` or `[text](destination "title")`.

/// Finds link spans in a paragraph without rescanning it for every `[`.
pub(crate) struct LinkScanner {
    next_text_close: Vec<Option<usize>>,
    next_paren_open: Vec<Option<usize>>,
    next_paren_close: Vec<Option<usize>>,
    next_backslash: Vec<Option<usize>>,
}

impl LinkScanner {
    pub fn new(chars: &[char]) -> Self {
        Self {
            next_text_close: next_occurrences(chars, ']'),
            next_paren_open: next_occurrences(chars, '('),
            next_paren_close: next_occurrences(chars, ')'),
            next_backslash: next_occurrences(chars, '\\'),
        }
    }

    /// Returns the index of the closing `)` when a link starts at `open`.
    pub fn match_at(&self, open: usize) -> Option<usize> {
        let text_end = lookup(&self.next_text_close, open + 1)?;
        if text_end == open + 1 {
            return None;
        }
        // The first `(` after the opener must sit right behind `]`.
        let paren_open = lookup(&self.next_paren_open, open + 1)?;
        if paren_open != text_end + 1 {
            return None;
        }
        let paren_close = lookup(&self.next_paren_close, open + 1)?;
        if paren_close <= paren_open {
            return None;
        }
        match lookup(&self.next_backslash, open) {
            Some(backslash) if backslash < paren_close => None,
            _ => Some(paren_close),
        }
    }
}

fn next_occurrences(chars: &[char], needle: char) -> Vec<Option<usize>> {
    let mut table = vec![None; chars.len() + 1];
    for idx in (0..chars.len()).rev() {
        table[idx] = if chars[idx] == needle {
            Some(idx)
        } else {
            table[idx + 1]
        };
    }
    table
}

fn lookup(table: &[Option<usize>], from: usize) -> Option<usize> {
    table.get(from).copied().flatten()
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LinkParts<'a> {
    pub text: &'a str,
    pub destination: &'a str,
    pub title: Option<&'a str>,
}

/// Splits a raw link span captured by the tokenizer.
pub fn split_link(raw: &str) -> Option<LinkParts<'_>> {
    let text_end = raw.find(']')?;
    let text = raw.get(1..text_end)?;
    let rest = raw.get(text_end + 1..)?;
    let inner = rest.strip_prefix('(')?;
    let inner = &inner[..inner.find(')')?];

    let quoted = inner.find('"').and_then(|first| {
        let after = &inner[first + 1..];
        after.find('"').map(|second| (first, &after[..second]))
    });
    let (destination, title) = match quoted {
        Some((first, title)) => (inner[..first].trim_end(), Some(title)),
        None => (inner, None),
    };
    Some(LinkParts {
        text,
        destination,
        title,
    })
}
