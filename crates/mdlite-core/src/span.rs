/// Half-open range of character offsets inside one paragraph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Result<Self, SpanError> {
        if start <= end {
            Ok(Self { start, end })
        } else {
            Err(SpanError::Inverted { start, end })
        }
    }

    pub(crate) fn at(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the characters of `chars` covered by this span, clamped to the slice.
    pub fn slice<'a>(&self, chars: &'a [char]) -> &'a [char] {
        let end = self.end.min(chars.len());
        let start = self.start.min(end);
        &chars[start..end]
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SpanError {
    Inverted { start: usize, end: usize },
}

impl std::fmt::Display for SpanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SpanError::Inverted { start, end } => {
                write!(f, "span start {} is past its end {}", start, end)
            }
        }
    }
}

impl std::error::Error for SpanError {}

#[cfg(test)]
mod tests {
    use super::{Span, SpanError};

    #[test]
    fn inverted_span_is_rejected() {
        assert_eq!(
            Span::new(3, 1),
            Err(SpanError::Inverted { start: 3, end: 1 })
        );
        let span = Span::new(1, 3).expect("span");
        assert_eq!(span.len(), 2);
        assert!(!span.is_empty());
    }

    #[test]
    fn slice_is_clamped() {
        let chars: Vec<char> = "abc".chars().collect();
        let span = Span { start: 2, end: 9 };
        assert_eq!(span.slice(&chars), &['c']);
        let past = Span { start: 7, end: 9 };
        assert!(past.slice(&chars).is_empty());
    }
}
