use crate::tag::{Tag, TagRole, TagSeq};

/// Demotes resolved pairs that enclose nothing worth marking up.
///
/// A pair survives when at least one tag between its opener and closer holds a
/// letter or digit, or is longer than two characters.
pub fn filter_empty_spans(tags: &mut TagSeq) {
    // significant[i] counts significant tags in tags[..i].
    let mut significant = Vec::with_capacity(tags.len() + 1);
    significant.push(0usize);
    for tag in tags.iter() {
        let last = significant.last().copied().unwrap_or(0);
        significant.push(last + usize::from(is_significant(tag)));
    }

    let mut openers = Vec::new();
    let mut pairs = Vec::new();
    for (index, tag) in tags.iter().enumerate() {
        match tag.role {
            TagRole::Opening => openers.push(index),
            TagRole::Closing => {
                if let Some(opener) = openers.pop() {
                    pairs.push((opener, index));
                }
            }
            TagRole::Completed | TagRole::Single | TagRole::None => {}
        }
    }

    for (opener, closer) in pairs {
        if significant[closer] == significant[opener + 1] {
            log::trace!(
                "demote empty {} span {}..{}",
                tags[opener].kind,
                opener,
                closer
            );
            tags[opener].demote();
            tags[closer].demote();
        }
    }
}

fn is_significant(tag: &Tag) -> bool {
    tag.content.chars().count() > 2 || tag.content.chars().any(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::filter_empty_spans;
    use crate::resolver::{OpenKinds, resolve_borders};
    use crate::tag::TagKind;
    use crate::tokenizer::tokenize;

    fn marked_kinds(source: &str) -> Vec<TagKind> {
        let mut tags = tokenize(source);
        resolve_borders(&mut tags, OpenKinds::new());
        filter_empty_spans(&mut tags);
        tags.into_iter()
            .filter(|tag| !tag.is_text())
            .map(|tag| tag.kind)
            .collect()
    }

    #[test]
    fn back_to_back_strong_is_text() {
        assert!(marked_kinds("____").is_empty());
        assert!(marked_kinds("строка ____").is_empty());
    }

    #[test]
    fn punctuation_only_span_is_text() {
        assert!(marked_kinds("a _._ b").is_empty());
    }

    #[test]
    fn inner_empty_pair_goes_outer_pair_stays() {
        assert_eq!(
            marked_kinds("__a _._ b__"),
            vec![TagKind::Strong, TagKind::Strong]
        );
    }

    #[test]
    fn link_counts_as_content() {
        assert_eq!(
            marked_kinds("x _[l](u)_ y"),
            vec![TagKind::Emphasis, TagKind::Link, TagKind::Emphasis]
        );
    }

    #[test]
    fn empty_header_is_text() {
        assert!(marked_kinds("# __").is_empty());
    }
}
