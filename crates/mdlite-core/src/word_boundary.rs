use crate::tag::{Neighbors, TagKind, TagSeq};

#[derive(Clone, Copy, Debug)]
struct Candidate {
    index: usize,
    word: usize,
    inside_word: bool,
}

/// Demotes emphasis and strong markers that could only pair with a marker in another word.
///
/// Markers of one kind are walked in order. Two neighbouring markers in the same word
/// are taken as a pair and skipped together. When the neighbours sit in different words,
/// each one wedged between two letters is demoted, since it has no partner in its own word.
pub fn filter_cross_word(tags: &mut TagSeq) {
    let mut strong = Vec::new();
    let mut emphasis = Vec::new();
    let mut word = 0;
    for index in 0..tags.len() {
        let tag = &tags[index];
        if tag.is_space() {
            word += 1;
            continue;
        }
        let bucket = match tag.kind {
            TagKind::Strong => &mut strong,
            TagKind::Emphasis => &mut emphasis,
            _ => continue,
        };
        bucket.push(Candidate {
            index,
            word,
            inside_word: Neighbors::of(tags.as_slice(), index).inside_word(),
        });
    }

    for candidates in [strong, emphasis] {
        let mut i = 0;
        while i + 1 < candidates.len() {
            let (current, next) = (candidates[i], candidates[i + 1]);
            if current.word == next.word {
                i += 2;
                continue;
            }
            for candidate in [current, next] {
                if candidate.inside_word {
                    log::trace!(
                        "demote {} at {}: its partner is in another word",
                        tags[candidate.index].kind,
                        candidate.index
                    );
                    tags[candidate.index].demote();
                }
            }
            i += 1;
        }
    }
}
