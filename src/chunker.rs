use regex::Regex;
use std::sync::LazyLock;

/// Character budget of a single message segment.
pub const DEFAULT_SEGMENT_LEN: usize = 279;

// ── Sentence boundaries ────────────────────────────────────────────
//
// Abstracts are one paragraph of plain text, e.g.
//   "Plato was a Greek philosopher born in Athens. He founded the Academy."
//
// A boundary is any character, a period, a space and an uppercase letter.
// "Athens. He" matches: "Athens." closes the first sentence, "He" opens the
// second, and only the space between them is dropped. Initials such as
// "J. R. R. Tolkien" match too.

static RE_SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r".\. [A-Z]").unwrap());

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Split an abstract into sentences.
///
/// Joining the result with single spaces gives back `text` unchanged.
pub fn split_abstract(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in RE_SENTENCE_END.find_iter(text) {
        // The match ends in "<space><ASCII uppercase>", both one byte wide.
        let space = m.end() - 2;
        sentences.push(text[start..space].to_string());
        start = space + 1;
    }
    sentences.push(text[start..].to_string());

    sentences
}

/// Greedily pack the words of one sentence into lines.
///
/// A line counts one trailing space per word and stays strictly below
/// `max_len`. A word too long for any line is emitted alone, unsplit.
pub fn split_sentence(sentence: &str, max_len: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut words: Vec<&str> = Vec::new();
    let mut line_len = 0;

    for word in sentence.split(' ') {
        let word_len = char_len(word) + 1;
        if !words.is_empty() && line_len + word_len >= max_len {
            lines.push(words.join(" "));
            words.clear();
            line_len = 0;
        }
        words.push(word);
        line_len += word_len;
    }
    if !words.is_empty() {
        lines.push(words.join(" "));
    }

    lines
}

/// Break every sentence longer than `max_len` on word boundaries.
pub fn chunk_sentences<S: AsRef<str>>(sentences: &[S], max_len: usize) -> Vec<String> {
    let mut chunks = Vec::with_capacity(sentences.len());
    for sentence in sentences {
        let sentence = sentence.as_ref();
        if char_len(sentence) > max_len {
            chunks.extend(split_sentence(sentence, max_len));
        } else {
            chunks.push(sentence.to_string());
        }
    }
    chunks
}

/// Concatenate segments, space-separated, into as few strings under
/// `max_len` as greedy packing allows.
///
/// A segment that does not fit starts a new string. An oversized segment
/// still gets a string of its own rather than being dropped. Empty segments
/// are skipped.
pub fn pack_segments<S: AsRef<str>>(segments: &[S], max_len: usize) -> Vec<String> {
    let mut packed = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for segment in segments {
        let segment = segment.as_ref();
        if segment.is_empty() {
            continue;
        }
        let segment_len = char_len(segment);

        if current.is_empty() {
            current.push_str(segment);
            current_len = segment_len;
        } else if current_len + 1 + segment_len < max_len {
            current.push(' ');
            current.push_str(segment);
            current_len += 1 + segment_len;
        } else {
            packed.push(std::mem::take(&mut current));
            current.push_str(segment);
            current_len = segment_len;
        }
    }
    if !current.is_empty() {
        packed.push(current);
    }

    packed
}

/// The first `max_segments` message-sized segments of an abstract.
pub fn abstract_segments(text: &str, max_len: usize, max_segments: usize) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() || max_segments == 0 {
        return Vec::new();
    }

    let sentences = split_abstract(text);
    let chunks = chunk_sentences(&sentences, max_len);
    let mut segments = pack_segments(&chunks, max_len);
    segments.truncate(max_segments);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const PLATO: &str = "Plato was an ancient Greek philosopher born in Athens. \
        He founded the Academy. His dialogues are still read today.";

    // ── split_abstract ───────────────────────────────────────────────

    #[test]
    fn test_split_abstract_sentences() {
        assert_eq!(
            split_abstract(PLATO),
            vec![
                "Plato was an ancient Greek philosopher born in Athens.",
                "He founded the Academy.",
                "His dialogues are still read today.",
            ]
        );
    }

    #[test]
    fn test_split_abstract_ignores_lowercase_continuation() {
        assert_eq!(
            split_abstract("Born c. 428 BC in Athens. Died in 348."),
            vec!["Born c. 428 BC in Athens.", "Died in 348."]
        );
    }

    #[test]
    fn test_split_abstract_single_sentence() {
        assert_eq!(split_abstract("No boundary here"), vec!["No boundary here"]);
        assert_eq!(split_abstract(""), vec![""]);
    }

    #[test]
    fn test_split_abstract_non_ascii() {
        let text = "Él nació en Écija. Murió en Córdoba.";
        assert_eq!(
            split_abstract(text),
            vec!["Él nació en Écija.", "Murió en Córdoba."]
        );
    }

    // ── split_sentence ───────────────────────────────────────────────

    #[test]
    fn test_split_sentence_greedy() {
        assert_eq!(split_sentence("aa bb cc dd", 7), vec!["aa bb", "cc dd"]);
    }

    #[test]
    fn test_split_sentence_lines_stay_below_limit() {
        let sentence = "one two three four five six seven eight nine ten";
        for line in split_sentence(sentence, 12) {
            // plus the trailing space the budget reserves
            assert!(line.chars().count() + 1 < 12, "{line:?}");
        }
    }

    #[test]
    fn test_split_sentence_oversized_word_passes_through() {
        assert_eq!(
            split_sentence("a verylongword b", 5),
            vec!["a", "verylongword", "b"]
        );
    }

    // ── chunk_sentences ──────────────────────────────────────────────

    #[test]
    fn test_chunk_sentences_only_splits_long_ones() {
        let chunks = chunk_sentences(&["short one", "this sentence is too long"], 12);
        assert_eq!(chunks, vec!["short one", "this", "sentence", "is too", "long"]);
    }

    #[test]
    fn test_chunk_sentences_exact_length_passes() {
        assert_eq!(chunk_sentences(&["abcde"], 5), vec!["abcde"]);
    }

    // ── pack_segments ────────────────────────────────────────────────

    #[test]
    fn test_pack_segments_greedy() {
        assert_eq!(
            pack_segments(&["ab", "cd", "ef", "gh"], 9),
            vec!["ab cd ef", "gh"]
        );
    }

    #[test]
    fn test_pack_segments_keeps_oversized_segment() {
        assert_eq!(
            pack_segments(&["aaaa", "bb", "cccccccccc", "d"], 8),
            vec!["aaaa bb", "cccccccccc", "d"]
        );
    }

    #[test]
    fn test_pack_segments_oversized_first() {
        assert_eq!(pack_segments(&["cccccccccc", "d"], 8), vec!["cccccccccc", "d"]);
    }

    #[test]
    fn test_pack_segments_skips_empty() {
        assert_eq!(pack_segments(&["", "a", "", "b"], 10), vec!["a b"]);
        assert!(pack_segments::<&str>(&[], 10).is_empty());
    }

    // ── abstract_segments ────────────────────────────────────────────

    #[test]
    fn test_abstract_segments_fit_one_message() {
        assert_eq!(abstract_segments(PLATO, DEFAULT_SEGMENT_LEN, 3), vec![PLATO]);
    }

    #[test]
    fn test_abstract_segments_truncates() {
        let segments = abstract_segments(PLATO, 40, 2);
        assert_eq!(
            segments,
            vec![
                "Plato was an ancient Greek philosopher",
                "born in Athens. He founded the Academy.",
            ]
        );
    }

    #[test]
    fn test_abstract_segments_empty() {
        assert!(abstract_segments("   ", DEFAULT_SEGMENT_LEN, 3).is_empty());
        assert!(abstract_segments(PLATO, DEFAULT_SEGMENT_LEN, 0).is_empty());
    }

    proptest! {
        #[test]
        fn chunking_loses_no_text(
            text in "[A-Za-z]{1,12}\\.?( [A-Za-z]{1,12}\\.?){0,60}",
            max_len in 5usize..80,
        ) {
            let chunks = chunk_sentences(&split_abstract(&text), max_len);
            prop_assert_eq!(chunks.join(" "), text.clone());

            let packed = pack_segments(&chunks, max_len);
            prop_assert_eq!(packed.join(" "), text);
        }
    }
}
