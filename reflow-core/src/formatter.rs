//! Paragraph reflow transformation
//!
//! The transformation is total: any input string produces a result, and an
//! input that cleans down to nothing produces the empty string.

use regex::Regex;
use std::sync::OnceLock;

/// Characters that end a sentence in the raw input.
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// A paragraph closes once it holds this many sentences.
const MAX_SENTENCES_PER_PARAGRAPH: usize = 3;

/// A paragraph closes once its word count strictly exceeds this.
const MAX_WORDS_PER_PARAGRAPH: usize = 50;

static FILLER_WORDS: OnceLock<Regex> = OnceLock::new();
static MULTI_SPACE: OnceLock<Regex> = OnceLock::new();

/// Whole-word filler tokens, case-sensitive.
fn filler_words() -> &'static Regex {
    FILLER_WORDS.get_or_init(|| Regex::new(r"\b(uh|um)\b").expect("valid filler pattern"))
}

/// Maximal runs of whitespace.
fn multi_space() -> &'static Regex {
    MULTI_SPACE.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace pattern"))
}

/// Reflows raw text into bounded paragraphs.
///
/// The formatter owns a scratch buffer for the in-progress paragraph, so a
/// single instance can be reused across many calls without reallocating.
/// The buffer is cleared at the start of every call; no state carries over.
#[derive(Debug)]
pub struct ParagraphFormatter {
    scratch: String,
}

impl ParagraphFormatter {
    /// Create a new formatter with a pre-sized scratch buffer.
    pub fn new() -> Self {
        Self {
            scratch: String::with_capacity(256),
        }
    }

    /// Transform raw text into paragraph-structured text.
    ///
    /// Steps, in order: remove filler words (`uh`, `um`) as whole words,
    /// collapse whitespace runs to single spaces, split on `.`/`!`/`?`,
    /// capitalize each sentence and terminate it with `.`, then accumulate
    /// sentences into paragraphs closed at 3 sentences or more than 50
    /// words, joined by blank lines.
    pub fn format(&mut self, text: &str) -> String {
        let cleaned = filler_words().replace_all(text, "");
        let cleaned = multi_space().replace_all(&cleaned, " ");
        let cleaned = cleaned.trim();

        self.scratch.clear();
        let mut out = String::with_capacity(cleaned.len());
        let mut sentence_count = 0;
        let mut word_count = 0;

        for segment in cleaned.split(SENTENCE_TERMINATORS) {
            let sentence = segment.trim();
            if sentence.is_empty() {
                continue;
            }

            if !self.scratch.is_empty() {
                self.scratch.push(' ');
            }
            let start = self.scratch.len();
            push_normalized(sentence, &mut self.scratch);

            sentence_count += 1;
            // Word-count proxy: spaces in the finalized sentence, plus one.
            word_count += self.scratch[start..].matches(' ').count() + 1;

            if sentence_count >= MAX_SENTENCES_PER_PARAGRAPH
                || word_count > MAX_WORDS_PER_PARAGRAPH
            {
                close_paragraph(&mut out, &mut self.scratch);
                sentence_count = 0;
                word_count = 0;
            }
        }

        if !self.scratch.is_empty() {
            close_paragraph(&mut out, &mut self.scratch);
        }

        out
    }
}

impl Default for ParagraphFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Transform raw text with a throwaway formatter.
///
/// Convenience wrapper around [`ParagraphFormatter::format`] for one-off
/// calls; batch callers should reuse a formatter instead.
pub fn format(text: &str) -> String {
    ParagraphFormatter::new().format(text)
}

/// Append a sentence with its first character uppercased and a `.` appended.
fn push_normalized(sentence: &str, buf: &mut String) {
    let mut chars = sentence.chars();
    if let Some(first) = chars.next() {
        buf.extend(first.to_uppercase());
        buf.push_str(chars.as_str());
    }
    buf.push('.');
}

/// Move the in-progress paragraph into the output, blank-line separated.
fn close_paragraph(out: &mut String, paragraph: &mut String) {
    if !out.is_empty() {
        out.push_str("\n\n");
    }
    out.push_str(paragraph);
    paragraph.clear();
}
