//! Ordered claim validation. The first failing rule wins.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::i18n::keys;
use crate::model::{ClaimInput, Mode};

/// Minimum text length, in characters.
pub const MIN_TEXT_CHARS: usize = 10;
/// Minimum number of whitespace-separated words.
pub const MIN_TEXT_WORDS: usize = 2;

/// Leading words that make a text a question (uk, en, ru).
pub const QUESTION_WORDS: &[&str] = &[
    "хто", "що", "коли", "де", "чому", "як", "скільки", "чи", //
    "who", "what", "where", "when", "why", "how", "which", //
    "кто", "что", "где", "когда", "почему", "как",
];

static QUESTION_PARTICLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:чи|ли)\s+\w+").expect("valid regex"));

/// Why a claim was rejected before submission.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// Text mode or both mode without text.
    #[error("text is required")]
    EmptyText,
    /// Link mode or both mode without a link.
    #[error("link is required")]
    EmptyLink,
    /// Both mode with neither field filled in.
    #[error("text and link are required")]
    EmptyBoth,
    /// Fewer than [`MIN_TEXT_CHARS`] characters or [`MIN_TEXT_WORDS`] words.
    #[error("text must have at least 10 characters and 2 words")]
    TextTooShort,
    /// A question rather than a statement.
    #[error("text is a question, not a statement")]
    IsQuestion,
    /// Reserved: no client-side rule produces it.
    #[error("text is a subjective statement")]
    Subjective,
}

impl ValidationError {
    /// String-table key of the user-facing message.
    pub fn message_key(self) -> &'static str {
        match self {
            ValidationError::EmptyText => keys::ERROR_TEXT,
            ValidationError::EmptyLink => keys::ERROR_LINK,
            ValidationError::EmptyBoth => keys::ERROR_BOTH,
            ValidationError::TextTooShort => keys::ERROR_TEXT_SHORT,
            ValidationError::IsQuestion => keys::ERROR_QUESTION,
            ValidationError::Subjective => keys::ERROR_SUBJECTIVE,
        }
    }
}

/// Validates a claim. The first failing rule wins.
///
/// Rules, in order:
/// - required fields for the mode (`EmptyText`, `EmptyLink`, `EmptyBoth`)
/// - length and word count of the text in text/both mode (`TextTooShort`)
/// - question checks on any supplied text (`IsQuestion`): trailing `?`,
///   an interrogative first word, a `чи`/`ли` particle followed by a word
pub fn validate(mode: Mode, text: &str, link: &str) -> Result<(), ValidationError> {
    let text = text.trim();
    let link = link.trim();

    match mode {
        Mode::Text => {
            if text.is_empty() {
                return Err(ValidationError::EmptyText);
            }
        }
        Mode::Link => {
            if link.is_empty() {
                return Err(ValidationError::EmptyLink);
            }
        }
        Mode::Both => {
            if text.is_empty() && link.is_empty() {
                return Err(ValidationError::EmptyBoth);
            }
            if text.is_empty() {
                return Err(ValidationError::EmptyText);
            }
            if link.is_empty() {
                return Err(ValidationError::EmptyLink);
            }
        }
    }

    if mode.shows_text() && is_too_short(text) {
        return Err(ValidationError::TextTooShort);
    }

    if !text.is_empty() && is_question(text) {
        return Err(ValidationError::IsQuestion);
    }

    Ok(())
}

/// [`validate`] over an assembled claim.
pub fn validate_claim(claim: &ClaimInput) -> Result<(), ValidationError> {
    validate(claim.mode, claim.text_or_empty(), claim.link_or_empty())
}

fn is_too_short(text: &str) -> bool {
    text.chars().count() < MIN_TEXT_CHARS || text.split_whitespace().count() < MIN_TEXT_WORDS
}

/// True when `text` reads as a question rather than a statement.
pub fn is_question(text: &str) -> bool {
    let clean = text.trim().to_lowercase();
    if clean.ends_with('?') {
        return true;
    }

    let first_word: String = clean
        .split_whitespace()
        .next()
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if !first_word.is_empty() && QUESTION_WORDS.contains(&first_word.as_str()) {
        return true;
    }

    QUESTION_PARTICLE.is_match(&clean)
}
