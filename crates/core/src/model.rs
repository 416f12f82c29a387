//! Page-level domain types: modes, languages, inputs and the normalised result.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which combination of fields a verification request needs.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Free text only.
    #[default]
    Text,
    /// A link only.
    Link,
    /// Text and link together.
    Both,
}

impl Mode {
    /// Whether the text field is visible (and required) in this mode.
    pub fn shows_text(self) -> bool {
        matches!(self, Mode::Text | Mode::Both)
    }

    /// Whether the link field is visible (and required) in this mode.
    pub fn shows_link(self) -> bool {
        matches!(self, Mode::Link | Mode::Both)
    }

    /// Wire/CLI name.
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Text => "text",
            Mode::Link => "link",
            Mode::Both => "both",
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Mode::Text),
            "link" => Ok(Mode::Link),
            "both" => Ok(Mode::Both),
            other => Err(format!("unknown mode '{other}' (expected text, link or both)")),
        }
    }
}

/// UI language.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Ukrainian. Default and canonical language of the string tables.
    #[default]
    Uk,
    /// English.
    En,
}

impl Language {
    /// All languages with a built-in string table.
    pub const ALL: [Language; 2] = [Language::Uk, Language::En];

    /// Two-letter code sent to the backend.
    pub fn code(self) -> &'static str {
        match self {
            Language::Uk => "uk",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "uk" => Ok(Language::Uk),
            "en" => Ok(Language::En),
            other => Err(format!("unsupported language '{other}' (expected uk or en)")),
        }
    }
}

/// Colour theme.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Default.
    #[default]
    Light,
    /// Dark background.
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// A claim as submitted for verification.
///
/// Built on submit from the trimmed inputs; empty inputs become `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimInput {
    /// Mode active at submit time.
    pub mode: Mode,
    /// Trimmed text, `None` when blank.
    pub text: Option<String>,
    /// Trimmed link, `None` when blank.
    pub link: Option<String>,
    /// UI language the backend should answer in.
    pub language: Language,
}

impl ClaimInput {
    /// Trims both inputs; blank ones become `None`.
    pub fn new(mode: Mode, text: &str, link: &str, language: Language) -> Self {
        Self {
            mode,
            text: non_empty(text),
            link: non_empty(link),
            language,
        }
    }

    /// Text as sent on the wire (empty when absent).
    pub fn text_or_empty(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }

    /// Link as sent on the wire (empty when absent).
    pub fn link_or_empty(&self) -> &str {
        self.link.as_deref().unwrap_or("")
    }
}

fn non_empty(s: &str) -> Option<String> {
    let t = s.trim();
    (!t.is_empty()).then(|| t.to_string())
}

/// Which panel the page is showing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum UiPhase {
    /// Nothing submitted, or results were cleared.
    #[default]
    Idle,
    /// A submission is awaiting its response.
    Loading,
    /// Result sections are shown.
    ShowingResult,
    /// A single error section is shown.
    ShowingError,
}

/// A fact-check match for the claim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactCheckClaim {
    /// Claim as the fact-check database words it.
    pub claim_text: String,
    /// Textual rating of the first review, if any.
    pub rating: Option<String>,
}

/// A web search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Page title; the URL when the backend sent none.
    pub title: String,
    /// Full link target.
    pub url: String,
}

/// Reputation of the submitted link's domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomainCheck {
    /// Safe-browsing verdict.
    pub is_safe: bool,
    /// Listed on a spam/abuse blocklist.
    pub is_blacklisted: bool,
}

/// Verification result as consumed by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationResult {
    /// Credibility score, 0-100.
    pub score: u8,
    /// AI explanation, possibly with markdown emphasis.
    pub explanation: Option<String>,
    /// URLs the explanation cites.
    pub explanation_sources: Vec<String>,
    /// Fact-check database matches, in backend order.
    pub fact_check_claims: Vec<FactCheckClaim>,
    /// Search hits that carry a link, in backend order.
    pub search_results: Vec<SearchHit>,
    /// `None` when the backend checked no domain.
    pub domain_check: Option<DomainCheck>,
}

impl VerificationResult {
    /// A result carrying only a score.
    pub fn with_score(score: u8) -> Self {
        Self {
            score: score.min(100),
            explanation: None,
            explanation_sources: vec![],
            fact_check_claims: vec![],
            search_results: vec![],
            domain_check: None,
        }
    }
}
