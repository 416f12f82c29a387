//! Turns a verification result (or an error) into ordered display sections.
//!
//! Sections keep their semantic data next to the text derived from it, so
//! [`Section::relabel`] can re-derive every label for another language without
//! looking at the previously displayed text.

use serde::{Deserialize, Serialize};

use crate::i18n::{keys, Catalog, CANONICAL_LANGUAGE};
use crate::model::{Language, VerificationResult};
use crate::text::{hostname_of, strip_markdown_emphasis, truncate_url};
use crate::validation::ValidationError;

/// At most this many fact-check matches and search hits are shown.
pub const MAX_LISTED: usize = 3;

/// Colour band of a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    /// 70 and above.
    Success,
    /// 50 to 69.
    Warning,
    /// Below 50.
    Danger,
}

impl Tone {
    /// `>= 70` success, `50..70` warning, below 50 danger.
    pub fn for_score(score: u8) -> Self {
        match score {
            70.. => Tone::Success,
            50..=69 => Tone::Warning,
            _ => Tone::Danger,
        }
    }

    fn verdict_key(self) -> &'static str {
        match self {
            Tone::Success => keys::SCORE_HIGH,
            Tone::Warning => keys::SCORE_MEDIUM,
            Tone::Danger => keys::SCORE_LOW,
        }
    }
}

/// Semantic identity of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    /// Score, tone and verdict label.
    Verdict,
    /// AI explanation.
    Explanation,
    /// Sources cited by the explanation.
    Sources,
    /// Fact-check database matches.
    FactChecks,
    /// Web search hits.
    SearchResults,
    /// Link domain reputation.
    DomainCheck,
    /// Replaces every other section.
    Error,
}

impl SectionKind {
    /// String-table key of the heading; error sections have none.
    pub fn heading_key(self) -> Option<&'static str> {
        match self {
            SectionKind::Verdict => Some(keys::RESULTS_SCORE),
            SectionKind::Explanation => Some(keys::RESULTS_GEMINI),
            SectionKind::Sources => Some(keys::RESULTS_SOURCES),
            SectionKind::FactChecks => Some(keys::RESULTS_FACTCHECK),
            SectionKind::SearchResults => Some(keys::RESULTS_SEARCH),
            SectionKind::DomainCheck => Some(keys::RESULTS_DOMAIN),
            SectionKind::Error => None,
        }
    }

    /// Emoji prefixed to the heading.
    pub fn icon(self) -> &'static str {
        match self {
            SectionKind::Verdict => "📊",
            SectionKind::Explanation => "🤖",
            SectionKind::Sources => "🔗",
            SectionKind::FactChecks => "📰",
            SectionKind::SearchResults => "🔍",
            SectionKind::DomainCheck => "🌐",
            SectionKind::Error => "",
        }
    }
}

/// Identity of a piece of dynamic (backend-provided) text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKey {
    /// The AI explanation.
    Explanation,
    /// An error message supplied by the backend.
    ServerError,
}

/// An error shown in place of results, stored by kind rather than by text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    /// The claim was rejected before submission.
    Validation(ValidationError),
    /// Transport failure or unreadable response.
    Network,
    /// The backend answered with a failure status.
    Server {
        /// Backend-supplied text, shown verbatim.
        message: Option<String>,
    },
}

impl DisplayError {
    /// String-table key of the message, or `None` when the backend supplied it.
    pub fn message_key(&self) -> Option<&'static str> {
        match self {
            DisplayError::Validation(e) => Some(e.message_key()),
            DisplayError::Network => Some(keys::ERROR_NETWORK),
            DisplayError::Server { message: Some(_) } => None,
            DisplayError::Server { message: None } => Some(keys::ERROR_GENERIC),
        }
    }
}

/// How a link item got its title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTitle {
    /// Hostname parsed from the URL.
    Host(String),
    /// URL did not parse; a localized placeholder is shown.
    Fallback,
    /// Title sent by the backend.
    Provided(String),
}

/// A clickable entry of the sources or search sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkItem {
    /// Full link target, never truncated.
    pub href: String,
    /// Where `title` comes from; decides whether it re-localizes.
    pub title_source: LinkTitle,
    /// Displayed title.
    pub title: String,
    /// `href` shortened for display.
    pub display_url: String,
}

/// One row of the fact-check section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactCheckItem {
    /// Claim text.
    pub claim: String,
    /// Rating as the reviewer gave it.
    pub rating: Option<String>,
    /// The rating, or the localized "not found" label.
    pub rating_label: String,
}

/// Content of a section. Each variant keeps the data its labels derive from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionBody {
    /// Verdict content.
    Verdict {
        /// 0-100.
        score: u8,
        /// Colour band of `score`.
        tone: Tone,
        /// Localized verdict for `tone`.
        label: String,
    },
    /// Explanation content.
    Explanation {
        /// Displayed text: canonical or translated.
        text: String,
    },
    /// Sources or search hits.
    Links {
        /// At most [`MAX_LISTED`] for search hits.
        items: Vec<LinkItem>,
    },
    /// Fact-check matches.
    FactChecks {
        /// At most [`MAX_LISTED`].
        items: Vec<FactCheckItem>,
    },
    /// Domain reputation.
    DomainCheck {
        /// Safe-browsing verdict.
        is_safe: bool,
        /// Blocklist verdict.
        is_blacklisted: bool,
        /// Localized label for `is_safe`.
        safety_label: String,
        /// Localized label for `is_blacklisted`.
        blacklist_label: String,
    },
    /// An error in place of results.
    Error {
        /// What went wrong; the message key derives from it.
        error: DisplayError,
        /// Displayed message.
        message: String,
    },
}

/// One rendered block of the results panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// Semantic identity; the heading derives from it.
    pub kind: SectionKind,
    /// Icon and localized title; empty for errors.
    pub heading: String,
    /// Section content.
    pub body: SectionBody,
}

impl Section {
    fn new(kind: SectionKind, body: SectionBody, catalog: &Catalog, lang: Language) -> Self {
        let mut section = Self {
            kind,
            heading: String::new(),
            body,
        };
        if lang != CANONICAL_LANGUAGE {
            section.relabel(catalog, CANONICAL_LANGUAGE);
        }
        section.relabel(catalog, lang);
        section
    }

    /// Re-derives the heading and every label from semantic data.
    ///
    /// Keys missing from `lang`'s table leave the current text as it is.
    /// Dynamic text is not touched.
    pub fn relabel(&mut self, catalog: &Catalog, lang: Language) {
        let set = |slot: &mut String, key: &str| {
            if let Some(text) = catalog.get(lang, key) {
                *slot = text.to_string();
            }
        };

        if let Some(key) = self.kind.heading_key() {
            if let Some(text) = catalog.get(lang, key) {
                self.heading = format!("{} {}", self.kind.icon(), text);
            }
        }

        match &mut self.body {
            SectionBody::Verdict { tone, label, .. } => set(label, tone.verdict_key()),
            SectionBody::Explanation { .. } => {}
            SectionBody::Links { items } => {
                for item in items {
                    match &item.title_source {
                        LinkTitle::Fallback => set(&mut item.title, keys::SOURCE_FALLBACK),
                        LinkTitle::Host(t) | LinkTitle::Provided(t) => item.title = t.clone(),
                    }
                }
            }
            SectionBody::FactChecks { items } => {
                for item in items {
                    match &item.rating {
                        Some(r) => item.rating_label = r.clone(),
                        None => set(&mut item.rating_label, keys::NOT_FOUND),
                    }
                }
            }
            SectionBody::DomainCheck {
                is_safe,
                is_blacklisted,
                safety_label,
                blacklist_label,
            } => {
                set(safety_label, if *is_safe { keys::SAFE } else { keys::UNSAFE });
                set(
                    blacklist_label,
                    if *is_blacklisted { keys::BLACKLIST } else { keys::NOT_BLACKLIST },
                );
            }
            SectionBody::Error { error, message } => {
                if let Some(key) = error.message_key() {
                    set(message, key);
                }
            }
        }
    }

    /// The dynamic entry this section displays, with its current text.
    pub fn dynamic_text(&self) -> Option<(EntryKey, &str)> {
        match &self.body {
            SectionBody::Explanation { text } => Some((EntryKey::Explanation, text)),
            SectionBody::Error {
                error: DisplayError::Server { message: Some(_) },
                message,
            } => Some((EntryKey::ServerError, message)),
            _ => None,
        }
    }

    /// Replaces the displayed text of `key`. Returns false when this section
    /// does not display that entry.
    pub fn set_dynamic_text(&mut self, key: EntryKey, value: &str) -> bool {
        match (&mut self.body, key) {
            (SectionBody::Explanation { text }, EntryKey::Explanation) => {
                *text = value.to_string();
                true
            }
            (
                SectionBody::Error {
                    error: DisplayError::Server { message: Some(_) },
                    message,
                },
                EntryKey::ServerError,
            ) => {
                *message = value.to_string();
                true
            }
            _ => false,
        }
    }
}

/// Renders results in one language.
pub struct ResultsRenderer<'a> {
    catalog: &'a Catalog,
    lang: Language,
}

impl<'a> ResultsRenderer<'a> {
    /// Renderer labelling sections in `lang`.
    pub fn new(catalog: &'a Catalog, lang: Language) -> Self {
        Self { catalog, lang }
    }

    /// Sections in display order; sections without data are omitted.
    pub fn render(&self, result: &VerificationResult) -> Vec<Section> {
        let mut sections = vec![self.section(
            SectionKind::Verdict,
            SectionBody::Verdict {
                score: result.score,
                tone: Tone::for_score(result.score),
                label: String::new(),
            },
        )];

        let explanation = result
            .explanation
            .as_deref()
            .map(strip_markdown_emphasis)
            .filter(|e| !e.trim().is_empty());
        if let Some(text) = explanation {
            sections.push(self.section(SectionKind::Explanation, SectionBody::Explanation { text }));
        }

        if !result.explanation_sources.is_empty() {
            let items = result
                .explanation_sources
                .iter()
                .map(|src| {
                    let title_source = match hostname_of(src) {
                        Some(host) => LinkTitle::Host(host),
                        None => LinkTitle::Fallback,
                    };
                    link_item(src, title_source)
                })
                .collect();
            sections.push(self.section(SectionKind::Sources, SectionBody::Links { items }));
        }

        if !result.fact_check_claims.is_empty() {
            let items = result
                .fact_check_claims
                .iter()
                .take(MAX_LISTED)
                .map(|c| FactCheckItem {
                    claim: c.claim_text.clone(),
                    rating: c.rating.clone(),
                    rating_label: String::new(),
                })
                .collect();
            sections.push(self.section(SectionKind::FactChecks, SectionBody::FactChecks { items }));
        }

        if !result.search_results.is_empty() {
            let items = result
                .search_results
                .iter()
                .take(MAX_LISTED)
                .map(|hit| link_item(&hit.url, LinkTitle::Provided(hit.title.clone())))
                .collect();
            sections.push(self.section(SectionKind::SearchResults, SectionBody::Links { items }));
        }

        if let Some(dc) = result.domain_check {
            sections.push(self.section(
                SectionKind::DomainCheck,
                SectionBody::DomainCheck {
                    is_safe: dc.is_safe,
                    is_blacklisted: dc.is_blacklisted,
                    safety_label: String::new(),
                    blacklist_label: String::new(),
                },
            ));
        }

        sections
    }

    /// A single error section.
    pub fn render_error(&self, error: DisplayError) -> Vec<Section> {
        let message = match &error {
            DisplayError::Server { message: Some(m) } => m.clone(),
            _ => String::new(),
        };
        vec![self.section(SectionKind::Error, SectionBody::Error { error, message })]
    }

    fn section(&self, kind: SectionKind, body: SectionBody) -> Section {
        Section::new(kind, body, self.catalog, self.lang)
    }
}

fn link_item(href: &str, title_source: LinkTitle) -> LinkItem {
    LinkItem {
        href: href.to_string(),
        title_source,
        title: String::new(),
        display_url: truncate_url(href),
    }
}
