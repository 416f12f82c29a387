//! Headless page model: everything the page would display, without markup.

use std::fmt;

use factcheck_core::i18n::{Catalog, LabelSlot, CANONICAL_LANGUAGE, PAGE_BINDINGS};
use factcheck_core::model::{Language, Mode, Theme};
use factcheck_core::render::{Section, SectionBody, Tone};

/// Top-level pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    /// Claim input and results.
    #[default]
    Home,
    /// Static list of sources used.
    Sources,
}

/// A static label bound to a translation key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundLabel {
    /// Catalog key.
    pub key: &'static str,
    /// Where the text goes.
    pub slot: LabelSlot,
    /// Text currently displayed.
    pub text: String,
}

/// Snapshot of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Page being shown.
    pub page: Page,
    /// Language of the static labels.
    pub language: Language,
    /// Colour theme.
    pub theme: Theme,
    /// Input mode.
    pub mode: Mode,
    /// Every static label on the page.
    pub labels: Vec<BoundLabel>,
    /// Text field shown.
    pub text_visible: bool,
    /// Link field shown.
    pub link_visible: bool,
    /// Contents of the text field.
    pub text_input: String,
    /// Contents of the link field.
    pub link_input: String,
    /// Loading indicator shown.
    pub loading_visible: bool,
    /// Results panel shown.
    pub results_visible: bool,
    /// Results panel contents, in display order.
    pub sections: Vec<Section>,
    /// Cosmetic vertical offset of the input card, in percent.
    pub layout_offset: i8,
}

impl View {
    /// Fresh page with labels resolved for `language`.
    pub fn new(catalog: &Catalog, language: Language, theme: Theme) -> Self {
        let labels = PAGE_BINDINGS
            .iter()
            .map(|&(key, slot)| BoundLabel {
                key,
                slot,
                text: catalog.get(CANONICAL_LANGUAGE, key).unwrap_or_default().to_string(),
            })
            .collect();
        let mode = Mode::default();
        let mut view = Self {
            page: Page::default(),
            language: CANONICAL_LANGUAGE,
            theme,
            mode,
            labels,
            text_visible: mode.shows_text(),
            link_visible: mode.shows_link(),
            text_input: String::new(),
            link_input: String::new(),
            loading_visible: false,
            results_visible: false,
            sections: Vec::new(),
            layout_offset: 0,
        };
        view.apply_labels(catalog, language);
        view
    }

    /// Re-applies every bound label from `language`'s table. Keys the table
    /// lacks keep their current text.
    pub fn apply_labels(&mut self, catalog: &Catalog, language: Language) {
        self.language = language;
        for label in &mut self.labels {
            if let Some(text) = catalog.get(language, label.key) {
                label.text = text.to_string();
            }
        }
    }

    /// Current text of the label bound to `key`.
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels
            .iter()
            .find(|l| l.key == key)
            .map(|l| l.text.as_str())
    }

    /// Writes every bound label, one per line.
    pub fn write_labels(&self, out: &mut impl fmt::Write) -> fmt::Result {
        for label in &self.labels {
            let slot = match label.slot {
                LabelSlot::Text => "",
                LabelSlot::Placeholder => " (placeholder)",
            };
            writeln!(out, "{}{}: {}", label.key, slot, label.text)?;
        }
        Ok(())
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "[{}] page={:?} theme={:?} mode={} offset={}%",
            self.language,
            self.page,
            self.theme,
            self.mode.as_str(),
            self.layout_offset
        )?;
        if self.text_visible {
            writeln!(f, "text: {}", self.text_input)?;
        }
        if self.link_visible {
            writeln!(f, "link: {}", self.link_input)?;
        }
        if self.loading_visible {
            writeln!(f, "{}", self.label("home.checking").unwrap_or("..."))?;
        }
        if !self.results_visible {
            return Ok(());
        }

        for section in &self.sections {
            if !section.heading.is_empty() {
                writeln!(f)?;
                writeln!(f, "{}", section.heading)?;
            }
            match &section.body {
                SectionBody::Verdict { score, tone, label } => {
                    let tone = match tone {
                        Tone::Success => "success",
                        Tone::Warning => "warning",
                        Tone::Danger => "danger",
                    };
                    writeln!(f, "  {score}/100 [{tone}] {label}")?;
                }
                SectionBody::Explanation { text } => writeln!(f, "  {text}")?,
                SectionBody::Links { items } => {
                    for item in items {
                        writeln!(f, "  - {} <{}>", item.title, item.display_url)?;
                    }
                }
                SectionBody::FactChecks { items } => {
                    for item in items {
                        writeln!(f, "  - {}: {}", item.claim, item.rating_label)?;
                    }
                }
                SectionBody::DomainCheck {
                    safety_label,
                    blacklist_label,
                    ..
                } => {
                    writeln!(f, "  {safety_label}")?;
                    writeln!(f, "  {blacklist_label}")?;
                }
                SectionBody::Error { message, .. } => {
                    writeln!(f)?;
                    writeln!(f, "{message}")?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_start_in_the_preferred_language() {
        let catalog = Catalog::builtin();
        let view = View::new(&catalog, Language::En, Theme::Light);
        assert_eq!(view.language, Language::En);
        assert_eq!(view.labels.len(), PAGE_BINDINGS.len());
        assert_eq!(view.label("home.textPlaceholder"), catalog.get(Language::En, "home.textPlaceholder"));
    }

    #[test]
    fn missing_keys_keep_previous_text() {
        let mut view = View::new(&Catalog::builtin(), Language::Uk, Theme::Light);
        let before = view.label("home.title").map(str::to_string);

        let mut sparse = Catalog::default();
        sparse.extend(Language::En, [("nav.sources".to_string(), "Sources!".to_string())]);
        view.apply_labels(&sparse, Language::En);

        assert_eq!(view.label("home.title").map(str::to_string), before);
        assert_eq!(view.label("nav.sources"), Some("Sources!"));
    }
}
