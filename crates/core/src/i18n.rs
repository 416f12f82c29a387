//! UI string tables and the labels bound to them.
//!
//! The built-in tables cover `uk` (canonical) and `en`. Extension tables can be
//! layered on top with [`Catalog::extend`] or [`Catalog::extend_from_json`]; an
//! extension entry replaces the built-in text for the same key.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::model::Language;

/// Keys used by code (as opposed to keys only bound to static labels).
pub mod keys {
    /// Verdict heading.
    pub const RESULTS_SCORE: &str = "results.score";
    /// Explanation heading.
    pub const RESULTS_GEMINI: &str = "results.gemini";
    /// Sources heading.
    pub const RESULTS_SOURCES: &str = "results.sources";
    /// Fact-check heading.
    pub const RESULTS_FACTCHECK: &str = "results.factcheck";
    /// Search results heading.
    pub const RESULTS_SEARCH: &str = "results.search";
    /// Domain check heading.
    pub const RESULTS_DOMAIN: &str = "results.domain";
    /// Title of a source whose URL does not parse.
    pub const SOURCE_FALLBACK: &str = "results.sourceFallback";
    /// Fact-check match without a rating.
    pub const NOT_FOUND: &str = "notfound";
    /// Domain passed safe browsing.
    pub const SAFE: &str = "safe";
    /// Domain failed safe browsing.
    pub const UNSAFE: &str = "unsafe";
    /// Domain is blocklisted.
    pub const BLACKLIST: &str = "blacklist";
    /// Domain is not blocklisted.
    pub const NOT_BLACKLIST: &str = "notblacklist";
    /// Verdict for a success tone.
    pub const SCORE_HIGH: &str = "score.high";
    /// Verdict for a warning tone.
    pub const SCORE_MEDIUM: &str = "score.medium";
    /// Verdict for a danger tone.
    pub const SCORE_LOW: &str = "score.low";
    /// [`ValidationError::EmptyText`](crate::validation::ValidationError::EmptyText).
    pub const ERROR_TEXT: &str = "errorText";
    /// [`ValidationError::EmptyLink`](crate::validation::ValidationError::EmptyLink).
    pub const ERROR_LINK: &str = "errorLink";
    /// [`ValidationError::EmptyBoth`](crate::validation::ValidationError::EmptyBoth).
    pub const ERROR_BOTH: &str = "errorBoth";
    /// [`ValidationError::TextTooShort`](crate::validation::ValidationError::TextTooShort).
    pub const ERROR_TEXT_SHORT: &str = "errorTextShort";
    /// [`ValidationError::IsQuestion`](crate::validation::ValidationError::IsQuestion).
    pub const ERROR_QUESTION: &str = "errorQuestion";
    /// [`ValidationError::Subjective`](crate::validation::ValidationError::Subjective).
    pub const ERROR_SUBJECTIVE: &str = "errorSubjective";
    /// Transport failure of a verification request.
    pub const ERROR_NETWORK: &str = "errorNetwork";
    /// Backend failure without a message of its own.
    pub const ERROR_GENERIC: &str = "errorGeneric";
}

/// Language whose table is the reference for every key.
pub const CANONICAL_LANGUAGE: Language = Language::Uk;

/// Where a bound label's text goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelSlot {
    /// Element text content.
    Text,
    /// Input placeholder.
    Placeholder,
}

/// Static labels on the page, each bound to a translation key.
pub const PAGE_BINDINGS: &[(&str, LabelSlot)] = &[
    ("nav.factCheck", LabelSlot::Text),
    ("nav.sources", LabelSlot::Text),
    ("home.title", LabelSlot::Text),
    ("home.subtitle", LabelSlot::Text),
    ("home.modeText", LabelSlot::Text),
    ("home.modeLink", LabelSlot::Text),
    ("home.modeBoth", LabelSlot::Text),
    ("home.textPlaceholder", LabelSlot::Placeholder),
    ("home.linkPlaceholder", LabelSlot::Placeholder),
    ("home.checkButton", LabelSlot::Text),
    ("home.checking", LabelSlot::Text),
    ("results.title", LabelSlot::Text),
    ("sources.title", LabelSlot::Text),
    ("sources.subtitle", LabelSlot::Text),
    ("sources.reuters", LabelSlot::Text),
    ("sources.reutersDesc", LabelSlot::Text),
    ("sources.bbc", LabelSlot::Text),
    ("sources.bbcDesc", LabelSlot::Text),
    ("sources.snopes", LabelSlot::Text),
    ("sources.snopesDesc", LabelSlot::Text),
    ("sources.politifact", LabelSlot::Text),
    ("sources.politifactDesc", LabelSlot::Text),
    ("sources.cdc", LabelSlot::Text),
    ("sources.cdcDesc", LabelSlot::Text),
    ("sources.who", LabelSlot::Text),
    ("sources.whoDesc", LabelSlot::Text),
    ("sources.stopfake", LabelSlot::Text),
    ("sources.stopfakeDesc", LabelSlot::Text),
    ("sources.vox", LabelSlot::Text),
    ("sources.voxDesc", LabelSlot::Text),
    ("sources.visit", LabelSlot::Text),
    ("tips.title", LabelSlot::Text),
    ("tips.checkMultipleSources", LabelSlot::Text),
    ("tips.checkMultipleSourcesDesc", LabelSlot::Text),
    ("tips.primarySources", LabelSlot::Text),
    ("tips.primarySourcesDesc", LabelSlot::Text),
    ("tips.checkDate", LabelSlot::Text),
    ("tips.checkDateDesc", LabelSlot::Text),
    ("tips.beSkeptical", LabelSlot::Text),
    ("tips.beSkepticalDesc", LabelSlot::Text),
];

/// Errors loading an extension table.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Not a `{"<lang>": {"<key>": "<text>"}}` JSON object.
    #[error("malformed string table: {0}")]
    Malformed(#[from] serde_json::Error),
    /// A language code without a built-in table.
    #[error("string table names unsupported language '{0}'")]
    UnknownLanguage(String),
}

/// Per-language string tables.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: BTreeMap<Language, HashMap<String, String>>,
}

impl Catalog {
    /// Catalog holding the built-in `uk` and `en` tables.
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        catalog.extend(Language::Uk, UK.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        catalog.extend(Language::En, EN.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        catalog
    }

    /// Text for `key` in `lang`, if the table has it.
    pub fn get(&self, lang: Language, key: &str) -> Option<&str> {
        self.tables.get(&lang)?.get(key).map(String::as_str)
    }

    /// Adds or replaces entries of one language.
    pub fn extend<I>(&mut self, lang: Language, entries: I)
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.tables.entry(lang).or_default().extend(entries);
    }

    /// Overlays a JSON table of the form `{"en": {"key": "text"}}`.
    ///
    /// Returns the number of entries applied. Nothing is applied when any
    /// language code is unsupported.
    pub fn extend_from_json(&mut self, raw: &str) -> Result<usize, CatalogError> {
        let parsed: BTreeMap<String, BTreeMap<String, String>> = serde_json::from_str(raw)?;

        let mut staged = Vec::with_capacity(parsed.len());
        for (code, entries) in parsed {
            let lang: Language = code.parse().map_err(|_| CatalogError::UnknownLanguage(code))?;
            staged.push((lang, entries));
        }

        let mut applied = 0;
        for (lang, entries) in staged {
            applied += entries.len();
            self.extend(lang, entries);
        }
        Ok(applied)
    }
}

const UK: &[(&str, &str)] = &[
    ("nav.factCheck", "Перевірка фактів"),
    ("nav.sources", "Корисні джерела"),
    ("home.title", "Перевірка фактів"),
    ("home.subtitle", "За допомогою наукового інструменту перевірки правдивості"),
    ("home.modeText", "Тільки текст"),
    ("home.modeLink", "Тільки посилання"),
    ("home.modeBoth", "Текст + посилання"),
    ("home.textPlaceholder", "Введіть текст для перевірки..."),
    ("home.linkPlaceholder", "https://example.com"),
    ("home.checkButton", "Перевірити"),
    ("home.checking", "Йде перевірка..."),
    ("results.title", "Результати перевірки"),
    ("results.factcheck", "Google FactCheck"),
    ("results.search", "Google Search"),
    ("results.gemini", "Perplexity AI"),
    ("results.domain", "Перевірка домену"),
    ("results.score", "Оцінка достовірності"),
    ("results.sources", "Джерела перевірки"),
    ("notfound", "Нічого не знайдено"),
    ("safe", "✅ Безпечно"),
    ("unsafe", "❌ Небезпечно"),
    ("notblacklist", "✅ Не в чорному списку"),
    ("blacklist", "❌ У чорному списку"),
    ("errorText", "❌ Введіть текст"),
    ("errorLink", "❌ Введіть посилання"),
    ("errorBoth", "❌ Заповніть всі поля"),
    ("errorTextShort", "❌ Введіть текст (мінімум 10 символів та 2 слова)"),
    ("errorQuestion", "❌ Введіть твердження, а не питання"),
    ("errorSubjective", "❌ Це субʼєктивне твердження — його неможливо перевірити"),
    ("sources.title", "Корисні джерела"),
    ("sources.subtitle", "Перевірені ресурси для додаткової інформації"),
    ("sources.reuters", "Reuters"),
    ("sources.reutersDesc", "Міжнародна інформаційна організація"),
    ("sources.bbc", "BBC Reality Check"),
    ("sources.bbcDesc", "Служба перевірки фактів BBC"),
    ("sources.snopes", "Snopes"),
    ("sources.snopesDesc", "Сайт перевірки міських легенд та чуток"),
    ("sources.politifact", "PolitiFact"),
    ("sources.politifactDesc", "Сайт перевірки фактів, лауреат премії Пулітцера"),
    ("sources.cdc", "CDC"),
    ("sources.cdcDesc", "Центри контролю та профілактики захворювань"),
    ("sources.who", "WHO"),
    ("sources.whoDesc", "Всесвітня організація охорони здоров'я"),
    ("sources.stopfake", "StopFake"),
    ("sources.stopfakeDesc", "Українська організація перевірки фактів"),
    ("sources.vox", "VoxUkraine"),
    ("sources.voxDesc", "Українська аналітична платформа"),
    ("sources.visit", "Відвідати"),
    ("tips.title", "💡 Поради для перевірки фактів"),
    ("tips.checkMultipleSources", "Перевіряйте кілька джерел"),
    ("tips.checkMultipleSourcesDesc", "Завжди перевіряйте інформацію з кількох надійних джерел."),
    ("tips.primarySources", "Шукайте первинні джерела"),
    ("tips.primarySourcesDesc", "Знаходьте оригінальне джерело інформації, коли це можливо."),
    ("tips.checkDate", "Перевіряйте дату публікації"),
    ("tips.checkDateDesc", "Переконайтеся, що інформація актуальна та доречна."),
    ("tips.beSkeptical", "Будьте скептичними"),
    ("tips.beSkepticalDesc", "Ставте під сумнів надзвичайні твердження та перевіряйте докази."),
    ("results.sourceFallback", "Джерело"),
    ("errorNetwork", "❌ Помилка мережі"),
    ("errorGeneric", "❌ Помилка"),
    ("score.high", "Вірогідно правда"),
    ("score.medium", "Невизначено"),
    ("score.low", "Вірогідно неправда"),
];

const EN: &[(&str, &str)] = &[
    ("nav.factCheck", "Fact Check"),
    ("nav.sources", "Sources"),
    ("home.title", "Fact Check"),
    ("home.subtitle", "Fast scientific truth-checking tool"),
    ("home.modeText", "Text only"),
    ("home.modeLink", "Link only"),
    ("home.modeBoth", "Text + Link"),
    ("home.textPlaceholder", "Enter text to check..."),
    ("home.linkPlaceholder", "https://example.com"),
    ("home.checkButton", "Check"),
    ("home.checking", "Checking..."),
    ("results.title", "Results"),
    ("results.factcheck", "Google FactCheck"),
    ("results.search", "Google Search"),
    ("results.gemini", "Perplexity AI"),
    ("results.domain", "Domain check"),
    ("results.score", "Credibility Score"),
    ("results.sources", "Verification Sources"),
    ("notfound", "Nothing found"),
    ("safe", "✅ Safe"),
    ("unsafe", "❌ Unsafe"),
    ("notblacklist", "✅ Not in blacklist"),
    ("blacklist", "❌ In blacklist"),
    ("errorText", "❌ Enter text"),
    ("errorLink", "❌ Enter a link"),
    ("errorBoth", "❌ Fill in all the fields"),
    ("errorTextShort", "❌ Enter text (minimum 10 characters and 2 words)"),
    ("errorQuestion", "❌ Enter a statement, not a question"),
    ("errorSubjective", "❌ This is a subjective statement and cannot be verified"),
    ("sources.title", "Sources"),
    ("sources.subtitle", "Verified resources for additional information"),
    ("sources.reuters", "Reuters"),
    ("sources.reutersDesc", "International news organization"),
    ("sources.bbc", "BBC Reality Check"),
    ("sources.bbcDesc", "BBC fact-checking service"),
    ("sources.snopes", "Snopes"),
    ("sources.snopesDesc", "Urban legends and rumor checking site"),
    ("sources.politifact", "PolitiFact"),
    ("sources.politifactDesc", "Fact-checking site, Pulitzer Prize winner"),
    ("sources.cdc", "CDC"),
    ("sources.cdcDesc", "Centers for Disease Control and Prevention"),
    ("sources.who", "WHO"),
    ("sources.whoDesc", "World Health Organization"),
    ("sources.stopfake", "StopFake"),
    ("sources.stopfakeDesc", "Ukrainian fact-checking organization"),
    ("sources.vox", "VoxUkraine"),
    ("sources.voxDesc", "Ukrainian analytical platform"),
    ("sources.visit", "Visit"),
    ("tips.title", "💡 Fact-checking Tips"),
    ("tips.checkMultipleSources", "Check multiple sources"),
    ("tips.checkMultipleSourcesDesc", "Always verify information from multiple reliable sources."),
    ("tips.primarySources", "Look for primary sources"),
    ("tips.primarySourcesDesc", "Find the original source when possible."),
    ("tips.checkDate", "Check the publication date"),
    ("tips.checkDateDesc", "Make sure the information is current and relevant."),
    ("tips.beSkeptical", "Be skeptical"),
    ("tips.beSkepticalDesc", "Question extraordinary claims and check evidence."),
    ("results.sourceFallback", "Source"),
    ("errorNetwork", "❌ Network error"),
    ("errorGeneric", "❌ Error"),
    ("score.high", "Likely True"),
    ("score.medium", "Uncertain"),
    ("score.low", "Likely False"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_share_their_keys() {
        let uk: Vec<_> = UK.iter().map(|(k, _)| *k).collect();
        let en: Vec<_> = EN.iter().map(|(k, _)| *k).collect();
        assert_eq!(uk, en);
    }

    #[test]
    fn every_binding_resolves_in_every_language() {
        let catalog = Catalog::builtin();
        for lang in Language::ALL {
            for (key, _) in PAGE_BINDINGS {
                assert!(catalog.get(lang, key).is_some(), "{lang}: missing {key}");
            }
        }
    }

    #[test]
    fn extension_overrides_and_adds() {
        let mut catalog = Catalog::builtin();
        let n = catalog
            .extend_from_json(r#"{"en": {"home.title": "Claim Check", "extra.key": "Extra"}}"#)
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(catalog.get(Language::En, "home.title"), Some("Claim Check"));
        assert_eq!(catalog.get(Language::En, "extra.key"), Some("Extra"));
        assert_eq!(catalog.get(Language::Uk, "extra.key"), None);
    }

    #[test]
    fn extension_with_unknown_language_is_rejected_whole() {
        let mut catalog = Catalog::builtin();
        let err = catalog
            .extend_from_json(r#"{"en": {"home.title": "X"}, "fr": {"home.title": "Y"}}"#)
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownLanguage(code) if code == "fr"));
        assert_eq!(catalog.get(Language::En, "home.title"), Some("Fact Check"));
    }
}
