//! The single application state every controller operation reads and writes.

use factcheck_core::i18n::Catalog;
use factcheck_core::model::{Language, Mode, Theme, UiPhase};
use factcheck_core::render::{EntryKey, Section};

use crate::mode::layout_offset;
use crate::prefs::PreferenceStore;
use crate::view::{Page, View};

/// Rendered backend text together with its untranslated source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicTextEntry {
    /// Which section text this is.
    pub key: EntryKey,
    /// Text as the backend produced it. Every translation starts from here.
    pub canonical_text: String,
    /// Language the backend produced `canonical_text` in.
    pub canonical_lang: Language,
    /// Bumped on every resync; only a translation carrying the current
    /// generation may be displayed.
    pub generation: u64,
}

/// A translation the resync has to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingTranslation {
    pub key: EntryKey,
    pub generation: u64,
    pub canonical_text: String,
    pub target: Language,
}

/// Strings this short are shown as-is instead of being translated.
const TRIVIAL_CHARS: usize = 3;

fn is_trivially_short(text: &str) -> bool {
    text.chars().filter(|c| !c.is_whitespace()).count() < TRIVIAL_CHARS
}

/// Application state: preferences, mode, phase, the page model and the
/// dynamic-text registry.
#[derive(Debug)]
pub struct AppContext {
    prefs: PreferenceStore,
    mode: Mode,
    phase: UiPhase,
    view: View,
    entries: Vec<DynamicTextEntry>,
    next_generation: u64,
    in_flight: Option<u64>,
    next_ticket: u64,
    results_epoch: u64,
    request_made: bool,
    viewport_width: u32,
}

impl AppContext {
    /// State with no results, in the default mode, laid out for `viewport_width`.
    pub fn new(catalog: &Catalog, prefs: PreferenceStore, viewport_width: u32) -> Self {
        let view = View::new(catalog, prefs.language(), prefs.theme());
        let mut ctx = Self {
            prefs,
            mode: Mode::default(),
            phase: UiPhase::Idle,
            view,
            entries: Vec::new(),
            next_generation: 0,
            in_flight: None,
            next_ticket: 0,
            results_epoch: 0,
            request_made: false,
            viewport_width,
        };
        ctx.recompute_layout();
        ctx
    }

    /// Active UI language.
    pub fn language(&self) -> Language {
        self.prefs.language()
    }

    /// Active theme.
    pub fn theme(&self) -> Theme {
        self.prefs.theme()
    }

    /// Active input mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Current page phase.
    pub fn phase(&self) -> UiPhase {
        self.phase
    }

    /// The page as it would be displayed.
    pub fn view(&self) -> &View {
        &self.view
    }

    /// Backend text currently shown in the results panel.
    pub fn dynamic_entries(&self) -> &[DynamicTextEntry] {
        &self.entries
    }

    /// Whether a submission is awaiting its response.
    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Whether a submission was made since the results were last cleared.
    pub fn request_made(&self) -> bool {
        self.request_made
    }

    pub(crate) fn prefs_mut(&mut self) -> &mut PreferenceStore {
        &mut self.prefs
    }

    pub(crate) fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.view.mode = mode;
        self.view.text_visible = mode.shows_text();
        self.view.link_visible = mode.shows_link();
    }

    pub(crate) fn set_page(&mut self, page: Page) {
        self.view.page = page;
    }

    pub(crate) fn set_theme_view(&mut self, theme: Theme) {
        self.view.theme = theme;
    }

    pub(crate) fn set_viewport_width(&mut self, width: u32) {
        self.viewport_width = width;
        self.recompute_layout();
    }

    /// Moves to `phase` and updates loading/results visibility to match.
    pub(crate) fn set_phase(&mut self, phase: UiPhase) {
        self.phase = phase;
        let (loading, results) = match phase {
            UiPhase::Idle => (false, false),
            UiPhase::Loading => (true, false),
            UiPhase::ShowingResult | UiPhase::ShowingError => (false, true),
        };
        self.view.loading_visible = loading;
        self.view.results_visible = results;
    }

    pub(crate) fn mark_request_made(&mut self) {
        self.request_made = true;
        self.recompute_layout();
    }

    /// Drops results, dynamic entries and both inputs, and returns to idle.
    /// A submission still in flight will find its results superseded.
    pub(crate) fn clear_results(&mut self) {
        self.view.sections.clear();
        self.entries.clear();
        self.view.text_input.clear();
        self.view.link_input.clear();
        self.set_phase(UiPhase::Idle);
        self.request_made = false;
        self.results_epoch += 1;
        self.recompute_layout();
    }

    pub(crate) fn results_epoch(&self) -> u64 {
        self.results_epoch
    }

    /// Claims the in-flight slot. Returns `None` if it is taken.
    pub(crate) fn begin_request(&mut self) -> Option<u64> {
        if self.in_flight.is_some() {
            return None;
        }
        self.next_ticket += 1;
        self.in_flight = Some(self.next_ticket);
        Some(self.next_ticket)
    }

    pub(crate) fn finish_request(&mut self, ticket: u64) {
        if self.in_flight == Some(ticket) {
            self.in_flight = None;
        }
    }

    /// Replaces the results panel and registers its dynamic text, produced
    /// in `produced_in`.
    pub(crate) fn show_sections(&mut self, sections: Vec<Section>, phase: UiPhase, produced_in: Language) {
        self.view.sections = sections;
        self.entries.clear();
        let found: Vec<(EntryKey, String)> = self
            .view
            .sections
            .iter()
            .filter_map(|s| s.dynamic_text())
            .map(|(key, text)| (key, text.to_string()))
            .collect();
        for (key, canonical_text) in found {
            self.next_generation += 1;
            self.entries.push(DynamicTextEntry {
                key,
                canonical_text,
                canonical_lang: produced_in,
                generation: self.next_generation,
            });
        }
        self.set_phase(phase);
    }

    /// Starts a resync of every dynamic entry to the active language.
    ///
    /// Entries that need no translation are set to their canonical text right
    /// away; the rest are returned for fetching.
    pub(crate) fn begin_resync(&mut self) -> Vec<PendingTranslation> {
        let target = self.language();
        let mut pending = Vec::new();
        for entry in &mut self.entries {
            self.next_generation += 1;
            entry.generation = self.next_generation;

            if entry.canonical_lang == target || is_trivially_short(&entry.canonical_text) {
                set_entry_text(&mut self.view.sections, entry.key, &entry.canonical_text);
            } else {
                pending.push(PendingTranslation {
                    key: entry.key,
                    generation: entry.generation,
                    canonical_text: entry.canonical_text.clone(),
                    target,
                });
            }
        }
        pending
    }

    /// Displays `text` for `key` if no newer resync has started since
    /// `generation` was issued. Returns whether it was applied.
    pub(crate) fn apply_translation(&mut self, key: EntryKey, generation: u64, text: &str) -> bool {
        let current = self
            .entries
            .iter()
            .any(|e| e.key == key && e.generation == generation);
        if !current {
            return false;
        }
        set_entry_text(&mut self.view.sections, key, text)
    }

    fn recompute_layout(&mut self) {
        self.view.layout_offset = layout_offset(self.viewport_width, self.mode, self.request_made);
    }
}

fn set_entry_text(sections: &mut [Section], key: EntryKey, text: &str) -> bool {
    sections
        .iter_mut()
        .any(|s| s.set_dynamic_text(key, text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::Preferences;
    use factcheck_core::model::VerificationResult;
    use factcheck_core::render::ResultsRenderer;

    fn fresh(language: Language) -> (Catalog, AppContext) {
        let catalog = Catalog::builtin();
        let prefs = PreferenceStore::in_memory(Preferences {
            language,
            theme: Theme::Light,
        });
        let ctx = AppContext::new(&catalog, prefs, 1280);
        (catalog, ctx)
    }

    fn with_explanation(text: &str) -> VerificationResult {
        let mut result = VerificationResult::with_score(80);
        result.explanation = Some(text.to_string());
        result
    }

    #[test]
    fn trivially_short_ignores_whitespace() {
        assert!(is_trivially_short(" o k "));
        assert!(!is_trivially_short("yes"));
    }

    #[test]
    fn in_flight_slot_is_exclusive() {
        let (_, mut ctx) = fresh(Language::Uk);
        let ticket = ctx.begin_request().unwrap();
        assert!(ctx.begin_request().is_none());
        ctx.finish_request(ticket);
        assert!(ctx.begin_request().is_some());
    }

    #[test]
    fn stale_generation_is_not_applied() {
        let (catalog, mut ctx) = fresh(Language::En);
        let sections = ResultsRenderer::new(&catalog, Language::Uk).render(&with_explanation("Пояснення"));
        ctx.show_sections(sections, UiPhase::ShowingResult, Language::Uk);

        let first = ctx.begin_resync();
        let second = ctx.begin_resync();
        assert_eq!(first.len(), 1);
        assert!(!ctx.apply_translation(EntryKey::Explanation, first[0].generation, "old"));
        assert!(ctx.apply_translation(EntryKey::Explanation, second[0].generation, "Explanation"));
        assert_eq!(
            ctx.view().sections[1].dynamic_text(),
            Some((EntryKey::Explanation, "Explanation"))
        );
    }

    #[test]
    fn clearing_results_resets_transient_state() {
        let (catalog, mut ctx) = fresh(Language::Uk);
        let sections = ResultsRenderer::new(&catalog, Language::Uk).render(&with_explanation("Текст"));
        ctx.view_mut().text_input = "abc".into();
        ctx.mark_request_made();
        ctx.show_sections(sections, UiPhase::ShowingResult, Language::Uk);
        let epoch = ctx.results_epoch();

        ctx.clear_results();
        assert!(ctx.view().sections.is_empty());
        assert!(ctx.dynamic_entries().is_empty());
        assert!(ctx.view().text_input.is_empty());
        assert_eq!(ctx.phase(), UiPhase::Idle);
        assert!(!ctx.request_made());
        assert_ne!(ctx.results_epoch(), epoch);
    }
}
