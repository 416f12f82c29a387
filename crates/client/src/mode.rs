//! Input mode selection and the cosmetic layout offset.

use factcheck_core::model::Mode;

use crate::context::AppContext;
use crate::view::Page;

/// Vertical offset of the input card, in percent, for a viewport `width`.
///
/// Breakpoints are 480, 768 and 1100 px. Once a request has been made the card
/// sits at the top and the offset is zero.
pub fn layout_offset(width: u32, mode: Mode, request_made: bool) -> i8 {
    if request_made {
        return 0;
    }
    let (text, link, both) = match width {
        0..=480 => (14, 22, 8),
        481..=768 => (10, 18, 4),
        _ => (4, 10, -1),
    };
    match mode {
        Mode::Text => text,
        Mode::Link => link,
        Mode::Both => both,
    }
}

/// Switches the input mode.
///
/// Shows the fields `mode` needs, drops any result or error along with both
/// inputs, and returns to idle. Selecting the active mode again still resets.
pub fn select_mode(ctx: &mut AppContext, mode: Mode) {
    ctx.set_mode(mode);
    ctx.clear_results();
    tracing::debug!(mode = mode.as_str(), "mode selected");
}

/// Switches page. Leaving or entering a page resets the form like a mode change.
pub fn navigate(ctx: &mut AppContext, page: Page) {
    ctx.set_page(page);
    ctx.clear_results();
    tracing::debug!(page = ?page, "navigated");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{PreferenceStore, Preferences};
    use factcheck_core::i18n::Catalog;
    use factcheck_core::model::UiPhase;

    #[test]
    fn offsets_follow_breakpoints() {
        assert_eq!(layout_offset(320, Mode::Text, false), 14);
        assert_eq!(layout_offset(480, Mode::Link, false), 22);
        assert_eq!(layout_offset(481, Mode::Both, false), 4);
        assert_eq!(layout_offset(768, Mode::Text, false), 10);
        assert_eq!(layout_offset(1024, Mode::Link, false), 10);
        assert_eq!(layout_offset(1920, Mode::Both, false), -1);
    }

    #[test]
    fn offset_is_zero_after_a_request() {
        for mode in [Mode::Text, Mode::Link, Mode::Both] {
            assert_eq!(layout_offset(320, mode, true), 0);
        }
    }

    #[test]
    fn select_mode_toggles_fields_and_resets() {
        let catalog = Catalog::builtin();
        let mut ctx = AppContext::new(&catalog, PreferenceStore::in_memory(Preferences::default()), 400);
        ctx.view_mut().text_input = "Some claim text".into();
        ctx.mark_request_made();
        ctx.set_phase(UiPhase::ShowingError);

        select_mode(&mut ctx, Mode::Both);
        let view = ctx.view();
        assert!(view.text_visible && view.link_visible);
        assert!(view.text_input.is_empty());
        assert!(!view.results_visible);
        assert_eq!(ctx.phase(), UiPhase::Idle);
        assert_eq!(view.layout_offset, 8);

        select_mode(&mut ctx, Mode::Link);
        assert!(!ctx.view().text_visible);
        assert!(ctx.view().link_visible);
    }

    #[test]
    fn navigation_clears_the_form() {
        let catalog = Catalog::builtin();
        let mut ctx = AppContext::new(&catalog, PreferenceStore::in_memory(Preferences::default()), 1280);
        ctx.view_mut().link_input = "https://example.com".into();

        navigate(&mut ctx, Page::Sources);
        assert_eq!(ctx.view().page, Page::Sources);
        assert!(ctx.view().link_input.is_empty());
    }
}
