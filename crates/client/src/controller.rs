//! Event dispatch over the shared application state.

use std::sync::Arc;

use factcheck_core::i18n::Catalog;
use factcheck_core::model::{Language, Mode, VerificationResult};
use tokio::sync::Mutex;

use crate::backend::Backend;
use crate::context::AppContext;
use crate::prefs::PreferenceStore;
use crate::submit::SubmitError;
use crate::view::{Page, View};
use crate::{localize, mode, submit};

/// User actions the page reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Mode switch; clears results and inputs.
    SelectMode(Mode),
    /// Claim text typed.
    SetText(String),
    /// Link typed.
    SetLink(String),
    /// Submit button.
    Submit,
    /// Language switch.
    SetLanguage(Language),
    /// Theme toggle.
    ToggleTheme,
    /// Navigation link; clears results like a mode switch.
    Navigate(Page),
    /// Viewport width in pixels.
    Resize(u32),
}

/// Owns the application state and the backend; every user action goes
/// through here. Clones share state.
pub struct Controller<B> {
    backend: Arc<B>,
    catalog: Arc<Catalog>,
    ctx: Arc<Mutex<AppContext>>,
}

impl<B> Clone for Controller<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            catalog: Arc::clone(&self.catalog),
            ctx: Arc::clone(&self.ctx),
        }
    }
}

impl<B: Backend> Controller<B> {
    /// Builds the initial page from `prefs`.
    pub fn new(backend: B, catalog: Catalog, prefs: PreferenceStore, viewport_width: u32) -> Self {
        let ctx = AppContext::new(&catalog, prefs, viewport_width);
        Self {
            backend: Arc::new(backend),
            catalog: Arc::new(catalog),
            ctx: Arc::new(Mutex::new(ctx)),
        }
    }

    /// Handles one event. Only [`Event::Submit`] can fail.
    pub async fn dispatch(&self, event: Event) -> Result<(), SubmitError> {
        match event {
            Event::SelectMode(m) => self.select_mode(m).await,
            Event::SetText(text) => self.ctx.lock().await.view_mut().text_input = text,
            Event::SetLink(link) => self.ctx.lock().await.view_mut().link_input = link,
            Event::Submit => {
                self.submit().await?;
            }
            Event::SetLanguage(lang) => self.set_language(lang).await,
            Event::ToggleTheme => self.toggle_theme().await,
            Event::Navigate(page) => self.navigate(page).await,
            Event::Resize(width) => self.ctx.lock().await.set_viewport_width(width),
        }
        Ok(())
    }

    /// See [`mode::select_mode`].
    pub async fn select_mode(&self, m: Mode) {
        mode::select_mode(&mut *self.ctx.lock().await, m);
    }

    /// See [`mode::navigate`].
    pub async fn navigate(&self, page: Page) {
        mode::navigate(&mut *self.ctx.lock().await, page);
    }

    /// See [`submit::submit`].
    pub async fn submit(&self) -> Result<VerificationResult, SubmitError> {
        submit::submit(&self.ctx, &self.catalog, self.backend.as_ref()).await
    }

    /// See [`localize::set_language`].
    pub async fn set_language(&self, lang: Language) {
        localize::set_language(&self.ctx, &self.catalog, self.backend.as_ref(), lang).await;
    }

    /// Flips the theme and persists it. A failed write is logged, not returned.
    pub async fn toggle_theme(&self) {
        let mut ctx = self.ctx.lock().await;
        let theme = ctx.theme().toggled();
        if let Err(e) = ctx.prefs_mut().set_theme(theme) {
            tracing::warn!(error = %e, "failed to persist theme");
        }
        ctx.set_theme_view(theme);
        tracing::info!(theme = ?theme, "theme toggled");
    }

    /// Copy of the page as it is now.
    pub async fn snapshot(&self) -> View {
        self.ctx.lock().await.view().clone()
    }

    /// Runs `f` against the current state.
    pub async fn inspect<T>(&self, f: impl FnOnce(&AppContext) -> T) -> T {
        f(&*self.ctx.lock().await)
    }
}
