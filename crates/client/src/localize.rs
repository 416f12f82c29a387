//! Live language switching over whatever the page currently shows.
//!
//! Static labels and section labels are re-derived from their keys and
//! semantic data. Dynamic text is always translated from its canonical form,
//! never from a previous translation, and a per-entry generation makes the
//! most recent switch win when translations overlap.

use factcheck_core::i18n::Catalog;
use factcheck_core::model::Language;
use futures::future::join_all;
use tokio::sync::Mutex;

use crate::backend::Backend;
use crate::context::AppContext;

/// Makes `lang` the active language and re-localizes the page.
///
/// Calling it twice with the same language leaves the page as one call does,
/// given stable translations.
pub async fn set_language<B>(ctx: &Mutex<AppContext>, catalog: &Catalog, backend: &B, lang: Language)
where
    B: Backend + ?Sized,
{
    {
        let mut ctx = ctx.lock().await;
        if let Err(e) = ctx.prefs_mut().set_language(lang) {
            tracing::warn!(error = %e, "failed to persist language");
        }

        let view = ctx.view_mut();
        view.apply_labels(catalog, lang);
        for section in &mut view.sections {
            section.relabel(catalog, lang);
        }
        tracing::info!(lang = %lang, "language switched");
    }

    resync_dynamic(ctx, backend).await;
}

/// Brings every dynamic entry to the active language.
///
/// Translation failures are not errors: the entry shows its canonical text.
pub async fn resync_dynamic<B>(ctx: &Mutex<AppContext>, backend: &B)
where
    B: Backend + ?Sized,
{
    let pending = ctx.lock().await.begin_resync();
    if pending.is_empty() {
        return;
    }

    let fetched = join_all(pending.into_iter().map(|p| async move {
        let outcome = backend.translate(&p.canonical_text, p.target).await;
        (p, outcome)
    }))
    .await;

    let mut ctx = ctx.lock().await;
    for (p, outcome) in fetched {
        let text = match outcome {
            Ok(translated) => translated,
            Err(e) => {
                tracing::warn!(
                    entry = ?p.key,
                    target = %p.target,
                    error = %e,
                    "translation failed, showing canonical text"
                );
                p.canonical_text.clone()
            }
        };
        if !ctx.apply_translation(p.key, p.generation, &text) {
            tracing::debug!(entry = ?p.key, generation = p.generation, "discarding superseded translation");
        }
    }
}
