//! The submit → loading → result/error lifecycle.

use factcheck_core::api::CheckRequest;
use factcheck_core::i18n::Catalog;
use factcheck_core::model::{ClaimInput, UiPhase, VerificationResult};
use factcheck_core::render::{DisplayError, ResultsRenderer};
use factcheck_core::validation::{validate_claim, ValidationError};
use tokio::sync::Mutex;

use crate::backend::{Backend, CheckError};
use crate::context::AppContext;
use crate::localize;

/// Why a submission produced no result.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// Inputs failed validation; no request was made.
    #[error("invalid claim: {0}")]
    Validation(ValidationError),
    /// See [`CheckError::Network`].
    #[error("network error: {0}")]
    Network(String),
    #[error("server error ({status})")]
    /// See [`CheckError::Server`].
    Server {
        /// HTTP status code.
        status: u16,
        /// Backend-supplied message.
        message: Option<String>,
    },
    /// Another submission is awaiting its response.
    #[error("a submission is already in flight")]
    InFlight,
    /// The results were cleared while the request was in flight.
    #[error("results were cleared before the response arrived")]
    Superseded,
}

impl From<CheckError> for SubmitError {
    fn from(e: CheckError) -> Self {
        match e {
            CheckError::Network(msg) => SubmitError::Network(msg),
            CheckError::Server { status, message } => SubmitError::Server { status, message },
        }
    }
}

/// Validates the current inputs and, if they pass, verifies them.
///
/// At most one submission is in flight; a second one is rejected with
/// [`SubmitError::InFlight`] without touching the page. Exactly one `/check`
/// call is made per accepted submission.
pub async fn submit<B>(
    ctx: &Mutex<AppContext>,
    catalog: &Catalog,
    backend: &B,
) -> Result<VerificationResult, SubmitError>
where
    B: Backend + ?Sized,
{
    let (claim, ticket, epoch) = {
        let mut ctx = ctx.lock().await;
        if ctx.is_in_flight() {
            tracing::info!("submission rejected: another one is in flight");
            return Err(SubmitError::InFlight);
        }

        let lang = ctx.language();
        let view = ctx.view();
        let claim = ClaimInput::new(ctx.mode(), &view.text_input, &view.link_input, lang);

        if let Err(e) = validate_claim(&claim) {
            tracing::info!(error = %e, mode = claim.mode.as_str(), "claim failed validation");
            let sections = ResultsRenderer::new(catalog, lang).render_error(DisplayError::Validation(e));
            ctx.show_sections(sections, UiPhase::ShowingError, lang);
            return Err(SubmitError::Validation(e));
        }

        let Some(ticket) = ctx.begin_request() else {
            return Err(SubmitError::InFlight);
        };
        ctx.mark_request_made();
        ctx.set_phase(UiPhase::Loading);
        (claim, ticket, ctx.results_epoch())
    };

    tracing::info!(
        ticket,
        mode = claim.mode.as_str(),
        lang = %claim.language,
        "submission dispatched"
    );
    let outcome = backend.check(&CheckRequest::from(&claim)).await;

    let needs_resync = {
        let mut ctx = ctx.lock().await;
        ctx.finish_request(ticket);

        if ctx.results_epoch() != epoch {
            tracing::info!(ticket, "dropping response for cleared results");
            return Err(SubmitError::Superseded);
        }

        let renderer = ResultsRenderer::new(catalog, ctx.language());
        let produced_in = claim.language;
        match &outcome {
            Ok(result) => {
                tracing::info!(ticket, score = result.score, "submission finished");
                ctx.show_sections(renderer.render(result), UiPhase::ShowingResult, produced_in);
            }
            Err(CheckError::Network(msg)) => {
                tracing::warn!(ticket, error = %msg, "verification request failed");
                ctx.show_sections(
                    renderer.render_error(DisplayError::Network),
                    UiPhase::ShowingError,
                    produced_in,
                );
            }
            Err(CheckError::Server { status, message }) => {
                tracing::warn!(ticket, status, message = ?message, "verification rejected");
                ctx.show_sections(
                    renderer.render_error(DisplayError::Server {
                        message: message.clone(),
                    }),
                    UiPhase::ShowingError,
                    produced_in,
                );
            }
        }

        // The language may have changed while the request was in flight.
        ctx.language() != produced_in && !ctx.dynamic_entries().is_empty()
    };

    if needs_resync {
        localize::resync_dynamic(ctx, backend).await;
    }

    outcome.map_err(SubmitError::from)
}
