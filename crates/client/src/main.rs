#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! `factcheck`: drives the fact-check page controller from the command line.

use std::{path::PathBuf, time::Duration};

use anyhow::Context;
use clap::{Parser, Subcommand};
use factcheck_client::{Controller, Event, HttpBackend, PreferenceStore, SubmitError};
use factcheck_core::i18n::Catalog;
use factcheck_core::model::{Language, Mode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "factcheck")]
struct Args {
    /// Verification service base URL, e.g. http://127.0.0.1:5000
    #[arg(long, default_value = "http://127.0.0.1:5000")]
    backend: String,

    /// Timeout for each backend request, in milliseconds.
    #[arg(long, default_value_t = 30_000)]
    timeout_ms: u64,

    /// Preference file (language and theme).
    #[arg(long, default_value = ".factcheck/prefs.json")]
    prefs: PathBuf,

    /// Extra string table overlaid on the built-in ones: {"<lang>": {"<key>": "<text>"}}
    #[arg(long)]
    strings: Option<PathBuf>,

    /// Viewport width in pixels, for the layout offset.
    #[arg(long, default_value_t = 1280)]
    width: u32,

    /// Log level (env-filter syntax).
    #[arg(long, default_value = "info")]
    log: String,

    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Submit a claim and print the result.
    Check {
        #[arg(long, default_value = "text")]
        mode: Mode,
        #[arg(long, default_value = "")]
        text: String,
        #[arg(long, default_value = "")]
        link: String,
        /// Switch to this language once the result is shown.
        #[arg(long)]
        then_lang: Option<Language>,
    },
    /// Set the UI language (uk or en).
    Lang { code: Language },
    /// Toggle between light and dark theme.
    Theme,
    /// Print the page.
    Show {
        /// Also print every static label.
        #[arg(long)]
        labels: bool,
    },
}

fn load_catalog(strings: Option<&PathBuf>) -> anyhow::Result<Catalog> {
    let mut catalog = Catalog::builtin();
    if let Some(path) = strings {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?;
        let n = catalog
            .extend_from_json(&raw)
            .with_context(|| format!("load string table {}", path.display()))?;
        tracing::info!(path = %path.display(), entries = n, "loaded extension strings");
    }
    Ok(catalog)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&args.log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let catalog = load_catalog(args.strings.as_ref())?;
    let backend = HttpBackend::new(&args.backend, Duration::from_millis(args.timeout_ms))
        .context("build http client")?;
    let prefs = PreferenceStore::load(&args.prefs);
    let controller = Controller::new(backend, catalog, prefs, args.width);

    match args.cmd {
        Cmd::Check {
            mode,
            text,
            link,
            then_lang,
        } => {
            controller.select_mode(mode).await;
            controller.dispatch(Event::SetText(text)).await?;
            controller.dispatch(Event::SetLink(link)).await?;

            match controller.submit().await {
                Ok(_) => {}
                Err(SubmitError::Validation(e)) => tracing::debug!(error = %e, "claim rejected"),
                Err(e) => tracing::warn!(error = %e, "check did not produce a result"),
            }
            print!("{}", controller.snapshot().await);

            if let Some(lang) = then_lang {
                controller.set_language(lang).await;
                println!();
                print!("{}", controller.snapshot().await);
            }
        }
        Cmd::Lang { code } => {
            controller.set_language(code).await;
            println!("language: {code}");
        }
        Cmd::Theme => {
            controller.toggle_theme().await;
            println!("theme: {:?}", controller.snapshot().await.theme);
        }
        Cmd::Show { labels } => {
            let view = controller.snapshot().await;
            print!("{view}");
            if labels {
                let mut out = String::new();
                view.write_labels(&mut out)?;
                print!("{out}");
            }
        }
    }

    Ok(())
}
