use crate::{
    backend::{AutomaticBackend, TerminalBackend},
    config::Settings,
    constants::verbosity,
    context::{facades, Facades},
    error::Result,
    interface::NotifyOptions,
    locale::Locale,
};
use clap::{Parser, ValueEnum};
use futures::executor::block_on;
use log::LevelFilter;
use std::{path::PathBuf, sync::Arc};

/// Label language of the demo dialogs.
#[derive(Debug, Clone, ValueEnum, Copy, PartialEq)]
#[value(rename_all = "lowercase")]
pub enum LocaleArg {
    En,
    Zh,
}

impl From<LocaleArg> for Locale {
    fn from(value: LocaleArg) -> Self {
        match value {
            LocaleArg::En => Locale::En,
            LocaleArg::Zh => Locale::Zh,
        }
    }
}

/// CLI arguments for the facade demo.
#[derive(Parser, Debug)]
#[command(author, version, about = "Walks through every UI facade", long_about = None)]
pub struct Args {
    /// Label language, overriding the settings file.
    #[arg(short, long, value_enum)]
    pub locale: Option<LocaleArg>,

    /// Settings file (.json, .yaml or .yml).
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Answer every dialog automatically instead of asking on the terminal.
    #[arg(long = "non-interactive")]
    pub non_interactive: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

/// Resolves the settings from the settings file and the locale flag.
pub fn load_settings(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(locale) = args.locale {
        settings.locale = locale.into();
    }
    Ok(settings)
}

/// Wires a backend into the global facades and runs the walkthrough.
pub fn run(args: Args) -> Result<()> {
    let settings = load_settings(&args)?;
    let facades = facades();
    if args.non_interactive {
        facades.install(Arc::new(AutomaticBackend::new()));
    } else {
        facades.install(Arc::new(TerminalBackend::new()));
    }
    facades.apply_settings(&settings);
    facades.ensure_ready()?;
    block_on(walkthrough(facades))
}

/// Presents one of each facade. Declined dialogs are reported, not fatal.
pub async fn walkthrough(facades: &Facades) -> Result<()> {
    facades.loading.show_fetching()?;
    facades.notify.info("Facades are ready", NotifyOptions::default())?;

    facades
        .alert
        .info("Welcome", "Every dialog below goes through the installed backend.")?
        .await?;

    match facades.confirm.info("Continue", "Ask for your name?", None).await {
        Ok(()) => match facades.prompt.info("Name", "What should we call you?", None).await {
            Ok(name) => {
                facades.notify.success(&format!("Hello, {name}!"), NotifyOptions::default())?
            }
            Err(err) if err.is_declined() => {
                facades.notify.warn("No name given", NotifyOptions::default())?
            }
            Err(err) => return Err(err),
        },
        Err(err) if err.is_declined() => {
            facades.notify.warn("Skipped the prompt", NotifyOptions::default())?
        }
        Err(err) => return Err(err),
    }

    facades.notify.debug("Walkthrough finished", NotifyOptions::default())?;
    facades.alert.debug("Walkthrough finished")?.await
}
