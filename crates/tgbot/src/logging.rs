//! `tracing` subscriber setup driven by the `[log]` config section
use crate::config::{CONFIG, LogConfig, LogFormat};
use crate::error::{BotError, Result};
use tracing_subscriber::{
    EnvFilter, Layer, Registry, filter::Directive, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Target used for the crate's own events
pub const SERVICE_NAME: &str = "tgbot";

fn parse_directive(directive: &str) -> Result<Directive> {
    directive
        .parse()
        .map_err(|e| BotError::Logging(format!("Invalid directive `{}`: {}", directive, e)))
}
/// Create a filter for the subscriber
pub fn fmt_filter(cfg: &LogConfig) -> Result<EnvFilter> {
    let mut filter = EnvFilter::try_new(cfg.filter_default.as_ref())
        .map_err(|e| BotError::Logging(e.to_string()))?
        .add_directive(parse_directive(&format!(
            "{}={}",
            SERVICE_NAME, cfg.self_directive
        ))?);
    for directive in &cfg.directives {
        filter = filter.add_directive(parse_directive(directive)?);
    }

    Ok(filter)
}

fn fmt_layer(cfg: &LogConfig) -> Box<dyn Layer<Registry> + Send + Sync> {
    match cfg.format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .boxed(),
        LogFormat::Full => tracing_subscriber::fmt::layer()
            .pretty()
            .with_ansi(cfg.ansi)
            .with_writer(std::io::stderr)
            .with_thread_names(true)
            .with_line_number(true)
            .with_thread_ids(true)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .with_ansi(cfg.ansi)
            .with_writer(std::io::stderr)
            .boxed(),
    }
}

/// Install the global subscriber described by `cfg`
pub fn init_with(cfg: &LogConfig) -> Result<()> {
    let filter = fmt_filter(cfg)?;
    tracing_subscriber::registry()
        .with(fmt_layer(cfg).with_filter(filter))
        .try_init()
        .map_err(|e| BotError::Logging(e.to_string()))
}

/// Install the global subscriber from [`CONFIG`]
pub fn init() -> Result<()> {
    init_with(&CONFIG.log)
}
