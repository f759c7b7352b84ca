use std::{env, io};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::{
    MixerError, Result,
    config::{ConfigPaths, GeneralConfig, LogFormat},
};

/// Environment variable overriding the configured log format
pub const LOG_FORMAT_ENV: &str = "APPMIXER_LOG_FORMAT";

const DAYS_TO_KEEP: usize = 7;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Initialize tracing for the application
///
/// Diagnostic events go to stderr so stdout only carries listing output.
/// Uses `RUST_LOG` if set, otherwise the configured level. The format
/// comes from `APPMIXER_LOG_FORMAT` if set, otherwise from the config.
/// With `log_to_file` enabled, logs are also written to a daily rotated
/// file; the returned guard must be held until exit to flush it.
///
/// # Errors
/// Returns error if the log directory cannot be prepared or a subscriber
/// is already installed
pub fn init(general: &GeneralConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(general.log_level.to_string()));

    let format = env::var(LOG_FORMAT_ENV)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(general.log_format);

    let mut layers: Vec<BoxedLayer> = vec![console_layer(format)];

    let guard = if general.log_to_file {
        let log_dir = ConfigPaths::log_dir().map_err(|e| MixerError::Logging(e.to_string()))?;
        let file_appender = tracing_appender::rolling::Builder::new()
            .rotation(tracing_appender::rolling::Rotation::DAILY)
            .max_log_files(DAYS_TO_KEEP)
            .filename_prefix("appmixer")
            .filename_suffix("log")
            .build(&log_dir)
            .map_err(|e| MixerError::Logging(e.to_string()))?;
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        layers.push(
            fmt::layer()
                .compact()
                .with_target(true)
                .with_level(true)
                .with_writer(non_blocking)
                .with_ansi(false)
                .boxed(),
        );
        Some(guard)
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(layers)
        .with(env_filter)
        .try_init()
        .map_err(|e| MixerError::Logging(e.to_string()))?;

    Ok(guard)
}

fn console_layer(format: LogFormat) -> BoxedLayer {
    match format {
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_level(true)
            .with_writer(io::stderr)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .with_level(true)
            .without_time()
            .with_writer(io::stderr)
            .boxed(),
    }
}
