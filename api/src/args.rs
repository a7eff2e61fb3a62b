use std::{path::PathBuf, time::Duration};

use clap::{ArgAction, Parser};
use ecoreveal_core::domain::common::{
    ClassifierConfig, ClassifierKind, EcoRevealConfig, HistoryConfig, LLMConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "ecoreveal", version, about = "EcoReveal product assessment API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub inference: InferenceArgs,

    #[command(flatten)]
    pub history: HistoryArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        num_args = 0..
    )]
    pub allowed_origins: Vec<String>,

    /// Expose `/metrics` and record request metrics.
    #[arg(
        long = "metrics-enabled",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, clap::Args)]
pub struct InferenceArgs {
    /// `local` runs the keyword heuristics, `remote` asks Gemini first.
    #[arg(long = "classifier-backend", env = "CLASSIFIER_BACKEND", default_value = "local")]
    pub backend: ClassifierKind,

    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(long = "inference-timeout-ms", env = "INFERENCE_TIMEOUT_MS", default_value_t = 5000)]
    pub timeout_ms: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct HistoryArgs {
    #[arg(long = "history-path", env = "HISTORY_PATH", default_value = "ecoreveal-history.json")]
    pub path: PathBuf,

    #[arg(
        long = "history-capacity",
        env = "HISTORY_CAPACITY",
        default_value_t = 100,
        value_parser = clap::value_parser!(u16).range(1..)
    )]
    pub capacity: u16,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    /// `tracing_subscriber::EnvFilter` directive.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false, action = ArgAction::Set)]
    pub json: bool,
}

impl From<Args> for EcoRevealConfig {
    fn from(args: Args) -> Self {
        EcoRevealConfig {
            classifier: ClassifierConfig {
                kind: args.inference.backend,
                llm: LLMConfig {
                    gemini_api_key: args.inference.gemini_api_key,
                    gemini_model: args.inference.gemini_model,
                },
                timeout: Duration::from_millis(args.inference.timeout_ms),
            },
            history: HistoryConfig {
                path: args.history.path,
                capacity: usize::from(args.history.capacity),
            },
        }
    }
}
