use std::{path::PathBuf, time::Duration};

use clap::{Args as ClapArgs, Parser, ValueEnum};
use herdcheck_core::domain::common::{HerdcheckConfig, LLMConfig, ScratchConfig};

#[derive(Debug, Clone, Parser)]
#[command(name = "herdcheck", version, about = "Farm animal health analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub predictor: PredictorArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "SERVER_PORT", default_value_t = 5000)]
    pub port: u16,

    /// Prefix every route is mounted under, e.g. `/api`.
    #[arg(long, env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated list of origins. Any origin is accepted when empty.
    #[arg(long, env = "ALLOWED_ORIGINS", value_delimiter = ',')]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", default_value = "", hide_env_values = true)]
    pub gemini_api_key: String,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-2.0-flash")]
    pub gemini_model: String,

    #[arg(
        long,
        env = "GEMINI_BASE_URL",
        default_value = "https://generativelanguage.googleapis.com"
    )]
    pub gemini_base_url: String,

    #[arg(long, env = "LLM_REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PredictorMode {
    /// Image analysis through the inference provider.
    Live,
    /// Weighted random predictions, no provider calls.
    Mock,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct PredictorArgs {
    #[arg(long, env = "PREDICTOR_MODE", value_enum, default_value_t = PredictorMode::Live)]
    pub mode: PredictorMode,

    #[arg(long, env = "UPLOAD_DIR", default_value = "uploads")]
    pub upload_dir: PathBuf,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for HerdcheckConfig {
    fn from(args: Args) -> Self {
        HerdcheckConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                request_timeout: Duration::from_secs(args.llm.request_timeout_secs),
            },
            scratch: ScratchConfig {
                upload_dir: args.predictor.upload_dir,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["herdcheck"]);
        assert_eq!(args.server.port, 5000);
        assert_eq!(args.server.host, "0.0.0.0");
        assert_eq!(args.predictor.mode, PredictorMode::Live);

        let config = HerdcheckConfig::from(args);
        assert_eq!(config.llm.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.llm.request_timeout, Duration::from_secs(10));
        assert_eq!(config.scratch.upload_dir, PathBuf::from("uploads"));
    }

    #[test]
    fn test_mock_mode_flag() {
        let args = Args::parse_from(["herdcheck", "--mode", "mock", "--port", "8080"]);
        assert_eq!(args.predictor.mode, PredictorMode::Mock);
        assert_eq!(args.server.port, 8080);
    }
}
