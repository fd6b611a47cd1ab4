use std::{path::PathBuf, time::Duration};

use clap::{Args as ClapArgs, Parser};
use woltie_core::domain::common::{
    DemoConfig, LLMConfig, ObjectStorageConfig, VisionConfig, WoltieConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "woltie-api", version, about = "Dish recognition and analysis API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub vision: VisionArgs,

    #[command(flatten)]
    pub demo: DemoArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8000)]
    pub port: u16,

    /// Comma separated; `*` allows any origin.
    #[arg(
        long,
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long, env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Expose Prometheus metrics on `/metrics`.
    #[arg(long, env = "METRICS")]
    pub metrics: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LlmArgs {
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_model: String,

    #[arg(long, env = "COMPLETION_TIMEOUT_SECS", default_value_t = 60)]
    pub completion_timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct VisionArgs {
    /// Service-account key file for the image annotation provider.
    #[arg(long, env = "GOOGLE_APPLICATION_CREDENTIALS")]
    pub credentials_path: Option<PathBuf>,

    #[arg(long, env = "VISION_TIMEOUT_SECS", default_value_t = 30)]
    pub vision_timeout_secs: u64,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DemoArgs {
    #[arg(long, env = "DEMO_IMAGE_URL")]
    pub demo_image_url: Option<String>,

    #[arg(
        long,
        env = "DEMO_STORAGE_ENDPOINT",
        default_value = "https://storage.googleapis.com"
    )]
    pub demo_storage_endpoint: String,

    #[arg(long, env = "DEMO_STORAGE_REGION", default_value = "auto")]
    pub demo_storage_region: String,

    #[arg(long, env = "DEMO_STORAGE_BUCKET", default_value = "woltie-demo")]
    pub demo_storage_bucket: String,

    #[arg(long, env = "DEMO_STORAGE_OBJECT", default_value = "dishes/demo-dish.jpg")]
    pub demo_storage_object: String,

    #[arg(long, env = "DEMO_STORAGE_ACCESS_KEY", hide_env_values = true)]
    pub demo_storage_access_key: Option<String>,

    #[arg(long, env = "DEMO_STORAGE_SECRET_KEY", hide_env_values = true)]
    pub demo_storage_secret_key: Option<String>,
}

impl From<Args> for WoltieConfig {
    fn from(args: Args) -> Self {
        WoltieConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                timeout: Duration::from_secs(args.llm.completion_timeout_secs),
            },
            vision: VisionConfig {
                credentials_path: args.vision.credentials_path,
                timeout: Duration::from_secs(args.vision.vision_timeout_secs),
            },
            demo: DemoConfig {
                image_url: args.demo.demo_image_url,
                object_storage: ObjectStorageConfig {
                    endpoint: args.demo.demo_storage_endpoint,
                    region: args.demo.demo_storage_region,
                    access_key: args.demo.demo_storage_access_key,
                    secret_key: args.demo.demo_storage_secret_key,
                    bucket: args.demo.demo_storage_bucket,
                    object_key: args.demo.demo_storage_object,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_into_core_config() {
        let args = Args::try_parse_from([
            "woltie-api",
            "--gemini-api-key",
            "key",
            "--gemini-model",
            "gemini-2.0-flash",
            "--completion-timeout-secs",
            "5",
            "--allowed-origins",
            "http://a.example,http://b.example",
            "--demo-storage-bucket",
            "dishes",
        ])
        .unwrap();

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.example", "http://b.example"]
        );

        let config = WoltieConfig::from(args);

        assert_eq!(config.llm.gemini_api_key.as_deref(), Some("key"));
        assert_eq!(config.llm.gemini_model, "gemini-2.0-flash");
        assert_eq!(config.llm.timeout, Duration::from_secs(5));
        assert_eq!(config.demo.object_storage.bucket, "dishes");
    }
}
