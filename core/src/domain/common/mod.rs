use std::{path::PathBuf, time::Duration};

use crate::domain::common::entities::app_errors::CoreError;

pub mod entities;
pub mod services;

#[cfg(test)]
pub mod test_support;

#[derive(Clone, Debug)]
pub struct WoltieConfig {
    pub llm: LLMConfig,
    pub vision: VisionConfig,
    pub demo: DemoConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    /// Missing keys are only reported when a completion is first requested.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct VisionConfig {
    pub credentials_path: Option<PathBuf>,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct DemoConfig {
    pub image_url: Option<String>,
    pub object_storage: ObjectStorageConfig,
}

#[derive(Clone, Debug)]
pub struct ObjectStorageConfig {
    pub endpoint: String,
    pub region: String,
    pub access_key: Option<String>,
    pub secret_key: Option<String>,
    pub bucket: String,
    pub object_key: String,
}

/// Rejects a required text field that is empty once surrounding whitespace is removed.
pub fn ensure_not_blank(value: &str, message: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(message.to_string()));
    }

    Ok(())
}

/// Drops blank optional values so that `Some("  ")` behaves like an absent field.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
