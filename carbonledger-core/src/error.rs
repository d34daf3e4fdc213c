use thiserror::Error;

#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("Unknown calculator field '{0}'")]
    UnknownField(String),

    #[error("Malformed field assignment '{0}', expected NAME=VALUE")]
    MalformedField(String),

    #[error("Input for '{profile_id}' failed validation: {issues}")]
    InvalidInput { profile_id: String, issues: String },

    #[error("I/O error for file '{0}': {1}")]
    FileIO(String, #[source] std::io::Error),

    #[error("Failed to parse YAML from '{0}': {1}")]
    YamlParsing(String, #[source] serde_yaml::Error),

    #[error("An error occurred during logging: {0}")]
    LoggingError(#[from] anyhow::Error),
}
