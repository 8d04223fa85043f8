use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse profile form config: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    #[error("Invalid configuration: {field} = {value}")]
    Invalid { field: String, value: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
