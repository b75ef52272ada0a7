use dialwork_engine::paint::ColorParseError;
use thiserror::Error;

/// Rejected clock configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("attribute `{attribute}`: invalid color")]
    Color {
        attribute: String,
        #[source]
        source: ColorParseError,
    },

    #[error("attribute `{attribute}`: `{value}` is not a positive fraction or length")]
    Length { attribute: String, value: String },

    #[error("attribute `{attribute}`: `{value}` is not a non-negative number")]
    Number { attribute: String, value: String },

    #[error("attribute `{attribute}`: `{value}` is not one of both, immediate, periodic")]
    RedrawMode { attribute: String, value: String },

    #[error("attribute `{attribute}`: {kind} values are not supported")]
    Unsupported { attribute: String, kind: &'static str },

    #[error("malformed theme file")]
    Toml(#[from] toml::de::Error),
}
