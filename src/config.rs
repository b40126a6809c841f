use serde::Deserialize;

/// Top-level daystream configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct DaystreamConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Line format: "rfc3339" (full timestamp) or "date" (YYYY-MM-DD).
    #[serde(default = "default_format")]
    pub format: String,

    /// Default cap on the number of printed instants. Overridden by
    /// the --take flag.
    #[serde(default)]
    pub take: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            take: None,
        }
    }
}

fn default_format() -> String {
    "rfc3339".to_string()
}
