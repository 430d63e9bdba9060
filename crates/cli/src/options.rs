use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable status lines
    #[default]
    Text,
    /// One JSON object per file plus a closing total
    Jsonl,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum LineEnding {
    /// Windows style `\r\n`
    #[default]
    Crlf,
    /// Unix style `\n`
    Lf,
}
