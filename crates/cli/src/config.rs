// crates/cli/src/config.rs
use crate::args::{CommonArgs, EncodingArgs, NewlineArgs};
use crate::error::{AppError, Result};
use crate::options;
use std::io::IsTerminal;
pub use textnorm_engine::config::{Config, ConfigBuilder, WalkOptions, WalkOptionsBuilder};
use textnorm_engine::normalizer::NewlineNormalizer;
use textnorm_engine::options as engine_options;

/// Everything a tool run needs besides the normalizer itself.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub engine: Config,
    pub format: engine_options::OutputFormat,
    /// Wait for Enter before exiting.
    pub pause: bool,
}

impl TryFrom<&EncodingArgs> for AppConfig {
    type Error = AppError;

    fn try_from(args: &EncodingArgs) -> Result<Self> {
        app_config(&args.common, WalkOptions::encoding_preset())
    }
}

impl TryFrom<&NewlineArgs> for AppConfig {
    type Error = AppError;

    fn try_from(args: &NewlineArgs) -> Result<Self> {
        app_config(&args.common, WalkOptions::newline_preset())
    }
}

impl NewlineArgs {
    #[must_use]
    pub fn normalizer(&self) -> NewlineNormalizer {
        NewlineNormalizer::new(self.eol.into())
    }
}

fn app_config(common: &CommonArgs, preset: WalkOptions) -> Result<AppConfig> {
    let walk = walk_options_from_args(common, preset)?;

    let engine = ConfigBuilder::default()
        .walk(walk)
        .dry_run(common.dry_run)
        .strict(common.strict)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppConfig {
        engine,
        format: common.format.into(),
        pause: !common.no_pause && std::io::stdin().is_terminal(),
    })
}

/// An empty `--ext`/`--exclude` keeps the preset list.
fn walk_options_from_args(common: &CommonArgs, preset: WalkOptions) -> Result<WalkOptions> {
    let extensions = if common.ext.is_empty() {
        preset.extensions
    } else {
        common
            .ext
            .iter()
            .map(|e| engine_options::normalize_extension(e))
            .filter(|e| !e.is_empty())
            .collect()
    };

    let exclude_substrings = if common.exclude.is_empty() {
        preset.exclude_substrings
    } else {
        common.exclude.clone()
    };

    WalkOptionsBuilder::default()
        .root(common.root.clone())
        .extensions(extensions)
        .exclude_substrings(exclude_substrings)
        .follow_links(common.follow)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))
}

// From trait implementations for CLI -> Engine enum conversion

macro_rules! map_enum {
    ($from:ty, $to:ty, $($variant:ident),+ $(,)?) => {
        impl From<$from> for $to {
            fn from(f: $from) -> Self {
                match f {
                    $( <$from>::$variant => <$to>::$variant, )+
                }
            }
        }
    };
}

map_enum!(options::OutputFormat, engine_options::OutputFormat, Text, Jsonl);
map_enum!(options::LineEnding, engine_options::LineEnding, Crlf, Lf);
