// crates/cli/src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, ValueHint};

use crate::options::{LineEnding, OutputFormat};

// Options shared by both tools.
#[derive(Args, Debug, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct CommonArgs {
    /// Directory to scan (defaults to the current directory)
    #[arg(value_hint = ValueHint::DirPath, default_value = ".")]
    pub root: PathBuf,

    /// Target extensions, replacing the built-in list (comma separated, e.g. --ext cpp,h)
    #[arg(long, value_delimiter = ',', help_heading = "Filter")]
    pub ext: Vec<String>,

    /// Directory path substrings to skip, replacing the built-in list (comma separated)
    #[arg(long, value_delimiter = ',', help_heading = "Filter")]
    pub exclude: Vec<String>,

    /// Descend into symlinked directories (linked files are always processed)
    #[arg(long, help_heading = "Scan")]
    pub follow: bool,

    /// Report what would change without writing anything
    #[arg(long, help_heading = "Behavior")]
    pub dry_run: bool,

    /// Stop at the first file that cannot be read or written
    #[arg(long, help_heading = "Behavior")]
    pub strict: bool,

    /// Do not wait for Enter before exiting
    #[arg(long, help_heading = "Behavior")]
    pub no_pause: bool,

    /// Status output format
    #[arg(long, value_enum, default_value = "text", help_heading = "Output")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Output")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Output")]
    pub quiet: bool,
}

impl CommonArgs {
    /// Default log filter directive; `RUST_LOG` takes precedence.
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

/// Convert C/C++/Objective-C sources to UTF-8 with a byte-order mark.
#[derive(Parser, Debug)]
#[command(name = "convert_encoding", version = crate::VERSION)]
pub struct EncodingArgs {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Rewrite every line break in C/C++/Objective-C sources as CRLF (UTF-8 with BOM).
#[derive(Parser, Debug)]
#[command(name = "fix_newlines", version = crate::VERSION)]
pub struct NewlineArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Line ending to write
    #[arg(long, value_enum, default_value = "crlf", help_heading = "Output")]
    pub eol: LineEnding,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_are_well_formed() {
        EncodingArgs::command().debug_assert();
        NewlineArgs::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = NewlineArgs::try_parse_from(["fix_newlines"]).unwrap();
        assert_eq!(args.common.root, PathBuf::from("."));
        assert!(args.common.ext.is_empty());
        assert_eq!(args.eol, LineEnding::Crlf);
        assert_eq!(args.common.log_level(), "warn");
    }

    #[test]
    fn test_lists_and_verbosity() {
        let args = EncodingArgs::try_parse_from([
            "convert_encoding",
            "src",
            "--ext",
            "cpp,h",
            "--ext",
            "mm",
            "--exclude",
            "vendor",
            "-vv",
        ])
        .unwrap();
        assert_eq!(args.common.root, PathBuf::from("src"));
        assert_eq!(args.common.ext, vec!["cpp", "h", "mm"]);
        assert_eq!(args.common.exclude, vec!["vendor"]);
        assert_eq!(args.common.log_level(), "debug");
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(EncodingArgs::try_parse_from(["convert_encoding", "-q", "-v"]).is_err());
    }
}
