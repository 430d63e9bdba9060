use crate::options::normalize_extension;
use derive_builder::Builder;
use std::path::PathBuf;

/// Source extensions rewritten by both tools.
pub const DEFAULT_EXTENSIONS: &[&str] = &["cpp", "h", "c", "hpp", "mm"];

/// Directory substrings skipped by the encoding normalizer.
pub const ENCODING_EXCLUDES: &[&str] = &[".git", ".vs", "build", "cocos2d"];

/// Directory substrings skipped by the newline normalizer.
pub const NEWLINE_EXCLUDES: &[&str] = &[".git", "build", "cocos2d"];

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct WalkOptions {
    #[builder(default = "PathBuf::from(\".\")")]
    pub root: PathBuf,
    /// Any directory whose root-relative path contains one of these is pruned.
    #[builder(default)]
    pub exclude_substrings: Vec<String>,
    /// Lowercase, without the leading dot.
    #[builder(default)]
    pub extensions: Vec<String>,
    #[builder(default)]
    pub follow_links: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            exclude_substrings: vec![],
            extensions: vec![],
            follow_links: false,
        }
    }
}

impl WalkOptions {
    /// Extensions and exclusions used by `convert_encoding`.
    #[must_use]
    pub fn encoding_preset() -> Self {
        Self {
            extensions: to_owned_list(DEFAULT_EXTENSIONS),
            exclude_substrings: to_owned_list(ENCODING_EXCLUDES),
            ..Self::default()
        }
    }

    /// Extensions and exclusions used by `fix_newlines`.
    #[must_use]
    pub fn newline_preset() -> Self {
        Self {
            extensions: to_owned_list(DEFAULT_EXTENSIONS),
            exclude_substrings: to_owned_list(NEWLINE_EXCLUDES),
            ..Self::default()
        }
    }

    /// Whether `ext` (any case, with or without a dot) is a target extension.
    #[must_use]
    pub fn matches_extension(&self, ext: &str) -> bool {
        let ext = normalize_extension(ext);
        self.extensions.iter().any(|e| normalize_extension(e) == ext)
    }

    /// Whether a root-relative directory path falls under an excluded subtree.
    #[must_use]
    pub fn is_excluded(&self, relative_dir: &str) -> bool {
        !relative_dir.is_empty()
            && self
                .exclude_substrings
                .iter()
                .any(|s| !s.is_empty() && relative_dir.contains(s.as_str()))
    }
}

fn to_owned_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub walk: WalkOptions,
    /// Report what would change without touching any file.
    #[builder(default)]
    pub dry_run: bool,
    /// Abort on the first per-file error instead of collecting it.
    #[builder(default)]
    pub strict: bool,
}
