//! CLI argument definitions using clap

use std::collections::BTreeSet;
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::cli::{CliError, CliResult};
use crate::domain::{FeatureKind, ImageSource};

/// Usage line printed when no image source is given.
pub const USAGE: &str = "pigeon [options] <source>";

/// Annotate images with the Google Cloud Vision API and print the result as JSON
#[derive(Parser, Debug)]
#[command(name = "pigeon")]
#[command(author, version, about, long_about = None)]
#[command(override_usage = "pigeon [OPTIONS] <SOURCE>...")]
pub struct Cli {
    /// Run face detection
    #[arg(long, help_heading = "Features")]
    pub face: bool,

    /// Run landmark detection
    #[arg(long, help_heading = "Features")]
    pub landmark: bool,

    /// Run logo detection
    #[arg(long, help_heading = "Features")]
    pub logo: bool,

    /// Run label detection
    #[arg(long, help_heading = "Features")]
    pub label: bool,

    /// Run text detection (OCR)
    #[arg(long, help_heading = "Features")]
    pub text: bool,

    /// Run safe search detection
    #[arg(long, help_heading = "Features")]
    pub safe_search: bool,

    /// Compute image properties (dominant colors)
    #[arg(long, help_heading = "Features")]
    pub image_properties: bool,

    /// Maximum number of results per feature
    #[arg(long, value_name = "N")]
    pub max_results: Option<u32>,

    /// Config file (default: $XDG_CONFIG_HOME/pigeon/pigeon.toml)
    #[arg(short, long, value_name = "FILE", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Debug output on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,

    /// Print a commented config file template and exit
    #[arg(long)]
    pub config_template: bool,

    /// Image files, gs:// or http(s):// URIs
    #[arg(value_name = "SOURCE", value_hint = ValueHint::AnyPath)]
    pub sources: Vec<String>,
}

/// Everything one run needs, parsed once from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Switched-on features; empty means "use the configured default"
    pub features: BTreeSet<FeatureKind>,
    pub sources: Vec<ImageSource>,
    pub max_results: Option<u32>,
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Feature kinds whose switch is set.
    pub fn selected_features(&self) -> BTreeSet<FeatureKind> {
        [
            (self.face, FeatureKind::Face),
            (self.landmark, FeatureKind::Landmark),
            (self.logo, FeatureKind::Logo),
            (self.label, FeatureKind::Label),
            (self.text, FeatureKind::Text),
            (self.safe_search, FeatureKind::SafeSearch),
            (self.image_properties, FeatureKind::ImageProperties),
        ]
        .into_iter()
        .filter_map(|(on, kind)| on.then_some(kind))
        .collect()
    }

    /// Validate the arguments into an [`Invocation`].
    ///
    /// Fails with a usage error when no source is given.
    pub fn invocation(&self) -> CliResult<Invocation> {
        if self.sources.is_empty() {
            return Err(CliError::Usage(USAGE.to_string()));
        }

        Ok(Invocation {
            features: self.selected_features(),
            sources: self.sources.iter().cloned().map(ImageSource::from).collect(),
            max_results: self.max_results,
            config: self.config.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flag_names_match_feature_names() {
        let cmd = Cli::command();
        for kind in FeatureKind::ALL {
            assert!(
                cmd.get_arguments()
                    .any(|a| a.get_long() == Some(kind.flag_name())),
                "missing switch --{}",
                kind.flag_name()
            );
        }
    }
}
