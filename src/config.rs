use std::path::PathBuf;

use clap::Parser;
use image::imageops::FilterType;

/// Resampling policy applied when a secondary stack's native tile resolution
/// differs from the reference placement size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ResampleFilter {
    #[value(name = "nearest")]
    Nearest,
    #[value(name = "bilinear")]
    Bilinear,
}

impl std::fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResampleFilter::Nearest => write!(f, "nearest"),
            ResampleFilter::Bilinear => write!(f, "bilinear"),
        }
    }
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Bilinear => FilterType::Triangle,
        }
    }
}

/// Fully resolved run configuration (constructed from CLI args).
#[derive(Debug, Clone)]
pub struct AtlasConfig {
    /// One representative tile file per stack; the first is the reference.
    pub inputs: Vec<PathBuf>,
    pub output: PathBuf,
    pub filter: ResampleFilter,
    /// Name of the layout file written next to the atlases.
    pub layout_file: String,
    pub verbose: bool,
    pub threads: Option<usize>,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output: PathBuf::new(),
            filter: ResampleFilter::Bilinear,
            layout_file: "layout.json".into(),
            verbose: false,
            threads: None,
        }
    }
}

/// CLI argument definition (clap derive).
#[derive(Parser, Debug)]
#[command(
    name = "udim-atlas",
    about = "Pack UDIM texture tile stacks into single atlases with a shared layout",
    version
)]
pub struct CliArgs {
    /// Representative tile file per stack, e.g. diffuse.1001.png
    /// (repeatable; the first input is the reference stack)
    #[arg(short = 'i', long = "input", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Output directory
    #[arg(short = 'o', long)]
    pub output: PathBuf,

    /// Resample filter for stacks whose tile resolution differs from the
    /// reference layout
    #[arg(long, value_enum, default_value = "bilinear")]
    pub filter: ResampleFilter,

    /// Layout JSON filename written into the output directory
    #[arg(long, default_value = "layout.json")]
    pub layout_file: String,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Worker thread count (default: all cores)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,
}

impl From<CliArgs> for AtlasConfig {
    fn from(args: CliArgs) -> Self {
        AtlasConfig {
            inputs: args.inputs,
            output: args.output,
            filter: args.filter,
            layout_file: args.layout_file,
            verbose: args.verbose,
            threads: args.threads,
        }
    }
}
