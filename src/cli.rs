use crate::config::ImagesConfig;
use crate::formatter::OutputFormat;
use crate::helm::RenderRequest;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "helm-images")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Utility that helps in fetching images which are part of deployment")]
#[command(long_about = "Lists all images that would be part of a helm deployment, including images referenced by init containers, environment variables, config maps and monitoring operator resources.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetches all images that are part of the specified chart/release
    #[command(after_help = "Examples:
  helm images get prometheus-standalone path/to/chart/prometheus-standalone -f ~/path/to/override-config.yaml
  helm images get prometheus-standalone --from-release --registry quay.io
  helm images get prometheus-standalone --from-release --registry quay.io --unique
  helm images get prometheus-standalone --from-release --registry quay.io --yaml")]
    Get(GetArgs),

    /// Print the version of helm-images
    Version,
}

#[derive(Debug, Clone, clap::Args)]
pub struct GetArgs {
    /// Release name
    #[arg(value_name = "RELEASE")]
    pub release: String,

    /// Chart path or reference; omitted with --from-release
    #[arg(value_name = "CHART", required_unless_present = "from_release")]
    pub chart: Option<String>,

    /// Read images from an installed release instead of rendering a chart
    #[arg(long, conflicts_with = "chart")]
    pub from_release: bool,

    /// Values files to render the chart with
    #[arg(short = 'f', long = "values", value_name = "FILE")]
    pub values: Vec<PathBuf>,

    /// Values to set on the command line (key=value)
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Namespace of the release
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// Only list images from these registries
    #[arg(short, long, value_delimiter = ',')]
    pub registry: Vec<String>,

    /// Only extract images from these kinds
    #[arg(short, long, value_delimiter = ',')]
    pub kind: Vec<String>,

    /// List each image once
    #[arg(short, long)]
    pub unique: bool,

    /// Render output as JSON
    #[arg(long, conflicts_with_all = ["yaml", "table"])]
    pub json: bool,

    /// Render output as YAML
    #[arg(long, conflicts_with = "table")]
    pub yaml: bool,

    /// Render output as a table
    #[arg(long)]
    pub table: bool,
}

impl GetArgs {
    /// Selected output format, if any format flag was given.
    pub fn output_format(&self) -> crate::Result<Option<OutputFormat>> {
        let selected: Vec<OutputFormat> = [
            (self.json, OutputFormat::Json),
            (self.yaml, OutputFormat::Yaml),
            (self.table, OutputFormat::Table),
        ]
        .into_iter()
        .filter_map(|(set, format)| set.then_some(format))
        .collect();

        match selected.as_slice() {
            [] => Ok(None),
            [format] => Ok(Some(*format)),
            _ => Err(crate::ImagesError::MultipleFormats),
        }
    }

    /// Build the helm invocation for these arguments.
    pub fn render_request(&self) -> RenderRequest {
        RenderRequest {
            release: self.release.clone(),
            chart: self.chart.clone(),
            values_files: self.values.clone(),
            set_values: self.set_values.clone(),
            namespace: self.namespace.clone(),
            from_release: self.from_release,
        }
    }

    /// Apply command-line overrides on top of file configuration.
    pub fn merge_into(&self, mut config: ImagesConfig) -> crate::Result<ImagesConfig> {
        if !self.kind.is_empty() {
            config.kinds = self.kind.clone();
        }
        if !self.registry.is_empty() {
            config.registries = self.registry.clone();
        }
        if self.unique {
            config.unique = true;
        }
        if let Some(format) = self.output_format()? {
            config.format = format;
        }
        Ok(config)
    }
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        env_logger::Builder::from_default_env()
            .filter_level(level)
            .init();
    }
}
