use crate::cli::GetArgs;
use crate::config::{self, ImagesConfig};
use crate::formatter::format_report;
use crate::helm;
use crate::images::collect_images;
use std::io::Write;
use std::path::Path;

/// Render the chart or release, collect its images and write them to stdout.
pub fn handle_get(args: &GetArgs, config_path: Option<&Path>) -> crate::Result<()> {
    let config = args.merge_into(config::load_config(config_path)?)?;
    let manifests = helm::render(&args.render_request())?;
    let output = render_images(&manifests, &config)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

/// Collect images from rendered manifests and format them per `config`.
pub fn render_images(manifests: &str, config: &ImagesConfig) -> crate::Result<String> {
    let report = collect_images(manifests, config)?;
    format_report(&report, config.format)
}
