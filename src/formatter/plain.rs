//! Plain text formatter.

use crate::images::ImageReport;

/// Format a report as one image per line.
pub fn format(report: &ImageReport) -> String {
    let mut output = String::new();
    for image in report.images() {
        output.push_str(image);
        output.push('\n');
    }
    output
}
