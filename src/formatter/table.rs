//! Table formatter.

use crate::images::ImageReport;

const HEADERS: [&str; 3] = ["KIND", "NAME", "IMAGE"];

/// Format a report as an aligned table with one row per image.
pub fn format(report: &ImageReport) -> String {
    let rows: Vec<[&str; 3]> = match report {
        ImageReport::Records(records) => records
            .iter()
            .flat_map(|r| {
                r.images
                    .iter()
                    .map(move |image| [r.kind.as_str(), r.name.as_str(), image.as_str()])
            })
            .collect(),
        ImageReport::Unique(images) => images.iter().map(|i| ["", "", i.as_str()]).collect(),
    };

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut output = String::new();
    push_row(&mut output, &HEADERS, &widths);
    for row in &rows {
        push_row(&mut output, row, &widths);
    }
    output
}

fn push_row(output: &mut String, cells: &[&str; 3], widths: &[usize; 3]) {
    let line = format!(
        "{:<w0$} | {:<w1$} | {}",
        cells[0],
        cells[1],
        cells[2],
        w0 = widths[0],
        w1 = widths[1],
    );
    output.push_str(line.trim_end());
    output.push('\n');
}
