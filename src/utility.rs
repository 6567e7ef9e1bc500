use std::io::BufRead;

use indicatif::{ProgressBar, ProgressStyle};
use log::warn;

use crate::error::{GraphError, Result};

pub fn get_progressbar(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    bar.set_style(
        ProgressStyle::with_template(" {msg} {wide_bar} {pos}/{len} estimated remaining: {eta_precise}")
            .unwrap(),
    );
    bar
}

/// A `|` separated line together with its 1-based line number.
#[derive(Debug, Clone)]
pub struct PipeRecord {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Reads the layout shared by graph and search files: a line holding the
/// number of records, followed by that many `|` separated records. Blank
/// lines before the count are skipped. A file holding fewer records than
/// announced yields the records present. Fields are not trimmed, `\r\n`
/// line endings are accepted.
pub fn read_pipe_records<R: BufRead>(reader: R) -> Result<Vec<PipeRecord>> {
    let mut lines = reader.lines().enumerate();

    let mut header = None;
    for (index, line) in lines.by_ref() {
        let line = line?;
        if !line.trim().is_empty() {
            header = Some((index + 1, line));
            break;
        }
    }
    let Some((header_line, header)) = header else {
        return Err(GraphError::malformed(1, "missing record count"));
    };

    let count: usize = header.trim().parse().map_err(|_| {
        GraphError::malformed(header_line, format!("unable to parse record count '{}'", header.trim()))
    })?;

    // The count is untrusted, the records present bound the allocation.
    let mut records = Vec::new();
    for (index, line) in lines.take(count) {
        let line = line?;
        records.push(PipeRecord {
            line: index + 1,
            fields: line.split('|').map(str::to_string).collect(),
        });
    }

    if records.len() < count {
        warn!(
            "record count on line {} announces {} records, found {}",
            header_line,
            count,
            records.len()
        );
    }

    Ok(records)
}
