use std::io::Write;

use serde::Serialize;

use crate::{
    error::Result,
    search::{path::PathResult, query::ShortestPathRequest},
};

/// Writes the block of one request: a `FLIGHT` header with upper-cased
/// endpoints, one line per rank and a blank line.
pub fn write_request_block<W: Write>(
    writer: &mut W,
    number: usize,
    request: &ShortestPathRequest,
    results: &[PathResult; 3],
) -> Result<()> {
    writeln!(
        writer,
        "FLIGHT {}: from {} to {} (by {})",
        number,
        request.source.to_uppercase(),
        request.target.to_uppercase(),
        request.metric
    )?;
    for (rank, result) in results.iter().enumerate() {
        writeln!(writer, "Path {}: {}", rank + 1, result)?;
    }
    writeln!(writer)?;
    Ok(())
}

pub fn write_report<W: Write>(
    writer: &mut W,
    requests: &[ShortestPathRequest],
    results: &[[PathResult; 3]],
) -> Result<()> {
    for (index, (request, results)) in requests.iter().zip(results).enumerate() {
        write_request_block(writer, index + 1, request, results)?;
    }
    writer.flush()?;
    Ok(())
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    query: &'a ShortestPathRequest,
    paths: &'a [PathResult; 3],
}

pub fn write_json_report<W: Write>(
    writer: W,
    requests: &[ShortestPathRequest],
    results: &[[PathResult; 3]],
) -> Result<()> {
    let entries: Vec<_> = requests
        .iter()
        .zip(results)
        .map(|(query, paths)| JsonEntry { query, paths })
        .collect();
    serde_json::to_writer_pretty(writer, &entries)?;
    Ok(())
}
