use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use crate::{
    error::{GraphError, Result},
    graphs::Metric,
    utility::read_pipe_records,
};

/// Represents a request for the three best paths between two named vertices,
/// ranked by `metric`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    pub source: String,
    pub target: String,
    pub metric: Metric,
}

impl ShortestPathRequest {
    pub fn new(source: &str, target: &str, metric: Metric) -> ShortestPathRequest {
        ShortestPathRequest {
            source: source.to_string(),
            target: target.to_string(),
            metric,
        }
    }

    /// Builds a request from the fields of a `from|to|metric` line.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Result<ShortestPathRequest> {
        if fields.len() != 3 {
            return Err(GraphError::malformed(
                0,
                format!("expected 3 fields, found {}", fields.len()),
            ));
        }

        Ok(ShortestPathRequest {
            source: fields[0].as_ref().to_string(),
            target: fields[1].as_ref().to_string(),
            metric: fields[2].as_ref().parse()?,
        })
    }
}

pub fn read_requests_from_file(path: &Path) -> Result<Vec<ShortestPathRequest>> {
    let reader = BufReader::new(File::open(path)?);
    read_requests(reader)
}

/// Reads a search file: a request count followed by `from|to|metric` lines.
pub fn read_requests<R: BufRead>(reader: R) -> Result<Vec<ShortestPathRequest>> {
    read_pipe_records(reader)?
        .into_iter()
        .map(|record| {
            ShortestPathRequest::from_fields(&record.fields)
                .map_err(|error| error.at_line(record.line))
        })
        .collect()
}

/// Writes `requests` as a search file, `C` and `T` selecting the metric.
pub fn write_requests<W: Write>(writer: &mut W, requests: &[ShortestPathRequest]) -> Result<()> {
    writeln!(writer, "{}", requests.len())?;
    for request in requests {
        let selector = match request.metric {
            Metric::Cost => "C",
            Metric::Time => "T",
        };
        writeln!(writer, "{}|{}|{}", request.source, request.target, selector)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn reads_search_file() {
        let requests = read_requests(Cursor::new("2\nA|C|C\nC|A|T\n")).unwrap();
        assert_eq!(
            requests,
            vec![
                ShortestPathRequest::new("A", "C", Metric::Cost),
                ShortestPathRequest::new("C", "A", Metric::Time),
            ]
        );
    }

    #[test]
    fn written_requests_read_back() {
        let requests = vec![
            ShortestPathRequest::new("A", "B", Metric::Time),
            ShortestPathRequest::new("B", "B", Metric::Cost),
        ];
        let mut buffer = Vec::new();
        write_requests(&mut buffer, &requests).unwrap();

        assert_eq!(read_requests(Cursor::new(buffer)).unwrap(), requests);
    }

    #[test]
    fn names_are_taken_verbatim() {
        let requests = read_requests(Cursor::new("1\r\nA |C|t\r\n")).unwrap();
        assert_eq!(requests, vec![ShortestPathRequest::new("A ", "C", Metric::Time)]);
    }

    #[test]
    fn rejects_unknown_metric() {
        let error = read_requests(Cursor::new("1\nA|C|X\n")).unwrap_err();
        assert!(matches!(error, GraphError::MalformedInput { line: 2, .. }));
    }

    #[test]
    fn rejects_missing_metric() {
        let error = read_requests(Cursor::new("1\nA|C\n")).unwrap_err();
        assert!(matches!(error, GraphError::MalformedInput { line: 2, .. }));
    }
}
