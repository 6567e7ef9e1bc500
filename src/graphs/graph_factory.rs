use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use log::info;

use super::{edge::EdgeRecord, Graph};
use crate::{error::Result, utility::read_pipe_records};

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    /// Reads a graph file: a record count followed by `from|to|cost|time`
    /// lines.
    pub fn from_file(path: &Path) -> Result<Graph> {
        let reader = BufReader::new(File::open(path)?);
        let graph = Self::from_reader(reader)?;
        info!(
            "read graph {:?} with {} vertices and {} edges",
            path,
            graph.number_of_vertices(),
            graph.number_of_edges()
        );
        Ok(graph)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<Graph> {
        Ok(Graph::from_records(&Self::read_edge_records(reader)?))
    }

    /// Parses every record before anything is added to a graph, so a malformed
    /// line never leaves a half built graph behind.
    pub fn read_edge_records<R: BufRead>(reader: R) -> Result<Vec<EdgeRecord>> {
        read_pipe_records(reader)?
            .into_iter()
            .map(|record| {
                EdgeRecord::from_fields(&record.fields).map_err(|error| error.at_line(record.line))
            })
            .collect()
    }

    /// Writes `records` in the layout [`GraphFactory::from_reader`] reads.
    pub fn write_edge_records<W: Write>(writer: &mut W, records: &[EdgeRecord]) -> Result<()> {
        writeln!(writer, "{}", records.len())?;
        for record in records {
            writeln!(
                writer,
                "{}|{}|{}|{}",
                record.from, record.to, record.cost, record.time
            )?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::error::GraphError;

    #[test]
    fn reads_graph_file() {
        let input = "3\nA|B|1|2\nB|C|3|4\nA|C|10|1\n";
        let graph = GraphFactory::from_reader(Cursor::new(input)).unwrap();

        assert_eq!(graph.number_of_vertices(), 3);
        assert_eq!(graph.number_of_edges(), 3);

        let a = graph.vertex_id("A").unwrap();
        let c = graph.vertex_id("C").unwrap();
        let edge = graph.get_edge(a, c).unwrap();
        assert_eq!((edge.cost, edge.time), (10, 1));
    }

    #[test]
    fn written_records_read_back() {
        let records = vec![
            EdgeRecord::new("A", "B", 1, 2),
            EdgeRecord::new("B", "A", 3, 4),
        ];
        let mut buffer = Vec::new();
        GraphFactory::write_edge_records(&mut buffer, &records).unwrap();

        let read = GraphFactory::read_edge_records(Cursor::new(buffer)).unwrap();
        assert_eq!(read, records);
    }

    #[test]
    fn oversized_count_builds_present_records() {
        let input = format!("{}\nA|B|1|1\n", usize::MAX);
        let graph = GraphFactory::from_reader(Cursor::new(input)).unwrap();

        assert_eq!(graph.number_of_vertices(), 2);
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn padded_names_are_distinct_vertices() {
        let input = "2\nA|Boise|1|1\nA| Boise |2|2\n";
        let graph = GraphFactory::from_reader(Cursor::new(input)).unwrap();

        assert_eq!(graph.number_of_vertices(), 3);
        assert!(graph.vertex_id(" Boise ").is_some());
    }

    #[test]
    fn reports_line_of_malformed_record() {
        let input = "3\nA|B|1|2\nB|C|3\nA|C|10|1\n";
        let error = GraphFactory::from_reader(Cursor::new(input)).unwrap_err();
        assert!(matches!(error, GraphError::MalformedInput { line: 3, .. }));
    }

    #[test]
    fn reports_non_numeric_time() {
        let input = "1\nA|B|1|fast\n";
        let error = GraphFactory::from_reader(Cursor::new(input)).unwrap_err();
        assert!(matches!(error, GraphError::MalformedInput { line: 2, .. }));
    }
}
