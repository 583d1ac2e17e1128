//! Delimited-text edge list ingestion.
//!
//! The first row names the columns: the first two are the endpoints, every
//! further column becomes an edge attribute. Each following row adds one edge
//! with its attributes stored verbatim as strings. Trailing whitespace is
//! stripped from every line, so a whitespace-only line ends the input like an
//! empty one and a trailing empty column is dropped.
//!
//! ```text
//! source  target  weight
//! A       B       1
//! B       C       2
//! ```

use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use crate::graph::{Graph, PropertyMap, PropertyValue};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Options for [`read_delim`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimOptions {
    /// Column separator
    pub separator: char,

    /// Build a directed graph
    pub directed: bool,

    /// Column that, when present in the header, makes the graph weighted
    pub weight_column: Option<String>,
}

impl Default for DelimOptions {
    fn default() -> Self {
        Self {
            separator: '\t',
            directed: true,
            weight_column: None,
        }
    }
}

impl DelimOptions {
    /// Use a different column separator.
    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Build an undirected graph.
    pub fn undirected(mut self) -> Self {
        self.directed = false;
        self
    }

    /// Treat `column` as the weight attribute if the header has it.
    pub fn with_weight_column(mut self, column: impl Into<String>) -> Self {
        self.weight_column = Some(column.into());
        self
    }
}

/// Build a graph from delimited rows.
///
/// Reading stops at end of input or at the first line that is empty after
/// stripping trailing whitespace. Columns beyond the header width are ignored.
///
/// # Errors
///
/// - [`GraphError::MalformedRow`] if the header has fewer than two columns or
///   a row has fewer columns than the header
/// - [`GraphError::Io`] if reading fails
pub fn read_delim<R: BufRead>(reader: R, options: &DelimOptions) -> Result<Graph> {
    let mut lines = reader.lines().enumerate();

    let header = match lines.next() {
        Some((_, line)) => line.map_err(|e| GraphError::io("Failed to read header", e))?,
        None => {
            return Err(GraphError::MalformedRow {
                line: 1,
                message: "missing header row".to_string(),
            })
        }
    };
    let header = header.trim_end();
    let columns: Vec<&str> = header.split(options.separator).collect();
    if columns.len() < 2 {
        return Err(GraphError::MalformedRow {
            line: 1,
            message: format!(
                "header needs source and target columns, found {}",
                columns.len()
            ),
        });
    }
    let attribute_names = &columns[2..];
    debug!("Delimited header attributes: {attribute_names:?}");

    let mut config = if options.directed {
        GraphConfig::directed()
    } else {
        GraphConfig::undirected()
    };
    if let Some(weight) = &options.weight_column {
        if attribute_names.contains(&weight.as_str()) {
            config = config.with_weight_attribute(weight.clone());
        }
    }
    let mut graph = Graph::with_config(config);

    let mut rows = 0usize;
    for (index, line) in lines {
        let line_no = index + 1;
        let line = line.map_err(|e| GraphError::io(format!("Failed to read line {line_no}"), e))?;
        let row = line.trim_end();
        if row.is_empty() {
            break;
        }

        let values: Vec<&str> = row.split(options.separator).collect();
        if values.len() < columns.len() {
            return Err(GraphError::MalformedRow {
                line: line_no,
                message: format!(
                    "expected {} columns, found {}",
                    columns.len(),
                    values.len()
                ),
            });
        }

        let properties: PropertyMap = attribute_names
            .iter()
            .zip(&values[2..])
            .map(|(name, value)| (name.to_string(), PropertyValue::from(*value)))
            .collect();
        graph.add_edge_with(values[0], values[1], properties);
        rows += 1;
    }

    info!(
        "Loaded {rows} rows: {} nodes, {} edges",
        graph.nb_nodes(),
        graph.nb_edges()
    );
    Ok(graph)
}

/// Open `path` and build a graph with [`read_delim`].
///
/// # Errors
///
/// Returns [`GraphError::Io`] if the file cannot be opened, plus any error
/// from [`read_delim`].
pub fn load_delim<P: AsRef<Path>>(path: P, options: &DelimOptions) -> Result<Graph> {
    let path = path.as_ref();
    info!("Loading delimited graph from {}", path.display());
    let file = File::open(path)
        .map_err(|e| GraphError::io(format!("Failed to open {}", path.display()), e))?;
    read_delim(BufReader::new(file), options)
}
