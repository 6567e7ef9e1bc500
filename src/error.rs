use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, Error)]
pub enum GraphError {
    /// A record or header that does not follow the expected layout. `line` is
    /// 1-based; records handed over in memory use line 0.
    #[error("malformed input on line {line}: {reason}")]
    MalformedInput { line: usize, reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> GraphError {
        GraphError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    /// Attaches a line number to an error raised without one.
    pub fn at_line(self, line: usize) -> GraphError {
        match self {
            GraphError::MalformedInput { reason, .. } => GraphError::MalformedInput { line, reason },
            other => other,
        }
    }
}
