use thiserror::Error;

/** errors raised while reading an instance or the command line */
#[derive(Debug, Error)]
pub enum CliqueError {
    /// the instance (or an output file) could not be read / written
    #[error("unable to access {path}: {source}")]
    Io {
        /// file involved
        path: String,
        /// underlying error
        #[source]
        source: std::io::Error,
    },
    /// an `e` line that does not contain two vertex ids
    #[error("line {line}: malformed edge `{content}`")]
    MalformedEdge {
        /// line number (starting at 1)
        line: usize,
        /// content of the line
        content: String,
    },
    /// a coloring strategy name that does not exist
    #[error("unknown coloring strategy `{0}`")]
    UnknownStrategy(String),
    /// a command line value that cannot be parsed
    #[error("invalid value `{value}` for --{arg}")]
    InvalidArgument {
        /// argument name
        arg: &'static str,
        /// value given
        value: String,
    },
    /// statistics could not be serialized
    #[error("unable to serialize statistics: {0}")]
    Json(#[from] serde_json::Error),
}
