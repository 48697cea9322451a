use thiserror::Error;

macro_rules! malformed_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::Malformed {
            message: $msg.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::Malformed {
            message: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Lookups that have a natural "empty" answer (neighbors of an unknown node, `has_edge` on
/// missing endpoints, ...) never produce an error. Errors are reserved for boundaries where
/// silently continuing would hide a caller mistake, such as searching from a node that does
/// not exist.
///
/// # Error Categories
///
/// ## Graph Errors
/// - [`Error::NodeNotFound`] - A node name could not be resolved
/// - [`Error::DuplicateNode`] - A node with the same name is already registered
/// - [`Error::GraphError`] - A raw node or edge id is invalid for the graph
///
/// ## Input Errors
/// - [`Error::Malformed`] - A line of the adjacency list violates the loader configuration
/// - [`Error::Empty`] - The input did not describe a single node
/// - [`Error::FileError`] - Filesystem I/O errors
///
/// # Examples
///
/// ```rust
/// use graphwalk::{Error, Graph};
///
/// let graph = Graph::from_adjacency("D A\r\nA B C")?;
///
/// match graph.find_path("D", "X") {
///     Ok(path) => println!("{} hops", path.len()),
///     Err(Error::NodeNotFound(name)) => eprintln!("unknown node '{}'", name),
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// # Ok::<(), graphwalk::Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// A node with the given name does not exist.
    ///
    /// Raised by operations that cannot give a meaningful answer without both endpoints,
    /// most importantly path search and reachability queries.
    #[error("Node '{0}' does not exist")]
    NodeNotFound(String),

    /// A node with the given name is already part of the graph.
    ///
    /// Node names are the identity of a node, so adding the same name twice is rejected
    /// instead of creating a second, unreachable entry.
    #[error("Node '{0}' already exists")]
    DuplicateNode(String),

    /// The adjacency list input is damaged and could not be parsed.
    ///
    /// # Fields
    ///
    /// * `message` - Detailed description of what was malformed, including the input line
    /// * `file` - Source file where the error was detected
    /// * `line` - Source line where the error was detected
    #[error("Malformed - {file}:{line}: {message}")]
    Malformed {
        /// The message to be printed for the Malformed error
        message: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// Provided input was empty.
    ///
    /// Only produced when the loader is configured to reject inputs that contain no
    /// nodes at all.
    #[error("Provided input was empty")]
    Empty,

    /// File I/O error.
    ///
    /// Wraps standard I/O errors that can occur while reading the adjacency list from disk.
    #[error("{0}")]
    FileError(#[from] std::io::Error),

    /// Low-level graph error.
    ///
    /// Occurs when a [`crate::graph::NodeId`] or [`crate::graph::EdgeId`] that does not
    /// belong to the graph (or was removed from it) is handed to [`crate::graph::DirectedGraph`].
    #[error("{0}")]
    GraphError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_macro_records_location() {
        let err = malformed_error!("line {}: bad token", 3);
        match err {
            Error::Malformed {
                message,
                file,
                line,
            } => {
                assert_eq!(message, "line 3: bad token");
                assert!(file.ends_with("error.rs"));
                assert!(line > 0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::NodeNotFound("X".to_string()).to_string(),
            "Node 'X' does not exist"
        );
        assert_eq!(
            Error::DuplicateNode("A".to_string()).to_string(),
            "Node 'A' already exists"
        );
        assert_eq!(Error::Empty.to_string(), "Provided input was empty");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::FileError(_)));
        assert_eq!(err.to_string(), "missing");
    }
}
