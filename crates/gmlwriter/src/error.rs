//! Error types for gmlwriter operations.
//!
//! All fallible operations return [`Result<T>`] with context-rich error messages.

use thiserror::Error;

/// Result type alias for gmlwriter operations.
pub type Result<T> = std::result::Result<T, GmlError>;

/// Comprehensive error type for configuring and running an export.
///
/// Every error aborts the current export; nothing is retried or rolled back.
#[derive(Error, Debug)]
pub enum GmlError {
    /// Writing to the output sink (or creating the output file) failed
    #[error("I/O error: {message}")]
    Io {
        /// Detailed error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The writer configuration is inconsistent
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Description of what went wrong
        message: String,
    },

    /// A vertex is listed as a member of more than one group
    #[error("Vertex {vertex} belongs to both group {first_group} and group {second_group}")]
    VertexInMultipleGroups {
        /// Debug rendering of the vertex
        vertex: String,
        /// Debug rendering of the group that listed it first
        first_group: String,
        /// Debug rendering of the conflicting group
        second_group: String,
    },

    /// A color string could not be parsed
    #[error("Invalid color '{value}': expected #rrggbb or #rrggbbaa")]
    InvalidColor {
        /// The rejected input
        value: String,
    },

    /// A style provider failed while answering a query
    #[error("Style provider error: {message}")]
    Provider {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Style sheet serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Vertex not found in the graph
    #[error("Vertex not found: {vertex}")]
    VertexNotFound {
        /// Debug rendering of the missing vertex
        vertex: String,
    },

    /// Edge not found in the graph
    #[error("Edge not found: {edge}")]
    EdgeNotFound {
        /// Debug rendering of the missing edge
        edge: String,
    },

    /// Edge already present in the graph
    #[error("Duplicate edge: {edge}")]
    DuplicateEdge {
        /// Debug rendering of the edge
        edge: String,
    },
}

impl GmlError {
    /// Create an I/O error from a message and the failing operation's error.
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a provider error from a message and optional source.
    pub fn provider<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Provider {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}
