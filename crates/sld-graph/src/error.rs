//! Graph-specific error types.
//!
//! Engine operations are total and never return these; they come from
//! validation of host-supplied graphs and from host authoring edits.

use crate::model::Port;

/// Structural problems found in a diagram graph.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Duplicate component ID: {id}")]
    DuplicateComponent { id: String },

    #[error("Duplicate connection ID: {id}")]
    DuplicateConnection { id: String },

    #[error("Connection {connection} refers to non-existent component {component}")]
    MissingEndpoint {
        connection: String,
        component: String,
    },

    #[error("Connection {connection} starts and ends on component {component}")]
    SelfLoop {
        connection: String,
        component: String,
    },

    #[error("Connection {connection} duplicates connection {existing}")]
    ParallelConnection { connection: String, existing: String },

    #[error("Junction {id} is malformed: {reason}")]
    MalformedJunction { id: String, reason: &'static str },
}

/// Rejected host authoring edits.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("Component not found: {id}")]
    ComponentNotFound { id: String },

    #[error("Cannot connect component {id} to itself")]
    SelfConnection { id: String },

    #[error("{from}:{from_port} and {to}:{to_port} are already connected")]
    AlreadyConnected {
        from: String,
        from_port: Port,
        to: String,
        to_port: Port,
    },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown port '{0}' (expected TOP, BOTTOM, LEFT or RIGHT)")]
pub struct ParsePortError(pub String);

pub type GraphResult<T> = Result<T, GraphError>;
pub type EditResult<T> = Result<T, EditError>;
