//! Error type for the command-line host.

use sld_core::SldError;
use sld_graph::EditError;
use sld_project::ProjectError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Project(#[from] ProjectError),

    #[error("Invalid geometry: {0}")]
    Geometry(#[from] SldError),

    #[error("Edit rejected: {0}")]
    Edit(#[from] EditError),

    #[error("{what} not found: {id}")]
    NotFound { what: &'static str, id: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type CliResult<T> = Result<T, CliError>;
