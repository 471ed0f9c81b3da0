//! sld-project: diagram file format, migration and validation.

pub mod migrate;
pub mod schema;
pub mod validate;

pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use schema::*;
pub use validate::{ValidationError, validate_document};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse, migrate and validate a YAML document.
pub fn from_yaml_str(content: &str) -> ProjectResult<DiagramDocument> {
    let raw: serde_json::Value = serde_yaml::from_str(content)?;
    finish_load(raw)
}

/// Parse, migrate and validate a JSON document.
pub fn from_json_str(content: &str) -> ProjectResult<DiagramDocument> {
    let raw: serde_json::Value = serde_json::from_str(content)?;
    finish_load(raw)
}

fn finish_load(raw: serde_json::Value) -> ProjectResult<DiagramDocument> {
    let doc = decode(raw)?;
    validate_document(&doc)?;
    Ok(doc)
}

fn decode(raw: serde_json::Value) -> ProjectResult<DiagramDocument> {
    let migrated = migrate_to_latest(raw)?;
    Ok(serde_json::from_value(migrated)?)
}

/// Parse and migrate without validating.
///
/// For repair tools that need to open a document whose graph is currently
/// broken (dangling connections, for instance) in order to fix it.
pub fn load_unvalidated(path: &std::path::Path) -> ProjectResult<DiagramDocument> {
    let content = std::fs::read_to_string(path)?;
    let raw: serde_json::Value = if is_json(path) {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    decode(raw)
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<DiagramDocument> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn save_yaml(path: &std::path::Path, doc: &DiagramDocument) -> ProjectResult<()> {
    validate_document(doc)?;
    let content = serde_yaml::to_string(doc)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<DiagramDocument> {
    let content = std::fs::read_to_string(path)?;
    from_json_str(&content)
}

pub fn save_json(path: &std::path::Path, doc: &DiagramDocument) -> ProjectResult<()> {
    validate_document(doc)?;
    let content = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by extension: `.json` is JSON, anything else YAML.
pub fn load(path: &std::path::Path) -> ProjectResult<DiagramDocument> {
    if is_json(path) {
        load_json(path)
    } else {
        load_yaml(path)
    }
}

/// Save by extension: `.json` is JSON, anything else YAML.
pub fn save(path: &std::path::Path, doc: &DiagramDocument) -> ProjectResult<()> {
    if is_json(path) {
        save_json(path, doc)
    } else {
        save_yaml(path, doc)
    }
}

fn is_json(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
