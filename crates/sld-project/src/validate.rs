//! Document validation logic.

use sld_graph::{GraphError, validate_graph};

use crate::schema::DiagramDocument;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid graph: {0}")]
    Graph(#[from] GraphError),

    #[error("Position of {id} out of range: ({x}, {y})")]
    PositionOutOfRange { id: String, x: f64, y: f64 },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_document(doc: &DiagramDocument) -> Result<(), ValidationError> {
    if doc.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: doc.version,
        });
    }

    for component in &doc.components {
        let p = component.position;
        let in_range = |v: f64| v.is_finite() && (0.0..=100.0).contains(&v);
        if !in_range(p.x) || !in_range(p.y) {
            return Err(ValidationError::PositionOutOfRange {
                id: component.id.clone(),
                x: p.x,
                y: p.y,
            });
        }
        if !component.rotation.is_finite() {
            return Err(ValidationError::InvalidValue {
                field: format!("component '{}' rotation", component.id),
                value: component.rotation.to_string(),
                reason: "must be finite".to_string(),
            });
        }
    }

    if let Some(engine) = &doc.engine {
        for (field, value) in [
            ("engine.hit_threshold_px", engine.hit_threshold_px),
            ("engine.touch_hit_threshold_px", engine.touch_hit_threshold_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ValidationError::InvalidValue {
                    field: field.to_string(),
                    value: value.to_string(),
                    reason: "must be a non-negative number".to_string(),
                });
            }
        }
    }

    validate_graph(&doc.graph())?;
    Ok(())
}
