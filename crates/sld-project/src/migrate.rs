//! Schema migration framework.
//!
//! Migrations run on the untyped document tree so that older shapes which no
//! longer deserialize into `DiagramDocument` can still be upgraded.

use serde_json::Value;
use tracing::debug;

use crate::ProjectError;

pub const LATEST_VERSION: u32 = 2;

pub fn migrate_to_latest(mut doc: Value) -> Result<Value, ProjectError> {
    let mut version = document_version(&doc)?;
    while version < LATEST_VERSION {
        doc = migrate_one_version(doc, version)?;
        version += 1;
        set_version(&mut doc, version)?;
        debug!(version, "migrated diagram document");
    }
    Ok(doc)
}

/// Version recorded in the document; a missing field means version 0.
pub fn document_version(doc: &Value) -> Result<u32, ProjectError> {
    match doc.get("version") {
        None | Some(Value::Null) => Ok(0),
        Some(v) => v
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| ProjectError::Migration {
                what: format!("Invalid version field: {}", v),
            }),
    }
}

fn set_version(doc: &mut Value, version: u32) -> Result<(), ProjectError> {
    let obj = doc.as_object_mut().ok_or_else(|| ProjectError::Migration {
        what: "Document root is not a mapping".to_string(),
    })?;
    obj.insert("version".to_string(), Value::from(version));
    Ok(())
}

fn migrate_one_version(doc: Value, version: u32) -> Result<Value, ProjectError> {
    match version {
        0 => migrate_v0_to_v1(doc),
        1 => migrate_v1_to_v2(doc),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// v0 stored the component kind under `kind`; v1 uses `type`.
fn migrate_v0_to_v1(mut doc: Value) -> Result<Value, ProjectError> {
    if let Some(components) = doc.get_mut("components").and_then(Value::as_array_mut) {
        for component in components {
            let Some(obj) = component.as_object_mut() else {
                continue;
            };
            if obj.contains_key("type") {
                continue;
            }
            if let Some(kind) = obj.remove("kind") {
                obj.insert("type".to_string(), kind);
            }
        }
    }
    Ok(doc)
}

/// v1 wrote port names lower-case.
fn migrate_v1_to_v2(mut doc: Value) -> Result<Value, ProjectError> {
    if let Some(connections) = doc.get_mut("connections").and_then(Value::as_array_mut) {
        for connection in connections {
            let Some(obj) = connection.as_object_mut() else {
                continue;
            };
            for key in ["fromPort", "toPort"] {
                if let Some(Value::String(port)) = obj.get_mut(key) {
                    *port = port.to_ascii_uppercase();
                }
            }
        }
    }
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn v0_document_is_upgraded() {
        let doc = json!({
            "name": "legacy",
            "components": [
                {"id": "m1", "kind": "METER", "position": {"x": 1.0, "y": 2.0}}
            ],
            "connections": [
                {"id": "c1", "from": "m1", "to": "m2", "fromPort": "right", "toPort": "left"}
            ]
        });
        let migrated = migrate_to_latest(doc).unwrap();
        assert_eq!(migrated["version"], 2);
        assert_eq!(migrated["components"][0]["type"], "METER");
        assert!(migrated["components"][0].get("kind").is_none());
        assert_eq!(migrated["connections"][0]["fromPort"], "RIGHT");
        assert_eq!(migrated["connections"][0]["toPort"], "LEFT");
    }

    #[test]
    fn latest_document_is_untouched() {
        let doc = json!({"version": 2, "name": "x", "connections": [{"fromPort": "left"}]});
        let migrated = migrate_to_latest(doc.clone()).unwrap();
        assert_eq!(migrated, doc);
    }

    #[test]
    fn bad_version_field() {
        let doc = json!({"version": "two", "name": "x"});
        assert!(matches!(
            migrate_to_latest(doc),
            Err(ProjectError::Migration { .. })
        ));
    }
}
