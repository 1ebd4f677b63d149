//! Walks the generic document tree and builds the typed component model.
//!
//! Extraction never fails on missing fields: absent lists are empty, absent
//! scalars stay `None`. Entries that cannot be keyed at all (no name, not a
//! mapping) are dropped and reported as [`ModelGap`]s so the caller can apply
//! its policy.

use crate::domain::model::{Component, DataElement, Interface, ModelGap, Port, PortDirection};
use crate::utils::error::{Result, RteGenError};
use serde_json::{Map, Value};

/// Key under which the component may be nested.
pub const COMPONENT_KEY: &str = "Component";

#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub component: Component,
    pub gaps: Vec<ModelGap>,
}

pub fn extract_component(doc: &Value) -> Result<Extraction> {
    let top = component_root(doc).ok_or_else(|| {
        RteGenError::model("the component description must be a mapping at its root")
    })?;

    let mut extraction = Extraction::default();
    extraction.component.name = top.get("name").and_then(scalar_text);

    for (index, entry) in list_field(top, "Interfaces", None, &mut extraction.gaps)
        .iter()
        .enumerate()
    {
        let Some(iface) = entry.as_object() else {
            extraction.gaps.push(ModelGap::NotAMapping {
                section: "Interfaces",
                index,
            });
            continue;
        };
        let Some(name) = iface.get("name").and_then(scalar_text) else {
            extraction.gaps.push(ModelGap::UnnamedInterface { index });
            continue;
        };
        let data_elements = list_field(iface, "dataElements", Some(&name), &mut extraction.gaps)
            .iter()
            .enumerate()
            .filter_map(|(de_index, de)| match de.as_object() {
                Some(de) => Some(data_element(de)),
                None => {
                    extraction.gaps.push(ModelGap::NotAMapping {
                        section: "dataElements",
                        index: de_index,
                    });
                    None
                }
            })
            .collect();
        upsert(
            &mut extraction.component.interfaces,
            Interface {
                name,
                data_elements,
            },
            |i| &i.name,
        );
    }

    for (index, entry) in list_field(top, "Ports", None, &mut extraction.gaps)
        .iter()
        .enumerate()
    {
        let Some(port) = entry.as_object() else {
            extraction.gaps.push(ModelGap::NotAMapping {
                section: "Ports",
                index,
            });
            continue;
        };
        let Some(name) = port.get("name").and_then(scalar_text) else {
            extraction.gaps.push(ModelGap::UnnamedPort { index });
            continue;
        };
        let token = port.get("type").and_then(scalar_text);
        upsert(
            &mut extraction.component.ports,
            Port {
                name,
                direction: PortDirection::from_token(token.as_deref()),
                interface: port.get("interface").and_then(scalar_text),
            },
            |p| &p.name,
        );
    }

    tracing::debug!(
        "Extracted {} interfaces and {} ports",
        extraction.component.interfaces.len(),
        extraction.component.ports.len()
    );
    Ok(extraction)
}

/// The component is either the document itself or nested under
/// [`COMPONENT_KEY`].
fn component_root(doc: &Value) -> Option<&Map<String, Value>> {
    let outer = doc.as_object()?;
    match outer.get(COMPONENT_KEY).and_then(Value::as_object) {
        Some(inner) => Some(inner),
        None => Some(outer),
    }
}

/// A present value that is not a list is reported as a gap and treated as
/// empty.
fn list_field<'a>(
    map: &'a Map<String, Value>,
    key: &'static str,
    owner: Option<&str>,
    gaps: &mut Vec<ModelGap>,
) -> &'a [Value] {
    match map.get(key) {
        Some(Value::Array(items)) => items.as_slice(),
        Some(Value::Null) | None => &[],
        Some(_) => {
            gaps.push(ModelGap::NotAList {
                section: key,
                owner: owner.map(str::to_string),
            });
            &[]
        }
    }
}

fn data_element(de: &Map<String, Value>) -> DataElement {
    DataElement {
        name: de.get("name").and_then(scalar_text),
        r#type: de.get("type").and_then(scalar_text),
        initial_value: de.get("initialValue").filter(|v| !v.is_null()).cloned(),
    }
}

/// Textual form of a scalar. Nulls and collections have none.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Later declarations with the same key replace earlier ones in place, so the
/// first declaration fixes the position.
fn upsert<T>(items: &mut Vec<T>, item: T, key: impl Fn(&T) -> &String) {
    match items.iter().position(|existing| key(existing) == key(&item)) {
        Some(pos) => {
            tracing::warn!("⚠️  '{}' is declared more than once, keeping the last one", key(&item));
            items[pos] = item;
        }
        None => items.push(item),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn speed_doc() -> Value {
        json!({
            "name": "SpeedCtrl",
            "Interfaces": [
                {"name": "Speed", "dataElements": [
                    {"name": "value", "type": "double"},
                    {"name": "valid", "type": "bool", "initialValue": true}
                ]}
            ],
            "Ports": [
                {"name": "InSpeed", "type": "RPORT", "interface": "Speed"},
                {"name": "OutSpeed", "type": "PPORT", "interface": "Speed"}
            ]
        })
    }

    #[test]
    fn test_wrapped_and_unwrapped_documents_match() {
        let flat = extract_component(&speed_doc()).unwrap();
        let wrapped = extract_component(&json!({ "Component": speed_doc() })).unwrap();

        assert_eq!(flat.component, wrapped.component);
        assert_eq!(flat.component.name.as_deref(), Some("SpeedCtrl"));
        assert_eq!(flat.component.interfaces[0].data_elements.len(), 2);
        assert_eq!(
            flat.component.interfaces[0].data_elements[1].initial_value,
            Some(json!(true))
        );
        let ports: Vec<_> = flat.component.ports.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(ports, ["InSpeed", "OutSpeed"]);
        assert!(flat.gaps.is_empty());
    }

    #[test]
    fn test_missing_lists_are_empty() {
        let extraction = extract_component(&json!({
            "Interfaces": [{"name": "Empty", "dataElements": null}],
            "Ports": null
        }))
        .unwrap();

        assert!(extraction.component.name.is_none());
        assert!(extraction.component.interfaces[0].data_elements.is_empty());
        assert!(extraction.component.ports.is_empty());

        let empty = extract_component(&json!({})).unwrap();
        assert_eq!(empty.component, Component::default());
    }

    #[test]
    fn test_missing_scalars_pass_through() {
        let extraction = extract_component(&json!({
            "Interfaces": [{"name": "Speed", "dataElements": [{"type": "double"}, {"name": "raw"}]}],
            "Ports": [{"name": "InSpeed"}]
        }))
        .unwrap();

        let elements = &extraction.component.interfaces[0].data_elements;
        assert_eq!(elements[0].name, None);
        assert_eq!(elements[1].r#type, None);
        let port = &extraction.component.ports[0];
        assert_eq!(port.direction, PortDirection::Unrecognized(None));
        assert_eq!(port.interface, None);
    }

    #[test]
    fn test_unkeyed_entries_become_gaps() {
        let extraction = extract_component(&json!({
            "Interfaces": [{"dataElements": []}, "Speed"],
            "Ports": [{"type": "RPORT", "interface": "Speed"}]
        }))
        .unwrap();

        assert!(extraction.component.interfaces.is_empty());
        assert!(extraction.component.ports.is_empty());
        assert_eq!(
            extraction.gaps,
            vec![
                ModelGap::UnnamedInterface { index: 0 },
                ModelGap::NotAMapping {
                    section: "Interfaces",
                    index: 1
                },
                ModelGap::UnnamedPort { index: 0 },
            ]
        );
    }

    #[test]
    fn test_non_list_sections_become_gaps() {
        let extraction = extract_component(&json!({
            "Interfaces": "Speed",
            "Ports": {"name": "InSpeed", "type": "RPORT", "interface": "Speed"}
        }))
        .unwrap();

        assert!(extraction.component.interfaces.is_empty());
        assert!(extraction.component.ports.is_empty());
        assert_eq!(
            extraction.gaps,
            vec![
                ModelGap::NotAList {
                    section: "Interfaces",
                    owner: None
                },
                ModelGap::NotAList {
                    section: "Ports",
                    owner: None
                },
            ]
        );

        let nested = extract_component(&json!({
            "Interfaces": [{"name": "Speed", "dataElements": {"name": "value", "type": "double"}}]
        }))
        .unwrap();
        assert_eq!(
            nested.gaps,
            vec![ModelGap::NotAList {
                section: "dataElements",
                owner: Some("Speed".to_string())
            }]
        );
        assert!(nested.gaps[0].to_string().contains("interface 'Speed'"));
    }

    #[test]
    fn test_duplicate_port_keeps_first_position() {
        let extraction = extract_component(&json!({
            "Ports": [
                {"name": "A", "type": "RPORT", "interface": "X"},
                {"name": "B", "type": "RPORT", "interface": "X"},
                {"name": "A", "type": "PPORT", "interface": "Y"}
            ]
        }))
        .unwrap();

        let ports = &extraction.component.ports;
        assert_eq!(ports.len(), 2);
        assert_eq!(ports[0].name, "A");
        assert_eq!(ports[0].direction, PortDirection::Provide);
        assert_eq!(ports[0].interface.as_deref(), Some("Y"));
    }

    #[test]
    fn test_non_mapping_root_is_rejected() {
        assert!(extract_component(&json!(["not", "a", "component"])).is_err());
        assert!(extract_component(&json!("scalar")).is_err());
    }

    #[test]
    fn test_numeric_names_are_stringified() {
        let extraction = extract_component(&json!({"name": 42})).unwrap();
        assert_eq!(extraction.component.name.as_deref(), Some("42"));
    }
}
