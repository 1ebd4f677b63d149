//! Plans the generated RTE unit: which buffers to declare and which
//! accessors to define, in output order. Rendering to text lives in
//! [`crate::core::render`].

use crate::core::types::{format_initial, map_type, TargetType};
use crate::domain::model::{Component, DataElement, ModelGap, Port, PortDirection};
use crate::domain::ports::GenerationPolicy;
use crate::utils::error::Result;

pub const DEFAULT_RUNTIME_HEADER: &str = "include/Rte.h";
pub const SYMBOL_PREFIX: &str = "Rte_";

/// Storage slot backing one (port, data element) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferDecl {
    pub name: String,
    pub c_type: TargetType,
    /// `None` for extern declarations of receive-side buffers.
    pub initializer: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessorKind {
    Read,
    Write,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessor {
    pub kind: AccessorKind,
    pub name: String,
    pub buffer: String,
    pub c_type: TargetType,
}

/// Everything the renderer needs, already ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RteUnit {
    pub component: String,
    pub runtime_header: String,
    pub receive_buffers: Vec<BufferDecl>,
    pub provide_buffers: Vec<BufferDecl>,
    pub accessors: Vec<Accessor>,
    pub absorbed_gaps: usize,
}

impl RteUnit {
    pub fn component_header(&self) -> String {
        format!("{}{}.h", SYMBOL_PREFIX, self.component)
    }

    pub fn buffer_count(&self) -> usize {
        self.receive_buffers.len() + self.provide_buffers.len()
    }
}

pub fn buffer_name(port: &str, element: &str) -> String {
    format!("{}Buffer_{}_{}", SYMBOL_PREFIX, port, element)
}

pub fn accessor_name(kind: AccessorKind, port: &str, element: &str) -> String {
    let verb = match kind {
        AccessorKind::Read => "Read",
        AccessorKind::Write => "Write",
    };
    format!("{}{}_{}_{}", SYMBOL_PREFIX, verb, port, element)
}

/// One data element reached through one port.
struct Binding<'a> {
    port: &'a Port,
    element: &'a str,
    c_type: TargetType,
    initial_value: Option<&'a serde_json::Value>,
}

impl Binding<'_> {
    fn buffer(&self) -> String {
        buffer_name(&self.port.name, self.element)
    }
}

/// Applies the policy to every gap in the model, then runs the declarations
/// pass and the function-body pass.
pub fn plan(
    component_name: &str,
    runtime_header: &str,
    component: &Component,
    policy: GenerationPolicy,
) -> Result<RteUnit> {
    let mut absorbed_gaps = 0;
    for gap in model_gaps(component) {
        policy.absorb(gap)?;
        absorbed_gaps += 1;
    }

    let (receive_buffers, provide_buffers) = plan_declarations(component);
    let accessors = plan_accessors(component);
    tracing::debug!(
        "Planned {} buffers and {} accessors for {}",
        receive_buffers.len() + provide_buffers.len(),
        accessors.len(),
        component_name
    );

    Ok(RteUnit {
        component: component_name.to_string(),
        runtime_header: runtime_header.to_string(),
        receive_buffers,
        provide_buffers,
        accessors,
        absorbed_gaps,
    })
}

/// Extern declarations for receive-side buffers and initialized definitions
/// for provide-side buffers.
pub fn plan_declarations(component: &Component) -> (Vec<BufferDecl>, Vec<BufferDecl>) {
    let receive = bindings(component, &PortDirection::Receive)
        .map(|b| BufferDecl {
            name: b.buffer(),
            c_type: b.c_type,
            initializer: None,
        })
        .collect();
    let provide = bindings(component, &PortDirection::Provide)
        .map(|b| {
            let initializer = format_initial(&b.c_type, b.initial_value);
            BufferDecl {
                name: b.buffer(),
                c_type: b.c_type,
                initializer: Some(initializer),
            }
        })
        .collect();
    (receive, provide)
}

/// Read accessors for receive ports and write accessors for provide ports,
/// interleaved in port order.
pub fn plan_accessors(component: &Component) -> Vec<Accessor> {
    component
        .ports
        .iter()
        .flat_map(|port| port_bindings(component, port))
        .filter_map(|b| {
            let kind = match b.port.direction {
                PortDirection::Receive => AccessorKind::Read,
                PortDirection::Provide => AccessorKind::Write,
                PortDirection::Unrecognized(_) => return None,
            };
            Some(Accessor {
                kind,
                name: accessor_name(kind, &b.port.name, b.element),
                buffer: b.buffer(),
                c_type: b.c_type,
            })
        })
        .collect()
}

fn bindings<'a>(
    component: &'a Component,
    direction: &'a PortDirection,
) -> impl Iterator<Item = Binding<'a>> + 'a {
    component
        .ports
        .iter()
        .filter(move |port| &port.direction == direction)
        .flat_map(move |port| port_bindings(component, port))
}

/// Unresolved interfaces and incomplete elements contribute nothing.
fn port_bindings<'a>(component: &'a Component, port: &'a Port) -> Vec<Binding<'a>> {
    let Some(iface) = component.bound_interface(port) else {
        return Vec::new();
    };
    iface
        .data_elements
        .iter()
        .filter_map(|de| {
            let (name, token) = complete(de)?;
            Some(Binding {
                port,
                element: name,
                c_type: map_type(token),
                initial_value: de.initial_value.as_ref(),
            })
        })
        .collect()
}

/// Name and type token of an element that can be emitted. An empty type
/// token counts as missing.
fn complete(de: &DataElement) -> Option<(&str, &str)> {
    let name = de.name.as_deref()?;
    let token = de.r#type.as_deref().filter(|t| !t.trim().is_empty())?;
    Some((name, token))
}

fn model_gaps(component: &Component) -> Vec<ModelGap> {
    let mut gaps = Vec::new();
    for iface in &component.interfaces {
        for (index, de) in iface.data_elements.iter().enumerate() {
            let missing = match (de.name.as_deref(), de.r#type.as_deref()) {
                (None, _) => "name",
                (Some(_), None) => "type",
                (Some(_), Some(t)) if t.trim().is_empty() => "type",
                _ => continue,
            };
            gaps.push(ModelGap::IncompleteDataElement {
                interface: iface.name.clone(),
                index,
                missing,
            });
        }
    }
    for port in &component.ports {
        if let PortDirection::Unrecognized(token) = &port.direction {
            gaps.push(ModelGap::UnrecognizedDirection {
                port: port.name.clone(),
                token: token.clone(),
            });
        }
        if component.bound_interface(port).is_none() {
            gaps.push(ModelGap::UnresolvedInterface {
                port: port.name.clone(),
                interface: port.interface.clone(),
            });
        }
    }
    gaps
}
