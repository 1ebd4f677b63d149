use serde_json::Value;
use std::fmt;

/// A single typed slot of an interface. Scalar fields stay optional here;
/// the emitter decides what to do with gaps.
#[derive(Debug, Clone, PartialEq)]
pub struct DataElement {
    pub name: Option<String>,
    pub r#type: Option<String>,
    pub initial_value: Option<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Interface {
    pub name: String,
    pub data_elements: Vec<DataElement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortDirection {
    /// `RPORT`: the component consumes the interface.
    Receive,
    /// `PPORT`: the component produces the interface.
    Provide,
    /// Anything else, including a missing token. Generates nothing.
    Unrecognized(Option<String>),
}

impl PortDirection {
    /// Surrounding whitespace is ignored and case is folded. Internal
    /// whitespace is not normalized, so `"R PORT"` stays unrecognized.
    pub fn from_token(token: Option<&str>) -> Self {
        match token.map(str::trim) {
            Some(t) if t.eq_ignore_ascii_case("RPORT") => Self::Receive,
            Some(t) if t.eq_ignore_ascii_case("PPORT") => Self::Provide,
            other => Self::Unrecognized(other.map(str::to_string)),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Port {
    pub name: String,
    pub direction: PortDirection,
    pub interface: Option<String>,
}

/// Aggregate root of one generation run. Interfaces and ports keep the
/// order in which they were first declared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Component {
    pub name: Option<String>,
    pub interfaces: Vec<Interface>,
    pub ports: Vec<Port>,
}

impl Component {
    pub fn interface(&self, name: &str) -> Option<&Interface> {
        self.interfaces.iter().find(|i| i.name == name)
    }

    /// Resolves the interface a port is bound to, if the reference exists.
    pub fn bound_interface(&self, port: &Port) -> Option<&Interface> {
        port.interface.as_deref().and_then(|name| self.interface(name))
    }
}

/// Something missing or dangling in the description. Permissive runs log
/// and skip it, strict runs fail on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelGap {
    NotAMapping { section: &'static str, index: usize },
    NotAList {
        section: &'static str,
        /// Interface owning a `dataElements` section.
        owner: Option<String>,
    },
    UnnamedInterface { index: usize },
    UnnamedPort { index: usize },
    IncompleteDataElement {
        interface: String,
        index: usize,
        missing: &'static str,
    },
    UnrecognizedDirection { port: String, token: Option<String> },
    UnresolvedInterface { port: String, interface: Option<String> },
}

impl fmt::Display for ModelGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAMapping { section, index } => {
                write!(f, "{} entry #{} is not a mapping", section, index)
            }
            Self::NotAList {
                section,
                owner: Some(owner),
            } => write!(f, "{} of interface '{}' is not a list", section, owner),
            Self::NotAList {
                section,
                owner: None,
            } => write!(f, "{} is not a list", section),
            Self::UnnamedInterface { index } => write!(f, "interface #{} has no name", index),
            Self::UnnamedPort { index } => write!(f, "port #{} has no name", index),
            Self::IncompleteDataElement {
                interface,
                index,
                missing,
            } => write!(
                f,
                "data element #{} of interface '{}' has no {}",
                index, interface, missing
            ),
            Self::UnrecognizedDirection { port, token: Some(token) } => write!(
                f,
                "port '{}' has unrecognized type '{}' (expected RPORT or PPORT)",
                port, token
            ),
            Self::UnrecognizedDirection { port, token: None } => {
                write!(f, "port '{}' has no type", port)
            }
            Self::UnresolvedInterface {
                port,
                interface: Some(interface),
            } => write!(
                f,
                "port '{}' references unknown interface '{}'",
                port, interface
            ),
            Self::UnresolvedInterface {
                port,
                interface: None,
            } => write!(f, "port '{}' has no interface", port),
        }
    }
}
