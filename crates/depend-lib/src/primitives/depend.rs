use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Failures raised by the graph, the alias table and the query layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DependError {
    #[error("Node does not exist: {name}")]
    NodeNotFound { name: String },

    #[error("Dependency cycle found: {}", path.join(" -> "))]
    CycleDetected { path: Vec<String> },

    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },
}

impl DependError {
    pub fn node_not_found(name: &str) -> Self {
        Self::NodeNotFound {
            name: name.to_string(),
        }
    }

    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// The cycle path, if this is a cycle failure
    pub fn cycle(&self) -> Option<&[String]> {
        match self {
            Self::CycleDetected { path } => Some(path),
            _ => None,
        }
    }
}

/// Reject anything that is not a plain, non-blank name
pub fn ensure_plain_name(name: &str, role: &str) -> Result<(), DependError> {
    if name.trim().is_empty() {
        return Err(DependError::invalid_argument(format!(
            "expected {} to be a non-empty name",
            role
        )));
    }
    Ok(())
}

/// One dependee or an ordered list of dependees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dependees {
    One(String),
    Many(Vec<String>),
}

impl Dependees {
    /// Borrow the dependees as a slice, in declaration order
    pub fn as_slice(&self) -> &[String] {
        match self {
            Dependees::One(name) => std::slice::from_ref(name),
            Dependees::Many(names) => names,
        }
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            Dependees::One(name) => vec![name],
            Dependees::Many(names) => names,
        }
    }
}

impl From<&str> for Dependees {
    fn from(name: &str) -> Self {
        Dependees::One(name.to_string())
    }
}

impl From<String> for Dependees {
    fn from(name: String) -> Self {
        Dependees::One(name)
    }
}

impl From<&String> for Dependees {
    fn from(name: &String) -> Self {
        Dependees::One(name.clone())
    }
}

impl From<Vec<String>> for Dependees {
    fn from(names: Vec<String>) -> Self {
        Dependees::Many(names)
    }
}

impl From<Vec<&str>> for Dependees {
    fn from(names: Vec<&str>) -> Self {
        Dependees::Many(names.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Dependees {
    fn from(names: [&str; N]) -> Self {
        Dependees::Many(names.iter().map(|n| n.to_string()).collect())
    }
}

impl TryFrom<&serde_json::Value> for Dependees {
    type Error = DependError;

    /// Accepts a string or an array of strings, nothing else
    fn try_from(value: &serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(name) => Ok(Dependees::One(name.clone())),
            serde_json::Value::Array(items) => items
                .iter()
                .map(|item| {
                    item.as_str().map(str::to_string).ok_or_else(|| {
                        DependError::invalid_argument(format!(
                            "expected every dependee to be a string, but received {}",
                            json_kind(item)
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Dependees::Many),
            other => Err(DependError::invalid_argument(format!(
                "expected a string or an array of strings, but received {}",
                json_kind(other)
            ))),
        }
    }
}

impl fmt::Display for Dependees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dependees::One(name) => write!(f, "{}", name),
            Dependees::Many(names) => write!(f, "[{}]", names.join(", ")),
        }
    }
}

/// Short type label for a dynamic value, used in argument errors
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
