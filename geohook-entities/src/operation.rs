use std::{convert::Infallible, fmt, str::FromStr};

/// The kind of operation the host performs on a record.
///
/// Hosts may report operations this crate does not know about,
/// these are kept verbatim as [`Operation::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Update,
    Delete,
    Other(String),
}

impl Operation {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Other(op) => op.as_str(),
        }
    }

    pub fn is_update(&self) -> bool {
        matches!(self, Self::Update)
    }
}

impl FromStr for Operation {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s {
            "create" => Self::Create,
            "update" => Self::Update,
            "delete" => Self::Delete,
            other => Self::Other(other.to_owned()),
        };
        Ok(op)
    }
}

impl From<&str> for Operation {
    fn from(from: &str) -> Self {
        match from.parse() {
            Ok(op) => op,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
