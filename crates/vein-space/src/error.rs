//! Error types for topology selection.

use std::fmt;

/// Errors arising from choosing a neighbour topology.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// A topology name did not match any known connectivity.
    UnknownConnectivity {
        /// The name as given.
        name: String,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownConnectivity { name } => {
                write!(f, "unknown connectivity '{name}': expected 4, 6 or 26")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
