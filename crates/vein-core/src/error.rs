//! Error types for grid access and flood-fill searches.
//!
//! Only collaborator failures are errors. An absent origin, a zero cap, or
//! an origin the permission check rejects all produce an empty result.

use crate::pos::BlockPos;
use std::error::Error;
use std::fmt;

/// Failures raised by a [`VoxelGrid`](crate::VoxelGrid) implementation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Looking up a cell or its material failed.
    AccessFailed {
        /// Position of the cell being accessed.
        pos: BlockPos,
        /// Human-readable description of the failure.
        reason: String,
    },
    /// The grid as a whole cannot serve reads (unloaded world, closed handle).
    Unavailable {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccessFailed { pos, reason } => {
                write!(f, "grid access at {pos} failed: {reason}")
            }
            Self::Unavailable { reason } => write!(f, "grid unavailable: {reason}"),
        }
    }
}

impl Error for GridError {}

/// Failures raised by a [`PermissionCheck`](crate::PermissionCheck).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PermissionError {
    /// The check could not reach a verdict for this cell.
    CheckFailed {
        /// Position of the cell being checked.
        pos: BlockPos,
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for PermissionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CheckFailed { pos, reason } => {
                write!(f, "permission check at {pos} failed: {reason}")
            }
        }
    }
}

impl Error for PermissionError {}

/// Errors that abort a search.
///
/// A search never retries and never returns partial results: the first
/// collaborator failure is handed straight back to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SearchError {
    /// The grid accessor failed.
    Grid(GridError),
    /// The permission check failed.
    Permission(PermissionError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Permission(e) => write!(f, "permission: {e}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Permission(e) => Some(e),
        }
    }
}

impl From<GridError> for SearchError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<PermissionError> for SearchError {
    fn from(e: PermissionError) -> Self {
        Self::Permission(e)
    }
}
