//! Accessor traits through which a search reads the host voxel grid.

use crate::error::GridError;
use crate::pos::{BlockPos, Offset};
use std::fmt::Debug;
use std::hash::Hash;

/// A cell handle produced by a [`VoxelGrid`].
///
/// Equality and hashing must agree with position identity: two handles
/// are equal iff they refer to the same grid position. Searches key their
/// visited set on the handle itself.
pub trait Voxel: Clone + Eq + Hash {
    /// Integer position of this cell.
    fn pos(&self) -> BlockPos;
}

impl Voxel for BlockPos {
    fn pos(&self) -> BlockPos {
        *self
    }
}

impl<T: Voxel> Voxel for &T {
    fn pos(&self) -> BlockPos {
        (**self).pos()
    }
}

/// Read-only view of the host's voxel grid.
///
/// Searches only ever walk one offset at a time and compare materials, so
/// this is all a host has to provide. Both methods must be deterministic
/// functions of the grid's current state.
///
/// Space outside any loaded region should come back as a cell whose
/// material never equals a real search target; searches treat it like any
/// other mismatch.
pub trait VoxelGrid {
    /// Handle to a cell in this grid.
    type Cell: Voxel;

    /// Material classifier. Compared with exact equality.
    type Material: Eq + Debug;

    /// The cell one `offset` step away from `cell`.
    fn neighbour(&self, cell: &Self::Cell, offset: Offset) -> Result<Self::Cell, GridError>;

    /// The current material of `cell`.
    fn material(&self, cell: &Self::Cell) -> Result<Self::Material, GridError>;
}

impl<G: VoxelGrid + ?Sized> VoxelGrid for &G {
    type Cell = G::Cell;
    type Material = G::Material;

    fn neighbour(&self, cell: &Self::Cell, offset: Offset) -> Result<Self::Cell, GridError> {
        (**self).neighbour(cell, offset)
    }

    fn material(&self, cell: &Self::Cell) -> Result<Self::Material, GridError> {
        (**self).material(cell)
    }
}
