//! Grid positions, neighbour offsets, and floating-point reference points.

use std::fmt;
use std::ops::Neg;

/// Integer position of a single cell in the voxel grid.
///
/// Ordering is x-then-y-then-z, which gives a stable canonical order for
/// sorted output and test assertions. Equality is coordinate identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct BlockPos {
    /// East/west axis.
    pub x: i32,
    /// Vertical axis.
    pub y: i32,
    /// North/south axis.
    pub z: i32,
}

impl BlockPos {
    /// The grid origin `(0, 0, 0)`.
    pub const ORIGIN: Self = Self::new(0, 0, 0);

    /// Create a position from its three coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The position one `offset` step away.
    ///
    /// Uses wrapping arithmetic: probing past `i32::MAX` lands on the far
    /// side of the coordinate space instead of panicking. Host grids never
    /// hold material out there, so such probes fail the material check.
    pub const fn offset(self, offset: Offset) -> Self {
        Self {
            x: self.x.wrapping_add(offset.dx),
            y: self.y.wrapping_add(offset.dy),
            z: self.z.wrapping_add(offset.dz),
        }
    }

    /// Centre of the cell: every coordinate plus `0.5`.
    pub fn center(self) -> Point3 {
        Point3::new(
            f64::from(self.x) + 0.5,
            f64::from(self.y) + 0.5,
            f64::from(self.z) + 0.5,
        )
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<[i32; 3]> for BlockPos {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(i32, i32, i32)> for BlockPos {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

/// A relative step `(dx, dy, dz)` between two cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Offset {
    /// Step along x.
    pub dx: i32,
    /// Step along y.
    pub dy: i32,
    /// Step along z.
    pub dz: i32,
}

impl Offset {
    /// Create an offset from its three components.
    pub const fn new(dx: i32, dy: i32, dz: i32) -> Self {
        Self { dx, dy, dz }
    }

    /// Returns `true` for `(0, 0, 0)`.
    pub const fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0 && self.dz == 0
    }

    /// Returns `true` if the step stays in the horizontal plane (`dy == 0`).
    pub const fn is_planar(self) -> bool {
        self.dy == 0
    }

    /// Number of axes the step moves along (1 = face, 2 = edge, 3 = corner).
    pub const fn axes_moved(self) -> u32 {
        (self.dx != 0) as u32 + (self.dy != 0) as u32 + (self.dz != 0) as u32
    }
}

impl Neg for Offset {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.dx, -self.dy, -self.dz)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+}, {:+})", self.dx, self.dy, self.dz)
    }
}

/// A point in continuous world space, typically an observer's position.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point3 {
    /// East/west coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// North/south coordinate.
    pub z: f64,
}

impl Point3 {
    /// Create a point from its three coordinates.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl From<[f64; 3]> for Point3 {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

/// A block position converts to its cell centre.
impl From<BlockPos> for Point3 {
    fn from(pos: BlockPos) -> Self {
        pos.center()
    }
}
