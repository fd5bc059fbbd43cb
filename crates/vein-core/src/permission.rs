//! The caller-supplied permission capability.
//!
//! Any `Fn(&C) -> bool` closure is a [`PermissionCheck`]. Checks that can
//! fail (a region service lookup, say) wrap a
//! `Fn(&C) -> Result<bool, PermissionError>` in [`Fallible`].

use crate::error::PermissionError;

/// Decides whether a search may include a cell.
///
/// Must be side-effect free with respect to the grid. Takes `&self`, so a
/// single check can serve several searches.
pub trait PermissionCheck<C> {
    /// `Ok(true)` if the cell may be included.
    fn permits(&self, cell: &C) -> Result<bool, PermissionError>;
}

impl<C, F> PermissionCheck<C> for F
where
    F: Fn(&C) -> bool + ?Sized,
{
    fn permits(&self, cell: &C) -> Result<bool, PermissionError> {
        Ok(self(cell))
    }
}

/// Adapter for permission checks that can fail.
///
/// # Examples
///
/// ```
/// use vein_core::{BlockPos, Fallible, PermissionCheck, PermissionError};
///
/// let below_build_limit = Fallible(|pos: &BlockPos| {
///     if pos.y > 320 {
///         return Err(PermissionError::CheckFailed {
///             pos: *pos,
///             reason: "outside world height".into(),
///         });
///     }
///     Ok(pos.y >= 0)
/// });
/// assert_eq!(below_build_limit.permits(&BlockPos::new(0, 10, 0)), Ok(true));
/// assert!(below_build_limit.permits(&BlockPos::new(0, 400, 0)).is_err());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Fallible<F: ?Sized>(pub F);

impl<C, F> PermissionCheck<C> for Fallible<F>
where
    F: Fn(&C) -> Result<bool, PermissionError> + ?Sized,
{
    fn permits(&self, cell: &C) -> Result<bool, PermissionError> {
        (self.0)(cell)
    }
}
