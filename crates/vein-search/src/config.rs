//! Reusable flood-fill configuration and its validation errors.
//!
//! [`FloodFill`] bundles a connectivity, a result cap, and an allocation
//! hint. Build one with [`FloodFill::builder`], which validates the
//! settings once so each search does not have to.

use crate::flood::flood;
use crate::metrics::SearchMetrics;
use std::error::Error;
use std::fmt;
use vein_core::{PermissionCheck, SearchError, VoxelGrid};
use vein_space::{Connectivity, SpaceError};

/// Result cap used when the builder is not given one.
pub const DEFAULT_CAP: usize = 64;

/// Upper bound on the output capacity reserved before a search starts.
pub const DEFAULT_PREALLOC_LIMIT: usize = 64;

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`FloodFillBuilder::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No connectivity was chosen.
    MissingConnectivity,
    /// `prealloc_limit` was set to zero.
    ZeroPreallocLimit,
    /// A connectivity name could not be parsed.
    Space(SpaceError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingConnectivity => write!(f, "connectivity is required"),
            Self::ZeroPreallocLimit => write!(f, "prealloc_limit must be at least 1"),
            Self::Space(e) => write!(f, "space: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── FloodFill ──────────────────────────────────────────────────────

/// A validated flood-fill configuration.
///
/// Immutable once built; one value can drive any number of searches over
/// any number of grids.
///
/// # Examples
///
/// ```
/// use vein_core::BlockPos;
/// use vein_search::FloodFill;
/// use vein_space::Connectivity;
/// use vein_test_utils::{allow_all, Material, MemoryGrid};
///
/// let fill = FloodFill::builder()
///     .connectivity(Connectivity::TwentySix)
///     .cap(16)
///     .build()
///     .unwrap();
///
/// let grid = MemoryGrid::cuboid(BlockPos::new(0, 0, 0), BlockPos::new(3, 3, 3), Material::Stone);
/// let (cells, metrics) = fill
///     .run_with_metrics(&grid, Some(&BlockPos::new(0, 0, 0)), &allow_all)
///     .unwrap();
/// assert_eq!(cells.len(), 16);
/// assert!(metrics.truncated);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FloodFill {
    connectivity: Connectivity,
    cap: usize,
    prealloc_limit: usize,
}

impl FloodFill {
    /// Create a new builder. Connectivity is required; everything else
    /// has a default.
    pub fn builder() -> FloodFillBuilder {
        FloodFillBuilder {
            connectivity: None,
            cap: DEFAULT_CAP,
            prealloc_limit: DEFAULT_PREALLOC_LIMIT,
            parse_error: None,
        }
    }

    /// A configuration with the given connectivity and cap and the
    /// default allocation hint. Cannot fail.
    pub fn new(connectivity: Connectivity, cap: usize) -> Self {
        Self {
            connectivity,
            cap,
            prealloc_limit: DEFAULT_PREALLOC_LIMIT,
        }
    }

    /// The neighbour topology.
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Maximum number of cells a search returns.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Upper bound on the capacity reserved before searching.
    pub fn prealloc_limit(&self) -> usize {
        self.prealloc_limit
    }

    /// Run a search. See [`search`](crate::search) for semantics.
    pub fn run<G, P>(
        &self,
        grid: &G,
        origin: Option<&G::Cell>,
        permission: &P,
    ) -> Result<Vec<G::Cell>, SearchError>
    where
        G: VoxelGrid + ?Sized,
        P: PermissionCheck<G::Cell> + ?Sized,
    {
        let mut metrics = SearchMetrics::default();
        self.run_into(grid, origin, permission, &mut metrics)
    }

    /// Run a search and report how much work it did.
    pub fn run_with_metrics<G, P>(
        &self,
        grid: &G,
        origin: Option<&G::Cell>,
        permission: &P,
    ) -> Result<(Vec<G::Cell>, SearchMetrics), SearchError>
    where
        G: VoxelGrid + ?Sized,
        P: PermissionCheck<G::Cell> + ?Sized,
    {
        let mut metrics = SearchMetrics::default();
        let cells = self.run_into(grid, origin, permission, &mut metrics)?;
        Ok((cells, metrics))
    }

    fn run_into<G, P>(
        &self,
        grid: &G,
        origin: Option<&G::Cell>,
        permission: &P,
        metrics: &mut SearchMetrics,
    ) -> Result<Vec<G::Cell>, SearchError>
    where
        G: VoxelGrid + ?Sized,
        P: PermissionCheck<G::Cell> + ?Sized,
    {
        flood(
            grid,
            self.connectivity,
            origin,
            permission,
            self.cap,
            self.cap.min(self.prealloc_limit),
            metrics,
        )
    }
}

// ── FloodFillBuilder ───────────────────────────────────────────────

/// Builder for [`FloodFill`].
#[derive(Clone, Debug)]
pub struct FloodFillBuilder {
    connectivity: Option<Connectivity>,
    cap: usize,
    prealloc_limit: usize,
    parse_error: Option<SpaceError>,
}

impl FloodFillBuilder {
    /// Set the neighbour topology (required).
    pub fn connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = Some(connectivity);
        self.parse_error = None;
        self
    }

    /// Set the neighbour topology by name, as found in host configuration
    /// (`"6"`, `"six"`, `"SIX_SIDED"`, ...). A bad name is reported by
    /// [`build`](Self::build).
    pub fn connectivity_name(mut self, name: &str) -> Self {
        match name.parse::<Connectivity>() {
            Ok(c) => {
                self.connectivity = Some(c);
                self.parse_error = None;
            }
            Err(e) => self.parse_error = Some(e),
        }
        self
    }

    /// Set the result cap (default: [`DEFAULT_CAP`]). Zero is allowed and
    /// makes every search return nothing.
    pub fn cap(mut self, cap: usize) -> Self {
        self.cap = cap;
        self
    }

    /// Set the upper bound on capacity reserved before a search
    /// (default: [`DEFAULT_PREALLOC_LIMIT`]). Must be >= 1.
    pub fn prealloc_limit(mut self, limit: usize) -> Self {
        self.prealloc_limit = limit;
        self
    }

    /// Build the configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - the last connectivity name given could not be parsed
    /// - no connectivity was set
    /// - `prealloc_limit` is zero
    pub fn build(self) -> Result<FloodFill, ConfigError> {
        if let Some(e) = self.parse_error {
            return Err(e.into());
        }
        let connectivity = self.connectivity.ok_or(ConfigError::MissingConnectivity)?;
        if self.prealloc_limit == 0 {
            return Err(ConfigError::ZeroPreallocLimit);
        }
        Ok(FloodFill {
            connectivity,
            cap: self.cap,
            prealloc_limit: self.prealloc_limit,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vein_core::BlockPos;
    use vein_test_utils::{allow_all, Material, MemoryGrid};

    #[test]
    fn builder_defaults() {
        let fill = FloodFill::builder()
            .connectivity(Connectivity::Six)
            .build()
            .unwrap();
        assert_eq!(fill.connectivity(), Connectivity::Six);
        assert_eq!(fill.cap(), DEFAULT_CAP);
        assert_eq!(fill.prealloc_limit(), DEFAULT_PREALLOC_LIMIT);
        assert_eq!(fill, FloodFill::new(Connectivity::Six, DEFAULT_CAP));
    }

    #[test]
    fn missing_connectivity_rejected() {
        assert_eq!(
            FloodFill::builder().cap(5).build(),
            Err(ConfigError::MissingConnectivity)
        );
    }

    #[test]
    fn zero_prealloc_rejected() {
        let err = FloodFill::builder()
            .connectivity(Connectivity::Four)
            .prealloc_limit(0)
            .build()
            .unwrap_err();
        assert_eq!(err, ConfigError::ZeroPreallocLimit);
        assert_eq!(err.to_string(), "prealloc_limit must be at least 1");
    }

    #[test]
    fn connectivity_by_name() {
        let fill = FloodFill::builder()
            .connectivity_name("TWENTY_SIX_SIDED")
            .build()
            .unwrap();
        assert_eq!(fill.connectivity(), Connectivity::TwentySix);
    }

    #[test]
    fn bad_connectivity_name_reported() {
        let err = FloodFill::builder()
            .connectivity(Connectivity::Six)
            .connectivity_name("hex")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Space(SpaceError::UnknownConnectivity { name: "hex".into() })
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn later_connectivity_clears_parse_error() {
        let fill = FloodFill::builder()
            .connectivity_name("hex")
            .connectivity(Connectivity::Four)
            .build();
        assert!(fill.is_ok());
    }

    #[test]
    fn run_matches_free_function() {
        let grid =
            MemoryGrid::cuboid(BlockPos::new(0, 0, 0), BlockPos::new(4, 4, 4), Material::Dirt);
        let origin = BlockPos::new(2, 2, 2);
        let fill = FloodFill::new(Connectivity::Six, 40);
        let via_config = fill.run(&grid, Some(&origin), &allow_all).unwrap();
        let direct =
            crate::search(&grid, Connectivity::Six, Some(&origin), &allow_all, 40).unwrap();
        assert_eq!(via_config, direct);
    }

    #[test]
    fn zero_cap_config_returns_nothing() {
        let grid =
            MemoryGrid::cuboid(BlockPos::new(0, 0, 0), BlockPos::new(1, 1, 1), Material::Dirt);
        let fill = FloodFill::builder()
            .connectivity(Connectivity::Six)
            .cap(0)
            .build()
            .unwrap();
        let (cells, metrics) = fill
            .run_with_metrics(&grid, Some(&BlockPos::ORIGIN), &allow_all)
            .unwrap();
        assert!(cells.is_empty());
        assert_eq!(metrics, SearchMetrics::default());
    }
}
