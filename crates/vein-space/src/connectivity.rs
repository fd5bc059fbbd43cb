//! Connectivity modes and their constant neighbour-offset tables.
//!
//! Table order is part of the contract: a breadth-first search probes
//! offsets in exactly this order, so it fixes discovery order. It never
//! changes which cells an exhaustive search finds.

use crate::error::SpaceError;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;
use vein_core::{BlockPos, Offset};

/// 4-connected offsets: east, west, south, north. All have `dy == 0`.
pub const OFFSETS_4: [Offset; 4] = [
    Offset::new(1, 0, 0),
    Offset::new(-1, 0, 0),
    Offset::new(0, 0, 1),
    Offset::new(0, 0, -1),
];

/// 6-connected offsets: north, south, east, west, up, down.
pub const OFFSETS_6: [Offset; 6] = [
    Offset::new(0, 0, -1),
    Offset::new(0, 0, 1),
    Offset::new(1, 0, 0),
    Offset::new(-1, 0, 0),
    Offset::new(0, 1, 0),
    Offset::new(0, -1, 0),
];

/// 26-connected offsets: every step in `{-1, 0, 1}³` except `(0, 0, 0)`,
/// in lexicographic `(dx, dy, dz)` order.
pub const OFFSETS_26: [Offset; 26] = {
    let mut table = [Offset::new(0, 0, 0); 26];
    let mut i = 0;
    let mut dx = -1;
    while dx <= 1 {
        let mut dy = -1;
        while dy <= 1 {
            let mut dz = -1;
            while dz <= 1 {
                if dx != 0 || dy != 0 || dz != 0 {
                    table[i] = Offset::new(dx, dy, dz);
                    i += 1;
                }
                dz += 1;
            }
            dy += 1;
        }
        dx += 1;
    }
    table
};

/// Which cells count as neighbours of a cell.
///
/// # Examples
///
/// ```
/// use vein_core::BlockPos;
/// use vein_space::Connectivity;
///
/// let origin = BlockPos::new(0, 64, 0);
/// assert_eq!(Connectivity::Four.neighbours(origin).len(), 4);
/// assert!(Connectivity::Four
///     .neighbours(origin)
///     .iter()
///     .all(|n| n.y == origin.y));
///
/// let mode: Connectivity = "26".parse().unwrap();
/// assert_eq!(mode.degree(), 26);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Cardinal directions in the horizontal plane (±x, ±z).
    Four,
    /// Face-adjacent cells in 3D (±x, ±y, ±z).
    Six,
    /// Face-, edge- and corner-adjacent cells in 3D.
    TwentySix,
}

impl Connectivity {
    /// Every connectivity, in ascending degree.
    pub const ALL: [Connectivity; 3] = [Self::Four, Self::Six, Self::TwentySix];

    /// The fixed, ordered offset table for this connectivity.
    pub const fn offsets(self) -> &'static [Offset] {
        match self {
            Self::Four => &OFFSETS_4,
            Self::Six => &OFFSETS_6,
            Self::TwentySix => &OFFSETS_26,
        }
    }

    /// Number of neighbours every cell has.
    pub const fn degree(self) -> usize {
        self.offsets().len()
    }

    /// Returns `true` if every neighbour lies in the same horizontal plane.
    pub const fn is_planar(self) -> bool {
        matches!(self, Self::Four)
    }

    /// Neighbour positions of `pos`, in table order.
    pub fn neighbours(self, pos: BlockPos) -> SmallVec<[BlockPos; 26]> {
        self.offsets().iter().map(|&o| pos.offset(o)).collect()
    }

    /// Canonical name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Self::Four => "four",
            Self::Six => "six",
            Self::TwentySix => "twenty_six",
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Connectivity {
    type Err = SpaceError;

    /// Accepts the degree (`"4"`), the canonical name (`"four"`), or the
    /// `_sided` form (`"four_sided"`). Case-insensitive; `-` reads as `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        let key = key.strip_suffix("_sided").unwrap_or(&key);
        match key {
            "4" | "four" => Ok(Self::Four),
            "6" | "six" => Ok(Self::Six),
            "26" | "twenty_six" | "twentysix" => Ok(Self::TwentySix),
            _ => Err(SpaceError::UnknownConnectivity { name: s.to_string() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn p(x: i32, y: i32, z: i32) -> BlockPos {
        BlockPos::new(x, y, z)
    }

    // ── Table shape ─────────────────────────────────────────────

    #[test]
    fn degrees() {
        assert_eq!(Connectivity::Four.degree(), 4);
        assert_eq!(Connectivity::Six.degree(), 6);
        assert_eq!(Connectivity::TwentySix.degree(), 26);
    }

    #[test]
    fn four_is_cardinal_in_plane() {
        let n = Connectivity::Four.neighbours(p(0, 0, 0));
        assert_eq!(n.as_slice(), &[p(1, 0, 0), p(-1, 0, 0), p(0, 0, 1), p(0, 0, -1)]);
    }

    #[test]
    fn six_order_is_north_south_east_west_up_down() {
        let n = Connectivity::Six.neighbours(p(10, 10, 10));
        assert_eq!(
            n.as_slice(),
            &[
                p(10, 10, 9),  // north
                p(10, 10, 11), // south
                p(11, 10, 10), // east
                p(9, 10, 10),  // west
                p(10, 11, 10), // up
                p(10, 9, 10),  // down
            ]
        );
    }

    #[test]
    fn twenty_six_is_lexicographic() {
        let table = Connectivity::TwentySix.offsets();
        assert_eq!(table[0], Offset::new(-1, -1, -1));
        assert_eq!(table[12], Offset::new(0, 0, -1));
        assert_eq!(table[13], Offset::new(0, 0, 1));
        assert_eq!(table[25], Offset::new(1, 1, 1));
        assert!(table.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn twenty_six_is_full_shell() {
        let table = Connectivity::TwentySix.offsets();
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    let o = Offset::new(dx, dy, dz);
                    assert_eq!(table.contains(&o), !o.is_zero(), "{o}");
                }
            }
        }
    }

    #[test]
    fn only_four_is_planar() {
        assert!(Connectivity::Four.is_planar());
        assert!(!Connectivity::Six.is_planar());
        assert!(!Connectivity::TwentySix.is_planar());
    }

    // ── Names ───────────────────────────────────────────────────

    #[test]
    fn parse_accepts_degree_name_and_sided_forms() {
        for (s, want) in [
            ("4", Connectivity::Four),
            ("FOUR_SIDED", Connectivity::Four),
            ("six", Connectivity::Six),
            ("six-sided", Connectivity::Six),
            (" 26 ", Connectivity::TwentySix),
            ("twenty_six", Connectivity::TwentySix),
            ("TWENTY_SIX_SIDED", Connectivity::TwentySix),
        ] {
            assert_eq!(s.parse::<Connectivity>(), Ok(want), "{s:?}");
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!(
            "8".parse::<Connectivity>(),
            Err(SpaceError::UnknownConnectivity { name: "8".into() })
        );
        assert!("".parse::<Connectivity>().is_err());
        assert!("sided".parse::<Connectivity>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for mode in Connectivity::ALL {
            assert_eq!(mode.to_string().parse::<Connectivity>(), Ok(mode));
        }
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_four() {
        compliance::run_full_compliance(Connectivity::Four);
    }

    #[test]
    fn compliance_six() {
        compliance::run_full_compliance(Connectivity::Six);
    }

    #[test]
    fn compliance_twenty_six() {
        compliance::run_full_compliance(Connectivity::TwentySix);
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_connectivity() -> impl Strategy<Value = Connectivity> {
        prop_oneof![
            Just(Connectivity::Four),
            Just(Connectivity::Six),
            Just(Connectivity::TwentySix),
        ]
    }

    proptest! {
        #[test]
        fn neighbours_symmetric(
            mode in arb_connectivity(),
            x in -1000i32..1000, y in -64i32..320, z in -1000i32..1000,
        ) {
            let pos = p(x, y, z);
            for nb in mode.neighbours(pos) {
                prop_assert!(
                    mode.neighbours(nb).contains(&pos),
                    "neighbour symmetry violated: {} in N({}) but {} not in N({})",
                    nb, pos, pos, nb,
                );
            }
        }

        #[test]
        fn four_never_leaves_plane(x in any::<i32>(), y in any::<i32>(), z in any::<i32>()) {
            let pos = p(x, y, z);
            prop_assert!(Connectivity::Four.neighbours(pos).iter().all(|n| n.y == y));
        }
    }
}
