//! Board topology for the Royal Game of Ur.
//!
//! The 20 playable cells are enumerated with stable string identifiers, laid
//! out on a 3x8 grid with four non-playable gaps. Each player traverses the
//! board along a fixed 14-step path; the middle column is shared by both
//! paths, the outer lanes are private.

/// Number of slots in the 3x8 grid, including the four gaps.
pub const LAYOUT_SLOTS: usize = 24;

/// Number of playable cells on the board.
pub const CELL_COUNT: usize = 20;

/// Length of each player's path across the board.
pub const PATH_LEN: usize = 14;

/// Pieces per player; a player wins by bearing all of them off.
pub const PIECES_PER_PLAYER: usize = 7;

/// One of the two seats in a match.
///
/// The discriminants match the wire encoding (player 1 / player 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    /// Returns the other seat.
    pub const fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the wire number (1 or 2).
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the seat for a wire number.
    pub fn from_number(n: u8) -> Option<Player> {
        match n {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    /// Zero-based index for array storage.
    pub const fn index(self) -> usize {
        (self as u8 - 1) as usize
    }

    /// Returns this player's path as layout-slot indices, entry square first.
    pub const fn path(self) -> &'static [usize; PATH_LEN] {
        match self {
            Player::One => &PLAYER1_PATH,
            Player::Two => &PLAYER2_PATH,
        }
    }
}

/// A playable cell on the board.
///
/// Variants are grouped by lane: each player's private lane (`p1-*`/`p2-*`)
/// and the shared middle lane (`c-*`). The `#[repr(u8)]` attribute enables
/// use as an array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    P1Lane1 = 0,
    P1Lane2 = 1,
    P1Lane3 = 2,
    P1Lane4 = 3,
    P1Lane5 = 4,
    P1Lane6 = 5,
    P2Lane1 = 6,
    P2Lane2 = 7,
    P2Lane3 = 8,
    P2Lane4 = 9,
    P2Lane5 = 10,
    P2Lane6 = 11,
    Mid1 = 12,
    Mid2 = 13,
    Mid3 = 14,
    Mid4 = 15,
    Mid5 = 16,
    Mid6 = 17,
    Mid7 = 18,
    Mid8 = 19,
}

/// All playable cells in index order.
pub const ALL_CELLS: [Cell; CELL_COUNT] = [
    Cell::P1Lane1, Cell::P1Lane2, Cell::P1Lane3, Cell::P1Lane4,
    Cell::P1Lane5, Cell::P1Lane6,
    Cell::P2Lane1, Cell::P2Lane2, Cell::P2Lane3, Cell::P2Lane4,
    Cell::P2Lane5, Cell::P2Lane6,
    Cell::Mid1, Cell::Mid2, Cell::Mid3, Cell::Mid4,
    Cell::Mid5, Cell::Mid6, Cell::Mid7, Cell::Mid8,
];

impl Cell {
    /// Returns the stable string identifier used on the wire.
    pub const fn id(self) -> &'static str {
        match self {
            Cell::P1Lane1 => "p1-1",
            Cell::P1Lane2 => "p1-2",
            Cell::P1Lane3 => "p1-3",
            Cell::P1Lane4 => "p1-4",
            Cell::P1Lane5 => "p1-5",
            Cell::P1Lane6 => "p1-6",
            Cell::P2Lane1 => "p2-1",
            Cell::P2Lane2 => "p2-2",
            Cell::P2Lane3 => "p2-3",
            Cell::P2Lane4 => "p2-4",
            Cell::P2Lane5 => "p2-5",
            Cell::P2Lane6 => "p2-6",
            Cell::Mid1 => "c-1",
            Cell::Mid2 => "c-2",
            Cell::Mid3 => "c-3",
            Cell::Mid4 => "c-4",
            Cell::Mid5 => "c-5",
            Cell::Mid6 => "c-6",
            Cell::Mid7 => "c-7",
            Cell::Mid8 => "c-8",
        }
    }

    /// Parses a cell from its string identifier.
    pub fn from_id(id: &str) -> Option<Cell> {
        ALL_CELLS.iter().copied().find(|c| c.id() == id)
    }

    /// Returns true if this cell is a rosette.
    ///
    /// Landing on a rosette grants an extra turn, and a piece standing on
    /// one cannot be captured.
    pub const fn is_rosette(self) -> bool {
        matches!(
            self,
            Cell::P1Lane4 | Cell::P2Lane4 | Cell::Mid4 | Cell::P1Lane6 | Cell::P2Lane6
        )
    }
}

/// The fixed 3x8 grid, row-major from the top. `None` slots are the gaps
/// beside the narrow bridge of the middle lane.
pub const BOARD_LAYOUT: [Option<Cell>; LAYOUT_SLOTS] = [
    Some(Cell::P1Lane4), Some(Cell::Mid1), Some(Cell::P2Lane4),
    Some(Cell::P1Lane3), Some(Cell::Mid2), Some(Cell::P2Lane3),
    Some(Cell::P1Lane2), Some(Cell::Mid3), Some(Cell::P2Lane2),
    Some(Cell::P1Lane1), Some(Cell::Mid4), Some(Cell::P2Lane1),
    None,                Some(Cell::Mid5), None,
    None,                Some(Cell::Mid6), None,
    Some(Cell::P1Lane6), Some(Cell::Mid7), Some(Cell::P2Lane6),
    Some(Cell::P1Lane5), Some(Cell::Mid8), Some(Cell::P2Lane5),
];

/// Player 1's traversal order through `BOARD_LAYOUT`.
pub const PLAYER1_PATH: [usize; PATH_LEN] = [9, 6, 3, 0, 1, 4, 7, 10, 13, 16, 19, 22, 21, 18];

/// Player 2's traversal order through `BOARD_LAYOUT`.
pub const PLAYER2_PATH: [usize; PATH_LEN] = [11, 8, 5, 2, 1, 4, 7, 10, 13, 16, 19, 22, 23, 20];

/// Resolves a path position (0..14) to its cell for the given player.
///
/// Positions are only ever produced by validated game logic; an
/// out-of-range position is a programming error and panics.
pub fn cell_at(player: Player, pos: usize) -> Cell {
    let slot = player.path()[pos];
    BOARD_LAYOUT[slot].expect("path slots always reference playable cells")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_has_twenty_playable_cells() {
        let playable = BOARD_LAYOUT.iter().filter(|s| s.is_some()).count();
        assert_eq!(playable, CELL_COUNT);
        assert_eq!(BOARD_LAYOUT.len(), LAYOUT_SLOTS);
    }

    #[test]
    fn layout_cells_are_unique() {
        for (i, a) in BOARD_LAYOUT.iter().enumerate() {
            for (j, b) in BOARD_LAYOUT.iter().enumerate() {
                if i != j && a.is_some() {
                    assert_ne!(a, b, "cell repeated at slots {} and {}", i, j);
                }
            }
        }
    }

    #[test]
    fn cell_id_roundtrip() {
        for cell in ALL_CELLS {
            assert_eq!(Cell::from_id(cell.id()), Some(cell));
        }
        assert_eq!(Cell::from_id("c-9"), None);
        assert_eq!(Cell::from_id(""), None);
    }

    #[test]
    fn paths_resolve_to_playable_cells() {
        for player in [Player::One, Player::Two] {
            for pos in 0..PATH_LEN {
                // Panics on a gap, which would be a broken path table.
                let _ = cell_at(player, pos);
            }
        }
    }

    #[test]
    fn paths_share_exactly_the_middle_lane() {
        for pos in 4..12 {
            assert_eq!(
                cell_at(Player::One, pos),
                cell_at(Player::Two, pos),
                "war zone should overlap at position {}",
                pos
            );
        }
        for pos in (0..4).chain(12..PATH_LEN) {
            assert_ne!(cell_at(Player::One, pos), cell_at(Player::Two, pos));
        }
    }

    #[test]
    fn private_lanes_belong_to_their_player() {
        assert_eq!(cell_at(Player::One, 0), Cell::P1Lane1);
        assert_eq!(cell_at(Player::One, 3), Cell::P1Lane4);
        assert_eq!(cell_at(Player::One, 13), Cell::P1Lane6);
        assert_eq!(cell_at(Player::Two, 0), Cell::P2Lane1);
        assert_eq!(cell_at(Player::Two, 13), Cell::P2Lane6);
    }

    #[test]
    fn five_rosettes() {
        let rosettes: Vec<Cell> = ALL_CELLS.iter().copied().filter(|c| c.is_rosette()).collect();
        assert_eq!(rosettes.len(), 5);
        assert!(Cell::Mid4.is_rosette());
        assert!(!Cell::Mid5.is_rosette());
    }

    #[test]
    fn rosettes_sit_at_the_same_path_positions_for_both_players() {
        for player in [Player::One, Player::Two] {
            let positions: Vec<usize> = (0..PATH_LEN)
                .filter(|&p| cell_at(player, p).is_rosette())
                .collect();
            assert_eq!(positions, vec![3, 7, 13]);
        }
    }

    #[test]
    fn player_numbering() {
        assert_eq!(Player::One.number(), 1);
        assert_eq!(Player::Two.number(), 2);
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::from_number(1), Some(Player::One));
        assert_eq!(Player::from_number(3), None);
        assert_eq!(Player::One.index(), 0);
        assert_eq!(Player::Two.index(), 1);
    }
}
