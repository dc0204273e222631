//! Pure odd-r neighbor geometry.
//!
//! Pointy-top hexes in the "odd-r" horizontal layout: odd rows are
//! staggered half a hex to the right, so the diagonal neighbor offsets
//! depend on row parity. Offsets are hoisted into per-parity tables
//! indexed by the `Direction` declaration order.

use hexfront_core::enums::Direction;
use hexfront_core::types::HexCoord;

/// (Δcol, Δrow) per direction for even rows, in `Direction::ALL` order:
/// W, NE, SE, E, SW, NW.
const EVEN_ROW_OFFSETS: [(i32, i32); 6] = [(-1, 0), (0, -1), (0, 1), (1, 0), (-1, 1), (-1, -1)];

/// (Δcol, Δrow) per direction for odd (staggered) rows.
const ODD_ROW_OFFSETS: [(i32, i32); 6] = [(-1, 0), (1, -1), (1, 1), (1, 0), (0, 1), (0, -1)];

/// Neighbor offset for a direction at the given row parity.
pub fn neighbor_offset(direction: Direction, odd_row: bool) -> (i32, i32) {
    let table = if odd_row {
        &ODD_ROW_OFFSETS
    } else {
        &EVEN_ROW_OFFSETS
    };
    table[direction as usize]
}

/// The coordinate one step from `coord` in `direction`.
///
/// Purely arithmetic; the result may be off any particular board.
pub fn neighbor_of(coord: HexCoord, direction: Direction) -> HexCoord {
    coord.offset_by(neighbor_offset(direction, coord.odd_row()))
}

/// Whether `coord` lies within a rows × cols board.
pub fn in_bounds(coord: HexCoord, rows: u32, cols: u32) -> bool {
    coord.col >= 0 && coord.col < cols as i32 && coord.row >= 0 && coord.row < rows as i32
}

/// Whether stepping from `coord` in `direction` stays on the board.
pub fn is_move_valid(coord: HexCoord, direction: Direction, rows: u32, cols: u32) -> bool {
    in_bounds(neighbor_of(coord, direction), rows, cols)
}
