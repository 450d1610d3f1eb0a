//! Conway's B3/S23 rule and the Moore neighbourhood.

/// Offsets of the eight Moore neighbours, column by column.
pub const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Next state of a cell given its current state and live-neighbour count.
///
/// A live cell survives with two or three neighbours; a dead cell is born
/// with exactly three.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2 | 3) => true,
        (true, _) => false,
        (false, 3) => true,
        (false, _) => false,
    }
}
