//! Grain behavior - one falling particle against the occupancy set
//!
//! Per step: abyss check first, then the first free cell of
//! down / down-left / down-right, otherwise settle in place.

use crate::domain::coord::Coordinate;
use crate::spatial::occupancy::OccupancyGrid;

/// Candidate offsets in priority order: down, down-left, down-right.
pub const FALL_CANDIDATES: [(i32, i32); 3] = [(0, 1), (-1, 1), (1, 1)];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrainState {
    Falling,
    Settled,
    Lost,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Moved(Coordinate),
    /// Came to rest at this cell; the caller owns inserting it.
    Settled(Coordinate),
    /// Fell past the abyss row from this cell.
    Lost(Coordinate),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grain {
    position: Coordinate,
    state: GrainState,
}

impl Grain {
    pub fn spawn(at: Coordinate) -> Self {
        Self { position: at, state: GrainState::Falling }
    }

    #[inline]
    pub fn position(&self) -> Coordinate {
        self.position
    }

    #[inline]
    pub fn state(&self) -> GrainState {
        self.state
    }

    #[inline]
    pub fn is_falling(&self) -> bool {
        self.state == GrainState::Falling
    }

    /// First free candidate below `from`, if any.
    pub fn next_cell(grid: &OccupancyGrid, from: Coordinate) -> Option<Coordinate> {
        FALL_CANDIDATES
            .iter()
            .map(|&(dx, dy)| from.offset(dx, dy))
            .find(|&cell| !grid.contains(cell))
    }

    /// Evaluate one movement decision. Terminal grains are left untouched and
    /// report their final transition again.
    pub fn advance(&mut self, grid: &OccupancyGrid, abyss_row: i32) -> Transition {
        match self.state {
            GrainState::Settled => return Transition::Settled(self.position),
            GrainState::Lost => return Transition::Lost(self.position),
            GrainState::Falling => {}
        }

        if self.position.y > abyss_row {
            self.state = GrainState::Lost;
            return Transition::Lost(self.position);
        }

        match Self::next_cell(grid, self.position) {
            Some(cell) => {
                self.position = cell;
                Transition::Moved(cell)
            }
            None => {
                self.state = GrainState::Settled;
                Transition::Settled(self.position)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    #[test]
    fn straight_down_wins_over_down_left() {
        let grid = OccupancyGrid::new();
        let mut grain = Grain::spawn(c(5, 5));
        assert_eq!(grain.advance(&grid, 100), Transition::Moved(c(5, 6)));
    }

    #[test]
    fn down_left_is_tried_before_down_right() {
        let grid = OccupancyGrid::from_walls([c(5, 6)]);
        let mut grain = Grain::spawn(c(5, 5));
        assert_eq!(grain.advance(&grid, 100), Transition::Moved(c(4, 6)));
    }

    #[test]
    fn down_right_is_the_last_resort() {
        let grid = OccupancyGrid::from_walls([c(5, 6), c(4, 6)]);
        let mut grain = Grain::spawn(c(5, 5));
        assert_eq!(grain.advance(&grid, 100), Transition::Moved(c(6, 6)));
    }

    #[test]
    fn settles_when_all_three_are_blocked() {
        let grid = OccupancyGrid::from_walls([c(4, 6), c(5, 6), c(6, 6)]);
        let mut grain = Grain::spawn(c(5, 5));
        assert_eq!(grain.advance(&grid, 100), Transition::Settled(c(5, 5)));
        assert_eq!(grain.state(), GrainState::Settled);
        // terminal: further calls do not move it
        assert_eq!(grain.advance(&grid, 100), Transition::Settled(c(5, 5)));
    }

    #[test]
    fn abyss_check_precedes_settlement() {
        let grid = OccupancyGrid::from_walls([c(4, 11), c(5, 11), c(6, 11)]);
        let mut grain = Grain::spawn(c(5, 10));
        assert_eq!(grain.advance(&grid, 9), Transition::Lost(c(5, 10)));
        assert_eq!(grain.state(), GrainState::Lost);
    }

    #[test]
    fn grain_on_the_abyss_row_still_moves() {
        let grid = OccupancyGrid::new();
        let mut grain = Grain::spawn(c(0, 9));
        assert_eq!(grain.advance(&grid, 9), Transition::Moved(c(0, 10)));
        assert_eq!(grain.advance(&grid, 9), Transition::Lost(c(0, 10)));
    }
}
