//! Wall rasterization - polyline vertices to solid grid cells
//!
//! Each consecutive vertex pair is filled inclusively. Diagonal pairs are
//! either rejected or filled with the legacy L-shape, per `DiagonalPolicy`.
//! Paths are independent; with `parallel` they are rasterized with Rayon and
//! merged, giving the same set as the sequential walk.

use std::collections::HashSet;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::core::error::GeometryError;
use crate::domain::config::DiagonalPolicy;
use crate::domain::coord::{Coordinate, WallPath};

/// Cells covered by the segment A -> B, in walk order (may repeat for LShape
/// with a zero-length axis; callers dedupe).
pub fn rasterize_segment(
    a: Coordinate,
    b: Coordinate,
    policy: DiagonalPolicy,
) -> Result<Vec<Coordinate>, GeometryError> {
    if let Some(&cell) = [a, b].iter().find(|v| !v.is_within_limit()) {
        return Err(GeometryError::OutOfRange { cell });
    }
    if a == b {
        return Ok(vec![a]);
    }

    if a.is_axis_aligned_with(b) {
        let (dx, dy) = ((b.x - a.x).signum(), (b.y - a.y).signum());
        let len = (b.x - a.x).abs().max((b.y - a.y).abs());
        return Ok((0..=len).map(|i| a.offset(dx * i, dy * i)).collect());
    }

    match policy {
        DiagonalPolicy::Reject => Err(GeometryError::DiagonalSegment { from: a, to: b }),
        DiagonalPolicy::LShape => Ok(l_shape_fill(a, b)),
    }
}

/// Legacy fill: A, the open run along A's row, the open run along A's
/// column, then B. The corner opposite A is never filled.
fn l_shape_fill(a: Coordinate, b: Coordinate) -> Vec<Coordinate> {
    let (dx, dy) = ((b.x - a.x).signum(), (b.y - a.y).signum());
    let h_len = (b.x - a.x).abs();
    let v_len = (b.y - a.y).abs();

    let mut cells = Vec::with_capacity((h_len + v_len + 1) as usize);
    cells.push(a);
    cells.extend((1..h_len).map(|i| a.offset(dx * i, 0)));
    cells.extend((1..v_len).map(|i| a.offset(0, dy * i)));
    cells.push(b);
    cells
}

pub fn rasterize_path(path: &WallPath, policy: DiagonalPolicy) -> Result<Vec<Coordinate>, GeometryError> {
    let mut cells = Vec::new();
    for (a, b) in path.segments() {
        cells.extend(rasterize_segment(a, b, policy)?);
    }
    Ok(cells)
}

/// Union of every path's cells, deduplicated.
pub fn rasterize_walls(paths: &[WallPath], policy: DiagonalPolicy) -> Result<HashSet<Coordinate>, GeometryError> {
    #[cfg(feature = "parallel")]
    {
        let per_path: Vec<Vec<Coordinate>> = paths
            .par_iter()
            .map(|path| rasterize_path(path, policy))
            .collect::<Result<_, _>>()?;
        Ok(per_path.into_iter().flatten().collect())
    }

    #[cfg(not(feature = "parallel"))]
    {
        let mut cells = HashSet::new();
        for path in paths {
            cells.extend(rasterize_path(path, policy)?);
        }
        Ok(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coord::COORD_LIMIT;
    use crate::domain::input::{parse_wall_paths, SAMPLE_INPUT};
    use proptest::prelude::*;

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn set(cells: &[(i32, i32)]) -> HashSet<Coordinate> {
        cells.iter().map(|&(x, y)| c(x, y)).collect()
    }

    #[test]
    fn horizontal_segment_is_inclusive() {
        let cells = rasterize_segment(c(2, 5), c(5, 5), DiagonalPolicy::Reject).unwrap();
        assert_eq!(cells, vec![c(2, 5), c(3, 5), c(4, 5), c(5, 5)]);
    }

    #[test]
    fn vertical_segment_walks_upward() {
        let cells = rasterize_segment(c(5, 5), c(5, 2), DiagonalPolicy::Reject).unwrap();
        assert_eq!(cells, vec![c(5, 5), c(5, 4), c(5, 3), c(5, 2)]);
    }

    #[test]
    fn zero_length_segment_is_one_cell() {
        let cells = rasterize_segment(c(7, 7), c(7, 7), DiagonalPolicy::Reject).unwrap();
        assert_eq!(cells, vec![c(7, 7)]);
    }

    #[test]
    fn diagonal_is_rejected_by_default() {
        let err = rasterize_segment(c(0, 0), c(3, 2), DiagonalPolicy::Reject).unwrap_err();
        assert_eq!(err, GeometryError::DiagonalSegment { from: c(0, 0), to: c(3, 2) });
    }

    #[test]
    fn diagonal_l_shape_matches_legacy_fill() {
        let cells = rasterize_segment(c(0, 0), c(3, 2), DiagonalPolicy::LShape).unwrap();
        let got: HashSet<_> = cells.into_iter().collect();
        assert_eq!(got, set(&[(0, 0), (1, 0), (2, 0), (0, 1), (3, 2)]));
        assert!(!got.contains(&c(3, 0)));
        assert!(!got.contains(&c(0, 2)));
    }

    #[test]
    fn sample_walls_rasterize_to_twenty_cells() {
        let paths = parse_wall_paths(SAMPLE_INPUT).unwrap();
        let cells = rasterize_walls(&paths, DiagonalPolicy::Reject).unwrap();
        // 3 + 2 on the first path, 2 + 5 + 8 (shared corners once) on the second
        assert_eq!(cells.len(), 20);
        assert!(cells.contains(&c(498, 5)));
        assert!(cells.contains(&c(494, 9)));
        assert!(cells.contains(&c(502, 7)));
    }

    #[test]
    fn vertices_past_the_limit_are_rejected() {
        let err = rasterize_segment(c(i32::MIN, 0), c(i32::MAX, 0), DiagonalPolicy::Reject).unwrap_err();
        assert_eq!(err, GeometryError::OutOfRange { cell: c(i32::MIN, 0) });

        let edge = rasterize_segment(c(COORD_LIMIT - 1, 0), c(COORD_LIMIT, 0), DiagonalPolicy::Reject).unwrap();
        assert_eq!(edge.len(), 2);
    }

    #[test]
    fn diagonal_in_any_path_fails_the_whole_set() {
        let paths = parse_wall_paths("0,0 -> 0,3\n5,5 -> 6,6").unwrap();
        assert!(rasterize_walls(&paths, DiagonalPolicy::Reject).is_err());
        assert!(rasterize_walls(&paths, DiagonalPolicy::LShape).is_ok());
    }

    fn arb_axis_path() -> impl Strategy<Value = WallPath> {
        let start = (-50i32..50, 0i32..50);
        let steps = prop::collection::vec((any::<bool>(), -10i32..=10), 1..8);
        (start, steps).prop_map(|((x, y), steps)| {
            let mut v = vec![Coordinate::new(x, y)];
            for (horizontal, d) in steps {
                let last = *v.last().unwrap();
                v.push(if horizontal { last.offset(d, 0) } else { last.offset(0, d) });
            }
            WallPath::new(v).unwrap()
        })
    }

    proptest! {
        #[test]
        fn rasterization_is_idempotent(paths in prop::collection::vec(arb_axis_path(), 1..6)) {
            let first = rasterize_walls(&paths, DiagonalPolicy::Reject).unwrap();
            let second = rasterize_walls(&paths, DiagonalPolicy::Reject).unwrap();
            prop_assert_eq!(&first, &second);
            for path in &paths {
                for v in path.vertices() {
                    prop_assert!(first.contains(v));
                }
            }
        }
    }
}
