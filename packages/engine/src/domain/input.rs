//! Wall input parser
//!
//! One wall path per line, vertices as `x,y` joined by ` -> `:
//! `498,4 -> 498,6 -> 496,6`

use crate::core::error::ParseError;
use crate::domain::coord::{Coordinate, WallPath};

const VERTEX_SEPARATOR: &str = "->";

/// Two-path sample structure. 24 grains settle before the first one is lost.
pub const SAMPLE_INPUT: &str = "498,4 -> 498,6 -> 496,6\n503,4 -> 502,4 -> 502,9 -> 494,9";

pub fn parse_wall_paths(text: &str) -> Result<Vec<WallPath>, ParseError> {
    let mut paths = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        paths.push(parse_line(line, idx + 1)?);
    }

    if paths.is_empty() {
        return Err(ParseError::Empty);
    }
    Ok(paths)
}

fn parse_line(line: &str, line_no: usize) -> Result<WallPath, ParseError> {
    let vertices = line
        .split(VERTEX_SEPARATOR)
        .map(|token| parse_coordinate(token.trim(), line_no))
        .collect::<Result<Vec<_>, _>>()?;

    let found = vertices.len();
    WallPath::new(vertices).ok_or(ParseError::TooFewVertices { line: line_no, found })
}

fn parse_coordinate(token: &str, line_no: usize) -> Result<Coordinate, ParseError> {
    let malformed = || ParseError::MalformedCoordinate {
        line: line_no,
        token: token.to_string(),
    };

    let (x, y) = token.split_once(',').ok_or_else(malformed)?;
    let x = x.trim().parse::<i32>().map_err(|_| malformed())?;
    let y = y.trim().parse::<i32>().map_err(|_| malformed())?;
    Ok(Coordinate::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sample_input() {
        let paths = parse_wall_paths(SAMPLE_INPUT).unwrap();
        assert_eq!(paths.len(), 2);
        assert_eq!(
            paths[0].vertices(),
            &[Coordinate::new(498, 4), Coordinate::new(498, 6), Coordinate::new(496, 6)]
        );
        assert_eq!(paths[1].vertices().len(), 4);
    }

    #[test]
    fn skips_blank_lines_and_trailing_newline() {
        let paths = parse_wall_paths("\n0,10 -> 10,10\n\n").unwrap();
        assert_eq!(paths.len(), 1);
    }

    #[test]
    fn accepts_negative_coordinates() {
        let paths = parse_wall_paths("-3,2 -> -3,-1").unwrap();
        assert_eq!(paths[0].vertices()[1], Coordinate::new(-3, -1));
    }

    #[test]
    fn reports_malformed_token_with_line_number() {
        let err = parse_wall_paths("0,1 -> 0,4\n2,2 -> 2;5").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedCoordinate { line: 2, token: "2;5".into() }
        );

        let err = parse_wall_paths("1,2,3 -> 1,5").unwrap_err();
        assert!(matches!(err, ParseError::MalformedCoordinate { line: 1, .. }));
    }

    #[test]
    fn single_vertex_line_is_rejected() {
        let err = parse_wall_paths("4,4").unwrap_err();
        assert_eq!(err, ParseError::TooFewVertices { line: 1, found: 1 });
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(parse_wall_paths("  \n \n").unwrap_err(), ParseError::Empty);
    }
}
