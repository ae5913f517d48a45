use crate::engine::Board;
use crate::error::ParseError;
use std::fs;
use std::path::Path;

/// Parses a board from its text form.
///
/// The input is a whitespace-separated stream of integers: first the
/// dimension `n`, then the `n²` labels row by row, with `0` for the blank.
/// Line breaks carry no meaning, so the grid may be laid out freely.
///
/// # Arguments
/// * `s`: the text to parse.
///
/// # Returns
/// * `Ok(Board)` if the text holds exactly one valid board.
/// * `Err(ParseError)` if:
///     - the input contains no tokens,
///     - a token is not a non-negative integer,
///     - fewer than `n²` labels follow the dimension,
///     - tokens remain after the last label,
///     - the labels do not form a valid board.
///
/// # Examples
/// ```
/// use puzzle_solver::utils::board_from_str;
///
/// let board = board_from_str("3\n 0  1  3\n 4  2  5\n 7  8  6\n").unwrap();
/// assert_eq!(board.dimension(), 3);
/// assert_eq!(board.tile(0, 2), 3);
///
/// assert!(board_from_str("2\n1 2\n3").is_err());
/// assert!(board_from_str("2\n1 2\n3 x").is_err());
/// ```
pub fn board_from_str(s: &str) -> Result<Board, ParseError> {
    let mut tokens = s.split_whitespace().enumerate();

    let (_, first) = tokens.next().ok_or(ParseError::Empty)?;
    let dimension = parse_number(first, 0)? as usize;
    let expected = dimension.saturating_mul(dimension);

    // The dimension is untrusted input; don't let it size the allocation.
    let mut labels = Vec::with_capacity(expected.min(1 << 12));
    for (position, token) in tokens.by_ref().take(expected) {
        labels.push(parse_number(token, position)?);
    }

    if labels.len() < expected {
        return Err(ParseError::MissingTiles {
            expected,
            found: labels.len(),
        });
    }

    let trailing = tokens.count();
    if trailing > 0 {
        return Err(ParseError::TrailingTokens(trailing));
    }

    Ok(Board::from_tiles(dimension, labels)?)
}

/// Reads a file and parses its contents with `board_from_str`.
pub fn read_board_file(path: impl AsRef<Path>) -> Result<Board, ParseError> {
    let content = fs::read_to_string(path)?;
    board_from_str(&content)
}

fn parse_number(token: &str, position: usize) -> Result<u32, ParseError> {
    token.parse::<u32>().map_err(|_| ParseError::InvalidNumber {
        token: token.to_string(),
        position,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InvalidBoardError;

    #[test]
    fn test_board_from_str_valid() {
        let board = board_from_str("2\n1 2\n3 0\n").unwrap();
        assert!(board.is_goal());
        assert_eq!(board.dimension(), 2);
    }

    #[test]
    fn test_board_from_str_ignores_layout() {
        let spread = board_from_str("3 8 1 3 4 0 2 7 6 5").unwrap();
        let grid = board_from_str("3\n\n 8 1 3\n 4 0 2\n 7 6 5\n\n").unwrap();
        assert_eq!(spread, grid);
        assert_eq!(grid.manhattan(), 10);
    }

    #[test]
    fn test_board_from_str_round_trips_display() {
        let board = Board::scrambled(4, 25, 3).unwrap();
        let text = board.to_string();
        assert_eq!(board_from_str(&text).unwrap(), board);
    }

    #[test]
    fn test_board_from_str_empty_input() {
        assert!(matches!(board_from_str(""), Err(ParseError::Empty)));
        assert!(matches!(board_from_str("  \n\t "), Err(ParseError::Empty)));
    }

    #[test]
    fn test_board_from_str_invalid_number() {
        let result = board_from_str("2\n1 -2\n3 0");
        match result {
            Err(ParseError::InvalidNumber { token, position }) => {
                assert_eq!(token, "-2");
                assert_eq!(position, 2);
            }
            other => panic!("expected InvalidNumber, got {:?}", other),
        }
        assert!(board_from_str("three").unwrap_err().to_string().contains("'three'"));
    }

    #[test]
    fn test_board_from_str_missing_tiles() {
        let result = board_from_str("3\n1 2 3\n4 5 6\n7 8");
        assert!(matches!(
            result,
            Err(ParseError::MissingTiles {
                expected: 9,
                found: 8
            })
        ));
    }

    #[test]
    fn test_board_from_str_trailing_tokens() {
        let result = board_from_str("2\n1 2\n3 0\n4 5");
        assert!(matches!(result, Err(ParseError::TrailingTokens(2))));
    }

    #[test]
    fn test_board_from_str_invalid_board() {
        let result = board_from_str("2\n1 2\n2 0");
        assert!(matches!(
            result,
            Err(ParseError::InvalidBoard(InvalidBoardError::DuplicateLabel { label: 2, .. }))
        ));

        let result = board_from_str("1\n0");
        assert!(matches!(
            result,
            Err(ParseError::InvalidBoard(InvalidBoardError::DimensionTooSmall(1)))
        ));
    }

    #[test]
    fn test_read_board_file_missing() {
        let result = read_board_file("/definitely/not/a/board.txt");
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
