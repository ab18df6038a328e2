use thiserror::Error;

/// Errors.
///    Error 1: Invalid color in a facelet string
///    Error 2: Invalid corner value
///    Error 3: Invalid edge value
///    Error 4: Invalid scramble string
///    Error 5: Invalid facelet string
///    Error 6: Facelet string is not a reachable cube
///    Error 7: Invalid cubie representation
///    Error 8: No solution within the configured phase depth limits
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid color value")]
    InvalidColor,
    #[error("Invalid corner value")]
    InvalidCorner,
    #[error("Invalid edge value")]
    InvalidEdge,
    #[error("Invalid scramble string")]
    InvalidScramble,
    #[error("Invalid facelet string")]
    InvalidFaceletString,
    #[error("Invalid facelet representation")]
    InvalidFaceletValue,
    #[error("Invalid cubie representation")]
    InvalidCubieValue,
    #[error("No solution exists for the given max_depth")]
    NoSolutionForMaxDepth,
}
