//! # thistlethwaite
//! `thistlethwaite` - crate for solving the 3x3 Rubik's cube with
//! [Thistlethwaite's four phase algorithm](https://www.jaapsch.net/puzzles/thistle.htm).
//!
//! The cube is driven down the subgroup chain G0 ⊃ G1 ⊃ G2 ⊃ G3 ⊃ {solved},
//! one iterative deepening search per phase, each guided by a pruning table
//! built once at startup.

pub mod error;
/// Module containing 3x3 cube constants.
pub mod constants;
/// Module for represent a cube on the facelet level.
pub mod facelet;
/// Module for represent a cube on the cubie level.
pub mod cubie;
/// Module for represent moves.
pub mod moves;
/// Module for project a cube state onto the per phase coordinates.
pub mod coord;
/// Module for create the pruning tables. The pruning tables cut the search tree during the search.
pub mod pruning;
/// Module for the four phase solver.
pub mod solver;
#[cfg(feature = "term")]
/// Module for print a facelet cube on terminal with color.
pub mod printer;

use rand::random;
use std::str::FromStr;

use moves::Move;

/// Generate a random scramble of 25 moves, never turning the same face twice
/// in a row.
pub fn scramble() -> Vec<Move> {
    let mut r = Vec::new();
    let mut p = 6;
    while r.len() < 25 {
        let f = random::<u32>() % 6;
        if f == p {
            continue;
        }
        let face = match f {
            0 => "U",
            1 => "R",
            2 => "F",
            3 => "D",
            4 => "L",
            _ => "B",
        };
        let s = match random::<u32>() % 3 {
            0 => "",
            1 => "2",
            _ => "'",
        };
        let mv = format!("{}{}", face, s);
        let mv = Move::from_str(mv.as_str()).unwrap();
        r.push(mv);
        p = f;
    }
    r
}

#[cfg(test)]
mod tests {
    use crate::scramble;

    #[test]
    fn test_scramble() {
        let r = scramble();
        assert_eq!(r.len(), 25);
        for w in r.windows(2) {
            assert!(!w[0].is_same_layer(w[1]));
        }
    }
}
