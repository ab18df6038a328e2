use crate::coord::{self, Phase, ALL_PHASES};
use crate::cubie::CubieCube;
use crate::error::Error;
use crate::moves::Move;
use crate::pruning::{PruningTables, PRUNING_TABLES};

/// Solver for the 3x3x3 cube using Thistlethwaite's four phase reduction.
///
/// Each phase moves the cube one step down the chain G0 ⊃ G1 ⊃ G2 ⊃ G3 ⊃
/// {solved} with an iterative deepening DFS over the phase moveset, cut off
/// by the phase's pruning table.
/// # Example
/// ```rust
/// use thistlethwaite::cubie::CubieCube;
/// use thistlethwaite::scramble;
/// use thistlethwaite::solver::ThistlethwaiteSolver;
///
/// fn main() {
///     let cc = CubieCube::default();
///     let moves = scramble();
///     let cc = cc.apply_moves(&moves);
///     let mut solver = ThistlethwaiteSolver { cube: cc };
///     let solution = solver.solve().unwrap();
///     assert!(solver.is_solved());
///     println!("Scramble: {:?}\nSolution: {:?}", moves, solution);
/// }
/// ```
pub struct ThistlethwaiteSolver {
    pub cube: CubieCube,
}

impl ThistlethwaiteSolver {
    /// Solve the cube, returning the concatenated moves of the four phases.
    /// Applying them to the starting cube gives the solved cube.
    pub fn solve(&mut self) -> Result<Vec<Move>, Error> {
        self.cube.verify()?;
        let tables: &PruningTables = &PRUNING_TABLES;
        let mut solution = Vec::new();

        for phase in ALL_PHASES {
            let moves = solve_phase(&self.cube, phase, tables, phase.depth_limit())
                .ok_or(Error::NoSolutionForMaxDepth)?;
            self.cube = self.cube.apply_moves(&moves);
            solution.extend(moves);
        }
        Ok(solution)
    }

    pub fn is_solved(&self) -> bool {
        self.cube == CubieCube::default()
    }
}

/// Iterative deepening DFS for one phase: repeated depth bounded DFS with the
/// bound increasing from 0 to `depth_limit`. Returns the first solution found
/// at the minimum depth, or `None` when the limit is exhausted.
pub fn solve_phase(
    cc: &CubieCube,
    phase: Phase,
    tables: &PruningTables,
    depth_limit: u8,
) -> Option<Vec<Move>> {
    for depth in 0..=depth_limit {
        let mut solution = Vec::new();
        if search(cc, phase, tables, &mut solution, depth) {
            return Some(solution);
        }
    }
    None
}

/// Depth bounded DFS. `solution` carries the moves from the phase entry state
/// to `cc`; on success it holds the full phase solution.
fn search(
    cc: &CubieCube,
    phase: Phase,
    tables: &PruningTables,
    solution: &mut Vec<Move>,
    depth_remaining: u8,
) -> bool {
    if tables.is_phase_solved(cc, phase) {
        return true;
    }
    if depth_remaining == 0 {
        return false;
    }
    // admissible cutoff: a key this far from the goal cannot be finished in
    // the remaining depth
    let bound = tables.table(phase).lower_bound(coord::project(cc, phase));
    if bound > depth_remaining {
        return false;
    }
    for &m in phase.moveset() {
        if let Some(&last) = solution.last() {
            if m.is_same_layer(last) {
                continue;
            }
        }
        let next = cc.apply_move(m);
        solution.push(m);
        if search(&next, phase, tables, solution, depth_remaining - 1) {
            return true;
        }
        solution.pop();
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubie::SOLVED_CUBIE_CUBE;
    use crate::moves::{moves_from_str, Move::*};
    use crate::scramble;

    #[test]
    fn test_already_solved() {
        let mut solver = ThistlethwaiteSolver {
            cube: CubieCube::default(),
        };
        let solution = solver.solve().unwrap();
        assert!(solution.is_empty());
        assert!(solver.is_solved());
    }

    #[test]
    fn test_single_move_scramble() {
        let cc = CubieCube::default().apply_move(R);
        let mut solver = ThistlethwaiteSolver { cube: cc };
        let solution = solver.solve().unwrap();
        assert!(solver.is_solved());
        // the composed effect of the solution is R'
        assert_eq!(cc.apply_moves(&solution), SOLVED_CUBIE_CUBE);
        assert!(solution.len() <= 3);
    }

    #[test]
    fn test_sexy_move_scramble() {
        let cc = CubieCube::default().apply_moves(&[R, U, R3, U3]);
        let mut solver = ThistlethwaiteSolver { cube: cc };
        let solution = solver.solve().unwrap();
        assert!(solver.is_solved());
        assert_eq!(cc.apply_moves(&solution), SOLVED_CUBIE_CUBE);
        assert!(solution.len() <= 8);
    }

    #[test]
    fn test_long_scramble() {
        let scramble_str = "U2 F2 D' F B2 L2 U' L' U' L2 B F' D2 F2 U' B2 L' F' D U' L' B2 L2 F B' D U' F' U2 D'";
        let scramble = moves_from_str(scramble_str).unwrap();
        let cc = CubieCube::default().apply_moves(&scramble);
        let mut solver = ThistlethwaiteSolver { cube: cc };
        let solution = solver.solve().unwrap();
        assert!(solver.is_solved());
        assert_eq!(cc.apply_moves(&solution), SOLVED_CUBIE_CUBE);
        assert!(solution.len() <= 52);
    }

    #[test]
    fn test_phase_goals_hold_along_the_way() {
        let scramble = moves_from_str("F R U' B L D").unwrap();
        let mut cc = CubieCube::default().apply_moves(&scramble);
        let tables: &PruningTables = &PRUNING_TABLES;

        for (i, phase) in ALL_PHASES.iter().enumerate() {
            let moves = solve_phase(&cc, *phase, tables, phase.depth_limit()).unwrap();
            cc = cc.apply_moves(&moves);
            // the phase goal holds, and so do all earlier ones
            for earlier in &ALL_PHASES[..=i] {
                assert!(tables.is_phase_solved(&cc, *earlier));
            }
        }
        assert_eq!(cc, SOLVED_CUBIE_CUBE);
    }

    #[test]
    fn test_later_movesets_preserve_earlier_goals() {
        let scramble = moves_from_str("F R U' B L D").unwrap();
        let mut cc = CubieCube::default().apply_moves(&scramble);
        let tables: &PruningTables = &PRUNING_TABLES;

        for (i, phase) in ALL_PHASES.iter().enumerate().take(3) {
            let moves = solve_phase(&cc, *phase, tables, phase.depth_limit()).unwrap();
            cc = cc.apply_moves(&moves);
            let next = ALL_PHASES[i + 1];
            for &m in next.moveset() {
                let moved = cc.apply_move(m);
                for earlier in &ALL_PHASES[..=i] {
                    assert!(tables.is_phase_solved(&moved, *earlier));
                }
            }
        }
    }

    #[test]
    fn test_random_scrambles() {
        for _ in 0..5 {
            let moves = scramble();
            let cc = CubieCube::default().apply_moves(&moves);
            let mut solver = ThistlethwaiteSolver { cube: cc };
            let solution = solver.solve().unwrap();
            assert!(solver.is_solved());
            assert_eq!(cc.apply_moves(&solution), SOLVED_CUBIE_CUBE);
            assert!(solution.len() <= 52);
        }
    }

    #[test]
    fn test_broken_cube_is_rejected() {
        let mut cc = CubieCube::default();
        cc.co[0] = 1;
        let mut solver = ThistlethwaiteSolver { cube: cc };
        assert!(solver.solve().is_err());
    }
}
