use static_init::dynamic;
use std::collections::{HashMap, HashSet};

use crate::constants::G3_MOVES;
use crate::coord::{self, Phase};
use crate::cubie::{CubieCube, SOLVED_CUBIE_CUBE};

/// Minimum move count from every reachable projected state to the phase goal,
/// up to a configured BFS depth. The table is an admissible heuristic: a
/// state is never closer to the goal than its stored depth, and a state
/// missing from the table is at least `max_depth + 1` moves away.
pub struct PruningTable {
    depths: HashMap<u64, u8>,
    max_depth: u8,
}

impl PruningTable {
    /// Breadth-first search outward from the goal representatives over the
    /// phase moveset.
    ///
    /// Every phase moveset contains the inverse of each of its moves, so the
    /// recorded distance from the goal equals the distance to it. Because the
    /// projection is congruent with move application, one representative cube
    /// per projected key is enough to enumerate that key's successors.
    pub fn build(seeds: &[CubieCube], phase: Phase, max_depth: u8) -> Self {
        let mut depths = HashMap::new();
        let mut frontier: Vec<CubieCube> = Vec::new();

        for seed in seeds {
            let key = coord::project(seed, phase);
            if !depths.contains_key(&key) {
                depths.insert(key, 0);
                frontier.push(*seed);
            }
        }

        for depth in 1..=max_depth {
            let mut next = Vec::new();
            for cc in &frontier {
                for &m in phase.moveset() {
                    let nc = cc.apply_move(m);
                    let key = coord::project(&nc, phase);
                    if !depths.contains_key(&key) {
                        depths.insert(key, depth);
                        next.push(nc);
                    }
                }
            }
            if next.is_empty() {
                break;
            }
            frontier = next;
        }

        Self { depths, max_depth }
    }

    /// Admissible lower bound on the moves needed to reach the phase goal.
    pub fn lower_bound(&self, key: u64) -> u8 {
        match self.depths.get(&key) {
            Some(&d) => d,
            None => self.max_depth + 1,
        }
    }

    /// Exact BFS depth of a key, if the BFS reached it.
    pub fn depth(&self, key: u64) -> Option<u8> {
        self.depths.get(&key).copied()
    }

    pub fn len(&self) -> usize {
        self.depths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depths.is_empty()
    }
}

/// One representative cube per distinct G2 key of the square group
/// <U2, D2, L2, R2, F2, B2>, enumerated by BFS from the solved cube.
///
/// These are the G2 goal states: a cube projecting onto one of these keys can
/// be finished with half turns alone.
fn square_group_representatives() -> Vec<CubieCube> {
    let mut seen: HashSet<u64> = HashSet::new();
    let mut reps = vec![SOLVED_CUBIE_CUBE];
    let mut frontier = vec![SOLVED_CUBIE_CUBE];
    seen.insert(coord::project(&SOLVED_CUBIE_CUBE, Phase::G2));

    while !frontier.is_empty() {
        let mut next = Vec::new();
        for cc in &frontier {
            for &m in G3_MOVES.iter() {
                let nc = cc.apply_move(m);
                let key = coord::project(&nc, Phase::G2);
                if seen.insert(key) {
                    reps.push(nc);
                    next.push(nc);
                }
            }
        }
        frontier = next;
    }
    reps
}

/// The four pruning tables, built once and borrowed read-only by every solve.
pub struct PruningTables {
    pub g0: PruningTable,
    pub g1: PruningTable,
    pub g2: PruningTable,
    pub g3: PruningTable,
}

impl PruningTables {
    pub fn new() -> Self {
        let solved = [SOLVED_CUBIE_CUBE];
        let g0 = PruningTable::build(&solved, Phase::G0, Phase::G0.table_depth());
        let g1 = PruningTable::build(&solved, Phase::G1, Phase::G1.table_depth());
        let goals = square_group_representatives();
        let g2 = PruningTable::build(&goals, Phase::G2, Phase::G2.table_depth());
        let g3 = PruningTable::build(&solved, Phase::G3, Phase::G3.table_depth());
        Self { g0, g1, g2, g3 }
    }

    pub fn table(&self, phase: Phase) -> &PruningTable {
        match phase {
            Phase::G0 => &self.g0,
            Phase::G1 => &self.g1,
            Phase::G2 => &self.g2,
            Phase::G3 => &self.g3,
        }
    }

    /// Phase goal test. G0, G1 and G3 are direct cubie predicates; the G2
    /// goal is membership in the enumerated goal key set, which is exactly
    /// the depth 0 layer of its table.
    pub fn is_phase_solved(&self, cc: &CubieCube, phase: Phase) -> bool {
        match phase {
            Phase::G0 => coord::edges_oriented(cc),
            Phase::G1 => coord::corners_oriented_and_slice_placed(cc),
            Phase::G2 => self.g2.depth(coord::project(cc, Phase::G2)) == Some(0),
            Phase::G3 => *cc == SOLVED_CUBIE_CUBE,
        }
    }
}

impl Default for PruningTables {
    fn default() -> Self {
        Self::new()
    }
}

/// The process wide pruning tables, built on first access and immutable
/// afterwards.
#[dynamic(lazy)]
pub static PRUNING_TABLES: PruningTables = PruningTables::new();
