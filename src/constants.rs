use crate::cubie::Corner::{self, *};
use crate::cubie::Edge::{self, *};
use crate::moves::Move::{self, *};

pub const ALL_CORNERS: [Corner; 8] = [URF, UFL, ULB, UBR, DFR, DLF, DBL, DRB];
pub const ALL_EDGES: [Edge; 12] = [UR, UF, UL, UB, DR, DF, DL, DB, FR, FL, BL, BR];
pub const ALL_MOVES: [Move; 18] = [
    U, U2, U3, R, R2, R3, F, F2, F3, D, D2, D3, L, L2, L3, B, B2, B3,
];

/// Moveset of G0 = <U, D, L, R, F, B>: every face move is legal.
pub const G0_MOVES: [Move; 18] = [
    U, U3, U2, D, D3, D2, L, L3, L2, R, R3, R2, F, F3, F2, B, B3, B2,
];
/// Moveset of G1 = <U, D, L, R, F2, B2>: F and B are restricted to half turns.
pub const G1_MOVES: [Move; 14] = [U, U3, U2, D, D3, D2, L, L3, L2, R, R3, R2, F2, B2];
/// Moveset of G2 = <U, D, L2, R2, F2, B2>: only U and D keep their quarter turns.
pub const G2_MOVES: [Move; 10] = [U, U3, U2, D, D3, D2, L2, R2, F2, B2];
/// Moveset of G3 = <U2, D2, L2, R2, F2, B2>: the square group.
pub const G3_MOVES: [Move; 6] = [U2, D2, L2, R2, F2, B2];

/// IDDFS depth limit per phase. These are Thistlethwaite's per phase worst
/// cases (7 + 10 + 13 + 15 = 45), so every valid cube solves within them.
pub const PHASE_DEPTH_LIMITS: [u8; 4] = [7, 10, 13, 15];

/// BFS depth cap per pruning table. G0 exhausts its key space below the cap;
/// the G3 cap is raised over the others because its key space is small and a
/// deeper table guides most of the longest searches.
pub const PRUNING_TABLE_DEPTHS: [u8; 4] = [9, 8, 8, 10];

/// 2^11 reachable edge orientation vectors
pub const N_FLIP: usize = 2048;
/// 8! corner permutations
pub const N_CORNER_PERM: usize = 40320;
/// 12! edge permutations
pub const N_EDGE_PERM: usize = 479001600;
/// corner permutations reachable with half turns only
pub const N_SQUARE_CORNER_PERM: usize = 96;
