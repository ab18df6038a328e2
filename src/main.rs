use std::env;
use std::process::exit;

use thistlethwaite::cubie::CubieCube;
#[cfg(feature = "term")]
use thistlethwaite::facelet::FaceCube;
use thistlethwaite::moves::{format_moves, moves_from_str};
#[cfg(feature = "term")]
use thistlethwaite::printer::print_facelet;
use thistlethwaite::scramble;
use thistlethwaite::solver::ThistlethwaiteSolver;

fn usage() -> ! {
    eprintln!("usage: thistlethwaite [--scramble \"<moves>\"]");
    exit(1);
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let moves = match args.get(1).map(String::as_str) {
        Some("--scramble") => {
            let Some(s) = args.get(2) else { usage() };
            match moves_from_str(s) {
                Ok(moves) => moves,
                Err(e) => {
                    eprintln!("{e}");
                    exit(1);
                }
            }
        }
        Some(_) => usage(),
        None => scramble(),
    };

    let cc = CubieCube::default().apply_moves(&moves);
    println!("Scramble: {}", format_moves(&moves));
    #[cfg(feature = "term")]
    {
        let fc = FaceCube::try_from(&cc).unwrap();
        let _ = print_facelet(&fc);
    }

    let mut solver = ThistlethwaiteSolver { cube: cc };
    match solver.solve() {
        Ok(solution) => {
            println!(
                "Solution: {} [{}]",
                format_moves(&solution),
                solution.len()
            );
        }
        Err(e) => {
            eprintln!("{e}");
            exit(1);
        }
    }
}
