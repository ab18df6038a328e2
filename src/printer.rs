use crate::facelet::{Color, FaceCube};
use crossterm::{
    cursor::{MoveLeft, MoveRight, MoveUp},
    execute,
    style::{Color as TermColor, SetBackgroundColor},
};
use std::io::stdout;

fn color_to_termcolor(color: Color) -> TermColor {
    match color {
        Color::U => TermColor::White,
        Color::L => TermColor::DarkYellow,
        Color::F => TermColor::Green,
        Color::R => TermColor::Red,
        Color::B => TermColor::Blue,
        Color::D => TermColor::Yellow,
    }
}

fn print_face(face: &[Color], offset: u16) -> Result<(), std::io::Error> {
    for i in 0..3 {
        let layer = format!(
            "{}  {}  {}  {}",
            SetBackgroundColor(color_to_termcolor(face[3 * i])),
            SetBackgroundColor(color_to_termcolor(face[(3 * i) + 1])),
            SetBackgroundColor(color_to_termcolor(face[(3 * i) + 2])),
            SetBackgroundColor(TermColor::Reset)
        );

        println!("{layer}");

        if offset != 0 {
            execute!(stdout(), MoveRight(offset))?;
        }
    }

    Ok(())
}

/// Print the cube as a 2D net with colored blocks, U on top, then the
/// L-F-R-B band, D at the bottom.
pub fn print_facelet(facelet: &FaceCube) -> Result<(), std::io::Error> {
    let stdout = stdout();

    println!();
    execute!(&stdout, MoveRight(6))?;
    print_face(&facelet.f[0..9], 6)?; // U
    execute!(&stdout, MoveLeft(6))?;
    print_face(&facelet.f[9..18], 0)?; // L
    execute!(&stdout, MoveRight(6), MoveUp(3))?;
    print_face(&facelet.f[18..27], 6)?; // F
    execute!(&stdout, MoveLeft(12), MoveUp(3), MoveRight(12))?;
    print_face(&facelet.f[27..36], 12)?; // R
    execute!(&stdout, MoveLeft(12), MoveUp(3), MoveRight(18))?;
    print_face(&facelet.f[36..45], 18)?; // B
    execute!(&stdout, MoveLeft(12))?;
    print_face(&facelet.f[45..54], 6)?; // D
    execute!(&stdout, MoveLeft(12))?;
    println!();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cubie::CubieCube;
    use crate::moves::Move::*;

    #[test]
    fn test_printer() {
        let cc = CubieCube::default();
        let mvs = vec![R, U, R3, U3, F2, D];
        let cc = cc.apply_moves(&mvs);
        let fc = FaceCube::try_from(&cc).unwrap();
        let _ = print_facelet(&fc);
    }
}
