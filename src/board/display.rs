use std::fmt;

use super::{Board, Square};

/// Text diagram of the board, White at the bottom. Uppercase is White.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for row in (0..8).rev() {
            write!(f, "{} |", row + 1)?;
            for col in 0..8 {
                let ch = self.kind_at(Square(row, col)).map_or(' ', |k| k.to_char());
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        write!(f, "{} to move, turn {}", self.side_to_move(), self.turn)
    }
}

#[cfg(test)]
mod tests {
    use crate::board::Board;

    #[test]
    fn test_starting_diagram() {
        let text = Board::new().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "8 | r | n | b | q | k | b | n | r |");
        assert_eq!(lines[15], "1 | R | N | B | Q | K | B | N | R |");
        assert!(text.ends_with("white to move, turn 0"));
    }
}
