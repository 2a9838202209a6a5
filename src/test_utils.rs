use crate::{GameError, MineField, Position, Result};
use rand::{rngs::StdRng, SeedableRng};

/// Builds a reproducible field from a seed.
pub fn seeded_field(grid_size: usize, mines_count: usize, seed: u64) -> Result<MineField> {
    MineField::with_rng(grid_size, mines_count, &mut StdRng::seed_from_u64(seed))
}

/// Parses a square layout where `*` marks a mine and `.` an empty cell.
/// Whitespace around rows is ignored.
///
/// ```text
/// *..
/// ...
/// ..*
/// ```
pub fn field_from_ascii(layout: &str) -> Result<MineField> {
    let rows: Vec<&str> = layout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let grid_size = rows.len();

    let mut mines = Vec::new();
    for (r, line) in rows.iter().enumerate() {
        if line.chars().count() != grid_size {
            return Err(GameError::InvalidBoardShape);
        }
        for (c, ch) in line.chars().enumerate() {
            if ch == '*' {
                mines.push(Position::new(r as i32, c as i32));
            }
        }
    }

    MineField::from_mines(grid_size, &mines)
}

/// Renders the player's view: `#` hidden, `F` flagged, `*` opened mine,
/// digits for opened cells (`.` for zero).
pub fn render(field: &MineField) -> String {
    let mut out = String::new();
    for row in 0..field.grid_size() as i32 {
        for col in 0..field.grid_size() as i32 {
            let Ok(cell) = field.cell_state(Position::new(row, col)) else {
                continue;
            };
            let ch = match (cell.is_opened, cell.is_flagged, cell.is_mine) {
                (false, true, _) => 'F',
                (false, false, _) => '#',
                (true, _, true) => '*',
                (true, _, false) if cell.mines_around == 0 => '.',
                (true, _, false) => char::from(b'0' + cell.mines_around),
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}
