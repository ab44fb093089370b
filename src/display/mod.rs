use crate::core::{MancalaBoard, Move, PlayerId, PITS};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::{stdout, Write};

#[derive(Default)]
pub struct DisplayState {
    pub status_msg: Option<String>,
    pub last_move: Option<(PlayerId, Move)>,
    /// Clear the screen before drawing
    pub clear: bool,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }
}

fn pit_cell(board: &MancalaBoard, player: PlayerId, pit: usize, state: &DisplayState) -> String {
    let stones = format!("{:>3}", board.pits[player.index()][pit - 1]);
    if state.last_move == Some((player, pit)) {
        stones.bold().yellow().to_string()
    } else if player == PlayerId::Player1 {
        stones.cyan().to_string()
    } else {
        stones.magenta().to_string()
    }
}

/// Player 2 on top, right to left, so that sowing runs counterclockwise.
pub fn render_board(board: &MancalaBoard, state: &DisplayState) -> std::io::Result<()> {
    let mut out = stdout();

    if state.clear {
        execute!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
    }

    writeln!(out, "{}", "=== Mancala ===".bold())?;
    match &state.status_msg {
        Some(msg) => writeln!(out, "{}", msg.clone().bold().yellow())?,
        None => writeln!(out)?,
    }
    writeln!(out)?;

    write!(out, "      ")?;
    for pit in (1..=PITS).rev() {
        write!(out, "{:>3}", pit)?;
    }
    writeln!(out, "   {}", "P2".magenta())?;

    write!(out, "      ")?;
    for pit in (1..=PITS).rev() {
        write!(out, "{}", pit_cell(board, PlayerId::Player2, pit, state))?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "  {}{}{}",
        format!("{:>3}", board.stores[1]).magenta().bold(),
        " ".repeat(PITS * 3 + 2),
        format!("{:>3}", board.stores[0]).cyan().bold()
    )?;

    write!(out, "      ")?;
    for pit in 1..=PITS {
        write!(out, "{}", pit_cell(board, PlayerId::Player1, pit, state))?;
    }
    writeln!(out)?;

    write!(out, "      ")?;
    for pit in 1..=PITS {
        write!(out, "{:>3}", pit)?;
    }
    writeln!(out, "   {}", "P1".cyan())?;
    writeln!(out)?;

    out.flush()
}
