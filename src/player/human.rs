use crate::core::{Board, Move, PlayerId};
use crate::player::PlayerController;
use std::cell::RefCell;
use std::fmt;
use std::io::{self, BufRead, Write};

/// Console player. Keeps asking until the board accepts the move.
pub struct HumanController {
    player_id: PlayerId,
    name: String,
    input: RefCell<Box<dyn BufRead>>,
    output: RefCell<Box<dyn Write>>,
}

impl HumanController {
    pub fn new(player_id: PlayerId, name: &str) -> Self {
        Self::with_io(
            player_id,
            name,
            io::BufReader::new(io::stdin()),
            io::stdout(),
        )
    }

    pub fn with_io(
        player_id: PlayerId,
        name: &str,
        input: impl BufRead + 'static,
        output: impl Write + 'static,
    ) -> Self {
        Self {
            player_id,
            name: name.to_string(),
            input: RefCell::new(Box::new(input)),
            output: RefCell::new(Box::new(output)),
        }
    }

    fn prompt(&self, msg: &str) -> io::Result<Option<String>> {
        let mut out = self.output.borrow_mut();
        write!(out, "{}", msg)?;
        out.flush()?;

        let mut line = String::new();
        if self.input.borrow_mut().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn read_move<B: Board + fmt::Display>(&self, board: &B) -> io::Result<Option<Move>> {
        writeln!(self.output.borrow_mut(), "{}", board)?;
        let mut msg = format!("{} ({}), please enter your move: ", self.name, self.player_id);
        loop {
            let Some(line) = self.prompt(&msg)? else {
                return Ok(None);
            };
            match line.parse::<Move>() {
                Ok(mv) if board.is_legal_move(self.player_id, mv) => return Ok(Some(mv)),
                _ => {
                    writeln!(self.output.borrow_mut(), "{} is not valid", line)?;
                    msg = format!("{}, please enter your move: ", self.name);
                }
            }
        }
    }
}

impl<B: Board + fmt::Display> PlayerController<B> for HumanController {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &B) -> Option<Move> {
        match self.read_move(board) {
            Ok(Some(mv)) => Some(mv),
            Ok(None) => {
                tracing::warn!(player = %self.player_id, "input closed, no move");
                None
            }
            Err(err) => {
                tracing::error!(player = %self.player_id, %err, "failed to read move");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MancalaBoard;
    use std::io::Cursor;
    use std::rc::Rc;

    /// Writer whose contents the test can read back
    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_retries_until_legal() {
        // Pit 1 is empty, 9 is off the board, "x" is not a number
        let board = MancalaBoard::from_parts([0, 4, 4, 4, 4, 4], [4; 6], [4, 0]);
        let out = SharedBuf::default();
        let human = HumanController::with_io(
            PlayerId::Player1,
            "Human",
            Cursor::new("1\n9\nx\n\n 4 \n"),
            out.clone(),
        );
        assert_eq!(human.choose_move(&board), Some(4));

        let text = String::from_utf8(out.0.borrow().clone()).unwrap();
        assert_eq!(text.matches("is not valid").count(), 4);
        assert!(text.contains("1 is not valid"));
        assert!(text.contains("x is not valid"));
    }

    #[test]
    fn test_closed_input_gives_up() {
        let board = MancalaBoard::new();
        let human = HumanController::with_io(
            PlayerId::Player2,
            "Human",
            Cursor::new("0\n"),
            io::sink(),
        );
        assert_eq!(human.choose_move(&board), None);
    }
}
