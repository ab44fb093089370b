use crate::core::{MancalaBoard, Move, PlayerId, PITS};

/// Slots seen from the mover: own pits, own store, opponent pits.
/// The opponent's store is skipped.
const RING: usize = 2 * PITS + 1;
const OWN_STORE: usize = PITS;

/// Non-empty pits of `player`, in pit order. Empty once the game is over.
pub fn legal_moves(board: &MancalaBoard, player: PlayerId) -> Vec<Move> {
    if is_game_over(board) {
        return Vec::new();
    }
    board.pits[player.index()]
        .iter()
        .enumerate()
        .filter(|(_, &stones)| stones > 0)
        .map(|(i, _)| i + 1)
        .collect()
}

/// The game ends as soon as either side has no stones left in its pits.
pub fn is_game_over(board: &MancalaBoard) -> bool {
    board
        .pits
        .iter()
        .any(|side| side.iter().all(|&stones| stones == 0))
}

/// Sows the stones of pit `mv` counterclockwise and applies captures and the
/// end-of-game sweep. Returns `true` when the last stone lands in the mover's
/// store. Illegal moves leave the board untouched.
pub fn sow(board: &mut MancalaBoard, player: PlayerId, mv: Move) -> bool {
    if mv == 0 || mv > PITS || is_game_over(board) {
        return false;
    }
    let me = player.index();
    let opp = player.opponent().index();

    let mut stones = board.pits[me][mv - 1];
    if stones == 0 {
        return false;
    }
    board.pits[me][mv - 1] = 0;

    let mut slot = mv - 1;
    while stones > 0 {
        slot = (slot + 1) % RING;
        match slot {
            s if s < PITS => board.pits[me][s] += 1,
            OWN_STORE => board.stores[me] += 1,
            s => board.pits[opp][s - PITS - 1] += 1,
        }
        stones -= 1;
    }

    // 空きピットに最後の石が落ちたら対面を取る
    if slot < PITS && board.pits[me][slot] == 1 {
        let facing = PITS - 1 - slot;
        let captured = board.pits[opp][facing];
        if captured > 0 {
            board.stores[me] += captured + 1;
            board.pits[opp][facing] = 0;
            board.pits[me][slot] = 0;
        }
    }

    if is_game_over(board) {
        sweep(board);
    }

    slot == OWN_STORE
}

/// Moves every stone left in the pits into its owner's store.
fn sweep(board: &mut MancalaBoard) {
    for side in 0..2 {
        let left: u32 = board.pits[side].iter().sum();
        board.stores[side] += left;
        board.pits[side] = [0; PITS];
    }
}
