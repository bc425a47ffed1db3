//! Game loop between two agents, and series of games with a running tally.

use log::info;

use crate::ai::Agent;
use crate::error::ArenaError;
use crate::game::{Board, GameOutcome, GameState, Player};

/// Everything that happened in one finished game.
#[derive(Debug, Clone, PartialEq)]
pub struct GameRecord {
    pub first: Player,
    /// `(mover, column)` in play order.
    pub moves: Vec<(Player, usize)>,
    pub outcome: GameOutcome,
    pub board: Board,
}

impl GameRecord {
    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            GameOutcome::Winner(p) => Some(p),
            GameOutcome::Draw => None,
        }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

/// Play one game to completion.
///
/// `observe` runs after every move with the new state, the mover and the column.
pub fn play_game<F>(
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
    first: Player,
    mut observe: F,
) -> Result<GameRecord, ArenaError>
where
    F: FnMut(&GameState, Player, usize),
{
    let mut state = GameState::initial(first);
    let mut moves = Vec::new();

    let outcome = loop {
        if let Some(outcome) = state.outcome() {
            break outcome;
        }

        let player = state.current_player();
        let agent: &mut dyn Agent = match player {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };
        let column = agent.choose_move(state.board(), player)?;
        state = state
            .apply_move(column)
            .map_err(|source| ArenaError::IllegalMove {
                agent: agent.name().to_string(),
                column,
                source,
            })?;
        moves.push((player, column));
        observe(&state, player, column);
    };

    Ok(GameRecord {
        first,
        moves,
        outcome,
        board: *state.board(),
    })
}

/// Tally of a series between agent A and agent B.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeriesStats {
    pub games: usize,
    pub a_wins: usize,
    pub b_wins: usize,
    pub draws: usize,
    pub total_moves: usize,
}

impl SeriesStats {
    /// Record a game in which agent A played `a_side`.
    pub fn record(&mut self, game: &GameRecord, a_side: Player) {
        self.games += 1;
        self.total_moves += game.len();
        match game.winner() {
            Some(winner) if winner == a_side => self.a_wins += 1,
            Some(_) => self.b_wins += 1,
            None => self.draws += 1,
        }
    }

    pub fn a_win_rate(&self) -> f32 {
        self.rate(self.a_wins)
    }

    pub fn b_win_rate(&self) -> f32 {
        self.rate(self.b_wins)
    }

    pub fn draw_rate(&self) -> f32 {
        self.rate(self.draws)
    }

    pub fn average_game_length(&self) -> f32 {
        self.rate(self.total_moves)
    }

    fn rate(&self, count: usize) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        count as f32 / self.games as f32
    }
}

/// Play `games` games, A taking Red on even games and Yellow on odd ones.
/// Red always moves first, so the opening move alternates between the agents.
pub fn run_series(
    a: &mut dyn Agent,
    b: &mut dyn Agent,
    games: usize,
) -> Result<SeriesStats, ArenaError> {
    let mut stats = SeriesStats::default();

    for game_idx in 0..games {
        let a_side = if game_idx % 2 == 0 {
            Player::Red
        } else {
            Player::Yellow
        };
        let record = match a_side {
            Player::Red => play_game(a, b, Player::Red, |_, _, _| {})?,
            Player::Yellow => play_game(b, a, Player::Red, |_, _, _| {})?,
        };
        stats.record(&record, a_side);

        let result = match record.winner() {
            Some(winner) if winner == a_side => a.name().to_string(),
            Some(_) => b.name().to_string(),
            None => "draw".to_string(),
        };
        info!(
            "Game {}/{}: {} as {} | {} moves | result: {}",
            game_idx + 1,
            games,
            a.name(),
            a_side.name(),
            record.len(),
            result
        );
    }

    Ok(stats)
}
