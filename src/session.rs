//! Console game sessions: setup prompts, turn loop and scoring.

use crate::config::GameConfig;
use crate::console::Console;
use crate::error::{GameError, SessionError};
use crate::games::connect_four::{
    Board, GameMode, Outcome, Player, has_four_in_a_row, parse_column,
};
use tracing::{debug, info, instrument, warn};

/// Command that ends the current game without scoring.
pub const END_COMMAND: &str = "end";

/// Result of submitting one line of turn input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Input rejected; the same player moves again.
    Rejected(GameError),
    /// Token placed; the other player moves next.
    Placed,
    /// The game is over.
    Finished(Outcome),
}

/// A run of one or more games between two players on one board.
///
/// The turn counter is session-wide: it advances after every placed
/// token, so the player who did not make the last move of a game opens
/// the next one.
#[derive(Debug, Clone)]
pub struct GameSession {
    players: [Player; 2],
    board: Board,
    mode: GameMode,
    turn: usize,
    outcomes: Vec<Outcome>,
}

impl GameSession {
    /// Creates a session. The first player in `players` moves first.
    #[instrument(
        skip(players, board),
        fields(first = %players[0].name(), second = %players[1].name(), board = %board)
    )]
    pub fn new(players: [Player; 2], board: Board, mode: GameMode) -> Self {
        info!("Creating game session");
        Self {
            players,
            board,
            mode,
            turn: 0,
            outcomes: Vec::new(),
        }
    }

    /// Both players, in seat order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The session mode.
    pub fn mode(&self) -> &GameMode {
        &self.mode
    }

    /// Outcomes of the games played so far.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    /// Seat (0 or 1) of the player to move.
    pub fn current_seat(&self) -> usize {
        self.turn % 2
    }

    /// The player to move.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_seat()]
    }

    /// Applies one line of turn input for the player to move.
    ///
    /// Rejected input leaves the board and the turn untouched.
    #[instrument(skip(self), fields(seat = self.current_seat()))]
    pub fn submit(&mut self, command: &str) -> Turn {
        if command == END_COMMAND {
            info!("Game ended on request");
            return Turn::Finished(Outcome::Abandoned);
        }

        let seat = self.current_seat();
        let column = match parse_column(command, &self.board) {
            Ok(column) => column,
            Err(err) => {
                warn!(%err, "Column rejected");
                return Turn::Rejected(err);
            }
        };
        if let Err(err) = self.board.drop_token(column, &self.players[seat]) {
            warn!(%err, column, "Drop rejected");
            return Turn::Rejected(err);
        }
        self.turn += 1;

        if has_four_in_a_row(&self.board, *self.players[seat].sign()) {
            info!(winner = %self.players[seat].name(), "Game won");
            Turn::Finished(Outcome::Winner(seat))
        } else if self.board.is_full() {
            info!("Game drawn");
            Turn::Finished(Outcome::Draw)
        } else {
            debug!(column, "Token placed");
            Turn::Placed
        }
    }

    /// Plays every game of the session through `console`.
    #[instrument(skip(self, console), fields(mode = ?self.mode))]
    pub fn play<C: Console>(&mut self, console: &mut C) -> Result<(), SessionError> {
        console.write_line(&self.banner())?;

        match self.mode {
            GameMode::Single => {
                console.write_line(&self.board.render())?;
                let outcome = self.play_game(console)?;
                self.outcomes.push(outcome);
            }
            GameMode::Multiple { .. } => {
                for game in 1..=self.mode.games() {
                    self.board.reset();
                    info!(game, "Starting game");
                    console.write_line(&format!("Game #{game}"))?;
                    console.write_line(&self.board.render())?;

                    let outcome = self.play_game(console)?;
                    self.award(outcome);
                    self.outcomes.push(outcome);
                    console.write_line(&self.score())?;
                }
            }
        }
        Ok(())
    }

    /// Runs turns until the current game finishes.
    fn play_game<C: Console>(&mut self, console: &mut C) -> Result<Outcome, SessionError> {
        loop {
            console.write_line(&format!("{}'s turn:", self.current_player().name()))?;
            let command = console.read_line()?;

            match self.submit(&command) {
                Turn::Rejected(err) => console.write_line(&err.to_string())?,
                Turn::Placed => console.write_line(&self.board.render())?,
                Turn::Finished(Outcome::Abandoned) => {
                    console.write_line("Game over!")?;
                    return Ok(Outcome::Abandoned);
                }
                Turn::Finished(outcome) => {
                    console.write_line(&self.board.render())?;
                    match outcome.winner() {
                        Some(seat) => console
                            .write_line(&format!("Player {} won", self.players[seat].name()))?,
                        None => console.write_line("It is a draw")?,
                    }
                    return Ok(outcome);
                }
            }
        }
    }

    fn award(&mut self, outcome: Outcome) {
        for (player, points) in self.players.iter_mut().zip(outcome.points()) {
            if points > 0 {
                player.award(points);
            }
        }
    }

    /// Score summary printed after each scored game.
    pub fn score(&self) -> String {
        let [first, second] = &self.players;
        format!(
            "Score\n{}: {} {}: {}",
            first.name(),
            first.score(),
            second.name(),
            second.score()
        )
    }

    fn banner(&self) -> String {
        let games = match &self.mode {
            GameMode::Single => "Single game".to_string(),
            GameMode::Multiple { entered, .. } => format!("Total {entered} games"),
        };
        format!(
            "{} VS {}\n{}\n{}",
            self.players[0].name(),
            self.players[1].name(),
            self.board,
            games
        )
    }
}

/// Runs a whole console session: names, board, mode, then play.
///
/// Returns the finished session so callers can inspect scores.
///
/// # Errors
///
/// Only [`SessionError`]s escape; every [`GameError`] is reported on the
/// console and the question asked again.
#[instrument(skip_all)]
pub fn run<C: Console>(console: &mut C, config: &GameConfig) -> Result<GameSession, SessionError> {
    console.write_line("Connect Four")?;
    console.write_line("First player's name:")?;
    let first = console.read_line()?;
    console.write_line("Second player's name:")?;
    let second = console.read_line()?;

    let board = prompt_board(console)?;
    let mode = prompt_mode(console)?;
    let players = [
        Player::new(first, *config.first_sign()),
        Player::new(second, *config.second_sign()),
    ];

    let mut session = GameSession::new(players, board, mode);
    session.play(console)?;
    console.write_line("Game over!")?;
    Ok(session)
}

/// Asks for board dimensions until a valid answer is given.
#[instrument(skip_all)]
pub fn prompt_board<C: Console>(console: &mut C) -> Result<Board, SessionError> {
    loop {
        console.write_line("Set the board dimensions (Rows x Columns)")?;
        console.write_line("Press Enter for default (6 x 7)")?;
        match Board::parse(&console.read_line()?) {
            Ok(board) => return Ok(board),
            Err(err) => {
                warn!(%err, "Dimensions rejected");
                console.write_line(&err.to_string())?;
            }
        }
    }
}

/// Asks for the number of games until a valid answer is given.
#[instrument(skip_all)]
pub fn prompt_mode<C: Console>(console: &mut C) -> Result<GameMode, SessionError> {
    loop {
        console.write_line("Do you want to play single or multiple games?")?;
        console.write_line("For a single game, input 1 or press Enter")?;
        console.write_line("Input a number of games:")?;
        match GameMode::parse(&console.read_line()?) {
            Ok(mode) => return Ok(mode),
            Err(err) => {
                warn!(%err, "Game count rejected");
                console.write_line(&err.to_string())?;
            }
        }
    }
}
