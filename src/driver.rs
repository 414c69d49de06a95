#![cfg(feature = "std")]

//! Turn loop tying a [`Game`] to a [`Presenter`].

use log::{debug, info};

use crate::{
    core::{BoardError, Game, GameConfig, GameStatus, Player, StarterSeed},
    presenter::{ColumnInput, Notice, Presenter},
};

/// Phase of the turn state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TurnState {
    AwaitingMove,
    CheckingTerminal(GameStatus),
    GameOver(GameStatus),
}

/// Totals for a session, returned when the user quits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub games_played: usize,
    pub red_wins: usize,
    pub black_wins: usize,
    pub draws: usize,
}

impl SessionSummary {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::Won(Player::Red) => self.red_wins += 1,
            GameStatus::Won(Player::Black) => self.black_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => return,
        }
        self.games_played += 1;
    }
}

/// Orchestrator owning the current game and the presenter.
pub struct GameLoop<P: Presenter> {
    presenter: P,
    config: GameConfig,
    game: Game,
    current: Player,
    summary: SessionSummary,
}

impl<P: Presenter> GameLoop<P> {
    /// Validate `config` and set up the first game.
    pub fn new(presenter: P, config: GameConfig, starter: StarterSeed) -> Result<Self, BoardError> {
        config.validate()?;
        let game = Game::new(&config)?;
        let current = starter.choose();
        info!(
            "New session: {}x{} board, {} opens",
            config.rows, config.columns, current
        );
        Ok(Self {
            presenter,
            config,
            game,
            current,
            summary: SessionSummary::default(),
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn summary(&self) -> SessionSummary {
        self.summary
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// Run games back to back until the presenter reports the user is done.
    pub fn run(&mut self) -> anyhow::Result<SessionSummary> {
        while self.play_game()?.is_some() {
            if !self.presenter.acknowledge_game_over()? {
                break;
            }
            self.restart()?;
        }
        info!("Session over: {:?}", self.summary);
        Ok(self.summary)
    }

    /// Play the current game to its end. Returns `None` if the user quit
    /// mid-game.
    pub fn play_game(&mut self) -> anyhow::Result<Option<GameStatus>> {
        let mut state = TurnState::AwaitingMove;
        loop {
            state = match state {
                TurnState::AwaitingMove => match self.take_turn()? {
                    Some(status) => TurnState::CheckingTerminal(status),
                    None => return Ok(None),
                },
                TurnState::CheckingTerminal(status) => {
                    if status.is_terminal() {
                        self.presenter.render_board(self.game.board())?;
                        self.presenter.announce(status)?;
                        TurnState::GameOver(status)
                    } else {
                        self.current = self.current.other();
                        TurnState::AwaitingMove
                    }
                }
                TurnState::GameOver(status) => {
                    info!(
                        "Game finished after {} moves: {:?}",
                        self.game.moves_done(),
                        status
                    );
                    self.summary.record(status);
                    // whoever did not make the final move opens the next game
                    self.current = self.current.other();
                    return Ok(Some(status));
                }
            }
        }
    }

    /// Replace the finished game with a fresh one of the same size.
    fn restart(&mut self) -> Result<(), BoardError> {
        self.game = Game::new(&self.config)?;
        debug!("Fresh game, {} opens", self.current);
        Ok(())
    }

    /// Prompt until the current player makes a legal drop. Rejected input
    /// does not pass the turn. Returns `None` on quit.
    fn take_turn(&mut self) -> anyhow::Result<Option<GameStatus>> {
        let columns = self.config.columns;
        loop {
            self.presenter.render_board(self.game.board())?;
            let choice = self.presenter.request_column(self.current, 1, columns)?;
            let col = match choice {
                ColumnInput::Quit => return Ok(None),
                ColumnInput::Column(n) if (1..=columns).contains(&n) => n - 1,
                ColumnInput::Column(_) | ColumnInput::Invalid => {
                    debug!("{} entered an invalid column ({:?})", self.current, choice);
                    self.presenter.notify(Notice::InvalidColumn {
                        min: 1,
                        max: columns,
                    })?;
                    continue;
                }
            };
            if self.game.board().top_cell_occupied(col) {
                debug!("{} chose full column {}", self.current, col + 1);
                self.presenter.notify(Notice::ColumnFull(col + 1))?;
                continue;
            }
            match self.game.drop(col, self.current) {
                Ok(status) => {
                    debug!(
                        "{} dropped into column {} (move {})",
                        self.current,
                        col + 1,
                        self.game.moves_done()
                    );
                    return Ok(Some(status));
                }
                Err(BoardError::ColumnFull(_)) => {
                    self.presenter.notify(Notice::ColumnFull(col + 1))?;
                }
                Err(BoardError::InvalidColumn(_)) => {
                    self.presenter.notify(Notice::InvalidColumn {
                        min: 1,
                        max: columns,
                    })?;
                }
                Err(e) => return Err(anyhow::anyhow!(e)),
            }
        }
    }
}
