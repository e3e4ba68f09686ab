use std::io;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
/// - Playing -> Quit
///
/// Seed problems are reported before a session exists, so there is no state for them.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    #[default]
    Playing,
    Won,
    Lost,
    Quit,
}

impl SessionState {
    /// Indicates the session has ended and no commands are accepted anymore
    pub const fn is_final(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// What the caller should do after a command was applied.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    ShowHelp,
    Finished(SessionState),
}

/// Everything needed to draw the board for one round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub rounds: u32,
    pub cells: Array2<CellToken>,
}

/// End of game report.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub state: SessionState,
    pub rounds: u32,
    pub score: Option<f64>,
}

/// Player-facing side of the turn loop.
pub trait Frontend {
    /// Next line of input, `None` once the input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    fn show_frame(&mut self, frame: &Frame) -> io::Result<()>;

    fn show_help(&mut self, help: &str) -> io::Result<()>;

    fn report(&mut self, error: &CommandError) -> io::Result<()>;
}

/// `100 * rows * cols / rounds`, rounded to two decimals. `None` before any round was played.
pub fn score(config: BoardConfig, rounds: u32) -> Option<f64> {
    if rounds == 0 {
        return None;
    }
    let raw = 100.0 * f64::from(config.total_cells()) / f64::from(rounds);
    Some((raw * 100.0).round() / 100.0)
}

/// Represents a game from the first command to the end
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    rounds: u32,
    no_fog: bool,
    state: SessionState,
}

impl GameSession {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            rounds: 0,
            no_fog: false,
            state: Default::default(),
        }
    }

    pub fn from_seed(seed: &Seed) -> Self {
        Self::new(seed.board())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_final()
    }

    /// Whether mines are shown for the current round.
    pub fn no_fog(&self) -> bool {
        self.no_fog
    }

    pub fn frame(&self) -> Frame {
        Frame {
            rounds: self.rounds,
            cells: self.board.render(self.no_fog),
        }
    }

    /// Final score, only available after a win.
    pub fn score(&self) -> Option<f64> {
        match self.state {
            SessionState::Won => score(self.board.config(), self.rounds),
            _ => None,
        }
    }

    pub fn summary(&self) -> Summary {
        Summary {
            state: self.state,
            rounds: self.rounds,
            score: self.score(),
        }
    }

    /// Parses and applies one line of input.
    pub fn execute(&mut self, line: &str) -> Result<Step> {
        self.no_fog = false;
        let command = Command::parse(line)?;
        self.apply(command)
    }

    /// Applies a command. Errors leave the round counter untouched.
    pub fn apply(&mut self, command: Command) -> Result<Step> {
        use Step::*;

        self.no_fog = false;
        if self.state.is_final() {
            log::warn!("Ignoring {:?}, session already ended", command);
            return Ok(Finished(self.state));
        }

        let step = match command {
            Command::Reveal(coords) => {
                if self.board.reveal(coords)?.is_mine() {
                    return Ok(self.finish(SessionState::Lost));
                }
                self.after_move()
            }
            Command::Mark(coords) => {
                self.board.mark(coords)?;
                self.after_move()
            }
            Command::Guess(coords) => {
                self.board.guess(coords)?;
                self.after_move()
            }
            Command::Help => {
                self.rounds += 1;
                ShowHelp
            }
            Command::Quit => return Ok(self.finish(SessionState::Quit)),
            Command::NoFog => {
                self.rounds += 1;
                self.no_fog = true;
                Continue
            }
            Command::Invalid(keyword) => {
                log::debug!("Unknown command {:?}", keyword);
                return Err(CommandError::Invalid);
            }
        };
        log::trace!("Round {} done, step {:?}", self.rounds, step);
        Ok(step)
    }

    /// Counts a successful cell command and checks for a win.
    fn after_move(&mut self) -> Step {
        self.rounds += 1;
        if self.board.is_won() {
            self.finish(SessionState::Won)
        } else {
            Step::Continue
        }
    }

    fn finish(&mut self, state: SessionState) -> Step {
        self.state = state;
        log::debug!("Session ended: {:?} after {} rounds", state, self.rounds);
        Step::Finished(state)
    }

    /// Runs the turn loop until the game is won, lost or quit.
    ///
    /// Command errors are reported through the frontend and the loop goes on. Running out of
    /// input, or a blank line, ends the session with [`SessionError::EndOfInput`].
    pub fn run(&mut self, frontend: &mut impl Frontend) -> Result<SessionState, SessionError> {
        while !self.state.is_final() {
            frontend.show_frame(&self.frame())?;

            let line = match frontend.read_line()? {
                Some(line) if !line.trim().is_empty() => line,
                _ => return Err(SessionError::EndOfInput),
            };

            match self.execute(&line) {
                Ok(Step::ShowHelp) => frontend.show_help(HELP_TEXT)?,
                Ok(_) => {}
                Err(error) => {
                    log::debug!("Rejected {:?}: {}", line.trim(), error);
                    frontend.report(&error)?;
                }
            }
        }
        Ok(self.state)
    }
}
