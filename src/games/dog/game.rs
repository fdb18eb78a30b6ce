//! The game engine: board, rules and turn state for a single game.

use im::Vector;
use log::{debug, info, trace, warn};

use super::state::{MoveRecord, TurnState};
use crate::board::Board;
use crate::core::{DogConfig, FirstPlayer, GameRng, Player, PlayerId, Point};
use crate::error::{DogError, DogResult};
use crate::rules::{DestinationSet, DogRules, GameOutcome, RulesEngine};

/// A game of Dog from first move to game over.
///
/// The loss check runs whenever a player's turn begins, so a player who
/// cannot move loses without ever being asked for a move.
///
/// ## Example
///
/// ```
/// use dog_game::core::{PlayerId, Point};
/// use dog_game::games::dog::GameBuilder;
///
/// let mut game = GameBuilder::new()
///     .size(3)
///     .first_player(PlayerId::FIRST)
///     .build()
///     .unwrap();
///
/// let record = game.play_movestring("NE").unwrap();
/// assert_eq!(record.to, Point::new(1, 1));
/// assert_eq!(game.current_player(), Some(PlayerId::SECOND));
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    rules: DogRules,
    board: Board,
    state: TurnState,
    history: Vector<MoveRecord>,
    seed: u64,
}

/// Builder for creating a `Game`.
#[derive(Clone, Debug, Default)]
pub struct GameBuilder {
    config: DogConfig,
    seed: Option<u64>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn from_config(config: DogConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn size(mut self, size: usize) -> Self {
        self.config.size = size;
        self
    }

    pub fn player_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.config.player_names[PlayerId::FIRST] = first.into();
        self.config.player_names[PlayerId::SECOND] = second.into();
        self
    }

    pub fn symbols(mut self, first: char, second: char) -> Self {
        self.config = self.config.with_symbols(first, second);
        self
    }

    /// Skip the coin flip and let `player` move first.
    pub fn first_player(mut self, player: PlayerId) -> Self {
        self.config = self.config.with_first_player(player);
        self
    }

    /// Seed the coin flip. Without a seed the OS supplies one.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the configuration and set up the board.
    pub fn build(self) -> DogResult<Game> {
        let mut rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Game::from_config(self.config, &mut rng)
    }
}

impl Game {
    /// New game with default glyphs and a random first player.
    pub fn new(size: usize, first: impl Into<String>, second: impl Into<String>) -> DogResult<Self> {
        GameBuilder::new().size(size).player_names(first, second).build()
    }

    /// New game from a configuration, flipping the coin with `rng` if needed.
    pub fn from_config(config: DogConfig, rng: &mut GameRng) -> DogResult<Self> {
        config.validate()?;
        if !config.is_playable() {
            warn!("board size {} leaves no room to move; the game ends at once", config.size);
        }

        let first = match config.first_player {
            FirstPlayer::Random => rng.coin_flip(),
            FirstPlayer::Fixed(player) => player,
        };

        let mut game = Self {
            rules: DogRules::new(),
            board: Board::from_config(&config),
            state: TurnState::AwaitingMove(first),
            history: Vector::new(),
            seed: rng.seed(),
        };
        info!(
            "new {}x{} game: {} vs {}, {} moves first",
            config.size,
            config.size,
            config.player_names[PlayerId::FIRST],
            config.player_names[PlayerId::SECOND],
            first
        );
        game.begin_turn(first);

        Ok(game)
    }

    // === Queries ===

    /// Current turn state.
    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// The player to move, or `None` once the game is over.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.state.current_player()
    }

    /// Winner and loser, once the game is over.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }

    /// A player by ID.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        self.board.player(id)
    }

    /// The board, for rendering.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The rules in force.
    #[must_use]
    pub fn rules(&self) -> &DogRules {
        &self.rules
    }

    /// Seed of the RNG the game was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Successful moves so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    /// Legal destinations of the player to move; empty once the game is over.
    #[must_use]
    pub fn legal_destinations(&self) -> DestinationSet {
        self.current_player()
            .map(|player| self.legal_destinations_for(player))
            .unwrap_or_default()
    }

    /// Legal destinations of `player` on the current board, whoever's turn it is.
    #[must_use]
    pub fn legal_destinations_for(&self, player: PlayerId) -> DestinationSet {
        self.rules.legal_destinations(&self.board, player)
    }

    /// Whether `player` could move to `dest` on the current board.
    #[must_use]
    pub fn is_legal(&self, player: PlayerId, dest: Point) -> bool {
        self.rules.is_legal(&self.board, player, dest)
    }

    /// Legal moves of the player to move as `(move string, destination)`,
    /// in move-table order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<(&str, Point)> {
        let Some(player) = self.current_player() else {
            return Vec::new();
        };
        let origin = self.player(player).position();

        self.rules
            .moves()
            .entries()
            .map(|entry| (entry.name.as_str(), origin + entry.displacement))
            .filter(|&(_, dest)| self.is_legal(player, dest))
            .collect()
    }

    // === Commands ===

    /// Destination of `token` for the player to move.
    ///
    /// Fails with `InvalidMovestring` for malformed tokens; the destination
    /// itself is not checked for legality.
    pub fn resolve(&self, token: &str) -> DogResult<Point> {
        let player = self.current_player().ok_or(DogError::GameAlreadyOver)?;
        self.rules.resolve(&self.board, player, token)
    }

    /// Play a move string for the player to move.
    pub fn play_movestring(&mut self, token: &str) -> DogResult<MoveRecord> {
        let dest = self.resolve(token)?;
        self.play(dest)
    }

    /// Move the player to move to `dest`.
    pub fn play(&mut self, dest: Point) -> DogResult<MoveRecord> {
        let player = self.current_player().ok_or(DogError::GameAlreadyOver)?;
        self.move_player(player, dest)
    }

    /// Move `player` to `dest`.
    ///
    /// On success the vacated cell is burned, the move is recorded and the
    /// turn passes to the opponent (or the game ends if they cannot move).
    /// On failure nothing changes and the same player is still to move.
    pub fn move_player(&mut self, player: PlayerId, dest: Point) -> DogResult<MoveRecord> {
        match self.state {
            TurnState::GameOver(_) => return Err(DogError::GameAlreadyOver),
            TurnState::AwaitingMove(current) if current != player => {
                trace!("{} tried to move out of turn", player);
                return Err(DogError::NotYourTurn(player));
            }
            TurnState::AwaitingMove(_) => {}
        }

        let from = self.rules.apply_move(&mut self.board, player, dest)?;

        let record = MoveRecord {
            player,
            from,
            to: dest,
            number: self.history.len() as u32 + 1,
        };
        debug!("{} ({} living cells left)", record, self.board.living_count());
        self.history.push_back(record);

        self.begin_turn(player.other());
        Ok(record)
    }

    /// Hand the turn to `player`, or end the game if they cannot move.
    fn begin_turn(&mut self, player: PlayerId) {
        self.state = match self.rules.is_terminal(&self.board, player) {
            Some(outcome) => {
                info!(
                    "{} has no legal moves; {} wins after {} moves",
                    self.player(outcome.loser).name(),
                    self.player(outcome.winner).name(),
                    self.history.len()
                );
                TurnState::GameOver(outcome)
            }
            None => {
                debug!("{} to move", player);
                TurnState::AwaitingMove(player)
            }
        };
    }
}
