//! Turn controller: sequences normal turns and redemption rounds.
//!
//! The engine only knows how to score shots. The controller decides whose
//! throw it is, gathers exactly one redemption shot from every trailing
//! player, hands the batch to the engine in one call and words the status
//! line the scoreboard shows.

use derive_getters::Getters;
use redemption_core::{Game, GameError, GameRules, RedemptionOutcome, RoundKind, Shot, ShotOutcome};
use tracing::{debug, info, instrument, warn};

/// What happened on a submitted throw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum TurnEvent {
    /// Points were added and the turn passed on.
    Scored,
    /// The throw overshot and was discarded.
    Bust,
    /// Someone hit the target; redemption shots are being collected.
    RedemptionStarted,
    /// A redemption shot was collected; more are owed.
    RedemptionShot,
    /// The redemption round ended without a tie.
    WinnerDeclared,
    /// The redemption round ended in a tie and overtime began.
    OvertimeStarted,
    /// The game was already over; nothing changed.
    GameOver,
}

/// Outcome of one submitted throw.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct TurnReport {
    /// What happened.
    event: TurnEvent,
    /// Status line for display.
    status: String,
}

impl TurnReport {
    fn new(event: TurnEvent, status: String) -> Self {
        Self { event, status }
    }
}

/// Error returned when a throw cannot be taken.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum TurnError {
    /// Nobody has joined yet.
    #[display("No players have joined the game")]
    NoPlayers,

    /// The engine rejected the call.
    #[display("{}", _0)]
    #[from]
    Game(GameError),
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::NoPlayers => None,
            TurnError::Game(err) => Some(err),
        }
    }
}

/// Redemption shots collected so far in the current round.
#[derive(Debug, Clone, Default)]
struct RedemptionBatch {
    shooters: Vec<String>,
    shots: Vec<Shot>,
}

impl RedemptionBatch {
    fn next_shooter(&self) -> Option<&str> {
        self.shooters.get(self.shots.len()).map(String::as_str)
    }
}

/// Drives a [`Game`] one throw at a time.
#[derive(Debug, Clone)]
pub struct TurnController {
    game: Game,
    current_index: usize,
    redemption: Option<RedemptionBatch>,
    status: String,
}

impl TurnController {
    /// Creates a controller for a new game with the given rules.
    #[instrument]
    pub fn new(rules: GameRules) -> Self {
        Self {
            game: Game::with_rules(rules),
            current_index: 0,
            redemption: None,
            status: String::new(),
        }
    }

    /// Adds a player, trimming surrounding whitespace from the typed name.
    /// Rotation restarts from the first player.
    #[instrument(skip(self))]
    pub fn add_player(&mut self, name: &str) -> Result<bool, TurnError> {
        let added = self.game.add_player(name.trim())?;
        if added {
            self.current_index = 0;
        }
        Ok(added)
    }

    /// Returns the underlying game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the latest status line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Returns true while redemption shots are being collected.
    pub fn redemption_in_progress(&self) -> bool {
        self.redemption.is_some()
    }

    /// Returns true once a winner stands and no redemption is being collected.
    pub fn is_over(&self) -> bool {
        self.redemption.is_none() && self.game.is_over()
    }

    /// Returns whose throw it is.
    pub fn current_player(&self) -> Option<&str> {
        match &self.redemption {
            Some(batch) => batch.next_shooter(),
            None => self
                .game
                .players()
                .get(self.current_index)
                .map(String::as_str),
        }
    }

    /// Returns `(player, total)` rows for everyone still playing.
    pub fn scoreboard(&self) -> Vec<(String, i32)> {
        self.game
            .players()
            .iter()
            .map(|p| (p.clone(), self.game.score(p).unwrap_or_default()))
            .collect()
    }

    /// Submits the current player's throw.
    ///
    /// # Errors
    ///
    /// Returns [`TurnError::NoPlayers`] before anyone has joined, or the
    /// engine's error if it rejects the shot. Nothing changes in either case.
    #[instrument(skip(self), fields(player = ?self.current_player()))]
    pub fn submit(&mut self, points: i32) -> Result<TurnReport, TurnError> {
        if self.is_over() {
            let winner = self.game.winner().unwrap_or_default();
            let report = TurnReport::new(
                TurnEvent::GameOver,
                format!("Game over. {} was the final winner.", winner),
            );
            return Ok(self.publish(report));
        }

        let report = if self.redemption.is_some() {
            self.redemption_shot(points)?
        } else {
            self.normal_shot(points)?
        };
        Ok(self.publish(report))
    }

    fn normal_shot(&mut self, points: i32) -> Result<TurnReport, TurnError> {
        let player = self
            .game
            .players()
            .get(self.current_index)
            .cloned()
            .ok_or(TurnError::NoPlayers)?;

        let outcome = self.game.record_score(&player, points)?;
        let total = self.game.score(&player).unwrap_or_default();
        match outcome {
            ShotOutcome::Scored => {
                self.advance();
                Ok(TurnReport::new(
                    TurnEvent::Scored,
                    format!("{} scores {}. Total {}.", player, points, total),
                ))
            }
            ShotOutcome::Bust => {
                self.advance();
                Ok(TurnReport::new(
                    TurnEvent::Bust,
                    format!("{} busted. Score stays at {}.", player, total),
                ))
            }
            ShotOutcome::RedemptionRoundBegins(kind) => {
                let target = self.game.target_score();
                let status = match kind {
                    RoundKind::Regulation => {
                        format!("{} reached {}! Redemption for others...", player, target)
                    }
                    RoundKind::Overtime => format!(
                        "{} reached {} in overtime! Redemption for others...",
                        player, target
                    ),
                };
                self.begin_redemption();
                if self.current_player().is_none() {
                    debug!("Nobody left to redeem");
                    return self.finalize_redemption();
                }
                Ok(TurnReport::new(TurnEvent::RedemptionStarted, status))
            }
        }
    }

    fn redemption_shot(&mut self, points: i32) -> Result<TurnReport, TurnError> {
        let Some(batch) = self.redemption.as_mut() else {
            return self.normal_shot(points);
        };
        let Some(shooter) = batch.next_shooter().map(str::to_string) else {
            return self.finalize_redemption();
        };

        debug!(player = %shooter, points, "Redemption shot collected");
        batch.shots.push(Shot::new(shooter.clone(), points));

        if batch.next_shooter().is_none() {
            return self.finalize_redemption();
        }
        Ok(TurnReport::new(
            TurnEvent::RedemptionShot,
            format!("{} tries redemption with {} points.", shooter, points),
        ))
    }

    fn begin_redemption(&mut self) {
        let shooters = self.game.redemption_players().to_vec();
        info!(shooters = ?shooters, "Collecting redemption shots");
        self.redemption = Some(RedemptionBatch {
            shooters,
            shots: Vec::new(),
        });
    }

    fn finalize_redemption(&mut self) -> Result<TurnReport, TurnError> {
        let batch = self.redemption.take().unwrap_or_default();
        self.current_index = 0;

        match self.game.process_redemption(&batch.shots) {
            Ok(RedemptionOutcome::WinnerDeclared(winner)) => {
                info!(%winner, "Final winner");
                Ok(TurnReport::new(
                    TurnEvent::WinnerDeclared,
                    format!("Final Winner: {}. Game Over.", winner),
                ))
            }
            Ok(RedemptionOutcome::AdvancedToOvertime { target, players }) => {
                info!(target, players = ?players, "Overtime");
                Ok(TurnReport::new(
                    TurnEvent::OvertimeStarted,
                    format!(
                        "Overtime in progress! Target = {}. Players = {}",
                        target,
                        players.join(", ")
                    ),
                ))
            }
            Err(err) => {
                warn!(error = %err, "Redemption batch rejected");
                Err(err.into())
            }
        }
    }

    fn advance(&mut self) {
        let count = self.game.players().len();
        if count > 0 {
            self.current_index = (self.current_index + 1) % count;
        }
    }

    fn publish(&mut self, report: TurnReport) -> TurnReport {
        self.status = report.status().clone();
        report
    }
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new(GameRules::default())
    }
}
