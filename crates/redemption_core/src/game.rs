//! The scoring engine.
//!
//! [`Game`] is the aggregate root: it owns every score, decides busts and
//! exact hits, opens redemption rounds and escalates into overtime. The
//! engine never ends by itself; callers observe [`Game::is_over`].

use crate::action::Shot;
use crate::contracts::{Contract, RedemptionContract, ShotContract};
use crate::error::GameError;
use crate::outcome::{RedemptionOutcome, RoundKind, ShotOutcome};
use crate::rules::{resolve_shot, GameRules, ShotResolution};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

/// Where the game currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Racing to the starting target.
    Regulation,
    /// Racing to a raised target after a tie.
    Overtime,
    /// Someone hit the target; the others owe one redemption shot each.
    PendingRedemption(RoundKind),
    /// A winner stands and nobody is left to redeem.
    Finished,
}

/// Complete scoring state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub(crate) rules: GameRules,
    pub(crate) players: Vec<String>,
    pub(crate) scores: BTreeMap<String, i32>,
    pub(crate) target_score: i32,
    pub(crate) in_overtime: bool,
    pub(crate) winner: Option<String>,
    pub(crate) redemption_players: Vec<String>,
}

impl Game {
    /// Creates a game with the default rules (target 301, overtime +100).
    #[instrument]
    pub fn new() -> Self {
        Self::with_rules(GameRules::default())
    }

    /// Creates a game with custom rules.
    #[instrument]
    pub fn with_rules(rules: GameRules) -> Self {
        Self {
            rules,
            players: Vec::new(),
            scores: BTreeMap::new(),
            target_score: *rules.target_score(),
            in_overtime: false,
            winner: None,
            redemption_players: Vec::new(),
        }
    }

    /// Adds a player with a score of zero.
    ///
    /// Returns `Ok(false)` without changing anything if the name is already
    /// playing. The name is stored exactly as given and must be used the
    /// same way when scoring.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::EmptyPlayerName`] for an empty or blank name.
    #[instrument(skip(self))]
    pub fn add_player(&mut self, name: &str) -> Result<bool, GameError> {
        if name.trim().is_empty() {
            warn!("Rejected empty player name");
            return Err(GameError::EmptyPlayerName);
        }
        if self.players.iter().any(|p| p == name) {
            debug!(player = %name, "Player already present");
            return Ok(false);
        }

        self.players.push(name.to_string());
        self.scores.insert(name.to_string(), 0);
        info!(player = %name, players = self.players.len(), "Player added");
        Ok(true)
    }

    /// Records a normal-turn shot.
    ///
    /// An overshoot leaves the total unchanged and reports [`ShotOutcome::Bust`].
    /// Hitting the target exactly makes `player` the provisional winner and
    /// owes every other current player one redemption shot.
    ///
    /// # Errors
    ///
    /// - [`GameError::UnknownPlayer`] if `player` is not playing
    /// - [`GameError::GameDecided`] if a winner is already set
    ///
    /// The state is unchanged in both cases.
    #[instrument(skip(self), fields(target = self.target_score))]
    pub fn record_score(&mut self, player: &str, points: i32) -> Result<ShotOutcome, GameError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        ShotContract::pre(&*self, player)?;

        let outcome = match self.apply_points(player, points) {
            ShotResolution::Bust => {
                debug!(player, total = ?self.score(player), "Bust, shot discarded");
                ShotOutcome::Bust
            }
            ShotResolution::Exact(_) => {
                self.winner = Some(player.to_string());
                self.redemption_players = self
                    .players
                    .iter()
                    .filter(|p| p.as_str() != player)
                    .cloned()
                    .collect();
                let kind = self.round_kind();
                info!(
                    player,
                    %kind,
                    redeeming = ?self.redemption_players,
                    "Target reached, redemption round begins"
                );
                ShotOutcome::RedemptionRoundBegins(kind)
            }
            ShotResolution::Under(total) => {
                debug!(player, total, "Score recorded");
                ShotOutcome::Scored
            }
        };

        #[cfg(debug_assertions)]
        ShotContract::post(&before, self)?;

        Ok(outcome)
    }

    /// Resolves one redemption round from a batch of shots.
    ///
    /// Shots from players who do not owe a redemption shot are skipped.
    /// Every other shot is applied in order against the player's running
    /// total, so repeated entries compound. If nobody lands exactly on the
    /// target the provisional winner is final; otherwise the tying players
    /// (in shot order) and the previous leader advance to overtime with the
    /// target raised by the overtime increment.
    ///
    /// Calling this again after the round was resolved reports the standing
    /// winner without changing anything.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoPendingRedemption`] if there is no provisional
    /// winner to redeem against.
    #[instrument(skip(self, shots), fields(shots = shots.len(), target = self.target_score))]
    pub fn process_redemption(&mut self, shots: &[Shot]) -> Result<RedemptionOutcome, GameError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        RedemptionContract::pre(&*self, shots)?;
        let leader = self.winner.clone().ok_or(GameError::NoPendingRedemption)?;

        let mut advancing: Vec<String> = Vec::new();
        for shot in shots {
            if !self.redemption_players.contains(&shot.player) {
                warn!(%shot, "Skipping shot from player not in redemption");
                continue;
            }

            match self.apply_points(&shot.player, shot.points) {
                ShotResolution::Exact(_) => {
                    debug!(player = %shot.player, "Redemption shot ties the leader");
                    if !advancing.contains(&shot.player) {
                        advancing.push(shot.player.clone());
                    }
                }
                ShotResolution::Bust => {
                    debug!(player = %shot.player, "Redemption shot busts");
                }
                ShotResolution::Under(total) => {
                    debug!(player = %shot.player, total, "Redemption shot falls short");
                }
            }
        }

        let outcome = if advancing.is_empty() {
            self.redemption_players.clear();
            info!(winner = %leader, "No ties, winner stands");
            RedemptionOutcome::WinnerDeclared(leader)
        } else {
            advancing.push(leader);
            self.players = advancing.clone();
            self.winner = None;
            self.start_overtime();
            info!(
                target = self.target_score,
                players = ?self.players,
                "Tie, players advance to overtime"
            );
            RedemptionOutcome::AdvancedToOvertime {
                target: self.target_score,
                players: advancing,
            }
        };

        #[cfg(debug_assertions)]
        RedemptionContract::post(&before, self)?;

        Ok(outcome)
    }

    /// Returns the players in turn order.
    pub fn players(&self) -> &[String] {
        &self.players
    }

    /// Returns every recorded total, including players who did not advance.
    pub fn scores(&self) -> &BTreeMap<String, i32> {
        &self.scores
    }

    /// Returns a player's total.
    pub fn score(&self, player: &str) -> Option<i32> {
        self.scores.get(player).copied()
    }

    /// Returns the current target.
    pub fn target_score(&self) -> i32 {
        self.target_score
    }

    /// Returns true once any overtime round has begun.
    pub fn in_overtime(&self) -> bool {
        self.in_overtime
    }

    /// Returns the winner or provisional winner.
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// Returns the players who still owe a redemption shot.
    pub fn redemption_players(&self) -> &[String] {
        &self.redemption_players
    }

    /// Returns the rules this game was created with.
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    /// Returns true if a redemption round is waiting to be resolved.
    pub fn redemption_pending(&self) -> bool {
        self.winner.is_some() && !self.redemption_players.is_empty()
    }

    /// Returns true once a winner stands with no redemption pending.
    pub fn is_over(&self) -> bool {
        self.winner.is_some() && self.redemption_players.is_empty()
    }

    /// Returns the current phase of play.
    pub fn phase(&self) -> Phase {
        if self.is_over() {
            Phase::Finished
        } else if self.redemption_pending() {
            Phase::PendingRedemption(self.round_kind())
        } else if self.in_overtime {
            Phase::Overtime
        } else {
            Phase::Regulation
        }
    }

    fn round_kind(&self) -> RoundKind {
        if self.in_overtime {
            RoundKind::Overtime
        } else {
            RoundKind::Regulation
        }
    }

    /// Applies points to a player's running total, storing it unless busted.
    fn apply_points(&mut self, player: &str, points: i32) -> ShotResolution {
        let total = self.score(player).unwrap_or_default();
        let resolution = resolve_shot(total, points, self.target_score);
        if let Some(new_total) = resolution.new_total() {
            self.scores.insert(player.to_string(), new_total);
        }
        resolution
    }

    fn start_overtime(&mut self) {
        self.in_overtime = true;
        self.target_score = self
            .target_score
            .saturating_add(*self.rules.overtime_increment());
        self.redemption_players.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
