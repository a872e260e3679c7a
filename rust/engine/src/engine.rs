use std::collections::BTreeMap;

use crate::bid::Bid;
use crate::dice::DiceRoller;
use crate::errors::GameError;
use crate::game::{GameConfig, GameState};
use crate::player::PlayerId;
use crate::roster::next_active_player;
use crate::rules::validate_bid;

/// Orchestrates one game of liar's dice: bid escalation, bluff and
/// spot-on disputes, die removal, and round/game completion.
///
/// The engine owns the [`GameState`] snapshot and the seeded
/// [`DiceRoller`]; the owning service layer serializes access per
/// game (at most one in-flight mutation), persists the snapshot
/// between calls, and maps [`GameError`] kinds to responses.
///
/// Every operation is atomic: all fallible checks and all successor
/// computations run before the first mutation, so an `Err` return
/// means the caller observes an unchanged state.
///
/// # Examples
///
/// ```
/// use dudo_engine::bid::Bid;
/// use dudo_engine::engine::Engine;
/// use dudo_engine::game::GameConfig;
/// use dudo_engine::player::PlayerId;
///
/// let players = vec![PlayerId::new("alice"), PlayerId::new("bob")];
/// let mut engine = Engine::new(Some(42), players, GameConfig::default()).unwrap();
///
/// // alice sorts first, so she opens the betting round
/// assert_eq!(engine.active_player().as_str(), "alice");
/// engine.place_bid(Bid::new(2, 3)).unwrap();
/// assert_eq!(engine.state().high_bid, Some(Bid::new(2, 3)));
/// assert_eq!(engine.active_player().as_str(), "bob");
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    state: GameState,
    roller: DiceRoller,
    names: BTreeMap<PlayerId, String>,
}

/// Where a resolved dispute sends the game next. Computed in full
/// before any mutation is applied.
enum TurnOutcome {
    RoundContinues { next_active: PlayerId },
    RoundComplete { winner: PlayerId, game_over: bool },
}

struct DisputePlan {
    losers: Vec<PlayerId>,
    outcome: TurnOutcome,
}

impl Engine {
    /// Creates a game: sorted roster, full hands, zero scores, a log
    /// seeded with the start entry, and the first roster member
    /// active.
    ///
    /// # Errors
    ///
    /// [`GameError::NotEnoughPlayers`] for fewer than two ids,
    /// [`GameError::DuplicatePlayer`] when ids repeat.
    pub fn new(
        seed: Option<u64>,
        players: Vec<PlayerId>,
        config: GameConfig,
    ) -> Result<Self, GameError> {
        if players.len() < 2 {
            return Err(GameError::NotEnoughPlayers(players.len()));
        }
        let mut roster = players;
        roster.sort();
        if let Some(pair) = roster.windows(2).find(|w| w[0] == w[1]) {
            return Err(GameError::DuplicatePlayer(pair[0].clone()));
        }

        let seed = seed.unwrap_or(0xD1CE_D1CE);
        let mut roller = DiceRoller::new_with_seed(seed);
        let hands: BTreeMap<PlayerId, Vec<u8>> = roster
            .iter()
            .map(|p| (p.clone(), roller.roll_hand(config.hand_size as usize)))
            .collect();
        let scores: BTreeMap<PlayerId, u32> =
            roster.iter().map(|p| (p.clone(), 0)).collect();

        let first = roster[0].clone();
        let mut state = GameState {
            config,
            roster,
            active_player: first,
            hands,
            scores,
            high_bid: None,
            high_bidder: None,
            log: Vec::new(),
            active: true,
            winner: None,
        };
        state.log_entry_stamped("Started a new game.");

        Ok(Self {
            state,
            roller,
            names: BTreeMap::new(),
        })
    }

    /// Resumes a previously persisted snapshot with a fresh roller.
    ///
    /// The caller is expected to hand back a snapshot this engine
    /// produced; roster membership is re-checked on every operation
    /// but the snapshot is not audited wholesale here.
    pub fn from_state(state: GameState, seed: u64) -> Self {
        Self {
            state,
            roller: DiceRoller::new_with_seed(seed),
            names: BTreeMap::new(),
        }
    }

    /// Installs a display-name map used when writing log text. Ids
    /// without an entry are logged verbatim.
    pub fn with_display_names(mut self, names: BTreeMap<PlayerId, String>) -> Self {
        self.names = names;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.state.config
    }

    pub fn active_player(&self) -> &PlayerId {
        &self.state.active_player
    }

    pub fn high_bid(&self) -> Option<Bid> {
        self.state.high_bid
    }

    pub fn high_bidder(&self) -> Option<&PlayerId> {
        self.state.high_bidder.as_ref()
    }

    pub fn hand_of(&self, id: &PlayerId) -> Option<&[u8]> {
        self.state.hand(id)
    }

    pub fn scores(&self) -> &BTreeMap<PlayerId, u32> {
        &self.state.scores
    }

    pub fn log(&self) -> &[String] {
        &self.state.log
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    pub fn winner(&self) -> Option<&PlayerId> {
        self.state.winner.as_ref()
    }

    /// The active player asserts at least `bid.count` dice of face
    /// `bid.rank`. On success the bid becomes the standing high bid
    /// and the turn rotates to the next living player.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] on a terminal game, the
    /// [`crate::rules::validate_bid`] errors for range and
    /// escalation violations. The state is unchanged on error.
    pub fn place_bid(&mut self, bid: Bid) -> Result<(), GameError> {
        self.ensure_playable()?;
        validate_bid(&self.state.config, self.state.high_bid.as_ref(), &bid)?;
        let next = next_active_player(
            &self.state.roster,
            &self.state.living_players(),
            &self.state.active_player,
        )?;

        // checks passed, commit
        let bidder = self.state.active_player.clone();
        let entry = format!("{} placed the bid {}", self.display(&bidder), bid);
        self.state.log_entry_stamped(entry);
        self.state.high_bid = Some(bid);
        self.state.high_bidder = Some(bidder);
        self.state.active_player = next;
        let turn = format!("It is now {}'s turn", self.display(&self.state.active_player));
        self.state.log_entry(turn);
        Ok(())
    }

    /// The active player asserts the standing bid was a bluff. If the
    /// high bidder's revealed hand holds fewer matching dice than the
    /// bid claims, the bidder loses a die; otherwise the caller does.
    ///
    /// # Errors
    ///
    /// [`GameError::GameOver`] on a terminal game,
    /// [`GameError::NoStandingBid`] when nothing has been bid since
    /// the last hand refill. The state is unchanged on error.
    pub fn call_bluff(&mut self) -> Result<(), GameError> {
        self.ensure_playable()?;
        let (bid, bidder) = self.standing_bid()?;
        let actual = self.count_matching(&bidder, bid.rank);
        let call_correct = (actual as u8) < bid.count;
        let caller = self.state.active_player.clone();
        let loser = if call_correct { bidder.clone() } else { caller.clone() };
        let plan = self.plan_removal(vec![loser.clone()])?;

        self.state
            .log_entry_stamped(format!("{} called a bluff", self.display(&caller)));
        self.log_reveal(&bidder);
        let verdict = if call_correct { "Correct!" } else { "Incorrect!" };
        let outcome = format!("{} {} loses a die", verdict, self.display(&loser));
        self.state.log_entry(outcome);
        self.apply_resolution(plan);
        Ok(())
    }

    /// The active player asserts the standing bid is exactly right.
    /// If the high bidder's revealed hand holds exactly the claimed
    /// number of matching dice, every other living player loses a
    /// die; otherwise the caller loses one.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Engine::call_bluff`]; the state is
    /// unchanged on error.
    pub fn call_spot_on(&mut self) -> Result<(), GameError> {
        self.ensure_playable()?;
        let (bid, bidder) = self.standing_bid()?;
        let actual = self.count_matching(&bidder, bid.rank);
        let call_correct = actual as u8 == bid.count;
        let caller = self.state.active_player.clone();
        let losers: Vec<PlayerId> = if call_correct {
            self.state
                .living_players()
                .into_iter()
                .filter(|p| *p != caller)
                .collect()
        } else {
            vec![caller.clone()]
        };
        let plan = self.plan_removal(losers)?;

        self.state
            .log_entry_stamped(format!("{} called spot on", self.display(&caller)));
        self.log_reveal(&bidder);
        let outcome = if call_correct {
            "Correct! Everyone else loses a die".to_string()
        } else {
            format!("Incorrect! {} loses a die", self.display(&caller))
        };
        self.state.log_entry(outcome);
        self.apply_resolution(plan);
        Ok(())
    }

    fn ensure_playable(&self) -> Result<(), GameError> {
        if !self.state.active {
            return Err(GameError::GameOver);
        }
        if !self.state.roster.contains(&self.state.active_player) {
            return Err(GameError::NotInRoster(self.state.active_player.clone()));
        }
        Ok(())
    }

    fn standing_bid(&self) -> Result<(Bid, PlayerId), GameError> {
        match (self.state.high_bid, self.state.high_bidder.clone()) {
            (Some(bid), Some(bidder)) => Ok((bid, bidder)),
            _ => Err(GameError::NoStandingBid),
        }
    }

    /// Dice in `player`'s hand whose face equals `rank` exactly.
    fn count_matching(&self, player: &PlayerId, rank: u8) -> usize {
        self.state
            .hand(player)
            .map_or(0, |h| h.iter().filter(|&&d| d == rank).count())
    }

    /// Works out everything a dispute resolution will do before any
    /// of it happens: who loses dice, whether the round or the game
    /// ends, and who acts next if play continues.
    fn plan_removal(&self, losers: Vec<PlayerId>) -> Result<DisputePlan, GameError> {
        for loser in &losers {
            if !self.state.is_living(loser) {
                return Err(GameError::EmptyHand(loser.clone()));
            }
        }
        let living_after: Vec<PlayerId> = self
            .state
            .roster
            .iter()
            .filter(|p| {
                let mut len = self.state.hands.get(*p).map_or(0, Vec::len);
                if losers.contains(*p) {
                    len = len.saturating_sub(1);
                }
                len > 0
            })
            .cloned()
            .collect();

        let outcome = if living_after.len() == 1 {
            let winner = living_after[0].clone();
            let game_over = self.state.score(&winner) + 1 >= self.state.config.win_score;
            TurnOutcome::RoundComplete { winner, game_over }
        } else {
            let next_active = next_active_player(
                &self.state.roster,
                &living_after,
                &self.state.active_player,
            )?;
            TurnOutcome::RoundContinues { next_active }
        };
        Ok(DisputePlan { losers, outcome })
    }

    /// Commits a planned resolution: removes the dice, then runs turn
    /// completion. Infallible by construction; every check already
    /// happened in [`Engine::plan_removal`].
    fn apply_resolution(&mut self, plan: DisputePlan) {
        for loser in &plan.losers {
            if let Some(hand) = self.state.hands.get_mut(loser) {
                // removal position carries no game meaning, only the
                // count matters
                hand.remove(0);
            }
        }
        match plan.outcome {
            TurnOutcome::RoundComplete { winner, game_over } => {
                self.complete_round(winner, game_over);
            }
            TurnOutcome::RoundContinues { next_active } => {
                self.state.log_entry("Turn complete, rerolling hands");
                self.reroll_hands();
                self.state.active_player = next_active;
                let turn = format!(
                    "It is now {}'s turn",
                    self.display(&self.state.active_player)
                );
                self.state.log_entry(turn);
            }
        }
    }

    fn complete_round(&mut self, winner: PlayerId, game_over: bool) {
        let new_score = self.state.score(&winner) + 1;
        self.state.scores.insert(winner.clone(), new_score);
        if game_over {
            let entry = format!("Game over, {} wins!", self.display(&winner));
            self.state.log_entry_stamped(entry);
            self.state.active = false;
            self.state.winner = Some(winner);
        } else {
            let entry = format!(
                "Round complete, {} gains a point ({} -> {})",
                self.display(&winner),
                new_score - 1,
                new_score
            );
            self.state.log_entry(entry);
            self.state.log_entry("Reloading player hands");
            // no rotation on a fresh round; the active player stays
            // put, rotation only happens on bids and mid-round turn
            // completion
            self.refill_hands();
        }
    }

    /// Round boundary: everyone (eliminated players included) back to
    /// a full hand, standing bid cleared.
    fn refill_hands(&mut self) {
        self.state.high_bid = None;
        self.state.high_bidder = None;
        let size = self.state.config.hand_size as usize;
        for player in self.state.roster.clone() {
            let hand = self.roller.roll_hand(size);
            self.state.hands.insert(player, hand);
        }
    }

    /// Mid-round turn boundary: every hand rerolled at its current
    /// (possibly reduced) size, standing bid cleared. Lost dice come
    /// back only at round boundaries.
    fn reroll_hands(&mut self) {
        self.state.high_bid = None;
        self.state.high_bidder = None;
        for player in self.state.roster.clone() {
            let size = self.state.hands.get(&player).map_or(0, Vec::len);
            let hand = self.roller.roll_hand(size);
            self.state.hands.insert(player, hand);
        }
    }

    fn log_reveal(&mut self, bidder: &PlayerId) {
        let revealed = self.state.hands.get(bidder).cloned().unwrap_or_default();
        let entry = format!(
            "{}'s actual hand was {:?}",
            self.display(bidder),
            revealed
        );
        self.state.log_entry(entry);
    }

    fn display(&self, id: &PlayerId) -> String {
        self.names
            .get(id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}
