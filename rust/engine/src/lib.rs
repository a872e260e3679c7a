//! # dudo-engine: Liar's Dice Rules Engine
//!
//! The rules core for a multiplayer turn-based bluffing dice game:
//! players hold secret hands of dice, escalate a public bid about
//! what those hands contain, and resolve disputes by revealing the
//! truth. The engine validates bids, resolves bluff and spot-on
//! calls, removes dice, rotates turns around a fixed roster, keeps
//! score, and appends every transition to an audit log.
//!
//! ## Core Modules
//!
//! - [`dice`] - Deterministic die rolling with ChaCha20 RNG
//! - [`bid`] - The (count, rank) bid value type
//! - [`player`] - Player identity and the move enum
//! - [`roster`] - Circular next-player resolution
//! - [`rules`] - Bid range and escalation validation
//! - [`game`] - Game state snapshot and rule constants
//! - [`engine`] - Main orchestration: bids, disputes, rounds
//! - [`logger`] - Finished-game records and JSONL serialization
//! - [`errors`] - Error types and the move/roster taxonomy
//!
//! ## Quick Start
//!
//! ```rust
//! use dudo_engine::bid::Bid;
//! use dudo_engine::engine::Engine;
//! use dudo_engine::game::GameConfig;
//! use dudo_engine::player::PlayerId;
//!
//! let players = vec![PlayerId::new("alice"), PlayerId::new("bob")];
//! let mut engine = Engine::new(Some(7), players, GameConfig::default()).unwrap();
//!
//! engine.place_bid(Bid::new(1, 4)).unwrap();
//! engine.call_bluff().unwrap();
//! assert_eq!(engine.state().total_dice(), 9);
//! ```
//!
//! ## Deterministic Gameplay
//!
//! All rolls are reproducible using seeded RNG:
//!
//! ```rust
//! use dudo_engine::dice::DiceRoller;
//!
//! // Same seed produces the same hands
//! let mut a = DiceRoller::new_with_seed(42);
//! let mut b = DiceRoller::new_with_seed(42);
//! assert_eq!(a.roll_hand(5), b.roll_hand(5));
//! ```
//!
//! ## Failure Semantics
//!
//! Every operation either fully applies and logs, or fails with a
//! [`errors::GameError`] and leaves the state untouched:
//!
//! ```rust
//! use dudo_engine::bid::Bid;
//! use dudo_engine::engine::Engine;
//! use dudo_engine::game::GameConfig;
//! use dudo_engine::player::PlayerId;
//!
//! let players = vec![PlayerId::new("alice"), PlayerId::new("bob")];
//! let mut engine = Engine::new(Some(7), players, GameConfig::default()).unwrap();
//!
//! // no standing bid yet, so a dispute is illegal and changes nothing
//! let before = engine.state().clone();
//! assert!(engine.call_bluff().is_err());
//! assert_eq!(engine.state(), &before);
//! ```

pub mod bid;
pub mod dice;
pub mod engine;
pub mod errors;
pub mod game;
pub mod logger;
pub mod player;
pub mod roster;
pub mod rules;
