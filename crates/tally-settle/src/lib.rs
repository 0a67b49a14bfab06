//! # Tally Settlement
//!
//! Turns payers, items and splits into per-participant amounts.
//!
//! Every amount is a free-text expression evaluated by `tally-expr`. Shares
//! may use the variable `x` for "whatever is left, in proportion": the shares
//! `2x` and `1x` over a 90 item solve to 60 and 30. The engine checks that
//! every split's shares add up to its items and that the payers cover the
//! items, to within the currency's smallest unit.
//!
//! Problems with the input never abort settlement. They are collected as
//! [`Issue`]s so that every one of them can be shown at once.
//!
//! ## Example
//!
//! ```
//! use tally_settle::{settle, Item, Payer, Share, Split};
//!
//! let payers = vec![Payer::new("alice", "90")];
//! let items = vec![Item::new("pizza", "Pizza", "90")];
//! let splits = vec![Split::new(
//!     "s1",
//!     ["pizza"],
//!     vec![Share::new("alice", "2x"), Share::new("bob", "1x")],
//! )];
//!
//! let settlement = settle(&payers, &items, &splits, 2);
//! assert!(settlement.issues.is_empty());
//! assert_eq!(settlement.participants[1].owes_amount, "30.00");
//! ```

pub mod currency;
mod draft;
mod issue;
mod model;
mod money;
mod settle;
mod solver;

pub use draft::{DraftError, SettlementDraft};
pub use issue::{Issue, IssueKind, IssuePath, PathSegment};
pub use model::{Item, ParticipantBalance, Payer, Settlement, Share, Split};
pub use money::{format_amount, is_representable, tolerance};
pub use settle::settle;
pub use solver::{evaluate_shares, solve_shares, SettleError};
