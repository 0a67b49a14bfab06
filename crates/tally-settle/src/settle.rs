//! Settlement validation and per-participant totals.

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use smol_str::SmolStr;
use tracing::{debug, warn};

use crate::issue::{Issue, IssueKind, IssuePath};
use crate::model::{Item, ParticipantBalance, Payer, Settlement, Split};
use crate::money::{amounts_agree, format_amount, is_representable};
use crate::solver::solve_shares;

#[derive(Debug, Default, Clone, Copy)]
struct Totals {
    paid: f64,
    owes: f64,
}

/// Collects issues and per-participant totals for one settlement.
struct Settler<'a> {
    items: &'a [Item],
    digits: u32,
    item_amounts: FxHashMap<&'a str, f64>,
    balances: IndexMap<SmolStr, Totals>,
    issues: Vec<Issue>,
}

/// Validate an expense and work out what everyone paid and owes.
///
/// Problems are collected into [`Settlement::issues`] rather than stopping
/// at the first one. An amount that fails to evaluate counts as zero.
/// Totals agree when, rounded to `digits` decimals, they differ by at most
/// one unit of the last decimal.
pub fn settle(payers: &[Payer], items: &[Item], splits: &[Split], digits: u32) -> Settlement {
    debug!(
        payers = payers.len(),
        items = items.len(),
        splits = splits.len(),
        digits,
        "settling expense"
    );

    let mut settler = Settler {
        items,
        digits,
        item_amounts: FxHashMap::default(),
        balances: IndexMap::new(),
        issues: Vec::new(),
    };

    settler.check_structure(payers, splits);

    let mut paid_total = 0.0;
    for (i, payer) in payers.iter().enumerate() {
        let path = IssuePath::root("payers").index(i).field("amountExpression");
        let amount = settler.evaluate_amount(&payer.amount_expression, path);
        settler.balance(&payer.participant_id).paid += amount;
        paid_total += amount;
    }

    let mut items_total = 0.0;
    for (i, item) in items.iter().enumerate() {
        let path = IssuePath::root("items").index(i).field("amountExpression");
        let amount = settler.evaluate_amount(&item.amount_expression, path);
        settler.item_amounts.entry(item.id.as_str()).or_insert(amount);
        items_total += amount;
    }

    for (i, split) in splits.iter().enumerate() {
        settler.settle_split(i, split);
    }

    if !payers.is_empty() && !items.is_empty() && settler.disagree(paid_total, items_total) {
        let message = format!(
            "Total paid ({}) must equal the items total ({})",
            format_amount(paid_total, digits),
            format_amount(items_total, digits)
        );
        settler.report(
            IssueKind::ReconciliationMismatch,
            IssuePath::root("payers"),
            message,
        );
    }

    settler.finish()
}

impl<'a> Settler<'a> {
    fn report(&mut self, kind: IssueKind, path: IssuePath, message: impl Into<String>) {
        self.issues.push(Issue::new(kind, path, message));
    }

    fn balance(&mut self, participant: &SmolStr) -> &mut Totals {
        self.balances.entry(participant.clone()).or_default()
    }

    fn disagree(&self, lhs: f64, rhs: f64) -> bool {
        !amounts_agree(lhs, rhs, self.digits)
    }

    /// Empty lists and item references, checked before any arithmetic.
    fn check_structure(&mut self, payers: &[Payer], splits: &[Split]) {
        let items = self.items;
        if payers.is_empty() {
            self.report(
                IssueKind::MissingEntries,
                IssuePath::root("payers"),
                "At least one payer is required",
            );
        }
        if items.is_empty() {
            self.report(
                IssueKind::MissingEntries,
                IssuePath::root("items"),
                "At least one item is required",
            );
        }
        if splits.is_empty() {
            self.report(
                IssueKind::MissingEntries,
                IssuePath::root("splits"),
                "At least one split is required",
            );
        }

        let mut known = FxHashSet::default();
        for (i, item) in items.iter().enumerate() {
            if !known.insert(item.id.as_str()) {
                self.report(
                    IssueKind::ReferentialError,
                    IssuePath::root("items").index(i).field("id"),
                    format!("Duplicate item id '{}'", item.id),
                );
            }
        }

        let mut referenced = FxHashSet::default();
        for (i, split) in splits.iter().enumerate() {
            let path = IssuePath::root("splits").index(i);
            if split.item_ids.is_empty() {
                self.report(
                    IssueKind::MissingEntries,
                    path.clone().field("itemIds"),
                    "A split needs at least one item",
                );
            }
            if split.shares.is_empty() {
                self.report(
                    IssueKind::MissingEntries,
                    path.clone().field("shares"),
                    "A split needs at least one share",
                );
            }
            for (j, id) in split.item_ids.iter().enumerate() {
                referenced.insert(id.as_str());
                if !known.contains(id.as_str()) {
                    self.report(
                        IssueKind::ReferentialError,
                        path.clone().field("itemIds").index(j),
                        format!("Split refers to unknown item '{}'", id),
                    );
                }
            }
        }

        for (i, item) in items.iter().enumerate() {
            if !referenced.contains(item.id.as_str()) {
                self.report(
                    IssueKind::ReferentialError,
                    IssuePath::root("items").index(i),
                    format!("Item '{}' is not part of any split", item.name),
                );
            }
        }
    }

    /// Evaluate a payer or item amount, reporting failures as zero.
    fn evaluate_amount(&mut self, expression: &str, path: IssuePath) -> f64 {
        match tally_expr::evaluate(expression, None) {
            Ok(amount) if amount.is_finite() && !is_representable(amount) => {
                self.report(
                    IssueKind::InvalidExpression,
                    path,
                    format!("Amount '{}' is too large", expression),
                );
                0.0
            }
            Ok(amount) => {
                if amount < 0.0 {
                    self.report(
                        IssueKind::NegativeAmount,
                        path,
                        format!("Amount '{}' must not be negative", expression),
                    );
                }
                amount
            }
            Err(err) => {
                self.report(
                    IssueKind::InvalidExpression,
                    path,
                    format!("Invalid amount '{}': {}", expression, err),
                );
                0.0
            }
        }
    }

    fn settle_split(&mut self, index: usize, split: &Split) {
        let path = IssuePath::root("splits").index(index);
        let total: f64 = split
            .item_ids
            .iter()
            .filter_map(|id| self.item_amounts.get(id.as_str()))
            .sum();

        let mut exprs = Vec::with_capacity(split.shares.len());
        for (k, share) in split.shares.iter().enumerate() {
            match tally_expr::parse(&share.share_expression) {
                Ok(expr) => exprs.push(expr),
                Err(err) => self.report(
                    IssueKind::InvalidExpression,
                    path.clone()
                        .field("shares")
                        .index(k)
                        .field("shareExpression"),
                    format!("Invalid share '{}': {}", share.share_expression, err),
                ),
            }
        }
        if split.shares.is_empty() || exprs.len() != split.shares.len() {
            return;
        }

        let values = match solve_shares(total, &exprs) {
            Ok(values) => values,
            Err(err) => {
                self.report(
                    IssueKind::UnsolvableShare,
                    path.field("shares"),
                    err.to_string(),
                );
                return;
            }
        };

        let mut share_total = 0.0;
        let mut all_finite = true;
        for (k, (share, value)) in split.shares.iter().zip(values).enumerate() {
            let share_path = path
                .clone()
                .field("shares")
                .index(k)
                .field("shareExpression");
            if !value.is_finite() {
                all_finite = false;
                self.report(
                    IssueKind::InvalidShare,
                    share_path,
                    format!("Share '{}' is not a number", share.share_expression),
                );
                continue;
            }
            if value < 0.0 {
                self.report(
                    IssueKind::InvalidShare,
                    share_path,
                    format!(
                        "Share '{}' comes to {}, which is negative",
                        share.share_expression,
                        format_amount(value, self.digits)
                    ),
                );
            }
            self.balance(&share.participant_id).owes += value;
            share_total += value;
        }

        if all_finite && self.disagree(share_total, total) {
            let message = format!(
                "Shares ({}) must equal the items total ({})",
                format_amount(share_total, self.digits),
                format_amount(total, self.digits)
            );
            self.report(
                IssueKind::ReconciliationMismatch,
                path.field("shares"),
                message,
            );
        }
    }

    fn finish(self) -> Settlement {
        if !self.issues.is_empty() {
            warn!(issues = self.issues.len(), "settlement has issues");
        }
        let digits = self.digits;
        let participants = self
            .balances
            .into_iter()
            .map(|(participant_id, totals)| ParticipantBalance {
                participant_id,
                paid_amount: format_amount(totals.paid, digits),
                owes_amount: format_amount(totals.owes, digits),
            })
            .collect();
        Settlement {
            participants,
            issues: self.issues,
        }
    }
}
