//! Recursive descent parser for expense statements.

use smol_str::SmolStr;
use tally_ast::{AmountExpr, ExpenseAst, SplitType, Token, TokenKind};

use crate::error::ParseError;

/// The parts of a statement recognised so far.
#[derive(Default)]
struct Statement {
    payer: Option<SmolStr>,
    amount: Option<AmountExpr>,
    item: Option<SmolStr>,
    split: Option<(SplitType, Vec<SmolStr>)>,
}

/// Parser over the significant tokens of one statement.
pub struct Parser<'source> {
    source: &'source str,
    tokens: Vec<Token>,
    pos: usize,
    errors: Vec<ParseError>,
}

impl<'source> Parser<'source> {
    /// Create a parser. `tokens` must not contain whitespace tokens.
    pub fn new(source: &'source str, tokens: Vec<Token>) -> Self {
        Self {
            source,
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Get the collected errors.
    pub fn into_errors(self) -> Vec<ParseError> {
        self.errors
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|t| t.kind == kind)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        self.pos += 1;
        token
    }

    /// Record an error at the current position.
    fn error(&mut self, expected: &str) {
        let err = match self.current() {
            Some(token) => ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.kind,
                text: token.text.to_string(),
                span: token.span.range(),
            },
            None => ParseError::UnexpectedEnd {
                expected: expected.to_string(),
                span: self.source.len()..self.source.len(),
            },
        };
        self.errors.push(err);
    }

    fn consume(&mut self, kind: TokenKind, expected: &str) -> Option<Token> {
        if self.check(kind) {
            self.advance()
        } else {
            self.error(expected);
            None
        }
    }

    // ========================================================================
    // Top-level parsing
    // ========================================================================

    /// Parse the whole statement.
    pub fn parse_expense(&mut self) -> ExpenseAst {
        let mut statement = Statement::default();

        if self.parse_statement(&mut statement).is_none() || !self.errors.is_empty() {
            let messages = self.errors.iter().map(|e| e.to_string()).collect();
            return ExpenseAst::invalid(self.source, self.tokens.clone(), messages);
        }

        let (split_type, split_among) = match statement.split {
            Some((split_type, members)) => (Some(split_type), Some(members)),
            None => (None, None),
        };

        ExpenseAst {
            payer: statement.payer,
            amount: statement.amount,
            item: statement.item,
            split_among,
            split_type,
            raw_text: self.source.to_string(),
            tokens: self.tokens.clone(),
            is_valid: true,
            errors: Vec::new(),
        }
    }

    fn parse_statement(&mut self, statement: &mut Statement) -> Option<()> {
        match self.current().map(|t| t.kind) {
            Some(TokenKind::Member) => self.parse_payment(statement)?,
            Some(TokenKind::Add) => self.parse_add(statement)?,
            _ => {
                self.error("a member or 'Add'");
                return None;
            }
        }

        if self.at_end() {
            return Some(());
        }

        match self.current().map(|t| t.kind) {
            Some(TokenKind::SplitEvenlyAmong | TokenKind::SplitAmong) => {
                statement.split = Some(self.parse_split_clause()?);
            }
            _ => {
                let expected = if statement.item.is_some() {
                    "'split among' or 'split evenly among'"
                } else {
                    "'for', 'split among' or 'split evenly among'"
                };
                self.error(expected);
                return None;
            }
        }

        if !self.at_end() {
            self.error("end of statement");
            return None;
        }
        Some(())
    }

    /// `Member "paid" Expression ("for" Item)?`
    fn parse_payment(&mut self, statement: &mut Statement) -> Option<()> {
        let payer = self.consume(TokenKind::Member, "a member")?;
        statement.payer = Some(payer.text);
        self.consume(TokenKind::Paid, "'paid'")?;
        statement.amount = Some(self.parse_amount()?);
        statement.item = self.parse_for_item()?;
        Some(())
    }

    /// `"Add" Expression ("for" Item)?`
    fn parse_add(&mut self, statement: &mut Statement) -> Option<()> {
        self.consume(TokenKind::Add, "'Add'")?;
        statement.amount = Some(self.parse_amount()?);
        statement.item = self.parse_for_item()?;
        Some(())
    }

    fn parse_amount(&mut self) -> Option<AmountExpr> {
        let token = self.consume(TokenKind::Expression, "an amount")?;
        let parsed = tally_expr::parse(&token.text).and_then(|expr| {
            let base = expr.eval(None)?;
            if base.is_finite() {
                Ok((base, expr.percent_modifier()))
            } else {
                Err(tally_expr::ExprError::NotFinite)
            }
        });

        match parsed {
            Ok((base, modifier)) => Some(AmountExpr {
                base,
                modifier,
                raw_text: token.text,
            }),
            Err(source) => {
                self.errors.push(ParseError::InvalidAmount {
                    text: token.text.to_string(),
                    source,
                    span: token.span.range(),
                });
                None
            }
        }
    }

    /// `("for" Item)?`, returning the item name when present.
    fn parse_for_item(&mut self) -> Option<Option<SmolStr>> {
        if !self.check(TokenKind::For) {
            return Some(None);
        }
        self.advance();
        let item = self.consume(TokenKind::Item, "an item name")?;
        Some(Some(item.text))
    }

    /// `("split evenly among" | "split among") memberList`
    fn parse_split_clause(&mut self) -> Option<(SplitType, Vec<SmolStr>)> {
        let keyword = self.advance()?;
        let split_type = if keyword.kind == TokenKind::SplitEvenlyAmong {
            SplitType::Evenly
        } else {
            SplitType::Custom
        };

        let mut members = vec![self.consume(TokenKind::Member, "a member")?.text];
        while !self.at_end() {
            if self.check(TokenKind::And) {
                self.advance();
                members.push(self.consume(TokenKind::Member, "a member after 'and'")?.text);
            } else if self.check(TokenKind::Member) {
                members.push(self.advance()?.text);
            } else {
                self.error("'and' or a member");
                return None;
            }
        }

        Some((split_type, members))
    }
}
