//! High-level lexer interface.

use crate::error::LexError;
use crate::token::RawToken;
use logos::Logos;
use smol_str::SmolStr;
use tally_ast::{ParticipantContext, Span, Token, TokenKind, TokenMetadata};

/// Participant-name patterns for one lexing call.
///
/// Built from a [`ParticipantContext`] and passed to the lexer explicitly;
/// nothing about the participants outlives the call.
#[derive(Debug, Clone)]
pub struct MemberTable {
    /// Longest names first, so `Ann Marie` wins over `Ann`.
    patterns: Vec<MemberPattern>,
}

#[derive(Debug, Clone)]
struct MemberPattern {
    name: SmolStr,
    lowercase: String,
    chars: usize,
}

impl MemberTable {
    pub fn new(context: &ParticipantContext) -> Self {
        let mut patterns: Vec<_> = context
            .members()
            .iter()
            .map(|name| MemberPattern {
                name: name.clone(),
                lowercase: name.to_lowercase(),
                chars: name.chars().count(),
            })
            .collect();
        patterns.sort_by(|a, b| b.chars.cmp(&a.chars));
        Self { patterns }
    }

    /// Match a member name at the start of `rest`.
    ///
    /// Returns the canonical name and the matched byte length. A name only
    /// matches when it is not immediately followed by another word character,
    /// so `Al` does not match the start of `Alice`.
    fn match_at(&self, rest: &str) -> Option<(&SmolStr, usize)> {
        self.patterns.iter().find_map(|pattern| {
            let len = rest
                .char_indices()
                .nth(pattern.chars)
                .map(|(i, _)| i)
                .unwrap_or(rest.len());
            let candidate = &rest[..len];
            if candidate.chars().count() != pattern.chars
                || candidate.to_lowercase() != pattern.lowercase
            {
                return None;
            }
            match rest[len..].chars().next() {
                Some(c) if c.is_alphanumeric() || c == '_' => None,
                _ => Some((&pattern.name, len)),
            }
        })
    }
}

/// A lexer for expense statements.
///
/// Yields every token, whitespace included. After the first error it yields
/// nothing more.
pub struct Lexer<'source> {
    source: &'source str,
    members: &'source MemberTable,
    pos: usize,
    done: bool,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given source and member patterns.
    pub fn new(source: &'source str, members: &'source MemberTable) -> Self {
        Self {
            source,
            members,
            pos: 0,
            done: false,
        }
    }

    fn next_inner(&mut self) -> Option<Result<Token, LexError>> {
        if self.done || self.pos >= self.source.len() {
            return None;
        }

        let rest = &self.source[self.pos..];
        let raw = RawToken::lexer(rest).spanned().next();

        // Compound keywords first, then members, then everything else
        let raw = match raw {
            Some((Ok(token), span)) => Some((token, span.end)),
            _ => None,
        };
        let (kind, len, member) = match raw {
            Some((token, len)) if token.is_compound_keyword() => (token.kind(), len, None),
            _ => match self.members.match_at(rest) {
                Some((name, len)) => (TokenKind::Member, len, Some(name.clone())),
                None => match raw {
                    Some((token, len)) => (token.kind(), len, None),
                    None => return Some(Err(self.unexpected_char())),
                },
            },
        };

        let start = self.pos;
        self.pos += len;
        let text = &self.source[start..self.pos];
        let mut token = Token::new(kind, text, Span::from(start..self.pos));

        if let Some(member_id) = member {
            token = token.with_metadata(TokenMetadata::Member { member_id });
        } else if kind == TokenKind::Expression {
            if let Ok(value) = tally_expr::evaluate(text, None) {
                token = token.with_metadata(TokenMetadata::Expression { value });
            }
        }

        Some(Ok(token))
    }

    fn unexpected_char(&mut self) -> LexError {
        self.done = true;
        let found = self.source[self.pos..].chars().next().unwrap_or('\0');
        LexError::UnexpectedChar {
            found,
            span: self.pos..self.pos + found.len_utf8(),
        }
    }
}

impl<'source> Iterator for Lexer<'source> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize;
    use tally_ast::TokenCategory;

    fn lex(source: &str, members: &[&str]) -> Vec<Token> {
        let context = ParticipantContext::new(members);
        let (tokens, errors) = tokenize(source, &context);
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
        tokens
    }

    fn significant(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
        tokens
            .iter()
            .filter(|t| !t.is_trivia())
            .map(|t| (t.kind, t.text.as_str()))
            .collect()
    }

    fn dump(tokens: &[Token]) -> String {
        tokens
            .iter()
            .map(|t| {
                format!(
                    "{}..{} {} {:?}",
                    t.span.start,
                    t.span.end,
                    t.category(),
                    t.text.as_str()
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_payment_with_percentage() {
        let tokens = lex("Alice paid 100+25%", &["Alice", "Bob"]);
        insta::assert_snapshot!(dump(&tokens), @r###"
        0..5 member "Alice"
        5..6 whitespace " "
        6..10 keyword "paid"
        10..11 whitespace " "
        11..18 expression "100+25%"
        "###);
        assert_eq!(
            tokens[4].metadata,
            Some(TokenMetadata::Expression { value: 125.0 })
        );
    }

    #[test]
    fn test_full_statement() {
        let source = "David paid 50 for Burger. Split evenly among Alice and David";
        let tokens = lex(source, &["Alice", "David"]);
        assert_eq!(
            significant(&tokens),
            vec![
                (TokenKind::Member, "David"),
                (TokenKind::Paid, "paid"),
                (TokenKind::Expression, "50"),
                (TokenKind::For, "for"),
                (TokenKind::Item, "Burger"),
                (TokenKind::SplitEvenlyAmong, "Split evenly among"),
                (TokenKind::Member, "Alice"),
                (TokenKind::And, "and"),
                (TokenKind::Member, "David"),
            ]
        );
        let separator = tokens.iter().find(|t| t.kind == TokenKind::Separator).unwrap();
        assert_eq!(separator.span, Span::new(24, 25));
        assert_eq!(separator.category(), TokenCategory::Whitespace);
    }

    #[test]
    fn test_members_case_insensitive() {
        let tokens = lex("david PAID 5", &["David"]);
        assert_eq!(tokens[0].kind, TokenKind::Member);
        assert_eq!(tokens[0].text.as_str(), "david");
        assert_eq!(
            tokens[0].metadata,
            Some(TokenMetadata::Member {
                member_id: SmolStr::from("David")
            })
        );
        assert_eq!(tokens[2].kind, TokenKind::Paid);
    }

    #[test]
    fn test_member_needs_word_boundary() {
        let tokens = lex("Alice", &["Al"]);
        assert_eq!(significant(&tokens), vec![(TokenKind::Item, "Alice")]);
    }

    #[test]
    fn test_multi_word_member_prefers_longest() {
        let tokens = lex("Ann Marie paid 3", &["Ann", "Ann Marie"]);
        assert_eq!(tokens[0].kind, TokenKind::Member);
        assert_eq!(tokens[0].text.as_str(), "Ann Marie");
    }

    #[test]
    fn test_unknown_names_are_items() {
        let tokens = lex("Zed paid 5", &["Alice"]);
        assert_eq!(tokens[0].kind, TokenKind::Item);
    }

    #[test]
    fn test_keywords_inside_words_are_items() {
        let tokens = lex("Sandwich Format Addams", &[]);
        assert_eq!(
            significant(&tokens),
            vec![
                (TokenKind::Item, "Sandwich"),
                (TokenKind::Item, "Format"),
                (TokenKind::Item, "Addams"),
            ]
        );
    }

    #[test]
    fn test_compound_keywords() {
        let tokens = lex("split   among Bob. SPLIT EVENLY AMONG Bob. split evenly", &["Bob"]);
        let kinds: Vec<_> = significant(&tokens).into_iter().map(|(k, _)| k).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::SplitAmong,
                TokenKind::Member,
                TokenKind::SplitEvenlyAmong,
                TokenKind::Member,
                TokenKind::Split,
                TokenKind::Evenly,
            ]
        );
    }

    #[test]
    fn test_compound_keyword_beats_member() {
        let tokens = lex("split among Bob", &["split among"]);
        assert_eq!(tokens[0].kind, TokenKind::SplitAmong);
    }

    #[test]
    fn test_numbers_are_never_items() {
        let tokens = lex("Add 12.50 for Pizza2", &[]);
        assert_eq!(
            significant(&tokens),
            vec![
                (TokenKind::Add, "Add"),
                (TokenKind::Expression, "12.50"),
                (TokenKind::For, "for"),
                (TokenKind::Item, "Pizza2"),
            ]
        );
    }

    #[test]
    fn test_stray_math_symbols() {
        let tokens = lex("Alice paid 100+", &["Alice"]);
        let last = tokens.last().unwrap();
        assert_eq!(last.kind, TokenKind::Symbol);
        assert_eq!(last.category(), TokenCategory::Operator);
    }

    #[test]
    fn test_error_stops_lexing() {
        let context = ParticipantContext::new(["Alice"]);
        let (tokens, errors) = tokenize("Alice paid @ 100", &context);
        assert_eq!(
            errors,
            vec![LexError::UnexpectedChar {
                found: '@',
                span: 11..12
            }]
        );
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens.last().unwrap().end_offset(), 11);
    }

    #[test]
    fn test_round_trip() {
        let source = "  Alice paid 100+25% for Dinner, split among Alice and Bob.\n";
        let tokens = lex(source, &["Alice", "Bob"]);
        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(rebuilt, source);
    }

    #[test]
    fn test_empty_input() {
        assert!(lex("", &["Alice"]).is_empty());
    }
}
