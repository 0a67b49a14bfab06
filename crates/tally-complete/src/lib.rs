//! # Tally Autocomplete
//!
//! Ranks completions for an expense statement at a caret position.
//!
//! The engine looks at the last complete token before the word under the
//! caret to decide which [`ExpectedCategory`] the grammar allows next, then
//! merges three candidate pools (members, keywords, operators), boosting the
//! candidates that fit and demoting the rest. Directly after a digit the
//! grammar pools are replaced by arithmetic operators.
//!
//! ## Example
//!
//! ```
//! use tally_ast::ParticipantContext;
//! use tally_complete::suggest;
//!
//! let context = ParticipantContext::new(["Alice", "Bob"]);
//! let suggestions = suggest(None, "Alice ", 6, &context);
//! assert_eq!(suggestions[0].display_label, "paid");
//! ```

mod completion;
mod expected;

pub use completion::{should_show_math_operators, Suggestion, SuggestionCategory};
pub use expected::{expected_category, ExpectedCategory};

use std::borrow::Cow;
use tally_ast::{ExpenseAst, ParticipantContext, Token};

/// Ranked suggestions for the caret position, highest priority first.
///
/// `ast` is the result of parsing `text`; when it is absent the text is
/// lexed here instead. The caret is a byte offset, clamped into the text.
pub fn suggest(
    ast: Option<&ExpenseAst>,
    text: &str,
    caret: usize,
    context: &ParticipantContext,
) -> Vec<Suggestion> {
    let caret = clamp_caret(text, caret);

    if should_show_math_operators(text, caret) {
        return completion::math_operators();
    }

    let tokens = significant_tokens(ast, text, context);
    let prefix = if ends_split_keyword(&tokens, caret) {
        ""
    } else {
        completion::word_prefix(text, caret)
    };
    let expected = expected_category(&tokens, caret - prefix.len());
    tracing::debug!(?expected, caret, prefix, "expected category");

    let mut suggestions = completion::member_suggestions(context, prefix, expected);
    suggestions.extend(completion::keyword_suggestions(prefix, expected));
    suggestions.extend(completion::operator_suggestions(prefix, expected));

    // Stable, so equal priorities keep pool order
    suggestions.sort_by(|a, b| b.priority.cmp(&a.priority));
    suggestions
}

fn significant_tokens<'a>(
    ast: Option<&'a ExpenseAst>,
    text: &str,
    context: &ParticipantContext,
) -> Cow<'a, [Token]> {
    match ast {
        Some(ast) => Cow::Borrowed(ast.tokens.as_slice()),
        None => {
            let (tokens, _) = tally_lexer::tokenize(text, context);
            Cow::Owned(tokens.into_iter().filter(|t| !t.is_trivia()).collect())
        }
    }
}

/// A fully typed `split among` or `split evenly among` directly before the
/// caret already counts as a complete token.
fn ends_split_keyword(tokens: &[Token], caret: usize) -> bool {
    tokens
        .iter()
        .any(|t| t.kind.is_split_keyword() && t.end_offset() == caret)
}

/// Clamp a caret into `text`, moving it back to a char boundary.
fn clamp_caret(text: &str, caret: usize) -> usize {
    let mut caret = caret.min(text.len());
    while !text.is_char_boundary(caret) {
        caret -= 1;
    }
    caret
}
