// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell-style word splitting.
//!
//! Splits on unquoted whitespace. Single quotes preserve everything
//! literally; double quotes allow `\"`, `\\`, `\$` and `` \` `` escapes;
//! outside quotes a backslash escapes the next character. Quoted and
//! unquoted pieces that touch form a single word, so `-m"a b"` is one token.

use crate::span::Span;
use thiserror::Error;

/// A word produced by the lexer, quotes removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    /// Where the word sits in the input, including its quotes.
    pub span: Span,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexerError {
    #[error("No closing quotation")]
    UnterminatedSingleQuote { span: Span },

    #[error("No closing quotation")]
    UnterminatedDoubleQuote { span: Span },

    #[error("No escaped character")]
    TrailingBackslash { span: Span },
}

impl LexerError {
    pub fn span(&self) -> Span {
        match self {
            LexerError::UnterminatedSingleQuote { span }
            | LexerError::UnterminatedDoubleQuote { span }
            | LexerError::TrailingBackslash { span } => *span,
        }
    }
}

/// Split `input` into words.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexerError> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices().peekable();
    // (text, start) of the word being built
    let mut current: Option<(String, usize)> = None;

    while let Some((pos, ch)) = chars.next() {
        match ch {
            c if c.is_whitespace() => {
                if let Some((text, start)) = current.take() {
                    tokens.push(Token {
                        text,
                        span: Span::new(start, pos),
                    });
                }
            }
            '\'' => {
                let word = &mut current.get_or_insert_with(|| (String::new(), pos)).0;
                loop {
                    match chars.next() {
                        Some((_, '\'')) => break,
                        Some((_, c)) => word.push(c),
                        None => {
                            return Err(LexerError::UnterminatedSingleQuote {
                                span: Span::new(pos, input.len()),
                            })
                        }
                    }
                }
            }
            '"' => {
                let word = &mut current.get_or_insert_with(|| (String::new(), pos)).0;
                loop {
                    match chars.next() {
                        Some((_, '"')) => break,
                        Some((_, '\\')) => match chars.peek() {
                            Some(&(_, next @ ('"' | '\\' | '$' | '`'))) => {
                                word.push(next);
                                chars.next();
                            }
                            _ => word.push('\\'),
                        },
                        Some((_, c)) => word.push(c),
                        None => {
                            return Err(LexerError::UnterminatedDoubleQuote {
                                span: Span::new(pos, input.len()),
                            })
                        }
                    }
                }
            }
            '\\' => {
                let word = &mut current.get_or_insert_with(|| (String::new(), pos)).0;
                match chars.next() {
                    Some((_, c)) => word.push(c),
                    None => {
                        return Err(LexerError::TrailingBackslash {
                            span: Span::new(pos, input.len()),
                        })
                    }
                }
            }
            c => current.get_or_insert_with(|| (String::new(), pos)).0.push(c),
        }
    }

    if let Some((text, start)) = current {
        tokens.push(Token {
            text,
            span: Span::new(start, input.len()),
        });
    }
    Ok(tokens)
}

/// Convenience wrapper returning only the word texts.
pub fn split_words(input: &str) -> Result<Vec<String>, LexerError> {
    Ok(tokenize(input)?.into_iter().map(|t| t.text).collect())
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
