use logos::Logos;

use crate::error::TokenizeError;

#[derive(Logos, PartialEq, Debug)]
enum Lexeme<'a> {
    #[token("\\")]
    Escape,
    #[token("\"", |_| '"')]
    #[token("'", |_| '\'')]
    Quote(char),
    #[regex(r"[ \t]", |lex| lex.slice().chars().next())]
    Blank(char),
    #[regex(r#"[^\\"' \t]+"#, |lex| lex.slice())]
    Text(&'a str),
}

impl Lexeme<'_> {
    fn push_onto(&self, buffer: &mut String) {
        match self {
            Lexeme::Escape => buffer.push('\\'),
            Lexeme::Quote(c) | Lexeme::Blank(c) => buffer.push(*c),
            Lexeme::Text(text) => buffer.push_str(text),
        }
    }
}

#[derive(PartialEq, Debug, Clone, Copy)]
enum State {
    Start,
    InToken,
    InQuote(char),
}

/// Splits a command line into tokens, honoring quotes and backslash escapes.
///
/// Only space and tab separate tokens. Inside quotes every character but the
/// matching closing quote is kept as is, backslashes included. An escaped
/// character is appended without changing state, so escaping the first
/// character of a token does not start that token: `a \b c` yields `abc`.
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer {
    escape_first: bool,
}

impl Default for Tokenizer {
    /// Known quirk: the first character of a line is always taken literally.
    ///
    /// Command verbs such as `/approve` rely on it today, and a line starting
    /// with a quote keeps that quote in its first token instead of opening a
    /// quoted token.
    fn default() -> Self {
        Self { escape_first: true }
    }
}

impl Tokenizer {
    /// Whether the first character of the line is treated as escaped.
    pub const fn escape_first(mut self, escape_first: bool) -> Self {
        self.escape_first = escape_first;
        self
    }

    pub fn tokenize(&self, line: &str) -> Result<Vec<String>, TokenizeError> {
        let mut machine = Machine {
            state: State::Start,
            escape_pending: self.escape_first,
            buffer: String::new(),
            tokens: Vec::new(),
        };

        let mut lexer = Lexeme::lexer(line);
        while let Some(lexeme) = lexer.next() {
            match lexeme {
                Ok(lexeme) => machine.feed(lexeme),
                // Unreachable: the four lexemes cover every character.
                Err(()) => machine.feed(Lexeme::Text(lexer.slice())),
            }
        }

        machine.finish(line)
    }
}

/// Tokenizes `line` with the default [`Tokenizer`].
pub fn tokenize(line: &str) -> Result<Vec<String>, TokenizeError> {
    Tokenizer::default().tokenize(line)
}

struct Machine {
    state: State,
    escape_pending: bool,
    buffer: String,
    tokens: Vec<String>,
}

impl Machine {
    fn feed(&mut self, lexeme: Lexeme<'_>) {
        if let State::InQuote(delimiter) = self.state {
            match lexeme {
                Lexeme::Quote(c) if c == delimiter => self.emit(),
                other => other.push_onto(&mut self.buffer),
            }
            return;
        }

        if self.escape_pending {
            self.escape_pending = false;
            match lexeme {
                // Only the first character of a text run is escaped.
                Lexeme::Text(text) => {
                    let mut chars = text.chars();
                    if let Some(first) = chars.next() {
                        self.buffer.push(first);
                    }
                    let rest = chars.as_str();
                    if !rest.is_empty() {
                        self.feed(Lexeme::Text(rest));
                    }
                }
                other => other.push_onto(&mut self.buffer),
            }
            return;
        }

        match lexeme {
            Lexeme::Escape => self.escape_pending = true,
            Lexeme::Quote(c) => self.state = State::InQuote(c),
            Lexeme::Blank(_) => {
                if self.state == State::InToken {
                    self.emit();
                }
            }
            Lexeme::Text(text) => {
                self.buffer.push_str(text);
                self.state = State::InToken;
            }
        }
    }

    fn emit(&mut self) {
        self.tokens.push(std::mem::take(&mut self.buffer));
        self.state = State::Start;
    }

    fn finish(mut self, line: &str) -> Result<Vec<String>, TokenizeError> {
        if let State::InQuote(_) = self.state {
            return Err(TokenizeError::UnclosedQuote {
                input: line.to_owned(),
            });
        }
        if !self.buffer.is_empty() {
            self.tokens.push(self.buffer);
        }
        Ok(self.tokens)
    }
}

#[cfg(test)]
mod test {
    use assert_matches::assert_matches;

    use super::*;

    fn assert_tokens(input: &str, expected: &[&str]) {
        let tokens = tokenize(input).expect("Valid command line");
        assert_eq!(expected, tokens);
    }

    #[test]
    fn test_empty_line() {
        assert_tokens("", &[]);
    }

    #[test]
    fn test_blank_line() {
        // The first blank is escaped, so it survives as a token of its own.
        assert_tokens("   \t ", &[" "]);
    }

    #[test]
    fn test_simple_words() {
        assert_tokens("/approve --pm a@b.com", &["/approve", "--pm", "a@b.com"]);
    }

    #[test]
    fn test_runs_of_blanks_produce_no_empty_tokens() {
        assert_tokens("/approve \t  --pm\t\ta@b.com   ", &["/approve", "--pm", "a@b.com"]);
    }

    #[test]
    fn test_quoted_command() {
        assert_tokens(
            r#"/approve --pm "a@b.com" --name "Jane Doe" --email jane@b.com"#,
            &[
                "/approve",
                "--pm",
                "a@b.com",
                "--name",
                "Jane Doe",
                "--email",
                "jane@b.com",
            ],
        );
    }

    #[test]
    fn test_single_quotes() {
        assert_tokens(
            "/approve --name 'Jane \"JD\" Doe'",
            &["/approve", "--name", "Jane \"JD\" Doe"],
        );
    }

    #[test]
    fn test_double_quotes_keep_single_quotes() {
        assert_tokens(r#"/approve "O'Brien""#, &["/approve", "O'Brien"]);
    }

    #[test]
    fn test_backslash_is_literal_inside_quotes() {
        assert_tokens(r#"/x "a\b" 'c\'"#, &["/x", r"a\b", r"c\"]);
    }

    #[test]
    fn test_empty_quotes_produce_empty_token() {
        assert_tokens(r#"/approve --pm "" --name ''"#, &["/approve", "--pm", "", "--name", ""]);
    }

    #[test]
    fn test_quote_joins_preceding_text() {
        assert_tokens(r#"/x pre"quoted part"post"#, &["/x", "prequoted part", "post"]);
    }

    #[test]
    fn test_escaped_blank_inside_token() {
        assert_tokens(r"/x Jane\ Doe", &["/x", "Jane Doe"]);
    }

    #[test]
    fn test_escaped_quote_is_literal() {
        assert_tokens(r#"/x say\"hi"#, &["/x", "say\"hi"]);
    }

    #[test]
    fn test_escaped_backslash() {
        assert_tokens(r"/x a\\b", &["/x", r"a\b"]);
    }

    #[test]
    fn test_trailing_backslash_is_dropped() {
        assert_tokens(r"/x abc\", &["/x", "abc"]);
    }

    #[test]
    fn test_escape_at_token_start_does_not_start_token() {
        assert_tokens(r"a \b c", &["abc"]);
    }

    #[test]
    fn test_only_space_and_tab_separate() {
        assert_tokens("/x a\nb", &["/x", "a\nb"]);
    }

    #[test]
    fn test_non_ascii_text() {
        assert_tokens(r#"/x "Zoë Ångström" café"#, &["/x", "Zoë Ångström", "café"]);
    }

    #[test]
    fn test_first_character_is_taken_literally() {
        // The leading slash is consumed through the escape, then the verb continues.
        assert_tokens("/approve", &["/approve"]);
        // A leading blank is kept instead of skipped.
        assert_tokens(" /approve --pm", &[" /approve", "--pm"]);
    }

    #[test]
    fn test_leading_quote_does_not_open_quote() {
        assert_tokens(r#""/approve now"#, &["\"/approve", "now"]);
        assert_matches!(
            tokenize(r#""a b""#),
            Err(TokenizeError::UnclosedQuote { input }) if input == r#""a b""#
        );
    }

    #[test]
    fn test_escape_first_disabled() {
        let tokenizer = Tokenizer::default().escape_first(false);
        assert_eq!(vec!["a b"], tokenizer.tokenize(r#""a b""#).unwrap());
        assert_eq!(vec!["/approve"], tokenizer.tokenize("  /approve").unwrap());
    }

    #[test]
    fn test_unclosed_quote() {
        let input = r#"/approve --pm "a@b.com --name Jane --email jane@b.com"#;
        assert_eq!(
            TokenizeError::UnclosedQuote {
                input: input.to_owned()
            },
            tokenize(input).unwrap_err()
        );
    }

    #[test]
    fn test_unclosed_quote_with_other_delimiter_inside() {
        assert_matches!(
            tokenize(r#"/x 'it" is"#),
            Err(TokenizeError::UnclosedQuote { .. })
        );
    }

    #[test]
    fn test_retokenizing_joined_tokens_is_stable() {
        let inputs = [
            "/approve --pm a@b.com --name Jane Doe --email jane@b.com",
            "/approve   -email x@y.z\t-pm  p@q.r -name Solo",
            "/deny one two three",
        ];
        for input in inputs {
            let tokens = tokenize(input).unwrap();
            let rejoined = tokens.join(" ");
            assert_eq!(tokens, tokenize(&rejoined).unwrap(), "{input}");
        }
    }
}
