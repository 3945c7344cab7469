//! Reading SQL input and splitting it into statements

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read a file, or stdin when `path` is `None` or `-`
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("failed to read {}", p.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    Code,
    Quoted(char),
    LineComment,
    BlockComment,
}

/// Split on `;` outside quotes and comments.
///
/// Statements are trimmed and lose their terminating `;`. Chunks holding
/// only whitespace or comments are dropped.
pub fn split_statements(text: &str) -> Vec<String> {
    let mut statements = Vec::new();
    let mut current = String::new();
    let mut has_code = false;
    let mut state = State::Code;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            State::Code => match c {
                ';' => {
                    if has_code {
                        statements.push(current.trim().to_string());
                    }
                    current.clear();
                    has_code = false;
                    continue;
                }
                '\'' | '"' | '`' => {
                    state = State::Quoted(c);
                    has_code = true;
                }
                '#' => state = State::LineComment,
                '-' if chars.peek() == Some(&'-') => {
                    current.push(c);
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                    // `--` only opens a comment when followed by whitespace
                    if chars.peek().map_or(true, |n| n.is_whitespace()) {
                        state = State::LineComment;
                    } else {
                        has_code = true;
                    }
                    continue;
                }
                '/' if chars.peek() == Some(&'*') => {
                    current.push(c);
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                    state = State::BlockComment;
                    continue;
                }
                c if !c.is_whitespace() => has_code = true,
                _ => {}
            },
            State::Quoted(quote) => {
                if c == '\\' && quote != '`' {
                    current.push(c);
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                    continue;
                }
                if c == quote {
                    // doubled quote stays inside the literal
                    if chars.peek() == Some(&quote) {
                        current.push(c);
                        if let Some(next) = chars.next() {
                            current.push(next);
                        }
                        continue;
                    }
                    state = State::Code;
                }
            }
            State::LineComment => {
                if c == '\n' {
                    state = State::Code;
                }
            }
            State::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    current.push(c);
                    if let Some(next) = chars.next() {
                        current.push(next);
                    }
                    state = State::Code;
                    continue;
                }
            }
        }
        current.push(c);
    }

    if has_code {
        statements.push(current.trim().to_string());
    }
    statements
}
