use std::iter::Peekable;
use std::str::Chars;
use crate::pbrtparser::tokens::*;
use crate::core::diagnostic::Diagnostic;

/// Splits scene text into tokens. Lexical problems never stop the lexer;
/// they are collected and can be drained with `take_diagnostics`.
pub struct Lexer<'input> {
    chars       : Peekable<Chars<'input>>,
    line        : usize,
    diagnostics : Vec<Diagnostic>
}

impl<'input> Lexer<'input> {
    pub fn new(text: &'input str) -> Lexer<'input> {
        Lexer {
            chars       : text.chars().peekable(),
            line        : 1,
            diagnostics : Vec::new()
        }
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next();

        if c == Some('\n') {
            self.line += 1;
        }

        c
    }

    fn skip_comment(&mut self) {
        while let Some(&c) = self.chars.peek() {
            if c == '\n' { break; }
            self.bump();
        }
    }

    fn string(&mut self) -> Spanned<Tokens> {
        let line = self.line;
        let mut s = String::new();

        // Opening quote
        self.bump();

        loop {
            match self.chars.peek().copied() {
                None | Some('\n') => {
                    self.diagnostics.push(
                        Diagnostic::lexical("Unterminated string literal").with_line(line));
                    break;
                }
                Some('"') => {
                    self.bump();
                    break;
                }
                Some('\\') => {
                    self.bump();

                    match self.chars.peek().copied() {
                        None | Some('\n') => {
                            self.diagnostics.push(
                                Diagnostic::lexical("Invalid end of escape sequence").with_line(line));
                        }
                        Some(c) => {
                            self.bump();

                            match c {
                                '\\' => s.push('\\'),
                                'n'  => s.push('\n'),
                                't'  => s.push('\t'),
                                'r'  => s.push('\r'),
                                'f'  => s.push('\x0c'),
                                '"'  => s.push('"'),
                                _    => {
                                    self.diagnostics.push(
                                        Diagnostic::lexical(format!("Invalid escape sequence \\{}", c))
                                            .with_line(line));
                                    s.push(c);
                                }
                            }
                        }
                    }
                }
                Some(c) => {
                    self.bump();
                    s.push(c);
                }
            }
        }

        (line, Tokens::STR(s))
    }

    pub fn next_token(&mut self) -> Option<Spanned<Tokens>> {
        let mut word = String::new();
        let mut word_line = self.line;

        while let Some(&c) = self.chars.peek() {
            if c.is_whitespace() {
                if !word.is_empty() { break; }
                self.bump();
                continue;
            }

            match c {
                '#' => {
                    if !word.is_empty() { break; }
                    self.skip_comment();
                }
                '"' => {
                    if !word.is_empty() { break; }
                    return Some(self.string());
                }
                '[' | ']' => {
                    if !word.is_empty() { break; }
                    let line = self.line;
                    self.bump();
                    let t = if c == '[' { Tokens::LeftBracket } else { Tokens::RightBracket };

                    return Some((line, t));
                }
                _ => {
                    if word.is_empty() { word_line = self.line; }
                    word.push(c);
                    self.bump();
                }
            }
        }

        if word.is_empty() {
            None
        } else {
            Some((word_line, Tokens::Word(word)))
        }
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Spanned<Tokens>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
