use std::fs;
use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use log::info;
use crate::core::pbrt::{Float, Options};
use crate::core::paramset::ParamSet;
use crate::core::diagnostic::Diagnostic;
use crate::core::fileutil::include_root;
use crate::core::operator::{Operator, Translation};
use crate::pbrtparser::lexer::Lexer;
use crate::pbrtparser::tokens::{Tokens, Spanned};
use crate::pbrtparser::syntax::{Operation, Value};

/// Translates a scene file and everything it includes.
pub fn pbrt_parse<P: AsRef<Path>>(input: P, opts: &Options) -> Result<Translation> {
    let input = input.as_ref();
    let text = fs::read_to_string(input)
        .with_context(|| format!("Failed to read scene file \"{}\"", input.display()))?;

    let root = include_root(input, &opts.include_offset);
    info!("Translating {} (include root {})", input.display(), root.display());

    let mut op = Operator::new(opts.clone(), input, root);
    op.translate_source(input, &text);

    Ok(op.finish())
}

/// Translates scene text that does not come from a file. Includes resolve
/// against the current directory.
pub fn pbrt_parse_str(text: &str, opts: &Options) -> Translation {
    let input = Path::new("scene.pbrt");
    let root = include_root(input, &opts.include_offset);

    let mut op = Operator::new(opts.clone(), input, root);
    op.translate_source(input, text);

    op.finish()
}

/// Collects every operation of `text` along with the diagnostics raised
/// while reading them.
pub fn parse_str<P: AsRef<Path>>(source: P, text: &str, opts: &Options) -> (Vec<Operation>, Vec<Diagnostic>) {
    let mut parser = Parser::new(source, text, opts);
    let ops: Vec<Operation> = parser.by_ref().collect();

    (ops, parser.take_diagnostics())
}

fn coerce(t: Tokens) -> Value {
    let integer = t.is_integer();
    let number = t.is_number();

    match t {
        Tokens::Word(s) => {
            if integer {
                if let Ok(i) = s.parse::<i64>() { return Value::Int(i); }
            }

            if number {
                if let Ok(f) = s.parse::<Float>() { return Value::Float(f); }
            }

            Value::Str(s)
        }
        Tokens::STR(s) => Value::Str(s),
        t              => Value::Str(t.to_string())
    }
}

/// Lazily groups tokens into operations.
pub struct Parser<'a> {
    source             : PathBuf,
    lexer              : Lexer<'a>,
    peeked             : Option<Spanned<Tokens>>,
    last_line          : usize,
    collapse_all_lists : bool,
    diagnostics        : Vec<Diagnostic>
}

impl<'a> Parser<'a> {
    pub fn new<P: AsRef<Path>>(source: P, text: &'a str, opts: &Options) -> Self {
        Self {
            source             : source.as_ref().to_owned(),
            lexer              : Lexer::new(text),
            peeked             : None,
            last_line          : 1,
            collapse_all_lists : opts.collapse_all_lists,
            diagnostics        : Vec::new()
        }
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    fn error(&mut self, line: usize, message: String) {
        let d = Diagnostic::syntactic(message).located(&self.source, line);
        self.diagnostics.push(d);
    }

    fn peek(&mut self) -> Option<&Spanned<Tokens>> {
        if self.peeked.is_none() {
            self.peeked = self.lexer.next_token();

            if let Some((line, _)) = self.peeked {
                self.last_line = line;
            }

            for d in self.lexer.take_diagnostics() {
                let d = d.located(&self.source, self.last_line);
                self.diagnostics.push(d);
            }
        }

        self.peeked.as_ref()
    }

    fn bump(&mut self) -> Option<Spanned<Tokens>> {
        self.peek();
        self.peeked.take()
    }

    /// Reads one value: a bracketed list, a run of numbers, a quoted string
    /// or a bare boolean. Returns `None` without consuming anything when
    /// the next token starts none of these.
    fn parse_parameter(&mut self, collapse: bool) -> Option<Value> {
        let (line, tok) = self.peek().cloned()?;
        let number = tok.is_number();
        let boolean = tok.is_bool();

        match tok {
            Tokens::LeftBracket => {
                self.bump();
                let mut values = Vec::new();

                loop {
                    match self.peek().cloned() {
                        Some((_, Tokens::RightBracket)) => {
                            self.bump();
                            break;
                        }
                        Some((_, t)) if t.is_parameter() => {
                            self.bump();
                            values.push(coerce(t));
                        }
                        Some((l, t)) => {
                            self.error(l, format!("Expected ']' but found {}", t));
                            break;
                        }
                        None => {
                            self.error(line, "Unexpected end of input, expected ']'".to_owned());
                            break;
                        }
                    }
                }

                if collapse && values.len() == 1 {
                    values.pop()
                } else {
                    Some(Value::List(values))
                }
            }
            _ if number => {
                let mut values = Vec::new();

                while let Some((_, t)) = self.peek().cloned() {
                    if !t.is_number() { break; }
                    self.bump();
                    values.push(coerce(t));
                }

                if values.len() == 1 {
                    values.pop()
                } else {
                    Some(Value::List(values))
                }
            }
            Tokens::STR(s) => {
                self.bump();
                Some(Value::Str(s))
            }
            _ if boolean => {
                self.bump();
                Some(coerce(tok))
            }
            _ => None
        }
    }

    fn parse_operation(&mut self) -> Option<Operation> {
        loop {
            let (line, tok) = self.bump()?;

            let action = match tok {
                Tokens::Word(ref w) if !tok.is_number() && !tok.is_bool() => w.clone(),
                t => {
                    self.error(line, format!("Unexpected {} where an action was expected", t));
                    continue;
                }
            };

            let operand = self.parse_parameter(true);
            let mut params = ParamSet::new();

            if operand.is_some() {
                while let Some((l, Tokens::STR(key))) = self.peek().cloned() {
                    self.bump();

                    match self.parse_parameter(self.collapse_all_lists) {
                        Some(v) => params.add(&key, v),
                        None    => self.error(l, format!("Parameter \"{}\" has no value", key))
                    }
                }
            }

            return Some(Operation {
                file: self.source.clone(),
                line,
                action,
                operand,
                params
            });
        }
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = Operation;

    fn next(&mut self) -> Option<Self::Item> {
        self.parse_operation()
    }
}
