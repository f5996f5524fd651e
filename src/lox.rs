use std::io::Write;

use log::info;

use crate::error::{LoxError, Result};
use crate::expr::ExprId;
use crate::interpreter::Interpreter;
use crate::parser::Parser;
use crate::resolver::Resolver;
use crate::scanner::Scanner;

/// One interpreter session: the scan → parse → resolve → interpret
/// pipeline over a source string. Globals, the resolver side table, and
/// the expression-id watermark all live across `run` calls, so a REPL can
/// define a closure on one line and call it on the next.
pub struct Lox {
    interpreter: Interpreter,
    next_id: ExprId,
}

impl Lox {
    pub fn new() -> Self {
        Lox {
            interpreter: Interpreter::new(),
            next_id: 0,
        }
    }

    /// Route program `print` output into `out` instead of stdout.
    pub fn with_output(out: Box<dyn Write>) -> Self {
        Lox {
            interpreter: Interpreter::with_output(out),
            next_id: 0,
        }
    }

    /// Run one source string to completion. Diagnostics are reported to
    /// stderr as they surface; the returned error is the last one of the
    /// stage that failed.
    pub fn run(&mut self, source: &str) -> Result<()> {
        let mut scanner = Scanner::new(source);
        let tokens = scanner.scan_tokens();

        if let Some(failure) = report_all(scanner.take_errors()) {
            return Err(failure);
        }

        let mut parser = Parser::with_base_id(&tokens, self.next_id);
        let (statements, parse_errors) = parser.parse();
        self.next_id = parser.next_id();

        if let Some(failure) = report_all(parse_errors) {
            return Err(failure);
        }

        let mut resolver = Resolver::new(&mut self.interpreter);
        if let Err(err) = resolver.resolve(&statements) {
            eprintln!("{}", err);
            return Err(err);
        }

        info!("Pipeline clean, interpreting {} statement(s)", statements.len());

        if let Err(err) = self.interpreter.interpret(&statements) {
            eprintln!("{}", err);
            return Err(err);
        }

        Ok(())
    }
}

impl Default for Lox {
    fn default() -> Self {
        Self::new()
    }
}

/// Print every diagnostic to stderr; hand back the last one so the caller
/// has something to fail with. `None` means the stage was clean.
fn report_all(errors: Vec<LoxError>) -> Option<LoxError> {
    let mut last: Option<LoxError> = None;

    for err in errors {
        eprintln!("{}", err);
        last = Some(err);
    }

    last
}
