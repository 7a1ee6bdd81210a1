//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, GateTheme, UserInterface};

/// Terminal UI writing status to stdout and errors to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: GateTheme,
    quiet: bool,
}

impl TerminalUI {
    /// Create a new terminal UI.
    ///
    /// `quiet` suppresses everything except errors.
    pub fn new(quiet: bool) -> Self {
        let theme = if should_use_colors() {
            GateTheme::new()
        } else {
            GateTheme::plain()
        };

        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme,
            quiet,
        }
    }
}

impl UserInterface for TerminalUI {
    fn message(&mut self, msg: &str) {
        if !self.quiet {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if !self.quiet {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if !self.quiet {
            writeln!(self.out, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn key_value(&mut self, key: &str, value: &str) {
        if !self.quiet {
            writeln!(self.out, "{}", self.theme.format_key_value(key, value)).ok();
        }
    }
}
