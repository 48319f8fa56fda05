use crate::output;
use ocm_core::prompt::ask;
use ocm_core::{Console, StepReport};
use owo_colors::OwoColorize;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Console backed by the terminal: questions and status on stdout, warnings
/// on stderr, answers from `input` (stdin in production).
pub struct TerminalConsole<R> {
    input: R,
    target: PathBuf,
}

impl<R: BufRead> TerminalConsole<R> {
    pub fn new(input: R, target: &Path) -> Self {
        Self {
            input,
            target: target.to_path_buf(),
        }
    }
}

impl<R: BufRead> Console for TerminalConsole<R> {
    fn confirm(&mut self, question: &str) -> ocm_core::Result<bool> {
        let question = format!("{} {question}", "?".yellow());
        ask(&mut self.input, &mut std::io::stdout(), &question)
    }

    fn warn(&mut self, message: &str) {
        eprintln!("{}", message.red());
    }

    fn report(&mut self, report: &StepReport) {
        output::print_step(&self.target, report);
    }
}
