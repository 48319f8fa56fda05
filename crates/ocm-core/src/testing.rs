use crate::error::Result;
use crate::init::StepReport;
use crate::prompt::{is_affirmative, Console};
use std::collections::VecDeque;

/// Console that answers from a fixed script and records everything it is shown.
/// Running out of answers behaves like closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    pub questions: Vec<String>,
    pub warnings: Vec<String>,
    pub reports: Vec<StepReport>,
}

impl ScriptedConsole {
    pub fn new<'a>(answers: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            answers: answers.into_iter().map(str::to_string).collect(),
            ..Self::default()
        }
    }
}

impl Console for ScriptedConsole {
    fn confirm(&mut self, question: &str) -> Result<bool> {
        self.questions.push(question.to_string());
        Ok(self
            .answers
            .pop_front()
            .is_some_and(|answer| is_affirmative(&answer)))
    }

    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn report(&mut self, report: &StepReport) {
        self.reports.push(report.clone());
    }
}
