use super::{Shell, ShellInput};

/// A shell that yields a single expression given on the command line.
pub(crate) struct SingleExpressionShell {
    it: Option<String>,
}

impl SingleExpressionShell {
    pub(crate) fn new(expression: String) -> Self {
        Self {
            it: Some(expression),
        }
    }
}

impl Shell for SingleExpressionShell {
    fn prompt_line(&mut self, _prompt: &str) -> ShellInput {
        match self.it.take() {
            Some(line) => ShellInput::Line(line),
            None => ShellInput::None,
        }
    }

    fn is_interactive(&self) -> bool {
        false
    }

    fn add_history_entry(&mut self, _line: &str) {
        // Intentionally left blank.
    }

    fn save_history(&mut self) {
        // Intentionally left blank.
    }
}
