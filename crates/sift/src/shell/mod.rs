pub(crate) mod complete;
pub(crate) mod interactive;
pub(crate) mod single;

#[cfg(test)]
use mockall::automock;

pub(crate) enum ShellInput {
    /// A line of input.
    Line(String),
    /// Discard the current line.
    Interrupt,
    /// Exit the shell.
    Logout,
    /// No input.
    None,
}

#[cfg_attr(test, automock)]
pub(crate) trait Shell {
    /// Prompts the user for a line of input.
    fn prompt_line(&mut self, prompt: &str) -> ShellInput;

    /// Returns `true` if the prompt is run interactively, i.e. the user can be prompted for
    /// additional input.
    fn is_interactive(&self) -> bool;

    /// Appends a line entry to the shell's history.
    ///
    /// This feature is optional to implement, and may be a no-op.
    fn add_history_entry(&mut self, line: &str);

    /// Persists the shell's history.
    ///
    /// This feature is optional to implement, and may be a no-op.
    fn save_history(&mut self);
}
