use std::{borrow::Cow, path::PathBuf};

use ansi_term::{Colour, Style};
use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::{Highlighter, MatchingBracketHighlighter},
    hint::{Hinter, HistoryHinter},
    history::DefaultHistory,
    validate::{self, MatchingBracketValidator, Validator},
    Config, Context, Editor,
};
use rustyline_derive::Helper;

use super::{complete::complete_filter_name, Shell, ShellInput};

const USER_HISTORY_FILE_NAME: &str = ".sift_history";

pub(crate) struct RustylineShell {
    editor: Editor<SiftHelper, DefaultHistory>,
}

impl RustylineShell {
    /// Constructs an interactive shell that completes the given filter names.
    pub(crate) fn new(filter_names: Vec<String>) -> rustyline::Result<Self> {
        let helper = SiftHelper {
            filter_names,
            highlighter: MatchingBracketHighlighter::new(),
            hinter: HistoryHinter {},
            validator: MatchingBracketValidator::new(),
        };

        let config = Config::builder().auto_add_history(false).build();
        let mut editor = Editor::with_config(config)?;
        editor.set_helper(Some(helper));

        let mut shell = Self { editor };
        shell.load_history_file();
        Ok(shell)
    }

    fn load_history_file(&mut self) {
        let Some(history_file) = history_file() else {
            return;
        };

        if history_file.exists() {
            if let Err(error) = self.editor.load_history(&history_file) {
                tracing::warn!(%error, path = %history_file.display(), "could not load history");
            }
        }
    }
}

impl Shell for RustylineShell {
    fn prompt_line(&mut self, prompt: &str) -> ShellInput {
        match self.editor.readline(prompt) {
            Ok(line) => ShellInput::Line(line),
            Err(ReadlineError::Interrupted) => ShellInput::Interrupt,
            Err(ReadlineError::Eof) => ShellInput::Logout,
            Err(error) => {
                tracing::error!(%error, "could not read input");
                ShellInput::None
            }
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn add_history_entry(&mut self, line: &str) {
        if let Err(error) = self.editor.add_history_entry(line) {
            tracing::warn!(%error, "could not add history entry");
        }
    }

    fn save_history(&mut self) {
        let Some(history_file) = history_file() else {
            return;
        };

        if let Err(error) = self.editor.save_history(&history_file) {
            tracing::warn!(%error, path = %history_file.display(), "could not save history");
        }
    }
}

/// Returns the path of the user's history file.
fn history_file() -> Option<PathBuf> {
    dirs::home_dir().map(|mut path| {
        path.push(USER_HISTORY_FILE_NAME);
        path
    })
}

#[derive(Helper)]
struct SiftHelper {
    filter_names: Vec<String>,
    highlighter: MatchingBracketHighlighter,
    validator: MatchingBracketValidator,
    hinter: HistoryHinter,
}

impl Completer for SiftHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let (start, names) = complete_filter_name(line, pos, &self.filter_names);
        let candidates = names
            .into_iter()
            .map(|name| Pair {
                display: name.to_owned(),
                replacement: name.to_owned(),
            })
            .collect();

        Ok((start, candidates))
    }
}

impl Hinter for SiftHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, ctx: &Context<'_>) -> Option<String> {
        self.hinter.hint(line, pos, ctx)
    }
}

impl Highlighter for SiftHelper {
    fn highlight_prompt<'b, 's: 'b, 'p: 'b>(
        &'s self,
        prompt: &'p str,
        default: bool,
    ) -> Cow<'b, str> {
        if default {
            Cow::Owned(Colour::Cyan.bold().paint(prompt).to_string())
        } else {
            Cow::Borrowed(prompt)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(Style::new().dimmed().paint(hint).to_string())
    }

    fn highlight<'l>(&self, line: &'l str, pos: usize) -> Cow<'l, str> {
        self.highlighter.highlight(line, pos)
    }

    fn highlight_char(&self, line: &str, pos: usize) -> bool {
        self.highlighter.highlight_char(line, pos)
    }
}

impl Validator for SiftHelper {
    fn validate(
        &self,
        ctx: &mut validate::ValidationContext,
    ) -> rustyline::Result<validate::ValidationResult> {
        self.validator.validate(ctx)
    }

    fn validate_while_typing(&self) -> bool {
        self.validator.validate_while_typing()
    }
}
