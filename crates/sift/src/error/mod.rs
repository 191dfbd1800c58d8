use std::fmt::Display;

use annotate_snippets::{
    display_list::{DisplayList, FormatOptions},
    snippet::{Annotation, AnnotationType, Slice, Snippet, SourceAnnotation},
};
use sift_eval::EvalError;
use sift_parse::ParseError;

/// Errors displayed to the user.
#[derive(Debug)]
pub(crate) enum AppError {
    /// An expression could not be evaluated. Holds the expression's source.
    Eval(EvalError, String),
    Io(std::io::Error),
}

impl Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Eval(error, _) => write!(f, "{error}"),
            AppError::Io(error) => write!(f, "{error}"),
        }
    }
}

/// Generalized error handler.
pub(crate) trait ErrorHandler {
    /// Displays an error.
    fn display_error(&self, error: AppError);
}

/// A simple error handler, displaying errors on a single line.
pub(crate) struct SimpleErrorHandler;
impl ErrorHandler for SimpleErrorHandler {
    fn display_error(&self, error: AppError) {
        eprintln!("sift: {error}");
    }
}

/// An guiding error handler, displaying errors and help.
pub(crate) struct GuidingErrorHandler;
impl ErrorHandler for GuidingErrorHandler {
    fn display_error(&self, error: AppError) {
        match error {
            AppError::Eval(EvalError::Parse(error), line) => {
                eprintln!("{}", format_parse_error(&line, &error, true));
            }
            error => eprintln!("sift: {error}"),
        }
    }
}

/// Formats a parse error as an annotated snippet of its source.
pub(crate) fn format_parse_error(line: &str, error: &ParseError, color: bool) -> String {
    let label = error.to_string();
    let Some(range) = error
        .span()
        .and_then(|span| snippet_range(line, span.start, span.end))
    else {
        return format!("sift: {label}");
    };

    let snippet = Snippet {
        title: Some(Annotation {
            label: Some(&label),
            id: None,
            annotation_type: AnnotationType::Error,
        }),
        footer: vec![],
        slices: vec![Slice {
            source: line,
            line_start: 1,
            origin: None,
            fold: true,
            annotations: vec![SourceAnnotation {
                label: error.help(),
                annotation_type: AnnotationType::Error,
                range,
            }],
        }],
        opt: FormatOptions {
            color,
            ..Default::default()
        },
    };

    DisplayList::from(snippet).to_string()
}

/// Returns the character range that annotate-snippets underlines for a byte
/// span, or `None` if there is nothing to underline.
///
/// Empty spans are widened to cover one character. At the end of input that
/// is the last character.
fn snippet_range(line: &str, start: usize, end: usize) -> Option<(usize, usize)> {
    let chars = |byte: usize| -> usize {
        let mut byte = byte.min(line.len());
        while !line.is_char_boundary(byte) {
            byte -= 1;
        }
        line[..byte].chars().count()
    };

    let len = line.chars().count();
    let (start, end) = (chars(start), chars(end));
    match len {
        0 => None,
        _ if end > start => Some((start, end)),
        _ if start < len => Some((start, start + 1)),
        _ => Some((len - 1, len)),
    }
}

#[cfg(test)]
mod tests {
    use sift_parse::parse_chain;

    use super::*;

    #[test]
    fn it_annotates_parse_errors() {
        let line = "reverse |";
        let error = parse_chain(line).expect_err("dangling pipe");

        let output = format_parse_error(line, &error, false);
        assert!(output.contains("error: dangling pipe"), "{output}");
        assert!(output.contains("reverse |"), "{output}");
        assert!(
            output.contains("a filter name is expected after this pipe"),
            "{output}"
        );
    }

    #[test]
    fn it_formats_errors_without_spans() {
        let error = ParseError::EmptyChain;
        assert_eq!(
            format_parse_error("", &error, false),
            "sift: empty filter chain"
        );
    }

    #[test]
    fn it_widens_empty_spans() {
        assert_eq!(snippet_range("abc", 3, 3), Some((2, 3)));
        assert_eq!(snippet_range("abc", 1, 1), Some((1, 2)));
        assert_eq!(snippet_range("abc", 1, 2), Some((1, 2)));
        assert_eq!(snippet_range("", 0, 0), None);
    }

    #[test]
    fn it_counts_characters_in_spans() {
        assert_eq!(snippet_range("'åä' |", 7, 8), Some((5, 6)));
        assert_eq!(snippet_range("åä", 4, 4), Some((1, 2)));
    }

    #[test]
    fn it_annotates_errors_after_non_ascii_text() {
        let line = "replace: 'åäöåäöåäö', x |";
        let error = parse_chain(line).expect_err("dangling pipe");

        let output = format_parse_error(line, &error, false);
        assert!(output.contains("error: dangling pipe"), "{output}");
        assert!(output.contains(line), "{output}");
    }

    #[test]
    fn it_annotates_errors_at_the_end_of_input() {
        for line in ["f: {a", "replace: 'åä', {ö"] {
            let error = parse_chain(line).expect_err("missing colon");
            let output = format_parse_error(line, &error, false);
            assert!(output.contains("error: expected ':'"), "{output}");
        }
    }
}
