use lightningcss::error::{Error, ParserError, PrinterErrorKind};
use thiserror::Error;

pub type CssResult<T> = Result<T, CssError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CssError {
    /// `line` and `column` are both 1-based
    #[error("Invalid stylesheet at {line}:{column}: {message}")]
    Syntax {
        message: String,
        line: u32,
        column: u32,
    },

    #[error("Failed to print stylesheet: {message}")]
    Print { message: String },
}

impl CssError {
    pub fn syntax(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Syntax {
            message: message.into(),
            line,
            column,
        }
    }

    pub fn print(message: impl Into<String>) -> Self {
        Self::Print {
            message: message.into(),
        }
    }

    /// Byte offset into `source` where a syntax error was reported
    pub fn offset(&self, source: &str) -> Option<usize> {
        let CssError::Syntax { line, column, .. } = self else {
            return None;
        };

        let mut start = 0;
        for _ in 1..*line {
            start += source[start..].find('\n')? + 1;
        }

        let line_text = source[start..].split('\n').next().unwrap_or("");
        let within = line_text
            .char_indices()
            .nth(column.saturating_sub(1) as usize)
            .map(|(index, _)| index)
            .unwrap_or(line_text.len());

        Some(start + within)
    }
}

impl<'i> From<Error<ParserError<'i>>> for CssError {
    fn from(err: Error<ParserError<'i>>) -> Self {
        // lightningcss reports 0-based lines
        let (line, column) = err
            .loc
            .as_ref()
            .map_or((1, 1), |loc| (loc.line + 1, loc.column));
        CssError::syntax(err.kind.to_string(), line, column)
    }
}

impl From<Error<PrinterErrorKind>> for CssError {
    fn from(err: Error<PrinterErrorKind>) -> Self {
        CssError::print(err.kind.to_string())
    }
}

/// Pretty-print a stylesheet error with source context using ariadne
#[cfg(feature = "pretty-errors")]
pub fn format_error(source: &str, filename: &str, error: &CssError) -> String {
    use ariadne::{Color, Label, Report, ReportKind, Source};

    let Some(start) = error.offset(source) else {
        return error.to_string();
    };
    let end = (start + 1).min(source.len()).max(start);

    let label_message = match error {
        CssError::Syntax { message, .. } => message.clone(),
        CssError::Print { message } => message.clone(),
    };

    let mut output = Vec::new();
    let report = Report::build(ReportKind::Error, filename, start)
        .with_message(error.to_string())
        .with_label(
            Label::new((filename, start..end))
                .with_color(Color::Red)
                .with_message(label_message),
        )
        .finish();

    if report
        .write((filename, Source::from(source)), &mut output)
        .is_err()
    {
        return error.to_string();
    }

    String::from_utf8(output).unwrap_or_else(|_| error.to_string())
}
