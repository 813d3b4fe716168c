pub mod matcher;
pub mod normalize;

use crate::model::Line;
use crate::template::schema::{Template, TemplateEntry};
use matcher::{locate_answer, match_question};

/// Controls how the form scan treats question lines that were skipped
/// while looking ahead for an answer.
#[derive(Debug, Clone, Default)]
pub struct MatchOptions {
    /// When false (the default), scanning resumes after the located answer,
    /// so questions printed between a question and its answer never get
    /// their own match. When true, scanning resumes right after each
    /// question line and skipped questions are matched too; lines already
    /// claimed as answers are never claimed again.
    pub revisit_skipped_questions: bool,
}

/// A template question found in the text, with its raw answer.
#[derive(Debug, Clone)]
pub struct Capture<'t> {
    pub entry: &'t TemplateEntry,
    /// Index of the question line.
    pub question_line: usize,
    /// Index of the answer line, if one was found.
    pub answer_line: Option<usize>,
    pub raw_value: String,
}

/// Split raw OCR text into non-empty, trimmed lines.
///
/// Handles `\r\n` endings. No other alteration is made to the text.
pub fn segment_lines(raw: &str) -> Vec<Line<'_>> {
    raw.lines()
        .map(|l| l.trim_end_matches('\r').trim())
        .filter(|l| !l.is_empty())
        .enumerate()
        .map(|(index, text)| Line { index, text })
        .collect()
}

/// Walk the lines in order, capturing an answer for every question found.
///
/// Captures are returned in discovery order. A question that appears
/// twice produces two captures.
pub fn capture_answers<'t>(
    lines: &[Line<'_>],
    template: &'t Template,
    options: &MatchOptions,
) -> Vec<Capture<'t>> {
    let mut captures = Vec::new();
    let mut claimed = vec![false; lines.len()];
    let mut i = 0;

    while i < lines.len() {
        let Some(entry) = match_question(lines[i].text, template) else {
            i += 1;
            continue;
        };

        let lookahead = locate_answer(lines, i, template, &claimed);
        let raw_value = match lookahead.answer_line {
            Some(j) => {
                claimed[j] = true;
                lines[j].text.to_string()
            }
            None => String::new(),
        };

        tracing::debug!(
            key = %entry.key,
            question_line = i,
            answer_line = ?lookahead.answer_line,
            "matched question"
        );

        captures.push(Capture {
            entry,
            question_line: i,
            answer_line: lookahead.answer_line,
            raw_value,
        });

        i = if options.revisit_skipped_questions {
            i + 1
        } else {
            lookahead.cursor + 1
        };
    }

    captures
}
