use crate::model::Line;
use crate::template::schema::{Template, TemplateEntry};

/// Result of looking ahead from a question line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookahead {
    /// Index of the line holding the answer.
    pub answer_line: Option<usize>,
    /// Where the scan continues from: the answer line when one was found,
    /// otherwise the question line itself.
    pub cursor: usize,
}

/// Find the first template entry whose phrase occurs in the line.
pub fn match_question<'t>(line: &str, template: &'t Template) -> Option<&'t TemplateEntry> {
    template
        .entries
        .iter()
        .find(|entry| line.contains(entry.phrase.as_str()))
}

/// Whether the line contains any template phrase.
pub fn is_question(line: &str, template: &Template) -> bool {
    match_question(line, template).is_some()
}

/// Look forward from the question at `question_line` for its answer.
///
/// Lines that themselves contain a template phrase are skipped rather
/// than ending the search, so a question printed directly above another
/// can still reach its answer further down. Lines flagged in `claimed`
/// already belong to another question and are skipped as well.
pub fn locate_answer(
    lines: &[Line<'_>],
    question_line: usize,
    template: &Template,
    claimed: &[bool],
) -> Lookahead {
    let answer_line = lines
        .iter()
        .enumerate()
        .skip(question_line + 1)
        .find(|(j, line)| {
            !line.text.is_empty()
                && !claimed.get(*j).copied().unwrap_or(false)
                && !is_question(line.text, template)
        })
        .map(|(j, _)| j);

    Lookahead {
        answer_line,
        cursor: answer_line.unwrap_or(question_line),
    }
}
