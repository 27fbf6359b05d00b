use super::{Answer, ScaledResult};
use crate::assessments::bank::ScaledQuestion;

/// Sum the selected option weights across the sheet.
///
/// An answer resolves to an option index either directly or via its label;
/// anything that fails to resolve (missing entry, unknown label, index out of
/// range) contributes zero so a partial sheet still scores.
pub(super) fn score(questions: &[ScaledQuestion], answers: &[Option<Answer>]) -> ScaledResult {
    let mut total: u32 = 0;

    for (index, question) in questions.iter().enumerate() {
        let selected = answers
            .get(index)
            .and_then(Option::as_ref)
            .and_then(|answer| resolve_index(question, answer));

        if let Some(option_index) = selected {
            if let Some(points) = question.scoring.get(option_index) {
                total += points;
            }
        }
    }

    ScaledResult {
        score: total,
        max_score: questions.iter().map(ScaledQuestion::max_points).sum(),
        total_questions: questions.len() as u32,
    }
}

fn resolve_index(question: &ScaledQuestion, answer: &Answer) -> Option<usize> {
    match answer {
        Answer::Index(index) => Some(*index),
        Answer::Label(label) => question.options.iter().position(|option| option == label),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: u16, scoring: &[u32]) -> ScaledQuestion {
        ScaledQuestion {
            id,
            prompt: format!("item {id}"),
            options: scoring.iter().map(|points| format!("opt-{points}")).collect(),
            scoring: scoring.to_vec(),
        }
    }

    fn bank() -> Vec<ScaledQuestion> {
        vec![
            question(1, &[0, 1, 2, 3]),
            question(2, &[0, 2, 4]),
            question(3, &[0, 1, 2, 3, 4]),
        ]
    }

    #[test]
    fn sums_selected_weights() {
        let sheet = vec![
            Some(Answer::Index(3)),
            Some(Answer::Label("opt-2".to_string())),
            Some(Answer::Index(1)),
        ];
        let result = score(&bank(), &sheet);
        assert_eq!(result.score, 6);
        assert_eq!(result.max_score, 11);
        assert_eq!(result.total_questions, 3);
    }

    #[test]
    fn unresolved_answers_contribute_zero() {
        let sheet = vec![
            None,
            Some(Answer::Index(99)),
            Some(Answer::Label("not an option".to_string())),
        ];
        let result = score(&bank(), &sheet);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn max_score_ignores_the_answer_sheet() {
        let empty = score(&bank(), &[]);
        let full = score(
            &bank(),
            &[
                Some(Answer::Index(0)),
                Some(Answer::Index(2)),
                Some(Answer::Index(4)),
            ],
        );
        assert_eq!(empty.max_score, full.max_score);
    }

    #[test]
    fn sheet_longer_than_bank_is_truncated() {
        let sheet = vec![
            Some(Answer::Index(1)),
            Some(Answer::Index(1)),
            Some(Answer::Index(1)),
            Some(Answer::Index(2)),
            Some(Answer::Index(2)),
        ];
        let result = score(&bank(), &sheet);
        assert_eq!(result.score, 4);
        assert_eq!(result.total_questions, 3);
    }
}
