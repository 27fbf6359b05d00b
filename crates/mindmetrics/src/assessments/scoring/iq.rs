use super::{Answer, IqResult, IQ_POINTS_PER_QUESTION};
use crate::assessments::bank::IqQuestion;

/// Count exact-match answers and derive the published IQ figures.
///
/// `answers` is aligned to `questions` by index; a missing entry, an
/// index-typed answer, or a sheet shorter than the bank simply counts as
/// incorrect for the unmatched questions.
pub(super) fn score(questions: &[IqQuestion], answers: &[Option<Answer>]) -> IqResult {
    let total_questions = questions.len() as u32;

    let total_correct = questions
        .iter()
        .enumerate()
        .filter(|(index, question)| {
            matches!(
                answers.get(*index).and_then(Option::as_ref),
                Some(Answer::Label(label)) if *label == question.correct_answer
            )
        })
        .count() as u32;

    let ratio = if total_questions == 0 {
        0.0
    } else {
        f64::from(total_correct) / f64::from(total_questions)
    };

    // 0% correct maps to 70, 100% correct to 150.
    let iq_score = (70.0 + ratio * 80.0).round() as u32;
    let percentile = (f64::from(iq_score) / 160.0 * 100.0).round() as u32;
    let accuracy = (ratio * 100.0).round() as u32;

    IqResult {
        iq_score,
        percentile,
        accuracy,
        total_correct,
        total_questions,
        total_points: total_correct * IQ_POINTS_PER_QUESTION,
        max_points: total_questions * IQ_POINTS_PER_QUESTION,
    }
}
