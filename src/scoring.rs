use crate::model::{AnswerSet, Question};

/// Correcta solo si coincide en longitud y en cada posición (distingue mayúsculas).
pub fn is_correct(question: &Question, answer: &[String]) -> bool {
    answer.len() == question.correct_answer.len()
        && answer
            .iter()
            .zip(&question.correct_answer)
            .all(|(given, expected)| given == expected)
}

/// ¿El hueco `blank` tiene la palabra esperada?
pub fn blank_matches(question: &Question, answer: &[String], blank: usize) -> bool {
    match (answer.get(blank), question.correct_answer.get(blank)) {
        (Some(given), Some(expected)) => given == expected,
        _ => false,
    }
}

/// Puntuación total, recalculada entera cada vez.
pub fn score(questions: &[Question], answers: &AnswerSet) -> usize {
    questions
        .iter()
        .enumerate()
        .filter(|(i, q)| {
            answers
                .get(*i)
                .map(|a| is_correct(q, a))
                .unwrap_or(false)
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn question(correct: &[&str]) -> Question {
        Question {
            question: "_____________ _____________ _____________ _____________".into(),
            options: words(correct),
            correct_answer: words(correct),
        }
    }

    fn bank() -> Vec<Question> {
        vec![
            question(&["I", "run", "fast", "today"]),
            question(&["She", "sings", "very", "well"]),
            question(&["We", "left", "too", "early"]),
        ]
    }

    #[test]
    fn all_canonical_answers_score_full() {
        let qs = bank();
        let answers: AnswerSet = qs.iter().map(|q| q.correct_answer.clone()).collect();
        assert_eq!(score(&qs, &answers), qs.len());
    }

    #[test]
    fn wrong_order_does_not_count() {
        let qs = bank();
        let mut answers: AnswerSet = qs.iter().map(|q| q.correct_answer.clone()).collect();
        answers[1] = words(&["sings", "She", "very", "well"]);
        assert_eq!(score(&qs, &answers), 2);
    }

    #[test]
    fn short_or_long_answers_do_not_count() {
        let qs = bank();
        let mut answers: AnswerSet = qs.iter().map(|q| q.correct_answer.clone()).collect();
        answers[0] = words(&["I", "run", "fast"]);
        answers[2].push("again".into());
        assert_eq!(score(&qs, &answers), 1);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        let q = question(&["I", "run", "fast", "today"]);
        assert!(!is_correct(&q, &words(&["i", "run", "fast", "today"])));
    }

    #[test]
    fn missing_entries_score_zero() {
        let qs = bank();
        assert_eq!(score(&qs, &Vec::new()), 0);
        assert_eq!(score(&qs, &vec![Vec::new(); 3]), 0);
    }

    #[test]
    fn blank_matches_checks_single_position() {
        let q = question(&["I", "run", "fast", "today"]);
        let answer = words(&["run", "I", "fast"]);
        assert!(!blank_matches(&q, &answer, 0));
        assert!(blank_matches(&q, &answer, 2));
        assert!(!blank_matches(&q, &answer, 3));
    }
}
