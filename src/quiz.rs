use crate::models::AnswerKey;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionBody {
    Choice { options: Vec<String> },
    TrueFalse,
    Matching { pairs: Vec<(String, String)> },
    PromptOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    pub number: usize,
    pub text: String,
    pub body: QuestionBody,
    pub key: Option<AnswerKey>,
    pub explanation: Option<String>,
}

impl QuestionView {
    /// Number of selectable inputs in this question's exclusive group.
    pub fn input_count(&self) -> usize {
        match &self.body {
            QuestionBody::Choice { options } => options.len(),
            QuestionBody::TrueFalse => 2,
            QuestionBody::Matching { .. } | QuestionBody::PromptOnly => 0,
        }
    }

    fn answer_for_input(&self, input: usize) -> Option<AnswerKey> {
        if input >= self.input_count() {
            return None;
        }
        match self.body {
            QuestionBody::Choice { .. } => Some(AnswerKey::Option(input)),
            QuestionBody::TrueFalse => Some(AnswerKey::Bool(input == 0)),
            _ => None,
        }
    }

    pub fn is_gradable(&self) -> bool {
        self.key.is_some() && self.input_count() > 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Correct,
    Incorrect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizScore {
    pub correct: usize,
    pub total: usize,
}

/// Local, non-authoritative scoring of the rendered test. The answer key
/// comes from each question's `correct` field in the bundle.
#[derive(Debug, Clone)]
pub struct QuizEvaluator {
    questions: Vec<QuestionView>,
    selections: Vec<Option<usize>>,
    highlights: Vec<Option<Highlight>>,
    focus: usize,
}

impl QuizEvaluator {
    pub fn new(questions: Vec<QuestionView>) -> Self {
        let n = questions.len();
        Self {
            questions,
            selections: vec![None; n],
            highlights: vec![None; n],
            focus: 0,
        }
    }

    /// Selects input `input` of question `question`, replacing any earlier
    /// selection in the same group. Returns false when the input does not
    /// exist.
    pub fn select(&mut self, question: usize, input: usize) -> bool {
        match self.questions.get(question) {
            Some(q) if input < q.input_count() => {
                self.selections[question] = Some(input);
                true
            }
            _ => false,
        }
    }

    /// Moves the focused question's selection one input forward or back,
    /// starting from the first input when nothing is selected yet.
    pub fn cycle(&mut self, forward: bool) {
        let Some(q) = self.questions.get(self.focus) else {
            return;
        };
        let count = q.input_count();
        if count == 0 {
            return;
        }
        let next = match self.selections[self.focus] {
            None => 0,
            Some(i) if forward => (i + 1) % count,
            Some(i) => (i + count - 1) % count,
        };
        self.selections[self.focus] = Some(next);
    }

    pub fn focus_next(&mut self) {
        if self.focus < self.questions.len().saturating_sub(1) {
            self.focus += 1;
        }
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.saturating_sub(1);
    }

    pub fn submit(&mut self) -> QuizScore {
        let mut correct = 0;
        for (i, q) in self.questions.iter().enumerate() {
            let selected = self.selections[i].and_then(|input| q.answer_for_input(input));
            self.highlights[i] = match (selected, q.key) {
                (Some(answer), Some(key)) if answer == key => {
                    correct += 1;
                    Some(Highlight::Correct)
                }
                (Some(_), Some(_)) => Some(Highlight::Incorrect),
                _ => None,
            };
        }

        QuizScore {
            correct,
            total: self.questions.iter().filter(|q| q.is_gradable()).count(),
        }
    }

    pub fn questions(&self) -> &[QuestionView] {
        &self.questions
    }

    pub fn selection(&self, question: usize) -> Option<usize> {
        self.selections.get(question).copied().flatten()
    }

    pub fn highlight(&self, question: usize) -> Option<Highlight> {
        self.highlights.get(question).copied().flatten()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn answered(&self) -> usize {
        self.selections.iter().filter(|s| s.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice(number: usize, key: Option<usize>) -> QuestionView {
        QuestionView {
            number,
            text: format!("Question {}", number),
            body: QuestionBody::Choice {
                options: vec!["a".into(), "b".into(), "c".into()],
            },
            key: key.map(AnswerKey::Option),
            explanation: None,
        }
    }

    fn true_false(number: usize, key: bool) -> QuestionView {
        QuestionView {
            number,
            text: "It happened".into(),
            body: QuestionBody::TrueFalse,
            key: Some(AnswerKey::Bool(key)),
            explanation: None,
        }
    }

    #[test]
    fn test_scoring_and_highlights() {
        let mut quiz = QuizEvaluator::new(vec![
            choice(1, Some(1)),
            true_false(2, true),
            choice(3, Some(0)),
        ]);
        assert!(quiz.select(0, 1));
        assert!(quiz.select(1, 1)); // "False"

        let score = quiz.submit();
        assert_eq!(score, QuizScore { correct: 1, total: 3 });
        assert_eq!(quiz.highlight(0), Some(Highlight::Correct));
        assert_eq!(quiz.highlight(1), Some(Highlight::Incorrect));
        assert_eq!(quiz.highlight(2), None);
    }

    #[test]
    fn test_selection_is_exclusive_per_question() {
        let mut quiz = QuizEvaluator::new(vec![choice(1, Some(2)), choice(2, Some(2))]);
        quiz.select(0, 0);
        quiz.select(0, 2);
        quiz.select(1, 0);
        assert_eq!(quiz.selection(0), Some(2));
        assert_eq!(quiz.selection(1), Some(0));
        assert_eq!(quiz.submit().correct, 1);
    }

    #[test]
    fn test_invalid_selections_are_rejected() {
        let matching = QuestionView {
            number: 2,
            text: "Match".into(),
            body: QuestionBody::Matching {
                pairs: vec![("Anna".into(), "heroine".into())],
            },
            key: None,
            explanation: None,
        };
        let mut quiz = QuizEvaluator::new(vec![choice(1, Some(0)), matching]);
        assert!(!quiz.select(0, 3));
        assert!(!quiz.select(1, 0));
        assert!(!quiz.select(5, 0));
        assert_eq!(quiz.answered(), 0);
        assert_eq!(quiz.submit().total, 1);
    }

    #[test]
    fn test_questions_without_key_are_not_counted() {
        let mut quiz = QuizEvaluator::new(vec![choice(1, None), choice(2, Some(0))]);
        quiz.select(0, 0);
        quiz.select(1, 0);
        let score = quiz.submit();
        assert_eq!(score, QuizScore { correct: 1, total: 1 });
        assert_eq!(quiz.highlight(0), None);
    }

    #[test]
    fn test_correct_never_exceeds_answered_or_total() {
        let questions: Vec<QuestionView> = (0..6)
            .map(|i| {
                if i % 2 == 0 {
                    choice(i + 1, Some(i % 3))
                } else {
                    true_false(i + 1, i % 4 == 1)
                }
            })
            .collect();
        for mask in 0u32..64 {
            let mut quiz = QuizEvaluator::new(questions.clone());
            for q in 0..6 {
                if mask & (1 << q) != 0 {
                    quiz.select(q, (mask as usize + q) % 2);
                }
            }
            let answered = quiz.answered();
            let score = quiz.submit();
            assert!(score.correct <= answered.min(score.total));
        }
    }

    #[test]
    fn test_cycle_moves_through_the_focused_group() {
        let mut quiz = QuizEvaluator::new(vec![choice(1, Some(0)), true_false(2, true)]);
        quiz.cycle(true);
        assert_eq!(quiz.selection(0), Some(0));
        quiz.cycle(false);
        assert_eq!(quiz.selection(0), Some(2));

        quiz.focus_next();
        quiz.focus_next();
        assert_eq!(quiz.focus(), 1);
        quiz.cycle(true);
        quiz.cycle(true);
        assert_eq!(quiz.selection(1), Some(1));
        quiz.focus_prev();
        quiz.focus_prev();
        assert_eq!(quiz.focus(), 0);
    }

    #[test]
    fn test_empty_quiz() {
        let mut quiz = QuizEvaluator::new(vec![]);
        quiz.cycle(true);
        quiz.focus_next();
        assert_eq!(quiz.submit(), QuizScore { correct: 0, total: 0 });
    }
}
