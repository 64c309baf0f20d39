// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;

use crate::types::answer::Answer;
use crate::types::question::Question;
use crate::types::question_set::QuestionSet;

/// The outcome of answering one question.
///
/// A result points back into the shared question set rather than copying the
/// question and answer, so `selected_answer` is the very answer the user
/// picked. Correctness is captured when the result is created and never
/// changes afterwards.
#[derive(Clone, Debug)]
pub struct QuizResult {
    set: Arc<QuestionSet>,
    question_index: usize,
    answer_index: usize,
    was_correct: bool,
}

impl QuizResult {
    /// Record the selection of answer `answer_index` for question
    /// `question_index`. Returns `None` if either index is out of range.
    pub fn new(set: Arc<QuestionSet>, question_index: usize, answer_index: usize) -> Option<Self> {
        let was_correct = set
            .question(question_index)?
            .answer(answer_index)?
            .is_correct();
        Some(Self {
            set,
            question_index,
            answer_index,
            was_correct,
        })
    }

    pub fn question(&self) -> &Question {
        &self.set.questions()[self.question_index]
    }

    pub fn selected_answer(&self) -> &Answer {
        &self.question().answers()[self.answer_index]
    }

    pub fn was_correct(&self) -> bool {
        self.was_correct
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set() -> Arc<QuestionSet> {
        let q = Question::new(
            "2 + 2?",
            vec![Answer::new("3", false), Answer::new("4", true)],
            "Arithmetic.",
        );
        Arc::new(QuestionSet::new("Math", "Sums", vec![q]))
    }

    #[test]
    fn test_captures_correctness() {
        let set = set();
        let wrong = QuizResult::new(set.clone(), 0, 0).unwrap();
        let right = QuizResult::new(set.clone(), 0, 1).unwrap();
        assert!(!wrong.was_correct());
        assert!(right.was_correct());
        assert_eq!(right.selected_answer().text(), "4");
        assert_eq!(right.question().text(), "2 + 2?");
    }

    #[test]
    fn test_refers_to_shared_answer() {
        let set = set();
        let result = QuizResult::new(set.clone(), 0, 1).unwrap();
        let original: &Answer = &set.questions()[0].answers()[1];
        assert!(std::ptr::eq(result.selected_answer(), original));
    }

    #[test]
    fn test_out_of_range() {
        let set = set();
        assert!(QuizResult::new(set.clone(), 1, 0).is_none());
        assert!(QuizResult::new(set, 0, 2).is_none());
    }
}
