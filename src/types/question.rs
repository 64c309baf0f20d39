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

use crate::types::answer::Answer;

#[derive(Clone, Debug, PartialEq)]
pub struct Question {
    text: String,
    /// The choices, in display order. The loader does not require at least
    /// one.
    answers: Vec<Answer>,
    /// Shown after the question is answered.
    explanation: String,
}

impl Question {
    pub fn new(
        text: impl Into<String>,
        answers: Vec<Answer>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            answers,
            explanation: explanation.into(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn answer(&self, index: usize) -> Option<&Answer> {
        self.answers.get(index)
    }

    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    /// The canonical correct answer: the first answer flagged as correct, in
    /// display order.
    pub fn correct_answer(&self) -> Option<&Answer> {
        self.answers.iter().find(|answer| answer.is_correct())
    }

    pub fn correct_answer_count(&self) -> usize {
        self.answers.iter().filter(|answer| answer.is_correct()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(flags: &[bool]) -> Question {
        let answers = flags
            .iter()
            .enumerate()
            .map(|(i, flag)| Answer::new(format!("answer {i}"), *flag))
            .collect();
        Question::new("What?", answers, "Because.")
    }

    #[test]
    fn test_single_correct_answer() {
        let q = question(&[false, true, false]);
        assert_eq!(q.correct_answer().map(Answer::text), Some("answer 1"));
        assert_eq!(q.correct_answer_count(), 1);
    }

    #[test]
    fn test_first_correct_answer_wins() {
        let q = question(&[false, true, true]);
        assert_eq!(q.correct_answer().map(Answer::text), Some("answer 1"));
        assert_eq!(q.correct_answer_count(), 2);
    }

    #[test]
    fn test_no_correct_answer() {
        let q = question(&[false, false]);
        assert!(q.correct_answer().is_none());
        assert_eq!(q.correct_answer_count(), 0);
    }

    #[test]
    fn test_answer_out_of_range() {
        let q = question(&[true]);
        assert!(q.answer(0).is_some());
        assert!(q.answer(1).is_none());
    }
}
