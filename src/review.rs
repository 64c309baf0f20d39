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

use serde::Serialize;

use crate::session::QuizSession;
use crate::types::quiz_result::QuizResult;

/// Correct answers out of answered questions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Score {
    pub correct: usize,
    pub total: usize,
}

impl Score {
    pub fn new(correct: usize, total: usize) -> Self {
        Self { correct, total }
    }

    /// Whole percentage, rounded down. Zero when nothing was answered.
    pub fn percentage(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.correct * 100 / self.total
        }
    }

    pub fn band(&self) -> ScoreBand {
        ScoreBand::from_percentage(self.percentage())
    }
}

/// Coarse grading of a percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// 80% and above.
    Excellent,
    /// 50% to 79%.
    Fair,
    /// Below 50%.
    Poor,
}

impl ScoreBand {
    pub fn from_percentage(percentage: usize) -> Self {
        if percentage >= 80 {
            ScoreBand::Excellent
        } else if percentage >= 50 {
            ScoreBand::Fair
        } else {
            ScoreBand::Poor
        }
    }
}

/// A wrongly answered question, ready for review.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mistake {
    /// One-based position in the list of mistakes.
    pub number: usize,
    pub question: String,
    pub selected_answer: String,
    /// The first answer flagged correct, if the question has one.
    pub correct_answer: Option<String>,
    pub explanation: String,
}

impl Mistake {
    fn new(number: usize, result: &QuizResult) -> Self {
        let question = result.question();
        Self {
            number,
            question: question.text().to_string(),
            selected_answer: result.selected_answer().text().to_string(),
            correct_answer: question.correct_answer().map(|a| a.text().to_string()),
            explanation: question.explanation().to_string(),
        }
    }
}

/// The mistakes made so far, in answering order.
pub fn review_errors(session: &QuizSession) -> Vec<Mistake> {
    session
        .errors()
        .into_iter()
        .enumerate()
        .map(|(i, result)| Mistake::new(i + 1, result))
        .collect()
}

/// Everything a results screen needs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub set_name: String,
    pub score: Score,
    pub percentage: usize,
    pub band: ScoreBand,
    pub mistakes: Vec<Mistake>,
}

impl Summary {
    pub fn from_session(session: &QuizSession) -> Self {
        let score = session.score();
        Self {
            set_name: session
                .current_set()
                .map(|set| set.name().to_string())
                .unwrap_or_default(),
            score,
            percentage: score.percentage(),
            band: score.band(),
            mistakes: review_errors(session),
        }
    }
}
