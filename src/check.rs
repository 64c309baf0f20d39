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

use std::fmt::Display;
use std::fmt::Formatter;

use crate::types::question_set::QuestionSet;

/// Degenerate data the engine tolerates but a catalog author should fix.
#[derive(Debug, PartialEq, Eq)]
pub enum Issue {
    /// The set has no questions, so a quiz over it completes immediately.
    EmptySet { set: String },
    /// The question offers nothing to select.
    NoAnswers { set: String, question: usize },
    /// No answer is flagged correct, so the question can't be answered
    /// correctly.
    NoCorrectAnswer { set: String, question: usize },
    /// Several answers are flagged correct; review shows the first.
    MultipleCorrectAnswers {
        set: String,
        question: usize,
        count: usize,
    },
}

impl Display for Issue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Issue::EmptySet { set } => write!(f, "{set:?}: set has no questions"),
            Issue::NoAnswers { set, question } => {
                write!(f, "{set:?}, question {question}: no answers")
            }
            Issue::NoCorrectAnswer { set, question } => {
                write!(f, "{set:?}, question {question}: no correct answer")
            }
            Issue::MultipleCorrectAnswers {
                set,
                question,
                count,
            } => write!(
                f,
                "{set:?}, question {question}: {count} correct answers, the first one counts"
            ),
        }
    }
}

/// Find degenerate data in a catalog. Question numbers are one-based.
pub fn check_catalog<'a>(sets: impl IntoIterator<Item = &'a QuestionSet>) -> Vec<Issue> {
    let mut issues = Vec::new();
    for set in sets {
        let name = set.name().to_string();
        if set.is_empty() {
            issues.push(Issue::EmptySet { set: name.clone() });
        }
        for (i, question) in set.questions().iter().enumerate() {
            let number = i + 1;
            if question.answers().is_empty() {
                issues.push(Issue::NoAnswers {
                    set: name.clone(),
                    question: number,
                });
                continue;
            }
            match question.correct_answer_count() {
                0 => issues.push(Issue::NoCorrectAnswer {
                    set: name.clone(),
                    question: number,
                }),
                1 => {}
                count => issues.push(Issue::MultipleCorrectAnswers {
                    set: name.clone(),
                    question: number,
                    count,
                }),
            }
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::answer::Answer;
    use crate::types::question::Question;

    #[test]
    fn test_clean_catalog() {
        let answers = vec![Answer::new("a", true), Answer::new("b", false)];
        let q = Question::new("q", answers, "");
        let set = QuestionSet::new("Clean", "", vec![q]);
        assert!(check_catalog([&set]).is_empty());
    }

    #[test]
    fn test_degenerate_catalog() {
        let empty = QuestionSet::new("Empty", "", Vec::new());
        let questions = vec![
            Question::new("none", Vec::new(), ""),
            Question::new("wrong", vec![Answer::new("a", false)], ""),
            Question::new(
                "both",
                vec![Answer::new("a", true), Answer::new("b", true)],
                "",
            ),
        ];
        let bad = QuestionSet::new("Bad", "", questions);
        let issues = check_catalog([&empty, &bad]);
        assert_eq!(
            issues,
            vec![
                Issue::EmptySet {
                    set: "Empty".to_string()
                },
                Issue::NoAnswers {
                    set: "Bad".to_string(),
                    question: 1
                },
                Issue::NoCorrectAnswer {
                    set: "Bad".to_string(),
                    question: 2
                },
                Issue::MultipleCorrectAnswers {
                    set: "Bad".to_string(),
                    question: 3,
                    count: 2
                },
            ]
        );
        assert_eq!(
            issues[3].to_string(),
            "\"Bad\", question 3: 2 correct answers, the first one counts"
        );
    }
}
