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

use serde::Deserialize;

use crate::error::Fallible;
use crate::types::answer::Answer;
use crate::types::question::Question;
use crate::types::question_set::QuestionSet;

/// Root of a catalog document.
#[derive(Deserialize, Default)]
#[serde(default)]
struct CatalogFile {
    sets: Vec<SetRecord>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SetRecord {
    name: String,
    description: String,
    questions: Vec<QuestionRecord>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct QuestionRecord {
    text: String,
    answers: Vec<AnswerRecord>,
    explanation: String,
}

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct AnswerRecord {
    text: String,
    is_correct: bool,
}

/// Parse a JSON catalog document into question sets.
///
/// Unknown fields are ignored and missing fields take their empty value. A
/// `null` document is an empty catalog.
pub fn parse_catalog(content: &str) -> Fallible<Vec<QuestionSet>> {
    let file: Option<CatalogFile> = serde_json::from_str(content)?;
    let file = file.unwrap_or_default();
    let sets = file.sets.into_iter().map(SetRecord::into_set).collect();
    Ok(sets)
}

impl SetRecord {
    fn into_set(self) -> QuestionSet {
        let questions = self
            .questions
            .into_iter()
            .map(QuestionRecord::into_question)
            .collect();
        QuestionSet::new(self.name, self.description, questions)
    }
}

impl QuestionRecord {
    fn into_question(self) -> Question {
        let answers = self
            .answers
            .into_iter()
            .map(|a| Answer::new(a.text, a.is_correct))
            .collect();
        Question::new(self.text, answers, self.explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_document() -> Fallible<()> {
        let content = r#"{
            "sets": [
                {
                    "name": "Rust",
                    "description": "Ownership basics",
                    "questions": [
                        {
                            "text": "Who owns a moved value?",
                            "answers": [
                                { "text": "The old binding", "isCorrect": false },
                                { "text": "The new binding", "isCorrect": true }
                            ],
                            "explanation": "A move transfers ownership."
                        }
                    ]
                }
            ]
        }"#;
        let sets = parse_catalog(content)?;
        assert_eq!(sets.len(), 1);
        let set = &sets[0];
        assert_eq!(set.name(), "Rust");
        assert_eq!(set.description(), "Ownership basics");
        assert_eq!(set.len(), 1);
        let q = &set.questions()[0];
        assert_eq!(q.text(), "Who owns a moved value?");
        assert_eq!(q.explanation(), "A move transfers ownership.");
        assert_eq!(q.answers().len(), 2);
        assert!(!q.answers()[0].is_correct());
        assert!(q.answers()[1].is_correct());
        Ok(())
    }

    #[test]
    fn test_missing_fields_default() -> Fallible<()> {
        let content = r#"{ "sets": [ { "questions": [ { "answers": [ {} ] } ] }, {} ] }"#;
        let sets = parse_catalog(content)?;
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].name(), "");
        assert_eq!(sets[0].description(), "");
        let q = &sets[0].questions()[0];
        assert_eq!(q.text(), "");
        assert_eq!(q.explanation(), "");
        assert_eq!(q.answers()[0].text(), "");
        assert!(!q.answers()[0].is_correct());
        assert!(sets[1].is_empty());
        Ok(())
    }

    #[test]
    fn test_unknown_fields_ignored() -> Fallible<()> {
        let content = r#"{ "version": 2, "sets": [ { "name": "A", "color": "red" } ] }"#;
        let sets = parse_catalog(content)?;
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].name(), "A");
        Ok(())
    }

    #[test]
    fn test_empty_documents() -> Fallible<()> {
        assert!(parse_catalog("{}")?.is_empty());
        assert!(parse_catalog("null")?.is_empty());
        assert!(parse_catalog(r#"{ "sets": [] }"#)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_malformed_input() {
        assert!(parse_catalog("").is_err());
        assert!(parse_catalog("{ \"sets\": ").is_err());
        assert!(parse_catalog(r#"{ "sets": 3 }"#).is_err());
        assert!(parse_catalog(r#"{ "sets": [ { "name": 1 } ] }"#).is_err());
    }
}
