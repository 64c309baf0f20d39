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

use crate::review::Score;
use crate::types::answer::Answer;
use crate::types::question::Question;
use crate::types::question_set::QuestionSet;
use crate::types::quiz_result::QuizResult;

/// Where a session is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizState {
    /// No set is active.
    Idle,
    /// The current question is waiting for an answer.
    InProgress,
    /// The current question has been answered and feedback is visible.
    Answered,
    /// Every question in the set has been answered.
    Complete,
}

/// Emitted to subscribers after every effective transition. Ignored calls
/// emit nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    Started,
    Answered { correct: bool },
    Advanced,
    Completed,
    Reset,
}

type Listener = Box<dyn FnMut(&SessionEvent) + Send>;

/// One run through a question set.
///
/// Operations that are not valid in the current state are ignored rather
/// than reported, so a misbehaving caller can never corrupt the result log.
pub struct QuizSession {
    set: Option<Arc<QuestionSet>>,
    position: usize,
    state: QuizState,
    results: Vec<QuizResult>,
    listeners: Vec<Listener>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            set: None,
            position: 0,
            state: QuizState::Idle,
            results: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Register a callback invoked after each transition.
    pub fn subscribe(&mut self, listener: impl FnMut(&SessionEvent) + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Begin a new run of `set`, discarding any previous progress. A set
    /// with no questions is complete immediately.
    pub fn start_quiz(&mut self, set: Arc<QuestionSet>) {
        log::debug!("Starting quiz {:?} ({} questions)", set.name(), set.len());
        let empty = set.is_empty();
        self.set = Some(set);
        self.position = 0;
        self.results.clear();
        if empty {
            self.state = QuizState::Complete;
            self.emit(SessionEvent::Started);
            self.emit(SessionEvent::Completed);
        } else {
            self.state = QuizState::InProgress;
            self.emit(SessionEvent::Started);
        }
    }

    /// Answer the current question with the answer at `index`.
    ///
    /// Ignored unless the session is waiting for an answer, or if `index`
    /// does not name one of the current question's answers.
    pub fn select_answer(&mut self, index: usize) {
        if self.state != QuizState::InProgress {
            log::debug!("Ignoring answer in state {:?}", self.state);
            return;
        }
        let Some(set) = self.set.clone() else {
            return;
        };
        let Some(result) = QuizResult::new(set, self.position, index) else {
            log::debug!("Ignoring out-of-range answer {index}");
            return;
        };
        let correct = result.was_correct();
        self.results.push(result);
        self.state = QuizState::Answered;
        self.emit(SessionEvent::Answered { correct });
    }

    /// Move past an answered question. Returns `true` if another question
    /// was loaded, `false` if the set is now complete (or the call was
    /// ignored).
    pub fn advance(&mut self) -> bool {
        if self.state != QuizState::Answered {
            log::debug!("Ignoring advance in state {:?}", self.state);
            return false;
        }
        self.position += 1;
        if self.position < self.total() {
            self.state = QuizState::InProgress;
            self.emit(SessionEvent::Advanced);
            true
        } else {
            log::debug!("Quiz completed");
            self.state = QuizState::Complete;
            self.emit(SessionEvent::Completed);
            false
        }
    }

    /// Drop the active set and all progress.
    pub fn reset(&mut self) {
        self.set = None;
        self.position = 0;
        self.results.clear();
        self.state = QuizState::Idle;
        self.emit(SessionEvent::Reset);
    }

    pub fn state(&self) -> QuizState {
        self.state
    }

    pub fn current_set(&self) -> Option<&Arc<QuestionSet>> {
        self.set.as_ref()
    }

    /// The question being shown, if any. There is none when idle or
    /// complete.
    pub fn current_question(&self) -> Option<&Question> {
        match self.state {
            QuizState::InProgress | QuizState::Answered => {
                self.set.as_ref()?.question(self.position)
            }
            QuizState::Idle | QuizState::Complete => None,
        }
    }

    /// Zero-based index of the current question.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of questions in the active set.
    pub fn total(&self) -> usize {
        self.set.as_ref().map_or(0, |set| set.len())
    }

    /// "Question 2 / 10" while a set is active, empty otherwise. A set
    /// with no questions has no progress to show.
    pub fn progress_text(&self) -> String {
        match &self.set {
            Some(set) if !set.is_empty() => {
                format!("Question {} / {}", self.position + 1, set.len())
            }
            _ => String::new(),
        }
    }

    pub fn is_answered(&self) -> bool {
        self.state == QuizState::Answered
    }

    /// Whether the most recent answer in this session was correct.
    pub fn last_answer_correct(&self) -> bool {
        self.results.last().is_some_and(QuizResult::was_correct)
    }

    /// The answer chosen for the current question, once answered.
    pub fn selected_answer(&self) -> Option<&Answer> {
        if self.state != QuizState::Answered {
            return None;
        }
        self.results.last().map(QuizResult::selected_answer)
    }

    /// The result log, in answering order.
    pub fn results(&self) -> &[QuizResult] {
        &self.results
    }

    pub fn correct_count(&self) -> usize {
        self.results.iter().filter(|r| r.was_correct()).count()
    }

    pub fn total_count(&self) -> usize {
        self.results.len()
    }

    /// The wrongly answered questions, in answering order.
    pub fn errors(&self) -> Vec<&QuizResult> {
        self.results.iter().filter(|r| !r.was_correct()).collect()
    }

    pub fn score(&self) -> Score {
        Score::new(self.correct_count(), self.total_count())
    }

    fn emit(&mut self, event: SessionEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}
