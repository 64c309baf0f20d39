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

//! qcm: a multiple-choice quiz engine.
//!
//! - A catalog store that loads question sets from a provider.
//! - A quiz session state machine that records each answer.
//! - Score and mistake review derived from a session.

pub mod catalog;
pub mod check;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod parser;
pub mod provider;
pub mod review;
pub mod session;
pub mod types;

pub use catalog::CatalogStore;
pub use error::{ErrorReport, Fallible, fail};
pub use provider::{DirectoryProvider, FileProvider, MemoryProvider, SetProvider};
pub use review::{Mistake, Score, ScoreBand, Summary};
pub use session::{QuizSession, QuizState, SessionEvent};
pub use types::answer::Answer;
pub use types::question::Question;
pub use types::question_set::QuestionSet;
pub use types::quiz_result::QuizResult;
