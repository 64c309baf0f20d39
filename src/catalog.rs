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
use std::time::Instant;

use crate::provider::SetProvider;
use crate::types::question_set::QuestionSet;

/// Holds the question sets available for quizzing.
///
/// Sets are shared with sessions through `Arc`, so a reload never pulls a set
/// out from under a running session.
#[derive(Default)]
pub struct CatalogStore {
    sets: Vec<Arc<QuestionSet>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the collection with whatever the provider returns.
    ///
    /// Failures are logged and leave the store empty: callers always get a
    /// list to show, possibly an empty one.
    pub async fn load<P: SetProvider>(&mut self, provider: &P) {
        log::debug!("Loading catalog...");
        let start = Instant::now();
        match provider.load_sets().await {
            Ok(sets) => {
                self.sets = sets.into_iter().map(Arc::new).collect();
                let duration = start.elapsed().as_millis();
                log::debug!("Loaded {} sets in {duration}ms.", self.sets.len());
            }
            Err(e) => {
                log::error!("Failed to load catalog: {e}");
                self.sets = Vec::new();
            }
        }
    }

    pub fn sets(&self) -> &[Arc<QuestionSet>] {
        &self.sets
    }

    /// Find a set by exact name. If several sets share the name, the first
    /// one wins.
    pub fn find(&self, name: &str) -> Option<Arc<QuestionSet>> {
        self.sets.iter().find(|set| set.name() == name).cloned()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
