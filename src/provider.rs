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

use std::future::Future;
use std::path::Path;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::error::Fallible;
use crate::error::fail;
use crate::parser::parse_catalog;
use crate::types::question_set::QuestionSet;

/// A source of question sets.
pub trait SetProvider {
    fn load_sets(&self) -> impl Future<Output = Fallible<Vec<QuestionSet>>> + Send;
}

/// Reads a single JSON catalog file.
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SetProvider for FileProvider {
    async fn load_sets(&self) -> Fallible<Vec<QuestionSet>> {
        log::debug!("Reading catalog file {:?}", self.path);
        let content = tokio::fs::read_to_string(&self.path).await?;
        parse_catalog(&content)
    }
}

/// Reads every `.json` file under a directory, in path order, and
/// concatenates their sets. One malformed file fails the whole load.
pub struct DirectoryProvider {
    directory: PathBuf,
}

impl DirectoryProvider {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }
}

impl SetProvider for DirectoryProvider {
    async fn load_sets(&self) -> Fallible<Vec<QuestionSet>> {
        if !self.directory.is_dir() {
            return fail("directory does not exist.");
        }
        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in WalkDir::new(&self.directory).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path.to_path_buf());
            }
        }
        let mut sets = Vec::new();
        for path in paths {
            log::debug!("Reading catalog file {path:?}");
            let content = tokio::fs::read_to_string(&path).await?;
            sets.extend(parse_catalog(&content)?);
        }
        Ok(sets)
    }
}

/// Serves a fixed collection of sets.
#[derive(Default)]
pub struct MemoryProvider {
    sets: Vec<QuestionSet>,
}

impl MemoryProvider {
    pub fn new(sets: Vec<QuestionSet>) -> Self {
        Self { sets }
    }
}

impl SetProvider for MemoryProvider {
    async fn load_sets(&self) -> Fallible<Vec<QuestionSet>> {
        Ok(self.sets.clone())
    }
}

/// Pick a provider for a catalog path: directories are walked, anything else
/// is read as a single file.
pub enum PathProvider {
    File(FileProvider),
    Directory(DirectoryProvider),
}

impl PathProvider {
    pub fn for_path(path: &Path) -> Self {
        if path.is_dir() {
            PathProvider::Directory(DirectoryProvider::new(path))
        } else {
            PathProvider::File(FileProvider::new(path))
        }
    }
}

impl SetProvider for PathProvider {
    async fn load_sets(&self) -> Fallible<Vec<QuestionSet>> {
        match self {
            PathProvider::File(p) => p.load_sets().await,
            PathProvider::Directory(p) => p.load_sets().await,
        }
    }
}
