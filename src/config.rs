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

use std::fs::read_to_string;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::Fallible;
use crate::error::fail;

/// Name of the config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "qcm.toml";

/// Catalog used when neither the config nor the command line names one.
pub const DEFAULT_CATALOG: &str = "qcm.json";

#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// A JSON catalog file, or a directory of them.
    pub path: PathBuf,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_CATALOG),
        }
    }
}

impl Config {
    pub fn parse(content: &str) -> Fallible<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load the config from `path` if given, else from `qcm.toml` in the
    /// working directory if it exists, else use the defaults.
    pub fn load(path: Option<&Path>) -> Fallible<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return fail("config file does not exist.");
                }
                Self::from_file(path)
            }
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::from_file(path)
                } else {
                    log::debug!("No config file, using defaults.");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Relative catalog paths are taken relative to the config file.
    fn from_file(path: &Path) -> Fallible<Self> {
        log::debug!("Reading config from {path:?}");
        let content = read_to_string(path)?;
        let mut config = Self::parse(&content)?;
        if config.catalog.path.is_relative() {
            if let Some(parent) = path.parent() {
                config.catalog.path = parent.join(&config.catalog.path);
            }
        }
        Ok(config)
    }

    /// The catalog to load: the command-line override if any, else the
    /// configured one.
    pub fn catalog_path(&self, cli: Option<PathBuf>) -> PathBuf {
        cli.unwrap_or_else(|| self.catalog.path.clone())
    }
}
