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

use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

use crate::cmd::check::check_catalog_path;
use crate::cmd::list::list_sets;
use crate::cmd::quiz::OutputFormat;
use crate::cmd::quiz::run_quiz;
use crate::config::Config;
use crate::error::Fallible;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a config file. Defaults to `qcm.toml` in the working
    /// directory, if present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the question sets in a catalog.
    List {
        /// Path to a catalog file or directory.
        catalog: Option<PathBuf>,
    },
    /// Check a catalog for errors and degenerate questions.
    Check {
        /// Path to a catalog file or directory.
        catalog: Option<PathBuf>,
    },
    /// Take a quiz.
    Quiz {
        /// Path to a catalog file or directory.
        catalog: Option<PathBuf>,
        /// Name of the question set to run.
        #[arg(long)]
        set: String,
        /// How to print the results.
        #[arg(long, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    match cli.command {
        Command::List { catalog } => {
            let catalog = config.catalog_path(catalog);
            list_sets(&catalog).await
        }
        Command::Check { catalog } => {
            let catalog = config.catalog_path(catalog);
            check_catalog_path(&catalog).await
        }
        Command::Quiz {
            catalog,
            set,
            format,
        } => {
            let catalog = config.catalog_path(catalog);
            run_quiz(&catalog, &set, format).await
        }
    }
}
