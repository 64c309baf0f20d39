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

use std::path::Path;

use crate::check::check_catalog;
use crate::error::Fallible;
use crate::error::fail;
use crate::provider::PathProvider;
use crate::provider::SetProvider;

/// Load a catalog and report degenerate data. Unlike the catalog store, this
/// surfaces load errors: finding them is the point.
pub async fn check_catalog_path(catalog: &Path) -> Fallible<()> {
    if !catalog.exists() {
        return fail("catalog does not exist.");
    }
    let sets = PathProvider::for_path(catalog).load_sets().await?;
    let issues = check_catalog(&sets);
    for issue in &issues {
        println!("warning: {issue}");
    }
    println!("ok");
    Ok(())
}
