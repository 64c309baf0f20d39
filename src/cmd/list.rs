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

use crate::catalog::CatalogStore;
use crate::error::Fallible;
use crate::provider::PathProvider;

pub async fn list_sets(catalog: &Path) -> Fallible<()> {
    let mut store = CatalogStore::new();
    store.load(&PathProvider::for_path(catalog)).await;
    if store.is_empty() {
        println!("No question sets found.");
        return Ok(());
    }
    for set in store.sets() {
        println!("{} ({} questions)", set.name(), set.len());
        if !set.description().is_empty() {
            println!("    {}", set.description());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;

    #[tokio::test]
    async fn test_list_sets() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("qcm.json");
        write(&path, r#"{ "sets": [ { "name": "A", "description": "first" } ] }"#)?;
        list_sets(&path).await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_list_unreadable_catalog_is_empty() -> Fallible<()> {
        list_sets(Path::new("./derpherp.json")).await?;
        Ok(())
    }
}
