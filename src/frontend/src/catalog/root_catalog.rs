// Copyright 2025 RisingWave Labs
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

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::rc::Rc;

use planprop_common::catalog::{TableDesc, TableId};
use planprop_common::error::Result;
use tracing::debug;

use super::{CatalogError, CatalogResult, TableCatalog};

/// Root catalog of one optimization pass, keyed by table name.
#[derive(Debug, Default)]
pub struct Catalog {
    table_by_name: HashMap<String, Rc<TableCatalog>>,
    next_table_id: u32,
}

impl Catalog {
    /// Registers a table. The table id in `desc` is replaced by a fresh one.
    pub fn create_table(&mut self, mut desc: TableDesc) -> Result<Rc<TableCatalog>> {
        desc.table_id = TableId::new(self.next_table_id);
        let table = Rc::new(TableCatalog::new(desc)?);
        match self.table_by_name.entry(table.name().to_owned()) {
            Entry::Occupied(e) => Err(CatalogError::Duplicated("table", e.key().clone()).into()),
            Entry::Vacant(e) => {
                debug!(table = table.name(), id = %table.id(), "create table");
                self.next_table_id += 1;
                e.insert(table.clone());
                Ok(table)
            }
        }
    }

    pub fn get_table_by_name(&self, table_name: &str) -> CatalogResult<&Rc<TableCatalog>> {
        self.table_by_name
            .get(table_name)
            .ok_or_else(|| CatalogError::NotFound("table", table_name.to_owned()))
    }

    pub fn drop_table(&mut self, table_name: &str) -> CatalogResult<Rc<TableCatalog>> {
        self.table_by_name
            .remove(table_name)
            .ok_or_else(|| CatalogError::NotFound("table", table_name.to_owned()))
    }
}
