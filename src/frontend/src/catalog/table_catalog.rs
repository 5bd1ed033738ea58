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

use planprop_common::catalog::{ColumnDesc, IndexDesc, TableDesc, TableId};
use planprop_common::error::Result;
use planprop_common::util::sort_util::ColumnOrder;

/// A validated table as seen by the optimizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableCatalog {
    desc: TableDesc,
}

impl TableCatalog {
    pub fn new(desc: TableDesc) -> Result<Self> {
        desc.validate()?;
        Ok(Self { desc })
    }

    pub fn id(&self) -> TableId {
        self.desc.table_id
    }

    pub fn name(&self) -> &str {
        &self.desc.name
    }

    pub fn columns(&self) -> &[ColumnDesc] {
        &self.desc.columns
    }

    pub fn pk(&self) -> &[ColumnOrder] {
        &self.desc.pk
    }

    pub fn indexes(&self) -> &[IndexDesc] {
        &self.desc.indexes
    }

    pub fn table_desc(&self) -> &TableDesc {
        &self.desc
    }

    /// Positions of the columns returned by `SELECT *`.
    pub fn visible_column_indices(&self) -> Vec<usize> {
        self.desc
            .columns
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_hidden)
            .map(|(i, _)| i)
            .collect()
    }
}
