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

mod column;

pub use column::*;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::bail;
use crate::error::Result;
use crate::util::sort_util::ColumnOrder;

pub const ROW_ID_COLUMN_NAME: &str = "_row_id";

#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TableId {
    pub table_id: u32,
}

impl TableId {
    pub const fn new(table_id: u32) -> Self {
        TableId { table_id }
    }

    pub fn table_id(&self) -> u32 {
        self.table_id
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.table_id)
    }
}

/// An index on a table. `columns` refer to positions in [`TableDesc::columns`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexDesc {
    pub name: String,
    pub columns: Vec<ColumnOrder>,
    /// Whether no two rows share the same non-null index key.
    pub unique: bool,
}

impl IndexDesc {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnOrder>, unique: bool) -> Self {
        Self {
            name: name.into(),
            columns,
            unique,
        }
    }

    pub fn column_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.columns.iter().map(|c| c.column_index)
    }
}

/// The description of a table, as consumed by property derivation of a scan.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDesc {
    pub table_id: TableId,
    pub name: String,
    pub columns: Vec<ColumnDesc>,
    /// The primary key. Every table has one; tables created without it get a hidden row id.
    pub pk: Vec<ColumnOrder>,
    /// Secondary indexes.
    #[serde(default)]
    pub indexes: Vec<IndexDesc>,
}

impl TableDesc {
    /// Validates that all column references of the primary key and the indexes are in range
    /// and that column names are unique.
    pub fn validate(&self) -> Result<()> {
        if let Some(dup) = self.columns.iter().map(|c| &c.name).duplicates().next() {
            bail!("duplicated column name {} in table {}", dup, self.name);
        }
        if self.pk.is_empty() {
            bail!("table {} has no primary key", self.name);
        }
        let column_cnt = self.columns.len();
        let out_of_range = self
            .pk
            .iter()
            .chain(self.indexes.iter().flat_map(|idx| idx.columns.iter()))
            .find(|order| order.column_index >= column_cnt);
        if let Some(order) = out_of_range {
            bail!(
                "column index {} out of range in table {} with {} columns",
                order.column_index,
                self.name,
                column_cnt
            );
        }
        if let Some(idx) = self.indexes.iter().find(|idx| idx.columns.is_empty()) {
            bail!("index {} on table {} has no columns", idx.name, self.name);
        }
        Ok(())
    }

    pub fn column_index_by_name(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// The primary index followed by the secondary indexes.
    pub fn all_indexes(&self) -> impl Iterator<Item = (&[ColumnOrder], bool)> + '_ {
        std::iter::once((self.pk.as_slice(), true))
            .chain(self.indexes.iter().map(|idx| (idx.columns.as_slice(), idx.unique)))
    }
}
