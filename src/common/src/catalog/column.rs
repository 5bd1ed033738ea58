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

use serde::{Deserialize, Serialize};

/// Column ID is the unique identifier of a column within one query. It is assigned when a
/// relation is bound, so two scans of the same table produce different column IDs.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColumnId(u32);

impl std::fmt::Debug for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl ColumnId {
    pub const fn new(column_id: u32) -> Self {
        Self(column_id)
    }

    pub const fn get_id(&self) -> u32 {
        self.0
    }

    /// Returns the subsequent column id.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Position of this column in a bitmap.
    pub const fn as_index(&self) -> usize {
        self.0 as usize
    }

    pub fn from_index(index: usize) -> Self {
        Self(u32::try_from(index).expect("column index overflows u32"))
    }
}

impl From<u32> for ColumnId {
    fn from(column_id: u32) -> Self {
        Self::new(column_id)
    }
}

impl From<ColumnId> for u32 {
    fn from(id: ColumnId) -> u32 {
        id.0
    }
}

impl std::fmt::Display for ColumnId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Descriptor of a table column. Only the facts that matter to property derivation are kept.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnDesc {
    pub name: String,
    pub nullable: bool,
    /// Hidden columns (e.g. the generated row id) are not part of `SELECT *`.
    #[serde(default)]
    pub is_hidden: bool,
}

impl ColumnDesc {
    pub fn new(name: impl Into<String>, nullable: bool) -> Self {
        Self {
            name: name.into(),
            nullable,
            is_hidden: false,
        }
    }

    pub fn nullable(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    pub fn not_null(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.is_hidden = true;
        self
    }
}
