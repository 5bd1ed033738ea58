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

use std::fmt;
use std::hash::{Hash, Hasher};

use fixedbitset::FixedBitSet;
use itertools::Itertools;
use planprop_common::catalog::ColumnId;

/// A set of [`ColumnId`]s backed by a bitmap indexed by column id.
///
/// It has value semantics: every operation returns a new set or mutates only `self`. Equality and
/// hashing depend on the members only, not on the capacity of the bitmap.
#[derive(Clone, Default)]
pub struct ColumnSet {
    bits: FixedBitSet,
}

impl ColumnSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn singleton(col: ColumnId) -> Self {
        let mut set = Self::new();
        set.insert(col);
        set
    }

    pub fn insert(&mut self, col: ColumnId) {
        let idx = col.as_index();
        if idx >= self.bits.len() {
            self.bits.grow(idx + 1);
        }
        self.bits.insert(idx);
    }

    #[must_use]
    pub fn with(mut self, col: ColumnId) -> Self {
        self.insert(col);
        self
    }

    pub fn remove(&mut self, col: ColumnId) {
        let idx = col.as_index();
        if idx < self.bits.len() {
            self.bits.set(idx, false);
        }
    }

    pub fn contains(&self, col: ColumnId) -> bool {
        self.bits.contains(col.as_index())
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones(..)
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_clear()
    }

    pub fn union_with(&mut self, other: &ColumnSet) {
        self.bits.union_with(&other.bits);
    }

    pub fn intersect_with(&mut self, other: &ColumnSet) {
        self.bits.intersect_with(&other.bits);
    }

    pub fn difference_with(&mut self, other: &ColumnSet) {
        self.bits.difference_with(&other.bits);
    }

    #[must_use]
    pub fn union(&self, other: &ColumnSet) -> ColumnSet {
        let mut res = self.clone();
        res.union_with(other);
        res
    }

    #[must_use]
    pub fn intersect(&self, other: &ColumnSet) -> ColumnSet {
        let mut res = self.clone();
        res.intersect_with(other);
        res
    }

    #[must_use]
    pub fn difference(&self, other: &ColumnSet) -> ColumnSet {
        let mut res = self.clone();
        res.difference_with(other);
        res
    }

    pub fn is_subset(&self, other: &ColumnSet) -> bool {
        self.bits.is_subset(&other.bits)
    }

    pub fn is_superset(&self, other: &ColumnSet) -> bool {
        other.is_subset(self)
    }

    pub fn intersects(&self, other: &ColumnSet) -> bool {
        !self.bits.is_disjoint(&other.bits)
    }

    /// Iterates the members in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = ColumnId> + '_ {
        self.bits.ones().map(ColumnId::from_index)
    }

    /// The member with the smallest id.
    pub fn first(&self) -> Option<ColumnId> {
        self.iter().next()
    }

    /// Formats the set, printing names from `names` (indexed by column id) when given and
    /// compressing runs of consecutive ids otherwise.
    pub(crate) fn fmt_with(
        &self,
        f: &mut fmt::Formatter<'_>,
        names: Option<&[String]>,
    ) -> fmt::Result {
        f.write_str("(")?;
        if names.is_some() {
            for (i, col) in self.iter().enumerate() {
                if i > 0 {
                    f.write_str(",")?;
                }
                write_column(f, col, names)?;
            }
            return f.write_str(")");
        }
        let ids = self.iter().map(|c| c.get_id()).collect_vec();
        let mut i = 0;
        while i < ids.len() {
            let mut j = i;
            while j + 1 < ids.len() && ids[j + 1] == ids[j] + 1 {
                j += 1;
            }
            if i > 0 {
                f.write_str(",")?;
            }
            if j > i + 1 {
                write!(f, "{}-{}", ids[i], ids[j])?;
                i = j + 1;
            } else {
                write!(f, "{}", ids[i])?;
                i += 1;
            }
        }
        f.write_str(")")
    }
}

/// Writes the name of `col`, falling back to its id.
pub(crate) fn write_column(
    f: &mut fmt::Formatter<'_>,
    col: ColumnId,
    names: Option<&[String]>,
) -> fmt::Result {
    match names.and_then(|names| names.get(col.as_index())) {
        Some(name) => f.write_str(name),
        None => write!(f, "{}", col),
    }
}

/// Displays a [`ColumnSet`] with column names.
pub struct ColumnSetDisplay<'a> {
    pub cols: &'a ColumnSet,
    pub names: &'a [String],
}

impl fmt::Display for ColumnSetDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.cols.fmt_with(f, Some(self.names))
    }
}

impl PartialEq for ColumnSet {
    fn eq(&self, other: &Self) -> bool {
        self.bits.ones().eq(other.bits.ones())
    }
}

impl Eq for ColumnSet {}

impl Hash for ColumnSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for idx in self.bits.ones() {
            idx.hash(state);
        }
    }
}

impl FromIterator<ColumnId> for ColumnSet {
    fn from_iter<T: IntoIterator<Item = ColumnId>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<ColumnId> for ColumnSet {
    fn extend<T: IntoIterator<Item = ColumnId>>(&mut self, iter: T) {
        for col in iter {
            self.insert(col);
        }
    }
}

impl<'a> FromIterator<&'a ColumnId> for ColumnSet {
    fn from_iter<T: IntoIterator<Item = &'a ColumnId>>(iter: T) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl fmt::Display for ColumnSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, None)
    }
}

impl fmt::Debug for ColumnSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
