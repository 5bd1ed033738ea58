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

use itertools::Itertools;
use planprop_common::catalog::ColumnId;

use crate::optimizer::property::{ColumnSet, FunctionalDependencySet};

/// A predicate over column ids. Only the shapes that property derivation can learn from are
/// spelled out; everything else is [`Predicate::Opaque`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Predicate {
    /// `a = b`
    Eq(ColumnId, ColumnId),
    /// `a = <literal>`
    EqConst(ColumnId, i64),
    /// `a IS NOT NULL`
    IsNotNull(ColumnId),
    /// Any other predicate over `cols`. A null-rejecting predicate is never true when one of
    /// `cols` is NULL.
    Opaque {
        name: String,
        cols: ColumnSet,
        null_rejecting: bool,
    },
}

impl Predicate {
    pub fn input_cols(&self) -> ColumnSet {
        match self {
            Predicate::Eq(a, b) => ColumnSet::singleton(*a).with(*b),
            Predicate::EqConst(a, _) | Predicate::IsNotNull(a) => ColumnSet::singleton(*a),
            Predicate::Opaque { cols, .. } => cols.clone(),
        }
    }

    pub fn as_eq_cond(&self) -> Option<(ColumnId, ColumnId)> {
        match self {
            Predicate::Eq(a, b) => Some((*a, *b)),
            _ => None,
        }
    }

    pub fn as_eq_const(&self) -> Option<(ColumnId, i64)> {
        match self {
            Predicate::EqConst(a, v) => Some((*a, *v)),
            _ => None,
        }
    }

    /// Columns that cannot be NULL in rows for which the predicate holds.
    pub fn not_null_cols(&self) -> ColumnSet {
        match self {
            Predicate::Opaque {
                null_rejecting: false,
                ..
            } => ColumnSet::new(),
            _ => self.input_cols(),
        }
    }
}

/// A conjunction of predicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Condition {
    pub conjunctions: Vec<Predicate>,
}

impl Condition {
    pub fn true_cond() -> Self {
        Self::default()
    }

    pub fn with_conjunctions(conjunctions: Vec<Predicate>) -> Self {
        Self { conjunctions }
    }

    pub fn always_true(&self) -> bool {
        self.conjunctions.is_empty()
    }

    #[must_use]
    pub fn and(mut self, other: Self) -> Self {
        self.conjunctions.extend(other.conjunctions);
        self
    }

    pub fn input_cols(&self) -> ColumnSet {
        let mut cols = ColumnSet::new();
        for conj in &self.conjunctions {
            cols.union_with(&conj.input_cols());
        }
        cols
    }

    /// Equalities between a column of `left` and a column of `right`, as `(left, right)` pairs.
    pub fn eq_pairs(&self, left: &ColumnSet, right: &ColumnSet) -> Vec<(ColumnId, ColumnId)> {
        self.conjunctions
            .iter()
            .filter_map(Predicate::as_eq_cond)
            .filter_map(|(a, b)| {
                if left.contains(a) && right.contains(b) {
                    Some((a, b))
                } else if left.contains(b) && right.contains(a) {
                    Some((b, a))
                } else {
                    None
                }
            })
            .collect_vec()
    }

    /// Records in `fd` what is known about the rows that pass the condition: equalities,
    /// constants and not-null columns. With `promote`, lax facts that become strict are promoted.
    pub fn apply_to(&self, fd: &mut FunctionalDependencySet, promote: bool) {
        let mut not_null = ColumnSet::new();
        for conj in &self.conjunctions {
            if let Some((a, b)) = conj.as_eq_cond() {
                fd.add_equivalence(a, b);
            } else if let Some((a, _)) = conj.as_eq_const() {
                fd.add_strict(&ColumnSet::new(), &ColumnSet::singleton(a));
            }
            not_null.union_with(&conj.not_null_cols());
        }
        if promote {
            fd.add_not_null(&not_null);
        } else {
            fd.mark_not_null(&not_null);
        }
    }

    fn fmt_with(&self, f: &mut fmt::Formatter<'_>, names: &[String]) -> fmt::Result {
        let name = |col: &ColumnId| {
            names
                .get(col.as_index())
                .cloned()
                .unwrap_or_else(|| col.to_string())
        };
        if self.always_true() {
            return f.write_str("true");
        }
        for (i, conj) in self.conjunctions.iter().enumerate() {
            if i > 0 {
                f.write_str(" AND ")?;
            }
            match conj {
                Predicate::Eq(a, b) => write!(f, "{} = {}", name(a), name(b))?,
                Predicate::EqConst(a, v) => write!(f, "{} = {}", name(a), v)?,
                Predicate::IsNotNull(a) => write!(f, "{} IS NOT NULL", name(a))?,
                Predicate::Opaque { name: func, cols, .. } => {
                    write!(f, "{}({})", func, cols.iter().map(|c| name(&c)).join(", "))?
                }
            }
        }
        Ok(())
    }
}

pub struct ConditionDisplay<'a> {
    pub condition: &'a Condition,
    pub names: &'a [String],
}

impl fmt::Display for ConditionDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.condition.fmt_with(f, self.names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(id: u32) -> ColumnId {
        ColumnId::new(id)
    }

    #[test]
    fn test_eq_pairs() {
        let cond = Condition::with_conjunctions(vec![
            Predicate::Eq(col(3), col(0)),
            Predicate::Eq(col(0), col(1)),
            Predicate::EqConst(col(2), 7),
        ]);
        let left = [col(0), col(1)].into_iter().collect();
        let right = [col(2), col(3)].into_iter().collect();
        assert_eq!(cond.eq_pairs(&left, &right), vec![(col(0), col(3))]);
        assert_eq!(cond.input_cols(), (0..4).map(col).collect::<ColumnSet>());
    }

    #[test]
    fn test_apply_to() {
        let mut fd = FunctionalDependencySet::new((0..4).map(col).collect());
        fd.add_lax(&ColumnSet::singleton(col(0)), &ColumnSet::singleton(col(3)));
        let cond = Condition::with_conjunctions(vec![
            Predicate::Eq(col(0), col(1)),
            Predicate::EqConst(col(2), 7),
            Predicate::Opaque {
                name: "f".to_owned(),
                cols: ColumnSet::singleton(col(3)),
                null_rejecting: false,
            },
        ]);
        cond.apply_to(&mut fd, true);
        assert!(fd.is_equivalent(col(0), col(1)));
        assert_eq!(fd.constants(), &ColumnSet::singleton(col(2)));
        assert_eq!(fd.not_null_cols(), &(0..3).map(col).collect::<ColumnSet>());
        // 0 is proven not-null, so 0 ~~> 3 is promoted
        assert!(fd.is_determined_by(&ColumnSet::singleton(col(1)), &ColumnSet::singleton(col(3))));

        let names = ["a", "b", "c", "d"].map(String::from);
        let display = ConditionDisplay {
            condition: &cond,
            names: &names,
        };
        assert_eq!(display.to_string(), "a = b AND c = 7 AND f(d)");
    }
}
