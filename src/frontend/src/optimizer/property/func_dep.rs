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
use tracing::trace;

use super::column_set::write_column;
use super::ColumnSet;

/// [`FunctionalDependency`] represents a dependency of `from --> to` (strict) or `from ~~> to`
/// (lax).
///
/// A strict dependency uses the **NULL=** semantic: all NULLs are considered as equal, so it holds
/// for every row. For the following table, A --> B is **NOT** allowed, while A ~~> B is.
/// ```text
///   A   | B
/// ------|---
///  NULL | 1
///  NULL | 2
/// ```
/// A lax dependency only holds among the rows whose `from` columns are all non-null.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct FunctionalDependency {
    pub from: ColumnSet,
    pub to: ColumnSet,
    pub strict: bool,
}

impl FunctionalDependency {
    fn arrow(&self) -> &'static str {
        if self.strict {
            "-->"
        } else {
            "~~>"
        }
    }

    /// Whether this dependency makes `other` redundant.
    fn implies(&self, other: &FunctionalDependency) -> bool {
        (self.strict || !other.strict)
            && self.from.is_subset(&other.from)
            && other.to.is_subset(&self.to.union(&other.from))
    }
}

impl fmt::Display for FunctionalDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.from, self.arrow(), self.to)
    }
}

/// A candidate key of a relation.
///
/// A strict key has no duplicates at all. A lax key only rules out duplicates among the rows whose
/// key columns are all non-null.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    pub cols: ColumnSet,
    pub strict: bool,
}

/// Union-find over column ids. `parent` and `rank` are indexed by column id; the members of a
/// class are kept at its root, and singleton classes are not stored.
#[derive(Debug, Clone, Default)]
struct EquivClasses {
    parent: Vec<usize>,
    rank: Vec<u8>,
    members: Vec<ColumnSet>,
}

impl EquivClasses {
    fn from_classes(classes: impl IntoIterator<Item = ColumnSet>) -> Self {
        let mut res = Self::default();
        for class in classes {
            let mut cols = class.iter();
            if let Some(first) = cols.next() {
                for col in cols {
                    res.union(first, col);
                }
            }
        }
        res
    }

    fn find(&self, mut idx: usize) -> usize {
        if idx >= self.parent.len() {
            return idx;
        }
        while self.parent[idx] != idx {
            idx = self.parent[idx];
        }
        idx
    }

    fn grow(&mut self, idx: usize) {
        while self.parent.len() <= idx {
            self.parent.push(self.parent.len());
            self.rank.push(0);
            self.members.push(ColumnSet::new());
        }
    }

    fn class_of(&self, col: ColumnId) -> ColumnSet {
        match self.members.get(self.find(col.as_index())) {
            Some(members) if !members.is_empty() => members.clone(),
            _ => ColumnSet::singleton(col),
        }
    }

    fn is_equivalent(&self, a: ColumnId, b: ColumnId) -> bool {
        self.find(a.as_index()) == self.find(b.as_index())
    }

    /// Merges the classes of `a` and `b`. Returns `false` if they were already merged.
    fn union(&mut self, a: ColumnId, b: ColumnId) -> bool {
        let (ra, rb) = (self.find(a.as_index()), self.find(b.as_index()));
        if ra == rb {
            return false;
        }
        self.grow(ra.max(rb));
        let merged = self.class_of(a).union(&self.class_of(b));
        let (root, child) = if self.rank[ra] >= self.rank[rb] {
            (ra, rb)
        } else {
            (rb, ra)
        };
        if self.rank[ra] == self.rank[rb] {
            self.rank[root] += 1;
        }
        self.parent[child] = root;
        self.members[child] = ColumnSet::new();
        self.members[root] = merged;
        true
    }

    fn classes(&self) -> impl Iterator<Item = &ColumnSet> + '_ {
        self.members.iter().filter(|m| !m.is_empty())
    }

    /// Adds every column equivalent to a member of `cols`.
    fn expand(&self, cols: &ColumnSet) -> ColumnSet {
        let mut res = cols.clone();
        for class in self.classes() {
            if class.intersects(cols) {
                res.union_with(class);
            }
        }
        res
    }

    fn sorted_classes(&self) -> Vec<&ColumnSet> {
        self.classes().sorted_by_key(|c| c.first()).collect()
    }
}

impl PartialEq for EquivClasses {
    fn eq(&self, other: &Self) -> bool {
        self.sorted_classes() == other.sorted_classes()
    }
}

/// [`FunctionalDependencySet`] contains the functional dependencies of a relation, together with
/// the equalities, constants, not-null columns and the key that were proven for it.
///
/// It is used in optimizer to track the dependencies between columns. The set only talks about
/// the columns given at construction (plus those added by [`Self::add_columns`]); referencing any
/// other column is a bug and panics.
///
/// No stored dependency is implied by another one: redundant dependencies are removed when a new
/// one is added, and dependencies with the same determinant and strictness are merged.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FunctionalDependencySet {
    cols: ColumnSet,
    deps: Vec<FunctionalDependency>,
    equiv: EquivClasses,
    /// Columns with a single value across the whole relation, i.e. `() --> cols`.
    constants: ColumnSet,
    /// Columns whose non-null values are all the same, i.e. `() ~~> cols`.
    lax_constants: ColumnSet,
    not_null: ColumnSet,
    key: Option<Key>,
}

impl FunctionalDependencySet {
    /// Create an empty [`FunctionalDependencySet`] over `cols`.
    pub fn new(cols: ColumnSet) -> Self {
        Self {
            cols,
            ..Default::default()
        }
    }

    pub fn cols(&self) -> &ColumnSet {
        &self.cols
    }

    pub fn dependencies(&self) -> &[FunctionalDependency] {
        &self.deps
    }

    pub fn constants(&self) -> &ColumnSet {
        &self.constants
    }

    pub fn lax_constants(&self) -> &ColumnSet {
        &self.lax_constants
    }

    pub fn not_null_cols(&self) -> &ColumnSet {
        &self.not_null
    }

    pub fn key(&self) -> Option<&Key> {
        self.key.as_ref()
    }

    pub fn has_strict_key(&self) -> bool {
        matches!(self.key, Some(Key { strict: true, .. }))
    }

    /// All columns known to be equal to `col`, `col` included.
    pub fn equiv_class(&self, col: ColumnId) -> ColumnSet {
        self.equiv.class_of(col)
    }

    pub fn is_equivalent(&self, a: ColumnId, b: ColumnId) -> bool {
        a == b || self.equiv.is_equivalent(a, b)
    }

    fn check_visible(&self, cols: &ColumnSet) {
        assert!(
            cols.is_subset(&self.cols),
            "dangling column reference: {} is not a subset of {}",
            cols,
            self.cols
        );
    }

    /// Extends the set with new columns, e.g. aggregate outputs. Nothing is known about them yet.
    pub fn add_columns(&mut self, cols: &ColumnSet) {
        assert!(
            !cols.intersects(&self.cols),
            "columns {} already exist in {}",
            cols,
            self.cols
        );
        self.cols.union_with(cols);
    }

    /// Add a strict dependency `from --> to`. An empty `from` makes `to` constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use planprop_common::catalog::ColumnId;
    /// # use planprop_frontend::optimizer::property::{ColumnSet, FunctionalDependencySet};
    /// let cols = |ids: &[u32]| ids.iter().map(|&i| ColumnId::new(i)).collect::<ColumnSet>();
    /// let mut fd = FunctionalDependencySet::new(cols(&[0, 1, 2, 3]));
    /// fd.add_strict(&cols(&[0]), &cols(&[1])); // 0 --> 1
    /// fd.add_strict(&cols(&[1]), &cols(&[2])); // 1 --> 2
    /// fd.add_strict(&cols(&[0]), &cols(&[2])); // implied, not stored
    /// assert_eq!(fd.dependencies().len(), 2);
    /// assert_eq!(fd.closure(&cols(&[0])), cols(&[0, 1, 2]));
    /// ```
    pub fn add_strict(&mut self, from: &ColumnSet, to: &ColumnSet) {
        self.check_visible(from);
        self.check_visible(to);
        if from.is_empty() {
            self.add_constants(to);
            return;
        }
        let to = to.difference(&self.closure(from));
        if to.is_empty() {
            trace!(%from, "strict dependency already implied");
            return;
        }
        self.add_dependency(FunctionalDependency {
            from: from.clone(),
            to,
            strict: true,
        });
    }

    /// Add a lax dependency `from ~~> to`. If `from` is proven not-null, the dependency is stored
    /// as a strict one.
    pub fn add_lax(&mut self, from: &ColumnSet, to: &ColumnSet) {
        self.check_visible(from);
        self.check_visible(to);
        if from.is_subset(&self.not_null) {
            self.add_strict(from, to);
            return;
        }
        let to = to.difference(&self.closure(from));
        let new = FunctionalDependency {
            from: from.clone(),
            to,
            strict: false,
        };
        if new.to.is_empty() || self.deps.iter().any(|d| d.implies(&new)) {
            trace!(%from, "lax dependency already implied");
            return;
        }
        self.add_dependency(new);
    }

    fn add_dependency(&mut self, new: FunctionalDependency) {
        for dep in &mut self.deps {
            if (new.strict || !dep.strict) && new.from.is_subset(&dep.from) {
                dep.to.difference_with(&new.to);
            }
        }
        self.deps.retain(|d| !d.to.is_empty());
        match self
            .deps
            .iter_mut()
            .find(|d| d.from == new.from && d.strict == new.strict)
        {
            Some(dep) => dep.to.union_with(&new.to),
            None => self.deps.push(new),
        }
    }

    /// Makes `cols` (and everything equal to them) constant, then folds the constants out of the
    /// stored dependencies.
    fn add_constants(&mut self, cols: &ColumnSet) {
        self.constants.union_with(&self.equiv.expand(cols));
        loop {
            let before = self.constants.len();
            for mut dep in std::mem::take(&mut self.deps) {
                dep.to.difference_with(&self.constants);
                if dep.strict {
                    dep.from.difference_with(&self.constants);
                }
                if dep.to.is_empty() {
                    continue;
                }
                if dep.from.is_empty() {
                    let cols = self.equiv.expand(&dep.to);
                    self.constants.union_with(&cols);
                } else {
                    self.add_dependency(dep);
                }
            }
            if self.constants.len() == before {
                break;
            }
        }
        self.lax_constants.difference_with(&self.constants);
    }

    /// Records that `a` and `b` are always equal.
    pub fn add_equivalence(&mut self, a: ColumnId, b: ColumnId) {
        self.check_visible(&ColumnSet::singleton(a).with(b));
        if !self.equiv.union(a, b) {
            return;
        }
        if self.constants.contains(a) || self.constants.contains(b) {
            let class = self.equiv.class_of(a);
            self.add_constants(&class);
        }
        if self.not_null.contains(a) || self.not_null.contains(b) {
            let class = self.equiv.class_of(a);
            self.not_null.union_with(&class);
        }
        // The new equality may imply stored dependencies.
        for dep in std::mem::take(&mut self.deps) {
            self.reinsert(dep);
        }
    }

    fn reinsert(&mut self, mut dep: FunctionalDependency) {
        dep.to.difference_with(&self.closure(&dep.from));
        if dep.to.is_empty() || self.deps.iter().any(|d| d.implies(&dep)) {
            trace!(%dep, "drop implied dependency");
            return;
        }
        self.add_dependency(dep);
    }

    /// Records that `cols` never contain NULL, and promotes the lax dependencies, lax constants
    /// and lax key that become strict because of it.
    pub fn add_not_null(&mut self, cols: &ColumnSet) {
        self.mark_not_null(cols);
        self.promote_lax();
    }

    /// Records that `cols` never contain NULL without promoting anything.
    pub fn mark_not_null(&mut self, cols: &ColumnSet) {
        self.check_visible(cols);
        let cols = self.equiv.expand(cols);
        self.not_null.union_with(&cols);
    }

    fn promote_lax(&mut self) {
        let (promoted, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.deps)
            .into_iter()
            .partition(|d| !d.strict && d.from.is_subset(&self.not_null));
        self.deps = kept;
        for dep in promoted {
            trace!(%dep, "promote lax dependency");
            self.add_strict(&dep.from, &dep.to);
        }
        let constants = self.lax_constants.intersect(&self.not_null);
        if !constants.is_empty() {
            self.add_constants(&constants);
        }
        if let Some(key) = &mut self.key {
            if !key.strict && key.cols.is_subset(&self.not_null) {
                trace!(key = %key.cols, "promote lax key");
                key.strict = true;
            }
        }
    }

    /// Sets the key of the relation and records that it determines all columns.
    ///
    /// A lax key whose columns are proven not-null is stored as a strict one.
    pub fn set_key(&mut self, key: &ColumnSet, strict: bool) {
        self.check_visible(key);
        let strict = strict || key.is_subset(&self.not_null);
        let rest = self.cols.difference(key);
        if strict {
            self.add_strict(key, &rest);
        } else {
            self.add_lax(key, &rest);
        }
        self.key = Some(Key {
            cols: key.clone(),
            strict,
        });
    }

    /// Strips the current key down after new equalities, constants or not-null columns were
    /// added.
    pub fn reduce_current_key(&mut self) {
        let Some(key) = self.key.take() else {
            return;
        };
        self.set_key(&key.cols, key.strict);
        let strict = self.has_strict_key();
        let cols = if strict {
            self.reduce_key(&key.cols)
        } else {
            self.reduce_cols(&key.cols)
        };
        // A reduced lax key may now be fully not-null.
        self.set_key(&cols, strict);
    }

    /// The columns functionally determined by `cols` through strict dependencies, equalities and
    /// constants.
    pub fn closure(&self, cols: &ColumnSet) -> ColumnSet {
        let mut closure = self.equiv.expand(&cols.union(&self.constants));
        // Each round either grows `closure` or stops.
        while !self.cols.is_subset(&closure) {
            let mut changed = false;
            for dep in self.deps.iter().filter(|d| d.strict) {
                if dep.from.is_subset(&closure) && !dep.to.is_subset(&closure) {
                    closure.union_with(&dep.to);
                    changed = true;
                }
            }
            if !changed {
                break;
            }
            closure = self.equiv.expand(&closure);
        }
        closure
    }

    /// Like [`Self::closure`], but each lax dependency is applied once as well, if its
    /// determinant is strictly determined by `cols` and non-null wherever `cols` are.
    ///
    /// Lax dependencies do not chain: the dependents of one may be NULL, so they never serve as
    /// the determinant of another.
    pub fn lax_closure(&self, cols: &ColumnSet) -> ColumnSet {
        let strict = self.closure(cols);
        let mut closure = strict.clone();
        for dep in self.lax_applicable(&strict, &self.non_null_with(cols)) {
            closure.union_with(&dep.to);
        }
        self.closure(&closure)
    }

    /// Columns that are non-null in every row where all of `cols` are.
    fn non_null_with(&self, cols: &ColumnSet) -> ColumnSet {
        self.equiv.expand(cols).union(&self.not_null)
    }

    fn lax_applicable<'a>(
        &'a self,
        strict: &'a ColumnSet,
        non_null: &'a ColumnSet,
    ) -> impl Iterator<Item = &'a FunctionalDependency> + 'a {
        self.deps.iter().filter(move |d| {
            !d.strict && d.from.is_subset(strict) && d.from.is_subset(non_null)
        })
    }

    /// Return `true` if the dependency `determinant --> dependant` holds.
    pub fn is_determined_by(&self, determinant: &ColumnSet, dependant: &ColumnSet) -> bool {
        self.closure(determinant).is_superset(dependant)
    }

    /// Return `true` if no two rows share the same values of `cols`.
    pub fn is_strict_key(&self, cols: &ColumnSet) -> bool {
        self.has_strict_key() && self.closure(cols).is_superset(&self.cols)
    }

    /// Return `true` if no two rows with non-null `cols` share the same values of `cols`.
    ///
    /// `cols` must determine all columns. Rows that agree on them are then unique if the key is
    /// strict, if the key columns are non-null wherever `cols` are, or if `cols` reach the
    /// determinant of a lax dependency onto all columns, which is how a nullable unique column
    /// is recorded.
    pub fn is_lax_key(&self, cols: &ColumnSet) -> bool {
        let Some(key) = &self.key else {
            return false;
        };
        if !self.lax_closure(cols).is_superset(&self.cols) {
            return false;
        }
        let non_null = self.non_null_with(cols);
        if key.strict || key.cols.is_subset(&non_null) {
            return true;
        }
        let strict = self.closure(cols);
        let mut lax_deps = self.lax_applicable(&strict, &non_null);
        lax_deps.any(|d| self.closure(&d.from.union(&d.to)).is_superset(&self.cols))
    }

    /// Remove redundant columns from a strict key.
    ///
    /// Columns are visited in ascending id order; a column is removed if the remaining ones still
    /// form a strict key. The result has no proper subset that is a strict key.
    pub fn reduce_key(&self, key: &ColumnSet) -> ColumnSet {
        let mut res = key.clone();
        for col in key.iter() {
            res.remove(col);
            if !self.is_strict_key(&res) {
                res.insert(col);
            }
        }
        res
    }

    /// Remove the columns that are strictly determined by the remaining ones.
    pub fn reduce_cols(&self, cols: &ColumnSet) -> ColumnSet {
        let mut res = cols.clone();
        for col in cols.iter() {
            res.remove(col);
            if !self.closure(&res).contains(col) {
                res.insert(col);
            }
        }
        res
    }

    /// `cols` may become NULL in rows that did not have NULLs before, as the null-extended side of
    /// an outer join does.
    ///
    /// Strict dependencies touching `cols` become lax, unless their determinant lies in `cols`, is
    /// proven not-null and determines only columns of `cols`: then every null-extended row maps
    /// NULLs to NULLs. Dependencies into `cols` from elsewhere are dropped, equalities across the
    /// boundary are split and constants in `cols` become lax constants. The key is cleared; the
    /// caller derives the key of the new relation.
    pub fn weaken(&mut self, cols: &ColumnSet) {
        self.check_visible(cols);
        for mut dep in std::mem::take(&mut self.deps) {
            if !dep.from.intersects(cols) {
                dep.to.difference_with(cols);
            } else if dep.strict
                && !(dep.from.is_subset(cols)
                    && dep.from.is_subset(&self.not_null)
                    && dep.to.is_subset(cols))
            {
                dep.strict = false;
            }
            if !dep.to.is_empty() {
                self.add_dependency(dep);
            }
        }

        let nullable = self.constants.intersect(cols);
        self.constants.difference_with(&nullable);
        self.lax_constants.union_with(&nullable);
        self.not_null.difference_with(cols);

        let classes = self
            .equiv
            .classes()
            .flat_map(|class| [class.intersect(cols), class.difference(cols)])
            .collect_vec();
        self.equiv = EquivClasses::from_classes(classes);
        self.key = None;
    }

    /// Combines the dependencies of two relations over disjoint columns, as a cross product does.
    /// The key is cleared.
    pub fn union_with(&mut self, other: &FunctionalDependencySet) {
        assert!(
            !self.cols.intersects(&other.cols),
            "columns {} and {} overlap",
            self.cols,
            other.cols
        );
        self.cols.union_with(&other.cols);
        self.deps.extend(other.deps.iter().cloned());
        let classes = self
            .equiv
            .classes()
            .chain(other.equiv.classes())
            .cloned()
            .collect_vec();
        self.equiv = EquivClasses::from_classes(classes);
        self.constants.union_with(&other.constants);
        self.lax_constants.union_with(&other.lax_constants);
        self.not_null.union_with(&other.not_null);
        self.key = None;
    }

    /// Rewrites `cols` onto columns of `target` through equalities. Returns `None` if some column
    /// has no equal column in `target`.
    fn substitute(&self, cols: &ColumnSet, target: &ColumnSet) -> Option<ColumnSet> {
        let mut res = ColumnSet::new();
        for col in cols.iter() {
            if target.contains(col) {
                res.insert(col);
            } else {
                res.insert(self.equiv.class_of(col).intersect(target).first()?);
            }
        }
        Some(res)
    }

    /// Restricts the set to `cols`.
    ///
    /// Determinants are rewritten through equalities and dependencies whose determinant cannot be
    /// rewritten are dropped. Dependents of strict dependencies are recomputed from the closure,
    /// so facts that went through a dropped column survive.
    pub fn project(&self, cols: &ColumnSet) -> Self {
        self.check_visible(cols);
        let mut res = Self::new(cols.clone());
        res.equiv = EquivClasses::from_classes(self.equiv.classes().map(|c| c.intersect(cols)));
        res.constants = self.constants.intersect(cols);
        res.lax_constants = self.lax_constants.intersect(cols);
        res.not_null = self.not_null.intersect(cols);

        for dep in &self.deps {
            let Some(from) = self.substitute(&dep.from, cols) else {
                trace!(%dep, "drop dependency with projected-out determinant");
                continue;
            };
            if dep.strict {
                let to = self.closure(&from).intersect(cols);
                res.add_strict(&from, &to);
            } else {
                let to = self.equiv.expand(&dep.to).intersect(cols);
                res.add_lax(&from, &to);
            }
        }

        if let Some(key) = &self.key {
            if let Some(key_cols) = self.substitute(&key.cols, cols) {
                res.set_key(&key_cols, key.strict);
            } else if key.strict && self.is_strict_key(cols) {
                res.set_key(&self.reduce_key(cols), true);
            } else if self.is_lax_key(cols) {
                res.set_key(&self.reduce_cols(cols), false);
            }
        }
        res
    }

    fn fmt_with(&self, f: &mut fmt::Formatter<'_>, names: Option<&[String]>) -> fmt::Result {
        let mut parts = 0;
        if !self.constants.is_empty() {
            write_sep(f, &mut parts)?;
            f.write_str("() --> ")?;
            write_side(f, &self.constants, names)?;
        }
        if !self.lax_constants.is_empty() {
            write_sep(f, &mut parts)?;
            f.write_str("() ~~> ")?;
            write_side(f, &self.lax_constants, names)?;
        }
        for class in self.equiv.sorted_classes() {
            write_sep(f, &mut parts)?;
            for (i, col) in class.iter().enumerate() {
                if i > 0 {
                    f.write_str(" == ")?;
                }
                write_column(f, col, names)?;
            }
        }
        for dep in &self.deps {
            write_sep(f, &mut parts)?;
            write_side(f, &dep.from, names)?;
            write!(f, " {} ", dep.arrow())?;
            write_side(f, &dep.to, names)?;
        }
        Ok(())
    }

    /// Whether there is anything to print.
    pub fn is_trivial(&self) -> bool {
        self.deps.is_empty()
            && self.constants.is_empty()
            && self.lax_constants.is_empty()
            && self.equiv.classes().next().is_none()
    }
}

fn write_sep(f: &mut fmt::Formatter<'_>, parts: &mut usize) -> fmt::Result {
    *parts += 1;
    if *parts > 1 {
        f.write_str(", ")?;
    }
    Ok(())
}

/// Single columns are printed bare, e.g. `c ~~> (a,b)`.
fn write_side(
    f: &mut fmt::Formatter<'_>,
    cols: &ColumnSet,
    names: Option<&[String]>,
) -> fmt::Result {
    match cols.first() {
        Some(col) if cols.len() == 1 => write_column(f, col, names),
        _ => cols.fmt_with(f, names),
    }
}

impl fmt::Display for FunctionalDependencySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        self.fmt_with(f, None)?;
        f.write_str("}")
    }
}

/// Displays a [`FunctionalDependencySet`] with column names, e.g. `c ~~> (a,b)`.
pub struct FdSetDisplay<'a> {
    pub fd: &'a FunctionalDependencySet,
    pub names: &'a [String],
}

impl fmt::Display for FdSetDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fd.fmt_with(f, Some(self.names))
    }
}
