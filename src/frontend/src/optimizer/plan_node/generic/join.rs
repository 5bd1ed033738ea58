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

use super::{GenericPlanNode, GenericPlanRef};
use crate::optimizer::optimizer_context::OptimizerContextRef;
use crate::optimizer::property::{ColumnSet, FunctionalDependencySet, InterestingOrders};
use crate::utils::Condition;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinType {
    Inner,
    LeftOuter,
    RightOuter,
    FullOuter,
    LeftSemi,
    LeftAnti,
}

impl JoinType {
    /// Whether only the columns of the left input are output.
    pub fn is_left_only(self) -> bool {
        matches!(self, JoinType::LeftSemi | JoinType::LeftAnti)
    }

    /// Whether unmatched rows of the left input are padded with NULLs on the right.
    pub fn pads_right(self) -> bool {
        matches!(self, JoinType::LeftOuter | JoinType::FullOuter)
    }

    /// Whether unmatched rows of the right input are padded with NULLs on the left.
    pub fn pads_left(self) -> bool {
        matches!(self, JoinType::RightOuter | JoinType::FullOuter)
    }
}

impl fmt::Display for JoinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// [`Join`] combines two relations according to some condition.
///
/// Each output row has fields from the left and right inputs. The set of output rows is a subset
/// of the cartesian product of the two inputs; precisely which subset depends on the join
/// condition. In addition, the output columns are a subset of the columns of the left and
/// right columns, dependent on the join type.
#[derive(Debug, Clone)]
pub struct Join<PlanRef> {
    pub left: PlanRef,
    pub right: PlanRef,
    pub on: Condition,
    pub join_type: JoinType,
}

impl<PlanRef: GenericPlanRef> Join<PlanRef> {
    pub fn new(left: PlanRef, right: PlanRef, on: Condition, join_type: JoinType) -> Self {
        let input_cols = left.output_cols().union(right.output_cols());
        let dangling = on.input_cols().difference(&input_cols);
        assert!(
            dangling.is_empty(),
            "dangling column reference: join condition over {} not in inputs",
            dangling
        );
        Self {
            left,
            right,
            on,
            join_type,
        }
    }

    fn promote(&self) -> bool {
        self.left.ctx().config().promote_lax_keys
    }

    /// Derives the key of a join whose output contains both inputs.
    fn derive_key(&self, fd: &mut FunctionalDependencySet) {
        let (Some(left_key), Some(right_key)) = (
            self.left.functional_dependency().key(),
            self.right.functional_dependency().key(),
        ) else {
            return;
        };
        // Unmatched rows of both sides may collide on all-NULL keys.
        let strict =
            left_key.strict && right_key.strict && self.join_type != JoinType::FullOuter;
        fd.set_key(&left_key.cols.union(&right_key.cols), strict);
        fd.reduce_current_key();
    }
}

impl<PlanRef: GenericPlanRef> GenericPlanNode for Join<PlanRef> {
    fn output_cols(&self) -> ColumnSet {
        if self.join_type.is_left_only() {
            self.left.output_cols().clone()
        } else {
            self.left.output_cols().union(self.right.output_cols())
        }
    }

    fn functional_dependency(&self) -> FunctionalDependencySet {
        let left_cols = self.left.output_cols();
        let right_cols = self.right.output_cols();
        let eq_pairs = self.on.eq_pairs(left_cols, right_cols);

        if self.join_type.is_left_only() {
            let mut fd = self.left.functional_dependency().clone();
            if self.join_type == JoinType::LeftSemi {
                // A matched row has no NULL in its equi-join columns.
                let not_null = eq_pairs.iter().map(|(l, _)| *l).collect();
                if self.promote() {
                    fd.add_not_null(&not_null);
                } else {
                    fd.mark_not_null(&not_null);
                }
                fd.reduce_current_key();
            }
            return fd;
        }

        let mut left_fd = self.left.functional_dependency().clone();
        let mut right_fd = self.right.functional_dependency().clone();
        if self.join_type.pads_left() {
            left_fd.weaken(left_cols);
        }
        if self.join_type.pads_right() {
            right_fd.weaken(right_cols);
        }
        let mut fd = left_fd;
        fd.union_with(&right_fd);

        match self.join_type {
            JoinType::Inner => self.on.apply_to(&mut fd, self.promote()),
            JoinType::LeftOuter => {
                for (l, r) in &eq_pairs {
                    fd.add_lax(&ColumnSet::singleton(*r), &ColumnSet::singleton(*l));
                }
            }
            JoinType::RightOuter => {
                for (l, r) in &eq_pairs {
                    fd.add_lax(&ColumnSet::singleton(*l), &ColumnSet::singleton(*r));
                }
            }
            JoinType::FullOuter | JoinType::LeftSemi | JoinType::LeftAnti => {}
        }
        self.derive_key(&mut fd);
        fd
    }

    fn prune_cols(&self) -> ColumnSet {
        self.left
            .prune_cols()
            .union(self.right.prune_cols())
            .difference(&self.on.input_cols())
            .intersect(&self.output_cols())
    }

    fn interesting_orders(&self, fd: &FunctionalDependencySet, limit: usize) -> InterestingOrders {
        let left_orders = self.left.interesting_orders().orders();
        let mut orders = InterestingOrders::new();
        orders.extend(left_orders, fd, limit);
        if self.join_type.is_left_only() {
            return orders;
        }
        let right_orders = self.right.interesting_orders().orders();
        orders.extend(right_orders, fd, limit);
        if self.join_type == JoinType::Inner {
            let eq_pairs = self
                .on
                .eq_pairs(self.left.output_cols(), self.right.output_cols());
            let relabeled = eq_pairs
                .iter()
                .flat_map(|&(l, r)| {
                    let from_left = left_orders.iter().filter_map(move |o| o.relabel(l, r));
                    let from_right = right_orders.iter().filter_map(move |o| o.relabel(r, l));
                    from_left.chain(from_right)
                })
                .collect_vec();
            orders.extend(&relabeled, fd, limit);
        }
        orders
    }

    fn ctx(&self) -> OptimizerContextRef {
        self.left.ctx()
    }
}
