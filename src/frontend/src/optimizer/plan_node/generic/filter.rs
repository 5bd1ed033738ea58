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

use super::{GenericPlanNode, GenericPlanRef};
use crate::optimizer::optimizer_context::OptimizerContextRef;
use crate::optimizer::property::{ColumnSet, FunctionalDependencySet, InterestingOrders};
use crate::utils::Condition;

/// [`Filter`] iterates over its input and returns elements for which `predicate` evaluates to
/// true, filtering out the others.
///
/// If the condition allows nulls, then a null value is treated the same as false.
#[derive(Debug, Clone)]
pub struct Filter<PlanRef> {
    pub predicate: Condition,
    pub input: PlanRef,
}

impl<PlanRef: GenericPlanRef> Filter<PlanRef> {
    pub fn new(predicate: Condition, input: PlanRef) -> Self {
        let cols = predicate.input_cols();
        assert!(
            cols.is_subset(input.output_cols()),
            "dangling column reference: predicate over {} on input {}",
            cols,
            input.output_cols()
        );
        Filter { predicate, input }
    }
}

impl<PlanRef: GenericPlanRef> GenericPlanNode for Filter<PlanRef> {
    fn output_cols(&self) -> ColumnSet {
        self.input.output_cols().clone()
    }

    fn functional_dependency(&self) -> FunctionalDependencySet {
        let mut fd = self.input.functional_dependency().clone();
        self.predicate
            .apply_to(&mut fd, self.ctx().config().promote_lax_keys);
        fd.reduce_current_key();
        fd
    }

    fn prune_cols(&self) -> ColumnSet {
        self.input
            .prune_cols()
            .difference(&self.predicate.input_cols())
    }

    fn interesting_orders(&self, fd: &FunctionalDependencySet, limit: usize) -> InterestingOrders {
        self.input.interesting_orders().simplify(fd, limit)
    }

    fn ctx(&self) -> OptimizerContextRef {
        self.input.ctx()
    }
}
