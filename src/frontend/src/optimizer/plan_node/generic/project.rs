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

use planprop_common::catalog::ColumnId;

use super::{GenericPlanNode, GenericPlanRef};
use crate::optimizer::optimizer_context::OptimizerContextRef;
use crate::optimizer::property::{ColumnSet, FunctionalDependencySet, InterestingOrders};

/// A column computed by a deterministic expression over `inputs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedColumn {
    pub id: ColumnId,
    pub inputs: ColumnSet,
}

impl ComputedColumn {
    /// Allocates a new column named `name`.
    pub fn new(ctx: &OptimizerContextRef, name: impl Into<String>, inputs: ColumnSet) -> Self {
        Self {
            id: ctx.add_column(name),
            inputs,
        }
    }
}

/// [`Project`] keeps the input columns `cols` and appends the `computed` ones.
#[derive(Debug, Clone)]
pub struct Project<PlanRef> {
    pub cols: ColumnSet,
    pub computed: Vec<ComputedColumn>,
    pub input: PlanRef,
}

impl<PlanRef: GenericPlanRef> Project<PlanRef> {
    pub fn new(input: PlanRef, cols: ColumnSet, computed: Vec<ComputedColumn>) -> Self {
        let input_cols = input.output_cols();
        let dangling = computed
            .iter()
            .fold(cols.clone(), |acc, c| acc.union(&c.inputs))
            .difference(input_cols);
        assert!(
            dangling.is_empty(),
            "dangling column reference: {} not in input {}",
            dangling,
            input_cols
        );
        Project {
            cols,
            computed,
            input,
        }
    }

    fn computed_cols(&self) -> ColumnSet {
        self.computed.iter().map(|c| c.id).collect()
    }

    /// The input dependencies extended with the computed columns.
    fn extended_functional_dependency(&self) -> FunctionalDependencySet {
        let mut fd = self.input.functional_dependency().clone();
        fd.add_columns(&self.computed_cols());
        for c in &self.computed {
            fd.add_strict(&c.inputs, &ColumnSet::singleton(c.id));
        }
        fd
    }
}

impl<PlanRef: GenericPlanRef> GenericPlanNode for Project<PlanRef> {
    fn output_cols(&self) -> ColumnSet {
        self.cols.union(&self.computed_cols())
    }

    fn functional_dependency(&self) -> FunctionalDependencySet {
        self.extended_functional_dependency()
            .project(&self.output_cols())
    }

    fn prune_cols(&self) -> ColumnSet {
        self.output_cols()
    }

    fn interesting_orders(&self, fd: &FunctionalDependencySet, limit: usize) -> InterestingOrders {
        self.input.interesting_orders().project(
            &self.extended_functional_dependency(),
            &self.output_cols(),
            fd,
            limit,
        )
    }

    fn ctx(&self) -> OptimizerContextRef {
        self.input.ctx()
    }
}
