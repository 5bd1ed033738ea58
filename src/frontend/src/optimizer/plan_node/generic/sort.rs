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
use crate::optimizer::property::{ColumnSet, FunctionalDependencySet, InterestingOrders, Order};

/// [`Sort`] sorts its input by `order`.
#[derive(Debug, Clone)]
pub struct Sort<PlanRef> {
    pub order: Order,
    pub input: PlanRef,
}

impl<PlanRef: GenericPlanRef> Sort<PlanRef> {
    pub fn new(input: PlanRef, order: Order) -> Self {
        assert!(
            order.columns().is_subset(input.output_cols()),
            "dangling column reference: order {} on input {}",
            order,
            input.output_cols()
        );
        Self { order, input }
    }
}

impl<PlanRef: GenericPlanRef> GenericPlanNode for Sort<PlanRef> {
    fn output_cols(&self) -> ColumnSet {
        self.input.output_cols().clone()
    }

    fn functional_dependency(&self) -> FunctionalDependencySet {
        self.input.functional_dependency().clone()
    }

    fn prune_cols(&self) -> ColumnSet {
        self.input.prune_cols().difference(&self.order.columns())
    }

    /// The imposed order first, then the orders of the input.
    fn interesting_orders(&self, fd: &FunctionalDependencySet, limit: usize) -> InterestingOrders {
        let mut orders = InterestingOrders::new();
        orders.add(&self.order, fd, limit);
        orders.extend(self.input.interesting_orders().orders(), fd, limit);
        orders
    }

    fn ctx(&self) -> OptimizerContextRef {
        self.input.ctx()
    }
}
