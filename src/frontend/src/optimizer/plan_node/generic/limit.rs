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

/// [`Limit`] returns the first `limit` rows of its input in `order`.
#[derive(Debug, Clone)]
pub struct Limit<PlanRef> {
    pub limit: u64,
    pub order: Order,
    pub input: PlanRef,
}

/// [`Offset`] skips the first `offset` rows of its input in `order`.
#[derive(Debug, Clone)]
pub struct Offset<PlanRef> {
    pub offset: u64,
    pub order: Order,
    pub input: PlanRef,
}

fn check_order(order: &Order, input: &impl GenericPlanRef) {
    assert!(
        order.columns().is_subset(input.output_cols()),
        "dangling column reference: order {} on input {}",
        order,
        input.output_cols()
    );
}

/// With an internal order, the rows come out in that order; otherwise in the order of the input.
fn passthrough_orders(
    order: &Order,
    input: &impl GenericPlanRef,
    fd: &FunctionalDependencySet,
    limit: usize,
) -> InterestingOrders {
    if order.is_any() {
        input.interesting_orders().simplify(fd, limit)
    } else {
        let mut orders = InterestingOrders::new();
        orders.add(order, fd, limit);
        orders
    }
}

impl<PlanRef: GenericPlanRef> Limit<PlanRef> {
    pub fn new(input: PlanRef, limit: u64, order: Order) -> Self {
        check_order(&order, &input);
        Self {
            limit,
            order,
            input,
        }
    }
}

impl<PlanRef: GenericPlanRef> GenericPlanNode for Limit<PlanRef> {
    fn output_cols(&self) -> ColumnSet {
        self.input.output_cols().clone()
    }

    fn functional_dependency(&self) -> FunctionalDependencySet {
        let mut fd = self.input.functional_dependency().clone();
        if self.limit <= 1 {
            // At most one row: every column is constant.
            let cols = fd.cols().clone();
            fd.add_strict(&ColumnSet::new(), &cols);
            fd.set_key(&ColumnSet::new(), true);
        }
        fd
    }

    fn prune_cols(&self) -> ColumnSet {
        self.input.prune_cols().difference(&self.order.columns())
    }

    fn interesting_orders(&self, fd: &FunctionalDependencySet, limit: usize) -> InterestingOrders {
        passthrough_orders(&self.order, &self.input, fd, limit)
    }

    fn ctx(&self) -> OptimizerContextRef {
        self.input.ctx()
    }
}

impl<PlanRef: GenericPlanRef> Offset<PlanRef> {
    pub fn new(input: PlanRef, offset: u64, order: Order) -> Self {
        check_order(&order, &input);
        Self {
            offset,
            order,
            input,
        }
    }
}

impl<PlanRef: GenericPlanRef> GenericPlanNode for Offset<PlanRef> {
    fn output_cols(&self) -> ColumnSet {
        self.input.output_cols().clone()
    }

    fn functional_dependency(&self) -> FunctionalDependencySet {
        self.input.functional_dependency().clone()
    }

    fn prune_cols(&self) -> ColumnSet {
        self.input.prune_cols().difference(&self.order.columns())
    }

    fn interesting_orders(&self, fd: &FunctionalDependencySet, limit: usize) -> InterestingOrders {
        passthrough_orders(&self.order, &self.input, fd, limit)
    }

    fn ctx(&self) -> OptimizerContextRef {
        self.input.ctx()
    }
}
