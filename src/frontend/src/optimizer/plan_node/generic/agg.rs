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

use super::{GenericPlanNode, GenericPlanRef};
use crate::optimizer::optimizer_context::OptimizerContextRef;
use crate::optimizer::property::{
    ColumnSet, FieldOrder, FunctionalDependencySet, InterestingOrders, Order,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AggKind {
    Count,
    Sum,
    Min,
    Max,
    Avg,
}

impl fmt::Display for AggKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AggKind::Count => "count",
            AggKind::Sum => "sum",
            AggKind::Min => "min",
            AggKind::Max => "max",
            AggKind::Avg => "avg",
        };
        f.write_str(name)
    }
}

/// An aggregate call and the column it outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanAggCall {
    pub agg_kind: AggKind,
    /// Empty for `count(*)`.
    pub inputs: Vec<ColumnId>,
    pub output: ColumnId,
}

impl PlanAggCall {
    /// Allocates the output column, named after the call, e.g. `sum(b)`.
    pub fn new(ctx: &OptimizerContextRef, agg_kind: AggKind, inputs: Vec<ColumnId>) -> Self {
        let args = if inputs.is_empty() {
            "*".to_owned()
        } else {
            inputs.iter().map(|&c| ctx.column_name(c)).join(", ")
        };
        let output = ctx.add_column(format!("{}({})", agg_kind, args));
        Self {
            agg_kind,
            inputs,
            output,
        }
    }

    pub fn count_star(ctx: &OptimizerContextRef) -> Self {
        Self::new(ctx, AggKind::Count, vec![])
    }

    pub fn input_cols(&self) -> ColumnSet {
        self.inputs.iter().collect()
    }
}

/// [`Agg`] groups input data by their group key and computes aggregation functions.
///
/// It corresponds to the `GROUP BY` operator in a SQL query statement together with the aggregate
/// functions in the `SELECT` statement. An empty group key makes a scalar aggregation, which
/// outputs exactly one row.
#[derive(Debug, Clone)]
pub struct Agg<PlanRef> {
    pub group_key: ColumnSet,
    pub agg_calls: Vec<PlanAggCall>,
    /// The order the input is consumed in. Rows of a group are adjacent in this order.
    pub input_order: Order,
    /// Whether the input already provides `input_order`, so groups can be aggregated one at a
    /// time without sorting or hashing.
    pub input_order_satisfied: bool,
    /// The order of the output, if it has one.
    pub output_order: Order,
    pub input: PlanRef,
}

impl<PlanRef: GenericPlanRef> Agg<PlanRef> {
    /// `required_order` is the order the aggregation wants its input in, if it has a preference.
    /// Otherwise an input order that groups rows is looked for among the interesting orders of the
    /// input.
    pub fn new(
        input: PlanRef,
        group_key: ColumnSet,
        agg_calls: Vec<PlanAggCall>,
        required_order: Option<Order>,
    ) -> Self {
        let input_cols = input.output_cols();
        let dangling = agg_calls
            .iter()
            .fold(group_key.clone(), |acc, call| acc.union(&call.input_cols()))
            .union(&required_order.as_ref().map(Order::columns).unwrap_or_default())
            .difference(input_cols);
        assert!(
            dangling.is_empty(),
            "dangling column reference: {} not in input {}",
            dangling,
            input_cols
        );

        let input_fd = input.functional_dependency();
        let input_orders = input.interesting_orders();
        let (input_order, input_order_satisfied, output_order) = if let Some(required) =
            required_order
        {
            let satisfied = input_orders.satisfies(&required, input_fd);
            let output_order = required.project(input_fd, &group_key);
            (required, satisfied, output_order)
        } else if group_key.is_empty() {
            (Order::any(), true, Order::any())
        } else if let Some(prefix) = input_orders
            .orders()
            .iter()
            .find_map(|order| Self::grouping_prefix(order, &group_key, input_fd))
        {
            trace!(order = %prefix, "input order groups rows");
            (prefix.clone(), true, prefix)
        } else {
            (Order::ascending_on(group_key.iter()), false, Order::any())
        };

        Self {
            group_key,
            agg_calls,
            input_order,
            input_order_satisfied,
            output_order,
            input,
        }
    }

    /// The shortest prefix of `order` that covers `group_key`, as long as it only consists of
    /// grouping columns or columns equal to them.
    fn grouping_prefix(
        order: &Order,
        group_key: &ColumnSet,
        fd: &FunctionalDependencySet,
    ) -> Option<Order> {
        let mut prefix = vec![];
        let mut cols = ColumnSet::new();
        for field_order in &order.field_order {
            if fd.closure(&cols).is_superset(group_key) {
                break;
            }
            let column = if group_key.contains(field_order.column) {
                field_order.column
            } else {
                fd.equiv_class(field_order.column)
                    .intersect(group_key)
                    .first()?
            };
            prefix.push(FieldOrder::new(column, field_order.direct));
            cols.insert(column);
        }
        fd.closure(&cols)
            .is_superset(group_key)
            .then(|| Order::new(prefix))
    }

    pub fn agg_cols(&self) -> ColumnSet {
        self.agg_calls.iter().map(|call| call.output).collect()
    }

    /// Whether the input can be aggregated group by group in its existing order.
    pub fn is_streaming(&self) -> bool {
        self.input_order_satisfied
    }
}

impl<PlanRef: GenericPlanRef> GenericPlanNode for Agg<PlanRef> {
    fn output_cols(&self) -> ColumnSet {
        self.group_key.union(&self.agg_cols())
    }

    fn functional_dependency(&self) -> FunctionalDependencySet {
        let input_fd = self.input.functional_dependency();
        let mut fd = input_fd.project(&self.group_key);
        let agg_cols = self.agg_cols();
        fd.add_columns(&agg_cols);
        fd.add_strict(&self.group_key, &agg_cols);

        // Every group has at least one row; a scalar aggregation may run on none.
        let not_null = self
            .agg_calls
            .iter()
            .filter(|call| {
                call.agg_kind == AggKind::Count
                    || (!self.group_key.is_empty()
                        && call.input_cols().is_subset(input_fd.not_null_cols()))
            })
            .map(|call| call.output)
            .collect();
        fd.mark_not_null(&not_null);

        fd.set_key(&self.group_key, true);
        fd.reduce_current_key();
        fd
    }

    fn prune_cols(&self) -> ColumnSet {
        self.agg_cols()
    }

    fn interesting_orders(&self, fd: &FunctionalDependencySet, limit: usize) -> InterestingOrders {
        let mut orders = InterestingOrders::new();
        orders.add(&self.output_order, fd, limit);
        orders
    }

    fn ctx(&self) -> OptimizerContextRef {
        self.input.ctx()
    }
}
