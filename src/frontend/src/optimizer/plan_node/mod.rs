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

//! Defines all kinds of node in the logical plan tree, each node represents a relational
//! expression.
//!
//! We use an immutable style tree structure: nodes cannot be modified after they have been
//! created. A node only stores the references of its inputs, so rewriting a node means creating a
//! new node, not the entire sub-tree. We use `Rc` as the node's reference.
//!
//! All properties of a node are derived in [`PlanNode::new`] from the operator core and the
//! already derived properties of its inputs.

use std::rc::Rc;

use planprop_common::catalog::ColumnId;
use tracing::debug;

use self::generic::GenericPlanRef;
use super::optimizer_context::OptimizerContextRef;
use super::property::{ColumnSet, FunctionalDependencySet, InterestingOrders, Key, Order};
use crate::catalog::TableCatalog;
use crate::utils::Condition;

pub mod generic;
mod plan_base;
pub use plan_base::*;
mod explain;
pub use explain::*;

pub type PlanRef = Rc<PlanNode>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PlanNodeId(pub i32);

/// The relational operator of a [`PlanNode`].
#[derive(Debug, Clone)]
pub enum LogicalOp {
    Scan(generic::Scan),
    Filter(generic::Filter<PlanRef>),
    Project(generic::Project<PlanRef>),
    Join(generic::Join<PlanRef>),
    Agg(generic::Agg<PlanRef>),
    Limit(generic::Limit<PlanRef>),
    Offset(generic::Offset<PlanRef>),
    Sort(generic::Sort<PlanRef>),
}

macro_rules! impl_from_core {
    ($($variant:ident: $core:ty),*) => {
        $(impl From<$core> for LogicalOp {
            fn from(core: $core) -> Self {
                Self::$variant(core)
            }
        })*
    };
}

impl_from_core! {
    Scan: generic::Scan,
    Filter: generic::Filter<PlanRef>,
    Project: generic::Project<PlanRef>,
    Join: generic::Join<PlanRef>,
    Agg: generic::Agg<PlanRef>,
    Limit: generic::Limit<PlanRef>,
    Offset: generic::Offset<PlanRef>,
    Sort: generic::Sort<PlanRef>
}

impl LogicalOp {
    fn core(&self) -> &dyn generic::GenericPlanNode {
        match self {
            Self::Scan(core) => core,
            Self::Filter(core) => core,
            Self::Project(core) => core,
            Self::Join(core) => core,
            Self::Agg(core) => core,
            Self::Limit(core) => core,
            Self::Offset(core) => core,
            Self::Sort(core) => core,
        }
    }

    pub fn node_name(&self) -> &'static str {
        match self {
            Self::Scan(_) => "LogicalScan",
            Self::Filter(_) => "LogicalFilter",
            Self::Project(_) => "LogicalProject",
            Self::Join(_) => "LogicalJoin",
            Self::Agg(_) => "LogicalAgg",
            Self::Limit(_) => "LogicalLimit",
            Self::Offset(_) => "LogicalOffset",
            Self::Sort(_) => "LogicalSort",
        }
    }

    pub fn inputs(&self) -> Vec<PlanRef> {
        match self {
            Self::Scan(_) => vec![],
            Self::Filter(core) => vec![core.input.clone()],
            Self::Project(core) => vec![core.input.clone()],
            Self::Join(core) => vec![core.left.clone(), core.right.clone()],
            Self::Agg(core) => vec![core.input.clone()],
            Self::Limit(core) => vec![core.input.clone()],
            Self::Offset(core) => vec![core.input.clone()],
            Self::Sort(core) => vec![core.input.clone()],
        }
    }

    pub fn as_scan(&self) -> Option<&generic::Scan> {
        match self {
            Self::Scan(core) => Some(core),
            _ => None,
        }
    }

    pub fn as_agg(&self) -> Option<&generic::Agg<PlanRef>> {
        match self {
            Self::Agg(core) => Some(core),
            _ => None,
        }
    }

    pub fn as_sort(&self) -> Option<&generic::Sort<PlanRef>> {
        match self {
            Self::Sort(core) => Some(core),
            _ => None,
        }
    }
}

/// A node of the logical plan: an operator and its derived properties.
#[derive(Debug)]
pub struct PlanNode {
    base: PlanBase,
    op: LogicalOp,
}

impl PlanNode {
    pub fn new(op: LogicalOp) -> PlanRef {
        let base = PlanBase::new_logical_with_core(op.core());
        debug!(
            id = base.id.0,
            node = op.node_name(),
            key = ?base.functional_dependency.key(),
            orders = base.interesting_orders.len(),
            "derive plan node"
        );
        Rc::new(Self { base, op })
    }

    pub fn op(&self) -> &LogicalOp {
        &self.op
    }

    pub fn id(&self) -> PlanNodeId {
        self.base.id
    }

    pub fn ctx(&self) -> OptimizerContextRef {
        self.base.ctx.clone()
    }

    pub fn node_name(&self) -> &'static str {
        self.op.node_name()
    }

    pub fn inputs(&self) -> Vec<PlanRef> {
        self.op.inputs()
    }

    pub fn output_cols(&self) -> &ColumnSet {
        &self.base.output_cols
    }

    pub fn functional_dependency(&self) -> &FunctionalDependencySet {
        &self.base.functional_dependency
    }

    pub fn key(&self) -> Option<&Key> {
        self.base.functional_dependency.key()
    }

    pub fn prune_cols(&self) -> &ColumnSet {
        &self.base.prune_cols
    }

    pub fn interesting_orders(&self) -> &InterestingOrders {
        &self.base.interesting_orders
    }
}

/// Constructors of the logical operators.
impl PlanNode {
    /// Scans the visible columns of `table`.
    pub fn scan(ctx: OptimizerContextRef, table: Rc<TableCatalog>) -> PlanRef {
        let output_col_idx = table.visible_column_indices();
        Self::scan_columns(ctx, table, output_col_idx)
    }

    /// Scans the columns of `table` at positions `output_col_idx`.
    pub fn scan_columns(
        ctx: OptimizerContextRef,
        table: Rc<TableCatalog>,
        output_col_idx: Vec<usize>,
    ) -> PlanRef {
        Self::new(generic::Scan::new(ctx, table, output_col_idx).into())
    }

    pub fn filter(input: PlanRef, predicate: Condition) -> PlanRef {
        Self::new(generic::Filter::new(predicate, input).into())
    }

    /// Keeps the input columns `cols`.
    pub fn project(input: PlanRef, cols: ColumnSet) -> PlanRef {
        Self::new(generic::Project::new(input, cols, vec![]).into())
    }

    /// Keeps the input columns `cols` and appends `computed`.
    pub fn project_with_computed(
        input: PlanRef,
        cols: ColumnSet,
        computed: Vec<generic::ComputedColumn>,
    ) -> PlanRef {
        Self::new(generic::Project::new(input, cols, computed).into())
    }

    pub fn join(
        left: PlanRef,
        right: PlanRef,
        join_type: generic::JoinType,
        on: Condition,
    ) -> PlanRef {
        Self::new(generic::Join::new(left, right, on, join_type).into())
    }

    /// Groups by `group_key`. `input_order` is the order the aggregation wants its input in, if
    /// it has a preference.
    pub fn agg(
        input: PlanRef,
        group_key: ColumnSet,
        agg_calls: Vec<generic::PlanAggCall>,
        input_order: Option<Order>,
    ) -> PlanRef {
        Self::new(generic::Agg::new(input, group_key, agg_calls, input_order).into())
    }

    /// Returns the first `limit` rows of the input in `order`. The input is sorted first if it
    /// does not provide `order`.
    pub fn limit(input: PlanRef, limit: u64, order: Order) -> PlanRef {
        let input = order.enforce_if_not_satisfies(input);
        Self::new(generic::Limit::new(input, limit, order).into())
    }

    /// Skips the first `offset` rows of the input in `order`. The input is sorted first if it does
    /// not provide `order`.
    pub fn offset(input: PlanRef, offset: u64, order: Order) -> PlanRef {
        let input = order.enforce_if_not_satisfies(input);
        Self::new(generic::Offset::new(input, offset, order).into())
    }

    pub fn sort(input: PlanRef, order: Order) -> PlanRef {
        order.enforce(input)
    }
}

impl GenericPlanRef for PlanRef {
    fn output_cols(&self) -> &ColumnSet {
        PlanNode::output_cols(self)
    }

    fn functional_dependency(&self) -> &FunctionalDependencySet {
        PlanNode::functional_dependency(self)
    }

    fn prune_cols(&self) -> &ColumnSet {
        PlanNode::prune_cols(self)
    }

    fn interesting_orders(&self) -> &InterestingOrders {
        PlanNode::interesting_orders(self)
    }

    fn ctx(&self) -> OptimizerContextRef {
        PlanNode::ctx(self)
    }
}

/// Looks up the column id of the output column named `name`, for building predicates in tests and
/// tools.
pub fn column_by_name(plan: &PlanRef, name: &str) -> Option<ColumnId> {
    let ctx = plan.ctx();
    plan.output_cols()
        .iter()
        .find(|&col| ctx.column_name(col) == name)
}
