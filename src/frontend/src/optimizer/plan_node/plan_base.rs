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

use super::generic::GenericPlanNode;
use super::PlanNodeId;
use crate::optimizer::optimizer_context::OptimizerContextRef;
use crate::optimizer::property::{ColumnSet, FunctionalDependencySet, InterestingOrders};

/// The properties shared by every plan node, derived once at construction.
#[derive(Clone, Debug)]
pub struct PlanBase {
    pub id: PlanNodeId,
    pub ctx: OptimizerContextRef,
    pub output_cols: ColumnSet,
    /// The functional dependencies, constants, not-null columns and key of the output.
    pub functional_dependency: FunctionalDependencySet,
    /// Output columns that a parent may drop without changing the result of this node.
    pub prune_cols: ColumnSet,
    pub interesting_orders: InterestingOrders,
}

impl PlanBase {
    pub fn new_logical_with_core(core: &(impl GenericPlanNode + ?Sized)) -> Self {
        let ctx = core.ctx();
        let id = ctx.next_plan_node_id();
        let output_cols = core.output_cols();
        let functional_dependency = core.functional_dependency();
        assert_eq!(
            functional_dependency.cols(),
            &output_cols,
            "functional dependencies must describe exactly the output columns"
        );
        let prune_cols = core.prune_cols();
        debug_assert!(prune_cols.is_subset(&output_cols));
        let config = ctx.config();
        let interesting_orders = if config.derive_interesting_orderings {
            core.interesting_orders(&functional_dependency, config.max_interesting_orderings)
        } else {
            InterestingOrders::new()
        };
        Self {
            id,
            ctx,
            output_cols,
            functional_dependency,
            prune_cols,
            interesting_orders,
        }
    }
}
