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

pub mod optimizer_context;
pub mod plan_node;
pub use plan_node::PlanRef;
pub mod property;

use property::Order;
use tracing::debug;

/// `PlanRoot` is a logical plan together with the order its result is required in, e.g. by an
/// `ORDER BY` clause. The required order may be provided by the plan already, in which case no
/// sort is needed.
#[derive(Debug, Clone)]
pub struct PlanRoot {
    plan: PlanRef,
    required_order: Order,
}

impl PlanRoot {
    pub fn new(plan: PlanRef, required_order: Order) -> Self {
        assert!(
            required_order
                .columns()
                .is_subset(plan.functional_dependency().cols()),
            "required order {} refers to columns outside of the plan",
            required_order
        );
        Self {
            plan,
            required_order,
        }
    }

    pub fn plan(&self) -> &PlanRef {
        &self.plan
    }

    pub fn required_order(&self) -> &Order {
        &self.required_order
    }

    /// Returns the plan with a sort on top if its interesting orderings do not provide the
    /// required order.
    pub fn into_ordered_plan(self) -> PlanRef {
        let plan = self.required_order.enforce_if_not_satisfies(self.plan.clone());
        if plan.id() == self.plan.id() {
            debug!(order = %self.required_order, "required order provided, sort elided");
        }
        plan
    }
}
