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

use std::cell::{Cell, RefCell};
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

use planprop_common::catalog::ColumnId;
use planprop_common::config::OptimizerConfig;

use crate::optimizer::plan_node::PlanNodeId;

/// State shared by all plan nodes of one optimization pass.
///
/// Column ids are allocated here when a relation is bound, and the name of each column is kept for
/// explaining plans.
pub struct OptimizerContext {
    config: OptimizerConfig,
    next_plan_node_id: Cell<i32>,
    next_column_id: Cell<u32>,
    column_names: RefCell<Vec<String>>,
}

pub type OptimizerContextRef = Rc<OptimizerContext>;

impl OptimizerContext {
    pub fn new(config: OptimizerConfig) -> Self {
        Self {
            config,
            next_plan_node_id: Cell::new(0),
            next_column_id: Cell::new(0),
            column_names: RefCell::new(vec![]),
        }
    }

    pub fn mock() -> OptimizerContextRef {
        Rc::new(Self::new(OptimizerConfig::default()))
    }

    pub fn config(&self) -> &OptimizerConfig {
        &self.config
    }

    pub fn next_plan_node_id(&self) -> PlanNodeId {
        let id = self.next_plan_node_id.get();
        self.next_plan_node_id.set(id + 1);
        PlanNodeId(id)
    }

    /// Allocates a column id for a new column named `name`.
    pub fn add_column(&self, name: impl Into<String>) -> ColumnId {
        let id = ColumnId::new(self.next_column_id.get());
        self.next_column_id.set(id.next().get_id());
        self.column_names.borrow_mut().push(name.into());
        id
    }

    pub fn column_name(&self, col: ColumnId) -> String {
        self.column_names
            .borrow()
            .get(col.as_index())
            .cloned()
            .unwrap_or_else(|| col.to_string())
    }

    /// Names of all columns allocated so far, indexed by column id.
    pub fn column_names(&self) -> Vec<String> {
        self.column_names.borrow().clone()
    }
}

impl Debug for OptimizerContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "OptimizerContext {{ next plan node id = {}, next column id = {} }}",
            self.next_plan_node_id.get(),
            self.next_column_id.get()
        )
    }
}
