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

//! Logical property derivation of the optimizer.
//!
//! Every node of a logical plan carries its output columns, functional dependencies, key,
//! prunable columns and interesting orderings. They are derived once, bottom-up, when the node is
//! constructed, and are never changed afterwards.

pub mod catalog;
pub mod optimizer;
pub mod utils;

pub use optimizer::optimizer_context::{OptimizerContext, OptimizerContextRef};
pub use optimizer::plan_node::{PlanNode, PlanRef};
