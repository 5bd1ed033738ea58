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

//! The cores of the logical operators. A core holds what defines the operator and derives the
//! properties of its output from the properties of its inputs.

use super::super::optimizer_context::OptimizerContextRef;
use crate::optimizer::property::{ColumnSet, FunctionalDependencySet, InterestingOrders};

mod agg;
pub use agg::*;
mod filter;
pub use filter::*;
mod join;
pub use join::*;
mod limit;
pub use limit::*;
mod project;
pub use project::*;
mod scan;
pub use scan::*;
mod sort;
pub use sort::*;

/// The derived properties of an input, as seen by the core of its parent.
pub trait GenericPlanRef {
    fn output_cols(&self) -> &ColumnSet;
    fn functional_dependency(&self) -> &FunctionalDependencySet;
    fn prune_cols(&self) -> &ColumnSet;
    fn interesting_orders(&self) -> &InterestingOrders;
    fn ctx(&self) -> OptimizerContextRef;
}

pub trait GenericPlanNode {
    fn output_cols(&self) -> ColumnSet;
    fn functional_dependency(&self) -> FunctionalDependencySet;
    fn prune_cols(&self) -> ColumnSet;
    /// At most `limit` orders, simplified under `fd`, the functional dependencies of the output.
    fn interesting_orders(&self, fd: &FunctionalDependencySet, limit: usize) -> InterestingOrders;
    fn ctx(&self) -> OptimizerContextRef;
}
