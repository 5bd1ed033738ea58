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
use planprop_common::error::{ErrorCode, Result};

use super::{LogicalOp, PlanNode};
use crate::optimizer::property::{ColumnSet, ColumnSetDisplay, FdSetDisplay, Order, OrderDisplay};
use crate::utils::ConditionDisplay;

impl PlanNode {
    /// Write explain the whole plan tree. Each node is followed by its derived properties.
    pub fn explain(&self, level: usize, f: &mut impl fmt::Write) -> fmt::Result {
        let names = self.base.ctx.column_names();
        self.explain_with_names(level, f, &names)
    }

    /// Explain the plan node and return a string.
    pub fn explain_to_string(&self) -> Result<String> {
        let mut output = String::new();
        self.explain(0, &mut output)
            .map_err(|e| ErrorCode::InternalError(format!("failed to explain: {}", e)))?;
        Ok(output)
    }

    fn explain_with_names(
        &self,
        level: usize,
        f: &mut impl fmt::Write,
        names: &[String],
    ) -> fmt::Result {
        let indent = "  ".repeat(level);
        writeln!(f, "{}{}", indent, PlanNodeDisplay { node: self, names })?;
        for line in self.property_lines(names) {
            writeln!(f, "{}    {}", indent, line)?;
        }
        for input in self.inputs() {
            input.explain_with_names(level + 1, f, names)?;
        }
        Ok(())
    }

    fn property_lines(&self, names: &[String]) -> Vec<String> {
        let fd = self.functional_dependency();
        let display = |cols: &ColumnSet| ColumnSetDisplay { cols, names }.to_string();
        let mut lines = vec![];
        if let Some(key) = fd.key() {
            let label = if key.strict { "key" } else { "lax-key" };
            lines.push(format!("{}: {}", label, display(&key.cols)));
        }
        if !fd.is_trivial() {
            lines.push(format!("fd: {}", FdSetDisplay { fd, names }));
        }
        if !self.prune_cols().is_empty() {
            lines.push(format!("prune: {}", display(self.prune_cols())));
        }
        let orders = self.interesting_orders();
        if !orders.is_empty() {
            lines.push(format!(
                "interesting orderings: {}",
                orders
                    .orders()
                    .iter()
                    .map(|order| OrderDisplay { order, names })
                    .join(", ")
            ));
        }
        lines
    }
}

/// Displays the operator of a node, e.g. `LogicalScan { table: t, columns: [a, b] }`.
pub struct PlanNodeDisplay<'a> {
    pub node: &'a PlanNode,
    pub names: &'a [String],
}

impl PlanNodeDisplay<'_> {
    fn col_names(&self, cols: &ColumnSet) -> String {
        cols.iter()
            .map(|col| {
                self.names
                    .get(col.as_index())
                    .cloned()
                    .unwrap_or_else(|| col.to_string())
            })
            .join(", ")
    }

    fn order(&self, order: &'_ Order) -> String {
        OrderDisplay {
            order,
            names: self.names,
        }
        .to_string()
    }
}

impl fmt::Display for PlanNodeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = f.debug_struct(self.node.node_name());
        match self.node.op() {
            LogicalOp::Scan(core) => {
                builder
                    .field("table", &format_args!("{}", core.table_name()))
                    .field(
                        "columns",
                        &format_args!("[{}]", core.column_names().join(", ")),
                    );
            }
            LogicalOp::Filter(core) => {
                let predicate = ConditionDisplay {
                    condition: &core.predicate,
                    names: self.names,
                };
                builder.field("predicate", &format_args!("{}", predicate));
            }
            LogicalOp::Project(core) => {
                let exprs = self.col_names(self.node.output_cols());
                builder.field("exprs", &format_args!("[{}]", exprs));
                if !core.computed.is_empty() {
                    builder.field("computed", &core.computed.len());
                }
            }
            LogicalOp::Join(core) => {
                let on = ConditionDisplay {
                    condition: &core.on,
                    names: self.names,
                };
                builder
                    .field("type", &format_args!("{}", core.join_type))
                    .field("on", &format_args!("{}", on));
            }
            LogicalOp::Agg(core) => {
                if !core.group_key.is_empty() {
                    let group_key = self.col_names(&core.group_key);
                    builder.field("group_key", &format_args!("[{}]", group_key));
                }
                let aggs = self.col_names(&core.agg_cols());
                builder.field("aggs", &format_args!("[{}]", aggs));
                if !core.input_order.is_any() {
                    builder
                        .field(
                            "input_order",
                            &format_args!("{}", self.order(&core.input_order)),
                        )
                        .field("streaming", &core.is_streaming());
                }
            }
            LogicalOp::Limit(core) => {
                builder.field("limit", &core.limit);
                if !core.order.is_any() {
                    builder.field("order", &format_args!("{}", self.order(&core.order)));
                }
            }
            LogicalOp::Offset(core) => {
                builder.field("offset", &core.offset);
                if !core.order.is_any() {
                    builder.field("order", &format_args!("{}", self.order(&core.order)));
                }
            }
            LogicalOp::Sort(core) => {
                builder.field("order", &format_args!("{}", self.order(&core.order)));
            }
        }
        builder.finish()
    }
}
