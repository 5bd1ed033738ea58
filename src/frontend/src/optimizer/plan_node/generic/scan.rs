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

use std::rc::Rc;

use itertools::Itertools;
use planprop_common::catalog::ColumnId;
use planprop_common::util::sort_util::ColumnOrder;

use super::GenericPlanNode;
use crate::catalog::TableCatalog;
use crate::optimizer::optimizer_context::OptimizerContextRef;
use crate::optimizer::property::{
    ColumnSet, FieldOrder, FunctionalDependencySet, InterestingOrders, Order,
};

/// [`Scan`] returns contents of a table.
#[derive(Debug, Clone)]
pub struct Scan {
    pub table: Rc<TableCatalog>,
    /// The column id bound to each column of the table, by position.
    pub table_col_ids: Vec<ColumnId>,
    pub output_col_idx: Vec<usize>,
    pub ctx: OptimizerContextRef,
}

impl Scan {
    /// Binds fresh column ids to all columns of `table`.
    pub fn new(
        ctx: OptimizerContextRef,
        table: Rc<TableCatalog>,
        output_col_idx: Vec<usize>,
    ) -> Self {
        if let Some(idx) = output_col_idx.iter().find(|&&i| i >= table.columns().len()) {
            panic!(
                "column index {} out of range in table {}",
                idx,
                table.name()
            );
        }
        let table_col_ids = table
            .columns()
            .iter()
            .map(|c| ctx.add_column(c.name.clone()))
            .collect_vec();
        Self {
            table,
            table_col_ids,
            output_col_idx,
            ctx,
        }
    }

    pub fn table_name(&self) -> &str {
        self.table.name()
    }

    pub fn output_col_ids(&self) -> Vec<ColumnId> {
        self.output_col_idx
            .iter()
            .map(|&i| self.table_col_ids[i])
            .collect()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.output_col_idx
            .iter()
            .map(|&i| self.table.columns()[i].name.as_str())
            .collect()
    }

    fn index_cols(&self, columns: &[ColumnOrder]) -> ColumnSet {
        columns
            .iter()
            .map(|c| self.table_col_ids[c.column_index])
            .collect()
    }

    fn not_null_cols(&self) -> ColumnSet {
        self.table
            .columns()
            .iter()
            .zip_eq(&self.table_col_ids)
            .filter(|(desc, _)| !desc.nullable)
            .map(|(_, &id)| id)
            .collect()
    }

    /// Functional dependencies over all columns of the table.
    fn table_functional_dependency(&self) -> FunctionalDependencySet {
        let mut fd = FunctionalDependencySet::new(self.table_col_ids.iter().collect());
        fd.mark_not_null(&self.not_null_cols());
        fd.set_key(&self.index_cols(self.table.pk()), true);
        for index in self.table.indexes().iter().filter(|index| index.unique) {
            let cols = self.index_cols(&index.columns);
            let rest = fd.cols().difference(&cols);
            // Stored strict when all of `cols` are not-null.
            fd.add_lax(&cols, &rest);
        }
        fd
    }

    /// The order of the rows of each index: the index columns, then the primary key columns not
    /// among them, unless the index columns alone are unique.
    fn table_orders(&self) -> Vec<Order> {
        let not_null = self.not_null_cols();
        let pk = self.table.pk();
        self.table
            .table_desc()
            .all_indexes()
            .map(|(columns, unique)| {
                let mut field_order = columns
                    .iter()
                    .map(|c| FieldOrder::new(self.table_col_ids[c.column_index], c.direction))
                    .collect_vec();
                if !(unique && self.index_cols(columns).is_subset(&not_null)) {
                    let suffix = pk
                        .iter()
                        .filter(|c| !columns.iter().any(|i| i.column_index == c.column_index))
                        .map(|c| FieldOrder::new(self.table_col_ids[c.column_index], c.direction))
                        .collect_vec();
                    field_order.extend(suffix);
                }
                Order::new(field_order)
            })
            .collect()
    }
}

impl GenericPlanNode for Scan {
    fn output_cols(&self) -> ColumnSet {
        self.output_col_ids().into_iter().collect()
    }

    fn functional_dependency(&self) -> FunctionalDependencySet {
        self.table_functional_dependency()
            .project(&self.output_cols())
    }

    fn prune_cols(&self) -> ColumnSet {
        self.output_cols()
    }

    fn interesting_orders(&self, fd: &FunctionalDependencySet, limit: usize) -> InterestingOrders {
        let table_fd = self.table_functional_dependency();
        let output_cols = self.output_cols();
        let mut orders = InterestingOrders::new();
        for order in self.table_orders() {
            orders.add(&order.project(&table_fd, &output_cols), fd, limit);
        }
        orders
    }

    fn ctx(&self) -> OptimizerContextRef {
        self.ctx.clone()
    }
}
