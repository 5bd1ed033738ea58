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

mod explain;
mod operators;
mod scenarios;

use std::rc::Rc;

use itertools::Itertools;
use planprop_common::catalog::{
    ColumnDesc, ColumnId, IndexDesc, TableDesc, TableId, ROW_ID_COLUMN_NAME,
};
use planprop_common::config::OptimizerConfig;
use planprop_common::util::sort_util::ColumnOrder;
use planprop_frontend::catalog::{Catalog, TableCatalog};
use planprop_frontend::optimizer::plan_node::column_by_name;
use planprop_frontend::optimizer::property::{ColumnSet, OrderDisplay};
use planprop_frontend::{OptimizerContext, OptimizerContextRef, PlanRef};

/// `abc(a, b, c)` with a hidden row id as primary key, an index on `(a, b)` and a unique index on
/// the nullable `c`.
fn abc_desc() -> TableDesc {
    TableDesc {
        table_id: TableId::default(),
        name: "abc".to_owned(),
        columns: vec![
            ColumnDesc::nullable("a"),
            ColumnDesc::nullable("b"),
            ColumnDesc::nullable("c"),
            ColumnDesc::not_null(ROW_ID_COLUMN_NAME).hidden(),
        ],
        pk: vec![ColumnOrder::ascending(3)],
        indexes: vec![
            IndexDesc::new(
                "abc_a_b",
                vec![ColumnOrder::ascending(0), ColumnOrder::ascending(1)],
                false,
            ),
            IndexDesc::new("abc_c", vec![ColumnOrder::ascending(2)], true),
        ],
    }
}

/// `xyz(x, y, z)` with primary key `(x, y)`.
fn xyz_desc() -> TableDesc {
    TableDesc {
        table_id: TableId::default(),
        name: "xyz".to_owned(),
        columns: vec![
            ColumnDesc::not_null("x"),
            ColumnDesc::not_null("y"),
            ColumnDesc::nullable("z"),
        ],
        pk: vec![ColumnOrder::ascending(0), ColumnOrder::ascending(1)],
        indexes: vec![],
    }
}

struct TestCatalog {
    ctx: OptimizerContextRef,
    abc: Rc<TableCatalog>,
    xyz: Rc<TableCatalog>,
}

impl TestCatalog {
    fn new() -> Self {
        Self::with_config(OptimizerConfig::default())
    }

    fn with_config(config: OptimizerConfig) -> Self {
        init_tracing();
        let mut catalog = Catalog::default();
        let abc = catalog.create_table(abc_desc()).unwrap();
        let xyz = catalog.create_table(xyz_desc()).unwrap();
        Self {
            ctx: Rc::new(OptimizerContext::new(config)),
            abc,
            xyz,
        }
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn col(plan: &PlanRef, name: &str) -> ColumnId {
    column_by_name(plan, name).unwrap_or_else(|| panic!("no column named {}", name))
}

fn cols(plan: &PlanRef, names: &[&str]) -> ColumnSet {
    names.iter().map(|name| col(plan, name)).collect()
}

/// Renders the interesting orders of `plan` with column names.
fn orders(plan: &PlanRef) -> String {
    let names = plan.ctx().column_names();
    plan.interesting_orders()
        .orders()
        .iter()
        .map(|order| OrderDisplay {
            order,
            names: &names,
        })
        .join(", ")
}
