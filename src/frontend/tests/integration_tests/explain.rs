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

use expect_test::expect;
use planprop_frontend::optimizer::plan_node::generic::PlanAggCall;
use planprop_frontend::optimizer::property::{ColumnSet, Order};
use planprop_frontend::PlanNode;

use crate::{col, TestCatalog};

#[test]
fn test_explain_order_by_limit() {
    let t = TestCatalog::new();
    let scan = PlanNode::scan(t.ctx.clone(), t.abc.clone());
    let limit = PlanNode::limit(scan.clone(), 10, Order::ascending_on([col(&scan, "b")]));
    expect![[r#"
        LogicalLimit { limit: 10, order: [b+] }
            lax-key: (a,b,c)
            fd: c ~~> (a,b)
            prune: (a,c)
            interesting orderings: [b+]
          LogicalSort { order: [b+] }
              lax-key: (a,b,c)
              fd: c ~~> (a,b)
              prune: (a,c)
              interesting orderings: [b+], [a+, b+], [c+]
            LogicalScan { table: abc, columns: [a, b, c] }
                lax-key: (a,b,c)
                fd: c ~~> (a,b)
                prune: (a,b,c)
                interesting orderings: [a+, b+], [c+]
    "#]]
    .assert_eq(&limit.explain_to_string().unwrap());
}

#[test]
fn test_explain_group_by() {
    let t = TestCatalog::new();
    let scan = PlanNode::scan(t.ctx.clone(), t.abc.clone());
    let a = col(&scan, "a");
    let count = PlanAggCall::count_star(&t.ctx);
    let agg = PlanNode::agg(
        scan,
        ColumnSet::singleton(a),
        vec![count],
        Some(Order::ascending_on([a])),
    );
    expect![[r#"
        LogicalAgg { group_key: [a], aggs: [count(*)], input_order: [a+], streaming: true }
            key: (a)
            fd: a --> count(*)
            prune: (count(*))
            interesting orderings: [a+]
          LogicalScan { table: abc, columns: [a, b, c] }
              lax-key: (a,b,c)
              fd: c ~~> (a,b)
              prune: (a,b,c)
              interesting orderings: [a+, b+], [c+]
    "#]]
    .assert_eq(&agg.explain_to_string().unwrap());
}
