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

use planprop_common::catalog::ColumnId;
use planprop_common::config::OptimizerConfig;
use planprop_common::util::sort_util::Direction;
use planprop_frontend::optimizer::plan_node::generic::{ComputedColumn, JoinType, PlanAggCall};
use planprop_frontend::optimizer::property::{ColumnSet, FieldOrder, Order};
use planprop_frontend::optimizer::PlanRoot;
use planprop_frontend::utils::{Condition, Predicate};
use planprop_frontend::PlanNode;

use crate::{col, cols, orders, TestCatalog};

fn eq(pairs: &[(ColumnId, ColumnId)]) -> Condition {
    Condition::with_conjunctions(pairs.iter().map(|&(l, r)| Predicate::Eq(l, r)).collect())
}

#[test]
fn test_filter_promotes_lax_key() {
    let t = TestCatalog::new();
    let scan = PlanNode::scan(t.ctx.clone(), t.abc.clone());
    let c = col(&scan, "c");
    let filter = PlanNode::filter(
        scan.clone(),
        Condition::with_conjunctions(vec![Predicate::IsNotNull(c)]),
    );
    let fd = filter.functional_dependency();
    assert!(fd.is_determined_by(&ColumnSet::singleton(c), &cols(&scan, &["a", "b"])));
    let key = filter.key().unwrap();
    assert!(key.strict);
    assert_eq!(key.cols, ColumnSet::singleton(c));
    assert_eq!(filter.prune_cols(), &cols(&scan, &["a", "b"]));
}

#[test]
fn test_filter_without_promotion() {
    let config = OptimizerConfig {
        promote_lax_keys: false,
        ..Default::default()
    };
    let t = TestCatalog::with_config(config);
    let scan = PlanNode::scan(t.ctx.clone(), t.abc.clone());
    let c = col(&scan, "c");
    let filter = PlanNode::filter(
        scan.clone(),
        Condition::with_conjunctions(vec![Predicate::IsNotNull(c)]),
    );
    let fd = filter.functional_dependency();
    assert!(fd.not_null_cols().contains(c));
    assert!(!fd.is_determined_by(&ColumnSet::singleton(c), &cols(&scan, &["a", "b"])));
    assert!(!filter.key().unwrap().strict);
}

#[test]
fn test_filter_simplifies_orders() {
    let t = TestCatalog::new();
    let scan = PlanNode::scan(t.ctx.clone(), t.abc.clone());
    let (a, b) = (col(&scan, "a"), col(&scan, "b"));

    let filter = PlanNode::filter(
        scan.clone(),
        Condition::with_conjunctions(vec![Predicate::EqConst(a, 5)]),
    );
    assert_eq!(filter.functional_dependency().constants(), &ColumnSet::singleton(a));
    assert_eq!(orders(&filter), "[b+], [c+]");

    let filter = PlanNode::filter(scan, eq(&[(a, b)]));
    assert_eq!(orders(&filter), "[a+], [c+]");
}

#[test]
fn test_project_computed_column() {
    let t = TestCatalog::new();
    let scan = PlanNode::scan(t.ctx.clone(), t.abc.clone());
    let ab = cols(&scan, &["a", "b"]);
    let sum = ComputedColumn::new(&t.ctx, "a + b", ab.clone());
    let project = PlanNode::project_with_computed(scan, ab.clone(), vec![sum.clone()]);

    assert_eq!(project.output_cols(), &ab.clone().with(sum.id));
    let fd = project.functional_dependency();
    assert!(fd.is_determined_by(&ab, &ColumnSet::singleton(sum.id)));
    assert!(project.key().is_none());
    assert_eq!(orders(&project), "[a+, b+]");
}

#[test]
fn test_left_outer_join() {
    let t = TestCatalog::new();
    let abc = PlanNode::scan(t.ctx.clone(), t.abc.clone());
    let xyz = PlanNode::scan(t.ctx.clone(), t.xyz.clone());
    let (a, x) = (col(&abc, "a"), col(&xyz, "x"));
    let join = PlanNode::join(abc, xyz.clone(), JoinType::LeftOuter, eq(&[(a, x)]));
    let fd = join.functional_dependency();

    assert!(!fd.is_equivalent(a, x));
    assert!(fd.not_null_cols().is_empty());
    let x_set = ColumnSet::singleton(x);
    assert!(!fd.is_determined_by(&x_set, &ColumnSet::singleton(a)));
    assert!(fd.lax_closure(&x_set).contains(a));
    // NULL-extended rows have NULL in all of x, y and z
    assert!(fd.is_determined_by(&cols(&xyz, &["x", "y"]), &cols(&xyz, &["z"])));
    assert!(!join.key().unwrap().strict);
    assert_eq!(orders(&join), "[a+, b+], [c+], [x+, y+]");
}

#[test]
fn test_right_outer_join() {
    let t = TestCatalog::new();
    let abc = PlanNode::scan(t.ctx.clone(), t.abc.clone());
    let xyz = PlanNode::scan(t.ctx.clone(), t.xyz.clone());
    let (a, x) = (col(&abc, "a"), col(&xyz, "x"));
    let join = PlanNode::join(abc, xyz, JoinType::RightOuter, eq(&[(a, x)]));
    let fd = join.functional_dependency();

    let a_set = ColumnSet::singleton(a);
    assert!(fd.lax_closure(&a_set).contains(x));
    assert!(!fd.is_determined_by(&a_set, &ColumnSet::singleton(x)));
    assert!(fd.not_null_cols().contains(x));
}

#[test]
fn test_outer_join_keys() {
    let t = TestCatalog::new();
    let left = PlanNode::scan(t.ctx.clone(), t.xyz.clone());
    let right = PlanNode::scan(t.ctx.clone(), t.xyz.clone());
    let left_ids = left.op().as_scan().unwrap().output_col_ids();
    let right_ids = right.op().as_scan().unwrap().output_col_ids();
    let on = eq(&[(left_ids[0], right_ids[0]), (left_ids[1], right_ids[1])]);
    let expected_key: ColumnSet = [left_ids[0], left_ids[1], right_ids[0], right_ids[1]]
        .into_iter()
        .collect();

    let join = PlanNode::join(left.clone(), right.clone(), JoinType::LeftOuter, on.clone());
    let key = join.key().unwrap();
    assert!(key.strict);
    assert_eq!(key.cols, expected_key);

    let join = PlanNode::join(left.clone(), right.clone(), JoinType::FullOuter, on.clone());
    let key = join.key().unwrap();
    assert!(!key.strict);
    assert!(join.functional_dependency().not_null_cols().is_empty());

    // the left key columns equal the right ones and go first
    let join = PlanNode::join(left, right, JoinType::Inner, on);
    let key = join.key().unwrap();
    assert!(key.strict);
    assert_eq!(key.cols, [right_ids[0], right_ids[1]].into_iter().collect::<ColumnSet>());
}

#[test]
fn test_semi_and_anti_join() {
    let t = TestCatalog::new();
    let abc = PlanNode::scan(t.ctx.clone(), t.abc.clone());
    let xyz = PlanNode::scan(t.ctx.clone(), t.xyz.clone());
    let (a, x) = (col(&abc, "a"), col(&xyz, "x"));

    let semi = PlanNode::join(abc.clone(), xyz.clone(), JoinType::LeftSemi, eq(&[(a, x)]));
    assert_eq!(semi.output_cols(), abc.output_cols());
    assert!(semi.functional_dependency().not_null_cols().contains(a));
    assert!(!semi.key().unwrap().strict);
    assert_eq!(orders(&semi), "[a+, b+], [c+]");
    assert_eq!(semi.prune_cols(), &cols(&abc, &["b", "c"]));

    let anti = PlanNode::join(abc.clone(), xyz, JoinType::LeftAnti, eq(&[(a, x)]));
    assert_eq!(anti.functional_dependency(), abc.functional_dependency());
    assert_eq!(orders(&anti), orders(&abc));
}

#[test]
fn test_scalar_agg() {
    let t = TestCatalog::new();
    let scan = PlanNode::scan(t.ctx.clone(), t.xyz.clone());
    let count = PlanAggCall::count_star(&t.ctx);
    let agg = PlanNode::agg(scan, ColumnSet::new(), vec![count.clone()], None);

    let key = agg.key().unwrap();
    assert!(key.strict);
    assert!(key.cols.is_empty());
    assert_eq!(agg.functional_dependency().constants(), &ColumnSet::singleton(count.output));
    assert!(agg.op().as_agg().unwrap().is_streaming());
}

#[test]
fn test_limit_one() {
    let t = TestCatalog::new();
    let scan = PlanNode::scan(t.ctx.clone(), t.abc.clone());
    let limit = PlanNode::limit(scan.clone(), 1, Order::any());

    assert_eq!(limit.inputs()[0].id(), scan.id());
    assert_eq!(limit.functional_dependency().constants(), scan.output_cols());
    let key = limit.key().unwrap();
    assert!(key.strict && key.cols.is_empty());
    assert!(limit.interesting_orders().is_empty());
}

#[test]
fn test_offset_and_sort() {
    let t = TestCatalog::new();
    let scan = PlanNode::scan(t.ctx.clone(), t.abc.clone());
    let c = col(&scan, "c");

    let offset = PlanNode::offset(scan.clone(), 5, Order::ascending_on([c]));
    assert_eq!(offset.inputs()[0].id(), scan.id());
    assert_eq!(offset.functional_dependency(), scan.functional_dependency());
    assert_eq!(orders(&offset), "[c+]");

    let desc = Order::new(vec![FieldOrder::new(c, Direction::Descending)]);
    let sort = PlanNode::sort(scan.clone(), desc);
    assert_eq!(orders(&sort), "[c-], [a+, b+], [c+]");
    assert_eq!(sort.prune_cols(), &cols(&scan, &["a", "b"]));
}

#[test]
fn test_plan_root_elides_sort() {
    let t = TestCatalog::new();
    let scan = PlanNode::scan(t.ctx.clone(), t.abc.clone());
    let (a, b) = (col(&scan, "a"), col(&scan, "b"));

    let plan = PlanRoot::new(scan.clone(), Order::ascending_on([a])).into_ordered_plan();
    assert_eq!(plan.id(), scan.id());

    let plan = PlanRoot::new(scan.clone(), Order::ascending_on([b, a])).into_ordered_plan();
    assert_eq!(plan.node_name(), "LogicalSort");
}

#[test]
fn test_orders_disabled() {
    let config = OptimizerConfig {
        derive_interesting_orderings: false,
        ..Default::default()
    };
    let t = TestCatalog::with_config(config);
    let scan = PlanNode::scan(t.ctx.clone(), t.abc.clone());
    assert!(scan.interesting_orders().is_empty());
    let plan = PlanRoot::new(scan.clone(), Order::ascending_on([col(&scan, "a")]))
        .into_ordered_plan();
    assert_eq!(plan.node_name(), "LogicalSort");
}

#[test]
fn test_orders_limit() {
    let config = OptimizerConfig {
        max_interesting_orderings: 1,
        ..Default::default()
    };
    let t = TestCatalog::with_config(config);
    let scan = PlanNode::scan(t.ctx.clone(), t.abc.clone());
    assert_eq!(orders(&scan), "[a+, b+]");
}

#[test]
#[should_panic(expected = "dangling column reference")]
fn test_dangling_predicate() {
    let t = TestCatalog::new();
    let abc = PlanNode::scan(t.ctx.clone(), t.abc.clone());
    let xyz = PlanNode::scan(t.ctx.clone(), t.xyz.clone());
    let x = col(&xyz, "x");
    PlanNode::filter(abc, Condition::with_conjunctions(vec![Predicate::IsNotNull(x)]));
}
