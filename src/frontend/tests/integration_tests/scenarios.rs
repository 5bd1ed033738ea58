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

use planprop_frontend::optimizer::plan_node::generic::{AggKind, JoinType, PlanAggCall};
use planprop_frontend::optimizer::property::{ColumnSet, Order};
use planprop_frontend::utils::{Condition, Predicate};
use planprop_frontend::PlanNode;

use crate::{col, cols, orders, TestCatalog};

#[test]
fn test_full_scan() {
    let t = TestCatalog::new();
    let scan = PlanNode::scan(t.ctx.clone(), t.abc.clone());
    let fd = scan.functional_dependency();

    let key = scan.key().unwrap();
    assert!(!key.strict);
    assert_eq!(key.cols, cols(&scan, &["a", "b", "c"]));
    assert!(!fd.is_strict_key(&cols(&scan, &["a", "b", "c"])));
    assert!(fd.is_lax_key(&cols(&scan, &["a", "b", "c"])));

    let c = ColumnSet::singleton(col(&scan, "c"));
    assert!(!fd.is_determined_by(&c, &cols(&scan, &["a", "b"])));
    assert!(fd.lax_closure(&c).is_superset(&cols(&scan, &["a", "b"])));
    assert_eq!(fd.dependencies().len(), 1);

    assert_eq!(orders(&scan), "[a+, b+], [c+]");
    assert_eq!(scan.prune_cols(), &cols(&scan, &["a", "b", "c"]));
}

#[test]
fn test_project_scan() {
    let t = TestCatalog::new();
    let scan = PlanNode::scan(t.ctx.clone(), t.abc.clone());
    let project = PlanNode::project(scan.clone(), cols(&scan, &["a", "c"]));
    let fd = project.functional_dependency();

    let key = project.key().unwrap();
    assert!(!key.strict);
    assert_eq!(key.cols, cols(&scan, &["a", "c"]));
    let (a, c) = (col(&scan, "a"), col(&scan, "c"));
    let dep = &fd.dependencies()[0];
    assert_eq!(fd.dependencies().len(), 1);
    assert!(!dep.strict);
    assert_eq!(dep.from, ColumnSet::singleton(c));
    assert_eq!(dep.to, ColumnSet::singleton(a));

    assert_eq!(orders(&project), "[a+], [c+]");
}

#[test]
fn test_group_by_with_required_order() {
    let t = TestCatalog::new();
    let scan = PlanNode::scan(t.ctx.clone(), t.abc.clone());
    let a = col(&scan, "a");
    let count = PlanAggCall::count_star(&t.ctx);
    let agg = PlanNode::agg(
        scan,
        ColumnSet::singleton(a),
        vec![count.clone()],
        Some(Order::ascending_on([a])),
    );

    let core = agg.op().as_agg().unwrap();
    assert!(core.input_order_satisfied);
    assert!(core.is_streaming());
    let key = agg.key().unwrap();
    assert!(key.strict);
    assert_eq!(key.cols, ColumnSet::singleton(a));
    assert!(agg.functional_dependency().not_null_cols().contains(count.output));
    assert_eq!(orders(&agg), "[a+]");
    assert_eq!(agg.prune_cols(), &ColumnSet::singleton(count.output));
}

#[test]
fn test_group_by_without_required_order() {
    let t = TestCatalog::new();
    let scan = PlanNode::scan(t.ctx.clone(), t.abc.clone());
    let sum = PlanAggCall::new(&t.ctx, AggKind::Sum, vec![col(&scan, "c")]);

    // (a, b) is the leading prefix of an index order
    let agg = PlanNode::agg(scan.clone(), cols(&scan, &["b", "a"]), vec![sum.clone()], None);
    let core = agg.op().as_agg().unwrap();
    assert!(core.is_streaming());
    assert_eq!(orders(&agg), "[a+, b+]");
    assert!(!agg.functional_dependency().not_null_cols().contains(sum.output));

    // no order groups b alone
    let sum = PlanAggCall::new(&t.ctx, AggKind::Sum, vec![col(&scan, "c")]);
    let agg = PlanNode::agg(scan.clone(), cols(&scan, &["b"]), vec![sum], None);
    let core = agg.op().as_agg().unwrap();
    assert!(!core.is_streaming());
    assert_eq!(core.input_order, Order::ascending_on([col(&scan, "b")]));
    assert!(agg.interesting_orders().is_empty());
}

#[test]
fn test_inner_join_orders() {
    let t = TestCatalog::new();
    let abc = PlanNode::scan(t.ctx.clone(), t.abc.clone());
    let xyz = PlanNode::scan(t.ctx.clone(), t.xyz.clone());
    let (a, x) = (col(&abc, "a"), col(&xyz, "x"));
    let join = PlanNode::join(
        abc,
        xyz,
        JoinType::Inner,
        Condition::with_conjunctions(vec![Predicate::Eq(a, x)]),
    );

    assert_eq!(
        orders(&join),
        "[a+, b+], [c+], [x+, y+], [x+, b+], [a+, y+]"
    );
    let fd = join.functional_dependency();
    assert!(fd.is_equivalent(a, x));
    assert!(fd.not_null_cols().contains(a));

    let key = join.key().unwrap();
    assert!(!key.strict);
    assert_eq!(key.cols, cols(&join, &["b", "c", "x", "y"]));
}

#[test]
fn test_order_by_limit() {
    let t = TestCatalog::new();
    let scan = PlanNode::scan(t.ctx.clone(), t.abc.clone());
    let b = col(&scan, "b");
    let limit = PlanNode::limit(scan.clone(), 10, Order::ascending_on([b]));

    let inputs = limit.inputs();
    let sort = &inputs[0];
    assert!(sort.op().as_sort().is_some());
    assert_eq!(sort.inputs()[0].id(), scan.id());
    assert_eq!(orders(sort), "[b+], [a+, b+], [c+]");
    assert_eq!(orders(&limit), "[b+]");
    assert_eq!(limit.prune_cols(), &cols(&scan, &["a", "c"]));
}
