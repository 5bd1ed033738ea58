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

use planprop_common::catalog::ColumnId;
use planprop_common::util::sort_util::Direction;
use tracing::trace;

use super::column_set::write_column;
use super::{ColumnSet, FunctionalDependencySet};
use crate::optimizer::plan_node::{generic, PlanNode, PlanRef};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Order {
    pub field_order: Vec<FieldOrder>,
}

impl Order {
    pub const fn new(field_order: Vec<FieldOrder>) -> Self {
        Self { field_order }
    }

    /// Ascending on each of `cols`, in the given order.
    pub fn ascending_on(cols: impl IntoIterator<Item = ColumnId>) -> Self {
        Self::new(cols.into_iter().map(FieldOrder::ascending).collect())
    }

    pub fn len(&self) -> usize {
        self.field_order.len()
    }

    pub fn columns(&self) -> ColumnSet {
        self.field_order.iter().map(|o| o.column).collect()
    }

    /// Drops the columns that cannot break a tie of the columns before them: constants and columns
    /// determined by the preceding ones (equal columns included).
    pub fn simplify(&self, fd: &FunctionalDependencySet) -> Order {
        let mut prefix = ColumnSet::new();
        let mut determined = fd.closure(&prefix);
        let mut field_order = vec![];
        for order in &self.field_order {
            if determined.contains(order.column) {
                continue;
            }
            field_order.push(*order);
            prefix.insert(order.column);
            determined = fd.closure(&prefix);
        }
        Order::new(field_order)
    }

    /// Restricts the order to `cols`. A column outside `cols` is replaced by an equal column in
    /// `cols`, dropped if it is determined by the columns before it, and otherwise ends the order.
    pub fn project(&self, fd: &FunctionalDependencySet, cols: &ColumnSet) -> Order {
        let mut prefix = ColumnSet::new();
        let mut field_order = vec![];
        for order in &self.field_order {
            let column = if cols.contains(order.column) {
                Some(order.column)
            } else {
                fd.equiv_class(order.column).intersect(cols).first()
            };
            match column {
                Some(column) => {
                    field_order.push(FieldOrder::new(column, order.direct));
                    prefix.insert(column);
                }
                None if fd.closure(&prefix).contains(order.column) => {}
                None => break,
            }
        }
        Order::new(field_order)
    }

    /// Replaces `from` by `to`. Returns `None` if `from` is not in the order.
    pub fn relabel(&self, from: ColumnId, to: ColumnId) -> Option<Order> {
        if !self.field_order.iter().any(|o| o.column == from) {
            return None;
        }
        Some(Order::new(
            self.field_order
                .iter()
                .map(|o| {
                    if o.column == from {
                        FieldOrder::new(to, o.direct)
                    } else {
                        *o
                    }
                })
                .collect(),
        ))
    }

    /// Whether rows sorted by `self` are also sorted by `other`, i.e. `other` is a prefix of
    /// `self`.
    pub fn satisfies(&self, other: &Order) -> bool {
        if self.field_order.len() < other.field_order.len() {
            return false;
        }
        self.field_order
            .iter()
            .zip(&other.field_order)
            .all(|(order, other_order)| order == other_order)
    }

    /// Like [`Self::satisfies`], but both orders are simplified under `fd` first and columns are
    /// compared modulo equality.
    pub fn satisfies_with_fd(&self, other: &Order, fd: &FunctionalDependencySet) -> bool {
        let this = self.simplify(fd);
        let other = other.simplify(fd);
        other.len() <= this.len()
            && this
                .field_order
                .iter()
                .zip(&other.field_order)
                .all(|(a, b)| a.direct == b.direct && fd.is_equivalent(a.column, b.column))
    }

    #[inline(always)]
    pub const fn any() -> Self {
        Order {
            field_order: vec![],
        }
    }

    #[inline(always)]
    pub fn is_any(&self) -> bool {
        self.field_order.is_empty()
    }

    pub fn enforce_if_not_satisfies(&self, plan: PlanRef) -> PlanRef {
        if plan
            .interesting_orders()
            .satisfies(self, plan.functional_dependency())
        {
            plan
        } else {
            self.enforce(plan)
        }
    }

    pub fn enforce(&self, plan: PlanRef) -> PlanRef {
        trace!(order = %self, input = plan.id().0, "enforce sort");
        PlanNode::new(generic::Sort::new(plan, self.clone()).into())
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, None)
    }
}

impl Order {
    fn fmt_with(&self, f: &mut fmt::Formatter<'_>, names: Option<&[String]>) -> fmt::Result {
        f.write_str("[")?;
        for (i, field_order) in self.field_order.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write_column(f, field_order.column, names)?;
            write!(f, "{}", field_order.direct.sign())?;
        }
        f.write_str("]")
    }
}

pub struct OrderDisplay<'a> {
    pub order: &'a Order,
    pub names: &'a [String],
}

impl fmt::Display for OrderDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.order.fmt_with(f, Some(self.names))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldOrder {
    pub column: ColumnId,
    pub direct: Direction,
}

impl FieldOrder {
    pub const fn new(column: ColumnId, direct: Direction) -> Self {
        Self { column, direct }
    }

    pub const fn ascending(column: ColumnId) -> Self {
        Self::new(column, Direction::Ascending)
    }

    pub const fn descending(column: ColumnId) -> Self {
        Self::new(column, Direction::Descending)
    }
}

impl fmt::Debug for FieldOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.direct.sign())
    }
}

impl fmt::Display for FieldOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The orders a plan node already provides without sorting, for its ancestors to exploit.
///
/// Orders are stored simplified under the node's [`FunctionalDependencySet`]. None of them is a
/// prefix of another: when an order arrives that is a prefix of a retained one it is dropped, and
/// when it extends retained ones it replaces them at the position of the first. The number of
/// orders is capped; orders found later are dropped first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterestingOrders {
    orders: Vec<Order>,
}

impl InterestingOrders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Adds `order` simplified under `fd`. Returns whether it was retained.
    pub fn add(&mut self, order: &Order, fd: &FunctionalDependencySet, limit: usize) -> bool {
        assert!(
            order.columns().is_subset(fd.cols()),
            "dangling column reference: order {} over columns {}",
            order,
            fd.cols()
        );
        let order = order.simplify(fd);
        if order.is_any() {
            return false;
        }
        if self.orders.iter().any(|o| o.satisfies(&order)) {
            trace!(%order, "order subsumed");
            return false;
        }
        let first_subsumed = self.orders.iter().position(|o| order.satisfies(o));
        self.orders.retain(|o| !order.satisfies(o));
        match first_subsumed {
            Some(pos) => self.orders.insert(pos, order),
            None if self.orders.len() >= limit => {
                trace!(%order, limit, "too many interesting orders");
                return false;
            }
            None => self.orders.push(order),
        }
        true
    }

    pub fn extend<'a>(
        &mut self,
        orders: impl IntoIterator<Item = &'a Order>,
        fd: &FunctionalDependencySet,
        limit: usize,
    ) {
        for order in orders {
            self.add(order, fd, limit);
        }
    }

    /// The first order that satisfies `required`.
    pub fn find(&self, required: &Order, fd: &FunctionalDependencySet) -> Option<&Order> {
        self.orders
            .iter()
            .find(|o| o.satisfies_with_fd(required, fd))
    }

    pub fn satisfies(&self, required: &Order, fd: &FunctionalDependencySet) -> bool {
        required.simplify(fd).is_any() || self.find(required, fd).is_some()
    }

    /// Restricts every order to `cols` with [`Order::project`].
    pub fn project(
        &self,
        input_fd: &FunctionalDependencySet,
        cols: &ColumnSet,
        output_fd: &FunctionalDependencySet,
        limit: usize,
    ) -> Self {
        let mut res = Self::new();
        for order in &self.orders {
            res.add(&order.project(input_fd, cols), output_fd, limit);
        }
        res
    }

    /// Re-simplifies every order under a stronger `fd` over the same columns.
    pub fn simplify(&self, fd: &FunctionalDependencySet, limit: usize) -> Self {
        let mut res = Self::new();
        res.extend(&self.orders, fd, limit);
        res
    }
}
