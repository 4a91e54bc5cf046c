use crate::{
    atom::Atom,
    op::{Operator, Priority},
};
use std::fmt::Display;

/// The operator and operands of a combined [`Node`], in evaluation order.
#[derive(Debug)]
pub struct Child<'a> {
    pub op: Operator,
    pub lhs: &'a Node<'a>,
    pub rhs: &'a Node<'a>,
}

/// An expression built during the search.
///
/// Operands are borrowed rather than owned, so sibling candidates share
/// the sub-expressions they were built from.
#[derive(Debug)]
pub struct Node<'a> {
    pub value: f64,
    pub id: Atom,
    pub child: Option<Child<'a>>,
}

impl<'a> Node<'a> {
    pub fn leaf(value: f64) -> Self {
        Self {
            value,
            id: Atom::Leaf(value),
            child: None,
        }
    }

    /// Combines the operands written as `first` and `second` with `op`.
    pub fn combine(op: Operator, first: &'a Node<'a>, second: &'a Node<'a>) -> Self {
        let (lhs, rhs) = op.arrange(first, second);
        Self {
            value: op.op.eval(lhs.value, rhs.value),
            id: op.op.combine(lhs.id.clone(), rhs.id.clone()),
            child: Some(Child { op, lhs, rhs }),
        }
    }

    /// Priority of the operator at the root, `None` for a leaf.
    pub fn priority(&self) -> Option<Priority> {
        self.child.as_ref().map(|child| child.op.priority())
    }

    /// Operand values in the order they are printed.
    pub fn leaves(&self) -> Vec<f64> {
        let mut leaves = Vec::new();
        self.collect_leaves(&mut leaves);
        leaves
    }

    fn collect_leaves(&self, leaves: &mut Vec<f64>) {
        match &self.child {
            Some(child) => {
                child.lhs.collect_leaves(leaves);
                child.rhs.collect_leaves(leaves);
            }
            None => leaves.push(self.value),
        }
    }

    fn fmt_operand(&self, f: &mut std::fmt::Formatter<'_>, parent: Priority) -> std::fmt::Result {
        if self.priority().is_some_and(|priority| priority < parent) {
            write!(f, "({self})")
        } else {
            write!(f, "{self}")
        }
    }
}

impl Display for Node<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.child {
            Some(child) => {
                let priority = child.op.priority();
                child.lhs.fmt_operand(f, priority)?;
                write!(f, "{}", child.op)?;
                child.rhs.fmt_operand(f, priority)
            }
            None => {
                if self.value < 0. {
                    write!(f, "({:.0})", self.value)
                } else {
                    write!(f, "{:.0}", self.value)
                }
            }
        }
    }
}
