use crate::atom::{self, Atom};
use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    High,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    pub fn priority(self) -> Priority {
        match self {
            Op::Add | Op::Sub => Priority::Low,
            Op::Mul | Op::Div => Priority::High,
        }
    }

    /// `true` for `+` and `*`, whose operands can be swapped freely.
    pub fn is_commutative(self) -> bool {
        matches!(self, Op::Add | Op::Mul)
    }

    pub fn eval(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Op::Add => lhs + rhs,
            Op::Sub => lhs - rhs,
            Op::Mul => lhs * rhs,
            Op::Div => lhs / rhs,
        }
    }

    pub fn combine(self, lhs: Atom, rhs: Atom) -> Atom {
        atom::combine(self, lhs, rhs)
    }
}

impl Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Op::Add => '+',
                Op::Sub => '-',
                Op::Mul => '*',
                Op::Div => '/',
            }
        )
    }
}

/// An operator together with the order its operands are taken in.
///
/// A reversed operator is applied to `(second, first)` instead of
/// `(first, second)`. Only `-` and `/` have a reversed form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Operator {
    pub op: Op,
    pub reverse: bool,
}

pub const OPERATORS: [Operator; 6] = [
    Operator::forward(Op::Add),
    Operator::forward(Op::Sub),
    Operator::forward(Op::Mul),
    Operator::forward(Op::Div),
    Operator::reversed(Op::Sub),
    Operator::reversed(Op::Div),
];

impl Operator {
    pub const fn forward(op: Op) -> Self {
        Self { op, reverse: false }
    }

    pub const fn reversed(op: Op) -> Self {
        Self { op, reverse: true }
    }

    pub fn priority(self) -> Priority {
        self.op.priority()
    }

    /// Puts the operands written as `(first, second)` into evaluation order.
    pub fn arrange<T>(self, first: T, second: T) -> (T, T) {
        if self.reverse {
            (second, first)
        } else {
            (first, second)
        }
    }

    pub fn eval(self, first: f64, second: f64) -> f64 {
        let (lhs, rhs) = self.arrange(first, second);
        self.op.eval(lhs, rhs)
    }

    pub fn combine(self, first: Atom, second: Atom) -> Atom {
        let (lhs, rhs) = self.arrange(first, second);
        self.op.combine(lhs, rhs)
    }
}

impl Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.op, f)
    }
}
