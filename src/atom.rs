//! Canonical identities of expressions.
//!
//! An [`Atom`] is either an input operand or a [`Group`] of terms joined by
//! operators of one priority. Groups flatten nested groups of the same
//! priority, so `(a+b)+c`, `a+(b+c)` and `c+(b+a)` all end up as the same
//! multiset of terms and compare equal.

use crate::op::{Op, Priority};
use std::{
    fmt::Display,
    ops::{Add, Div, Mul, Sub},
    rc::Rc,
};

/// Two operand values closer than this are the same leaf.
pub const TOLERANCE: f64 = 0.01;

#[derive(Clone, Debug)]
pub enum Atom {
    Leaf(f64),
    Group(Rc<Group>),
}

#[derive(Debug)]
pub struct Group {
    priority: Priority,
    terms: Vec<Term>,
}

/// One member of a [`Group`].
///
/// `symmetrical` is `true` for an added or multiplied term and `false` for a
/// subtracted or divided one.
#[derive(Clone, Debug)]
pub struct Term {
    pub symmetrical: bool,
    pub atom: Atom,
    pub count: usize,
}

impl From<Group> for Atom {
    fn from(value: Group) -> Self {
        Self::Group(value.into())
    }
}

impl Term {
    fn new(atom: Atom, symmetrical: bool) -> Self {
        Self {
            symmetrical,
            atom,
            count: 1,
        }
    }
}

impl Group {
    fn new(priority: Priority) -> Self {
        Self {
            priority,
            terms: Vec::new(),
        }
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Adds `term`, flattening it first when it is a group of the same
    /// priority. Flattened terms keep their sign when `term` is symmetrical
    /// and have it flipped otherwise.
    fn insert(mut self, term: Term) -> Self {
        if let Atom::Group(group) = &term.atom {
            if group.priority == self.priority {
                for inner in &group.terms {
                    self.push(Term {
                        symmetrical: inner.symmetrical == term.symmetrical,
                        atom: inner.atom.clone(),
                        count: inner.count,
                    });
                }
                return self;
            }
        }
        self.push(term);
        self
    }

    fn push(&mut self, term: Term) {
        match self
            .terms
            .iter_mut()
            .find(|t| t.symmetrical == term.symmetrical && t.atom == term.atom)
        {
            Some(existing) => existing.count += term.count,
            None => self.terms.push(term),
        }
    }

    fn contains(&self, term: &Term) -> bool {
        self.terms.iter().any(|t| t == term)
    }
}

impl PartialEq for Term {
    fn eq(&self, other: &Self) -> bool {
        self.symmetrical == other.symmetrical
            && self.count == other.count
            && self.atom == other.atom
    }
}

impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
            && self.terms.len() == other.terms.len()
            && self.terms.iter().all(|t| other.contains(t))
            && other.terms.iter().all(|t| self.contains(t))
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Atom::Leaf(lhs), Atom::Leaf(rhs)) => (lhs - rhs).abs() < TOLERANCE,
            (Atom::Group(lhs), Atom::Group(rhs)) => Rc::ptr_eq(lhs, rhs) || lhs == rhs,
            _ => false,
        }
    }
}

/// Identity of `lhs op rhs`, operands already in evaluation order.
///
/// `rhs` is added or multiplied for a commutative `op`, subtracted or
/// divided otherwise.
pub(crate) fn combine(op: Op, lhs: Atom, rhs: Atom) -> Atom {
    Group::new(op.priority())
        .insert(Term::new(lhs, true))
        .insert(Term::new(rhs, op.is_commutative()))
        .into()
}

impl Add for Atom {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        combine(Op::Add, self, rhs)
    }
}

impl Sub for Atom {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        combine(Op::Sub, self, rhs)
    }
}

impl Mul for Atom {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        combine(Op::Mul, self, rhs)
    }
}

impl Div for Atom {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        combine(Op::Div, self, rhs)
    }
}

impl Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Atom::Leaf(value) if *value < 0. => write!(f, "({value:.0})"),
            Atom::Leaf(value) => write!(f, "{value:.0}"),
            Atom::Group(group) => {
                write!(f, "(")?;
                for term in &group.terms {
                    let symbol = match (group.priority, term.symmetrical) {
                        (Priority::Low, true) => '+',
                        (Priority::Low, false) => '-',
                        (Priority::High, true) => '*',
                        (Priority::High, false) => '/',
                    };
                    for _ in 0..term.count {
                        write!(f, "{symbol}{}", term.atom)?;
                    }
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Atom;
    use crate::op::Priority;

    fn leaf(value: f64) -> Atom {
        Atom::Leaf(value)
    }

    #[test]
    fn commutative() {
        let (a, b) = (leaf(3.), leaf(7.));
        assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        assert_eq!(a.clone() * b.clone(), b * a);
    }

    #[test]
    fn ordered() {
        let (a, b) = (leaf(3.), leaf(7.));
        assert_ne!(a.clone() - b.clone(), b.clone() - a.clone());
        assert_ne!(a.clone() / b.clone(), b.clone() / a.clone());
        assert_eq!(a.clone() - a.clone(), a.clone() - a.clone());
        assert_ne!(a.clone() + b.clone(), a * b);
    }

    #[test]
    fn associative() {
        let (a, b, c) = (leaf(1.), leaf(2.), leaf(3.));
        assert_eq!(
            (a.clone() + b.clone()) + c.clone(),
            a.clone() + (b.clone() + c.clone())
        );
        assert_eq!(
            (a.clone() * b.clone()) * c.clone(),
            c.clone() * (b.clone() * a.clone())
        );
        assert_ne!((a.clone() + b.clone()) * c.clone(), a + (b * c));
    }

    #[test]
    fn distributes_sign() {
        let (a, b, c) = (leaf(1.), leaf(2.), leaf(3.));
        assert_eq!(
            a.clone() - (b.clone() - c.clone()),
            (a.clone() - b.clone()) + c.clone()
        );
        assert_eq!(
            a.clone() - (b.clone() + c.clone()),
            (a.clone() - b.clone()) - c.clone()
        );
        assert_eq!(
            a.clone() / (b.clone() / c.clone()),
            (a.clone() / b.clone()) * c.clone()
        );
        assert_ne!(a.clone() - (b.clone() - c.clone()), (a - b) - c);
    }

    #[test]
    fn repeated_terms() {
        let (a, b) = (leaf(5.), leaf(2.));
        let twice = a.clone() + a.clone();
        let Atom::Group(group) = &twice else {
            panic!("expected a group");
        };
        assert_eq!(group.priority(), Priority::Low);
        assert_eq!(group.terms().len(), 1);
        assert_eq!(group.terms()[0].count, 2);

        assert_eq!(
            twice + (a.clone() + b.clone()),
            a.clone() + (a.clone() + (a.clone() + b.clone()))
        );
        assert_ne!(a.clone() + a.clone() + b.clone(), a + b.clone() + b);
    }

    #[test]
    fn leaf_tolerance() {
        assert_eq!(leaf(4.), leaf(4.001));
        assert_ne!(leaf(4.), leaf(4.5));
        assert_ne!(leaf(4.), leaf(2.) + leaf(2.));
    }

    #[test]
    fn display() {
        let id = leaf(8.) / (leaf(3.) - leaf(8.) / leaf(3.));
        assert_eq!(id.to_string(), "(*8/(+3-(*8/3)))");
        assert_eq!((leaf(-1.) + leaf(-1.)).to_string(), "(+(-1)+(-1))");
    }
}
