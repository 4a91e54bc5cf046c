//! Enumerates the arithmetic expressions that combine a multiset of integers
//! into a target value with `+`, `-`, `*` and `/`.
//!
//! Each operand is used exactly once. Expressions that only differ by the
//! order of commutative operands, by regrouping, or by how a subtraction or
//! division is written down are considered the same solution and reported
//! once.
//!
//! ```
//! let solutions = exprsolve::solve(&[8., 8., 3., 3.], 24.);
//! assert!(solutions.iter().any(|s| s.expr == "8/(3-8/3)"));
//! ```

pub mod atom;
pub mod input;
pub mod node;
pub mod op;
pub mod solver;

pub use atom::{Atom, TOLERANCE};
pub use node::Node;
pub use op::{Op, Operator, Priority, OPERATORS};
pub use solver::{solve, Registry, Solution, Solver, SolverConfig, Stats};
