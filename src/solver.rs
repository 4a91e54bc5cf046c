//! Exhaustive search for expressions that reach a target value.

use crate::{
    atom::{Atom, TOLERANCE},
    node::Node,
    op::{Operator, OPERATORS},
};
use log::{debug, trace, warn};
use std::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolverConfig {
    /// Value every solution has to evaluate to.
    pub target: f64,
    /// Largest distance from `target` still accepted as a hit.
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            target: 24.,
            tolerance: TOLERANCE,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Solution {
    /// Rendered infix expression.
    pub expr: String,
    pub value: f64,
    pub id: Atom,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Fully reduced expressions examined, duplicates included.
    pub candidates: usize,
    pub solutions: usize,
}

/// Canonical identities of the solutions found so far.
#[derive(Debug, Default)]
pub struct Registry {
    ids: Vec<Atom>,
}

impl Registry {
    pub fn contains(&self, id: &Atom) -> bool {
        self.ids.iter().any(|seen| seen == id)
    }

    /// Records `id`, returning `false` if an equal identity was already seen.
    pub fn insert(&mut self, id: &Atom) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.clone());
        true
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[derive(Debug, Default)]
pub struct Solver {
    config: SolverConfig,
    registry: Registry,
    stats: Stats,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solutions of the most recent search.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn solve(&mut self, operands: &[f64]) -> Vec<Solution> {
        let mut solutions = Vec::new();
        self.solve_with(operands, |solution| solutions.push(solution));
        solutions
    }

    /// Runs a fresh search over `operands`, handing every distinct solution
    /// to `emit` as soon as it is found.
    pub fn solve_with<F: FnMut(Solution)>(&mut self, operands: &[f64], mut emit: F) -> Stats {
        self.registry.clear();
        self.stats = Stats::default();
        if operands.is_empty() {
            warn!("nothing to solve: no operands given");
            return self.stats;
        }

        let start = Instant::now();
        let leaves: Vec<Node> = operands.iter().map(|&value| Node::leaf(value)).collect();
        self.search(leaves.iter().collect(), &mut emit);
        debug!(
            "{:?} -> {}: {} solutions out of {} candidates in {:?}",
            operands,
            self.config.target,
            self.stats.solutions,
            self.stats.candidates,
            start.elapsed()
        );
        self.stats
    }

    fn search<F: FnMut(Solution)>(&mut self, exprs: Vec<&Node>, emit: &mut F) {
        if exprs.len() == 1 {
            let expr = exprs[0];
            self.stats.candidates += 1;
            if (expr.value - self.config.target).abs() < self.config.tolerance
                && self.registry.insert(&expr.id)
            {
                self.stats.solutions += 1;
                let solution = Solution {
                    expr: expr.to_string(),
                    value: expr.value,
                    id: expr.id.clone(),
                };
                trace!(
                    "found {} from {:?} as {}",
                    solution.expr,
                    expr.leaves(),
                    solution.id
                );
                emit(solution);
            }
            return;
        }

        for i in 0..exprs.len() {
            for j in i + 1..exprs.len() {
                for op in OPERATORS {
                    if redundant(op, exprs[i], exprs[j]) {
                        continue;
                    }
                    let new = Node::combine(op, exprs[i], exprs[j]);
                    let mut next = Vec::with_capacity(exprs.len() - 1);
                    next.push(&new);
                    next.extend(
                        exprs
                            .iter()
                            .enumerate()
                            .filter(|&(k, _)| k != i && k != j)
                            .map(|(_, &expr)| expr),
                    );
                    self.search(next, emit);
                }
            }
        }
    }
}

/// A combination whose right-hand operand already has the operator's
/// priority is equivalent to a left-leaning one built from the same
/// operands, which the search reaches anyway.
fn redundant(op: Operator, first: &Node, second: &Node) -> bool {
    let (_, rhs) = op.arrange(first, second);
    rhs.priority() == Some(op.priority())
}

/// Every distinct way to combine `operands` into `target`.
pub fn solve(operands: &[f64], target: f64) -> Vec<Solution> {
    Solver::new(SolverConfig {
        target,
        ..Default::default()
    })
    .solve(operands)
}
