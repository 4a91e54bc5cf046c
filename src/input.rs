//! Collecting puzzle operands from lines of user input.

use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("invalid input")]
    InvalidOperand {
        token: String,
        #[source]
        source: ParseIntError,
    },
}

/// Gathers integers until a full puzzle of `count` operands is available.
///
/// Operands may span several lines, and whatever is left over after a
/// puzzle is completed starts the next one.
#[derive(Debug)]
pub struct Operands {
    count: usize,
    pending: Vec<isize>,
}

impl Operands {
    pub fn new(count: usize) -> Self {
        Self {
            count: count.max(1),
            pending: Vec::with_capacity(count),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Operands read so far for the puzzle in progress.
    pub fn pending(&self) -> &[isize] {
        &self.pending
    }

    /// Consumes one line and returns every puzzle it completes, in order.
    ///
    /// A token that is not an integer drops the rest of the line together
    /// with the puzzle in progress.
    pub fn feed(&mut self, line: &str) -> Vec<Result<Vec<isize>, InputError>> {
        let mut puzzles = Vec::new();
        for token in line.split_whitespace() {
            match token.parse() {
                Ok(n) => {
                    self.pending.push(n);
                    if self.pending.len() == self.count {
                        puzzles.push(Ok(std::mem::take(&mut self.pending)));
                    }
                }
                Err(source) => {
                    self.pending.clear();
                    puzzles.push(Err(InputError::InvalidOperand {
                        token: token.to_owned(),
                        source,
                    }));
                    break;
                }
            }
        }
        puzzles
    }
}
