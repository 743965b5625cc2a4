//! Dense two-phase tableau simplex.
//!
//! Phase one drives the artificial variables out of the basis to find a
//! basic feasible solution, phase two optimizes the real objective from
//! there. Bland's rule picks entering and leaving variables, so the method
//! terminates on degenerate problems too.

use thiserror::Error;

/// Direction of the objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sense {
    Maximize,
    Minimize,
}

/// Relation between a constraint's left-hand side and its bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    LessEq,
    GreaterEq,
}

/// `coefficients · x (<= | >=) rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    pub coefficients: Vec<f64>,
    pub relation: Relation,
    pub rhs: f64,
}

/// Optimize `objective · x` subject to the constraints and `x >= 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearProgram {
    pub sense: Sense,
    pub objective: Vec<f64>,
    pub constraints: Vec<Constraint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub x: Vec<f64>,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimplexOptions {
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for SimplexOptions {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            tolerance: 1e-9,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LpError {
    #[error("problem is infeasible")]
    Infeasible,

    #[error("objective is unbounded")]
    Unbounded,

    #[error("iteration limit of {0} reached")]
    IterationLimit(usize),

    #[error("constraint {row} has {found} coefficients, expected {expected}")]
    Dimension { row: usize, found: usize, expected: usize },
}

/// Constraint rows with the right-hand side in the last column.
struct Tableau {
    rows: Vec<Vec<f64>>,
    basis: Vec<usize>,
    /// First artificial column; columns from here to the rhs are artificial.
    artificial_start: usize,
    iterations: usize,
    options: SimplexOptions,
}

enum Outcome {
    Optimal,
    Unbounded,
}

impl Tableau {
    fn rhs_col(&self) -> usize {
        self.rows.first().map(|r| r.len() - 1).unwrap_or(self.artificial_start)
    }

    fn value(&self, cost: &[f64]) -> f64 {
        let rhs = self.rhs_col();
        self.basis
            .iter()
            .zip(&self.rows)
            .map(|(&b, row)| cost[b] * row[rhs])
            .sum()
    }

    fn pivot(&mut self, row: usize, col: usize) {
        let factor = self.rows[row][col];
        for v in self.rows[row].iter_mut() {
            *v /= factor;
        }
        let pivot_row = self.rows[row].clone();
        for (i, other) in self.rows.iter_mut().enumerate() {
            if i == row {
                continue;
            }
            let ratio = other[col];
            if ratio != 0.0 {
                for (v, p) in other.iter_mut().zip(&pivot_row) {
                    *v -= ratio * p;
                }
            }
        }
        self.basis[row] = col;
    }

    /// Maximizes `cost` over the columns below `allowed`.
    fn optimize(&mut self, cost: &[f64], allowed: usize) -> Result<Outcome, LpError> {
        let tol = self.options.tolerance;
        let rhs = self.rhs_col();
        loop {
            let entering = (0..allowed).find(|&j| {
                let reduced = cost[j]
                    - self
                        .basis
                        .iter()
                        .zip(&self.rows)
                        .map(|(&b, row)| cost[b] * row[j])
                        .sum::<f64>();
                reduced > tol
            });
            let Some(col) = entering else {
                return Ok(Outcome::Optimal);
            };

            let mut leaving: Option<(usize, f64)> = None;
            for (i, row) in self.rows.iter().enumerate() {
                if row[col] <= tol {
                    continue;
                }
                let ratio = row[rhs] / row[col];
                let better = match leaving {
                    None => true,
                    Some((best, best_ratio)) => {
                        ratio < best_ratio - tol
                            || ((ratio - best_ratio).abs() <= tol && self.basis[i] < self.basis[best])
                    }
                };
                if better {
                    leaving = Some((i, ratio));
                }
            }
            let Some((row, _)) = leaving else {
                return Ok(Outcome::Unbounded);
            };

            if self.iterations >= self.options.max_iterations {
                return Err(LpError::IterationLimit(self.options.max_iterations));
            }
            self.iterations += 1;
            self.pivot(row, col);
        }
    }
}

impl LinearProgram {
    /// Solves the program.
    ///
    /// # Errors
    ///
    /// - `Dimension` if a constraint's length differs from the objective's.
    /// - `Infeasible` if no `x >= 0` satisfies every constraint.
    /// - `Unbounded` if the objective grows without limit.
    /// - `IterationLimit` if the pivots exceed `options.max_iterations`.
    pub fn solve(&self, options: SimplexOptions) -> Result<Solution, LpError> {
        let n = self.objective.len();
        let m = self.constraints.len();
        if let Some((row, c)) = self
            .constraints
            .iter()
            .enumerate()
            .find(|(_, c)| c.coefficients.len() != n)
        {
            return Err(LpError::Dimension {
                row,
                found: c.coefficients.len(),
                expected: n,
            });
        }

        // Normalize every row to a non-negative right-hand side.
        let rows: Vec<(Vec<f64>, Relation, f64)> = self
            .constraints
            .iter()
            .map(|c| {
                if c.rhs < 0.0 {
                    let flipped = match c.relation {
                        Relation::LessEq => Relation::GreaterEq,
                        Relation::GreaterEq => Relation::LessEq,
                    };
                    (c.coefficients.iter().map(|v| -v).collect(), flipped, -c.rhs)
                } else {
                    (c.coefficients.clone(), c.relation, c.rhs)
                }
            })
            .collect();

        // Columns: originals, one slack or surplus per row, artificials for >= rows.
        let artificial_count = rows
            .iter()
            .filter(|(_, relation, _)| *relation == Relation::GreaterEq)
            .count();
        let artificial_start = n + m;
        let width = artificial_start + artificial_count + 1;

        let mut table = Vec::with_capacity(m);
        let mut basis = Vec::with_capacity(m);
        let mut next_artificial = artificial_start;
        for (i, (coefficients, relation, rhs)) in rows.into_iter().enumerate() {
            let mut row = vec![0.0; width];
            row[..n].copy_from_slice(&coefficients);
            row[width - 1] = rhs;
            match relation {
                Relation::LessEq => {
                    row[n + i] = 1.0;
                    basis.push(n + i);
                }
                Relation::GreaterEq => {
                    row[n + i] = -1.0;
                    row[next_artificial] = 1.0;
                    basis.push(next_artificial);
                    next_artificial += 1;
                }
            }
            table.push(row);
        }

        let mut tableau = Tableau {
            rows: table,
            basis,
            artificial_start,
            iterations: 0,
            options,
        };
        let tol = options.tolerance;

        if artificial_count > 0 {
            let mut phase_one = vec![0.0; width - 1];
            for c in phase_one.iter_mut().skip(artificial_start) {
                *c = -1.0;
            }
            tableau.optimize(&phase_one, width - 1)?;
            if tableau.value(&phase_one) < -tol {
                return Err(LpError::Infeasible);
            }
            // Drive zero-level artificials out where a real column allows it.
            for row in 0..m {
                if tableau.basis[row] < artificial_start {
                    continue;
                }
                if let Some(col) = (0..artificial_start).find(|&j| tableau.rows[row][j].abs() > tol) {
                    tableau.pivot(row, col);
                }
            }
        }

        let mut cost = vec![0.0; width - 1];
        for (c, o) in cost.iter_mut().zip(&self.objective) {
            *c = match self.sense {
                Sense::Maximize => *o,
                Sense::Minimize => -o,
            };
        }
        if let Outcome::Unbounded = tableau.optimize(&cost, artificial_start)? {
            return Err(LpError::Unbounded);
        }

        let rhs = tableau.rhs_col();
        let mut x = vec![0.0; n];
        for (&b, row) in tableau.basis.iter().zip(&tableau.rows) {
            // pivoting leaves round-off on basic variables that should be zero
            if b < n && row[rhs].abs() > tol {
                x[b] = row[rhs];
            }
        }
        let value = x.iter().zip(&self.objective).map(|(x, c)| x * c).sum();
        Ok(Solution { x, value })
    }
}
