//! Dual-variable power series used by every backward equation.
//!
//! Each IF97 backward equation has the shape
//!
//! ```text
//! out = out* · Σ nᵢ (x − x₀)^Iᵢ (y − y₀)^Jᵢ,   x = p/p*,  y = h/h*
//! ```
//!
//! with integer (possibly negative) exponents. Terms are summed in table order so
//! results reproduce the published verification values to the last printed digit.

/// One term of a backward equation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    pub i: i32,
    pub j: i32,
    pub n: f64,
}

/// Shorthand for writing coefficient tables.
pub(crate) const fn term(i: i32, j: i32, n: f64) -> Term {
    Term { i, j, n }
}

/// A coefficient table together with its reducing constants.
#[derive(Debug, Clone, Copy)]
pub struct PolyTable {
    pub terms: &'static [Term],
    /// Reducing pressure [MPa]: `x = p / p_star`.
    pub p_star: f64,
    /// Reducing enthalpy [kJ/kg]: `y = h / h_star`.
    pub h_star: f64,
    pub x0: f64,
    pub y0: f64,
    /// Output multiplier (T*, v* or p*).
    pub out_star: f64,
}

impl PolyTable {
    /// Evaluate at already-reduced coordinates.
    pub fn eval_reduced(&self, x: f64, y: f64) -> f64 {
        let bx = x - self.x0;
        let by = y - self.y0;
        let sum = self
            .terms
            .iter()
            .fold(0.0, |acc, t| acc + t.n * bx.powi(t.i) * by.powi(t.j));
        self.out_star * sum
    }

    /// Evaluate at pressure [MPa] and specific enthalpy [kJ/kg].
    pub fn eval(&self, p: f64, h: f64) -> f64 {
        self.eval_reduced(p / self.p_star, h / self.h_star)
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

/// Single-variable polynomial `Σ cₖ x^k`, coefficients in ascending power.
#[derive(Debug, Clone, Copy)]
pub struct ScalarPoly {
    pub coeffs: &'static [f64],
}

impl ScalarPoly {
    pub fn eval(&self, x: f64) -> f64 {
        let mut sum = 0.0;
        let mut xk = 1.0;
        for c in self.coeffs {
            sum += c * xk;
            xk *= x;
        }
        sum
    }
}
