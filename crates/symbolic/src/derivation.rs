//! Quadratic model of vertical displacement and the derived landing-time formula.

/// Polynomial `a·t² + b·t + c` in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quadratic {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Quadratic {
    /// Vertical displacement `v0·sin(θ)·t − ½·g·t²` of a projectile.
    pub fn vertical_displacement(v0: f64, theta: f64, g: f64) -> Self {
        Self {
            a: -0.5 * g,
            b: v0 * theta.sin(),
            c: 0.0,
        }
    }

    /// Evaluate the polynomial at `t`.
    #[inline]
    pub fn eval(&self, t: f64) -> f64 {
        (self.a * t + self.b) * t + self.c
    }

    /// Roots of `t·(a·t + b) = 0` in solve order: the trivial root first.
    ///
    /// Returns `None` unless the constant term vanishes and `a` is non-zero.
    pub fn factored_roots(&self) -> Option<[f64; 2]> {
        if self.c != 0.0 || self.a == 0.0 {
            return None;
        }
        Some([0.0, -self.b / self.a])
    }
}

/// Compiled closed form of the landing root, `t = 2·v0·sin(θ)/g`.
#[derive(Debug, Clone, Copy)]
pub struct DerivedFormula {
    expression: &'static str,
    evaluator: fn(f64, f64, f64) -> f64,
}

impl DerivedFormula {
    /// Derive the landing-time formula.
    ///
    /// Factoring `t` out of the displacement leaves `a·t + b = 0`, so the
    /// landing root is `−b/a = v0·sin(θ) / (½·g)`.
    pub fn derive() -> Self {
        Self {
            expression: "2*v0*sin(theta)/g",
            evaluator: landing_root,
        }
    }

    /// Evaluate the formula; callers guard `g == 0`.
    #[inline]
    pub fn evaluate(&self, v0: f64, theta: f64, g: f64) -> f64 {
        (self.evaluator)(v0, theta, g)
    }

    /// Both roots of the displacement equation, launch first, from its factored quadratic.
    ///
    /// `None` when `g == 0`, where the displacement is linear and never returns to zero.
    pub fn roots(&self, v0: f64, theta: f64, g: f64) -> Option<[f64; 2]> {
        Quadratic::vertical_displacement(v0, theta, g).factored_roots()
    }

    /// Closed form as text.
    pub fn describe(&self) -> &'static str {
        self.expression
    }
}

// non-trivial root of the factored displacement, `-b/a`
fn landing_root(v0: f64, theta: f64, g: f64) -> f64 {
    let quad = Quadratic::vertical_displacement(v0, theta, g);
    -quad.b / quad.a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factored_root_matches_closed_form() {
        let (v0, theta, g) = (20.0, 45f64.to_radians(), 9.81);
        let quad = Quadratic::vertical_displacement(v0, theta, g);
        let [launch, landing] = quad.factored_roots().expect("roots");
        let formula = DerivedFormula::derive();
        assert_eq!(launch, 0.0);
        assert!((landing - formula.evaluate(v0, theta, g)).abs() < 1e-12);
        assert!(quad.eval(landing).abs() < 1e-9);
    }

    #[test]
    fn compiled_formula_agrees_with_factored_landing_root() {
        let formula = DerivedFormula::derive();
        for (v0, deg, g) in [(1.0, 5.0, 9.81), (20.0, 45.0, 9.81), (75.0, 80.0, 1.62)] {
            let theta = f64::to_radians(deg);
            let [_, landing] = formula.roots(v0, theta, g).expect("roots");
            let compiled = formula.evaluate(v0, theta, g);
            assert!((landing - compiled).abs() < 1e-12 * compiled.max(1.0));
        }
        assert!(formula.roots(10.0, 0.5, 0.0).is_none());
    }

    #[test]
    fn flat_quadratic_has_no_factored_roots() {
        let quad = Quadratic::vertical_displacement(10.0, 0.3, 0.0);
        assert!(quad.factored_roots().is_none());
    }

    #[test]
    fn roots_are_in_solve_order() {
        let formula = DerivedFormula::derive();
        let roots = formula.roots(10.0, 30f64.to_radians(), 10.0).expect("roots");
        assert_eq!(roots[0], 0.0);
        assert!((roots[1] - 1.0).abs() < 1e-12);
        assert_eq!(formula.describe(), "2*v0*sin(theta)/g");
    }
}
