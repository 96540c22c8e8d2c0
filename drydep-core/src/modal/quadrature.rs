//! Gauss-Hermite quadrature
//!
//! Integrates $\int_{-\infty}^{\infty} e^{-y^2} f(y)\,dy \approx \sum_n w_n f(y_n)$.
//! Abscissae and weights from Abramowitz & Stegun (1974), Table 25.10.

use crate::FloatValue;

/// A fixed-order quadrature rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureRule<const N: usize> {
    pub abscissae: [FloatValue; N],
    pub weights: [FloatValue; N],
}

impl<const N: usize> QuadratureRule<N> {
    /// Number of quadrature points
    pub const fn order(&self) -> usize {
        N
    }

    /// Sum of the weights, $\sqrt{\pi}$ for a Gauss-Hermite rule
    pub fn weight_sum(&self) -> FloatValue {
        self.weights.iter().sum()
    }

    /// Weighted sum of `f` evaluated at each abscissa
    pub fn integrate<F>(&self, f: F) -> FloatValue
    where
        F: Fn(FloatValue) -> FloatValue,
    {
        self.abscissae
            .iter()
            .zip(self.weights.iter())
            .map(|(&y, &w)| w * f(y))
            .sum()
    }
}

/// Seven point Gauss-Hermite rule
pub const GAUSS_HERMITE_7: QuadratureRule<7> = QuadratureRule {
    abscissae: [
        -2.651_961_356_835_233,
        -1.673_551_628_767_471,
        -0.816_287_882_858_965,
        0.0,
        0.816_287_882_858_965,
        1.673_551_628_767_471,
        2.651_961_356_835_233,
    ],
    weights: [
        0.000_971_781_245_099_5,
        0.054_515_582_819_127_03,
        0.425_607_252_610_127_8,
        0.810_264_617_556_807_3,
        0.425_607_252_610_127_8,
        0.054_515_582_819_127_03,
        0.000_971_781_245_099_5,
    ],
};
