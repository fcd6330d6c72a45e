//! Structural classification of a matrix as bitflags.

use bitflags::bitflags;
use crate::config::CompareOptions;
use crate::matrix::Matrix;

bitflags! {
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Structure: u32 {
        const SQUARE           = 0b0001;
        const UPPER_TRIANGULAR = 0b0010;
        const LOWER_TRIANGULAR = 0b0100;
        const DIAGONAL         = Self::UPPER_TRIANGULAR.bits() | Self::LOWER_TRIANGULAR.bits();
    }
}

impl Matrix {
    /// Classify using exact zero tests.
    pub fn structure(&self) -> Structure {
        self.structure_with(&CompareOptions::exact())
    }

    pub fn structure_with(&self, opts: &CompareOptions) -> Structure {
        let mut s = Structure::empty();
        if !self.is_square() {
            return s;
        }
        s |= Structure::SQUARE;
        if self.is_upper_triangular_with(opts) {
            s |= Structure::UPPER_TRIANGULAR;
        }
        if self.is_lower_triangular_with(opts) {
            s |= Structure::LOWER_TRIANGULAR;
        }
        s
    }
}
