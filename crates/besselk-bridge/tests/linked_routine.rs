//! Tests against the real Fortran library.
//!
//! Build the library first and point the build at it, e.g.
//!
//! ```text
//! BESSELK_LIB_DIR=/opt/besselk/lib BESSELK_F77_UNDERSCORES=1 \
//!     cargo test -p besselk-bridge --features fortran-link,amos-link
//! ```
//!
//! Running once per `BESSELK_F77_UNDERSCORES` value checks that the symbols
//! resolve under each decoration.

#![cfg(any(feature = "fortran-link", feature = "amos-link"))]

use besselk_bridge::marshal::{IMAG0, IMAG1, REAL0, REAL1, STATUS};
use besselk_bridge::{besselk, BesselKRoutine, RoutineStatus};

const K0_AT_1: f64 = 0.421_024_438_240_708_3;
const K1_AT_1: f64 = 0.601_907_230_197_234_6;
const TOLERANCE: f64 = 1e-12;

fn assert_reference_values<R: BesselKRoutine>(routine: &R) {
    let array = besselk(routine, 1.0, 0.0);
    assert!((array[REAL0] - K0_AT_1).abs() < TOLERANCE, "{array:?}");
    assert!(array[IMAG0].abs() < TOLERANCE, "{array:?}");
    assert!((array[REAL1] - K1_AT_1).abs() < TOLERANCE, "{array:?}");
    assert!(array[IMAG1].abs() < TOLERANCE, "{array:?}");
    assert_eq!(array[STATUS], 0.0);
}

fn assert_zero_is_flagged<R: BesselKRoutine>(routine: &R) {
    let array = besselk(routine, 0.0, 0.0);
    assert_eq!(
        RoutineStatus::from_raw(array[STATUS] as i32),
        RoutineStatus::InputError
    );
}

fn assert_deterministic<R: BesselKRoutine>(routine: &R) {
    for (re, im) in [(5.0, 6.0), (-5.0, 6.0), (5.0, -6.0), (0.5, -0.25)] {
        let first = besselk(routine, re, im);
        let second = besselk(routine, re, im);
        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
    }
}

#[cfg(feature = "fortran-link")]
mod wrapper {
    use super::*;
    use besselk_bridge::FortranBesselK;

    #[test]
    fn test_reference_values() {
        assert_reference_values(&FortranBesselK);
    }

    #[test]
    fn test_zero_is_flagged() {
        assert_zero_is_flagged(&FortranBesselK);
    }

    #[test]
    fn test_deterministic() {
        assert_deterministic(&FortranBesselK);
    }
}

#[cfg(feature = "amos-link")]
mod zbesk {
    use super::*;
    use besselk_bridge::{AmosZbesk, Scaling};
    use num_complex::Complex64;

    #[test]
    fn test_reference_values() {
        assert_reference_values(&AmosZbesk::new(Scaling::Unscaled));
    }

    #[test]
    fn test_zero_is_flagged() {
        assert_zero_is_flagged(&AmosZbesk::default());
    }

    #[test]
    fn test_deterministic() {
        assert_deterministic(&AmosZbesk::default());
    }

    #[test]
    fn test_exponential_scaling() {
        let z = Complex64::new(1.0, 0.0);
        let scaled = AmosZbesk::new(Scaling::Exponential).evaluate(z);
        let e = 1.0_f64.exp();
        assert_eq!(scaled.status, 0);
        assert!((scaled.k0.re - K0_AT_1 * e).abs() < 1e-12);
        assert!((scaled.k1.re - K1_AT_1 * e).abs() < 1e-12);
    }
}
