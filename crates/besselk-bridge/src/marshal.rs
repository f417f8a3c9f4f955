//! The five-slot marshalling contract.
//!
//! A call hands two doubles in and gets five doubles back, always in the
//! order `[real0, img0, real1, img1, status]`. The status slot is the only
//! failure signal on this path: callers that skip it may treat a degraded
//! or missing result as valid.

use num_complex::Complex64;

use crate::error::{BridgeError, BridgeResult};
use crate::routine::{BesselKOutput, BesselKRoutine};

/// Number of slots in the output array.
pub const OUTPUT_LEN: usize = 5;

/// Re K_0(z)
pub const REAL0: usize = 0;
/// Im K_0(z)
pub const IMAG0: usize = 1;
/// Re K_1(z)
pub const REAL1: usize = 2;
/// Im K_1(z)
pub const IMAG1: usize = 3;
/// Routine status, widened to f64
pub const STATUS: usize = 4;

/// The array handed across the managed boundary.
pub type BesselKArray = [f64; OUTPUT_LEN];

/// Evaluates K_0 and K_1 at `z_real + i*z_imag` and packs the result.
///
/// The inputs are not validated. The routine is called exactly once.
pub fn besselk<R>(routine: &R, z_real: f64, z_imag: f64) -> BesselKArray
where
    R: BesselKRoutine + ?Sized,
{
    let z = Complex64::new(z_real, z_imag);
    let output = routine.evaluate(z);
    log::debug!(
        "{}({}) -> K0 = {}, K1 = {}, status {}",
        routine.name(),
        z,
        output.k0,
        output.k1,
        output.status
    );
    to_array(&output)
}

/// Evaluates K_0 and K_1 and fails on any non-zero status.
pub fn checked_besselk<R>(routine: &R, z: Complex64) -> BridgeResult<[Complex64; 2]>
where
    R: BesselKRoutine + ?Sized,
{
    routine.evaluate(z).into_result(z)
}

/// Packs an output into the fixed slot order.
pub fn to_array(output: &BesselKOutput) -> BesselKArray {
    let mut array = [0.0; OUTPUT_LEN];
    array[REAL0] = output.k0.re;
    array[IMAG0] = output.k0.im;
    array[REAL1] = output.k1.re;
    array[IMAG1] = output.k1.im;
    array[STATUS] = f64::from(output.status);
    array
}

/// Unpacks an array produced by [`to_array`].
///
/// Fails if the status slot is not an integral value in the i32 range; such
/// an array did not come from [`to_array`] and must not decode as success.
pub fn from_array(array: &BesselKArray) -> BridgeResult<BesselKOutput> {
    let status = status_from_slot(array[STATUS])?;
    Ok(BesselKOutput::new(
        Complex64::new(array[REAL0], array[IMAG0]),
        Complex64::new(array[REAL1], array[IMAG1]),
        status,
    ))
}

fn status_from_slot(value: f64) -> BridgeResult<i32> {
    let in_range = value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX);
    if !value.is_finite() || value.fract() != 0.0 || !in_range {
        return Err(BridgeError::MalformedStatus { value });
    }
    Ok(value as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns distinct values per slot and counts calls.
    struct Tagged {
        calls: AtomicUsize,
    }

    impl BesselKRoutine for Tagged {
        fn evaluate(&self, z: Complex64) -> BesselKOutput {
            self.calls.fetch_add(1, Ordering::SeqCst);
            BesselKOutput::new(
                Complex64::new(z.re + 10.0, z.im + 20.0),
                Complex64::new(z.re + 30.0, z.im + 40.0),
                7,
            )
        }

        fn name(&self) -> &'static str {
            "tagged"
        }
    }

    #[test]
    fn test_slot_order() {
        let routine = Tagged {
            calls: AtomicUsize::new(0),
        };
        let array = besselk(&routine, 1.0, 2.0);
        assert_eq!(array, [11.0, 22.0, 31.0, 42.0, 7.0]);
        assert_eq!(routine.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_status_widening() {
        let output = BesselKOutput::new(Complex64::default(), Complex64::default(), -1);
        assert_eq!(to_array(&output)[STATUS], -1.0);

        let output = BesselKOutput::new(Complex64::default(), Complex64::default(), i32::MAX);
        assert_eq!(to_array(&output)[STATUS], 2147483647.0);
    }

    #[test]
    fn test_from_array_inverts_to_array() {
        let output = BesselKOutput::new(Complex64::new(0.5, -0.25), Complex64::new(1.5, 2.5), 3);
        assert_eq!(from_array(&to_array(&output)).unwrap(), output);

        let extreme = BesselKOutput::new(Complex64::default(), Complex64::default(), i32::MIN);
        assert_eq!(from_array(&to_array(&extreme)).unwrap().status, i32::MIN);
    }

    #[test]
    fn test_from_array_rejects_malformed_status() {
        for bad in [f64::NAN, f64::INFINITY, 1e12, -1e12, 2.5, 2147483648.0] {
            let mut array = [0.0; OUTPUT_LEN];
            array[STATUS] = bad;
            match from_array(&array) {
                Err(BridgeError::MalformedStatus { value }) => {
                    assert!(value.is_nan() || value == bad);
                }
                other => panic!("status {bad} decoded as {other:?}"),
            }
        }
    }

    #[test]
    fn test_nan_passes_through() {
        let routine = Tagged {
            calls: AtomicUsize::new(0),
        };
        let array = besselk(&routine, f64::NAN, f64::INFINITY);
        assert!(array[REAL0].is_nan());
        assert_eq!(array[IMAG0], f64::INFINITY);
        assert_eq!(array[STATUS], 7.0);
    }

    #[test]
    fn test_checked_besselk_reports_status() {
        let routine = Tagged {
            calls: AtomicUsize::new(0),
        };
        let err = checked_besselk(&routine, Complex64::new(1.0, 0.0)).unwrap_err();
        assert_eq!(err.status().map(|s| s.code()), Some(7));
    }
}
