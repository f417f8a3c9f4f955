//! The narrow interface in front of the external routine.
//!
//! Everything above this module talks to a [`BesselKRoutine`]; only
//! [`crate::fortran_bridge`] knows how the Fortran symbols are reached.

use num_complex::Complex64;
use std::sync::{Mutex, PoisonError};

use crate::error::{BridgeError, BridgeResult};
use crate::status::{RoutineStatus, NOT_LINKED_CODE};

/// Serializes every call made through [`SerializedRoutine`].
///
/// Fortran routines keep state in static storage, so the lock is process-wide
/// rather than per instance.
static EXTERNAL_CALL_LOCK: Mutex<()> = Mutex::new(());

/// K_0(z) and K_1(z) plus the raw status of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BesselKOutput {
    /// K_0(z)
    pub k0: Complex64,
    /// K_1(z)
    pub k1: Complex64,
    /// Raw status code as reported by the routine.
    pub status: i32,
}

impl BesselKOutput {
    pub fn new(k0: Complex64, k1: Complex64, status: i32) -> Self {
        Self { k0, k1, status }
    }

    /// Output of a stub routine: NaN values and the not-linked status.
    pub fn not_linked() -> Self {
        let nan = Complex64::new(f64::NAN, f64::NAN);
        Self::new(nan, nan, NOT_LINKED_CODE)
    }

    /// Decodes the raw status.
    pub fn routine_status(&self) -> RoutineStatus {
        RoutineStatus::from_raw(self.status)
    }

    /// Returns true if the routine reported success.
    pub fn is_success(&self) -> bool {
        self.status == 0
    }

    /// Returns `[K_0(z), K_1(z)]` if the status is zero.
    ///
    /// `z` is the argument the output was computed for; it is only used to
    /// describe the failure.
    pub fn into_result(self, z: Complex64) -> BridgeResult<[Complex64; 2]> {
        if self.is_success() {
            return Ok([self.k0, self.k1]);
        }
        let status = self.routine_status();
        log::warn!("BesselK routine failed for z = {}: {} ({})", z, status, self.status);
        Err(BridgeError::routine(z, status))
    }
}

/// A routine computing K_0 and K_1 for a complex argument.
///
/// Implementations must not validate or alter `z`; NaN, infinity and zero
/// are handed to the routine as they are.
pub trait BesselKRoutine: Send + Sync {
    /// Evaluates K_0(z) and K_1(z) with exactly one call to the routine.
    fn evaluate(&self, z: Complex64) -> BesselKOutput;

    /// Name used in log records.
    fn name(&self) -> &'static str;
}

impl<R: BesselKRoutine + ?Sized> BesselKRoutine for Box<R> {
    fn evaluate(&self, z: Complex64) -> BesselKOutput {
        (**self).evaluate(z)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Wraps a routine so that no two calls into external code overlap.
#[derive(Debug, Default)]
pub struct SerializedRoutine<R> {
    inner: R,
}

impl<R: BesselKRoutine> SerializedRoutine<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: BesselKRoutine> BesselKRoutine for SerializedRoutine<R> {
    fn evaluate(&self, z: Complex64) -> BesselKOutput {
        // The guarded value is (), so a poisoned lock carries no broken state
        let _guard = EXTERNAL_CALL_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        self.inner.evaluate(z)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
