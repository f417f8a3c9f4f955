//! Routines backed by the Fortran library.
//!
//! [`FortranBesselK`] calls the `besselk` wrapper, [`AmosZbesk`] calls AMOS
//! `zbesk` directly with order 0 and two members. Each is only wired to the
//! external symbol when its link feature is enabled; otherwise it is a stub
//! that logs a warning and returns [`BesselKOutput::not_linked`].

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::{Backend, BridgeConfig};
use crate::error::BridgeError;
use crate::routine::{BesselKOutput, BesselKRoutine, SerializedRoutine};

/// Result scaling applied by AMOS (`KODE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scaling {
    /// K(z), `KODE = 1`.
    #[default]
    Unscaled,
    /// exp(z) * K(z), `KODE = 2`.
    Exponential,
}

impl Scaling {
    /// The AMOS `KODE` argument.
    pub fn kode(self) -> i32 {
        match self {
            Scaling::Unscaled => 1,
            Scaling::Exponential => 2,
        }
    }
}

impl fmt::Display for Scaling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scaling::Unscaled => write!(f, "unscaled"),
            Scaling::Exponential => write!(f, "exponential"),
        }
    }
}

impl FromStr for Scaling {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unscaled" | "1" => Ok(Scaling::Unscaled),
            "exponential" | "2" => Ok(Scaling::Exponential),
            other => Err(BridgeError::invalid_config(
                "scaling",
                format!("unknown scaling '{}' (expected unscaled or exponential)", other),
            )),
        }
    }
}

/// The `besselk` Fortran wrapper: K_0 and K_1, unscaled.
#[derive(Debug, Clone, Copy, Default)]
pub struct FortranBesselK;

impl BesselKRoutine for FortranBesselK {
    #[cfg(feature = "fortran-link")]
    fn evaluate(&self, z: Complex64) -> BesselKOutput {
        use std::os::raw::c_int;

        // The wrapper may overwrite its inputs, so it only ever sees copies
        let mut zr = z.re;
        let mut zi = z.im;
        let (mut real0, mut img0, mut real1, mut img1) = (0.0, 0.0, 0.0, 0.0);
        let mut ierr: c_int = 0;

        // Safety: every pointer refers to a live local of this frame
        unsafe {
            besselk_sys::besselk(
                &mut zr, &mut zi, &mut real0, &mut img0, &mut real1, &mut img1, &mut ierr,
            );
        }

        BesselKOutput::new(
            Complex64::new(real0, img0),
            Complex64::new(real1, img1),
            ierr,
        )
    }

    /// Stub implementation when Fortran linking is not enabled.
    #[cfg(not(feature = "fortran-link"))]
    fn evaluate(&self, z: Complex64) -> BesselKOutput {
        log::warn!(
            "FortranBesselK::evaluate({}) called without fortran-link feature",
            z
        );
        BesselKOutput::not_linked()
    }

    fn name(&self) -> &'static str {
        besselk_sys::BESSELK_SYMBOL
    }
}

/// AMOS `zbesk` with `FNU = 0`, `N = 2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmosZbesk {
    scaling: Scaling,
}

impl AmosZbesk {
    pub fn new(scaling: Scaling) -> Self {
        Self { scaling }
    }

    pub fn scaling(&self) -> Scaling {
        self.scaling
    }
}

impl BesselKRoutine for AmosZbesk {
    #[cfg(feature = "amos-link")]
    fn evaluate(&self, z: Complex64) -> BesselKOutput {
        use std::os::raw::c_int;

        let zr = z.re;
        let zi = z.im;
        let fnu = 0.0_f64;
        let kode: c_int = self.scaling.kode();
        let n: c_int = 2;
        let mut cyr = [0.0_f64; 2];
        let mut cyi = [0.0_f64; 2];
        let mut nz: c_int = 0;
        let mut ierr: c_int = 0;

        // Safety: scalars are live locals, cyr/cyi hold exactly n elements
        unsafe {
            besselk_sys::zbesk(
                &zr,
                &zi,
                &fnu,
                &kode,
                &n,
                cyr.as_mut_ptr(),
                cyi.as_mut_ptr(),
                &mut nz,
                &mut ierr,
            );
        }

        if nz != 0 {
            log::debug!("zbesk({}): {} member(s) set to zero by underflow", z, nz);
        }

        BesselKOutput::new(
            Complex64::new(cyr[0], cyi[0]),
            Complex64::new(cyr[1], cyi[1]),
            ierr,
        )
    }

    /// Stub implementation when AMOS linking is not enabled.
    #[cfg(not(feature = "amos-link"))]
    fn evaluate(&self, z: Complex64) -> BesselKOutput {
        log::warn!(
            "AmosZbesk::evaluate({}, {}) called without amos-link feature",
            z,
            self.scaling
        );
        BesselKOutput::not_linked()
    }

    fn name(&self) -> &'static str {
        besselk_sys::ZBESK_SYMBOL
    }
}

/// Builds the routine selected by the configuration.
pub fn configured_routine(config: &BridgeConfig) -> Box<dyn BesselKRoutine> {
    match (config.backend, config.serialize_calls) {
        (Backend::Wrapper, true) => Box::new(SerializedRoutine::new(FortranBesselK)),
        (Backend::Wrapper, false) => Box::new(FortranBesselK),
        (Backend::Zbesk, true) => {
            Box::new(SerializedRoutine::new(AmosZbesk::new(config.scaling)))
        }
        (Backend::Zbesk, false) => Box::new(AmosZbesk::new(config.scaling)),
    }
}
