//! JNI bridge for the Fortran K-Bessel routine.
//!
//! This crate exposes one evaluation, K_0(z) and K_1(z) for a complex z, to a
//! JVM caller. The numerical work is done by an externally compiled Fortran
//! routine; this crate only moves values across the two boundaries:
//!
//! ```text
//! [JVM BesselkJINI.besselk] --JNI--> [marshal::besselk] --FFI--> [Fortran besselk_]
//!                                          |
//!                     double[5] <----------+  {Re K0, Im K0, Re K1, Im K1, status}
//! ```
//!
//! - [`routine`]: the [`BesselKRoutine`] trait every backend implements
//! - [`fortran_bridge`]: backends calling the Fortran symbols
//! - [`marshal`]: the five-slot array contract
//! - [`status`]: decoding of the routine's status code
//! - [`config`] and [`logging`]: load-time setup
//!
//! With the `jni` feature the crate also exports
//! `Java_edu_oa_curvature_bessel_BesselkJINI_besselk` and `JNI_OnLoad`.
//!
//! # Features
//!
//! - `fortran-link`: link the `besselk` wrapper routine
//! - `amos-link`: link AMOS `zbesk`
//! - `jni`: export the JNI entry points
//!
//! Without a link feature the corresponding routine is a stub returning NaN
//! values and status -1.
//!
//! # Safety
//!
//! The Fortran routines are assumed not to be thread-safe. Calls are
//! serialized through a process-wide lock unless `serialize_calls` is turned
//! off in the configuration.

pub mod config;
pub mod error;
pub mod fortran_bridge;
#[cfg(feature = "jni")]
mod jni_exports;
pub mod logging;
pub mod marshal;
pub mod routine;
pub mod status;

pub use config::{Backend, BridgeConfig};
pub use error::{BridgeError, BridgeResult};
pub use fortran_bridge::{configured_routine, AmosZbesk, FortranBesselK, Scaling};
pub use marshal::{besselk, checked_besselk, BesselKArray, OUTPUT_LEN};
pub use routine::{BesselKOutput, BesselKRoutine, SerializedRoutine};
pub use status::RoutineStatus;

#[cfg(feature = "jni")]
pub use jni_exports::*;
