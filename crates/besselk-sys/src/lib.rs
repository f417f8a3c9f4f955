//! Raw declarations for the Fortran K-Bessel routines.
//!
//! Two externally compiled routines are declared here:
//!
//! - [`besselk`]: a small Fortran wrapper computing K_0(z) and K_1(z) in one
//!   call, with every argument passed by reference.
//! - [`zbesk`]: the double-precision AMOS routine (TOMS 644) the wrapper
//!   delegates to.
//!
//! Fortran compilers decorate exported names with zero, one or two trailing
//! underscores. The decoration is fixed at build time through
//! `BESSELK_F77_UNDERSCORES` (see `build.rs`); [`Decoration::ACTIVE`] and the
//! [`BESSELK_SYMBOL`] / [`ZBESK_SYMBOL`] constants report what was selected.
//!
//! The declarations are only compiled with the `link` feature, which also
//! emits the link directives. Without it this crate carries the decoration
//! metadata only.
//!
//! # Safety
//!
//! Every pointer passed to these routines must be valid for reads and writes
//! of its pointee for the duration of the call. The input pointers may be
//! overwritten by the routine. Thread safety of the routines is not known;
//! treat them as thread-unsafe.

mod decoration;

pub use decoration::Decoration;

#[cfg(feature = "link")]
use std::os::raw::{c_double, c_int};

/// Symbol name of the wrapper routine as linked by this build.
pub const BESSELK_SYMBOL: &str = env!("BESSELK_SYMBOL");

/// Symbol name of the AMOS routine as linked by this build.
pub const ZBESK_SYMBOL: &str = env!("ZBESK_SYMBOL");

#[cfg(feature = "link")]
extern "C" {
    /// `SUBROUTINE BESSELK(ZR, ZI, REAL0, IMG0, REAL1, IMG1, IERR)`
    ///
    /// Computes K_0 and K_1 at `zr + i*zi` (unscaled). `ierr` receives the
    /// AMOS error flag.
    #[cfg_attr(f77_suffix = "none", link_name = "besselk")]
    #[cfg_attr(f77_suffix = "single", link_name = "besselk_")]
    #[cfg_attr(f77_suffix = "double", link_name = "besselk__")]
    pub fn besselk(
        zr: *mut c_double,
        zi: *mut c_double,
        real0: *mut c_double,
        img0: *mut c_double,
        real1: *mut c_double,
        img1: *mut c_double,
        ierr: *mut c_int,
    );

    /// `SUBROUTINE ZBESK(ZR, ZI, FNU, KODE, N, CYR, CYI, NZ, IERR)`
    ///
    /// Computes K_{fnu+j}(z) for j = 0..n-1 into `cyr`/`cyi`, which must hold
    /// at least `n` elements. `kode` = 1 is unscaled, 2 multiplies by exp(z).
    /// `nz` receives the number of components set to zero by underflow.
    #[cfg_attr(f77_suffix = "none", link_name = "zbesk")]
    #[cfg_attr(f77_suffix = "single", link_name = "zbesk_")]
    #[cfg_attr(f77_suffix = "double", link_name = "zbesk__")]
    pub fn zbesk(
        zr: *const c_double,
        zi: *const c_double,
        fnu: *const c_double,
        kode: *const c_int,
        n: *const c_int,
        cyr: *mut c_double,
        cyi: *mut c_double,
        nz: *mut c_int,
        ierr: *mut c_int,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_symbols_follow_active_decoration() {
        assert_eq!(BESSELK_SYMBOL, Decoration::ACTIVE.decorate("besselk"));
        assert_eq!(ZBESK_SYMBOL, Decoration::ACTIVE.decorate("ZBESK"));
    }

    #[test]
    fn test_symbols_share_suffix() {
        let suffix = Decoration::ACTIVE.suffix();
        assert!(BESSELK_SYMBOL.ends_with(suffix));
        assert!(ZBESK_SYMBOL.ends_with(suffix));
        assert_eq!(
            BESSELK_SYMBOL.trim_end_matches('_'),
            "besselk",
            "only underscores may be appended"
        );
    }
}
