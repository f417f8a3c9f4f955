//! Rust functions exported for the JVM to call.
//!
//! The managed side is `edu.oa.curvature.bessel.BesselkJINI`:
//!
//! ```java
//! public native double[] besselk(double zreal, double zimg);
//! static { System.loadLibrary("besselk"); }
//! ```
//!
//! The cdylib built from this crate must therefore be installed as
//! `libbesselk.so` (`besselk.dll` on Windows) on `java.library.path`.

use jni::objects::JObject;
use jni::sys::{jdouble, jdoubleArray, jint, jsize, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM};
use once_cell::sync::Lazy;
use std::os::raw::c_void;

use crate::config::BridgeConfig;
use crate::fortran_bridge::configured_routine;
use crate::logging;
use crate::marshal::{self, OUTPUT_LEN};
use crate::routine::BesselKRoutine;

// Built on first use: JNI_OnLoad forces it, so configuration and logging are
// settled before the first besselk call.
static ROUTINE: Lazy<Box<dyn BesselKRoutine>> = Lazy::new(|| {
    let config = match BridgeConfig::load() {
        Ok(config) => config,
        Err(e) => {
            let config = BridgeConfig::default();
            logging::init(&config);
            log::error!("Falling back to default bridge configuration: {}", e);
            return configured_routine(&config);
        }
    };
    logging::init(&config);
    log::info!(
        "besselk bridge ready: backend {}, scaling {}, serialize_calls {}, symbol decoration {}",
        config.backend,
        config.scaling,
        config.serialize_calls,
        besselk_sys::Decoration::ACTIVE
    );
    configured_routine(&config)
});

/// Called by the JVM when the library is loaded.
#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    Lazy::force(&ROUTINE);
    JNI_VERSION_1_6
}

/// `double[] BesselkJINI.besselk(double zreal, double zimg)`
///
/// Returns `{Re K0, Im K0, Re K1, Im K1, status}`. Returns null only when
/// the JVM could not allocate or fill the array; a Java exception is then
/// pending.
#[no_mangle]
pub extern "system" fn Java_edu_oa_curvature_bessel_BesselkJINI_besselk<'local>(
    env: JNIEnv<'local>,
    _this: JObject<'local>,
    zreal: jdouble,
    zimg: jdouble,
) -> jdoubleArray {
    let values = marshal::besselk(&**ROUTINE, zreal, zimg);

    let array = match env.new_double_array(OUTPUT_LEN as jsize) {
        Ok(array) => array,
        Err(e) => {
            log::error!("Failed to allocate double[{}]: {}", OUTPUT_LEN, e);
            return std::ptr::null_mut();
        }
    };

    if let Err(e) = env.set_double_array_region(&array, 0, &values) {
        log::error!("Failed to fill double[{}]: {}", OUTPUT_LEN, e);
        return std::ptr::null_mut();
    }

    array.into_raw()
}
