//! Status codes reported by the K-Bessel routines.
//!
//! Codes 0 to 5 are the AMOS `IERR` flag. The bridge adds one code of its
//! own, [`RoutineStatus::NotLinked`], for builds without the external
//! routine. Any other value is carried through as [`RoutineStatus::Unknown`].

use std::fmt;

/// Raw status returned by stub routines when the Fortran library is not linked.
pub const NOT_LINKED_CODE: i32 = -1;

/// Decoded routine status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoutineStatus {
    /// Computation completed.
    Normal,
    /// Input error, no computation (e.g. z = 0).
    InputError,
    /// Overflow, no computation: order too large or abs(z) too small.
    Overflow,
    /// Computation done, but argument reduction lost more than half of
    /// machine accuracy.
    PartialLossOfSignificance,
    /// No computation: complete loss of significance by argument reduction.
    CompleteLossOfSignificance,
    /// No computation: algorithm termination condition not met.
    NoConvergence,
    /// The external routine is not linked into this build.
    NotLinked,
    /// A code the bridge does not know.
    Unknown(i32),
}

impl RoutineStatus {
    /// Creates a RoutineStatus from a raw i32 value.
    pub fn from_raw(code: i32) -> Self {
        match code {
            0 => RoutineStatus::Normal,
            1 => RoutineStatus::InputError,
            2 => RoutineStatus::Overflow,
            3 => RoutineStatus::PartialLossOfSignificance,
            4 => RoutineStatus::CompleteLossOfSignificance,
            5 => RoutineStatus::NoConvergence,
            NOT_LINKED_CODE => RoutineStatus::NotLinked,
            other => RoutineStatus::Unknown(other),
        }
    }

    /// Returns the raw code.
    pub fn code(&self) -> i32 {
        match self {
            RoutineStatus::Normal => 0,
            RoutineStatus::InputError => 1,
            RoutineStatus::Overflow => 2,
            RoutineStatus::PartialLossOfSignificance => 3,
            RoutineStatus::CompleteLossOfSignificance => 4,
            RoutineStatus::NoConvergence => 5,
            RoutineStatus::NotLinked => NOT_LINKED_CODE,
            RoutineStatus::Unknown(code) => *code,
        }
    }

    /// Returns true if the status indicates success.
    pub fn is_success(&self) -> bool {
        *self == RoutineStatus::Normal
    }

    /// Returns true if the status indicates an error.
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// Returns true if the output slots hold computed values.
    ///
    /// A partial loss of significance still produces values, only less
    /// accurate ones.
    pub fn has_values(&self) -> bool {
        matches!(
            self,
            RoutineStatus::Normal | RoutineStatus::PartialLossOfSignificance
        )
    }
}

impl fmt::Display for RoutineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutineStatus::Normal => write!(f, "normal return, computation completed"),
            RoutineStatus::InputError => write!(f, "input error, no computation"),
            RoutineStatus::Overflow => write!(
                f,
                "overflow, no computation (order too large or abs(z) too small)"
            ),
            RoutineStatus::PartialLossOfSignificance => write!(
                f,
                "loss of significance, less than half of machine accuracy"
            ),
            RoutineStatus::CompleteLossOfSignificance => write!(
                f,
                "complete loss of significance, no computation"
            ),
            RoutineStatus::NoConvergence => {
                write!(f, "algorithm termination condition not met")
            }
            RoutineStatus::NotLinked => write!(f, "external routine not linked"),
            RoutineStatus::Unknown(code) => write!(f, "unknown status {}", code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_success() {
        assert!(RoutineStatus::Normal.is_success());
        assert!(!RoutineStatus::Normal.is_error());
        assert!(RoutineStatus::Normal.has_values());
    }

    #[test]
    fn test_status_failure() {
        assert!(RoutineStatus::Overflow.is_error());
        assert!(!RoutineStatus::Overflow.has_values());
        assert!(RoutineStatus::PartialLossOfSignificance.is_error());
        assert!(RoutineStatus::PartialLossOfSignificance.has_values());
    }

    #[test]
    fn test_status_from_raw() {
        assert_eq!(RoutineStatus::from_raw(0), RoutineStatus::Normal);
        assert_eq!(RoutineStatus::from_raw(4), RoutineStatus::CompleteLossOfSignificance);
        assert_eq!(RoutineStatus::from_raw(-1), RoutineStatus::NotLinked);
        assert_eq!(RoutineStatus::from_raw(42), RoutineStatus::Unknown(42));
    }

    #[test]
    fn test_code_preserved() {
        for code in -3..=8 {
            assert_eq!(RoutineStatus::from_raw(code).code(), code);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(RoutineStatus::Unknown(9).to_string(), "unknown status 9");
        assert_eq!(
            RoutineStatus::InputError.to_string(),
            "input error, no computation"
        );
    }
}
