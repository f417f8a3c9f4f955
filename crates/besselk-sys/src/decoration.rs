//! Fortran symbol decoration.

use std::fmt;

/// Trailing-underscore convention used by the Fortran compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decoration {
    /// Names are exported as written (`besselk`).
    None,
    /// One underscore appended (`besselk_`), the f77/gfortran default.
    Single,
    /// Two underscores appended (`besselk__`), as some g77 builds do.
    Double,
}

impl Decoration {
    /// Decoration selected for this build by `BESSELK_F77_UNDERSCORES`.
    #[cfg(f77_suffix = "none")]
    pub const ACTIVE: Decoration = Decoration::None;
    #[cfg(f77_suffix = "single")]
    pub const ACTIVE: Decoration = Decoration::Single;
    #[cfg(f77_suffix = "double")]
    pub const ACTIVE: Decoration = Decoration::Double;

    /// Maps an underscore count to a decoration.
    pub fn from_underscores(count: u8) -> Option<Self> {
        match count {
            0 => Some(Decoration::None),
            1 => Some(Decoration::Single),
            2 => Some(Decoration::Double),
            _ => None,
        }
    }

    /// Number of underscores appended.
    pub fn underscores(self) -> u8 {
        match self {
            Decoration::None => 0,
            Decoration::Single => 1,
            Decoration::Double => 2,
        }
    }

    /// The suffix appended to exported names.
    pub fn suffix(self) -> &'static str {
        match self {
            Decoration::None => "",
            Decoration::Single => "_",
            Decoration::Double => "__",
        }
    }

    /// Returns the exported symbol for a Fortran routine name.
    ///
    /// Fortran names are case-insensitive and exported in lowercase.
    pub fn decorate(self, name: &str) -> String {
        let mut symbol = name.trim().to_ascii_lowercase();
        symbol.push_str(self.suffix());
        symbol
    }
}

impl fmt::Display for Decoration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Decoration::None => "none",
            Decoration::Single => "single-underscore",
            Decoration::Double => "double-underscore",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decorate() {
        assert_eq!(Decoration::None.decorate("besselk"), "besselk");
        assert_eq!(Decoration::Single.decorate("besselk"), "besselk_");
        assert_eq!(Decoration::Double.decorate("besselk"), "besselk__");
    }

    #[test]
    fn test_decorate_lowercases() {
        assert_eq!(Decoration::Single.decorate(" ZBESK "), "zbesk_");
    }

    #[test]
    fn test_underscore_count_round_trip() {
        for count in 0..=2 {
            let decoration = Decoration::from_underscores(count).unwrap();
            assert_eq!(decoration.underscores(), count);
            assert_eq!(decoration.suffix().len(), count as usize);
        }
        assert_eq!(Decoration::from_underscores(3), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Decoration::Double.to_string(), "double-underscore");
    }
}
