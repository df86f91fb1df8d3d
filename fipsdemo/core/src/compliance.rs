use core::fmt;
use core::str::FromStr;

use crate::error::ParseError;
use crate::utils::eq_ignore_ascii_case;

/**
    Algorithm policy applied by the cipher engine and the signature verifier.

    `Fips` restricts inputs to what a FIPS 140 validated module would accept.
    The mode is passed to each component explicitly; there is no process-wide
    switch.
*/
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComplianceMode {
    #[default]
    Standard,
    Fips,
}

impl ComplianceMode {
    pub const fn from_name(name: &[u8]) -> Option<Self> {
        let name = name.trim_ascii();
        match name.len() {
            4 if eq_ignore_ascii_case(name, b"fips") => Some(Self::Fips),
            8 if eq_ignore_ascii_case(name, b"standard") => Some(Self::Standard),
            _ => None,
        }
    }

    pub const fn to_name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Fips => "fips",
        }
    }

    pub const fn is_fips(self) -> bool {
        matches!(self, Self::Fips)
    }
}

impl fmt::Display for ComplianceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_name())
    }
}

impl FromStr for ComplianceMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.as_bytes()).ok_or_else(|| ParseError {
            kind: "compliance mode",
            value: s.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_names() {
        assert_eq!("fips".parse(), Ok(ComplianceMode::Fips));
        assert_eq!(" FIPS ".parse(), Ok(ComplianceMode::Fips));
        assert_eq!("Standard".parse(), Ok(ComplianceMode::Standard));
    }

    #[test]
    fn parse_unknown() {
        let err = "fips2".parse::<ComplianceMode>().unwrap_err();
        assert_eq!(err.kind, "compliance mode");
        assert_eq!(err.to_string(), "unknown compliance mode 'fips2'");
    }

    #[test]
    fn default_is_standard() {
        assert_eq!(ComplianceMode::default(), ComplianceMode::Standard);
        assert!(!ComplianceMode::default().is_fips());
        assert!(ComplianceMode::Fips.is_fips());
    }
}
