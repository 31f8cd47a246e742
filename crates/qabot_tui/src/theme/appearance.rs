//! Theme appearance: light or dark.

use std::str::FromStr;

/// Whether the theme is light or dark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    #[default]
    Dark,
    Light,
}

impl Appearance {
    pub fn is_dark(self) -> bool {
        matches!(self, Appearance::Dark)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Appearance::Dark => "dark",
            Appearance::Light => "light",
        }
    }
}

impl FromStr for Appearance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(Appearance::Dark),
            "light" => Ok(Appearance::Light),
            other => Err(format!("unknown theme '{}' (expected dark or light)", other)),
        }
    }
}

impl std::fmt::Display for Appearance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Light".parse::<Appearance>(), Ok(Appearance::Light));
        assert_eq!(" dark ".parse::<Appearance>(), Ok(Appearance::Dark));
        assert!("solarized".parse::<Appearance>().is_err());
    }

    #[test]
    fn display_round_trips() {
        assert_eq!(Appearance::Light.to_string(), "light");
        assert!(Appearance::default().is_dark());
    }
}
