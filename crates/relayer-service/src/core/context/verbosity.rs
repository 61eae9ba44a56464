use std::str::FromStr;

use relayer_configuration::Variables;

pub const VERBOSITY_VARIABLE: &str = "VERBOSITY";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum VerbosityConfiguration {
    #[default]
    Debug,
    Info,
}

impl VerbosityConfiguration {
    /// Read the verbosity from `VERBOSITY`, unset or unknown values fall back to debug
    pub fn from_variables(variables: &Variables) -> Self {
        variables
            .get(VERBOSITY_VARIABLE)
            .and_then(|x| Self::from_str(x).ok())
            .unwrap_or_default()
    }
}

impl FromStr for VerbosityConfiguration {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            _ => Err(()),
        }
    }
}
