use std::str::FromStr;

/// Whether `GET /api/portfolio` tells the caller which sections fell back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FailureReporting {
    /// Fallbacks are only logged.
    #[default]
    Silent,
    /// The response carries a `failures` array next to the view.
    Expose,
}

impl FromStr for FailureReporting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" => Ok(FailureReporting::Silent),
            "expose" => Ok(FailureReporting::Expose),
            other => Err(format!(
                "PORTFOLIO_FAILURE_REPORTING must be 'silent' or 'expose', got '{}'",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes_ignoring_case() {
        assert_eq!("silent".parse(), Ok(FailureReporting::Silent));
        assert_eq!(" EXPOSE ".parse(), Ok(FailureReporting::Expose));
    }

    #[test]
    fn rejects_unknown_mode() {
        let err = "loud".parse::<FailureReporting>().unwrap_err();
        assert!(err.contains("loud"));
    }
}
