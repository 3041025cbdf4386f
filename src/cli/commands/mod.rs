//! CLI command implementations.

pub mod analyze;
pub mod checklists;
pub mod init;
pub mod parse;
pub mod validate;

use signal_core::error::ParseError;

/// Shown when a message lacks an instrument or timeframe.
pub const PARSE_FAILURE_MESSAGE: &str = "cannot analyze this signal, please check format";

/// User-facing error for an unparseable signal; `main` prints it once.
pub fn parse_failure(error: ParseError) -> anyhow::Error {
    anyhow::Error::new(error).context(PARSE_FAILURE_MESSAGE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_failure_message_appears_once() {
        let err = parse_failure(ParseError::InsufficientStructure { found: 1 });
        assert_eq!(err.to_string(), PARSE_FAILURE_MESSAGE);

        let printed = format!("{:?}", err);
        assert_eq!(printed.matches(PARSE_FAILURE_MESSAGE).count(), 1);
        assert!(err.chain().any(|cause| cause.is::<ParseError>()));
    }
}
