//! Log level selection
//!
//! The level is fixed at build time: `FOLIO_LOG=debug dx serve`.

use tracing::Level;

/// Parse a level name (`trace`..`error`, any case). Unset or unknown means `info`.
pub fn level(name: Option<&str>) -> Level {
    name.and_then(|s| s.trim().parse::<Level>().ok()).unwrap_or(Level::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_names_parse() {
        assert_eq!(level(Some("debug")), Level::DEBUG);
        assert_eq!(level(Some("trace")), Level::TRACE);
        assert_eq!(level(Some("error")), Level::ERROR);
    }

    #[test]
    fn test_level_ignores_case_and_whitespace() {
        assert_eq!(level(Some(" WARN ")), Level::WARN);
        assert_eq!(level(Some("Debug")), Level::DEBUG);
    }

    #[test]
    fn test_unset_or_unknown_level_is_info() {
        assert_eq!(level(None), Level::INFO);
        assert_eq!(level(Some("bogus")), Level::INFO);
        assert_eq!(level(Some("")), Level::INFO);
    }
}
