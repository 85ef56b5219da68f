//! Configuration for the terminal host.
//!
//! Every tunable has a compile-time default and can be overridden through a
//! dedicated environment variable. Command-line flags win over both.

/// Default tracing filter. Kept at `warn` so the game transcript stays readable.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Default ply cap for `autoplay`.
const DEFAULT_MAX_PLIES: u32 = 200;

/// Get the tracing filter directive.
///
/// Priority:
/// 1. `CHESS_TERM_LOG` env variable if set
/// 2. `warn` as fallback
pub fn get_log_filter() -> String {
    if let Ok(filter) = std::env::var("CHESS_TERM_LOG") {
        return filter;
    }

    DEFAULT_LOG_FILTER.to_string()
}

/// Get the seed for the random-move generator.
///
/// Returns the value of `CHESS_TERM_SEED` when it parses as a `u64`, and
/// `None` otherwise, in which case the generator is seeded from entropy.
pub fn get_seed() -> Option<u64> {
    std::env::var("CHESS_TERM_SEED")
        .ok()
        .and_then(|seed| seed.trim().parse().ok())
}

/// Get the ply cap for `autoplay`.
///
/// Priority:
/// 1. `CHESS_TERM_MAX_PLIES` env variable if set (falls back to default if
///    the value cannot be parsed as a `u32`)
/// 2. `200` plies as fallback
pub fn get_max_plies() -> u32 {
    if let Ok(plies) = std::env::var("CHESS_TERM_MAX_PLIES") {
        return plies.trim().parse().unwrap_or(DEFAULT_MAX_PLIES);
    }

    DEFAULT_MAX_PLIES
}
