use std::sync::OnceLock;

/// Environment variable that silences informational CLI output
pub const QUIET_ENV: &str = "CLCNT_QUIET";

static QUIET: OnceLock<bool> = OnceLock::new();

fn truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("yes")
}

fn quiet_from_env() -> bool {
    std::env::var(QUIET_ENV).map(|v| truthy(&v)).unwrap_or(false)
}

/// Apply the `--quiet` flag. Only the first decision sticks, so call this
/// before anything prints.
pub fn set_quiet(flag: bool) {
    let _ = QUIET.set(flag || quiet_from_env());
}

pub fn is_quiet() -> bool {
    *QUIET.get_or_init(quiet_from_env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthy_values() {
        for value in ["1", "true", "TRUE", "yes", "Yes"] {
            assert!(truthy(value), "{value}");
        }
        for value in ["0", "false", "", "no", "2"] {
            assert!(!truthy(value), "{value}");
        }
    }
}
