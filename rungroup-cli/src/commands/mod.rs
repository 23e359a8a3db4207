pub(crate) mod catalog;
pub(crate) mod config;
pub(crate) mod location;
pub(crate) mod store;
pub(crate) mod users;

use serde::Serialize;

use crate::CliError;

/// Write `value` to stdout as pretty JSON.
pub(crate) fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Truncate a string to a maximum width, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Charlotte", 20), "Charlotte");
        assert_eq!(truncate_str("Charlotte Running Club", 12), "Charlotte...");
        assert_eq!(truncate_str("Charlotte", 3), "Cha");
        assert_eq!(truncate_str("", 5), "");
    }
}
