//! Demonstration greeting library.

/// Returns a farewell for `name`.
///
/// An empty name is greeted as `nobody`, so the result is never empty and
/// always starts with `"Bye "`.
pub fn bye(name: &str) -> String {
    if name.is_empty() {
        return "Bye nobody".to_string();
    }
    format!("Bye {}", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bye() {
        assert_eq!(bye("my-library"), "Bye my-library");
        assert_eq!(bye(""), "Bye nobody");
    }

    #[test]
    fn test_bye_whitespace_is_a_name() {
        assert_eq!(bye(" "), "Bye  ");
    }
}
