//! Identifier case conversion.

/// Converts a PascalCase or camelCase identifier to snake_case.
///
/// Acronym runs collapse into a single word: a boundary is only inserted
/// before an uppercase letter that either follows a lowercase letter or
/// digit, or starts a new word (uppercase followed by lowercase, not at the
/// beginning of the input).
///
/// Deterministic and idempotent: already-snake_case input passes through
/// unchanged.
///
/// # Examples
///
/// ```
/// use ormlet::to_snake_case;
///
/// assert_eq!(to_snake_case("UserProfile"), "user_profile");
/// assert_eq!(to_snake_case("HTTPRequest"), "http_request");
/// assert_eq!(to_snake_case("user_profile"), "user_profile");
/// ```
pub fn to_snake_case(name: &str) -> String {
    let mut snake = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    let mut chars = name.chars().peekable();

    while let Some(current) = chars.next() {
        if current.is_ascii_uppercase() {
            let after_word = prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit());
            let starts_word = prev.is_some()
                && chars.peek().is_some_and(|n| n.is_ascii_lowercase());
            if after_word || starts_word {
                snake.push('_');
            }
        }
        snake.push(current.to_ascii_lowercase());
        prev = Some(current);
    }

    snake
}
