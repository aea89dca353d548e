/// Converts a CapitalizedWords identifier into lower_snake_case.
///
/// An underscore is inserted before an upper-case letter that follows a
/// lower-case letter or a digit, and before the last capital of an acronym run
/// when a lower-case letter follows it (`HTTPEcho` becomes `http_echo`).
pub fn to_snake_case(ident: &str) -> String {
    let chars: Vec<char> = ident.chars().collect();
    let mut snake = String::with_capacity(ident.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_uppercase() {
            snake.push(c);
            continue;
        }

        if i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|next| next.is_lowercase());
            if prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower)
            {
                snake.push('_');
            }
        }
        snake.extend(c.to_lowercase());
    }

    snake
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_word_is_lower_cased() {
        assert_eq!(to_snake_case("Echo"), "echo");
    }

    #[test]
    fn test_words_are_joined_with_underscores() {
        assert_eq!(to_snake_case("ReverseEcho"), "reverse_echo");
        assert_eq!(to_snake_case("VeryLongEventName"), "very_long_event_name");
    }

    #[test]
    fn test_acronym_run_stays_one_word() {
        assert_eq!(to_snake_case("HTTPEcho"), "http_echo");
        assert_eq!(to_snake_case("EchoHTTP"), "echo_http");
    }

    #[test]
    fn test_digit_boundary_starts_new_word() {
        assert_eq!(to_snake_case("Echo2Reverse"), "echo2_reverse");
    }

    #[test]
    fn test_already_snake_case_is_unchanged() {
        assert_eq!(to_snake_case("reverse_echo"), "reverse_echo");
        assert_eq!(to_snake_case("Reverse_Echo"), "reverse_echo");
    }

    #[test]
    fn test_conversion_is_deterministic() {
        assert_eq!(to_snake_case("ReverseEcho"), to_snake_case("ReverseEcho"));
    }
}
