//! Shared utility functions with zero-cost abstractions.

/// Returns at most `max_chars` characters of `input`, never splitting a character.
pub fn truncate_chars(input: &str, max_chars: usize) -> &str {
    match input.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &input[..byte_index],
        None => input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello world", 5), "hello");
        assert_eq!(truncate_chars("short", 20), "short");
        assert_eq!(truncate_chars("", 20), "");
        assert_eq!(truncate_chars("exactly", 7), "exactly");
    }

    #[test]
    fn test_truncate_chars_multibyte() {
        let input = "héllo wörld 👋 and more";
        assert_eq!(truncate_chars(input, 13), "héllo wörld 👋");
        assert_eq!(truncate_chars("👋👋👋", 2), "👋👋");
    }
}
