use regex::Regex;
use smallvec::SmallVec;
use std::sync::LazyLock;

pub type TokenList = SmallVec<[String; 128]>;

static BRACE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]*\}").expect("valid brace comment pattern"));

/// "1." or "23..."
static MOVE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.(\.\.)?$").expect("valid move number pattern"));

/// Numeric annotation glyph, e.g. "$1".
static NAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$\d+$").expect("valid nag pattern"));

/// Split one raw game line into SAN move tokens followed by the result token.
///
/// Removes `{...}` comments (non-nested; an unterminated `{` stays literal),
/// move numbers, numeric annotation glyphs and trailing `!`/`?` decoration.
/// Never fails: garbage is passed through and rejected later by the replayer.
pub fn tokenize(line: &str) -> TokenList {
    let uncommented = BRACE_COMMENT.replace_all(line, " ");

    uncommented
        .split(is_separator)
        .filter(|token| !token.is_empty() && !is_move_number_or_nag(token))
        .map(|token| token.trim_end_matches(['!', '?']))
        // "1.!" only reveals itself as a move number once stripped
        .filter(|token| !token.is_empty() && !is_move_number_or_nag(token))
        .map(str::to_string)
        .collect()
}

/// Unicode whitespace plus the ASCII information separators `\x1c`..`\x1f`,
/// which game files treat as blanks too.
pub(crate) fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

fn is_move_number_or_nag(token: &str) -> bool {
    MOVE_NUMBER.is_match(token) || NAG.is_match(token)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(line: &str) -> Vec<String> {
        tokenize(line).into_vec()
    }

    #[test]
    fn test_tokenize_strips_move_numbers() {
        assert_eq!(
            tokens("1. e4 e5 2. Nf3 Nc6 1-0"),
            ["e4", "e5", "Nf3", "Nc6", "1-0"]
        );
    }

    #[test]
    fn test_tokenize_strips_black_move_numbers() {
        assert_eq!(tokens("23... Rxe1+ 24. Kh2 *"), ["Rxe1+", "Kh2", "*"]);
    }

    #[test]
    fn test_tokenize_keeps_two_dot_move_number() {
        // Only "N." and "N..." are move numbers.
        assert_eq!(tokens("1.. e4 *"), ["1..", "e4", "*"]);
    }

    #[test]
    fn test_tokenize_strips_nag_and_annotation_symbols() {
        assert_eq!(tokens("1. e4!? $1 e5 0-1"), ["e4", "e5", "0-1"]);
    }

    #[test]
    fn test_tokenize_nag_variants() {
        assert_eq!(
            tokens("e4!! e5?? Nf3!? Nc6?! $10 $255 1/2-1/2"),
            ["e4", "e5", "Nf3", "Nc6", "1/2-1/2"]
        );
    }

    #[test]
    fn test_tokenize_only_strips_trailing_symbols() {
        assert_eq!(tokens("!e4 e!4? *"), ["!e4", "e!4", "*"]);
    }

    #[test]
    fn test_tokenize_attached_nag_is_not_removed() {
        // "$1" is only dropped as a standalone token.
        assert_eq!(tokens("e4$1 *"), ["e4$1", "*"]);
    }

    #[test]
    fn test_tokenize_drops_tokens_that_strip_to_nothing() {
        assert_eq!(tokens("e4 !! ?! e5 *"), ["e4", "e5", "*"]);
    }

    #[test]
    fn test_tokenize_drops_move_numbers_revealed_by_stripping() {
        assert_eq!(tokens("1.! e4 $2? *"), ["e4", "*"]);
    }

    #[test]
    fn test_tokenize_removes_brace_comments() {
        assert_eq!(
            tokens("{ opening } 1. e4 {best by test} e5 {[%clk 1:30:43]} 1-0"),
            ["e4", "e5", "1-0"]
        );
    }

    #[test]
    fn test_tokenize_comment_glued_to_move() {
        assert_eq!(tokens("e4{comment}e5 *"), ["e4", "e5", "*"]);
    }

    #[test]
    fn test_tokenize_nested_braces_are_not_balanced() {
        // The first "}" closes the comment; the rest is literal text.
        assert_eq!(tokens("e4 {a {b} c} e5 *"), ["e4", "c}", "e5", "*"]);
    }

    #[test]
    fn test_tokenize_unterminated_comment_is_literal() {
        assert_eq!(
            tokens("e4 {never closed e5 *"),
            ["e4", "{never", "closed", "e5", "*"]
        );
    }

    #[test]
    fn test_tokenize_blank_and_comment_only_lines() {
        assert!(tokens("").is_empty());
        assert!(tokens(" \t ").is_empty());
        assert!(tokens("{just a comment}").is_empty());
        assert!(tokens("1. 2. 3... $4").is_empty());
    }

    #[test]
    fn test_tokenize_mixed_whitespace() {
        assert_eq!(tokens("1.\te4\t\te5  2.Nf3 *"), ["e4", "e5", "2.Nf3", "*"]);
    }

    #[test]
    fn test_tokenize_information_separators_split_tokens() {
        assert_eq!(
            tokens("\x1f1.\x1fe4\x1ce5\x1d\x1eNf3 *\x1f"),
            ["e4", "e5", "Nf3", "*"]
        );
    }

    #[test]
    fn test_tokenize_unicode_whitespace_splits_tokens() {
        assert_eq!(tokens("e4\u{a0}e5\u{2003}*"), ["e4", "e5", "*"]);
    }

    #[test]
    fn test_tokenize_keeps_check_and_mate_suffixes() {
        assert_eq!(
            tokens("1. e4 e5 2. Qh5 Nc6 3. Bc4 Nf6 4. Qxf7# 1-0"),
            ["e4", "e5", "Qh5", "Nc6", "Bc4", "Nf6", "Qxf7#", "1-0"]
        );
    }

    #[test]
    fn test_tokenize_is_idempotent() {
        for line in [
            "1. e4!? $1 e5 2. Nf3 {comment} Nc6?? 1-0",
            "1.! e4 $2? {a {b} c} e5 *",
            "e4 {never closed e5 0-1",
            "!! ?? 1... Nf6!",
        ] {
            let first = tokenize(line);
            let second = tokenize(&first.join(" "));
            assert_eq!(first, second, "re-tokenizing changed {line:?}");
        }
    }
}
