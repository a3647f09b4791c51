//! Extraction of translation keys from raw file content.
//!
//! Only single-argument calls with a literal string argument are recognized:
//! `trans('key')` or `trans("key")`. Anything dynamic cannot be resolved to a
//! key statically and is simply not seen.

use std::sync::LazyLock;

use regex::bytes::Regex;

/// Matches `trans('...')` / `trans("...")`, case-insensitive on `trans` only.
///
/// The argument is a run of word characters, whitespace and the punctuation
/// `_ - . ! ? : , \ ' "`. Matching works on bytes so offsets stay exact for
/// files that are not valid UTF-8.
static TRANS_CALL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i:trans)\(['"]([\w\s\-.!?:,\\'"]+)['"]\)"#)
        .expect("translation call pattern is valid")
});

/// A key found in a file, with the byte offset of the captured literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyMatch {
    pub key: String,
    pub offset: usize,
}

/// Yields every translation key in `content`, left to right.
///
/// Escaped quotes (`\'`, `\"`) in the literal are unescaped; everything else
/// is returned as written.
pub fn extract_keys(content: &[u8]) -> impl Iterator<Item = KeyMatch> + '_ {
    TRANS_CALL_REGEX.captures_iter(content).filter_map(|caps| {
        let literal = caps.get(1)?;
        // `\w` and `\s` only match complete UTF-8 sequences, so this is lossless.
        let raw = String::from_utf8_lossy(literal.as_bytes());
        Some(KeyMatch {
            key: unescape_quotes(&raw),
            offset: literal.start(),
        })
    })
}

/// Collapses `\'` and `\"` into bare quotes.
fn unescape_quotes(raw: &str) -> String {
    let mut key = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(&quote @ ('\'' | '"')) = chars.peek() {
                key.push(quote);
                chars.next();
                continue;
            }
        }
        key.push(c);
    }

    key
}
