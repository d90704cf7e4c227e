//! Attribute name translation between the external style used by input and
//! output mappings (`firstName`) and the internal style used for storage
//! (`first_name`).
//!
//! Both directions are single left-to-right scans. They are total and not
//! inverses of each other: `to_camel_case(to_snake_case(s))` only gives back
//! `s` for regular camelCase input.

/// `\w` in the ASCII sense.
#[inline]
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// External → internal.
///
/// An underscore goes in front of every ASCII uppercase letter whose
/// preceding input character is a word character, then the whole string is
/// lowercased. Runs of capitals are not collapsed: `URLPath` → `u_r_l_path`.
pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if c.is_ascii_uppercase() && prev.is_some_and(is_word_char) {
            out.push('_');
        }
        out.push(c);
        prev = Some(c);
    }
    out.to_lowercase()
}

/// Internal → external.
///
/// Each `_` swallows the character after it and emits that character
/// ASCII-uppercased. A trailing `_`, or one followed by a line feed, is just
/// dropped. Consecutive underscores pair off: `a__b` → `a_b`.
pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '_' {
            out.push(c);
            continue;
        }
        if let Some(next) = chars.next_if(|&n| n != '\n') {
            out.push(next.to_ascii_uppercase());
        }
    }
    out
}
