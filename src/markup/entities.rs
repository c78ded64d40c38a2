// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Blameview and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;

use memchr::memchr;

/// Longest entity name looked at after `&`, including a numeric `#x10FFFF` form.
const MAX_ENTITY_LEN: usize = 10;

/// Decodes the character references the report generator emits inside cell text.
///
/// Unknown or unterminated references are kept verbatim.
pub fn decode_entities(raw: &str) -> Cow<'_, str> {
    let Some(first) = memchr(b'&', raw.as_bytes()) else {
        return Cow::Borrowed(raw);
    };

    let mut out = String::with_capacity(raw.len());
    out.push_str(&raw[..first]);
    let mut rest = &raw[first..];
    loop {
        match decode_one(rest) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
        match memchr(b'&', rest.as_bytes()) {
            Some(idx) => {
                out.push_str(&rest[..idx]);
                rest = &rest[idx..];
            }
            None => {
                out.push_str(rest);
                break;
            }
        }
    }
    Cow::Owned(out)
}

// `s` starts with '&'.
fn decode_one(s: &str) -> Option<(char, usize)> {
    let end = s.as_bytes()[1..].iter().take(MAX_ENTITY_LEN).position(|&b| b == b';')?;
    let name = &s[1..1 + end];
    let ch = match name {
        "nbsp" => '\u{a0}',
        "lt" => '<',
        "gt" => '>',
        "amp" => '&',
        "quot" => '"',
        "apos" => '\'',
        _ => {
            let digits = name.strip_prefix('#')?;
            let code = match digits.strip_prefix(|c: char| c == 'x' || c == 'X') {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => digits.parse::<u32>().ok()?,
            };
            char::from_u32(code)?
        }
    };
    Some((ch, end + 2))
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;

    use super::decode_entities;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(decode_entities("int x = 1;"), Cow::Borrowed(_)));
    }

    #[test]
    fn decodes_generator_entities() {
        assert_eq!(
            decode_entities("if&nbsp;(a&nbsp;&lt;&nbsp;b)&nbsp;&quot;x&quot;"),
            "if\u{a0}(a\u{a0}<\u{a0}b)\u{a0}\"x\""
        );
        assert_eq!(decode_entities("&#39;&#x41;&amp;"), "'A&");
    }

    #[test]
    fn keeps_unknown_and_unterminated_references() {
        assert_eq!(decode_entities("a && b"), "a && b");
        assert_eq!(decode_entities("&bogus;"), "&bogus;");
        assert_eq!(decode_entities("tail &"), "tail &");
    }
}
