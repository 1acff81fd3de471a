//! Tolerant reader for JSON with comments (the dialect compiler configs use).
//!
//! `//` and `/* */` comments outside strings are removed, trailing commas
//! before `}` or `]` are dropped, and the result is parsed strictly by
//! `serde_json`. Newlines inside comments are kept so parse errors still
//! point at the right line.

use serde_json::Value;

/// Parse JSONC text into a `serde_json::Value`.
pub fn parse(input: &str) -> Result<Value, serde_json::Error> {
    let stripped = strip_trailing_commas(&strip_comments(input));
    serde_json::from_str(&stripped)
}

/// Remove line and block comments while respecting string literals.
pub fn strip_comments(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                out.push('"');
                copy_string_body(&mut chars, &mut out);
            }
            '/' if chars.peek() == Some(&'/') => {
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut prev = '\0';
                for next in chars.by_ref() {
                    if prev == '*' && next == '/' {
                        break;
                    }
                    if next == '\n' {
                        out.push('\n');
                    }
                    prev = next;
                }
                out.push(' ');
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Drop commas that are followed (after whitespace) by `}` or `]`.
pub fn strip_trailing_commas(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                out.push('"');
                copy_string_body(&mut chars, &mut out);
            }
            ',' => {
                let rest: String = chars
                    .clone()
                    .skip_while(|c| c.is_whitespace())
                    .take(1)
                    .collect();
                if rest != "}" && rest != "]" {
                    out.push(',');
                }
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Copy a string literal body up to and including the closing quote.
fn copy_string_body<I: Iterator<Item = char>>(chars: &mut I, out: &mut String) {
    while let Some(c) = chars.next() {
        out.push(c);
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            }
            '"' => break,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_line_and_block_comments() {
        let input = r#"{
  // line comment
  "a": 1, /* block
  comment */ "b": "x"
}"#;
        let value = parse(input).unwrap();
        assert_eq!(value["a"], 1);
        assert_eq!(value["b"], "x");
    }

    #[test]
    fn test_keeps_comment_markers_inside_strings() {
        let value = parse(r#"{ "url": "http://example.com/*x*/", "q": "say \"//hi\"" }"#).unwrap();
        assert_eq!(value["url"], "http://example.com/*x*/");
        assert_eq!(value["q"], "say \"//hi\"");
    }

    #[test]
    fn test_trailing_commas() {
        let value = parse("{ \"a\": [1, 2, ], \"b\": { \"c\": true, }, }").unwrap();
        assert_eq!(value["a"].as_array().unwrap().len(), 2);
        assert_eq!(value["b"]["c"], true);
    }

    #[test]
    fn test_block_comment_preserves_line_numbers() {
        let stripped = strip_comments("/* one\ntwo\nthree */{}");
        assert_eq!(stripped.matches('\n').count(), 2);
    }

    #[test]
    fn test_non_ascii_survives() {
        let value = parse("{ \"name\": \"caf\u{e9} \u{1F600}\" // \u{fc}ber\n}").unwrap();
        assert_eq!(value["name"], "caf\u{e9} \u{1F600}");
    }

    #[test]
    fn test_invalid_json_still_errors() {
        assert!(parse("{ \"a\": }").is_err());
    }
}
