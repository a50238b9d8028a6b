use crate::compat::{String, Vec};
use crate::unicode::charset::Charset;
use percent_encoding::{
    AsciiSet, NON_ALPHANUMERIC, percent_encode, percent_encode_byte, utf8_percent_encode,
};

/// `application/x-www-form-urlencoded` byte set.
/// Everything except ASCII alphanumerics and `*`, `-`, `.`, `_` is encoded.
/// Space is handled separately (it becomes `+`).
pub const FORM_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'*')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_');

/// Whether `c` passes through `FORM_SET` untouched
fn is_form_safe(c: char) -> bool {
    c.is_ascii()
        && percent_encode(&[c as u8], FORM_SET)
            .next()
            .is_some_and(|chunk| chunk.len() == 1)
}

/// Form-encode `input` directly into `buffer` using the given charset.
/// Without a charset the raw value is written unencoded.
///
/// Outside UTF-8, each run of characters that need escaping is encoded
/// with the charset as a whole and every resulting byte is written as
/// `%XX`, so bytes that happen to be ASCII are escaped too.
pub fn form_encode_into(buffer: &mut String, input: &str, charset: Option<Charset>) {
    buffer.reserve(input.len());

    match charset {
        None => buffer.push_str(input),
        Some(Charset::Utf8) => {
            for (i, run) in input.split(' ').enumerate() {
                if i > 0 {
                    buffer.push('+');
                }
                for chunk in utf8_percent_encode(run, FORM_SET) {
                    buffer.push_str(chunk);
                }
            }
        }
        Some(charset) => {
            let mut bytes = Vec::new();
            let mut run_start = None;
            for (i, c) in input.char_indices() {
                if c != ' ' && !is_form_safe(c) {
                    run_start.get_or_insert(i);
                    continue;
                }
                if let Some(start) = run_start.take() {
                    encode_run_into(buffer, &input[start..i], charset, &mut bytes);
                }
                buffer.push(if c == ' ' { '+' } else { c });
            }
            if let Some(start) = run_start {
                encode_run_into(buffer, &input[start..], charset, &mut bytes);
            }
        }
    }
}

fn encode_run_into(buffer: &mut String, run: &str, charset: Charset, bytes: &mut Vec<u8>) {
    bytes.clear();
    charset.encode_into(run, bytes);
    for &byte in bytes.iter() {
        buffer.push_str(percent_encode_byte(byte));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_encode(input: &str, charset: Option<Charset>) -> String {
        let mut buffer = String::new();
        form_encode_into(&mut buffer, input, charset);
        buffer
    }

    #[test]
    fn test_form_encode_utf8() {
        let utf8 = Some(Charset::Utf8);
        assert_eq!(form_encode("plain", utf8), "plain");
        assert_eq!(form_encode("a b", utf8), "a+b");
        assert_eq!(form_encode("x&y=z", utf8), "x%26y%3Dz");
        assert_eq!(form_encode("1+1", utf8), "1%2B1");
        assert_eq!(form_encode("*-._~", utf8), "*-._%7E");
        assert_eq!(form_encode("é", utf8), "%C3%A9");
        assert_eq!(form_encode(" lead", utf8), "+lead");
        assert_eq!(form_encode("", utf8), "");
    }

    #[test]
    fn test_form_encode_single_byte_charsets() {
        assert_eq!(form_encode("café", Some(Charset::Latin1)), "caf%E9");
        assert_eq!(form_encode("café", Some(Charset::Ascii)), "caf%3F");
        assert_eq!(form_encode("a b/c", Some(Charset::Latin1)), "a+b%2Fc");
    }

    #[test]
    fn test_form_encode_utf16() {
        // Safe characters bypass the charset, unsafe ones are encoded byte by byte
        assert_eq!(form_encode("a&", Some(Charset::Utf16Be)), "a%00%26");
        assert_eq!(form_encode("é", Some(Charset::Utf16Le)), "%E9%00");
        // Each escaped run carries its own byte order mark
        assert_eq!(
            form_encode("a b&c=", Some(Charset::Utf16)),
            "a+b%FE%FF%00%26c%FE%FF%00%3D"
        );
        assert_eq!(form_encode("&=", Some(Charset::Utf16)), "%FE%FF%00%26%00%3D");
    }

    #[test]
    fn test_form_encode_registry_charset() {
        let windows_1252 = Charset::for_label("windows-1252");
        assert_eq!(form_encode("a b&c", windows_1252), "a+b%26c");
        assert_eq!(form_encode("5€", windows_1252), "5%80");
    }

    #[test]
    fn test_form_safe_matches_form_set() {
        for byte in 0u8..=0x7F {
            let c = char::from(byte);
            let expected = c.is_ascii_alphanumeric() || matches!(c, '*' | '-' | '.' | '_');
            assert_eq!(is_form_safe(c), expected, "byte {byte:#04x}");
        }
        assert!(!is_form_safe('é'));
    }

    #[test]
    fn test_form_encode_without_charset() {
        assert_eq!(form_encode("a b&c", None), "a b&c");
    }
}
