use crate::compat::Vec;
use encoding_rs::{EncoderResult, Encoding};

/// Byte encodings a `Site` can percent-encode its query and fragment with.
///
/// Labels are first matched against the JDK-style names below, then
/// against the WHATWG label registry through `encoding_rs`. The
/// hand-written variants cover what the registry lacks or maps
/// differently: true ISO-8859-1 and US-ASCII (the registry folds both into
/// windows-1252), UTF-16 with a byte order mark, and UTF-16/UTF-32
/// output, which `encoding_rs` only decodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    Utf8,
    /// Big-endian with a leading `FE FF` mark
    Utf16,
    Utf16Be,
    Utf16Le,
    Utf32Be,
    Utf32Le,
    Latin1,
    Ascii,
    /// Any other encoding from the WHATWG registry
    Whatwg(&'static Encoding),
}

const LABELS: &[(&str, Charset)] = &[
    ("utf-8", Charset::Utf8),
    ("utf8", Charset::Utf8),
    ("utf-16", Charset::Utf16),
    ("utf_16", Charset::Utf16),
    ("utf16", Charset::Utf16),
    ("unicode", Charset::Utf16),
    ("utf-16be", Charset::Utf16Be),
    ("utf_16be", Charset::Utf16Be),
    ("unicodebigunmarked", Charset::Utf16Be),
    ("utf-16le", Charset::Utf16Le),
    ("utf_16le", Charset::Utf16Le),
    ("unicodelittleunmarked", Charset::Utf16Le),
    ("utf-32", Charset::Utf32Be),
    ("utf_32", Charset::Utf32Be),
    ("utf32", Charset::Utf32Be),
    ("utf-32be", Charset::Utf32Be),
    ("utf_32be", Charset::Utf32Be),
    ("utf-32le", Charset::Utf32Le),
    ("utf_32le", Charset::Utf32Le),
    ("iso-8859-1", Charset::Latin1),
    ("iso8859-1", Charset::Latin1),
    ("iso8859_1", Charset::Latin1),
    ("iso_8859_1", Charset::Latin1),
    ("iso_8859-1", Charset::Latin1),
    ("latin1", Charset::Latin1),
    ("l1", Charset::Latin1),
    ("cp819", Charset::Latin1),
    ("us-ascii", Charset::Ascii),
    ("ascii", Charset::Ascii),
    ("iso646-us", Charset::Ascii),
];

impl Charset {
    /// Resolve a charset label. Returns None for anything unsupported.
    pub fn for_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if let Some(&(_, charset)) = LABELS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(label))
        {
            return Some(charset);
        }

        // Encodings whose output encoding differs (UTF-16 variants, the
        // replacement encoding) cannot be written by `encoding_rs`
        Encoding::for_label(label.as_bytes())
            .filter(|encoding| encoding.output_encoding() == *encoding)
            .map(Self::Whatwg)
    }

    /// Append the encoded bytes of `run` to `out`.
    /// Characters the charset cannot represent are written as `?`.
    pub fn encode_into(self, run: &str, out: &mut Vec<u8>) {
        match self {
            Self::Utf8 => out.extend_from_slice(run.as_bytes()),
            Self::Utf16 => {
                out.extend_from_slice(&[0xFE, 0xFF]);
                out.extend(run.encode_utf16().flat_map(u16::to_be_bytes));
            }
            Self::Utf16Be => out.extend(run.encode_utf16().flat_map(u16::to_be_bytes)),
            Self::Utf16Le => out.extend(run.encode_utf16().flat_map(u16::to_le_bytes)),
            Self::Utf32Be => out.extend(run.chars().flat_map(|c| u32::from(c).to_be_bytes())),
            Self::Utf32Le => out.extend(run.chars().flat_map(|c| u32::from(c).to_le_bytes())),
            Self::Latin1 => out.extend(run.chars().map(|c| u8::try_from(c).unwrap_or(b'?'))),
            Self::Ascii => out.extend(
                run.chars()
                    .map(|c| if c.is_ascii() { c as u8 } else { b'?' }),
            ),
            Self::Whatwg(encoding) => encode_whatwg_into(encoding, run, out),
        }
    }
}

fn encode_whatwg_into(encoding: &'static Encoding, run: &str, out: &mut Vec<u8>) {
    let mut encoder = encoding.new_encoder();
    let mut src = run;
    loop {
        let needed = encoder
            .max_buffer_length_from_utf8_without_replacement(src.len())
            .unwrap_or(src.len());
        out.reserve(needed);

        let (result, read) = encoder.encode_from_utf8_to_vec_without_replacement(src, out, true);
        src = &src[read..];
        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => {}
            EncoderResult::Unmappable(_) => out.push(b'?'),
        }
    }
}
