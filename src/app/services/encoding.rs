//! Ordered text-encoding fallback used when opening files.
//!
//! Files are decoded by trying each candidate of an [`EncodingPolicy`] in
//! order and keeping the first one that decodes without error. This is not
//! detection: a file that happens to be valid under an earlier candidate is
//! always read with that candidate.

use std::fmt;

/// A text encoding the editor can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    Utf8,
    /// Windows Cyrillic code page (CP1251).
    Windows1251,
    /// ISO-8859-1. Every byte is valid, so this never fails.
    Latin1,
}

/// CP1251 code points for bytes 0x80..=0xBF. Zero marks the one unassigned
/// byte (0x98). Bytes 0xC0..=0xFF map linearly onto U+0410..=U+044F.
const CP1251_HIGH: [u16; 64] = [
    0x0402, 0x0403, 0x201A, 0x0453, 0x201E, 0x2026, 0x2020, 0x2021, // 0x80
    0x20AC, 0x2030, 0x0409, 0x2039, 0x040A, 0x040C, 0x040B, 0x040F, // 0x88
    0x0452, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014, // 0x90
    0x0000, 0x2122, 0x0459, 0x203A, 0x045A, 0x045C, 0x045B, 0x045F, // 0x98
    0x00A0, 0x040E, 0x045E, 0x0408, 0x00A4, 0x0490, 0x00A6, 0x00A7, // 0xA0
    0x0401, 0x00A9, 0x0404, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x0407, // 0xA8
    0x00B0, 0x00B1, 0x0406, 0x0456, 0x0491, 0x00B5, 0x00B6, 0x00B7, // 0xB0
    0x0451, 0x2116, 0x0454, 0x00BB, 0x0458, 0x0405, 0x0455, 0x0457, // 0xB8
];

impl TextEncoding {
    /// Short label shown in the status bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Utf8 => "UTF-8",
            Self::Windows1251 => "CP1251",
            Self::Latin1 => "ISO-8859-1",
        }
    }

    /// Strictly decode `bytes`. Returns `None` on the first invalid sequence.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Utf8 => std::str::from_utf8(bytes).ok().map(str::to_owned),
            Self::Windows1251 => bytes.iter().map(|&b| cp1251_char(b)).collect(),
            Self::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn cp1251_char(byte: u8) -> Option<char> {
    match byte {
        0x00..=0x7F => Some(char::from(byte)),
        0x80..=0xBF => match CP1251_HIGH[(byte - 0x80) as usize] {
            0 => None,
            cp => char::from_u32(cp as u32),
        },
        _ => char::from_u32(0x0410 + (byte - 0xC0) as u32),
    }
}

/// Ordered list of candidate encodings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingPolicy {
    candidates: Vec<TextEncoding>,
}

impl EncodingPolicy {
    /// Build a policy from an ordered candidate list. An empty list falls
    /// back to UTF-8 only.
    pub fn new(candidates: Vec<TextEncoding>) -> Self {
        if candidates.is_empty() {
            return Self::utf8_only();
        }
        Self { candidates }
    }

    pub fn utf8_only() -> Self {
        Self {
            candidates: vec![TextEncoding::Utf8],
        }
    }

    pub fn candidates(&self) -> &[TextEncoding] {
        &self.candidates
    }

    /// Decode with the first candidate that accepts the bytes.
    pub fn decode(&self, bytes: &[u8]) -> Option<(String, TextEncoding)> {
        self.candidates
            .iter()
            .find_map(|enc| enc.decode(bytes).map(|text| (text, *enc)))
    }
}

impl Default for EncodingPolicy {
    fn default() -> Self {
        Self::utf8_only()
    }
}
