use std::fmt::{self, Display};
use std::str::FromStr;

use crate::LessIoError;

const REPLACEMENT_BYTE: u8 = b'?';
const BYTE_ORDER_MARK_BE: [u8; 2] = [0xFE, 0xFF];
const BYTE_ORDER_MARK_LE: [u8; 2] = [0xFF, 0xFE];

/// Character encodings available for reading sources and writing output
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Encoding {
    UsAscii,
    Iso8859_1,
    #[default]
    Utf8,
    Utf16Be,
    Utf16Le,
    /// Big-endian with a byte order mark when encoding; honours either
    /// byte order mark when decoding
    Utf16,
}

impl Encoding {
    pub fn name(&self) -> &'static str {
        match self {
            Encoding::UsAscii => "US-ASCII",
            Encoding::Iso8859_1 => "ISO-8859-1",
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16Be => "UTF-16BE",
            Encoding::Utf16Le => "UTF-16LE",
            Encoding::Utf16 => "UTF-16",
        }
    }

    /// Encode `text`. Characters a single-byte encoding cannot represent
    /// are written as `?`.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Encoding::UsAscii => encode_single_byte(text, 0x7F),
            Encoding::Iso8859_1 => encode_single_byte(text, 0xFF),
            Encoding::Utf8 => text.as_bytes().to_vec(),
            Encoding::Utf16Be => {
                text.encode_utf16().flat_map(u16::to_be_bytes).collect()
            }
            Encoding::Utf16Le => {
                text.encode_utf16().flat_map(u16::to_le_bytes).collect()
            }
            Encoding::Utf16 => {
                let mut bytes = BYTE_ORDER_MARK_BE.to_vec();
                bytes.extend(text.encode_utf16().flat_map(u16::to_be_bytes));
                bytes
            }
        }
    }

    /// Decode `bytes`, replacing malformed input with U+FFFD
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            Encoding::UsAscii => bytes
                .iter()
                .map(|&byte| {
                    if byte.is_ascii() {
                        char::from(byte)
                    } else {
                        char::REPLACEMENT_CHARACTER
                    }
                })
                .collect(),
            Encoding::Iso8859_1 => {
                bytes.iter().map(|&byte| char::from(byte)).collect()
            }
            Encoding::Utf8 => String::from_utf8_lossy(bytes).into_owned(),
            Encoding::Utf16Be => decode_utf16(bytes, u16::from_be_bytes),
            Encoding::Utf16Le => decode_utf16(bytes, u16::from_le_bytes),
            Encoding::Utf16 => {
                let little_endian = bytes.strip_prefix(&BYTE_ORDER_MARK_LE[..]);
                if let Some(rest) = little_endian {
                    return decode_utf16(rest, u16::from_le_bytes);
                }
                let rest = bytes
                    .strip_prefix(&BYTE_ORDER_MARK_BE[..])
                    .unwrap_or(bytes);
                decode_utf16(rest, u16::from_be_bytes)
            }
        }
    }
}

fn encode_single_byte(text: &str, max: u32) -> Vec<u8> {
    text.chars()
        .map(|c| match u8::try_from(u32::from(c)) {
            Ok(byte) if u32::from(byte) <= max => byte,
            _ => REPLACEMENT_BYTE,
        })
        .collect()
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> String {
    let chunks = bytes.chunks_exact(2);
    let dangling = !chunks.remainder().is_empty();
    let units = chunks.map(|pair| unit([pair[0], pair[1]]));

    let mut text: String = char::decode_utf16(units)
        .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect();
    if dangling {
        text.push(char::REPLACEMENT_CHARACTER);
    }
    text
}

impl FromStr for Encoding {
    type Err = LessIoError;

    /// Parse an encoding name, ignoring case, `-` and `_`
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let normalized: String = name
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        match normalized.as_str() {
            "USASCII" | "ASCII" => Ok(Encoding::UsAscii),
            "ISO88591" | "LATIN1" | "L1" => Ok(Encoding::Iso8859_1),
            "UTF8" => Ok(Encoding::Utf8),
            "UTF16BE" => Ok(Encoding::Utf16Be),
            "UTF16LE" => Ok(Encoding::Utf16Le),
            "UTF16" | "UNICODE" => Ok(Encoding::Utf16),
            _ => {
                log::debug!("unsupported encoding {:?}", name);
                Err(LessIoError::InvalidArgument("encoding"))
            }
        }
    }
}

impl Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
