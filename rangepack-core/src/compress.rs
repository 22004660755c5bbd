//! Substitution compression for short conversational text
//!
//! A fixed 254-entry codebook of common English short-message substrings;
//! the array index is the encoded wire byte. Bytes that match no entry are
//! accumulated and flushed as literal runs: 0xFE marker, one length byte
//! (1-255), then the raw bytes. 0xFF is reserved and never legal.
//!
//! The transform is byte-level: multi-byte UTF-8 characters enter the
//! literal buffer as raw bytes.

use crate::constants::{CODEBOOK_SIZE, LITERAL_MARKER, MAX_LITERAL_RUN, RESERVED_BYTE};
use crate::error::PacketError;
use std::sync::OnceLock;

/// Codebook, roughly sorted by frequency in short conversational English.
/// The index in this array is the encoded byte value.
pub(crate) static CODEBOOK: [&str; CODEBOOK_SIZE] = [
    /* 0x00 */ " ",
    /* 0x01 */ "e",
    /* 0x02 */ "t",
    /* 0x03 */ "a",
    /* 0x04 */ "o",
    /* 0x05 */ "i",
    /* 0x06 */ "n",
    /* 0x07 */ "s",
    /* 0x08 */ "r",
    /* 0x09 */ "h",
    /* 0x0A */ "l",
    /* 0x0B */ "d",
    /* 0x0C */ "the",
    /* 0x0D */ " the",
    /* 0x0E */ "th",
    /* 0x0F */ "he",
    /* 0x10 */ "in",
    /* 0x11 */ "er",
    /* 0x12 */ "an",
    /* 0x13 */ "on",
    /* 0x14 */ " a",
    /* 0x15 */ "re",
    /* 0x16 */ "nd",
    /* 0x17 */ "en",
    /* 0x18 */ "at",
    /* 0x19 */ "ed",
    /* 0x1A */ "or",
    /* 0x1B */ "es",
    /* 0x1C */ "is",
    /* 0x1D */ "it",
    /* 0x1E */ "ou",
    /* 0x1F */ "to",
    /* 0x20 */ "ing",
    /* 0x21 */ " to",
    /* 0x22 */ " is",
    /* 0x23 */ " in",
    /* 0x24 */ " it",
    /* 0x25 */ " an",
    /* 0x26 */ " on",
    /* 0x27 */ "tion",
    /* 0x28 */ "er ",
    /* 0x29 */ "ed ",
    /* 0x2A */ "es ",
    /* 0x2B */ " of",
    /* 0x2C */ "of ",
    /* 0x2D */ "and",
    /* 0x2E */ " and",
    /* 0x2F */ "for",
    /* 0x30 */ " for",
    /* 0x31 */ "you",
    /* 0x32 */ " you",
    /* 0x33 */ "tha",
    /* 0x34 */ "that",
    /* 0x35 */ " tha",
    /* 0x36 */ "hat",
    /* 0x37 */ "all",
    /* 0x38 */ "are",
    /* 0x39 */ " are",
    /* 0x3A */ "not",
    /* 0x3B */ " not",
    /* 0x3C */ "have",
    /* 0x3D */ " hav",
    /* 0x3E */ "with",
    /* 0x3F */ " wit",
    /* 0x40 */ "was",
    /* 0x41 */ " was",
    /* 0x42 */ "can",
    /* 0x43 */ " can",
    /* 0x44 */ "but",
    /* 0x45 */ " but",
    /* 0x46 */ "ght",
    /* 0x47 */ "igh",
    /* 0x48 */ "ing ",
    /* 0x49 */ "ent",
    /* 0x4A */ "ion",
    /* 0x4B */ "her",
    /* 0x4C */ " her",
    /* 0x4D */ "his",
    /* 0x4E */ " his",
    /* 0x4F */ "ould",
    /* 0x50 */ "ome",
    /* 0x51 */ "out",
    /* 0x52 */ " out",
    /* 0x53 */ "thi",
    /* 0x54 */ "this",
    /* 0x55 */ " thi",
    /* 0x56 */ "ver",
    /* 0x57 */ "ever",
    /* 0x58 */ "ust",
    /* 0x59 */ "just",
    /* 0x5A */ " jus",
    /* 0x5B */ "abo",
    /* 0x5C */ "abou",
    /* 0x5D */ "get",
    /* 0x5E */ " get",
    /* 0x5F */ "whe",
    /* 0x60 */ "when",
    /* 0x61 */ " whe",
    /* 0x62 */ " wh",
    /* 0x63 */ "ome ",
    /* 0x64 */ "here",
    /* 0x65 */ " her",
    /* 0x66 */ "ther",
    /* 0x67 */ "from",
    /* 0x68 */ " fro",
    /* 0x69 */ "ght ",
    /* 0x6A */ "rig",
    /* 0x6B */ "righ",
    /* 0x6C */ "ow",
    /* 0x6D */ "now",
    /* 0x6E */ " now",
    /* 0x6F */ "how",
    /* 0x70 */ " how",
    /* 0x71 */ "kno",
    /* 0x72 */ "know",
    /* 0x73 */ " kno",
    /* 0x74 */ "will",
    /* 0x75 */ " wil",
    /* 0x76 */ "ould ",
    /* 0x77 */ "hey",
    /* 0x78 */ "they",
    /* 0x79 */ " the ",
    /* 0x7A */ "like",
    /* 0x7B */ " lik",
    /* 0x7C */ "goin",
    /* 0x7D */ "going",
    /* 0x7E */ " goi",
    /* 0x7F */ "com",
    /* 0x80 */ "come",
    /* 0x81 */ " com",
    /* 0x82 */ "look",
    /* 0x83 */ " loo",
    /* 0x84 */ "wha",
    /* 0x85 */ "what",
    /* 0x86 */ " wha",
    /* 0x87 */ "back",
    /* 0x88 */ " bac",
    /* 0x89 */ "been",
    /* 0x8A */ " bee",
    /* 0x8B */ "good",
    /* 0x8C */ " goo",
    /* 0x8D */ "need",
    /* 0x8E */ " nee",
    /* 0x8F */ "help",
    /* 0x90 */ " hel",
    /* 0x91 */ "way",
    /* 0x92 */ " way",
    /* 0x93 */ "ple",
    /* 0x94 */ "leas",
    /* 0x95 */ "ease",
    /* 0x96 */ "than",
    /* 0x97 */ "hank",
    /* 0x98 */ "ank",
    /* 0x99 */ "here ",
    /* 0x9A */ "wor",
    /* 0x9B */ "work",
    /* 0x9C */ " wor",
    /* 0x9D */ "yeah",
    /* 0x9E */ " yea",
    /* 0x9F */ "sor",
    /* 0xA0 */ "sorry",
    /* 0xA1 */ " sor",
    /* 0xA2 */ "ple",
    /* 0xA3 */ "pleas",
    /* 0xA4 */ "lease",
    /* 0xA5 */ "okay",
    /* 0xA6 */ " oka",
    /* 0xA7 */ "may",
    /* 0xA8 */ "maybe",
    /* 0xA9 */ " may",
    /* 0xAA */ "sure",
    /* 0xAB */ " sur",
    /* 0xAC */ "min",
    /* 0xAD */ "minu",
    /* 0xAE */ "minut",
    /* 0xAF */ "think",
    /* 0xB0 */ " thin",
    /* 0xB1 */ " th",
    /* 0xB2 */ "don",
    /* 0xB3 */ "don'",
    /* 0xB4 */ "don't",
    /* 0xB5 */ " do",
    /* 0xB6 */ "ight",
    /* 0xB7 */ "night",
    /* 0xB8 */ " nig",
    /* 0xB9 */ "cal",
    /* 0xBA */ "call",
    /* 0xBB */ " cal",
    /* 0xBC */ "morn",
    /* 0xBD */ "morni",
    /* 0xBE */ " mor",
    /* 0xBF */ "see",
    /* 0xC0 */ " see",
    /* 0xC1 */ "day",
    /* 0xC2 */ " day",
    /* 0xC3 */ "today",
    /* 0xC4 */ " tod",
    /* 0xC5 */ "tomor",
    /* 0xC6 */ " tom",
    /* 0xC7 */ "free",
    /* 0xC8 */ " fre",
    /* 0xC9 */ "din",
    /* 0xCA */ "dinn",
    /* 0xCB */ "dinne",
    /* 0xCC */ " din",
    /* 0xCD */ "lunch",
    /* 0xCE */ " lun",
    /* 0xCF */ "meet",
    /* 0xD0 */ " mee",
    /* 0xD1 */ "time",
    /* 0xD2 */ " tim",
    /* 0xD3 */ "loc",
    /* 0xD4 */ "locat",
    /* 0xD5 */ " loc",
    /* 0xD6 */ "head",
    /* 0xD7 */ " hea",
    /* 0xD8 */ "wait",
    /* 0xD9 */ " wai",
    /* 0xDA */ "safe",
    /* 0xDB */ " saf",
    /* 0xDC */ "leav",
    /* 0xDD */ "leave",
    /* 0xDE */ " lea",
    /* 0xDF */ "around",
    /* 0xE0 */ " aro",
    /* 0xE1 */ "stay",
    /* 0xE2 */ " sta",
    /* 0xE3 */ "emer",
    /* 0xE4 */ "emerg",
    /* 0xE5 */ " eme",
    /* 0xE6 */ "copy",
    /* 0xE7 */ " cop",
    /* 0xE8 */ "rog",
    /* 0xE9 */ "roger",
    /* 0xEA */ " rog",
    /* 0xEB */ "over",
    /* 0xEC */ " ove",
    /* 0xED */ "ack",
    /* 0xEE */ " ack",
    /* 0xEF */ "'s",
    /* 0xF0 */ "n't",
    /* 0xF1 */ "'m",
    /* 0xF2 */ "'re",
    /* 0xF3 */ "'ll",
    /* 0xF4 */ "'ve",
    /* 0xF5 */ "ly ",
    /* 0xF6 */ "ment",
    /* 0xF7 */ "ness",
    /* 0xF8 */ "able",
    /* 0xF9 */ "ful",
    /* 0xFA */ "tion ",
    /* 0xFB */ ". ",
    /* 0xFC */ ", ",
    /* 0xFD */ "? ",
];

/// Longest-prefix index: entries bucketed by first byte, each bucket sorted
/// by length descending then codebook index ascending, so a linear bucket
/// scan yields the longest match with ties going to the lowest index.
struct PrefixIndex {
    buckets: [Vec<(u8, &'static [u8])>; 256],
}

impl PrefixIndex {
    fn build() -> Self {
        let mut buckets: [Vec<(u8, &'static [u8])>; 256] =
            std::array::from_fn(|_| Vec::new());
        for (idx, entry) in CODEBOOK.iter().enumerate() {
            let bytes = entry.as_bytes();
            buckets[bytes[0] as usize].push((idx as u8, bytes));
        }
        for bucket in buckets.iter_mut() {
            bucket.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then(a.0.cmp(&b.0)));
        }
        Self { buckets }
    }

    /// Longest codebook entry prefixing `rest`, lowest index on ties
    fn longest_match(&self, rest: &[u8]) -> Option<(u8, usize)> {
        let bucket = &self.buckets[rest[0] as usize];
        bucket
            .iter()
            .find(|(_, entry)| rest.len() >= entry.len() && &rest[..entry.len()] == *entry)
            .map(|(idx, entry)| (*idx, entry.len()))
    }
}

fn prefix_index() -> &'static PrefixIndex {
    static INDEX: OnceLock<PrefixIndex> = OnceLock::new();
    INDEX.get_or_init(PrefixIndex::build)
}

/// Compress text into a token stream of codebook indices and literal runs
pub fn compress(text: &str) -> Vec<u8> {
    let input = text.as_bytes();
    let mut out = Vec::with_capacity(input.len());
    let mut literals: Vec<u8> = Vec::new();
    let index = prefix_index();

    let mut pos = 0;
    while pos < input.len() {
        match index.longest_match(&input[pos..]) {
            Some((idx, len)) => {
                flush_literals(&mut out, &mut literals);
                out.push(idx);
                pos += len;
            }
            None => {
                literals.push(input[pos]);
                pos += 1;
            }
        }
    }
    flush_literals(&mut out, &mut literals);
    out
}

/// Emit pending literal bytes as escape runs, splitting runs over 255 bytes
fn flush_literals(out: &mut Vec<u8>, literals: &mut Vec<u8>) {
    for chunk in literals.chunks(MAX_LITERAL_RUN) {
        out.push(LITERAL_MARKER);
        out.push(chunk.len() as u8);
        out.extend_from_slice(chunk);
    }
    literals.clear();
}

/// Expand a token stream back into the original text
pub fn decompress(data: &[u8]) -> Result<String, PacketError> {
    let mut out: Vec<u8> = Vec::with_capacity(data.len() * 2);

    let mut pos = 0;
    while pos < data.len() {
        let byte = data[pos];
        if byte == LITERAL_MARKER {
            let len = *data
                .get(pos + 1)
                .ok_or(PacketError::TruncatedLiteral(pos))? as usize;
            let start = pos + 2;
            let end = start + len;
            if end > data.len() {
                return Err(PacketError::TruncatedLiteral(pos));
            }
            out.extend_from_slice(&data[start..end]);
            pos = end;
        } else if byte == RESERVED_BYTE {
            return Err(PacketError::ReservedByte(pos));
        } else if (byte as usize) < CODEBOOK_SIZE {
            out.extend_from_slice(CODEBOOK[byte as usize].as_bytes());
            pos += 1;
        } else {
            return Err(PacketError::InvalidIndex(byte));
        }
    }

    String::from_utf8(out).map_err(|_| PacketError::InvalidUtf8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_plain_text() {
        for text in [
            "Hello",
            "meet me at the lake in 20 minutes",
            "roger that, heading back now",
            "ok",
            "x",
        ] {
            let packed = compress(text);
            assert_eq!(decompress(&packed).unwrap(), text);
        }
    }

    #[test]
    fn test_round_trip_utf8() {
        let text = "caf\u{e9} at no\u{f6}n \u{1F600} ok?";
        let packed = compress(text);
        assert_eq!(decompress(&packed).unwrap(), text);
    }

    #[test]
    fn test_every_entry_is_a_single_token() {
        // Encoding any codebook string in isolation yields exactly one
        // index byte, and decoding returns that exact string
        for (idx, entry) in CODEBOOK.iter().enumerate() {
            let packed = compress(entry);
            assert_eq!(packed.len(), 1, "entry {idx:#04x} {entry:?}");
            assert_eq!(decompress(&packed).unwrap(), *entry);
        }
    }

    #[test]
    fn test_tie_breaks_to_lowest_index() {
        // " her" appears at both 0x4C and 0x65; the lower index wins
        let packed = compress(" her");
        assert_eq!(packed, vec![0x4C]);
        // "ple" appears at 0x93 and 0xA2
        let packed = compress("ple");
        assert_eq!(packed, vec![0x93]);
    }

    #[test]
    fn test_common_text_shrinks() {
        let text = "thanks for the help, see you tomorrow";
        let packed = compress(text);
        assert!(packed.len() < text.len());
    }

    #[test]
    fn test_unmatched_bytes_become_literals() {
        let packed = compress("#");
        assert_eq!(packed, vec![LITERAL_MARKER, 1, b'#']);
    }

    #[test]
    fn test_literal_run_splits_past_255() {
        let text: String = std::iter::repeat('#').take(300).collect();
        let packed = compress(&text);
        assert_eq!(packed[0], LITERAL_MARKER);
        assert_eq!(packed[1], 255);
        assert_eq!(packed[257], LITERAL_MARKER);
        assert_eq!(packed[258], 45);
        assert_eq!(decompress(&packed).unwrap(), text);
    }

    #[test]
    fn test_empty_input() {
        assert!(compress("").is_empty());
        assert_eq!(decompress(&[]).unwrap(), "");
    }

    #[test]
    fn test_reserved_byte_rejected() {
        assert_eq!(
            decompress(&[0x00, 0xFF]),
            Err(PacketError::ReservedByte(1))
        );
    }

    #[test]
    fn test_truncated_literal_rejected() {
        assert_eq!(
            decompress(&[LITERAL_MARKER]),
            Err(PacketError::TruncatedLiteral(0))
        );
        assert_eq!(
            decompress(&[LITERAL_MARKER, 5, b'a']),
            Err(PacketError::TruncatedLiteral(0))
        );
    }
}
