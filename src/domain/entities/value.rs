//! Typed magic values
//!
//! Signature databases describe magic values as typed integers or escaped strings. These
//! helpers turn each supported type into the raw bytes a [`SubRule`](super::SubRule)
//! compares against, so nothing is decoded at match time.
//!
//! Host byte order always encodes big-endian, whatever the build target is.

/// Raw bytes of a string value
pub fn string(value: &str) -> Vec<u8> {
    value.as_bytes().to_vec()
}

/// A single byte
pub fn byte(value: u8) -> Vec<u8> {
    vec![value]
}

pub fn big16(value: u16) -> Vec<u8> {
    value.to_be_bytes().to_vec()
}

pub fn big32(value: u32) -> Vec<u8> {
    value.to_be_bytes().to_vec()
}

pub fn little16(value: u16) -> Vec<u8> {
    value.to_le_bytes().to_vec()
}

pub fn little32(value: u32) -> Vec<u8> {
    value.to_le_bytes().to_vec()
}

/// 16-bit value in "host" order, which resolves to big-endian
pub fn host16(value: u16) -> Vec<u8> {
    big16(value)
}

/// 32-bit value in "host" order, which resolves to big-endian
pub fn host32(value: u32) -> Vec<u8> {
    big32(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_encodings() {
        assert_eq!(big16(0x1234), vec![0x12, 0x34]);
        assert_eq!(little16(0x1234), vec![0x34, 0x12]);
        assert_eq!(big32(0x1A45_DFA3), vec![0x1A, 0x45, 0xDF, 0xA3]);
        assert_eq!(little32(0x950412DE), vec![0xDE, 0x12, 0x04, 0x95]);
    }

    #[test]
    fn test_host_order_is_big_endian() {
        assert_eq!(host16(0o070707), big16(0o070707));
        assert_eq!(host16(0o070707), vec![0x71, 0xC7]);
        assert_eq!(host32(0xCAFEBABE), vec![0xCA, 0xFE, 0xBA, 0xBE]);
    }

    #[test]
    fn test_string_and_byte() {
        assert_eq!(string("RIFF"), b"RIFF".to_vec());
        assert_eq!(byte(0x0C), vec![0x0C]);
    }
}
