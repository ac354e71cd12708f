//! Map search link for the station the roulette lands on.

use crate::config::{MAP_QUERY_SUFFIX, MAP_SEARCH_BASE};

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Bytes left verbatim: ASCII alphanumerics plus `encodeURIComponent`'s
/// unreserved marks. Everything else becomes `%XX` per UTF-8 byte.
fn is_unreserved(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || matches!(
            byte,
            b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')'
        )
}

/// Percent-encode a query component, uppercase hex.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for &byte in input.as_bytes() {
        if is_unreserved(byte) {
            out.push(byte as char);
        } else {
            out.push('%');
            out.push(HEX[usize::from(byte >> 4)] as char);
            out.push(HEX[usize::from(byte & 0x0f)] as char);
        }
    }
    out
}

/// Full search URL for one landed station, suffixed so the map looks up the
/// railway station rather than a same-named district.
pub fn station_map_url(name: &str) -> String {
    let query = format!("{name}{MAP_QUERY_SUFFIX}");
    format!("{MAP_SEARCH_BASE}?q={}", encode_uri_component(&query))
}
