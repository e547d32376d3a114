/// Trailing characters that belong to the surrounding prose, not the URL.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ']', '\'', '"', '>', '*'];

/// Clean a matched URL candidate before classification.
/// Strips control characters and surrounding whitespace, then trailing
/// sentence punctuation. A closing parenthesis is kept only when the URL
/// opened one (`.../Rust_(language)`).
pub fn clean_candidate(raw: &str) -> Option<String> {
    let mut url: String = raw
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string();

    loop {
        let before = url.len();
        while url.ends_with(TRAILING_PUNCTUATION) {
            url.pop();
        }
        if url.ends_with(')') && url.matches(')').count() > url.matches('(').count() {
            url.pop();
        }
        if url.len() == before {
            break;
        }
    }

    if url.is_empty() {
        None
    } else {
        Some(url)
    }
}

/// Decode a PDF string object: UTF-16BE when it carries a BOM, UTF-8 when
/// valid, otherwise Latin-1 (close enough to PDFDocEncoding for URLs).
pub fn decode_pdf_string(bytes: &[u8]) -> String {
    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        return String::from_utf16_lossy(&units);
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => latin1_to_string(bytes),
    }
}

/// Byte-for-byte Latin-1 decoding. Never fails, never shifts offsets.
pub fn latin1_to_string(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
