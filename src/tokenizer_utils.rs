pub fn is_ascii_whitespace(c: u8) -> bool {
   is_newline(c) || is_ascii_whitespace_no_nl(c)
}

pub fn is_ascii_whitespace_no_nl(c: u8) -> bool {
    c == b'\t' || c == 0x0b || c == 0x0c || c == b' '
}

pub fn is_newline(c: u8) -> bool {
    c == b'\n' || c == b'\r'
}

// at-rule names and custom property idents
pub fn valid_name_char(c: u8) -> bool {
    match c {
        b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'-' | b'_' => true,
        _ => false,
    }
}

pub fn is_quote(c: u8) -> bool {
    c == b'"' || c == b'\''
}

/// Splits `data` on `separator` wherever it is not nested inside parentheses,
/// brackets or quotes. Pieces are trimmed; empty pieces are kept.
pub fn split_top_level(data: &str, separator: u8) -> Vec<&str> {
    let bytes = data.as_bytes();
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<u8> = None;
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        match quote {
            Some(q) => {
                if c == b'\\' {
                    i += 1;
                } else if c == q {
                    quote = None;
                }
            },
            None => match c {
                b'"' | b'\'' => quote = Some(c),
                b'(' | b'[' => depth += 1,
                b')' | b']' => depth = depth.saturating_sub(1),
                _ if c == separator && depth == 0 => {
                    pieces.push(data[start..i].trim());
                    start = i + 1;
                },
                _ => {},
            },
        }
        i += 1;
    }
    pieces.push(data[start..].trim());
    pieces
}
