//! Byte cursor over one line of input.

pub const TAB: u8 = 0x09;
pub const LF: u8 = 0x0a;
pub const VT: u8 = 0x0b;
pub const FF: u8 = 0x0c;
pub const CR: u8 = 0x0d;
pub const SPACE: u8 = 0x20;
pub const DQUOTE: u8 = 0x22;
pub const MINUS: u8 = 0x2d;

pub fn is_printable(ch: u8) -> bool {
    (SPACE..=0x7e).contains(&ch)
}

pub fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}

pub fn is_whitespace(ch: u8) -> bool {
    match ch {
        SPACE | TAB | LF | VT | FF | CR => true,
        _ => false,
    }
}

/// An integer literal is an optional minus sign followed by at least one
/// ASCII digit, and nothing else.
pub fn is_int_literal(word: &str) -> bool {
    let bytes = word.as_bytes();
    let digits = match bytes.first() {
        Some(&MINUS) => &bytes[1..],
        _ => bytes,
    };
    !digits.is_empty() && digits.iter().all(|&ch| is_digit(ch))
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Cursor {
    buffer: String,
    position: usize,
}

impl Cursor {
    pub fn new(text: &str) -> Cursor {
        Cursor {
            buffer: text.to_string(),
            position: 0,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.buffer.len()
    }

    fn is_delimiter(ch: u8, delimiter: u8) -> bool {
        if delimiter == SPACE {
            is_whitespace(ch)
        } else {
            ch == delimiter
        }
    }

    /// Skip leading delimiters, then take everything up to the next
    /// delimiter. The cursor is left on the terminating delimiter.
    /// A space delimiter matches any whitespace.
    pub fn read_word(&mut self, delimiter: u8) -> Option<String> {
        let bytes = self.buffer.as_bytes();
        let mut start = self.position;
        while start < bytes.len() && Cursor::is_delimiter(bytes[start], delimiter) {
            start += 1;
        }
        if start >= bytes.len() {
            self.position = start;
            return None;
        }
        let mut end = start;
        while end < bytes.len() && !Cursor::is_delimiter(bytes[end], delimiter) {
            end += 1;
        }
        self.position = end;
        Some(String::from_utf8_lossy(&bytes[start..end]).into_owned())
    }

    /// Take everything up to `delimiter` and step past it. The single
    /// space that ended the previous word is not part of the result.
    pub fn parse(&mut self, delimiter: u8) -> String {
        let bytes = self.buffer.as_bytes();
        let mut start = self.position;
        if start < bytes.len() && bytes[start] == SPACE {
            start += 1;
        }
        let mut end = start;
        while end < bytes.len() && bytes[end] != delimiter {
            end += 1;
        }
        let text = String::from_utf8_lossy(&bytes[start..end]).into_owned();
        self.position = if end < bytes.len() { end + 1 } else { end };
        text
    }
}
