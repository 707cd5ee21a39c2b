use std::fmt;

/// Ends one header line.
pub const HEADER_DELIM: &str = "\r\n";
/// Separates the header block from the body.
pub const MESSAGE_END: &str = "\r\n\r\n";

/// Byte offset of the first `needle` in `s`.
pub(crate) fn find(s: &str, needle: &str) -> Option<usize> {
    memchr::memmem::find(s.as_bytes(), needle.as_bytes())
}

/// A request header, written as `Name: Value`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Header {
    name: &'static str,
    value: String,
}

impl Header {
    pub fn new(name: &'static str, value: impl Into<String>) -> Self {
        Header {
            name,
            value: value.into(),
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.value)
    }
}

/// Value of the first raw `Name: value` line whose name matches, ignoring case.
///
/// Lines without a colon are skipped rather than treated as errors.
pub(crate) fn get_header<'a>(lines: &'a [String], name: &str) -> Option<&'a str> {
    let name = name.trim();
    lines.iter().find_map(|line| {
        let colon = memchr::memchr(b':', line.as_bytes())?;
        let (key, value) = (&line[..colon], &line[colon + 1..]);
        if key.trim().eq_ignore_ascii_case(name) {
            Some(value.trim())
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_display() {
        let h = Header::new("Host", "example.com");
        assert_eq!(h.to_string(), "Host: example.com");
    }

    #[test]
    fn find_first_delimiter() {
        assert_eq!(find("a\r\nb\r\n\r\nc\r\n\r\n", MESSAGE_END), Some(4));
        assert_eq!(find("no delimiter", HEADER_DELIM), None);
    }

    #[test]
    fn lookup_ignores_case_and_junk() {
        let lines = vec![
            "garbage".to_string(),
            "Content-Type: text/plain".to_string(),
            "X-Empty:".to_string(),
            "content-type: text/html".to_string(),
        ];
        assert_eq!(get_header(&lines, "content-type"), Some("text/plain"));
        assert_eq!(get_header(&lines, "X-EMPTY"), Some(""));
        assert_eq!(get_header(&lines, "garbage"), None);
        assert_eq!(get_header(&lines, "Content-Length"), None);
    }
}
