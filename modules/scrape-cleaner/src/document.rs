/// Separator between the scraper's metadata header and the article body.
pub const HEADER_DELIMITER: &str = "---\n\n";

/// Same separator as written on Windows.
const HEADER_DELIMITER_CRLF: &str = "---\r\n\r\n";

/// Split a source file into `(header, body)` at the first header delimiter.
///
/// The header keeps the delimiter itself so it can be written back verbatim.
/// Without a delimiter the header is empty and the whole input is the body.
pub fn split_header(raw: &str) -> (&str, &str) {
    let delimiter = [HEADER_DELIMITER, HEADER_DELIMITER_CRLF]
        .into_iter()
        .filter_map(|d| raw.find(d).map(|pos| (pos, d.len())))
        .min_by_key(|&(pos, _)| pos);

    match delimiter {
        Some((pos, len)) => raw.split_at(pos + len),
        None => ("", raw),
    }
}

/// A scraped text file as read from the input directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    pub name: String,
    pub header: String,
    pub body: String,
}

impl SourceDocument {
    pub fn parse(name: impl Into<String>, raw: &str) -> Self {
        let (header, body) = split_header(raw);
        Self {
            name: name.into(),
            header: header.to_string(),
            body: body.to_string(),
        }
    }

    /// Pair the original header with a cleaned body.
    pub fn into_cleaned(self, body: String) -> CleanedDocument {
        CleanedDocument {
            name: self.name,
            header: self.header,
            body,
        }
    }
}

/// Output counterpart of a [`SourceDocument`]: same name, same header, new body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanedDocument {
    pub name: String,
    pub header: String,
    pub body: String,
}

impl CleanedDocument {
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.header.len() + self.body.len());
        out.push_str(&self.header);
        out.push_str(&self.body);
        out
    }
}
