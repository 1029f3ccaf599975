//! Directive tokens and argument splitting
//!
//! A [`Token`] is one directive occurrence lifted out of template source,
//! e.g. the text between `{%` and `%}`. Splitting is whitespace-based but
//! quote-aware: a single- or double-quoted run is one argument even if it
//! contains spaces, and the quotes themselves are stripped.

/// A raw directive invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    contents: String,
}

impl Token {
    /// Create a token from bare directive contents.
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into().trim().to_string(),
        }
    }

    /// Create a token from template source text, stripping optional
    /// `{% ... %}` markers.
    pub fn from_source(text: &str) -> Self {
        let inner = text
            .trim()
            .strip_prefix("{%")
            .and_then(|rest| rest.strip_suffix("%}"))
            .unwrap_or(text);
        Self::new(inner)
    }

    /// The trimmed directive contents.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Split the contents into arguments.
    ///
    /// Whitespace separates arguments except inside quotes; an unterminated
    /// quote consumes to end of input.
    pub fn split_contents(&self) -> Vec<String> {
        let mut bits = Vec::new();
        let mut current = String::new();
        let mut in_token = false;
        let mut quote: Option<char> = None;

        for ch in self.contents.chars() {
            match quote {
                Some(q) if ch == q => quote = None,
                Some(_) => current.push(ch),
                None if ch == '"' || ch == '\'' => {
                    quote = Some(ch);
                    in_token = true;
                }
                None if ch.is_whitespace() => {
                    if in_token {
                        bits.push(std::mem::take(&mut current));
                        in_token = false;
                    }
                }
                None => {
                    current.push(ch);
                    in_token = true;
                }
            }
        }
        if in_token {
            bits.push(current);
        }

        bits
    }
}
