//! Frontmatter extraction from markdown documents.
//!
//! Frontmatter is a block of `key: value` lines at the very start of a
//! document, between two lines that contain exactly `---`:
//!
//! ```markdown
//! ---
//! title: Getting Started
//! date: 2024-01-05
//! draft: false
//! ---
//! Welcome.
//! ```
//!
//! Only flat scalar values are understood. Each value is coerced, in
//! order, to a boolean (`true`/`false`), an integer (all digits), a float
//! (`digits.digits`), or left as the trimmed string. There is no quoting,
//! escaping, list, or nesting support.
//!
//! Parsing never fails. A document without a well-formed leading block
//! comes back with empty frontmatter and its full text as the body.
//!
//! # Usage
//!
//! ```rust
//! use folio_content::markdown::{parse_frontmatter, FrontmatterValue};
//!
//! let result = parse_frontmatter("---\ntitle: Test\nweight: 3\n---\nBody");
//!
//! assert!(result.had_delimiters());
//! assert_eq!(result.body(), "Body");
//! assert_eq!(result.frontmatter().get("weight"), Some(&FrontmatterValue::Integer(3)));
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// Opening line, lazily matched metadata block, closing line, remainder.
static FRONTMATTER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---\r?\n(.*?)\r?\n---\r?\n(.*)\z").expect("Invalid frontmatter regex")
});

// ============================================================================
// Values
// ============================================================================

/// A coerced frontmatter scalar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FrontmatterValue {
    /// `true` or `false`
    Bool(bool),
    /// A run of ASCII digits
    Integer(i64),
    /// `digits.digits`, or a digit run too large for `i64`
    Float(f64),
    /// Anything else, trimmed
    String(String),
}

impl FrontmatterValue {
    /// Coerce a raw (already trimmed) value string.
    ///
    /// # Example
    ///
    /// ```rust
    /// use folio_content::markdown::FrontmatterValue;
    ///
    /// assert_eq!(FrontmatterValue::coerce("true"), FrontmatterValue::Bool(true));
    /// assert_eq!(FrontmatterValue::coerce("42"), FrontmatterValue::Integer(42));
    /// assert_eq!(FrontmatterValue::coerce("1.5"), FrontmatterValue::Float(1.5));
    /// assert_eq!(
    ///     FrontmatterValue::coerce("2024-01-05"),
    ///     FrontmatterValue::String("2024-01-05".to_string())
    /// );
    /// ```
    pub fn coerce(raw: &str) -> Self {
        match raw {
            "true" => return Self::Bool(true),
            "false" => return Self::Bool(false),
            _ => {}
        }

        if is_digits(raw) {
            if let Ok(n) = raw.parse::<i64>() {
                return Self::Integer(n);
            }
            // Overflows i64; keep the magnitude as a float.
            if let Ok(f) = raw.parse::<f64>()
                && f.is_finite()
            {
                return Self::Float(f);
            }
        }

        if let Some((whole, fraction)) = raw.split_once('.') {
            if is_digits(whole) && is_digits(fraction) {
                if let Ok(f) = raw.parse::<f64>()
                    && f.is_finite()
                {
                    return Self::Float(f);
                }
            }
        }

        Self::String(raw.to_string())
    }

    /// The string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Whether the value counts as "set": non-empty strings, non-zero
    /// numbers, and `true`.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Integer(n) => *n != 0,
            Self::Float(f) => *f != 0.0 && !f.is_nan(),
            Self::String(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for FrontmatterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Integer(n) => write!(f, "{n}"),
            // Keep a fractional part so the value reads back as a float.
            Self::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// ============================================================================
// Frontmatter map
// ============================================================================

/// Parsed frontmatter: a flat map from keys to coerced scalars.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Frontmatter(BTreeMap<String, FrontmatterValue>);

impl Frontmatter {
    /// An empty frontmatter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value.
    pub fn get(&self, key: &str) -> Option<&FrontmatterValue> {
        self.0.get(key)
    }

    /// Look up a string value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.as_str()
    }

    /// Insert a value, replacing any previous one for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: FrontmatterValue) {
        self.0.insert(key.into(), value);
    }

    /// Whether no keys were parsed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate keys and values in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &FrontmatterValue)> {
        self.0.iter()
    }
}

impl FromIterator<(String, FrontmatterValue)> for Frontmatter {
    fn from_iter<I: IntoIterator<Item = (String, FrontmatterValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Result of frontmatter extraction.
///
/// Contains the parsed frontmatter (possibly empty) and the body that
/// follows it.
#[derive(Debug, Clone)]
pub struct FrontmatterResult<'a> {
    /// Parsed frontmatter; empty when no block was found.
    frontmatter: Frontmatter,
    /// Body content after the closing delimiter, or the whole input.
    body: &'a str,
    /// Whether a well-formed delimiter pair was found.
    had_delimiters: bool,
}

impl<'a> FrontmatterResult<'a> {
    fn without_frontmatter(body: &'a str) -> Self {
        Self {
            frontmatter: Frontmatter::new(),
            body,
            had_delimiters: false,
        }
    }

    /// Whether a well-formed `---` block was found (it may have no keys).
    pub fn had_delimiters(&self) -> bool {
        self.had_delimiters
    }

    /// Get the parsed frontmatter.
    pub fn frontmatter(&self) -> &Frontmatter {
        &self.frontmatter
    }

    /// Take ownership of the frontmatter.
    pub fn into_frontmatter(self) -> Frontmatter {
        self.frontmatter
    }

    /// Get the body content (everything after the frontmatter block).
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Split into frontmatter and body.
    pub fn into_parts(self) -> (Frontmatter, &'a str) {
        (self.frontmatter, self.body)
    }
}

/// Extract frontmatter from markdown content.
///
/// # Behavior
///
/// - No leading `---` line, or no closing `---` line followed by a line
///   break: empty frontmatter, body is `content` unchanged
/// - Well-formed block: each line with a colon contributes
///   `key (trimmed before first colon) → coerced value (trimmed after)`;
///   lines without a colon are skipped
///
/// # Example
///
/// ```rust
/// use folio_content::markdown::parse_frontmatter;
///
/// let result = parse_frontmatter("# Just Markdown");
/// assert!(result.frontmatter().is_empty());
/// assert_eq!(result.body(), "# Just Markdown");
/// ```
pub fn parse_frontmatter(content: &str) -> FrontmatterResult<'_> {
    let Some(caps) = FRONTMATTER_RE.captures(content) else {
        return FrontmatterResult::without_frontmatter(content);
    };
    let (Some(block), Some(body)) = (caps.get(1), caps.get(2)) else {
        log::warn!("Frontmatter matched without capture groups; treating as body");
        return FrontmatterResult::without_frontmatter(content);
    };

    let frontmatter = block
        .as_str()
        .lines()
        .filter_map(|line| {
            let (key, value) = line.split_once(':')?;
            Some((key.trim().to_string(), FrontmatterValue::coerce(value.trim())))
        })
        .collect();

    FrontmatterResult {
        frontmatter,
        body: body.as_str(),
        had_delimiters: true,
    }
}

/// Strip frontmatter from content, returning only the body.
pub fn strip_frontmatter(content: &str) -> &str {
    parse_frontmatter(content).body()
}

/// Render frontmatter as a `---` block, ready to be prefixed to a body.
///
/// [`parse_frontmatter`] reads the block back to the same keys and values
/// as long as keys contain no colons and string values have no
/// surrounding whitespace or line breaks.
///
/// ```rust
/// use folio_content::markdown::{parse_frontmatter, serialize_frontmatter, Frontmatter, FrontmatterValue};
///
/// let mut fm = Frontmatter::new();
/// fm.insert("draft", FrontmatterValue::Bool(true));
/// let text = format!("{}Body", serialize_frontmatter(&fm));
/// assert_eq!(text, "---\ndraft: true\n---\nBody");
/// assert_eq!(parse_frontmatter(&text).frontmatter(), &fm);
/// ```
pub fn serialize_frontmatter(frontmatter: &Frontmatter) -> String {
    let lines: Vec<String> = frontmatter
        .iter()
        .map(|(key, value)| format!("{key}: {value}"))
        .collect();
    format!("---\n{}\n---\n", lines.join("\n"))
}

// ============================================================================
// Tests
// ============================================================================
