use crate::errors::{Result, TagError};

/// One parsed entry of a field's metadata string.
///
/// A raw tag like `scope:"public,admin" json:"renamed"` parses into
/// two entries; for each one, `name` is the head of the quoted,
/// comma-separated value and `options` the tail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub key: String,
    pub name: String,
    pub options: Vec<String>,
}

impl Tag {
    /// All match targets of this entry: the name plus every option.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str())
            .chain(self.options.iter().map(String::as_str))
    }

    /// Whether `scope` equals one of this entry's values. Exact
    /// string equality only, so the empty scope is matched solely by
    /// an explicitly empty value.
    pub fn matches(&self, scope: &str) -> bool {
        self.values().any(|value| value == scope)
    }
}

/// Looks up the entry declared under `key`, if any.
pub fn get<'a>(tags: &'a [Tag], key: &str) -> Option<&'a Tag> {
    tags.iter().find(|tag| tag.key == key)
}

/// Parses a raw metadata string into its entries, in declaration
/// order.
///
/// The accepted grammar is the conventional struct-tag one:
/// space-separated `key:"value"` pairs, where the quoted value may
/// escape `"` and `\` with a backslash. An empty input parses to an
/// empty list.
pub fn parse(raw: &str) -> Result<Vec<Tag>> {
    let mut tags = Vec::new();
    let mut rest = raw.trim_start_matches(' ');

    while !rest.is_empty() {
        let bytes = rest.as_bytes();

        // Key runs until the first `:`, `"`, or control character.
        let mut i = 0;
        while i < bytes.len()
            && bytes[i] > b' '
            && bytes[i] != b':'
            && bytes[i] != b'"'
            && bytes[i] != 0x7f
        {
            i += 1;
        }
        if i == 0 {
            return Err(TagError::Key(rest.to_string()));
        }
        if i + 1 >= bytes.len() || bytes[i] != b':' {
            return Err(TagError::Pair(rest.to_string()));
        }
        if bytes[i + 1] != b'"' {
            return Err(TagError::Value(rest.to_string()));
        }
        let key = &rest[..i];
        rest = &rest[i + 1..];

        // Quoted value, with backslash escapes skipped over.
        let bytes = rest.as_bytes();
        let mut i = 1;
        while i < bytes.len() && bytes[i] != b'"' {
            if bytes[i] == b'\\' {
                i += 1;
            }
            i += 1;
        }
        if i >= bytes.len() {
            return Err(TagError::Value(rest.to_string()));
        }
        let value = unquote(&rest[..=i])?;
        rest = rest[i + 1..].trim_start_matches(' ');

        let mut parts = value.split(',').map(str::to_string);
        let name = parts.next().unwrap_or_default();
        let options: Vec<String> = parts.collect();
        tags.push(Tag {
            key: key.to_string(),
            name,
            options,
        });
    }

    Ok(tags)
}

fn unquote(quoted: &str) -> Result<String> {
    let inner = &quoted[1..quoted.len() - 1];
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(escaped) => out.push(escaped),
                None => return Err(TagError::Value(quoted.to_string())),
            }
        } else {
            out.push(c);
        }
    }
    Ok(out)
}
