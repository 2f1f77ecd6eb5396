use std::fmt;

/// One cell of a parsed table.
#[derive(Debug, Clone, PartialEq)]
pub enum Field {
    Number(f64),
    Text(String),
    /// Absent value; rendered as an empty cell on export
    Empty,
}

impl Field {
    /// Classify a raw cell: trimmed, then coerced to a number when possible.
    ///
    /// `""` and `"-"` are placeholders and stay text. A value that parses as
    /// NaN stays text too; infinities are numbers.
    pub fn coerce(raw: &str) -> Self {
        let value = raw.trim();
        if value.is_empty() || value == "-" {
            return Field::Text(value.to_string());
        }

        match value.parse::<f64>() {
            Ok(n) if !n.is_nan() => Field::Number(n),
            _ => Field::Text(value.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Field::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Field::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Number(n) => write!(f, "{n}"),
            Field::Text(s) => f.write_str(s),
            Field::Empty => Ok(()),
        }
    }
}

impl From<f64> for Field {
    fn from(value: f64) -> Self {
        Field::Number(value)
    }
}

impl From<&str> for Field {
    fn from(value: &str) -> Self {
        Field::Text(value.to_string())
    }
}

impl From<String> for Field {
    fn from(value: String) -> Self {
        Field::Text(value)
    }
}

/// A row keyed by column name, in column order.
///
/// Keys are unique. Inserting an existing key replaces its value but keeps
/// the position where the key was first inserted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Field)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Field>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>, V: Into<Field>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (k, v) in iter {
            record.insert(k, v);
        }
        record
    }
}

/// Column names in declaration order plus the accepted rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TabularDataset {
    pub columns: Vec<String>,
    pub records: Vec<Record>,
}

impl TabularDataset {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("3.14", Field::Number(3.14))]
    #[case("1e5", Field::Number(100000.0))]
    #[case(" 42 ", Field::Number(42.0))]
    #[case("-7", Field::Number(-7.0))]
    #[case("-", Field::Text("-".to_string()))]
    #[case("", Field::Text(String::new()))]
    #[case("   ", Field::Text(String::new()))]
    #[case("NaN", Field::Text("NaN".to_string()))]
    #[case("12abc", Field::Text("12abc".to_string()))]
    #[case(" Tokyo ", Field::Text("Tokyo".to_string()))]
    fn coerces_cells(#[case] raw: &str, #[case] expected: Field) {
        assert_eq!(Field::coerce(raw), expected);
    }

    #[test]
    fn duplicate_key_keeps_position_and_last_value() {
        let mut record = Record::new();
        record.insert("a", 1.0);
        record.insert("b", "x");
        record.insert("a", 2.0);

        assert_eq!(record.keys().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(record.get("a"), Some(&Field::Number(2.0)));
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn displays_fields() {
        assert_eq!(Field::Number(100000.0).to_string(), "100000");
        assert_eq!(Field::Number(3.14).to_string(), "3.14");
        assert_eq!(Field::from("bob").to_string(), "bob");
        assert_eq!(Field::Empty.to_string(), "");
    }
}
