//! Comma-separated text to [`TabularDataset`].
//!
//! The first line names the columns. Every later line is split with a
//! quote-aware state machine and mapped onto those names. Rows with the
//! wrong number of fields are logged and skipped; they never abort a parse.

use super::record::{Field, Record, TabularDataset};

pub const DELIMITER: char = ',';
pub const QUOTE: char = '"';

/// Parse CSV text into a dataset.
pub fn parse(text: &str) -> TabularDataset {
    let text = text.trim_end();
    if text.is_empty() {
        return TabularDataset::default();
    }

    let mut lines = text.split('\n');
    let columns: Vec<String> = lines
        .next()
        .unwrap_or_default()
        .split(DELIMITER)
        .map(|name| name.trim().to_string())
        .collect();

    let mut records = Vec::new();
    for (index, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let values = parse_line(line);
        if values.len() != columns.len() {
            // index 0 is the second physical line
            tracing::warn!(
                "Line {} has {} values but expected {}",
                index + 2,
                values.len(),
                columns.len()
            );
            continue;
        }

        let record: Record = columns
            .iter()
            .zip(&values)
            .map(|(name, value)| (name.as_str(), Field::coerce(value)))
            .collect();
        records.push(record);
    }

    TabularDataset { columns, records }
}

/// Split one line into raw field strings.
///
/// A quote toggles the quoted state, except that two quotes inside a quoted
/// field produce one literal quote. Commas split fields only outside quotes.
/// Fields are returned untrimmed.
pub fn parse_line(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            QUOTE if in_quotes && chars.peek() == Some(&QUOTE) => {
                current.push(QUOTE);
                chars.next();
            }
            QUOTE => in_quotes = !in_quotes,
            DELIMITER if !in_quotes => values.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    values.push(current);

    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a,\"b,c\",d", &["a", "b,c", "d"])]
    #[case("a,\"b\"\"c\",d", &["a", "b\"c", "d"])]
    #[case("a,,c", &["a", "", "c"])]
    #[case("a,b,", &["a", "b", ""])]
    #[case("", &[""])]
    #[case("x\"y\"z", &["xyz"])]
    #[case(" a , b ", &[" a ", " b "])]
    fn splits_line(#[case] line: &str, #[case] expected: &[&str]) {
        assert_eq!(parse_line(line), expected);
    }

    #[test]
    fn maps_rows_onto_header() {
        let dataset = parse("name, score\nalice,10\n\"smith, j\",2.5\n");

        assert_eq!(dataset.columns, ["name", "score"]);
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records[0].get("name"), Some(&Field::from("alice")));
        assert_eq!(dataset.records[0].get("score"), Some(&Field::Number(10.0)));
        assert_eq!(dataset.records[1].get("name"), Some(&Field::from("smith, j")));
        assert_eq!(dataset.records[1].get("score"), Some(&Field::Number(2.5)));
    }

    #[test]
    fn drops_rows_with_wrong_field_count() {
        let dataset = parse("x,y,z\n1,2");
        assert_eq!(dataset.columns, ["x", "y", "z"]);
        assert!(dataset.is_empty());

        let dataset = parse("x,y\n1,2\n1,2,3\n4,5");
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records[1].get("x"), Some(&Field::Number(4.0)));
    }

    #[test]
    fn skips_blank_lines() {
        let dataset = parse("a,b\n\n   \n1,2\n\t\n3,4\n");
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn handles_crlf_line_endings() {
        let dataset = parse("a,b\r\n1,x\r\n");
        assert_eq!(dataset.columns, ["a", "b"]);
        assert_eq!(dataset.records[0].get("b"), Some(&Field::from("x")));
    }

    #[rstest]
    #[case("")]
    #[case("  \n\n ")]
    fn empty_text_gives_empty_dataset(#[case] text: &str) {
        assert_eq!(parse(text), TabularDataset::default());
    }

    #[test]
    fn header_only_has_columns_and_no_records() {
        let dataset = parse("a,,a\n");
        assert_eq!(dataset.columns, ["a", "", "a"]);
        assert!(dataset.is_empty());
    }

    #[test]
    fn duplicate_headers_collide() {
        let dataset = parse("a,b,a\n1,2,3");
        let record = &dataset.records[0];
        assert_eq!(record.len(), 2);
        assert_eq!(record.get("a"), Some(&Field::Number(3.0)));
    }
}
