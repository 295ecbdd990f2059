use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::error::SankeyError;

#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub category: String,
    pub value: f64,
}

/// Parsed contents of one dataset file. Entry order is the stacking order.
#[derive(Clone, Debug, PartialEq)]
pub struct Dataset {
    pub title: String,
    pub source_label: String,
    pub entries: Vec<Entry>,
    pub total: f64,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fraction(&self, index: usize) -> f64 {
        let Some(entry) = self.entries.get(index) else {
            return 0.0;
        };

        if self.total == 0.0 {
            0.0
        } else {
            entry.value / self.total
        }
    }

    /// Category labels that appear more than once, in first-seen order.
    pub fn duplicate_categories(&self) -> Vec<&str> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        let mut duplicates = Vec::new();

        for entry in &self.entries {
            let label = entry.category.as_str();
            if !seen.insert(label) && !duplicates.contains(&label) {
                duplicates.push(label);
            }
        }

        duplicates
    }
}

pub fn load_dataset(path: &Path) -> Result<Dataset, SankeyError> {
    let raw = fs::read_to_string(path).map_err(|source| SankeyError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = parse_dataset(&raw)?;
    tracing::info!(
        path = %path.display(),
        entries = dataset.len(),
        total = dataset.total,
        "loaded dataset"
    );
    Ok(dataset)
}

pub fn parse_dataset(raw: &str) -> Result<Dataset, SankeyError> {
    let mut lines = raw.lines();

    let title = lines
        .next()
        .ok_or_else(|| SankeyError::data_format(1, "missing title line"))?
        .to_owned();
    let source_label = lines
        .next()
        .ok_or_else(|| SankeyError::data_format(2, "missing source label line"))?
        .to_owned();

    let mut entries = Vec::new();
    let mut total = 0.0;

    for (offset, line) in lines.enumerate() {
        let entry = parse_entry(line, offset + 3)?;
        total += entry.value;
        entries.push(entry);
    }

    let dataset = Dataset {
        title,
        source_label,
        entries,
        total,
    };

    let duplicates = dataset.duplicate_categories();
    if !duplicates.is_empty() {
        tracing::warn!(?duplicates, "dataset repeats category labels");
    }

    Ok(dataset)
}

fn parse_entry(line: &str, line_number: usize) -> Result<Entry, SankeyError> {
    let (category, value) = line.rsplit_once(' ').ok_or_else(|| {
        SankeyError::data_format(
            line_number,
            format!("expected \"<category> <value>\", got {line:?}"),
        )
    })?;

    let value = value.trim().parse::<f64>().map_err(|error| {
        SankeyError::data_format(line_number, format!("invalid value {value:?}: {error}"))
    })?;

    Ok(Entry {
        category: category.to_owned(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const ENERGY: &str = "Energy Flow\nTotal Supply\nSolar 30\nWind 20\nGas 50\n";

    #[test]
    fn parses_energy_flow_example() {
        let dataset = parse_dataset(ENERGY).unwrap();

        assert_eq!(dataset.title, "Energy Flow");
        assert_eq!(dataset.source_label, "Total Supply");
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.total, 100.0);

        let categories = dataset
            .entries
            .iter()
            .map(|entry| entry.category.as_str())
            .collect::<Vec<_>>();
        assert_eq!(categories, ["Solar", "Wind", "Gas"]);
        assert!((dataset.fraction(0) - 0.3).abs() < 1e-12);
        assert!((dataset.fraction(2) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn splits_on_last_space() {
        let dataset = parse_dataset("t\ns\nNatural Gas Imports 12.5\n").unwrap();
        assert_eq!(dataset.entries[0].category, "Natural Gas Imports");
        assert_eq!(dataset.entries[0].value, 12.5);
    }

    #[test]
    fn header_only_has_no_entries() {
        let dataset = parse_dataset("Empty\nNothing").unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.total, 0.0);
        assert_eq!(dataset.fraction(0), 0.0);
    }

    #[test]
    fn accepts_negative_values() {
        let dataset = parse_dataset("t\ns\nLoss -5\nGain 15").unwrap();
        assert_eq!(dataset.total, 10.0);
        assert_eq!(dataset.fraction(0), -0.5);
    }

    #[test]
    fn line_without_space_is_a_format_error() {
        let error = parse_dataset("t\ns\nSolar 30\nBadLine\n").unwrap_err();
        match error {
            SankeyError::DataFormat { line, message } => {
                assert_eq!(line, 4);
                assert!(message.contains("BadLine"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn non_numeric_value_carries_parse_diagnostic() {
        let error = parse_dataset("t\ns\nSolar lots").unwrap_err();
        let text = error.to_string();
        assert!(text.starts_with("line 3:"));
        assert!(text.contains("invalid float literal"));
    }

    #[test]
    fn blank_line_is_rejected() {
        let error = parse_dataset("t\ns\nSolar 30\n\nWind 20\n").unwrap_err();
        assert!(matches!(error, SankeyError::DataFormat { line: 4, .. }));
    }

    #[test]
    fn missing_header_lines_are_rejected() {
        assert!(matches!(
            parse_dataset(""),
            Err(SankeyError::DataFormat { line: 1, .. })
        ));
        assert!(matches!(
            parse_dataset("Only a title\n"),
            Err(SankeyError::DataFormat { line: 2, .. })
        ));
    }

    #[test]
    fn duplicate_labels_are_kept_per_entry() {
        let dataset = parse_dataset("t\ns\nSolar 10\nWind 5\nSolar 20").unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.total, 35.0);
        assert_eq!(dataset.entries[0].value, 10.0);
        assert_eq!(dataset.entries[2].value, 20.0);
        assert_eq!(dataset.duplicate_categories(), ["Solar"]);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(ENERGY.as_bytes()).unwrap();

        let dataset = load_dataset(file.path()).unwrap();
        assert_eq!(dataset.total, 100.0);
    }

    #[test]
    fn invalid_utf8_is_a_file_access_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, b'\n', b'\n']).unwrap();

        let error = load_dataset(file.path()).unwrap_err();
        assert!(matches!(error, SankeyError::FileAccess { .. }));
        assert!(error.is_fatal());
    }

    #[test]
    fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let error = load_dataset(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(error, SankeyError::FileAccess { .. }));
        assert!(error.is_fatal());
    }
}
