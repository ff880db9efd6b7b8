//! In-memory delimited tables
//!
//! A [`Table`] is read once, fully, and never mutated afterwards. Cells are kept
//! as strings; columns are typed at the point an aggregation reads them.

use crate::types::{Result, StatsError};
use csv::StringRecord;
use std::io;
use std::path::Path;

/// Cell spellings treated as missing, matching common dataframe readers
const NULL_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND",
    "1.#QNAN", "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Whether a cell holds a missing value
pub fn is_null(cell: &str) -> bool {
    NULL_MARKERS.contains(&cell)
}

/// A header row plus data rows no wider than the header
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<StringRecord>,
}

impl Table {
    /// Load a comma-delimited file with a header row
    ///
    /// Quoted fields may span lines. Blank lines are skipped. A row shorter
    /// than the header is padded with missing cells. A missing file, a row
    /// wider than the header, or invalid UTF-8 fails with
    /// [`StatsError::DataLoad`].
    pub fn from_path(path: &Path) -> Result<Self> {
        log::info!("Loading table: {:?}", path);

        let origin = path.display().to_string();
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)
            .map_err(|e| load_error(&origin, e))?;
        let table = Self::read(reader, &origin)?;

        let (rows, cols) = table.shape();
        log::info!("Loaded {:?}: {} rows x {} columns", path, rows, cols);
        Ok(table)
    }

    /// Parse a table from any reader (same rules as [`Table::from_path`])
    pub fn from_reader<R: io::Read>(reader: R) -> Result<Self> {
        let reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        Self::read(reader, "<reader>")
    }

    fn read<R: io::Read>(mut reader: csv::Reader<R>, origin: &str) -> Result<Self> {
        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| load_error(origin, e))?
            .iter()
            .map(str::to_string)
            .collect();

        if columns.is_empty() {
            return Err(StatsError::DataLoad {
                origin: origin.to_string(),
                reason: "no columns to parse".to_string(),
            });
        }

        let mut rows = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|e| load_error(origin, e))?;
            if record.len() > columns.len() {
                return Err(StatsError::DataLoad {
                    origin: origin.to_string(),
                    reason: format!(
                        "expected {} fields in row {}, saw {}",
                        columns.len(),
                        index,
                        record.len()
                    ),
                });
            }
            rows.push(record);
        }

        Ok(Self { columns, rows })
    }

    /// (row count, column count)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header names in file order
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Data rows in file order; short rows are not padded here
    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    /// Borrow one column by name
    pub fn column(&self, name: &str) -> Result<Column<'_>> {
        let index = self
            .columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| StatsError::MissingColumn(name.to_string()))?;

        Ok(Column {
            name: &self.columns[index],
            index,
            rows: &self.rows,
        })
    }

    /// First `n` rows, restricted to `columns` in the given order
    pub fn head<S: AsRef<str>>(&self, n: usize, columns: &[S]) -> Result<Table> {
        let indices = columns
            .iter()
            .map(|name| self.column(name.as_ref()).map(|c| c.index))
            .collect::<Result<Vec<_>>>()?;

        let rows = self
            .rows
            .iter()
            .take(n)
            .map(|row| {
                indices
                    .iter()
                    .map(|&i| row.get(i).unwrap_or(""))
                    .collect::<StringRecord>()
            })
            .collect();

        Ok(Table {
            columns: columns.iter().map(|c| c.as_ref().to_string()).collect(),
            rows,
        })
    }
}

fn load_error(origin: &str, err: csv::Error) -> StatsError {
    StatsError::DataLoad {
        origin: origin.to_string(),
        reason: err.to_string(),
    }
}

/// Read-only view over a single column of a [`Table`]
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    name: &'a str,
    index: usize,
    rows: &'a [StringRecord],
}

impl<'a> Column<'a> {
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Cells in row order
    pub fn iter(&self) -> impl Iterator<Item = &'a str> + 'a {
        let index = self.index;
        self.rows.iter().map(move |row| row.get(index).unwrap_or(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
row_id,body,rule,subreddit,rule_violation
1,\"first post\",No spam,pics,1
2,\"multi
line\",No spam,news,0
3,third,Be civil,pics,1
";

    #[test]
    fn test_parse_shape_and_columns() {
        let table = Table::from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(table.shape(), (3, 5));
        assert_eq!(
            table.column_names(),
            &["row_id", "body", "rule", "subreddit", "rule_violation"]
        );
    }

    #[test]
    fn test_quoted_field_spans_lines() {
        let table = Table::from_reader(SAMPLE.as_bytes()).unwrap();
        let bodies: Vec<&str> = table.column("body").unwrap().iter().collect();
        assert_eq!(bodies, vec!["first post", "multi\nline", "third"]);
    }

    #[test]
    fn test_missing_column() {
        let table = Table::from_reader(SAMPLE.as_bytes()).unwrap();
        match table.column("label") {
            Err(StatsError::MissingColumn(name)) => assert_eq!(name, "label"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_head_projects_columns() {
        let table = Table::from_reader(SAMPLE.as_bytes()).unwrap();
        let head = table.head(2, &["rule", "rule_violation"]).unwrap();

        assert_eq!(head.shape(), (2, 2));
        assert_eq!(head.column_names(), &["rule", "rule_violation"]);
        assert_eq!(&head.rows()[1][0], "No spam");
        assert_eq!(&head.rows()[1][1], "0");
    }

    #[test]
    fn test_head_with_unknown_column_fails() {
        let table = Table::from_reader(SAMPLE.as_bytes()).unwrap();
        assert!(matches!(
            table.head(5, &["rule", "title"]),
            Err(StatsError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_short_row_is_padded_with_nulls() {
        let data = "rule,subreddit,rule_violation,body\nr,s,1,b\nr,s,0\n";
        let table = Table::from_reader(data.as_bytes()).unwrap();

        assert_eq!(table.shape(), (2, 4));
        let bodies: Vec<&str> = table.column("body").unwrap().iter().collect();
        assert_eq!(bodies, vec!["b", ""]);
        assert!(is_null(bodies[1]));

        let head = table.head(2, &["rule_violation", "body"]).unwrap();
        assert_eq!(&head.rows()[1][0], "0");
        assert_eq!(&head.rows()[1][1], "");
    }

    #[test]
    fn test_wide_row_is_load_error() {
        let data = "a,b\n1,2\n3,4,5\n";
        match Table::from_reader(data.as_bytes()) {
            Err(StatsError::DataLoad { reason, .. }) => {
                assert!(reason.contains("expected 2 fields"));
            }
            other => panic!("expected DataLoad, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_input_is_load_error() {
        assert!(matches!(
            Table::from_reader("".as_bytes()),
            Err(StatsError::DataLoad { .. })
        ));
    }

    #[test]
    fn test_header_only_table() {
        let table = Table::from_reader("rule,body\n".as_bytes()).unwrap();
        assert_eq!(table.shape(), (0, 2));
        assert!(table.is_empty());
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let table = Table::from_path(file.path()).unwrap();
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_from_missing_path() {
        let err = Table::from_path(Path::new("does/not/exist.csv")).unwrap_err();
        match err {
            StatsError::DataLoad { origin, .. } => assert!(origin.contains("exist.csv")),
            other => panic!("expected DataLoad, got {:?}", other),
        }
    }

    #[test]
    fn test_null_markers() {
        assert!(is_null(""));
        assert!(is_null("NaN"));
        assert!(is_null("NA"));
        assert!(!is_null("0"));
        assert!(!is_null("pics"));
    }
}
