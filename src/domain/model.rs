use csv::StringRecord;
use serde::Deserialize;

/// Header written to every formatted file, in LDSC/LAVA order.
pub const OUTPUT_HEADER: [&str; 6] = ["SNP", "N", "Z", "A1", "A2", "P"];

/// Input header names for each required role.
///
/// Defaults to the harmonized column names; a TOML `[columns]` section can
/// point a role at a differently named column. Lookup stays exact.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnMap {
    pub variant_id: String,
    pub effect_allele: String,
    pub other_allele: String,
    pub beta: String,
    pub standard_error: String,
    pub p_value: String,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            variant_id: "variant_id".to_string(),
            effect_allele: "effect_allele".to_string(),
            other_allele: "other_allele".to_string(),
            beta: "beta".to_string(),
            standard_error: "standard_error".to_string(),
            p_value: "p_value".to_string(),
        }
    }
}

impl ColumnMap {
    /// `(role, header name)` pairs in the order columns are checked.
    pub fn required(&self) -> [(&'static str, &str); 6] {
        [
            ("variant_id", self.variant_id.as_str()),
            ("effect_allele", self.effect_allele.as_str()),
            ("other_allele", self.other_allele.as_str()),
            ("beta", self.beta.as_str()),
            ("standard_error", self.standard_error.as_str()),
            ("p_value", self.p_value.as_str()),
        ]
    }
}

/// Input table, fully materialized. Every field is kept as raw text.
#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    pub columns: Vec<String>,
    pub rows: Vec<StringRecord>,
}

impl RecordTable {
    pub fn new(columns: Vec<String>, rows: Vec<StringRecord>) -> Self {
        Self { columns, rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First column with exactly this name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx)
    }

    /// 1-based line of a row in the source file, header being line 1.
    pub fn line_of(&self, row: usize) -> u64 {
        self.rows
            .get(row)
            .and_then(|r| r.position())
            .map(|p| p.line())
            .unwrap_or(row as u64 + 2)
    }
}

/// One output row. `z` and `p` are numbers after coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedRecord {
    pub snp: String,
    pub n: String,
    pub z: f64,
    pub a1: String,
    pub a2: String,
    pub p: f64,
}

#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub records: Vec<FormattedRecord>,
}
