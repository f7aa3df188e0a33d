use crate::core::number::{format_decimal, parse_decimal};
use crate::core::{ConfigProvider, Pipeline, RecordTable, Storage, TransformResult};
use crate::domain::model::{FormattedRecord, OUTPUT_HEADER};
use crate::utils::error::{Result, SumstatsError};
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::path::PathBuf;

/// Column positions of the required roles in a validated input header.
#[derive(Debug, Clone, Copy)]
struct RequiredIndices {
    variant_id: usize,
    effect_allele: usize,
    other_allele: usize,
    beta: usize,
    standard_error: usize,
    p_value: usize,
}

/// Reads a harmonized TSV, derives `Z` and writes the LDSC/LAVA layout.
pub struct SumstatsPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> SumstatsPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn read_error(&self, reason: impl ToString) -> SumstatsError {
        SumstatsError::ReadError {
            path: PathBuf::from(self.config.input_path()),
            reason: reason.to_string(),
        }
    }

    /// Every missing role is reported at once, in required order.
    fn resolve_columns(&self, table: &RecordTable) -> Result<RequiredIndices> {
        let mut found = Vec::with_capacity(6);
        let mut missing = Vec::new();

        for (_, name) in self.config.columns().required() {
            match table.column_index(name) {
                Some(idx) => found.push(idx),
                None => missing.push(name.to_string()),
            }
        }

        if !missing.is_empty() {
            return Err(SumstatsError::SchemaError { missing });
        }

        Ok(RequiredIndices {
            variant_id: found[0],
            effect_allele: found[1],
            other_allele: found[2],
            beta: found[3],
            standard_error: found[4],
            p_value: found[5],
        })
    }

    /// Parses one whole column; the first bad value aborts the run.
    fn coerce_column(table: &RecordTable, idx: usize, name: &str) -> Result<Vec<f64>> {
        table
            .rows
            .iter()
            .enumerate()
            .map(|(row, record)| {
                let text = record.get(idx).unwrap_or("");
                parse_decimal(text).ok_or_else(|| SumstatsError::TypeCoercionError {
                    column: name.to_string(),
                    line: table.line_of(row),
                    value: text.to_string(),
                })
            })
            .collect()
    }

    fn serialize(records: &[FormattedRecord]) -> Result<Vec<u8>> {
        let mut writer = WriterBuilder::new()
            .delimiter(b'\t')
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer.write_record(OUTPUT_HEADER)?;
        for record in records {
            let z = format_decimal(record.z);
            let p = format_decimal(record.p);
            writer.write_record([
                record.snp.as_str(),
                record.n.as_str(),
                z.as_str(),
                record.a1.as_str(),
                record.a2.as_str(),
                p.as_str(),
            ])?;
        }

        writer
            .into_inner()
            .map_err(|e| SumstatsError::IoError(std::io::Error::other(e.to_string())))
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for SumstatsPipeline<S, C> {
    fn extract(&self) -> Result<RecordTable> {
        let input_path = self.config.input_path();
        tracing::debug!("Reading summary statistics from: {}", input_path);

        let data = self
            .storage
            .read_file(input_path)
            .map_err(|e| match e {
                SumstatsError::IoError(source) => self.read_error(source),
                other => other,
            })?;

        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(true)
            .flexible(true)
            .from_reader(data.as_slice());

        let columns: Vec<String> = reader
            .headers()
            .map_err(|e| self.read_error(e))?
            .iter()
            .map(str::to_string)
            .collect();

        if columns.is_empty() {
            return Err(self.read_error("No columns to parse from file"));
        }
        tracing::debug!("Input columns: {}", columns.join(", "));

        let rows = reader
            .records()
            .collect::<std::result::Result<Vec<StringRecord>, csv::Error>>()
            .map_err(|e| self.read_error(e))?;

        // Short rows are kept and their missing trailing fields read as absent;
        // a row wider than the header cannot be mapped to columns.
        if let Some(row) = rows.iter().position(|r| r.len() > columns.len()) {
            return Err(self.read_error(format!(
                "Expected {} fields in line {}, saw {}",
                columns.len(),
                rows[row].position().map(|p| p.line()).unwrap_or(row as u64 + 2),
                rows[row].len()
            )));
        }

        tracing::debug!("Read {} rows", rows.len());
        Ok(RecordTable::new(columns, rows))
    }

    fn transform(&self, table: RecordTable) -> Result<TransformResult> {
        let idx = self.resolve_columns(&table)?;
        let columns = self.config.columns();

        let beta = Self::coerce_column(&table, idx.beta, &columns.beta)?;
        let standard_error = Self::coerce_column(&table, idx.standard_error, &columns.standard_error)?;
        let p_value = Self::coerce_column(&table, idx.p_value, &columns.p_value)?;

        let n = self.config.n_samples();
        let mut non_finite_z = 0usize;

        let records: Vec<FormattedRecord> = table
            .rows
            .iter()
            .enumerate()
            .map(|(row, record)| {
                let field = |i: usize| record.get(i).unwrap_or("").to_string();
                // Zero standard errors pass through as inf/NaN.
                let z = beta[row] / standard_error[row];
                if !z.is_finite() {
                    non_finite_z += 1;
                }
                FormattedRecord {
                    snp: field(idx.variant_id),
                    n: n.to_string(),
                    z,
                    a1: field(idx.effect_allele),
                    a2: field(idx.other_allele),
                    p: p_value[row],
                }
            })
            .collect();

        if non_finite_z > 0 {
            tracing::warn!("{} rows have a non-finite Z (zero or non-finite standard error)", non_finite_z);
        }
        tracing::debug!("Formatted {} of {} rows", records.len(), table.len());

        Ok(TransformResult { records })
    }

    fn load(&self, result: TransformResult) -> Result<String> {
        let output_path = self.config.output_path();
        let data = Self::serialize(&result.records)?;

        tracing::debug!("Writing {} bytes to {}", data.len(), output_path);
        self.storage
            .write_file(output_path, &data)
            .map_err(|e| match e {
                SumstatsError::IoError(source) => SumstatsError::WriteError {
                    path: PathBuf::from(output_path),
                    source,
                },
                other => other,
            })?;

        Ok(output_path.to_string())
    }
}
