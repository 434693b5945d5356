use crate::core::report;
use crate::core::validate::{extract_domain, validate_record, Patterns};
use crate::domain::model::{DomainAggregate, ImportResult, InvalidRow, RawRow};
use crate::domain::ports::{ConfigProvider, Pipeline};
use crate::utils::error::Result;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};

const INVALID_HEADER: [&str; 6] = [
    "row",
    "first_name",
    "last_name",
    "email",
    "gender",
    "ip_address",
];

pub struct ImportPipeline<C: ConfigProvider> {
    config: C,
    patterns: Patterns,
}

impl<C: ConfigProvider> ImportPipeline<C> {
    pub fn new(config: C) -> Self {
        Self {
            config,
            patterns: Patterns::new(),
        }
    }
}

impl<C: ConfigProvider> Pipeline for ImportPipeline<C> {
    /// Reads every data row, keeping parse failures as rows so that
    /// transform can route them to the invalid sink. The reader runs
    /// flexible: wrong column counts are a validation concern, not a
    /// parse error.
    fn extract(&self) -> Result<Vec<RawRow>> {
        let file = File::open(self.config.input_path())?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(BufReader::new(file));

        let mut rows = Vec::new();
        let mut number: u64 = 0;
        for record in reader.records() {
            number += 1;
            // row 1 is the header
            if number == 1 {
                continue;
            }
            let fields = match record {
                Ok(record) => Ok(record.iter().map(str::to_string).collect()),
                Err(err) => Err(err.to_string()),
            };
            rows.push(RawRow { number, fields });
        }
        Ok(rows)
    }

    /// The routing pass: each row either increments its domain's count or
    /// appends one entry to the invalid-row log, in encounter order.
    fn transform(&self, rows: Vec<RawRow>) -> Result<ImportResult> {
        let mut aggregate = DomainAggregate::new();
        let mut invalid_rows = Vec::new();
        let mut valid_rows: u64 = 0;

        for row in rows {
            let fields = match row.fields {
                Ok(fields) => fields,
                Err(reason) => {
                    tracing::debug!(row = row.number, "unparsable row: {}", reason);
                    invalid_rows.push(InvalidRow::from_partial(row.number, &[]));
                    continue;
                }
            };

            if let Err(err) = validate_record(&self.patterns, row.number, &fields) {
                tracing::debug!(row = row.number, "invalid row: {}", err);
                invalid_rows.push(InvalidRow::from_partial(row.number, &fields));
                continue;
            }

            aggregate.increment(extract_domain(&self.patterns, &fields[2]));
            valid_rows += 1;
        }

        Ok(ImportResult {
            aggregate,
            invalid_rows,
            valid_rows,
        })
    }

    fn load(&self, result: ImportResult) -> Result<String> {
        // the invalid sink is always produced, even when empty
        let mut invalid = csv::Writer::from_path(self.config.invalid_path())?;
        invalid.write_record(INVALID_HEADER)?;
        for row in &result.invalid_rows {
            let mut record = Vec::with_capacity(INVALID_HEADER.len());
            record.push(row.number.to_string());
            record.extend(row.fields.iter().cloned());
            invalid.write_record(&record)?;
        }
        invalid.flush()?;

        let pairs = report::sort_domains(&result.aggregate, self.config.sort_mode());
        match self.config.output_path() {
            Some(path) => {
                let mut writer = BufWriter::new(File::create(path)?);
                report::write_file_report(&mut writer, &pairs)?;
                writer.flush()?;
                Ok(path.to_string())
            }
            None => {
                let stdout = std::io::stdout();
                let mut writer = stdout.lock();
                report::write_console_report(&mut writer, &pairs)?;
                Ok("stdout".to_string())
            }
        }
    }
}
