// File: crates/dash-core/src/dataset.rs
// Summary: Raw dataset model and CSV loading (region/day rows with six counters).

use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

/// The six smoothable counter columns of the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Counter {
    TotalCases,
    TotalDeaths,
    TotalRecovered,
    NewCases,
    NewDeaths,
    NewRecovered,
}

impl Counter {
    pub const ALL: [Counter; 6] = [
        Counter::TotalCases,
        Counter::TotalDeaths,
        Counter::TotalRecovered,
        Counter::NewCases,
        Counter::NewDeaths,
        Counter::NewRecovered,
    ];

    /// CSV column header for this counter.
    pub fn column(&self) -> &'static str {
        match self {
            Counter::TotalCases => "Total Cases",
            Counter::TotalDeaths => "Total Deaths",
            Counter::TotalRecovered => "Total Recovered",
            Counter::NewCases => "New Cases",
            Counter::NewDeaths => "New Deaths",
            Counter::NewRecovered => "New Recovered",
        }
    }
}

/// One row of the raw dataset: a region/day observation.
/// Numeric fields are expected non-negative in well-formed input (not enforced).
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub region: String,
    pub date: NaiveDate,
    pub total_cases: f64,
    pub total_deaths: f64,
    pub total_recovered: f64,
    pub new_cases: f64,
    pub new_deaths: f64,
    pub new_recovered: f64,
}

impl Record {
    pub fn counter(&self, c: Counter) -> f64 {
        match c {
            Counter::TotalCases => self.total_cases,
            Counter::TotalDeaths => self.total_deaths,
            Counter::TotalRecovered => self.total_recovered,
            Counter::NewCases => self.new_cases,
            Counter::NewDeaths => self.new_deaths,
            Counter::NewRecovered => self.new_recovered,
        }
    }

    pub fn set_counter(&mut self, c: Counter, value: f64) {
        match c {
            Counter::TotalCases => self.total_cases = value,
            Counter::TotalDeaths => self.total_deaths = value,
            Counter::TotalRecovered => self.total_recovered = value,
            Counter::NewCases => self.new_cases = value,
            Counter::NewDeaths => self.new_deaths = value,
            Counter::NewRecovered => self.new_recovered = value,
        }
    }
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read CSV '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("missing column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: unparseable date '{value}'")]
    BadDate { row: usize, value: String },
    #[error("row {row}: column '{column}' has unparseable number '{value}'")]
    BadNumber {
        row: usize,
        column: &'static str,
        value: String,
    },
    #[error("row {row}: missing field")]
    MissingField { row: usize },
}

/// The loaded tabular source, immutable after load.
#[derive(Clone, Debug, Default)]
pub struct RawDataset {
    records: Vec<Record>,
}

impl RawDataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct regions present in the dataset, sorted alphabetically.
    pub fn regions(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for r in &self.records {
            if !out.iter().any(|x| x == &r.region) {
                out.push(r.region.clone());
            }
        }
        out.sort();
        out
    }

    /// Load a dataset from a headered CSV file.
    ///
    /// Any malformed row (unparseable date or number, missing field) is a
    /// fatal load-time error; the pipeline performs no per-row recovery.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)
            .map_err(|source| DatasetError::Read {
                path: path.display().to_string(),
                source,
            })?;

        let headers = rdr
            .headers()
            .map_err(|source| DatasetError::Read {
                path: path.display().to_string(),
                source,
            })?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect::<Vec<_>>();

        let idx = |names: &[&str]| -> Option<usize> {
            for (i, h) in headers.iter().enumerate() {
                for want in names {
                    if h == want {
                        return Some(i);
                    }
                }
            }
            None
        };

        let i_region =
            idx(&["region", "island"]).ok_or(DatasetError::MissingColumn("region"))?;
        let i_date = idx(&["date"]).ok_or(DatasetError::MissingColumn("date"))?;
        let mut i_counters = [0usize; 6];
        for (slot, counter) in i_counters.iter_mut().zip(Counter::ALL) {
            let want = counter.column().to_lowercase();
            *slot = idx(&[want.as_str()])
                .ok_or(DatasetError::MissingColumn(counter.column()))?;
        }

        let mut records = Vec::new();
        for (row, rec) in rdr.records().enumerate() {
            let rec = rec.map_err(|source| DatasetError::Read {
                path: path.display().to_string(),
                source,
            })?;
            let field = |i: usize| -> Result<&str, DatasetError> {
                rec.get(i).ok_or(DatasetError::MissingField { row })
            };

            let date_raw = field(i_date)?.trim();
            let date = parse_date(date_raw).ok_or_else(|| DatasetError::BadDate {
                row,
                value: date_raw.to_string(),
            })?;

            let mut values = [0.0f64; 6];
            for (slot, (i, counter)) in values
                .iter_mut()
                .zip(i_counters.iter().zip(Counter::ALL))
            {
                let raw = field(*i)?.trim();
                *slot = raw.parse::<f64>().map_err(|_| DatasetError::BadNumber {
                    row,
                    column: counter.column(),
                    value: raw.to_string(),
                })?;
            }

            records.push(Record {
                region: field(i_region)?.trim().to_string(),
                date,
                total_cases: values[0],
                total_deaths: values[1],
                total_recovered: values[2],
                new_cases: values[3],
                new_deaths: values[4],
                new_recovered: values[5],
            });
        }

        Ok(Self { records })
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    for fmt in ["%Y-%m-%d", "%m/%d/%Y", "%d/%m/%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    None
}
