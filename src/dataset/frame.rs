//! A small column-oriented table of named `f64` columns.
//!
//! The pipeline stages pass one of these between them: feature building
//! appends columns, outlier removal filters rows, the preprocessor rewrites
//! columns, and the model consumes the frame as an `ndarray` matrix.

use std::path::Path;

use ndarray::Array2;

use crate::error::{PipelineError, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a frame from `(name, values)` pairs. All columns must have the
    /// same length.
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let mut frame = Frame::new();
        for (name, values) in columns {
            frame.push_column(name.into(), values)?;
        }
        Ok(frame)
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn column(&self, name: &str) -> Result<&[f64]> {
        let idx = self.index_of(name)?;
        Ok(&self.columns[idx])
    }

    /// Appends a new column, or replaces the values of an existing one.
    pub fn push_column(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        let name = name.into();
        if !self.columns.is_empty() && values.len() != self.n_rows() {
            return Err(PipelineError::LengthMismatch {
                column: name,
                expected: self.n_rows(),
                actual: values.len(),
            });
        }
        match self.names.iter().position(|n| *n == name) {
            Some(idx) => self.columns[idx] = values,
            None => {
                self.names.push(name);
                self.columns.push(values);
            }
        }
        Ok(())
    }

    /// Removes a column and returns its values.
    pub fn take_column(&mut self, name: &str) -> Result<Vec<f64>> {
        let idx = self.index_of(name)?;
        self.names.remove(idx);
        Ok(self.columns.remove(idx))
    }

    pub fn drop_column(&mut self, name: &str) -> Result<()> {
        self.take_column(name).map(|_| ())
    }

    /// Keeps the rows where `mask` is true.
    pub fn filter(&self, mask: &[bool]) -> Frame {
        debug_assert_eq!(mask.len(), self.n_rows());
        let columns = self
            .columns
            .iter()
            .map(|col| {
                col.iter()
                    .zip(mask)
                    .filter_map(|(v, keep)| keep.then_some(*v))
                    .collect()
            })
            .collect();
        Frame {
            names: self.names.clone(),
            columns,
        }
    }

    /// Row-major matrix view for model input, columns in frame order.
    pub fn to_matrix(&self) -> Array2<f64> {
        let (rows, cols) = (self.n_rows(), self.n_cols());
        let mut matrix = Array2::zeros((rows, cols));
        for (j, col) in self.columns.iter().enumerate() {
            for (i, v) in col.iter().enumerate() {
                matrix[[i, j]] = *v;
            }
        }
        matrix
    }

    pub fn read_csv(path: impl AsRef<Path>) -> Result<Self> {
        let mut reader = csv::Reader::from_path(path.as_ref())?;
        let names: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();
        let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];
        for record in reader.records() {
            let record = record?;
            for (j, field) in record.iter().enumerate() {
                let value: f64 = field.parse().map_err(|_| PipelineError::NonNumeric {
                    column: names[j].clone(),
                    value: field.to_string(),
                })?;
                columns[j].push(value);
            }
        }
        Ok(Frame { names, columns })
    }

    pub fn write_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = csv::Writer::from_path(path.as_ref())?;
        writer.write_record(&self.names)?;
        for i in 0..self.n_rows() {
            let row: Vec<String> = self.columns.iter().map(|col| col[i].to_string()).collect();
            writer.write_record(&row)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn index_of(&self, name: &str) -> Result<usize> {
        self.names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| PipelineError::MissingColumn(name.to_string()))
    }
}
