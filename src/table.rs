//! Gradient tables stored as CSV, one stop per row:
//!
//! ```text
//! # position,r0,g0,b0,r1,g1,b1
//! 0,0,0,0,100,100,100
//! 0.5,100,100,100,200,200,200
//! ```

use crate::colors::Rgb;
use crate::error::{ColormapError, Result};
use crate::gradient::{ColorStop, GradientTable};
use csv::StringRecord;
use flate2::read::GzDecoder;
use log::*;
use std::io::prelude::*;
use std::path::Path;
use std::{ffi::OsStr, fs::File};

const FIELDS: usize = 7;

pub fn open_file<P: AsRef<Path>>(path: P) -> Result<Box<dyn Read>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    match path.extension() {
        Some(ext) if ext == OsStr::new("gz") => Ok(Box::new(GzDecoder::new(file))),
        _ => Ok(Box::new(file)),
    }
}

fn read_file<T: Read>(file: T) -> csv::Reader<T> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .comment(Some(b'#'))
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(file)
}

pub fn read_table<R: Read>(reader: R) -> Result<GradientTable> {
    let table = read_file(reader)
        .into_records()
        .map(|record| parse_stop(&record?))
        .collect::<Result<GradientTable>>()?;
    debug!("Read gradient table with {} stops", table.len());
    Ok(table)
}

pub fn load_table<P: AsRef<Path>>(path: P) -> Result<GradientTable> {
    let path = path.as_ref();
    info!("Loading colormap: {}", path.display());
    read_table(open_file(path)?)
}

fn parse_stop(record: &StringRecord) -> Result<ColorStop> {
    let line = record.position().map_or(0, |p| p.line());
    let error = |message: String| ColormapError::TableParse { line, message };
    if record.len() != FIELDS {
        return Err(error(format!(
            "expected {} fields, found {}",
            FIELDS,
            record.len()
        )));
    }
    let values = record
        .iter()
        .map(|s| {
            s.parse::<f64>()
                .map_err(|e| error(format!("'{}' should be a number: {}", s, e)))
        })
        .collect::<Result<Vec<f64>>>()?;
    Ok(ColorStop::new(
        values[0],
        Rgb::new(values[1], values[2], values[3]),
        Rgb::new(values[4], values[5], values[6]),
    ))
}
