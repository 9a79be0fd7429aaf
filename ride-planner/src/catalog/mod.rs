//! Ride catalog and its on-disk loader.
//!
//! The catalog owns every [`RideItem`] for the duration of a run. Filters
//! and selectors only ever borrow from it.
//!
//! The file format is a header line followed by one ride per line, with
//! three `^`-separated fields: `description^cost^time`.

mod error;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::domain::{RideItem, RideSet};

pub use error::CatalogError;

const FIELD_SEPARATOR: char = '^';
const FIELD_COUNT: usize = 3;

/// An ordered, immutable collection of rides.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    rides: Vec<RideItem>,
}

impl Catalog {
    /// Create a catalog from already-validated rides, keeping their order.
    pub fn new(rides: Vec<RideItem>) -> Self {
        Self { rides }
    }

    /// Load a catalog from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path.as_ref())?;
        Self::parse(BufReader::new(file))
    }

    /// Parse a catalog from a reader.
    ///
    /// Records with an empty or unparsable number, or whose values are
    /// rejected by [`RideItem::new`], are skipped, as are blank lines. A
    /// record with the wrong number of fields fails the whole load.
    /// Bytes that are not valid UTF-8 are replaced with U+FFFD.
    pub fn parse<R: BufRead>(mut input: R) -> Result<Self, CatalogError> {
        let mut rides = Vec::new();
        let mut buf = Vec::new();
        let mut line_number = 0;

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_number += 1;

            // First line is a header row
            if line_number == 1 {
                continue;
            }

            let text = String::from_utf8_lossy(&buf);
            let line = text.trim_end_matches(['\n', '\r']);
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
            if fields.len() != FIELD_COUNT {
                return Err(CatalogError::FieldCount {
                    line: line_number,
                    found: fields.len(),
                    text: line.to_string(),
                });
            }

            let (Some(cost), Some(time)) = (parse_number(fields[1]), parse_number(fields[2]))
            else {
                debug!(line = line_number, "skipping ride with missing or unparsable number");
                continue;
            };

            match RideItem::new(fields[0], cost, time) {
                Ok(ride) => rides.push(ride),
                Err(e) => debug!(line = line_number, error = %e, "skipping ride"),
            }
        }

        debug!(rides = rides.len(), "loaded ride catalog");
        Ok(Self { rides })
    }

    /// Borrow every ride, in catalog order.
    pub fn rides(&self) -> RideSet<'_> {
        self.rides.iter().collect()
    }

    /// Returns the ride at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&RideItem> {
        self.rides.get(index)
    }

    /// Returns the number of rides.
    pub fn len(&self) -> usize {
        self.rides.len()
    }

    /// Returns true if the catalog holds no rides.
    pub fn is_empty(&self) -> bool {
        self.rides.is_empty()
    }
}

fn parse_number(field: &str) -> Option<f64> {
    field.trim().parse().ok()
}
