use std::collections::HashMap;

use indicatif::{ProgressBar, ProgressStyle};
use itertools::Itertools;
use tracing::{info, warn};

use super::llm::PlaceClassifier;
use super::preprocess::preprocess_location;
use crate::error::{Error, Result};
use crate::sheet::Sheet;

pub const UNKNOWN: &str = "UNKNOWN";
pub const LOCATION_COLUMN: &str = "location";
pub const PREPROCESSED_COLUMN: &str = "preprocessed_location";
pub const STANDARD_COLUMN: &str = "standard_location";

/// Maps every distinct preprocessed location to exactly one label.
pub struct LocationStandardizer<'a, C: PlaceClassifier + ?Sized> {
    classifier: &'a C,
    show_progress: bool,
}

impl<'a, C: PlaceClassifier + ?Sized> LocationStandardizer<'a, C> {
    pub fn new(classifier: &'a C) -> Self {
        LocationStandardizer {
            classifier,
            show_progress: false,
        }
    }

    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// One classifier call per distinct non-blank input, in first-seen order.
    /// Blank inputs, failures and empty answers map to `UNKNOWN`.
    pub fn build_map<'s, I>(&self, inputs: I) -> HashMap<String, String>
    where
        I: IntoIterator<Item = &'s str>,
    {
        let unique: Vec<&str> = inputs.into_iter().unique().collect();
        info!(unique = unique.len(), "Classifying distinct locations");

        let pb = if self.show_progress {
            let pb = ProgressBar::new(unique.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("=> "),
            );
            pb
        } else {
            ProgressBar::hidden()
        };

        let mut map = HashMap::with_capacity(unique.len());
        for loc in unique {
            let label = if loc.trim().is_empty() {
                UNKNOWN.to_string()
            } else {
                match self.classifier.classify(loc) {
                    Ok(answer) if !answer.trim().is_empty() => answer.trim().to_string(),
                    Ok(_) => {
                        warn!(location = %loc, "Empty answer, using {}", UNKNOWN);
                        UNKNOWN.to_string()
                    }
                    Err(e) => {
                        warn!(location = %loc, "Error: {}", e);
                        UNKNOWN.to_string()
                    }
                }
            };
            map.insert(loc.to_string(), label);
            pb.inc(1);
        }
        pb.finish_and_clear();
        map
    }

    /// Lowercases headers, requires `location`, appends the preprocessed and standard columns.
    pub fn standardize_sheet(&self, mut sheet: Sheet) -> Result<Sheet> {
        for h in sheet.headers.iter_mut() {
            *h = h.trim().to_lowercase();
        }
        let col = sheet
            .column(LOCATION_COLUMN)
            .ok_or_else(|| Error::MissingColumn(LOCATION_COLUMN.to_string()))?;

        let preprocessed: Vec<String> = (0..sheet.rows.len())
            .map(|r| preprocess_location(sheet.cell(r, col)))
            .collect();
        let map = self.build_map(preprocessed.iter().map(String::as_str));
        info!(rows = sheet.rows.len(), distinct = map.len(), "Location map built");

        let standard: Vec<String> = preprocessed
            .iter()
            .map(|p| map.get(p).cloned().unwrap_or_else(|| UNKNOWN.to_string()))
            .collect();

        sheet.push_column(PREPROCESSED_COLUMN, preprocessed);
        sheet.push_column(STANDARD_COLUMN, standard);
        Ok(sheet)
    }
}

// ── Tests ──
