//! Job and order parsers.

use crate::job::PalletJob;
use std::fs;
use std::path::Path;
use thiserror::Error;
use u_pallet::Order;

/// Errors that can occur when reading jobs and orders.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid order line {line}: {reason}")]
    InvalidOrderLine { line: usize, reason: String },
}

/// Parser for pallet jobs and CSV orders.
#[derive(Debug, Default)]
pub struct JobParser;

impl JobParser {
    /// Creates a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parses a job from a JSON file.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<PalletJob, ParseError> {
        let content = fs::read_to_string(path)?;
        self.parse_json(&content)
    }

    /// Parses a job from a JSON string.
    pub fn parse_json(&self, json: &str) -> Result<PalletJob, ParseError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses an order from a CSV file.
    pub fn parse_order_file(&self, path: impl AsRef<Path>) -> Result<Order, ParseError> {
        let content = fs::read_to_string(path)?;
        self.parse_order_csv(&content)
    }

    /// Parses `name,qty` lines into an order.
    ///
    /// Blank lines and lines with fewer than two non-empty fields are
    /// skipped. Quantities may be written as decimals and are truncated. A
    /// repeated name takes the later quantity.
    pub fn parse_order_csv(&self, text: &str) -> Result<Order, ParseError> {
        let mut order = Order::new();

        for (idx, raw) in text.lines().enumerate() {
            let fields: Vec<&str> = raw
                .split(',')
                .map(str::trim)
                .filter(|f| !f.is_empty())
                .collect();
            if fields.len() < 2 {
                continue;
            }

            let line = idx + 1;
            let value: f64 = fields[1].parse().map_err(|_| ParseError::InvalidOrderLine {
                line,
                reason: format!("quantity '{}' is not a number", fields[1]),
            })?;
            if !value.is_finite() || value < 0.0 || value.trunc() > f64::from(u32::MAX) {
                return Err(ParseError::InvalidOrderLine {
                    line,
                    reason: format!("quantity {} is out of range", value),
                });
            }

            order.insert(fields[0], value.trunc() as u32);
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order_csv() {
        let csv = "AZ17,47\n\n  AZ2 , 9.8 \nAZ4\nAZ17,2\n";
        let order = JobParser::new().parse_order_csv(csv).unwrap();

        let lines: Vec<(&str, u32)> = order.iter().map(|l| (l.name.as_str(), l.quantity)).collect();
        assert_eq!(lines, vec![("AZ17", 2), ("AZ2", 9)]);
    }

    #[test]
    fn test_parse_order_csv_rejects_bad_quantity() {
        let parser = JobParser::new();

        let err = parser.parse_order_csv("AZ17,47\nAZ2,many").unwrap_err();
        assert!(matches!(err, ParseError::InvalidOrderLine { line: 2, .. }));

        let err = parser.parse_order_csv("AZ2,-1").unwrap_err();
        assert!(matches!(err, ParseError::InvalidOrderLine { line: 1, .. }));
    }

    #[test]
    fn test_parse_json_job() {
        let json = r#"{
            "name": "small",
            "bounds": { "length": 10.0, "width": 6.0, "height": 5.0 },
            "boxes": [
                { "name": "A", "length": 6.0, "width": 10.0, "height": 5.0 }
            ],
            "order": [
                { "name": "A", "quantity": 1 }
            ]
        }"#;

        let job = JobParser::new().parse_json(json).unwrap();

        assert_eq!(job.name, "small");
        assert_eq!(job.bounds.length, 10.0);
        assert_eq!(job.boxes.len(), 1);
        assert_eq!(job.order().quantity("A"), 1);
    }

    #[test]
    fn test_job_json_roundtrip_keeps_line_order() {
        let job = PalletJob::default_job();
        let json = serde_json::to_string(&job).unwrap();
        let parsed = JobParser::new().parse_json(&json).unwrap();

        assert_eq!(parsed.order, job.order);
        assert_eq!(parsed.boxes, job.boxes);
    }
}
