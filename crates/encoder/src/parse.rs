//! Delimited Series Parsing

use crate::error::EncodeError;

/// Parse a delimited spike-train string into a numeric vector
///
/// `delimiter = None` splits on any whitespace. A token that does not parse
/// as a number (including the single giant token produced by a mismatched
/// delimiter) surfaces as [`EncodeError::ParseError`]; malformed data is
/// never returned silently. An empty or all-whitespace input yields an empty
/// vector.
pub fn parse_series(raw: &str, delimiter: Option<char>) -> Result<Vec<f64>, EncodeError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }
    let tokens: Vec<&str> = match delimiter {
        Some(sep) => raw.split(sep).collect(),
        None => raw.split_whitespace().collect(),
    };
    let mut values = Vec::with_capacity(tokens.len());
    for (position, token) in tokens.iter().enumerate() {
        let value = token.trim().parse::<f64>().map_err(|_| EncodeError::ParseError {
            token: token.to_string(),
            position,
        })?;
        values.push(value);
    }
    Ok(values)
}

/// Serialize a numeric vector into a space-delimited string
///
/// Uses shortest round-trip float formatting, so
/// `parse_series(&serialize_series(v), None)` reproduces `v` exactly.
pub fn serialize_series(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_delimited() {
        let values = parse_series("1.0 2.5  3", None).unwrap();
        assert_eq!(values, vec![1.0, 2.5, 3.0]);
    }

    #[test]
    fn test_comma_delimited() {
        let values = parse_series("0.1,0.2,0.3", Some(',')).unwrap();
        assert_eq!(values, vec![0.1, 0.2, 0.3]);
    }

    #[test]
    fn test_bad_token_is_error() {
        let err = parse_series("1.0 spike 3.0", None).unwrap_err();
        match err {
            EncodeError::ParseError { token, position } => {
                assert_eq!(token, "spike");
                assert_eq!(position, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_mismatched_delimiter_is_error() {
        // Comma-separated data parsed as whitespace-delimited collapses into
        // one unparseable token instead of returning malformed rows.
        assert!(parse_series("1,2,3", None).is_err());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_series("", None).unwrap().is_empty());
        assert!(parse_series("   ", Some(',')).unwrap().is_empty());
    }

    #[test]
    fn test_serialize_round_trip() {
        let values = vec![0.123456789, 42.0, 1e-7, 1234.5678901];
        let parsed = parse_series(&serialize_series(&values), None).unwrap();
        assert_eq!(parsed, values);
    }
}
