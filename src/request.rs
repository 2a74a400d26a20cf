//! Query parameter validation.
//!
//! Turns the untyped parameter bag of an inbound event into a [`QueryRegion`],
//! or into one of the validation errors in [`Error`].

use crate::types::{QueryParameters, QueryRegion};
use crate::{Error, Result};
use serde_json::Value;

/// Validate the `queryStringParameters` value of an event.
///
/// An absent, `null`, non-object or empty container is
/// [`Error::MissingParameters`]. So is a container whose three keys are
/// present but not strings.
pub fn extract_query_region(params: Option<&Value>) -> Result<QueryRegion> {
    let result = match params {
        Some(Value::Object(map)) if !map.is_empty() => {
            serde_json::from_value::<QueryParameters>(Value::Object(map.clone()))
                .map_err(|_| Error::MissingParameters)
                .and_then(region_from_parameters)
        }
        _ => Err(Error::MissingParameters),
    };

    if let Err(e) = &result {
        tracing::error!(kind = e.kind(), "{}", e);
    }
    result
}

/// Validate already-typed parameters.
pub fn region_from_parameters(params: QueryParameters) -> Result<QueryRegion> {
    let (Some(chromosome), Some(start), Some(end)) = (
        non_empty(params.chromosome),
        non_empty(params.start),
        non_empty(params.end),
    ) else {
        return Err(Error::IncompleteParameters);
    };

    let start = parse_coordinate("start", &start)?;
    let end = parse_coordinate("end", &end)?;

    if start < 0 || end < 0 {
        return Err(Error::InvalidRange(format!(
            "coordinates must be non-negative, got {}-{}",
            start, end
        )));
    }
    if end < start {
        return Err(Error::InvalidRange(format!(
            "end {} is before start {}",
            end, start
        )));
    }

    Ok(QueryRegion {
        chromosome,
        start: start as u64,
        end: end as u64,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_coordinate(name: &str, value: &str) -> Result<i64> {
    value
        .parse::<i64>()
        .map_err(|e| Error::MalformedNumeric(format!("{} {:?}: {}", name, value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn params(chromosome: &str, start: &str, end: &str) -> Value {
        json!({"chromosome": chromosome, "start": start, "end": end})
    }

    #[test]
    fn test_valid_parameters() {
        let region = extract_query_region(Some(&params("chr1", "100000", "101000"))).unwrap();
        assert_eq!(
            region,
            QueryRegion {
                chromosome: "chr1".to_string(),
                start: 100000,
                end: 101000,
            }
        );
    }

    #[test]
    fn test_chromosome_is_not_normalized() {
        let region = extract_query_region(Some(&params("1", "0", "10"))).unwrap();
        assert_eq!(region.chromosome, "1");
    }

    #[test]
    fn test_missing_container() {
        assert!(matches!(extract_query_region(None), Err(Error::MissingParameters)));
        assert!(matches!(
            extract_query_region(Some(&Value::Null)),
            Err(Error::MissingParameters)
        ));
        assert!(matches!(
            extract_query_region(Some(&json!({}))),
            Err(Error::MissingParameters)
        ));
        assert!(matches!(
            extract_query_region(Some(&json!("chr1:1-2"))),
            Err(Error::MissingParameters)
        ));
    }

    #[test]
    fn test_non_string_values_rejected() {
        let value = json!({"chromosome": "chr1", "start": 1, "end": 2});
        assert!(matches!(
            extract_query_region(Some(&value)),
            Err(Error::MissingParameters)
        ));
    }

    #[test]
    fn test_incomplete_parameters() {
        let value = json!({"chromosome": "chr1", "start": "100"});
        assert!(matches!(
            extract_query_region(Some(&value)),
            Err(Error::IncompleteParameters)
        ));

        assert!(matches!(
            extract_query_region(Some(&params("", "1", "2"))),
            Err(Error::IncompleteParameters)
        ));
    }

    #[test]
    fn test_malformed_numeric() {
        let value = params("chr1", "one hundred thousand", "one hundred and one thousand");
        assert!(matches!(
            extract_query_region(Some(&value)),
            Err(Error::MalformedNumeric(_))
        ));
        assert!(matches!(
            extract_query_region(Some(&params("chr1", "10", "2.5"))),
            Err(Error::MalformedNumeric(_))
        ));
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(matches!(
            extract_query_region(Some(&params("chr1", "-5", "10"))),
            Err(Error::InvalidRange(_))
        ));
        assert!(matches!(
            extract_query_region(Some(&params("chr1", "200", "100"))),
            Err(Error::InvalidRange(_))
        ));
    }

    #[test]
    fn test_zero_width_region_is_valid() {
        let region = extract_query_region(Some(&params("chr1", "100", "100"))).unwrap();
        assert!(region.is_empty());
    }
}
