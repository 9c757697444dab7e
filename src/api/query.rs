// Input validation module
// Parse-then-validate for the `number` query parameter.

use super::types::ErrorBody;

/// Classified validation failure, surfaced as a 400 body tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// No `number` key in the query string.
    MissingInput,
    /// Value is not an optionally-negated run of decimal digits.
    NotANumber,
}

impl ValidationError {
    /// Wire tag used in the 400 response body.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::MissingInput => "missing input",
            Self::NotANumber => "alphabet",
        }
    }

    pub const fn body(self) -> ErrorBody {
        ErrorBody {
            number: self.tag(),
            error: true,
        }
    }
}

/// Validate the raw query string and extract the number to classify.
///
/// Negative values are valid input and proceed to classification; only the
/// digit-character check runs before conversion. All-digit values outside
/// the `i64` range are classified `NotANumber`.
pub fn parse_number_param(raw_query: Option<&str>) -> Result<i64, ValidationError> {
    let raw = number_param(raw_query).ok_or(ValidationError::MissingInput)?;

    // A single leading minus is tolerated; everything after it must be
    // ASCII digits.
    let unsigned = raw.strip_prefix('-').unwrap_or(raw);
    if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotANumber);
    }

    raw.parse().map_err(|_| ValidationError::NotANumber)
}

/// Find the `number` key in a raw query string. A key without `=` counts as
/// present with an empty value.
fn number_param(raw_query: Option<&str>) -> Option<&str> {
    raw_query?.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        (key == "number").then_some(value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_integers() {
        assert_eq!(parse_number_param(Some("number=7")), Ok(7));
        assert_eq!(parse_number_param(Some("number=371")), Ok(371));
        assert_eq!(parse_number_param(Some("number=0")), Ok(0));
    }

    #[test]
    fn test_negative_numbers_pass_through() {
        assert_eq!(parse_number_param(Some("number=-5")), Ok(-5));
        assert_eq!(parse_number_param(Some("number=-371")), Ok(-371));
    }

    #[test]
    fn test_missing_input() {
        assert_eq!(parse_number_param(None), Err(ValidationError::MissingInput));
        assert_eq!(
            parse_number_param(Some("other=7")),
            Err(ValidationError::MissingInput)
        );
    }

    #[test]
    fn test_non_numeric_values() {
        for query in [
            "number=abc",
            "number=",
            "number",
            "number=-",
            "number=--5",
            "number=+5",
            "number=3.14",
            "number=12a",
            "number= 7",
        ] {
            assert_eq!(
                parse_number_param(Some(query)),
                Err(ValidationError::NotANumber),
                "query '{query}' should be rejected as non-numeric"
            );
        }
    }

    #[test]
    fn test_out_of_range_magnitude_is_rejected() {
        // All digits, but wider than i64.
        assert_eq!(
            parse_number_param(Some("number=1234567890123456789012345")),
            Err(ValidationError::NotANumber)
        );
    }

    #[test]
    fn test_number_key_among_other_params() {
        assert_eq!(parse_number_param(Some("a=1&number=28&b=2")), Ok(28));
    }

    #[test]
    fn test_error_tags() {
        assert_eq!(ValidationError::MissingInput.tag(), "missing input");
        assert_eq!(ValidationError::NotANumber.tag(), "alphabet");
    }
}
