// API response types module

use serde::Serialize;

use crate::classify;

/// Full classification of one validated number. Lives for a single request.
#[derive(Debug, Serialize)]
pub struct ClassificationResult {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    pub properties: Vec<&'static str>,
    pub digit_sum: u64,
    pub fun_fact: String,
}

impl ClassificationResult {
    /// Classify `number` and attach the resolved fact.
    ///
    /// The property tags and the boolean fields come from the same predicate
    /// evaluations, so the two can never disagree. Tags are appended in
    /// fixed order: prime, perfect, armstrong, odd.
    pub fn new(number: i64, fun_fact: String) -> Self {
        let is_prime = classify::is_prime(number);
        let is_perfect = classify::is_perfect(number);

        let mut properties = Vec::new();
        if is_prime {
            properties.push("prime");
        }
        if is_perfect {
            properties.push("perfect");
        }
        if classify::is_armstrong(number) {
            properties.push("armstrong");
        }
        if classify::is_odd(number) {
            properties.push("odd");
        }

        Self {
            number,
            is_prime,
            is_perfect,
            properties,
            digit_sum: classify::digit_sum(number),
            fun_fact,
        }
    }
}

/// 400 body for a failed validation: `{"number": <tag>, "error": true}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub number: &'static str,
    pub error: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_for(n: i64) -> ClassificationResult {
        ClassificationResult::new(n, String::from("fact"))
    }

    #[test]
    fn test_prime_number() {
        let result = result_for(7);
        assert!(result.is_prime);
        assert!(!result.is_perfect);
        assert_eq!(result.properties, vec!["prime", "odd"]);
        assert_eq!(result.digit_sum, 7);
    }

    #[test]
    fn test_perfect_number() {
        let result = result_for(6);
        assert!(result.is_perfect);
        assert_eq!(result.properties, vec!["perfect"]);
    }

    #[test]
    fn test_armstrong_number() {
        let result = result_for(371);
        assert_eq!(result.properties, vec!["armstrong", "odd"]);
        assert_eq!(result.digit_sum, 11);
    }

    #[test]
    fn test_negative_odd_number() {
        let result = result_for(-5);
        assert_eq!(result.number, -5);
        assert!(!result.is_prime);
        assert_eq!(result.properties, vec!["odd"]);
        assert_eq!(result.digit_sum, 5);
    }

    #[test]
    fn test_zero() {
        // 0 is neither prime nor perfect nor odd, but 0^1 = 0.
        let result = result_for(0);
        assert_eq!(result.properties, vec!["armstrong"]);
        assert_eq!(result.digit_sum, 0);
    }

    #[test]
    fn test_tag_order_is_fixed() {
        // 5 is prime, Armstrong (5^1 = 5), and odd.
        let result = result_for(5);
        assert_eq!(result.properties, vec!["prime", "armstrong", "odd"]);
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(result_for(7)).expect("serializable");
        assert_eq!(json["number"], 7);
        assert_eq!(json["is_prime"], true);
        assert_eq!(json["properties"][0], "prime");
        assert_eq!(json["fun_fact"], "fact");
    }
}
