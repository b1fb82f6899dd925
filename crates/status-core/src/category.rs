//! Status classification
//!
//! Maps an optional status code onto a category and a traffic-light color.
//! Informational and redirection codes light green alongside success.

use serde::{Deserialize, Serialize};

/// Status code family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
    /// No code, or a code outside 100..=599
    Invalid,
}

impl Category {
    /// Short label as shown in the chart legend ("1xx", "4xx", ...)
    pub fn label(&self) -> &'static str {
        match self {
            Self::Informational => "1xx",
            Self::Success => "2xx",
            Self::Redirection => "3xx",
            Self::ClientError => "4xx",
            Self::ServerError => "5xx",
            Self::Invalid => "invalid",
        }
    }

    /// Human readable description of the family
    pub fn description(&self) -> &'static str {
        match self {
            Self::Informational => "Informational",
            Self::Success => "Success",
            Self::Redirection => "Redirection",
            Self::ClientError => "Client Error",
            Self::ServerError => "Server Error",
            Self::Invalid => "Invalid",
        }
    }
}

/// Traffic light state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Light {
    /// Nothing classified yet (or the input was cleared)
    #[default]
    Off,
    Green,
    Amber,
    Red,
}

/// Result of classifying a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub category: Category,
    pub light: Light,
}

impl Classification {
    const fn new(category: Category, light: Light) -> Self {
        Self { category, light }
    }
}

/// Classify a status code
///
/// Total over its input: every `u64` and the absent case map to exactly one
/// category. Never yields [`Light::Off`].
pub fn classify(code: Option<u64>) -> Classification {
    use Category::*;

    match code {
        None => Classification::new(Invalid, Light::Amber),
        Some(100..=199) => Classification::new(Informational, Light::Green),
        Some(200..=299) => Classification::new(Success, Light::Green),
        Some(300..=399) => Classification::new(Redirection, Light::Green),
        Some(400..=499) => Classification::new(ClientError, Light::Red),
        Some(500..=599) => Classification::new(ServerError, Light::Red),
        Some(_) => Classification::new(Invalid, Light::Amber),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_informational_success_and_redirects_are_green() {
        for code in 100..=399 {
            assert_eq!(classify(Some(code)).light, Light::Green, "code {}", code);
        }
    }

    #[test]
    fn test_client_and_server_errors_are_red() {
        for code in 400..=599 {
            assert_eq!(classify(Some(code)).light, Light::Red, "code {}", code);
        }
    }

    #[test]
    fn test_out_of_range_is_invalid_amber() {
        for code in [0, 1, 99, 600, 999, 9999, u64::MAX] {
            let c = classify(Some(code));
            assert_eq!(c.category, Category::Invalid, "code {}", code);
            assert_eq!(c.light, Light::Amber);
        }
    }

    #[test]
    fn test_absent_is_invalid_amber() {
        assert_eq!(
            classify(None),
            Classification {
                category: Category::Invalid,
                light: Light::Amber
            }
        );
    }

    #[test]
    fn test_boundaries_pick_the_right_family() {
        assert_eq!(classify(Some(100)).category, Category::Informational);
        assert_eq!(classify(Some(199)).category, Category::Informational);
        assert_eq!(classify(Some(200)).category, Category::Success);
        assert_eq!(classify(Some(300)).category, Category::Redirection);
        assert_eq!(classify(Some(399)).category, Category::Redirection);
        assert_eq!(classify(Some(400)).category, Category::ClientError);
        assert_eq!(classify(Some(499)).category, Category::ClientError);
        assert_eq!(classify(Some(500)).category, Category::ServerError);
        assert_eq!(classify(Some(599)).category, Category::ServerError);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Category::ClientError.label(), "4xx");
        assert_eq!(Category::Invalid.label(), "invalid");
        assert_eq!(Category::Redirection.description(), "Redirection");
    }
}
