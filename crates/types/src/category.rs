//! Number categories served by the upstream generator.
//!
//! Each category is addressed on our HTTP surface by a single-letter code and
//! on the upstream service by a path segment.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Raw category code that is not one of `p`, `f`, `e`, `r`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid number type. Use p (prime), f (fibonacci), e (even), or r (random)")]
pub struct InvalidCategory(pub String);

/// Which upstream number generator to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryCode {
    Prime,
    Fibonacci,
    Even,
    Random,
}

impl CategoryCode {
    /// Every category, in code order `p`, `f`, `e`, `r`.
    pub const ALL: [CategoryCode; 4] = [
        CategoryCode::Prime,
        CategoryCode::Fibonacci,
        CategoryCode::Even,
        CategoryCode::Random,
    ];

    /// Parse a raw path parameter. Matching is exact: no trimming, no case folding.
    pub fn parse(raw: &str) -> Result<Self, InvalidCategory> {
        match raw {
            "p" => Ok(CategoryCode::Prime),
            "f" => Ok(CategoryCode::Fibonacci),
            "e" => Ok(CategoryCode::Even),
            "r" => Ok(CategoryCode::Random),
            other => Err(InvalidCategory(other.to_string())),
        }
    }

    /// Single-letter code used on the `/numbers/{numberid}` route.
    pub fn code(self) -> char {
        match self {
            CategoryCode::Prime => 'p',
            CategoryCode::Fibonacci => 'f',
            CategoryCode::Even => 'e',
            CategoryCode::Random => 'r',
        }
    }

    /// Upstream path segment for this category.
    pub fn endpoint(self) -> &'static str {
        match self {
            CategoryCode::Prime => "primes",
            CategoryCode::Fibonacci => "fibo",
            CategoryCode::Even => "even",
            CategoryCode::Random => "rand",
        }
    }
}

impl FromStr for CategoryCode {
    type Err = InvalidCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CategoryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryCode::Prime => write!(f, "prime"),
            CategoryCode::Fibonacci => write!(f, "fibonacci"),
            CategoryCode::Even => write!(f, "even"),
            CategoryCode::Random => write!(f, "random"),
        }
    }
}
