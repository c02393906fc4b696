//! Input validation primitives.
//!
//! These keep missing-argument checks in the command layer short.

use crate::error::{Error, Result};

/// Require a collection to be non-empty, reporting `field` as missing.
pub fn require_non_empty_vec<'a, T>(vec: &'a [T], field: &str) -> Result<&'a [T]> {
    if vec.is_empty() {
        Err(Error::validation_missing_argument(vec![field.to_string()]))
    } else {
        Ok(vec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn require_non_empty_vec_passes_for_non_empty() {
        let vec = vec![1, 2, 3];
        let result = require_non_empty_vec(&vec, "field");
        assert_eq!(result.unwrap(), &[1, 2, 3]);
    }

    #[test]
    fn require_non_empty_vec_fails_for_empty() {
        let vec: Vec<i32> = vec![];
        let err = require_non_empty_vec(&vec, "input").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationMissingArgument);
        assert_eq!(err.details["args"][0], "input");
    }
}
