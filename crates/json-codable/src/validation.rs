//! Outcome of a type's validation hook.

/// Result of [`Decodable::validate_decode`](crate::Decodable::validate_decode)
/// or [`Encodable::validate_encode`](crate::Encodable::validate_encode).
///
/// `Unimplemented` is what a type without a custom validator reports. It is
/// treated exactly like `Passed` by the decode and encode chains; only
/// `Failed` aborts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Validation {
    #[default]
    Unimplemented,
    Passed,
    Failed,
}

impl Validation {
    /// Build from a predicate result.
    pub fn check(ok: bool) -> Self {
        if ok {
            Validation::Passed
        } else {
            Validation::Failed
        }
    }

    pub fn is_failed(self) -> bool {
        matches!(self, Validation::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_failed_is_a_failure() {
        assert!(!Validation::Unimplemented.is_failed());
        assert!(!Validation::Passed.is_failed());
        assert!(Validation::Failed.is_failed());
        assert_eq!(Validation::default(), Validation::Unimplemented);
    }

    #[test]
    fn check_maps_predicate() {
        assert_eq!(Validation::check(true), Validation::Passed);
        assert_eq!(Validation::check(false), Validation::Failed);
    }
}
