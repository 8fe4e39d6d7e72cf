//! Handling of internal invariant violations.

use puzzlen_core::InvariantViolation;

/// What to do when an internal invariant turns out to be broken.
///
/// The default follows the build: [`Panic`](Self::Panic) with debug
/// assertions enabled, [`Tolerate`](Self::Tolerate) otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum InvariantPolicy {
    /// Halt with a panic carrying the violation.
    Panic,
    /// Log the violation and let the operation degrade to a no-op.
    Tolerate,
}

impl Default for InvariantPolicy {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::Panic
        } else {
            Self::Tolerate
        }
    }
}

impl InvariantPolicy {
    /// Reports a violation according to the policy.
    ///
    /// # Panics
    ///
    /// Panics under [`InvariantPolicy::Panic`].
    pub fn report(self, violation: InvariantViolation) {
        match self {
            Self::Panic => panic!("invariant violation: {violation}"),
            Self::Tolerate => log::error!("invariant violation ignored: {violation}"),
        }
    }

    /// Unwraps `result`, reporting the violation and returning `None` on error.
    ///
    /// # Panics
    ///
    /// Panics under [`InvariantPolicy::Panic`] if `result` is an error.
    pub fn check<T>(self, result: Result<T, InvariantViolation>) -> Option<T> {
        result.map_err(|violation| self.report(violation)).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_follows_build() {
        assert_eq!(
            InvariantPolicy::default().is_panic(),
            cfg!(debug_assertions)
        );
    }

    #[test]
    fn test_tolerate_degrades_to_none() {
        let policy = InvariantPolicy::Tolerate;
        assert_eq!(policy.check(Ok::<_, InvariantViolation>(3)), Some(3));
        assert_eq!(
            policy.check::<usize>(Err(InvariantViolation::MissingEmptySlot)),
            None
        );
    }

    #[test]
    #[should_panic(expected = "invariant violation: empty slot not found")]
    fn test_panic_policy_panics() {
        InvariantPolicy::Panic.report(InvariantViolation::MissingEmptySlot);
    }
}
