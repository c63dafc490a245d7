//! A recursion guard over rule dispatch, adapted from `apollo-parser`'s
//! `LimitTracker`, which guarded tree-node construction against stack
//! overflow on pathological input. Here it guards against cyclic or
//! deeply self-referential grammars instead: every entry into a named rule
//! increments it, every return decrements it, and hitting the limit turns
//! into a single structural diagnostic rather than a crash.
//!
//! This is a safety net the grammar model doesn't otherwise promise — a
//! grammar that genuinely recurses this deep on legitimate input would
//! need a caller-supplied higher limit, not a different engine.

/// The depth a fresh [`crate::validate`] call starts a `RecursionGuard`
/// with, absent an explicit limit from [`crate::validate_with_limit`].
///
/// Lower than `apollo-parser`'s default recursion limit (4096, tuned by
/// router experimentation for deeply nested GraphQL documents): directory-
/// service replies are short, line-oriented records, not deeply nested
/// documents, so a few hundred nested rule references already indicates a
/// cyclic grammar rather than legitimate depth.
pub const DEFAULT_RECURSION_LIMIT: usize = 128;

#[derive(Debug, Clone)]
pub(crate) struct RecursionGuard {
    current: usize,
    high: usize,
    limit: usize,
}

impl RecursionGuard {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            current: 0,
            high: 0,
            limit,
        }
    }

    /// Attempts to enter one more level of rule dispatch. Returns `false`
    /// without changing state if the limit has already been reached; the
    /// caller must not recurse further for that branch.
    pub(crate) fn enter(&mut self) -> bool {
        if self.current >= self.limit {
            return false;
        }
        self.current += 1;
        self.high = self.high.max(self.current);
        true
    }

    /// Leaves one level of rule dispatch entered via a successful
    /// [`Self::enter`].
    pub(crate) fn exit(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    #[cfg(test)]
    pub(crate) fn high_water_mark(&self) -> usize {
        self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enters_and_exits_track_current_depth() {
        let mut guard = RecursionGuard::new(2);
        assert!(guard.enter());
        assert!(guard.enter());
        assert!(!guard.enter());
        guard.exit();
        assert!(guard.enter());
        assert_eq!(guard.high_water_mark(), 2);
    }

    #[test]
    fn limit_of_zero_rejects_immediately() {
        let mut guard = RecursionGuard::new(0);
        assert!(!guard.enter());
    }
}
