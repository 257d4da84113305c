/// Counts completion signals from a known-size group of tweens.
///
/// The barrier fires exactly on the `expected`-th [`JoinBarrier::signal_one`]
/// call, never earlier and never more than once. Signaling past the expected
/// count is a choreography bookkeeping bug and panics.
#[derive(Debug, Clone)]
pub struct JoinBarrier {
    expected: u32,
    observed: u32,
}

impl JoinBarrier {
    /// # Panics
    ///
    /// Panics if `expected` is zero.
    #[must_use]
    pub fn new(expected: u32) -> Self {
        assert!(expected >= 1, "join barrier needs at least one expected signal");
        Self {
            expected,
            observed: 0,
        }
    }

    /// Records one completion. Returns `true` exactly when the observed count
    /// reaches the expected count.
    ///
    /// # Panics
    ///
    /// Panics if called after the barrier has fired.
    pub fn signal_one(&mut self) -> bool {
        assert!(
            self.observed < self.expected,
            "join barrier overflow: more signals than launched tweens"
        );
        self.observed += 1;
        self.observed == self.expected
    }

    #[inline]
    #[must_use]
    pub fn expected(&self) -> u32 {
        self.expected
    }

    #[inline]
    #[must_use]
    pub fn observed(&self) -> u32 {
        self.observed
    }
}
