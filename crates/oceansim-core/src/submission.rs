//! Submission tokens
//!
//! Every submit gets a fresh, strictly increasing token. Only the outcome
//! carrying the most recent token may touch form state; anything older is
//! stale and gets discarded regardless of the order responses arrive in.

/// Identifier of one submission
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SubmissionToken(u64);

impl std::fmt::Display for SubmissionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues tokens and remembers which one is current
#[derive(Debug, Default)]
pub struct SubmissionTracker {
    issued: u64,
    pending: Option<SubmissionToken>,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new submission. Any earlier pending token becomes stale.
    pub fn begin(&mut self) -> SubmissionToken {
        self.issued += 1;
        let token = SubmissionToken(self.issued);
        self.pending = Some(token);
        token
    }

    /// Mark `token` as finished.
    ///
    /// Returns `true` if its outcome should be applied: it is the latest
    /// token and has not already been finished.
    pub fn finish(&mut self, token: SubmissionToken) -> bool {
        if self.pending == Some(token) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    /// Token of the submission still awaiting its outcome, if any
    pub fn pending(&self) -> Option<SubmissionToken> {
        self.pending
    }

    /// Drop the pending submission without applying anything
    pub fn cancel(&mut self) -> Option<SubmissionToken> {
        self.pending.take()
    }
}
