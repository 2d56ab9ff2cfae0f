//! Upload form state
//!
//! Everything the upload form remembers between renders, kept free of any
//! UI framework so it can be driven directly from tests. The desktop app
//! wraps a `FormState` in a signal and forwards events to it.
//!
//! Lifecycle of one submission:
//!
//! ```ignore
//! let submission = form.begin_submit();          // phase: Submitting
//! let outcome = client.run_simulation(submission.file.as_ref()).await;
//! form.complete(submission.token, outcome);      // phase: Ready or Failed
//! ```

use chrono::{DateTime, Local};
use tracing::{debug, warn};

use crate::error::{SimResult, SimulationError};
use crate::object_url::ObjectUrl;
use crate::submission::{SubmissionToken, SubmissionTracker};
use crate::types::SelectedFile;

/// Where the form is in its submit cycle
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FormPhase {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// A request is in flight
    Submitting,
    /// Last submission produced an image
    Ready,
    /// Last submission failed
    Failed,
}

/// Work order for one submit, handed to whoever performs the request
#[derive(Debug, Clone)]
pub struct Submission {
    pub token: SubmissionToken,
    pub file: Option<SelectedFile>,
}

/// What happened to a completed submission
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    /// The result or error is now shown
    Applied,
    /// A newer submission superseded this one; nothing changed
    Stale,
}

/// State behind the upload form
#[derive(Debug, Default)]
pub struct FormState {
    file: Option<SelectedFile>,
    result: Option<ObjectUrl>,
    error: Option<SimulationError>,
    completed_at: Option<DateTime<Local>>,
    tracker: SubmissionTracker,
    picks: SubmissionTracker,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selected file. `None` clears the selection.
    ///
    /// Does not touch the current result.
    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        match &file {
            Some(f) => debug!(name = %f.name, bytes = f.len(), "File selected"),
            None => debug!("File selection cleared"),
        }
        self.file = file;
    }

    /// Start reading a newly picked file.
    ///
    /// The previous selection is dropped straight away so a submit made
    /// while the read is running never sends it. Only the read started
    /// last may fill the slot via [`finish_select`](Self::finish_select).
    pub fn begin_select(&mut self) -> SubmissionToken {
        let token = self.picks.begin();
        self.file = None;
        debug!(%token, "Reading picked file");
        token
    }

    /// Apply a finished file read if no newer pick has started since
    pub fn finish_select(&mut self, token: SubmissionToken, file: Option<SelectedFile>) -> Outcome {
        if !self.picks.finish(token) {
            debug!(%token, "Discarding superseded file read");
            return Outcome::Stale;
        }
        self.select_file(file);
        Outcome::Applied
    }

    /// Whether a picked file is still being read
    pub fn is_reading_file(&self) -> bool {
        self.picks.pending().is_some()
    }

    pub fn file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    /// Reference to the image currently shown
    pub fn result(&self) -> Option<&ObjectUrl> {
        self.result.as_ref()
    }

    pub fn result_url(&self) -> Option<&str> {
        self.result.as_ref().map(ObjectUrl::as_str)
    }

    /// Error from the last applied submission
    pub fn error(&self) -> Option<&SimulationError> {
        self.error.as_ref()
    }

    /// When the last applied submission finished
    pub fn completed_at(&self) -> Option<DateTime<Local>> {
        self.completed_at
    }

    pub fn phase(&self) -> FormPhase {
        if self.tracker.pending().is_some() {
            FormPhase::Submitting
        } else if self.error.is_some() {
            FormPhase::Failed
        } else if self.result.is_some() {
            FormPhase::Ready
        } else {
            FormPhase::Idle
        }
    }

    /// Start a submission with the currently selected file.
    ///
    /// Any submission still in flight becomes stale. The previous error is
    /// cleared; the previous image stays visible until replaced.
    pub fn begin_submit(&mut self) -> Submission {
        let token = self.tracker.begin();
        self.error = None;
        debug!(%token, has_file = self.file.is_some(), "Submission started");
        Submission {
            token,
            file: self.file.clone(),
        }
    }

    /// Apply the outcome of a submission if it is still the latest.
    ///
    /// A stale success is dropped here, which releases its buffer.
    pub fn complete(&mut self, token: SubmissionToken, outcome: SimResult<ObjectUrl>) -> Outcome {
        if !self.tracker.finish(token) {
            debug!(%token, "Discarding stale submission outcome");
            return Outcome::Stale;
        }

        self.completed_at = Some(Local::now());
        match outcome {
            Ok(url) => {
                debug!(%token, %url, "Submission succeeded");
                // Assigning drops the previous handle and frees its buffer
                self.result = Some(url);
                self.error = None;
            }
            Err(e) => {
                warn!(%token, error = %e, "Submission failed");
                self.error = Some(e);
            }
        }
        Outcome::Applied
    }

    /// Remove the shown image and release its buffer
    pub fn clear_result(&mut self) {
        if let Some(url) = self.result.take() {
            debug!(%url, "Result cleared");
            url.revoke();
        }
    }

    /// Hide the current error without submitting again
    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    /// Release everything held by the form. Called when the form unmounts.
    pub fn teardown(&mut self) {
        if let Some(token) = self.tracker.cancel() {
            debug!(%token, "Cancelled in-flight submission on teardown");
        }
        self.picks.cancel();
        if let Some(url) = self.result.take() {
            url.revoke();
        }
        self.error = None;
        self.file = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object_url::ObjectUrlRegistry;
    use crate::types::SimulationImage;
    use bytes::Bytes;

    fn image(data: &'static [u8]) -> SimulationImage {
        SimulationImage {
            bytes: Bytes::from_static(data),
            mime: "image/png".to_string(),
        }
    }

    #[test]
    fn starts_empty() {
        let form = FormState::new();
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(form.file().is_none());
        assert!(form.result().is_none());
        assert!(form.error().is_none());
    }

    #[test]
    fn selecting_file_keeps_result() {
        let registry = ObjectUrlRegistry::new();
        let mut form = FormState::new();

        let sub = form.begin_submit();
        form.complete(sub.token, Ok(registry.create(image(b"first"))));

        form.select_file(Some(SelectedFile::new("grid.nc", vec![1, 2, 3])));
        assert_eq!(form.file().unwrap().name, "grid.nc");
        assert!(form.result().is_some());

        form.select_file(None);
        assert!(form.file().is_none());
        assert!(form.result().is_some());
    }

    #[test]
    fn late_file_read_does_not_replace_newer_pick() {
        let mut form = FormState::new();

        let large = form.begin_select();
        let small = form.begin_select();
        assert!(form.is_reading_file());

        // Small file finishes reading first
        let outcome = form.finish_select(small, Some(SelectedFile::new("small.nc", vec![2])));
        assert_eq!(outcome, Outcome::Applied);
        assert!(!form.is_reading_file());

        let outcome = form.finish_select(large, Some(SelectedFile::new("large.nc", vec![1; 64])));
        assert_eq!(outcome, Outcome::Stale);

        assert_eq!(form.file().unwrap().name, "small.nc");
        assert_eq!(form.begin_submit().file.unwrap().name, "small.nc");
    }

    #[test]
    fn submit_during_read_does_not_send_previous_file() {
        let mut form = FormState::new();
        form.select_file(Some(SelectedFile::new("old.nc", vec![1])));

        let pick = form.begin_select();
        assert!(form.begin_submit().file.is_none());

        form.finish_select(pick, Some(SelectedFile::new("new.nc", vec![2])));
        assert_eq!(form.begin_submit().file.unwrap().name, "new.nc");
    }

    #[test]
    fn cleared_pick_empties_selection() {
        let mut form = FormState::new();
        let pick = form.begin_select();
        form.finish_select(pick, Some(SelectedFile::new("grid.nc", vec![1])));

        let pick = form.begin_select();
        assert_eq!(form.finish_select(pick, None), Outcome::Applied);
        assert!(form.file().is_none());
    }

    #[test]
    fn submission_carries_selected_file() {
        let mut form = FormState::new();
        assert!(form.begin_submit().file.is_none());

        form.select_file(Some(SelectedFile::new("grid.nc", vec![9])));
        let sub = form.begin_submit();
        assert_eq!(sub.file.unwrap().bytes.as_ref(), &[9]);
    }

    #[test]
    fn success_shows_result() {
        let registry = ObjectUrlRegistry::new();
        let mut form = FormState::new();

        let sub = form.begin_submit();
        assert_eq!(form.phase(), FormPhase::Submitting);

        let outcome = form.complete(sub.token, Ok(registry.create(image(b"ocean"))));
        assert_eq!(outcome, Outcome::Applied);
        assert_eq!(form.phase(), FormPhase::Ready);
        assert_eq!(form.result().unwrap().resolve().unwrap().bytes.as_ref(), b"ocean");
        assert!(form.completed_at().is_some());
    }

    #[test]
    fn failure_is_visible() {
        let mut form = FormState::new();
        let sub = form.begin_submit();

        form.complete(sub.token, Err(SimulationError::Timeout));

        assert_eq!(form.phase(), FormPhase::Failed);
        assert!(matches!(form.error(), Some(SimulationError::Timeout)));
        assert!(form.result().is_none());
    }

    #[test]
    fn dismissing_error_returns_to_previous_phase() {
        let registry = ObjectUrlRegistry::new();
        let mut form = FormState::new();

        let sub = form.begin_submit();
        form.complete(sub.token, Ok(registry.create(image(b"ok"))));
        let sub = form.begin_submit();
        form.complete(sub.token, Err(SimulationError::EmptyBody));
        assert_eq!(form.phase(), FormPhase::Failed);

        form.dismiss_error();
        assert_eq!(form.phase(), FormPhase::Ready);
    }

    #[test]
    fn resubmitting_clears_error() {
        let registry = ObjectUrlRegistry::new();
        let mut form = FormState::new();

        let sub = form.begin_submit();
        form.complete(sub.token, Err(SimulationError::EmptyBody));

        let sub = form.begin_submit();
        assert!(form.error().is_none());
        form.complete(sub.token, Ok(registry.create(image(b"ok"))));
        assert_eq!(form.phase(), FormPhase::Ready);
    }

    #[test]
    fn new_result_releases_previous() {
        let registry = ObjectUrlRegistry::new();
        let mut form = FormState::new();

        let sub = form.begin_submit();
        form.complete(sub.token, Ok(registry.create(image(b"first"))));
        let first = form.result_url().unwrap().to_string();

        let sub = form.begin_submit();
        form.complete(sub.token, Ok(registry.create(image(b"second"))));

        assert!(registry.resolve(&first).is_none());
        assert_eq!(registry.len(), 1);
        assert_eq!(form.result().unwrap().resolve().unwrap().bytes.as_ref(), b"second");
    }

    #[test]
    fn clear_result_releases_buffer() {
        let registry = ObjectUrlRegistry::new();
        let mut form = FormState::new();

        let sub = form.begin_submit();
        form.complete(sub.token, Ok(registry.create(image(b"ocean"))));
        form.clear_result();

        assert!(form.result().is_none());
        assert!(registry.is_empty());
        assert_eq!(form.phase(), FormPhase::Idle);
    }

    #[test]
    fn stale_success_is_ignored_and_released() {
        let registry = ObjectUrlRegistry::new();
        let mut form = FormState::new();

        let older = form.begin_submit();
        let newer = form.begin_submit();

        let outcome = form.complete(newer.token, Ok(registry.create(image(b"newer"))));
        assert_eq!(outcome, Outcome::Applied);

        let outcome = form.complete(older.token, Ok(registry.create(image(b"older"))));
        assert_eq!(outcome, Outcome::Stale);

        assert_eq!(form.result().unwrap().resolve().unwrap().bytes.as_ref(), b"newer");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn stale_failure_does_not_clobber_pending() {
        let mut form = FormState::new();

        let older = form.begin_submit();
        let _newer = form.begin_submit();

        form.complete(older.token, Err(SimulationError::Timeout));
        assert_eq!(form.phase(), FormPhase::Submitting);
        assert!(form.error().is_none());
    }

    #[test]
    fn teardown_releases_everything() {
        let registry = ObjectUrlRegistry::new();
        let mut form = FormState::new();

        let sub = form.begin_submit();
        form.complete(sub.token, Ok(registry.create(image(b"ocean"))));
        let pending = form.begin_submit();
        let pick = form.begin_select();

        form.teardown();

        assert!(registry.is_empty());
        assert_eq!(form.phase(), FormPhase::Idle);
        assert!(!form.is_reading_file());

        // Result arriving after teardown is dropped
        let outcome = form.complete(pending.token, Ok(registry.create(image(b"late"))));
        assert_eq!(outcome, Outcome::Stale);
        assert!(registry.is_empty());

        let outcome = form.finish_select(pick, Some(SelectedFile::new("late.nc", vec![1])));
        assert_eq!(outcome, Outcome::Stale);
        assert!(form.file().is_none());
    }
}
