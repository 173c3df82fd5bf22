//! Upload/classify session state machine.
//!
//! [`UploadSession`] owns the lifecycle of one classification attempt:
//! select -> preview -> submit -> result-or-error -> reset. Components
//! never toggle loading/error flags directly; they ask the session to
//! transition and render whatever state it is in afterwards.
//!
//! The session is generic over the selected blob handle so the machine
//! stays pure and host-testable (`web_sys::File` in the app, any `Clone`
//! stand-in in tests).
//!
//! # Stale-resolution guard
//!
//! Both asynchronous edges are tagged with counters: file selections
//! carry a generation (so a preview read finishing after the file was
//! replaced or cleared is dropped) and submissions carry a sequence
//! number (so only the latest in-flight request may resolve the
//! session). The original behavior left the second case unguarded;
//! here a stale response is discarded instead of clobbering a newer one.

use crate::types::{ClassifiedResult, ClassifyError, Prediction};

/// Discrete stage of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Nothing selected yet
    Idle,
    /// An image is selected and previewable
    FileSelected,
    /// Exactly one classification request is outstanding
    Submitting,
    /// A result is available
    Succeeded,
    /// The last submission failed
    Failed,
}

/// A user-selected file with its declared content type.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<F> {
    /// Opaque blob handle
    pub handle: F,
    /// Declared MIME type (already checked to start with `image/`)
    pub mime: String,
    /// File name, for display
    pub name: String,
}

/// Ticket handed out by [`UploadSession::begin_submit`].
///
/// Carries the sequence number the eventual resolution must present,
/// plus a clone of the file handle to put on the wire.
#[derive(Clone, Debug, PartialEq)]
pub struct SubmitTicket<F> {
    pub seq: u64,
    pub file: F,
}

/// Client-side controller for one image-classification attempt.
#[derive(Clone, Debug, PartialEq)]
pub struct UploadSession<F> {
    phase: Phase,
    selected: Option<SelectedFile<F>>,
    preview_data_uri: Option<String>,
    drag_active: bool,
    result: Option<ClassifiedResult>,
    error_message: Option<String>,
    selection_gen: u64,
    submit_seq: u64,
    in_flight: Option<u64>,
}

impl<F> Default for UploadSession<F> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            selected: None,
            preview_data_uri: None,
            drag_active: false,
            result: None,
            error_message: None,
            selection_gen: 0,
            submit_seq: 0,
            in_flight: None,
        }
    }
}

impl<F> UploadSession<F> {
    /// Create an empty session in the `Idle` phase.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selected(&self) -> Option<&SelectedFile<F>> {
        self.selected.as_ref()
    }

    pub fn preview_data_uri(&self) -> Option<&str> {
        self.preview_data_uri.as_deref()
    }

    pub fn drag_active(&self) -> bool {
        self.drag_active
    }

    /// The loading observable: true only while a request is outstanding.
    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn result(&self) -> Option<&ClassifiedResult> {
        self.result.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Accept a file whose declared content type starts with `image/`.
    ///
    /// On acceptance any prior preview, result, or error is discarded,
    /// the phase moves to `FileSelected`, and the returned generation
    /// must accompany the asynchronous [`attach_preview`] call.
    ///
    /// Rejection leaves the session untouched: a previously selected
    /// file stays selected and the phase does not change.
    ///
    /// [`attach_preview`]: UploadSession::attach_preview
    pub fn select_file(
        &mut self,
        handle: F,
        mime: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<u64, ClassifyError> {
        let mime = mime.into();
        if !mime.starts_with("image/") {
            return Err(ClassifyError::InvalidInput);
        }

        self.selection_gen += 1;
        self.selected = Some(SelectedFile {
            handle,
            mime,
            name: name.into(),
        });
        self.preview_data_uri = None;
        self.result = None;
        self.error_message = None;
        self.phase = Phase::FileSelected;
        Ok(self.selection_gen)
    }

    /// Attach the asynchronously derived data URI for selection `gen`.
    ///
    /// Ignored when the selection has since been replaced or cleared.
    pub fn attach_preview(&mut self, gen: u64, data_uri: impl Into<String>) -> bool {
        if self.selection_gen != gen || self.selected.is_none() {
            return false;
        }
        self.preview_data_uri = Some(data_uri.into());
        true
    }

    /// Start a submission.
    ///
    /// Returns `Ok(None)` while a request is already outstanding (the
    /// call is ignored, not an error), `Err(NoFileSelected)` when
    /// nothing is selected, and otherwise a [`SubmitTicket`] whose
    /// sequence number the resolution must present.
    pub fn begin_submit(&mut self) -> Result<Option<SubmitTicket<F>>, ClassifyError>
    where
        F: Clone,
    {
        if self.phase == Phase::Submitting {
            return Ok(None);
        }
        let file = match &self.selected {
            Some(selected) => selected.handle.clone(),
            None => return Err(ClassifyError::NoFileSelected),
        };

        self.error_message = None;
        self.result = None;
        self.phase = Phase::Submitting;
        self.submit_seq += 1;
        self.in_flight = Some(self.submit_seq);
        Ok(Some(SubmitTicket {
            seq: self.submit_seq,
            file,
        }))
    }

    /// Resolve submission `seq` with a prediction.
    ///
    /// Returns false (and changes nothing) when `seq` is not the
    /// latest in-flight submission.
    pub fn resolve_success(&mut self, seq: u64, prediction: Prediction) -> bool {
        if self.in_flight != Some(seq) {
            return false;
        }
        self.in_flight = None;
        self.result = Some(ClassifiedResult {
            prediction,
            image: self.preview_data_uri.clone(),
        });
        self.error_message = None;
        self.phase = Phase::Succeeded;
        true
    }

    /// Resolve submission `seq` with a failure message.
    ///
    /// Returns false (and changes nothing) when `seq` is stale.
    pub fn resolve_failure(&mut self, seq: u64, message: impl Into<String>) -> bool {
        if self.in_flight != Some(seq) {
            return false;
        }
        self.in_flight = None;
        self.error_message = Some(message.into());
        self.result = None;
        self.phase = Phase::Failed;
        true
    }

    /// Reset to the empty `Idle` state. Callable from any phase.
    ///
    /// Counters are preserved so late async completions from before the
    /// reset are still recognized as stale.
    pub fn clear(&mut self) {
        self.phase = Phase::Idle;
        self.selected = None;
        self.preview_data_uri = None;
        self.drag_active = false;
        self.result = None;
        self.error_message = None;
        self.in_flight = None;
    }

    /// Toggle the drag-gesture highlight.
    pub fn set_drag_active(&mut self, active: bool) {
        self.drag_active = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::confidence_percentage;

    type TestSession = UploadSession<&'static str>;

    fn session_with_file() -> (TestSession, u64) {
        let mut session = TestSession::new();
        let gen = session
            .select_file("blob-1", "image/png", "bottle.png")
            .unwrap();
        (session, gen)
    }

    #[test]
    fn rejects_non_image_without_touching_state() {
        let mut session = TestSession::new();
        let err = session.select_file("blob-1", "text/csv", "works.csv");
        assert_eq!(err, Err(ClassifyError::InvalidInput));
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.selected().is_none());
    }

    #[test]
    fn rejection_keeps_previously_selected_file() {
        let (mut session, _) = session_with_file();
        let err = session.select_file("blob-2", "application/pdf", "doc.pdf");
        assert_eq!(err, Err(ClassifyError::InvalidInput));
        assert_eq!(session.phase(), Phase::FileSelected);
        assert_eq!(session.selected().unwrap().handle, "blob-1");
    }

    #[test]
    fn accepts_image_and_attaches_preview() {
        let (mut session, gen) = session_with_file();
        assert_eq!(session.phase(), Phase::FileSelected);
        assert!(session.preview_data_uri().is_none());

        assert!(session.attach_preview(gen, "data:image/png;base64,AAAA"));
        assert_eq!(
            session.preview_data_uri(),
            Some("data:image/png;base64,AAAA")
        );
    }

    #[test]
    fn stale_preview_read_is_discarded() {
        let (mut session, old_gen) = session_with_file();
        let new_gen = session
            .select_file("blob-2", "image/jpeg", "can.jpg")
            .unwrap();

        assert!(!session.attach_preview(old_gen, "data:old"));
        assert!(session.preview_data_uri().is_none());
        assert!(session.attach_preview(new_gen, "data:new"));
    }

    #[test]
    fn preview_read_after_clear_is_discarded() {
        let (mut session, gen) = session_with_file();
        session.clear();
        assert!(!session.attach_preview(gen, "data:late"));
        assert!(session.preview_data_uri().is_none());
    }

    #[test]
    fn submit_without_file_is_rejected_before_any_request() {
        let mut session = TestSession::new();
        assert_eq!(session.begin_submit(), Err(ClassifyError::NoFileSelected));
        assert_eq!(session.phase(), Phase::Idle);
        assert!(!session.is_submitting());
    }

    #[test]
    fn successful_submission_lifecycle() {
        let (mut session, gen) = session_with_file();
        session.attach_preview(gen, "data:image/png;base64,AAAA");

        let ticket = session.begin_submit().unwrap().unwrap();
        assert_eq!(ticket.file, "blob-1");
        assert!(session.is_submitting());

        let resolved = session.resolve_success(
            ticket.seq,
            Prediction {
                label: "metal".to_string(),
                confidence: 0.93,
            },
        );
        assert!(resolved);
        assert_eq!(session.phase(), Phase::Succeeded);
        assert!(!session.is_submitting());

        let result = session.result().unwrap();
        assert_eq!(result.prediction.label, "metal");
        assert_eq!(result.prediction.confidence, 0.93);
        assert_eq!(confidence_percentage(result.prediction.confidence), 93);
        assert_eq!(result.image.as_deref(), Some("data:image/png;base64,AAAA"));
        assert!(session.error_message().is_none());
    }

    #[test]
    fn failed_submission_sets_message_and_stops_loading() {
        let (mut session, _) = session_with_file();
        let ticket = session.begin_submit().unwrap().unwrap();

        assert!(session.resolve_failure(ticket.seq, "Classification failed: server returned 500"));
        assert_eq!(session.phase(), Phase::Failed);
        assert!(!session.is_submitting());
        assert!(!session.error_message().unwrap().is_empty());
        assert!(session.result().is_none());
    }

    #[test]
    fn second_submit_while_in_flight_is_ignored() {
        let (mut session, _) = session_with_file();
        let first = session.begin_submit().unwrap();
        assert!(first.is_some());
        assert_eq!(session.begin_submit(), Ok(None));
    }

    #[test]
    fn stale_resolution_does_not_clobber_newer_submission() {
        let (mut session, _) = session_with_file();
        let first = session.begin_submit().unwrap().unwrap();

        // First request fails, user re-submits, then the late first
        // response arrives after the second already resolved.
        session.resolve_failure(first.seq, "connection refused");
        let second = session.begin_submit().unwrap().unwrap();
        assert!(session.resolve_success(
            second.seq,
            Prediction {
                label: "glass".to_string(),
                confidence: 0.71,
            },
        ));

        assert!(!session.resolve_success(
            first.seq,
            Prediction {
                label: "trash".to_string(),
                confidence: 0.12,
            },
        ));
        assert_eq!(session.result().unwrap().prediction.label, "glass");
        assert_eq!(session.phase(), Phase::Succeeded);
    }

    #[test]
    fn resolution_after_clear_is_discarded() {
        let (mut session, _) = session_with_file();
        let ticket = session.begin_submit().unwrap().unwrap();
        session.clear();

        assert!(!session.resolve_failure(ticket.seq, "too late"));
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.error_message().is_none());
    }

    #[test]
    fn clear_resets_everything_and_is_idempotent() {
        let (mut session, gen) = session_with_file();
        session.attach_preview(gen, "data:image/png;base64,AAAA");
        session.set_drag_active(true);
        let ticket = session.begin_submit().unwrap().unwrap();
        session.resolve_success(
            ticket.seq,
            Prediction {
                label: "paper".to_string(),
                confidence: 0.88,
            },
        );

        session.clear();
        let snapshot = session.clone();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.selected().is_none());
        assert!(session.preview_data_uri().is_none());
        assert!(!session.drag_active());
        assert!(session.result().is_none());
        assert!(session.error_message().is_none());

        session.clear();
        assert_eq!(session, snapshot);
    }

    #[test]
    fn new_selection_discards_prior_result_and_error() {
        let (mut session, _) = session_with_file();
        let ticket = session.begin_submit().unwrap().unwrap();
        session.resolve_failure(ticket.seq, "server returned 500");
        assert_eq!(session.phase(), Phase::Failed);

        session
            .select_file("blob-2", "image/jpeg", "can.jpg")
            .unwrap();
        assert_eq!(session.phase(), Phase::FileSelected);
        assert!(session.error_message().is_none());
        assert!(session.result().is_none());
        assert_eq!(session.selected().unwrap().name, "can.jpg");
    }
}
