use consts::alerts;
use leptos::prelude::*;
use thiserror::Error;
use utils::{
    notify::Notifier,
    process_ai::{ProcessAiError, ProcessAiRequest, ProcessAiResponse, ProcessAiTransport},
    validation::{SelectionRejected, UploadPolicy},
    web::{MediaKind, SelectedFile},
};

/// Identity of one submission. Only the outstanding ticket may settle the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading(SubmissionTicket),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Error)]
#[error("missing input (video: {video}, image: {image}, text: {text})")]
pub struct MissingInputs {
    pub video: bool,
    pub image: bool,
    pub text: bool,
}

impl MissingInputs {
    pub fn any(&self) -> bool {
        self.video || self.image || self.text
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error(transparent)]
    MissingInput(#[from] MissingInputs),
    #[error("a submission is already in flight")]
    InFlight,
}

/// Everything the upload page holds between mount and unmount.
#[derive(Clone, Debug, Default)]
pub struct UploadForm {
    video: Option<SelectedFile>,
    image: Option<SelectedFile>,
    text: String,
    submission: SubmissionState,
    response: Option<ProcessAiResponse>,
    generation: u64,
}

impl UploadForm {
    pub fn select(&mut self, kind: MediaKind, file: SelectedFile) {
        match kind {
            MediaKind::Video => self.video = Some(file),
            MediaKind::Image => self.image = Some(file),
        }
    }

    pub fn select_video(&mut self, file: SelectedFile) {
        self.select(MediaKind::Video, file);
    }

    pub fn select_image(&mut self, file: SelectedFile) {
        self.select(MediaKind::Image, file);
    }

    pub fn update_text(&mut self, value: String) {
        self.text = value;
    }

    pub fn video(&self) -> Option<&SelectedFile> {
        self.video.as_ref()
    }

    pub fn image(&self) -> Option<&SelectedFile> {
        self.image.as_ref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn submission(&self) -> SubmissionState {
        self.submission
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.submission, SubmissionState::Loading(_))
    }

    pub fn response(&self) -> Option<&ProcessAiResponse> {
        self.response.as_ref()
    }

    pub fn missing_inputs(&self) -> MissingInputs {
        MissingInputs {
            video: self.video.is_none(),
            image: self.image.is_none(),
            text: self.text.is_empty(),
        }
    }

    /// Moves the form to `Loading` and hands out the request to send.
    pub fn begin_submit(&mut self) -> Result<(SubmissionTicket, ProcessAiRequest), SubmitRejected> {
        if self.is_loading() {
            return Err(SubmitRejected::InFlight);
        }
        let (Some(video), Some(image), false) =
            (self.video.clone(), self.image.clone(), self.text.is_empty())
        else {
            return Err(self.missing_inputs().into());
        };

        self.generation += 1;
        let ticket = SubmissionTicket(self.generation);
        self.submission = SubmissionState::Loading(ticket);

        let request = ProcessAiRequest {
            video,
            image,
            text: self.text.clone(),
        };
        Ok((ticket, request))
    }

    /// Stores `response` if `ticket` is still the outstanding one.
    pub fn accept_response(&mut self, ticket: SubmissionTicket, response: ProcessAiResponse) -> bool {
        if self.submission != SubmissionState::Loading(ticket) {
            return false;
        }
        self.response = Some(response);
        true
    }

    pub fn settle(&mut self, ticket: SubmissionTicket) {
        if self.submission == SubmissionState::Loading(ticket) {
            self.submission = SubmissionState::Idle;
        }
    }
}

/// Somewhere an [`UploadForm`] lives.
pub trait FormStore {
    /// Returns `None` once the storage is gone, i.e. the view was unmounted.
    fn update_form<R>(&self, f: impl FnOnce(&mut UploadForm) -> R) -> Option<R>;
}

impl FormStore for RwSignal<UploadForm, LocalStorage> {
    fn update_form<R>(&self, f: impl FnOnce(&mut UploadForm) -> R) -> Option<R> {
        self.try_update(f)
    }
}

struct SettleOnDrop<'a, S: FormStore> {
    store: &'a S,
    ticket: SubmissionTicket,
}

impl<S: FormStore> Drop for SettleOnDrop<'_, S> {
    fn drop(&mut self) {
        let ticket = self.ticket;
        self.store.update_form(|form| form.settle(ticket));
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Rejected(SubmitRejected),
    Completed,
    Failed(ProcessAiError),
    /// The reply arrived after the form stopped waiting for it.
    Discarded,
}

/// Runs one submission end to end.
///
/// The form is `Loading` for exactly as long as the request is outstanding and
/// returns to `Idle` however the request ends, including when the future is
/// dropped midway.
pub async fn submit_upload<S, T, N>(store: &S, transport: &T, notifier: &N) -> SubmitOutcome
where
    S: FormStore,
    T: ProcessAiTransport,
    N: Notifier,
{
    let (ticket, request) = match store.update_form(UploadForm::begin_submit) {
        None => return SubmitOutcome::Discarded,
        Some(Ok(started)) => started,
        Some(Err(SubmitRejected::MissingInput(missing))) => {
            log::debug!("submit blocked: {missing}");
            notifier.notify(alerts::MISSING_INPUT);
            return SubmitOutcome::Rejected(missing.into());
        }
        Some(Err(e)) => {
            log::warn!("submit ignored: {e}");
            return SubmitOutcome::Rejected(e);
        }
    };
    let _settle = SettleOnDrop { store, ticket };

    log::debug!(
        "uploading video {:?} and image {:?}",
        request.video.name,
        request.image.name
    );
    match transport.process(request).await {
        Ok(response) => match store.update_form(|form| form.accept_response(ticket, response)) {
            Some(true) => SubmitOutcome::Completed,
            _ => SubmitOutcome::Discarded,
        },
        Err(e) => {
            log::error!("process_ai request failed: {e}");
            notifier.notify(alerts::UPLOAD_FAILED);
            SubmitOutcome::Failed(e)
        }
    }
}

/// Replaces the video or image selection after running it through `policy`.
pub fn select_file<S, N>(
    store: &S,
    kind: MediaKind,
    file: SelectedFile,
    policy: &UploadPolicy,
    notifier: &N,
) -> Result<(), SelectionRejected>
where
    S: FormStore,
    N: Notifier,
{
    if let Err(e) = policy.check(kind, &file) {
        log::warn!("rejected {kind} {:?}: {e}", file.name);
        notifier.notify(match kind {
            MediaKind::Video => alerts::VIDEO_REJECTED,
            MediaKind::Image => alerts::IMAGE_REJECTED,
        });
        return Err(e);
    }
    store.update_form(|form| form.select(kind, file));
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, future::Future, rc::Rc, task::Context};

    use futures::executor::block_on;
    use serde_json::json;

    use super::*;

    impl FormStore for RefCell<UploadForm> {
        fn update_form<R>(&self, f: impl FnOnce(&mut UploadForm) -> R) -> Option<R> {
            Some(f(&mut self.borrow_mut()))
        }
    }

    #[derive(Default)]
    struct RecordingNotifier(RefCell<Vec<String>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    /// Replies with a canned result and records what the form looked like
    /// while the request was outstanding.
    struct FakeService {
        form: Rc<RefCell<UploadForm>>,
        reply: Result<ProcessAiResponse, ProcessAiError>,
        calls: RefCell<Vec<(ProcessAiRequest, SubmissionState)>>,
    }

    impl FakeService {
        fn new(form: &Rc<RefCell<UploadForm>>, reply: Result<ProcessAiResponse, ProcessAiError>) -> Self {
            Self {
                form: form.clone(),
                reply,
                calls: RefCell::default(),
            }
        }
    }

    impl ProcessAiTransport for FakeService {
        async fn process(
            &self,
            request: ProcessAiRequest,
        ) -> Result<ProcessAiResponse, ProcessAiError> {
            let state = self.form.borrow().submission();
            self.calls.borrow_mut().push((request, state));
            self.reply.clone()
        }
    }

    fn video() -> SelectedFile {
        SelectedFile::from_bytes("a.mp4", "video/mp4", vec![1, 2, 3])
    }

    fn image() -> SelectedFile {
        SelectedFile::from_bytes("b.png", "image/png", vec![4, 5])
    }

    fn filled_form() -> Rc<RefCell<UploadForm>> {
        let mut form = UploadForm::default();
        form.select_video(video());
        form.select_image(image());
        form.update_text("make it grayscale".into());
        Rc::new(RefCell::new(form))
    }

    fn reply(value: serde_json::Value) -> Result<ProcessAiResponse, ProcessAiError> {
        Ok(ProcessAiResponse::try_from(value).unwrap())
    }

    #[test]
    fn missing_inputs_never_reach_the_network() {
        let cases: [fn(&mut UploadForm); 4] = [
            |form| *form = UploadForm::default(),
            |form| form.video = None,
            |form| form.image = None,
            |form| form.update_text(String::new()),
        ];

        for strip in cases {
            let form = filled_form();
            strip(&mut form.borrow_mut());
            let service = FakeService::new(&form, reply(json!({})));
            let notifier = RecordingNotifier::default();

            let outcome = block_on(submit_upload(&*form, &service, &notifier));

            assert!(matches!(
                outcome,
                SubmitOutcome::Rejected(SubmitRejected::MissingInput(m)) if m.any()
            ));
            assert!(service.calls.borrow().is_empty());
            assert_eq!(*notifier.0.borrow(), [alerts::MISSING_INPUT]);
            assert_eq!(form.borrow().submission(), SubmissionState::Idle);
        }
    }

    #[test]
    fn whitespace_text_counts_as_present() {
        let form = filled_form();
        form.borrow_mut().update_text("  ".into());
        assert!(!form.borrow().missing_inputs().any());
    }

    #[test]
    fn complete_input_sends_exactly_one_request_while_loading() {
        let form = filled_form();
        let service = FakeService::new(&form, reply(json!({"video_url": "a", "image_url": "b"})));
        let notifier = RecordingNotifier::default();

        let outcome = block_on(submit_upload(&*form, &service, &notifier));
        assert_eq!(outcome, SubmitOutcome::Completed);

        let calls = service.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (request, state_during) = &calls[0];
        assert_eq!(request.video.name, "a.mp4");
        assert_eq!(request.image.name, "b.png");
        assert_eq!(request.text, "make it grayscale");
        assert!(matches!(state_during, SubmissionState::Loading(_)));

        let form = form.borrow();
        assert_eq!(form.submission(), SubmissionState::Idle);
        let res = form.response().unwrap();
        assert_eq!(res.video_url(), Some("a"));
        assert_eq!(res.image_url(), Some("b"));
        assert!(notifier.0.borrow().is_empty());
    }

    #[test]
    fn failure_keeps_previous_response_and_unlocks() {
        let form = filled_form();
        let notifier = RecordingNotifier::default();

        let first = FakeService::new(&form, reply(json!({"status": "ok"})));
        block_on(submit_upload(&*form, &first, &notifier));
        let before = form.borrow().response().cloned();
        assert!(before.is_some());

        for err in [
            ProcessAiError::Transport("connection refused".into()),
            ProcessAiError::Parse("expected value".into()),
            ProcessAiError::Status(502),
        ] {
            let failing = FakeService::new(&form, Err(err.clone()));
            let outcome = block_on(submit_upload(&*form, &failing, &notifier));

            assert_eq!(outcome, SubmitOutcome::Failed(err));
            assert_eq!(form.borrow().response().cloned(), before);
            assert_eq!(form.borrow().submission(), SubmissionState::Idle);
        }
        assert_eq!(notifier.0.borrow().len(), 3);
        assert!(notifier.0.borrow().iter().all(|m| m == alerts::UPLOAD_FAILED));
    }

    #[test]
    fn failure_without_prior_response_leaves_it_absent() {
        let form = filled_form();
        let notifier = RecordingNotifier::default();
        let failing = FakeService::new(&form, Err(ProcessAiError::UnexpectedShape));

        block_on(submit_upload(&*form, &failing, &notifier));

        assert!(form.borrow().response().is_none());
        assert!(!form.borrow().is_loading());
    }

    #[test]
    fn not_reentrant_while_loading() {
        let mut form = filled_form().borrow().clone();
        let (ticket, _) = form.begin_submit().unwrap();
        assert_eq!(form.begin_submit().unwrap_err(), SubmitRejected::InFlight);

        form.settle(ticket);
        assert!(form.begin_submit().is_ok());
    }

    #[test]
    fn stale_ticket_cannot_touch_newer_submission() {
        let mut form = filled_form().borrow().clone();
        let (old, _) = form.begin_submit().unwrap();
        form.settle(old);
        let (current, _) = form.begin_submit().unwrap();

        let stale = ProcessAiResponse::try_from(json!({"video_url": "old"})).unwrap();
        assert!(!form.accept_response(old, stale));
        form.settle(old);
        assert_eq!(form.submission(), SubmissionState::Loading(current));
        assert!(form.response().is_none());
    }

    /// Never answers.
    struct SilentService;

    impl ProcessAiTransport for SilentService {
        async fn process(
            &self,
            _request: ProcessAiRequest,
        ) -> Result<ProcessAiResponse, ProcessAiError> {
            futures::future::pending().await
        }
    }

    #[test]
    fn dropping_the_submission_unlocks_the_form() {
        let form = filled_form();
        let notifier = RecordingNotifier::default();

        let mut pending = Box::pin(submit_upload(&*form, &SilentService, &notifier));
        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);
        assert!(pending.as_mut().poll(&mut cx).is_pending());
        assert!(form.borrow().is_loading());

        drop(pending);
        assert_eq!(form.borrow().submission(), SubmissionState::Idle);
        assert!(notifier.0.borrow().is_empty());
    }

    #[test]
    fn grayscale_scenario() {
        let form = filled_form();
        let service = FakeService::new(
            &form,
            reply(json!({"status": "ok", "video_url": "/out/a.mp4"})),
        );
        let notifier = RecordingNotifier::default();

        block_on(submit_upload(&*form, &service, &notifier));

        let form = form.borrow();
        let res = form.response().unwrap();
        assert_eq!(res.video_url(), Some("/out/a.mp4"));
        assert_eq!(res.image_url(), None);
        assert!(res.to_pretty_json().contains("\"status\": \"ok\""));
    }

    #[test]
    fn selection_goes_through_policy() {
        let form = RefCell::new(UploadForm::default());
        let notifier = RecordingNotifier::default();

        select_file(&form, MediaKind::Video, video(), &UploadPolicy::default(), &notifier)
            .unwrap();
        assert_eq!(form.borrow().video().unwrap().name, "a.mp4");

        let strict = UploadPolicy {
            enforce_media_type: true,
            ..UploadPolicy::default()
        };
        let res = select_file(&form, MediaKind::Video, image(), &strict, &notifier);
        assert!(res.is_err());
        assert_eq!(form.borrow().video().unwrap().name, "a.mp4");
        assert_eq!(*notifier.0.borrow(), [alerts::VIDEO_REJECTED]);

        // re-selection replaces
        let other = SelectedFile::from_bytes("c.webm", "video/webm", vec![]);
        select_file(&form, MediaKind::Video, other, &strict, &notifier).unwrap();
        assert_eq!(form.borrow().video().unwrap().name, "c.webm");
    }
}
