//! Submission workflow: validation, request lifecycle and display updates.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::display::{DisplayState, Notice};
use crate::config::Config;
use crate::domain::entities::{DEFAULT_DISPLAY_ORIGIN, ShortUrl, ShortenRequest};
use crate::domain::gateways::{Clipboard, ShortenerClient};
use crate::domain::redirect_error::{PageContext, RedirectError};
use crate::domain::validation::{ValidationError, validate_submission};
use crate::error::ShortenError;

/// Upper bound on a single shortening request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Notification shown after a successful copy.
pub const COPY_CONFIRMATION: &str = "URL copied to clipboard!";

/// Tunables of a workflow instance.
#[derive(Debug, Clone)]
pub struct WorkflowSettings {
    /// Prefix placed in front of service-assigned short URLs.
    pub display_origin: String,
    /// Requests still unanswered after this long fail as a timeout.
    pub request_timeout: Duration,
}

impl Default for WorkflowSettings {
    fn default() -> Self {
        Self {
            display_origin: DEFAULT_DISPLAY_ORIGIN.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl From<&Config> for WorkflowSettings {
    fn from(config: &Config) -> Self {
        Self {
            display_origin: config.short_url_origin.clone(),
            request_timeout: config.request_timeout(),
        }
    }
}

/// Lifecycle of a submission.
///
/// `Succeeded` and `Failed` are terminal for one attempt; with the loading
/// indicator cleared they accept a new submit gesture just like `Idle`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Pending,
    Succeeded(ShortUrl),
    Failed(String),
}

impl SubmissionState {
    /// Whether a submit gesture starts a new attempt in this state.
    pub fn accepts_submit(&self) -> bool {
        !matches!(self, Self::Validating | Self::Pending)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded(_) | Self::Failed(_))
    }
}

/// Result of a submit gesture, before any network activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// A request is already in flight; the gesture had no effect.
    Ignored,
    /// Local validation failed; the error slot shows the reason.
    Rejected(ValidationError),
    /// Validation passed; the request must be sent and its outcome passed to
    /// [`SubmissionService::complete_submit`].
    Dispatched(ShortenRequest),
}

/// Drives one page view (or terminal session) from input to result.
///
/// The service owns every piece of display state and is mutated through
/// `&mut self`, so at most one request can be in flight. The request cycle can
/// be run in one call with [`submit`](Self::submit), or in three steps
/// ([`begin_submit`](Self::begin_submit), [`dispatch`](Self::dispatch),
/// [`complete_submit`](Self::complete_submit)) when the surface wants to
/// render the pending state in between.
///
/// # State transitions
///
/// ```text
/// Idle ──submit──> Validating ──invalid──> Idle (error shown)
///                      │
///                      └──valid──> Pending ──ok──> Succeeded(short_url)
///                                     └──err──> Failed(message)
/// ```
///
/// The loading indicator is cleared after every terminal transition.
pub struct SubmissionService<C: ShortenerClient + ?Sized> {
    client: Arc<C>,
    clipboard: Arc<dyn Clipboard>,
    settings: WorkflowSettings,
    long_url: String,
    custom_id: String,
    state: SubmissionState,
    display: DisplayState,
    mounted: bool,
}

impl<C: ShortenerClient + ?Sized> SubmissionService<C> {
    /// Creates a new workflow instance in the `Idle` state.
    pub fn new(client: Arc<C>, clipboard: Arc<dyn Clipboard>, settings: WorkflowSettings) -> Self {
        Self {
            client,
            clipboard,
            settings,
            long_url: String::new(),
            custom_id: String::new(),
            state: SubmissionState::Idle,
            display: DisplayState::default(),
            mounted: false,
        }
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Removes and returns notifications the surface has not shown yet.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.display.take_notices()
    }

    pub fn long_url(&self) -> &str {
        &self.long_url
    }

    pub fn custom_id(&self) -> &str {
        &self.custom_id
    }

    /// Updates the long URL input. Ignored while a request is in flight.
    pub fn set_long_url(&mut self, value: impl Into<String>) -> bool {
        if !self.state.accepts_submit() {
            debug!("Ignoring long URL edit while a request is pending");
            return false;
        }
        self.long_url = value.into();
        true
    }

    /// Updates the custom id input. Ignored while a request is in flight.
    pub fn set_custom_id(&mut self, value: impl Into<String>) -> bool {
        if !self.state.accepts_submit() {
            debug!("Ignoring custom id edit while a request is pending");
            return false;
        }
        self.custom_id = value.into();
        true
    }

    /// Applies the redirect error carried by the page URL.
    ///
    /// Only the first call has an effect, and only before any submit gesture.
    /// `invalid-url` sets the error slot and raises a notification;
    /// `server-error` only raises a notification. No request is made.
    pub fn mount(&mut self, context: &PageContext) -> Option<RedirectError> {
        if self.mounted {
            debug!("Workflow already mounted");
            return None;
        }
        self.mounted = true;

        let signal = RedirectError::resolve(context)?;
        info!(?signal, "Page opened after a failed redirect");

        if let Some(message) = signal.error_message() {
            self.display.set_error(message);
        }
        self.display.notify(Notice::error(signal.notification()));

        Some(signal)
    }

    /// Handles a submit gesture up to the point where a request is needed.
    ///
    /// Clears the previous result, validates the long URL and then the custom
    /// id. On success the state becomes `Pending` and the loading indicator is
    /// turned on.
    pub fn begin_submit(&mut self) -> Submission {
        // A redirect error only describes the page as it was opened.
        self.mounted = true;

        if !self.state.accepts_submit() {
            debug!(state = ?self.state, "Submit ignored: request already in flight");
            return Submission::Ignored;
        }

        self.state = SubmissionState::Validating;
        self.display.clear_result();

        if let Err(err) = validate_submission(&self.long_url, &self.custom_id) {
            debug!(%err, "Submission rejected by validation");
            self.state = SubmissionState::Idle;
            self.display.set_error(err.to_string());
            return Submission::Rejected(err);
        }

        let request = ShortenRequest::new(self.long_url.clone(), &self.custom_id);
        self.state = SubmissionState::Pending;
        self.display.set_loading(true);

        info!(
            long_url = %request.long_url,
            custom_id = ?request.custom_id,
            "Submitting URL for shortening"
        );

        Submission::Dispatched(request)
    }

    /// Sends a request to the shortening service, bounded by the request timeout.
    pub async fn dispatch(&self, request: &ShortenRequest) -> Result<String, ShortenError> {
        let timeout = self.settings.request_timeout;

        match tokio::time::timeout(timeout, self.client.shorten(request)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(ShortenError::Timeout(timeout)),
        }
    }

    /// Applies the outcome of a dispatched request.
    ///
    /// Has no effect unless the state is `Pending`.
    pub fn complete_submit(&mut self, outcome: Result<String, ShortenError>) -> &SubmissionState {
        if !matches!(self.state, SubmissionState::Pending) {
            warn!(state = ?self.state, "Ignoring response without a pending submission");
            return &self.state;
        }

        let outcome = outcome.and_then(|id| {
            if id.is_empty() {
                Err(ShortenError::MalformedResponse("empty short URL".to_string()))
            } else {
                Ok(id)
            }
        });

        match outcome {
            Ok(id) => {
                let short_url = ShortUrl::new(id, &self.settings.display_origin);
                info!(short_url = %short_url, "URL shortened");
                self.display.set_short_url(short_url.clone());
                self.state = SubmissionState::Succeeded(short_url);
            }
            Err(err) => {
                warn!(error = %err, "Shortening request failed");
                let message = err.display_message();
                self.display.set_error(message.clone());
                self.state = SubmissionState::Failed(message);
            }
        }

        self.display.set_loading(false);
        &self.state
    }

    /// Runs a full submit cycle and returns the resulting state.
    ///
    /// Returns `Idle` on validation failure, `Succeeded` or `Failed` after a
    /// request, or the unchanged state if the gesture was ignored.
    pub async fn submit(&mut self) -> &SubmissionState {
        let request = match self.begin_submit() {
            Submission::Dispatched(request) => request,
            Submission::Ignored | Submission::Rejected(_) => return &self.state,
        };

        let outcome = self.dispatch(&request).await;
        self.complete_submit(outcome)
    }

    /// Copies the displayed short URL to the clipboard.
    ///
    /// Only available once `Succeeded`. Clipboard failures are logged and
    /// never change the submission state. Returns `true` if the copy happened.
    pub fn copy_short_url(&mut self) -> bool {
        let SubmissionState::Succeeded(short_url) = &self.state else {
            debug!("Copy ignored: no short URL to copy");
            return false;
        };
        let link = short_url.link().to_owned();

        match self.clipboard.write_text(&link) {
            Ok(()) => {
                info!(%link, "Short URL copied to clipboard");
                self.display.notify(Notice::success(COPY_CONFIRMATION));
                true
            }
            Err(err) => {
                error!(error = %err, "Error copying to clipboard");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::display::NoticeLevel;
    use crate::domain::gateways::{MockClipboard, MockShortenerClient};
    use crate::error::{ClipboardError, FALLBACK_ERROR_MESSAGE};
    use async_trait::async_trait;

    const YOUTUBE_URL: &str = "https://www.youtube.com/watch?v=Y4z3psSbMEo";

    fn create_service(
        client: MockShortenerClient,
        clipboard: MockClipboard,
    ) -> SubmissionService<MockShortenerClient> {
        SubmissionService::new(
            Arc::new(client),
            Arc::new(clipboard),
            WorkflowSettings::default(),
        )
    }

    fn succeeding_client(short_url: &'static str, times: usize) -> MockShortenerClient {
        let mut client = MockShortenerClient::new();
        client
            .expect_shorten()
            .times(times)
            .returning(move |_| Ok(short_url.to_string()));
        client
    }

    fn unused_client() -> MockShortenerClient {
        let mut client = MockShortenerClient::new();
        client.expect_shorten().times(0);
        client
    }

    #[tokio::test]
    async fn test_submit_success_without_custom_id() {
        let mut client = MockShortenerClient::new();
        client
            .expect_shorten()
            .withf(|request| request.long_url == YOUTUBE_URL && request.custom_id.is_none())
            .times(1)
            .returning(|_| Ok("short.ly/abc123".to_string()));

        let mut service = create_service(client, MockClipboard::new());
        service.set_long_url(YOUTUBE_URL);

        assert!(!service.display().is_loading());
        let state = service.submit().await.clone();

        let expected = ShortUrl::new("short.ly/abc123", DEFAULT_DISPLAY_ORIGIN);
        assert_eq!(state, SubmissionState::Succeeded(expected));
        assert_eq!(
            service.display().short_url().unwrap().link(),
            "https://short.ly/abc123"
        );
        assert_eq!(service.display().error(), None);
        assert!(!service.display().is_loading());
        assert!(service.display().is_copy_enabled());
    }

    #[tokio::test]
    async fn test_submit_sends_custom_id() {
        let mut client = MockShortenerClient::new();
        client
            .expect_shorten()
            .withf(|request| request.custom_id.as_deref() == Some("promo1"))
            .times(1)
            .returning(|_| Ok("short.ly/promo1".to_string()));

        let mut service = create_service(client, MockClipboard::new());
        service.set_long_url("https://example.com");
        service.set_custom_id("promo1");

        assert!(matches!(
            service.submit().await,
            SubmissionState::Succeeded(_)
        ));
    }

    #[tokio::test]
    async fn test_invalid_long_url_makes_no_request() {
        let mut service = create_service(unused_client(), MockClipboard::new());
        service.set_long_url("invalid-url");

        let state = service.submit().await.clone();

        assert_eq!(state, SubmissionState::Idle);
        assert_eq!(service.display().error(), Some("Please enter a valid URL"));
        assert!(!service.display().is_loading());
    }

    #[tokio::test]
    async fn test_empty_long_url_is_rejected() {
        let mut service = create_service(unused_client(), MockClipboard::new());

        assert_eq!(
            service.begin_submit(),
            Submission::Rejected(ValidationError::InvalidLongUrl)
        );
        assert_eq!(service.state(), &SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_invalid_custom_id_makes_no_request() {
        let mut service = create_service(unused_client(), MockClipboard::new());
        service.set_long_url(YOUTUBE_URL);
        service.set_custom_id("abc_123");

        let state = service.submit().await.clone();

        assert_eq!(state, SubmissionState::Idle);
        assert_eq!(
            service.display().error(),
            Some("Custom ID must be alphanumeric and no longer than 9 characters.")
        );
    }

    #[tokio::test]
    async fn test_long_url_checked_before_custom_id() {
        let mut service = create_service(unused_client(), MockClipboard::new());
        service.set_long_url("invalid-url");
        service.set_custom_id("abc_123");

        assert_eq!(
            service.begin_submit(),
            Submission::Rejected(ValidationError::InvalidLongUrl)
        );
    }

    #[tokio::test]
    async fn test_service_error_message_is_shown_verbatim() {
        let mut client = MockShortenerClient::new();
        client
            .expect_shorten()
            .times(1)
            .returning(|_| Err(ShortenError::Service("Custom ID already in use".to_string())));

        let mut service = create_service(client, MockClipboard::new());
        service.set_long_url(YOUTUBE_URL);
        service.set_custom_id("taken");

        let state = service.submit().await.clone();

        assert_eq!(
            state,
            SubmissionState::Failed("Custom ID already in use".to_string())
        );
        assert_eq!(service.display().error(), Some("Custom ID already in use"));
        assert!(service.display().short_url().is_none());
        assert!(!service.display().is_loading());
    }

    #[tokio::test]
    async fn test_transport_error_uses_fallback_message() {
        let mut client = MockShortenerClient::new();
        client
            .expect_shorten()
            .times(1)
            .returning(|_| Err(ShortenError::Transport("connection refused".to_string())));

        let mut service = create_service(client, MockClipboard::new());
        service.set_long_url(YOUTUBE_URL);

        let state = service.submit().await.clone();

        assert_eq!(
            state,
            SubmissionState::Failed(FALLBACK_ERROR_MESSAGE.to_string())
        );
        assert_eq!(service.display().error(), Some(FALLBACK_ERROR_MESSAGE));
        assert!(!service.display().is_loading());
    }

    #[tokio::test]
    async fn test_repeated_submissions_issue_independent_requests() {
        let client = succeeding_client("short.ly/abc123", 2);
        let mut service = create_service(client, MockClipboard::new());
        service.set_long_url(YOUTUBE_URL);

        assert!(service.submit().await.is_terminal());
        assert!(service.submit().await.is_terminal());
    }

    #[tokio::test]
    async fn test_pending_state_and_guard() {
        let mut service = create_service(unused_client(), MockClipboard::new());
        service.set_long_url(YOUTUBE_URL);

        let request = match service.begin_submit() {
            Submission::Dispatched(request) => request,
            other => panic!("expected dispatch, got {other:?}"),
        };
        assert_eq!(request, ShortenRequest::new(YOUTUBE_URL, ""));

        assert_eq!(service.state(), &SubmissionState::Pending);
        assert!(service.display().is_loading());
        assert!(!service.display().is_submit_enabled());
        assert_eq!(service.display().submit_label(), "Shortening...");

        // Second gesture while pending is inert.
        assert_eq!(service.begin_submit(), Submission::Ignored);
        assert!(!service.set_long_url("https://other.example.com"));
        assert_eq!(service.long_url(), YOUTUBE_URL);

        service.complete_submit(Ok("short.ly/abc123".to_string()));
        assert!(matches!(service.state(), SubmissionState::Succeeded(_)));
        assert!(!service.display().is_loading());
        assert_eq!(service.display().submit_label(), "Short it");
    }

    #[tokio::test]
    async fn test_complete_without_pending_is_ignored() {
        let mut service = create_service(unused_client(), MockClipboard::new());

        let state = service.complete_submit(Ok("short.ly/abc123".to_string()));

        assert_eq!(state, &SubmissionState::Idle);
        assert!(service.display().short_url().is_none());
    }

    #[tokio::test]
    async fn test_new_submission_clears_previous_result() {
        let client = succeeding_client("short.ly/abc123", 1);
        let mut service = create_service(client, MockClipboard::new());
        service.set_long_url(YOUTUBE_URL);
        service.submit().await;
        assert!(service.display().short_url().is_some());

        service.set_long_url("invalid-url");
        service.submit().await;

        assert!(service.display().short_url().is_none());
        assert_eq!(service.display().error(), Some("Please enter a valid URL"));
        assert!(!service.copy_short_url());
    }

    #[tokio::test]
    async fn test_failure_then_success_clears_error() {
        let mut client = MockShortenerClient::new();
        let mut seq = mockall::Sequence::new();
        client
            .expect_shorten()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(ShortenError::UnexpectedStatus(500)));
        client
            .expect_shorten()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("short.ly/abc123".to_string()));

        let mut service = create_service(client, MockClipboard::new());
        service.set_long_url(YOUTUBE_URL);

        assert!(matches!(service.submit().await, SubmissionState::Failed(_)));
        assert!(matches!(
            service.submit().await,
            SubmissionState::Succeeded(_)
        ));
        assert_eq!(service.display().error(), None);
    }

    struct HangingClient;

    #[async_trait]
    impl ShortenerClient for HangingClient {
        async fn shorten(&self, _request: &ShortenRequest) -> Result<String, ShortenError> {
            std::future::pending().await
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_unanswered_request_times_out() {
        let settings = WorkflowSettings {
            request_timeout: Duration::from_secs(3),
            ..WorkflowSettings::default()
        };
        let mut service = SubmissionService::new(
            Arc::new(HangingClient),
            Arc::new(MockClipboard::new()),
            settings,
        );
        service.set_long_url(YOUTUBE_URL);

        let state = service.submit().await.clone();

        assert_eq!(
            state,
            SubmissionState::Failed(FALLBACK_ERROR_MESSAGE.to_string())
        );
        assert!(!service.display().is_loading());
    }

    #[tokio::test]
    async fn test_mount_invalid_url_sets_error_and_notice() {
        let mut service = create_service(unused_client(), MockClipboard::new());

        let signal = service.mount(&PageContext::from_query("?error=invalid-url"));

        assert_eq!(signal, Some(RedirectError::InvalidShortUrl));
        assert_eq!(service.display().error(), Some("URL not found"));
        assert_eq!(service.state(), &SubmissionState::Idle);

        let notices = service.take_notices();
        assert_eq!(
            notices,
            vec![Notice::error("Invalid short URL. Please check and try again.")]
        );
    }

    #[tokio::test]
    async fn test_mount_server_error_only_notifies() {
        let mut service = create_service(unused_client(), MockClipboard::new());

        service.mount(&PageContext::from_query("?error=server-error"));

        assert_eq!(service.display().error(), None);
        let notices = service.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].message, "Server error. Please try again later.");
    }

    #[tokio::test]
    async fn test_mount_unknown_error_is_noop() {
        let mut service = create_service(unused_client(), MockClipboard::new());

        assert_eq!(service.mount(&PageContext::from_query("?error=teapot")), None);
        assert_eq!(service.display().error(), None);
        assert!(service.take_notices().is_empty());
    }

    #[tokio::test]
    async fn test_mount_runs_once() {
        let mut service = create_service(unused_client(), MockClipboard::new());
        let context = PageContext::from_query("?error=invalid-url");

        service.mount(&context);
        service.take_notices();

        assert_eq!(service.mount(&context), None);
        assert!(service.take_notices().is_empty());
    }

    #[tokio::test]
    async fn test_mount_after_submit_is_ignored() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .withf(|text: &str| text == "https://short.ly/abc123")
            .times(1)
            .returning(|_| Ok(()));

        let client = succeeding_client("short.ly/abc123", 1);
        let mut service = create_service(client, clipboard);
        service.set_long_url(YOUTUBE_URL);
        service.submit().await;

        assert_eq!(
            service.mount(&PageContext::from_query("?error=invalid-url")),
            None
        );
        assert_eq!(service.display().error(), None);
        assert!(service.display().is_copy_enabled());
        assert!(service.take_notices().is_empty());
        assert!(service.copy_short_url());
    }

    #[tokio::test]
    async fn test_mount_after_rejected_submit_is_ignored() {
        let mut service = create_service(unused_client(), MockClipboard::new());
        service.set_long_url("invalid-url");
        service.submit().await;

        assert_eq!(
            service.mount(&PageContext::from_query("?error=server-error")),
            None
        );
        assert_eq!(service.display().error(), Some("Please enter a valid URL"));
        assert!(service.take_notices().is_empty());
    }

    #[tokio::test]
    async fn test_empty_short_url_fails_with_fallback() {
        let client = succeeding_client("", 1);
        let mut service = create_service(client, MockClipboard::new());
        service.set_long_url(YOUTUBE_URL);

        let state = service.submit().await.clone();

        assert_eq!(
            state,
            SubmissionState::Failed(FALLBACK_ERROR_MESSAGE.to_string())
        );
        assert!(service.display().short_url().is_none());
        assert!(!service.display().is_copy_enabled());
        assert!(!service.display().is_loading());
        assert!(!service.copy_short_url());
    }

    #[tokio::test]
    async fn test_submission_replaces_redirect_error() {
        let client = succeeding_client("short.ly/abc123", 1);
        let mut service = create_service(client, MockClipboard::new());
        service.mount(&PageContext::from_query("?error=invalid-url"));
        service.set_long_url(YOUTUBE_URL);

        service.submit().await;

        assert_eq!(service.display().error(), None);
        assert!(service.display().short_url().is_some());
    }

    #[tokio::test]
    async fn test_copy_writes_displayed_link() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .withf(|text: &str| text == "https://short.ly/abc123")
            .times(1)
            .returning(|_| Ok(()));

        let client = succeeding_client("short.ly/abc123", 1);
        let mut service = create_service(client, clipboard);
        service.set_long_url(YOUTUBE_URL);
        service.submit().await;

        assert!(service.copy_short_url());
        assert_eq!(
            service.take_notices(),
            vec![Notice::success(COPY_CONFIRMATION)]
        );
    }

    #[tokio::test]
    async fn test_copy_before_success_is_inert() {
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_text().times(0);

        let mut service = create_service(unused_client(), clipboard);

        assert!(!service.copy_short_url());
        assert!(service.take_notices().is_empty());
    }

    #[tokio::test]
    async fn test_copy_failure_does_not_change_state() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .times(1)
            .returning(|_| Err(ClipboardError::Unavailable("no display".to_string())));

        let client = succeeding_client("short.ly/abc123", 1);
        let mut service = create_service(client, clipboard);
        service.set_long_url(YOUTUBE_URL);
        service.submit().await;

        assert!(!service.copy_short_url());
        assert!(matches!(service.state(), SubmissionState::Succeeded(_)));
        assert_eq!(service.display().error(), None);
        assert!(service.take_notices().is_empty());
    }

    #[test]
    fn test_state_accepts_submit() {
        assert!(SubmissionState::Idle.accepts_submit());
        assert!(!SubmissionState::Validating.accepts_submit());
        assert!(!SubmissionState::Pending.accepts_submit());
        assert!(SubmissionState::Failed("x".to_string()).accepts_submit());
        assert!(
            SubmissionState::Succeeded(ShortUrl::new("a.bc/x", DEFAULT_DISPLAY_ORIGIN))
                .accepts_submit()
        );
    }
}
