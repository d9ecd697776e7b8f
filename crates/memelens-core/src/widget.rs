//! The upload widget state machine.
//!
//! [`UploadWidget`] owns no DOM handles. It is constructed with a
//! [`RenderTarget`] that receives every visible change, so the same
//! logic drives the Dioxus front end, the CLI, and headless tests.
//!
//! An accepted file starts two independent tasks owned by the caller:
//! encoding the preview ([`crate::preview::data_uri`]) and submitting the
//! file for classification. Both report back through
//! [`UploadWidget::preview_ready`] and [`UploadWidget::submission_finished`]
//! with the [`Token`] handed out by [`UploadWidget::accept`]. Reports
//! carrying a token older than the latest accepted file are dropped.

use std::fmt;

use crate::config::{OverlapPolicy, WidgetConfig};
use crate::types::{Badge, Prediction, SelectedFile, WidgetError};

/// Identifies one accepted file. Strictly increasing per widget.
pub type Token = u64;

/// Render surface for the widget.
///
/// Each method sets one element's visible state. Implementations must
/// not call back into the widget.
pub trait RenderTarget {
    /// Show or hide the "drop an image here" prompt.
    fn set_prompt_visible(&mut self, visible: bool);

    /// Show the preview with the given `data:` URI, or hide it with `None`.
    fn set_preview(&mut self, data_uri: Option<String>);

    /// Show or hide the loading indicator.
    fn set_loading(&mut self, visible: bool);

    /// Show the result badge, or hide it with `None`.
    fn set_badge(&mut self, badge: Option<Badge>);

    /// Raise a blocking user-facing message.
    fn alert(&mut self, message: &str);
}

/// An accepted file together with the token its completions must carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub token: Token,
    pub file: SelectedFile,
}

/// Upload widget: file acceptance, loading state, and result rendering.
#[derive(Debug)]
pub struct UploadWidget<R> {
    config: WidgetConfig,
    target: R,
    /// Token of the most recently accepted file (0 before the first).
    latest: Token,
    /// Token of the submission whose completion is still awaited.
    in_flight: Option<Token>,
    /// Token of the submission whose badge is currently shown.
    badge_token: Option<Token>,
}

impl<R: RenderTarget> UploadWidget<R> {
    /// Create a widget and put `target` into the idle state.
    pub fn new(config: WidgetConfig, mut target: R) -> Self {
        target.set_prompt_visible(true);
        target.set_preview(None);
        target.set_loading(false);
        target.set_badge(None);
        Self {
            config,
            target,
            latest: 0,
            in_flight: None,
            badge_token: None,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &WidgetConfig {
        &self.config
    }

    #[must_use]
    pub const fn target(&self) -> &R {
        &self.target
    }

    pub const fn target_mut(&mut self) -> &mut R {
        &mut self.target
    }

    #[must_use]
    pub fn into_target(self) -> R {
        self.target
    }

    /// Returns `true` while a submission's completion is awaited.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Returns `false` when the overlap policy would refuse a new file now.
    #[must_use]
    pub fn accepts_new_files(&self) -> bool {
        match self.config.overlap {
            OverlapPolicy::LatestWins => true,
            OverlapPolicy::RejectWhileLoading => !self.is_loading(),
        }
    }

    /// Check a file's name and declared type before its bytes are read.
    ///
    /// Lets a front end refuse a file without loading it into memory.
    /// Raises the invalid-type alert on a type mismatch, like
    /// [`accept`](Self::accept); nothing else changes either way.
    ///
    /// # Errors
    ///
    /// Same as [`accept`](Self::accept).
    pub fn screen(&mut self, name: &str, content_type: &str) -> Result<(), WidgetError> {
        if !content_type.starts_with(&self.config.accepted_type_prefix) {
            log::warn!("rejected {name} with content type {content_type:?}");
            self.target.alert(&self.config.invalid_type_message);
            return Err(WidgetError::InvalidFileType {
                name: name.to_owned(),
                content_type: content_type.to_owned(),
            });
        }

        if !self.accepts_new_files() {
            log::debug!("ignoring {name} while a classification is in flight");
            return Err(WidgetError::Busy);
        }
        Ok(())
    }

    /// Accept a newly selected file.
    ///
    /// On success the loading indicator is shown and the caller must start
    /// both the preview encoding and the submission for the returned
    /// [`Submission`].
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::InvalidFileType`] (after raising the
    /// invalid-type alert) if the declared type lacks the accepted prefix.
    /// Returns [`WidgetError::Busy`] if the overlap policy refuses files
    /// while loading. Neither changes any visible element.
    pub fn accept(&mut self, file: SelectedFile) -> Result<Submission, WidgetError> {
        self.screen(file.name(), file.content_type())?;

        self.latest += 1;
        let token = self.latest;
        if let Some(previous) = self.in_flight.replace(token) {
            log::debug!("submission {token} supersedes {previous}");
        }
        self.target.set_loading(true);
        log::debug!(
            "accepted {} ({}, {} bytes) as submission {token}",
            file.name(),
            file.content_type(),
            file.bytes().len()
        );

        Ok(Submission { token, file })
    }

    /// Report that the preview for `token` has been encoded.
    ///
    /// Shows the preview and hides the prompt. A badge left over from an
    /// earlier submission is hidden; a badge that already belongs to
    /// `token` stays.
    ///
    /// Returns `false` if `token` is stale and nothing changed.
    pub fn preview_ready(&mut self, token: Token, data_uri: String) -> bool {
        if !self.is_current(token) {
            log::debug!("dropping stale preview {token} (latest {})", self.latest);
            return false;
        }

        self.target.set_preview(Some(data_uri));
        self.target.set_prompt_visible(false);
        if self.badge_token.is_some_and(|shown| shown != token) {
            self.badge_token = None;
            self.target.set_badge(None);
        }
        true
    }

    /// Report the outcome of the submission for `token`.
    ///
    /// Hides the loading indicator, then renders the badge on success or
    /// raises the generic failure alert once on error.
    ///
    /// Returns `false` if `token` is stale and nothing changed.
    pub fn submission_finished<E: fmt::Display>(
        &mut self,
        token: Token,
        outcome: Result<Prediction, E>,
    ) -> bool {
        if !self.is_current(token) {
            log::debug!("dropping stale result {token} (latest {})", self.latest);
            return false;
        }

        self.in_flight = None;
        self.target.set_loading(false);

        match outcome {
            Ok(prediction) => self.render_result(token, &prediction),
            Err(e) => {
                log::warn!("classification {token} failed: {e}");
                self.target.alert(&self.config.failure_message);
            }
        }
        true
    }

    fn render_result(&mut self, token: Token, prediction: &Prediction) {
        let badge = Badge::from_prediction(prediction, &self.config.political_label);
        log::debug!("submission {token} classified as {:?}", badge.text);
        self.badge_token = Some(token);
        self.target.set_badge(Some(badge));
    }

    const fn is_current(&self, token: Token) -> bool {
        token == self.latest
    }
}

/// In-memory render target recording what a user would currently see.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisualState {
    pub prompt_visible: bool,
    pub preview: Option<String>,
    pub loading: bool,
    pub badge: Option<Badge>,
    /// Every alert raised, oldest first.
    pub alerts: Vec<String>,
}

impl RenderTarget for VisualState {
    fn set_prompt_visible(&mut self, visible: bool) {
        self.prompt_visible = visible;
    }

    fn set_preview(&mut self, data_uri: Option<String>) {
        self.preview = data_uri;
    }

    fn set_loading(&mut self, visible: bool) {
        self.loading = visible;
    }

    fn set_badge(&mut self, badge: Option<Badge>) {
        self.badge = badge;
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_owned());
    }
}
