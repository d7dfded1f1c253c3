use crate::core::relay::SUCCESS_MESSAGE;
use crate::domain::model::ContactSubmission;
use crate::form::api::ContactApi;
use crate::form::rules::{validate_form, CONSENT_REQUIRED_MESSAGE};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const SERVER_ERROR_FALLBACK: &str = "Server responded with an error";
pub const NETWORK_ERROR_MESSAGE: &str =
    "Something went wrong. Please try again or contact us directly.";
pub const SUCCESS_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Editable state of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub interest: String,
    pub message: String,
    pub consent: bool,
}

impl ContactForm {
    pub fn to_submission(&self) -> ContactSubmission {
        ContactSubmission {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            mobile: Some(self.mobile.clone()),
            interest: Some(self.interest.clone()),
            message: Some(self.message.clone()),
            consent: Some(self.consent.to_string()),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
    shown_at: Instant,
    dismiss_after: Option<Duration>,
}

impl FormMessage {
    /// Success messages dismiss themselves.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
            shown_at: Instant::now(),
            dismiss_after: Some(SUCCESS_DISMISS_AFTER),
        }
    }

    /// Error messages stay until replaced.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
            shown_at: Instant::now(),
            dismiss_after: None,
        }
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        match self.dismiss_after {
            Some(after) => now.saturating_duration_since(self.shown_at) < after,
            None => true,
        }
    }
}

/// The form's submit button.
#[derive(Debug, Default)]
pub struct SubmitControl {
    disabled: AtomicBool,
}

impl SubmitControl {
    pub fn is_disabled(&self) -> bool {
        self.disabled.load(Ordering::SeqCst)
    }

    /// Disables the control until the returned guard is dropped.
    pub fn disable(&self) -> SubmitGuard<'_> {
        self.disabled.store(true, Ordering::SeqCst);
        SubmitGuard { control: self }
    }
}

pub struct SubmitGuard<'a> {
    control: &'a SubmitControl,
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        self.control.disabled.store(false, Ordering::SeqCst);
    }
}

pub struct FormController<A: ContactApi> {
    api: A,
    form: ContactForm,
    submit: Arc<SubmitControl>,
    message: Option<FormMessage>,
    consent_invalid: bool,
}

impl<A: ContactApi> FormController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            form: ContactForm::default(),
            submit: Arc::new(SubmitControl::default()),
            message: None,
            consent_invalid: false,
        }
    }

    pub fn with_form(mut self, form: ContactForm) -> Self {
        self.form = form;
        self
    }

    pub fn with_submit_control(mut self, control: Arc<SubmitControl>) -> Self {
        self.submit = control;
        self
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }

    pub fn submit_control(&self) -> &SubmitControl {
        &self.submit
    }

    pub fn consent_invalid(&self) -> bool {
        self.consent_invalid
    }

    pub fn set_consent(&mut self, checked: bool) {
        self.form.consent = checked;
        if checked {
            self.consent_invalid = false;
        }
    }

    /// Runs one submission and returns the message to display.
    pub async fn submit(&mut self) -> &FormMessage {
        let data = self.form.to_submission();

        // 送出前先做前端驗證
        if let Err(e) = validate_form(&data) {
            let text = e.user_friendly_message();
            self.consent_invalid = text == CONSENT_REQUIRED_MESSAGE;
            return self.message.insert(FormMessage::error(text));
        }

        // 傳送期間停用按鈕，guard 離開作用域時恢復
        let control = Arc::clone(&self.submit);
        let outcome = {
            let _guard = control.disable();
            self.api.post_contact(&data).await
        };

        let message = match outcome {
            Ok(reply) if reply.is_success() => {
                // 只有成功時才清空表單
                self.form.reset();
                FormMessage::success(reply.message.unwrap_or_else(|| SUCCESS_MESSAGE.to_string()))
            }
            Ok(reply) => {
                tracing::warn!("Form submission rejected with status {}", reply.status);
                FormMessage::error(reply.error.unwrap_or_else(|| SERVER_ERROR_FALLBACK.to_string()))
            }
            Err(e) => {
                tracing::error!("Form submission error: {}", e);
                FormMessage::error(NETWORK_ERROR_MESSAGE)
            }
        };

        self.message.insert(message)
    }
}
