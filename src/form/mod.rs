//! Client side of the contact form: field rules, the submit flow and the
//! HTTP call to the relay.

pub mod api;
pub mod controller;
pub mod rules;

pub use api::{ApiReply, ContactApi, HttpContactApi};
pub use controller::{ContactForm, FormController, FormMessage, MessageKind, SubmitControl};
pub use rules::{validate_form, validate_input, InputKind};
