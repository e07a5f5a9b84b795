//! Span constructors for the onboarding operations.
//!
//! The `public_id` field starts empty and is recorded once the request record
//! is known, so every event inside the span can be correlated to it.

use onboard_types::PublicId;
use tracing::{field, info_span, Span};

pub fn start_span() -> Span {
    info_span!("onboarding_start", public_id = field::Empty)
}

pub fn verify_span() -> Span {
    info_span!("onboarding_verify", public_id = field::Empty)
}

pub fn complete_span() -> Span {
    info_span!("onboarding_complete", public_id = field::Empty)
}

/// Span covering one background delivery of a verification message.
pub fn delivery_span(request_id: &PublicId) -> Span {
    info_span!("verification_delivery", public_id = %request_id)
}

/// Attach the request's public id to the current span.
pub(crate) fn record_public_id(public_id: &PublicId) {
    Span::current().record("public_id", field::display(public_id));
}
