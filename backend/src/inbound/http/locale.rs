//! Per-request locale negotiation.
//!
//! Handlers take a [`Localizer`] to render message keys in the language the
//! caller asked for through `Accept-Language`, falling back to the process
//! default locale of the catalogue.

use std::sync::Arc;

use actix_web::http::header::ACCEPT_LANGUAGE;
use actix_web::{FromRequest, HttpRequest, dev::Payload, web};
use futures_util::future::{Ready, ready};
use tracing::error;

use crate::domain::{Locale, MessageCatalog, MessageKey};

use super::error::ApiError;
use super::state::HttpState;

/// Message renderer bound to the negotiated locale of one request.
#[derive(Debug, Clone)]
pub struct Localizer {
    messages: Arc<MessageCatalog>,
    locale: Locale,
}

impl Localizer {
    /// Bind `messages` to the best locale for `accept_language`.
    pub fn negotiate(messages: Arc<MessageCatalog>, accept_language: Option<&str>) -> Self {
        let locale = accept_language
            .and_then(|header| preferred_locale(&messages, header))
            .unwrap_or_else(|| messages.default_locale().clone());
        Self { messages, locale }
    }

    /// Build a localizer for `req` from the registered [`HttpState`].
    pub fn for_request(req: &HttpRequest) -> Result<Self, ApiError> {
        let state = req.app_data::<web::Data<HttpState>>().ok_or_else(|| {
            error!("HttpState missing from application data");
            ApiError::Internal
        })?;
        let header = req
            .headers()
            .get(ACCEPT_LANGUAGE)
            .and_then(|value| value.to_str().ok());
        Ok(Self::negotiate(state.messages.clone(), header))
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Render `key` with named arguments.
    pub fn message(&self, key: MessageKey, args: &[(&str, String)]) -> String {
        self.messages.message(&self.locale, key, args)
    }
}

impl FromRequest for Localizer {
    type Error = ApiError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(Self::for_request(req))
    }
}

/// Pick the highest-weighted supported locale from an `Accept-Language`
/// header. Ranges with `q=0`, wildcards and malformed entries are skipped;
/// ties keep header order.
fn preferred_locale(messages: &MessageCatalog, header: &str) -> Option<Locale> {
    let mut ranges: Vec<(Locale, f32)> = header
        .split(',')
        .filter_map(parse_range)
        .filter(|(_, quality)| *quality > 0.0)
        .collect();
    ranges.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranges
        .iter()
        .find_map(|(locale, _)| messages.resolve_locale(locale))
}

fn parse_range(entry: &str) -> Option<(Locale, f32)> {
    let mut parts = entry.split(';');
    let tag = parts.next()?.trim();
    if tag == "*" {
        return None;
    }
    let locale = Locale::parse(tag)?;
    let mut quality = 1.0;
    for param in parts {
        if let Some(value) = param.trim().strip_prefix("q=") {
            quality = value.trim().parse::<f32>().ok().filter(|q| (0.0..=1.0).contains(q))?;
        }
    }
    Some((locale, quality))
}
