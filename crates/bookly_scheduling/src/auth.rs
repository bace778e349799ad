// --- File: crates/bookly_scheduling/src/auth.rs ---

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use bookly_common::services::AuthProvider;
use bookly_common::{forbidden, internal_error, unauthorized, BooklyError};
use constant_time_eq::constant_time_eq;
use ring::rand::{SecureRandom, SystemRandom};
use tracing::{info, warn};

use crate::handlers::SchedulingState;

const TOKEN_BYTES: usize = 32;

/// Single shared passcode exchanged for opaque bearer tokens.
///
/// Tokens live as long as the process: no expiry, no revocation.
pub struct PasscodeAuthProvider {
    passcode: String,
    tokens: RwLock<HashSet<String>>,
    rng: SystemRandom,
}

impl PasscodeAuthProvider {
    pub fn new(passcode: impl Into<String>) -> Self {
        Self {
            passcode: passcode.into(),
            tokens: RwLock::new(HashSet::new()),
            rng: SystemRandom::new(),
        }
    }

    fn generate_token(&self) -> Result<String, BooklyError> {
        let mut bytes = [0u8; TOKEN_BYTES];
        self.rng
            .fill(&mut bytes)
            .map_err(|_| internal_error("failed to generate session token"))?;
        Ok(URL_SAFE_NO_PAD.encode(bytes))
    }

    pub fn active_tokens(&self) -> usize {
        self.tokens.read().map(|tokens| tokens.len()).unwrap_or(0)
    }
}

impl AuthProvider for PasscodeAuthProvider {
    fn issue_token(&self, passcode: &str) -> Result<String, BooklyError> {
        if !constant_time_eq(passcode.as_bytes(), self.passcode.as_bytes()) {
            warn!("Admin login rejected: wrong passcode");
            return Err(unauthorized("invalid passcode"));
        }

        let token = self.generate_token()?;
        self.tokens
            .write()
            .map_err(|_| internal_error("token registry lock poisoned"))?
            .insert(token.clone());
        info!("Admin session token issued");
        Ok(token)
    }

    fn authorize(&self, token: Option<&str>) -> Result<(), BooklyError> {
        let token = token.ok_or_else(|| unauthorized("missing bearer token"))?;
        let known = self
            .tokens
            .read()
            .map_err(|_| internal_error("token registry lock poisoned"))?
            .contains(token);
        if known {
            Ok(())
        } else {
            warn!("Admin request rejected: unknown token");
            Err(forbidden("invalid or expired token"))
        }
    }
}

/// What a request presented in its `Authorization` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthHeader<'a> {
    Missing,
    Bearer(&'a str),
    /// Present, but not a usable `Bearer <token>` credential.
    Unsupported,
}

/// Classifies the `Authorization` header of a request.
pub fn auth_header(headers: &HeaderMap) -> AuthHeader<'_> {
    let Some(value) = headers.get(AUTHORIZATION) else {
        return AuthHeader::Missing;
    };
    let Ok(value) = value.to_str() else {
        return AuthHeader::Unsupported;
    };
    match value.trim().split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
            AuthHeader::Bearer(token.trim())
        }
        _ => AuthHeader::Unsupported,
    }
}

/// Axum middleware guarding the admin routes.
///
/// No header is 401; any header that does not carry a registered token is 403.
pub async fn admin_auth_middleware(
    State(state): State<Arc<SchedulingState>>,
    req: Request,
    next: Next,
) -> Result<Response, BooklyError> {
    match auth_header(req.headers()) {
        AuthHeader::Missing => state.auth.authorize(None)?,
        AuthHeader::Bearer(token) => state.auth.authorize(Some(token))?,
        AuthHeader::Unsupported => {
            warn!("Admin request rejected: unsupported authorization header");
            return Err(forbidden("unsupported authorization scheme"));
        }
    }
    Ok(next.run(req).await)
}
