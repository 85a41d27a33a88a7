//! # Maintenance Cookie
//!
//! Denormalized copy of the flag for the edge layer, so requests can be turned away
//! before they reach the database. It may lag the settings record by one status read.
//! Nothing in this crate reads it back.
use cookie::{Cookie, SameSite, time::Duration};
use shared::{COOKIE_MAX_AGE_SECS, COOKIE_NAME};

pub fn maintenance_cookie(maintenance_mode: bool, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, maintenance_mode.to_string()))
        .path("/")
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(COOKIE_MAX_AGE_SECS))
        .build()
}
