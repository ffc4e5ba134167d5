//! Wall-clock access for record ids and timestamps.

/// Current time as epoch milliseconds and its RFC 3339 rendering.
#[cfg(feature = "hydrate")]
pub fn now() -> (u64, String) {
    let date = js_sys::Date::new_0();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let millis = date.get_time() as u64;
    (millis, String::from(date.to_iso_string()))
}

/// Server renders never submit records; the value only keeps the signature
/// uniform across builds.
#[cfg(not(feature = "hydrate"))]
pub fn now() -> (u64, String) {
    (0, String::new())
}
