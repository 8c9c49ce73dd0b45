//! HTML text helpers shared by the controls.

/// Escape text for element content and double-quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// ` checked` when `on`, for checkbox and radio inputs.
pub(crate) fn checked(on: bool) -> &'static str {
    if on {
        " checked"
    } else {
        ""
    }
}
