use crate::scroll::smooth::{ease_out_expo, Orientation, SmoothScrollConfig};

#[cfg(debug_assertions)]
pub fn get_forms_endpoint() -> &'static str {
    "http://localhost:3001/submit"  // Local mock while developing
}

#[cfg(not(debug_assertions))]
pub fn get_forms_endpoint() -> &'static str {
    "https://api.web3forms.com/submit"
}

/// Public key for the forms service; it only identifies the inbox. Set
/// `FORMS_ACCESS_KEY` at build time for the real one.
pub const FORMS_ACCESS_KEY: &str = match option_env!("FORMS_ACCESS_KEY") {
    Some(key) => key,
    None => "demo-access-key",
};

pub const CONTACT_SUBJECT: &str = "New enquiry from the studio website";

/// Delay between crossing the fire line and navigating to the next project.
pub const NAVIGATION_SETTLE_MS: u32 = 500;

pub const TOAST_DISMISS_MS: u32 = 4000;

pub fn smooth_scroll() -> SmoothScrollConfig {
    SmoothScrollConfig {
        duration: 1.2,
        easing: ease_out_expo,
        orientation: Orientation::Vertical,
        smooth_wheel: true,
        wheel_multiplier: 1.0,
        smooth_touch: false,
        touch_multiplier: 2.0,
    }
}
