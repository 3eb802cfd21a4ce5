use log::Level;

use crate::scheduler::RevertPolicy;

pub const SITE_TITLE: &str = "Dr. Serena Blake - Clinical Psychologist | Los Angeles";
pub const SITE_DESCRIPTION: &str = "Dr. Serena Blake is a licensed clinical psychologist in Los Angeles, CA, specializing in anxiety, relationship counseling, and trauma recovery. Book your free consultation today.";
pub const SITE_KEYWORDS: &str = "psychologist, therapy, anxiety, relationship counseling, trauma recovery, Los Angeles, Dr. Serena Blake";

/// How long the about/contact sections stay highlighted after a call to action.
pub const HIGHLIGHT_DURATION_MS: u32 = 3_000;

pub const REVERT_POLICY: RevertPolicy = RevertPolicy::Independent;

pub const SUBMISSION_ACK: &str = "Thank you for your message! Dr. Blake will contact you soon.";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Local trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
