// Host page contract for the web frontend.

// Canvas the field draws into; its absence makes initialization a no-op.
pub const CANVAS_ID: &str = "hero-particles";
// Ancestor whose viewport intersection suspends and resumes the loop.
pub const HOST_SELECTOR: &str = "section";

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
