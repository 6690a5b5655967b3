use std::time::Duration;

// === TRANSITION TIMING ===
/// How long the outgoing page is covered before the midpoint notification.
pub const MELT_DURATION: Duration = Duration::from_millis(300);
/// Total length of one transition, measured from `begin()`.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(600);

// === ORBITAL LAYOUT ===
pub const ORBIT_RADIUS: f64 = 10.0;
/// Half-height of the vertical jitter band: y is drawn from [-J, J].
pub const VERTICAL_JITTER: f64 = 2.5;
/// Records served per request by the profile store.
pub const PROFILE_PAGE_SIZE: usize = 10;

// === PLANET DEFAULTS ===
pub const DEFAULT_PLANET_COLOR: &str = "#8b5cf6";
pub const DEFAULT_PLANET_SIZE: f64 = 1.0;
pub const DEFAULT_RING_COUNT: u32 = 1;
