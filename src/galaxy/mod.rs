pub mod jitter;
pub mod layout;
pub mod scene;
pub mod stats;

pub use self::jitter::{seeded_rng, FixedJitter, JitterSource};
pub use self::layout::{orbital_angle, GalaxyLayoutEngine, Position, PositionedPlanet};
pub use self::scene::{GalaxyScene, ProfileSource, RenderMode, RenderSurface, ViewportCapability};
pub use self::stats::{aggregate, GalaxyStatistics};
