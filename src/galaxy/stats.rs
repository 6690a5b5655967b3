use crate::galaxy::layout::PositionedPlanet;
use serde::{Deserialize, Serialize};

/// Headline numbers shown next to the galaxy. Always derived from the
/// current planet list; never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalaxyStatistics {
    pub planet_count: usize,
    pub tech_stack_total: usize,
}

pub fn aggregate(planets: &[PositionedPlanet]) -> GalaxyStatistics {
    planets
        .iter()
        .fold(GalaxyStatistics::default(), |mut acc, planet| {
            acc.planet_count += 1;
            acc.tech_stack_total += planet.stack.headline_count();
            acc
        })
}
