use crate::config::GalaxyConfig;
use crate::error::GxResult;
use crate::galaxy::jitter::{seeded_rng, JitterSource};
use crate::galaxy::layout::{GalaxyLayoutEngine, PositionedPlanet};
use crate::galaxy::stats::{aggregate, GalaxyStatistics};
use crate::profile::ProfileRecord;
use fastrand::Rng;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};
use tracing::info;

/// Upstream store of raw profiles.
pub trait ProfileSource {
    /// Returns at most `limit` records. Sources may return fewer, or none.
    fn fetch_profiles(&self, limit: usize) -> GxResult<Vec<ProfileRecord>>;
}

impl ProfileSource for Vec<ProfileRecord> {
    fn fetch_profiles(&self, limit: usize) -> GxResult<Vec<ProfileRecord>> {
        Ok(self.iter().take(limit).cloned().collect())
    }
}

/// Answers whether the display is wide enough for the 3D orbit view.
pub trait ViewportCapability {
    fn is_wide_viewport(&self) -> bool;
}

impl ViewportCapability for bool {
    fn is_wide_viewport(&self) -> bool {
        *self
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Full 3D orbit scene.
    Orbital,
    /// Plain card list for narrow viewports.
    Flat,
}

impl RenderMode {
    pub fn for_viewport<V: ViewportCapability + ?Sized>(viewport: &V) -> Self {
        if viewport.is_wide_viewport() {
            Self::Orbital
        } else {
            Self::Flat
        }
    }
}

/// Whatever draws the galaxy.
pub trait RenderSurface {
    fn present(&mut self, planets: &[PositionedPlanet], stats: &GalaxyStatistics, mode: RenderMode);
}

/// Wires a profile source through the layout engine into a surface.
pub struct GalaxyScene<R: JitterSource = Rng> {
    engine: GalaxyLayoutEngine,
    max_planets: usize,
    rng: R,
}

impl GalaxyScene<Rng> {
    pub fn from_config(config: &GalaxyConfig) -> GxResult<Self> {
        let engine = GalaxyLayoutEngine::from_config(config)?;
        Ok(Self::new(engine, config.max_planets, seeded_rng(config.seed)))
    }
}

impl<R: JitterSource> GalaxyScene<R> {
    pub fn new(engine: GalaxyLayoutEngine, max_planets: usize, rng: R) -> Self {
        Self {
            engine,
            max_planets,
            rng,
        }
    }

    pub fn engine(&self) -> &GalaxyLayoutEngine {
        &self.engine
    }

    /// Recomputes the whole scene from a fresh fetch. Planets are rebuilt
    /// wholesale on every call.
    pub fn refresh<S, V, T>(
        &mut self,
        source: &S,
        viewport: &V,
        surface: &mut T,
    ) -> GxResult<GalaxyStatistics>
    where
        S: ProfileSource + ?Sized,
        V: ViewportCapability + ?Sized,
        T: RenderSurface + ?Sized,
    {
        let records = source.fetch_profiles(self.max_planets)?;
        let planets = self
            .engine
            .layout(&records, self.max_planets, &mut self.rng);
        let stats = aggregate(&planets);
        let mode = RenderMode::for_viewport(viewport);

        info!(
            "Galaxy refreshed: {} planets, {} headline techs, {} view",
            stats.planet_count, stats.tech_stack_total, mode
        );

        surface.present(&planets, &stats, mode);
        Ok(stats)
    }
}
