use crate::config::GalaxyConfig;
use crate::consts::{
    DEFAULT_PLANET_COLOR, DEFAULT_PLANET_SIZE, DEFAULT_RING_COUNT, ORBIT_RADIUS, VERTICAL_JITTER,
};
use crate::error::GxResult;
use crate::galaxy::jitter::{vertical_offset, JitterSource};
use crate::profile::{ProfileRecord, TechStack};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A profile with every optional field resolved, placed in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedPlanet {
    pub id: String,
    pub name: String,
    pub owner_label: String,
    pub stack: TechStack,
    pub color: String,
    pub size: f64,
    pub ring_count: u32,
    pub like_count: u64,
    pub view_count: u64,
    pub position: Position,
}

impl PositionedPlanet {
    /// Fills every missing attribute with its default. Never fails.
    pub fn from_record(record: &ProfileRecord, position: Position) -> Self {
        let color = match record.color.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => DEFAULT_PLANET_COLOR.to_string(),
        };

        // Zero, negative or NaN sizes would make the mesh vanish.
        let size = record
            .size
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(DEFAULT_PLANET_SIZE);

        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            owner_label: owner_label(record),
            stack: record.stack.clone(),
            color,
            size,
            ring_count: record.ring_count.unwrap_or(DEFAULT_RING_COUNT),
            like_count: record.like_count.unwrap_or(0),
            view_count: record.view_count.unwrap_or(0),
            position,
        }
    }
}

fn owner_label(record: &ProfileRecord) -> String {
    let name = record.name.trim();
    if name.is_empty() {
        record.id.clone()
    } else {
        name.to_string()
    }
}

/// Angle of slot `index` when `count` planets share the orbit evenly.
///
/// Returns 0.0 for an empty orbit instead of dividing by zero.
#[inline]
pub fn orbital_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    index as f64 * (TAU / count as f64)
}

/// Places profiles on a horizontal ring with random vertical jitter.
///
/// The engine holds no mutable state; the jitter source is borrowed per call,
/// so one engine can be shared freely.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GalaxyLayoutEngine {
    orbit_radius: f64,
    vertical_jitter: f64,
}

impl Default for GalaxyLayoutEngine {
    fn default() -> Self {
        Self {
            orbit_radius: ORBIT_RADIUS,
            vertical_jitter: VERTICAL_JITTER,
        }
    }
}

impl GalaxyLayoutEngine {
    pub fn new(orbit_radius: f64, vertical_jitter: f64) -> GxResult<Self> {
        Self::from_config(&GalaxyConfig {
            orbit_radius,
            vertical_jitter,
            ..GalaxyConfig::default()
        })
    }

    pub fn from_config(config: &GalaxyConfig) -> GxResult<Self> {
        config.validate()?;
        Ok(Self {
            orbit_radius: config.orbit_radius,
            vertical_jitter: config.vertical_jitter,
        })
    }

    pub fn orbit_radius(&self) -> f64 {
        self.orbit_radius
    }

    pub fn vertical_jitter(&self) -> f64 {
        self.vertical_jitter
    }

    /// Lays out the first `max_count` records in input order.
    ///
    /// x and z are a pure function of (index, count). y is the single random
    /// component, one draw per planet from `rng`.
    pub fn layout<R: JitterSource + ?Sized>(
        &self,
        records: &[ProfileRecord],
        max_count: usize,
        rng: &mut R,
    ) -> Vec<PositionedPlanet> {
        let visible = &records[..records.len().min(max_count)];
        let n = visible.len();

        if n < records.len() {
            debug!(
                "Truncating {} profiles to the first {}",
                records.len(),
                max_count
            );
        }

        visible
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let theta = orbital_angle(i, n);
                let position = Position {
                    x: self.orbit_radius * theta.cos(),
                    y: vertical_offset(rng, self.vertical_jitter),
                    z: self.orbit_radius * theta.sin(),
                };
                PositionedPlanet::from_record(record, position)
            })
            .collect()
    }
}
