//! Stamp placement transforms.
//!
//! A [`Transforms`] value describes where a stamp sits on a garment:
//! position, rotation, and scale, each a 3D vector. The value is embedded
//! in a design, persisted as a JSONB column, and echoed into technical
//! sheets; its numeric components must round-trip exactly through
//! serialization.

use serde::{Deserialize, Serialize};

/// A 3D vector with `f64` components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const ONE: Vector3 = Vector3 {
        x: 1.0,
        y: 1.0,
        z: 1.0,
    };
}

/// Position, rotation, and scale of a stamp on a garment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transforms {
    pub position: Vector3,
    pub rotation: Vector3,
    pub scale: Vector3,
}

impl Default for Transforms {
    /// Identity placement: origin position, no rotation, unit scale.
    fn default() -> Self {
        Transforms {
            position: Vector3::ZERO,
            rotation: Vector3::ZERO,
            scale: Vector3::ONE,
        }
    }
}
