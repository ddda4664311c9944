//! `modkit::mathcore` module is a core that implements math functionality for mods.
//!
//! # Prelude
//! `modkit::mathcore` prelude can be imported with `use modkit::mathcore::prelude::*`.
//!
//! # Model
//! Voxel worlds are addressed by integer block positions,
//! while entities move in continuous space.
//! [`Vector3Int`](vectors::Vector3Int) represents the former, and [`floats`] module
//! supplies helpers that convert continuous coordinates into block coordinates.
//!

// submodules and public re-exports
pub mod floats;
pub mod vectors;

// prelude
pub mod prelude;
