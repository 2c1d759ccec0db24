pub mod bindings;
pub mod color;
pub mod config;
pub mod connect;
pub mod constants;
pub mod dot;
pub mod engine;
pub mod pacing;
pub mod record;
pub mod respawn;
pub mod scene;
pub mod surface;

pub use bindings::*;
pub use color::*;
pub use config::*;
pub use connect::{connection_alpha, find_connections, pairwise, Connection, SpatialGrid};
pub use dot::Dot;
pub use engine::*;
pub use pacing::*;
pub use record::*;
pub use respawn::RespawnQueue;
pub use scene::Scene;
pub use surface::*;
