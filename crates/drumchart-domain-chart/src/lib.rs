pub mod chart_export;
pub mod chart_import;
pub mod convert;
pub mod error;
pub mod expand;
pub mod heuristic;
pub mod lane_map;
pub mod midi_import;
pub mod model;
pub mod pairing;
pub mod timeline;

pub use chart_export::*;
pub use chart_import::*;
pub use convert::*;
pub use error::*;
pub use expand::*;
pub use heuristic::*;
pub use lane_map::*;
pub use midi_import::*;
pub use model::*;
pub use pairing::*;
pub use timeline::*;
