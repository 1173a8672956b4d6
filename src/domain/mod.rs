pub mod model;

pub use model::{ServiceKind, TrainId};
