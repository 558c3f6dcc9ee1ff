#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod body_part;
mod exercise;
mod scene;
mod selection;

use std::slice::Iter;

pub use body_part::{BodyPartId, BodyPartIdError, Category, ColorHint, Region, Side};
pub use catalog::BodyPartInfo;
pub use exercise::{Difficulty, ExerciseEntry, ExerciseKind};
pub use scene::{BodyModel, Mesh, MeshTag, Position, Shape};
pub use selection::{Selection, SubscriptionId};

/// Closed value set with a fixed display order and a human-readable name.
pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
