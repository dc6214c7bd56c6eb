pub mod body;
pub mod config;
pub mod contact;
pub mod forces;
mod narrow_phase;
pub mod space;
pub mod shape;
pub mod storage;

pub use self::body::{Body, BodyFlags, PositionCorrection};
pub use self::config::PhysicsConfig;
pub use self::contact::{Contact, ContactArena, ContactId};
pub use self::forces::{
    DragForceGenerator, ForceGenerator, GravityForceGenerator, SpringForceGenerator,
};
pub use self::shape::Shape;
pub use self::space::PhysicsSpace;
pub use self::storage::{ColliderHandle, ColliderStorage};
