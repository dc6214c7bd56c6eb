pub mod math;
pub mod physics;
pub mod input;
pub mod scene;
pub mod adapter;

/// Re-export common types for easier usage
pub use crate::math::Vector2;
pub use crate::physics::{
    Body, ColliderHandle, DragForceGenerator, GravityForceGenerator, PhysicsConfig, PhysicsSpace,
    Shape, SpringForceGenerator,
};
pub use crate::input::{EventQueue, GameEvent, InputConfig};
pub use crate::scene::Scene;

/// Error types for the engine core
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum EngineError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Resource not found: {0}")]
        ResourceNotFound(String),

        #[error("Input binding error: {0}")]
        InputBinding(String),

        #[error("Internal error: {0}")]
        InternalError(String),
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, error::EngineError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
