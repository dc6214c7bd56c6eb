pub mod config;
pub mod events;
pub mod provider;
pub mod queue;

pub use self::config::InputConfig;
pub use self::events::{
    GameEvent, GamepadButton, KeyModifiers, MouseButton, STANDARD_GAMEPAD_AXES,
    STANDARD_GAMEPAD_BUTTONS,
};
pub use self::provider::{
    AbstractButtonProvider, Binding, ButtonEdge, GamepadButtonProvider, KeyboardButtonProvider,
};
pub use self::queue::{DeviceState, EventQueue};
