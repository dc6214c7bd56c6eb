use bitflags::bitflags;

bitflags! {
    /// Modifier keys held while a keyboard event fired
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct KeyModifiers: u8 {
        const ALT = 0x01;
        const CTRL = 0x02;
        const SHIFT = 0x04;
    }
}

/// Mouse buttons, numbered like the host's button indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    BrowserBack,
    BrowserForward,
}

/// Buttons of a standard-mapping gamepad.
///
/// The stick-direction variants are synthetic: they are never reported by the
/// device, but are synthesized from axis values crossing the dead zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadButton {
    A,
    B,
    X,
    Y,
    TriggerLeft,
    TriggerRight,
    TriggerLeftAlt,
    TriggerRightAlt,
    Back,
    Start,
    LeftStick,
    RightStick,
    DPadUp,
    DPadDown,
    DPadLeft,
    DPadRight,
    Center,

    LeftStickLeft,
    LeftStickRight,
    LeftStickUp,
    LeftStickDown,
    RightStickLeft,
    RightStickRight,
    RightStickUp,
    RightStickDown,
}

/// Button order of the standard gamepad mapping, indexed by raw button index
pub const STANDARD_GAMEPAD_BUTTONS: [GamepadButton; 17] = [
    GamepadButton::A,
    GamepadButton::B,
    GamepadButton::X,
    GamepadButton::Y,
    GamepadButton::TriggerLeft,
    GamepadButton::TriggerRight,
    GamepadButton::TriggerLeftAlt,
    GamepadButton::TriggerRightAlt,
    GamepadButton::Back,
    GamepadButton::Start,
    GamepadButton::LeftStick,
    GamepadButton::RightStick,
    GamepadButton::DPadUp,
    GamepadButton::DPadDown,
    GamepadButton::DPadLeft,
    GamepadButton::DPadRight,
    GamepadButton::Center,
];

/// Synthetic (negative, positive) direction buttons for each standard axis
pub const STANDARD_GAMEPAD_AXES: [(GamepadButton, GamepadButton); 4] = [
    (GamepadButton::LeftStickLeft, GamepadButton::LeftStickRight),
    (GamepadButton::LeftStickUp, GamepadButton::LeftStickDown),
    (GamepadButton::RightStickLeft, GamepadButton::RightStickRight),
    (GamepadButton::RightStickUp, GamepadButton::RightStickDown),
];

/// A normalized input event.
///
/// Raw device notifications are turned into exactly one of these; duplicate
/// edges are suppressed and high-frequency motion is coalesced before the
/// queue is drained.
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A key produced text input; fires on every OS key-repeat
    KeyTyped {
        key: String,
        code: String,
        modifiers: KeyModifiers,
    },

    /// A key transitioned from up to down; never repeats
    KeyPressed { code: String, modifiers: KeyModifiers },

    /// A key transitioned from down to up
    KeyReleased { code: String, modifiers: KeyModifiers },

    /// Coalesced mouse motion: summed deltas, latest absolute position
    MouseMoved {
        movement_x: f32,
        movement_y: f32,
        page_x: f32,
        page_y: f32,
    },

    MouseButtonPressed {
        button: MouseButton,
        page_x: f32,
        page_y: f32,
    },

    MouseButtonReleased {
        button: MouseButton,
        page_x: f32,
        page_y: f32,
    },

    /// Coalesced wheel motion: summed delta, latest position
    MouseWheel {
        delta: f32,
        page_x: f32,
        page_y: f32,
    },

    GamepadButtonPressed { button: GamepadButton },

    GamepadButtonReleased { button: GamepadButton },

    GamepadAxisChanged {
        idx: usize,
        previous: f32,
        value: f32,
    },

    /// A named logical button transitioned from up to down
    AbstractButtonPressed { name: String },

    /// A named logical button transitioned from down to up
    AbstractButtonReleased { name: String },

    /// Auto-repeat of the most recently activated abstract button
    AbstractButtonTyped { name: String },
}
