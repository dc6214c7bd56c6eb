use std::collections::HashMap;
use std::fmt;

use crate::error::EngineError;
use crate::input::events::{GameEvent, GamepadButton};
use crate::input::queue::DeviceState;
use crate::Result;

/// A physical input that an abstract button can be bound to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// A keyboard key code, e.g. `"ArrowUp"`
    Key(String),

    /// A gamepad button, including the synthetic stick-direction buttons
    GamepadButton(GamepadButton),
}

/// The edge direction a raw event maps to for an abstract button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEdge {
    Pressed,
    Released,
}

/// One stage of the abstract-button pipeline.
///
/// Each provider owns the bindings for one class of physical input and
/// reports, per raw event, which named buttons saw an edge. The queue owns
/// the public abstract-button state and applies the union rule: a button is
/// down while any provider reports it physically held.
pub trait AbstractButtonProvider: fmt::Debug {
    /// Accepts the binding if this provider handles its kind; returns false otherwise
    fn try_bind(&mut self, name: &str, binding: &Binding) -> bool;

    /// Removes the binding if this provider handles its kind.
    ///
    /// Returns `None` for a foreign binding kind; `Some(Err(..))` if the
    /// input is not registered to the given name.
    fn try_unbind(&mut self, name: &str, binding: &Binding) -> Option<Result<()>>;

    /// The abstract-button edges this raw event maps to
    fn transform_event(&self, event: &GameEvent) -> Vec<(String, ButtonEdge)>;

    /// Whether any of this provider's bindings for `name` is physically held
    fn is_abstract_button_down(&self, name: &str, devices: &DeviceState) -> bool;

    /// Whether this provider has any binding for `name`
    fn has_bindings_for(&self, name: &str) -> bool;
}

/// Binds keyboard key codes to named abstract buttons
#[derive(Debug, Default)]
pub struct KeyboardButtonProvider {
    // key code => abstract button names
    keys: HashMap<String, Vec<String>>,
}

impl KeyboardButtonProvider {
    /// Creates a provider with no bindings
    pub fn new() -> Self {
        Self::default()
    }
}

impl AbstractButtonProvider for KeyboardButtonProvider {
    fn try_bind(&mut self, name: &str, binding: &Binding) -> bool {
        let Binding::Key(code) = binding else {
            return false;
        };
        self.keys
            .entry(code.clone())
            .or_default()
            .push(name.to_string());
        true
    }

    fn try_unbind(&mut self, name: &str, binding: &Binding) -> Option<Result<()>> {
        let Binding::Key(code) = binding else {
            return None;
        };
        let Some(names) = self.keys.get_mut(code) else {
            return Some(Err(EngineError::InputBinding(format!(
                "The key '{}' is not registered to the '{}' abstract button",
                code, name
            ))));
        };
        let Some(index) = names.iter().position(|n| n == name) else {
            return Some(Err(EngineError::InputBinding(format!(
                "The key '{}' is not registered to the '{}' abstract button",
                code, name
            ))));
        };
        names.remove(index);
        if names.is_empty() {
            self.keys.remove(code);
        }
        Some(Ok(()))
    }

    fn transform_event(&self, event: &GameEvent) -> Vec<(String, ButtonEdge)> {
        match event {
            GameEvent::KeyPressed { code, .. } => self
                .keys
                .get(code)
                .map(|names| {
                    names
                        .iter()
                        .map(|name| (name.clone(), ButtonEdge::Pressed))
                        .collect()
                })
                .unwrap_or_default(),
            GameEvent::KeyReleased { code, .. } => self
                .keys
                .get(code)
                .map(|names| {
                    names
                        .iter()
                        .map(|name| (name.clone(), ButtonEdge::Released))
                        .collect()
                })
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    fn is_abstract_button_down(&self, name: &str, devices: &DeviceState) -> bool {
        self.keys
            .iter()
            .any(|(code, names)| names.iter().any(|n| n == name) && devices.is_key_down(code))
    }

    fn has_bindings_for(&self, name: &str) -> bool {
        self.keys.values().any(|names| names.iter().any(|n| n == name))
    }
}

/// Binds gamepad buttons (including synthetic stick directions) to named
/// abstract buttons
#[derive(Debug, Default)]
pub struct GamepadButtonProvider {
    // gamepad button => abstract button names
    buttons: HashMap<GamepadButton, Vec<String>>,
}

impl GamepadButtonProvider {
    /// Creates a provider with no bindings
    pub fn new() -> Self {
        Self::default()
    }
}

impl AbstractButtonProvider for GamepadButtonProvider {
    fn try_bind(&mut self, name: &str, binding: &Binding) -> bool {
        let Binding::GamepadButton(button) = binding else {
            return false;
        };
        self.buttons
            .entry(*button)
            .or_default()
            .push(name.to_string());
        true
    }

    fn try_unbind(&mut self, name: &str, binding: &Binding) -> Option<Result<()>> {
        let Binding::GamepadButton(button) = binding else {
            return None;
        };
        let not_registered = || {
            EngineError::InputBinding(format!(
                "The gamepad button '{:?}' is not registered to the '{}' abstract button",
                button, name
            ))
        };
        let Some(names) = self.buttons.get_mut(button) else {
            return Some(Err(not_registered()));
        };
        let Some(index) = names.iter().position(|n| n == name) else {
            return Some(Err(not_registered()));
        };
        names.remove(index);
        if names.is_empty() {
            self.buttons.remove(button);
        }
        Some(Ok(()))
    }

    fn transform_event(&self, event: &GameEvent) -> Vec<(String, ButtonEdge)> {
        match event {
            GameEvent::GamepadButtonPressed { button } => self
                .buttons
                .get(button)
                .map(|names| {
                    names
                        .iter()
                        .map(|name| (name.clone(), ButtonEdge::Pressed))
                        .collect()
                })
                .unwrap_or_default(),
            GameEvent::GamepadButtonReleased { button } => self
                .buttons
                .get(button)
                .map(|names| {
                    names
                        .iter()
                        .map(|name| (name.clone(), ButtonEdge::Released))
                        .collect()
                })
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    fn is_abstract_button_down(&self, name: &str, devices: &DeviceState) -> bool {
        self.buttons.iter().any(|(button, names)| {
            names.iter().any(|n| n == name) && devices.is_gamepad_button_down(*button)
        })
    }

    fn has_bindings_for(&self, name: &str) -> bool {
        self.buttons
            .values()
            .any(|names| names.iter().any(|n| n == name))
    }
}
