//! Polled keyboard input
//!
//! Window events are folded into an [`InputState`] once per frame; the rest
//! of the application asks "is this key down right now" instead of reacting
//! inside an event callback.

use std::collections::HashSet;

/// Keys the demo understands, independent of the windowing library
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Space bar
    Space,
    /// Escape key
    Escape,
    /// Enter key
    Enter,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

impl KeyCode {
    /// Map a GLFW key to a [`KeyCode`], or `None` for keys the demo ignores
    fn from_glfw(key: glfw::Key) -> Option<Self> {
        match key {
            glfw::Key::Space => Some(Self::Space),
            glfw::Key::Escape => Some(Self::Escape),
            glfw::Key::Enter => Some(Self::Enter),
            glfw::Key::Up => Some(Self::Up),
            glfw::Key::Down => Some(Self::Down),
            glfw::Key::Left => Some(Self::Left),
            glfw::Key::Right => Some(Self::Right),
            _ => None,
        }
    }
}

/// Snapshot of which keys are currently held down
#[derive(Debug, Default)]
pub struct InputState {
    keys_down: HashSet<KeyCode>,
}

impl InputState {
    /// Create an input state with no keys held
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one window event into the state
    ///
    /// Non-key events are ignored, except that losing focus releases every
    /// key: the matching release events go to whichever window gained focus.
    pub fn apply_window_event(&mut self, event: &glfw::WindowEvent) {
        match event {
            glfw::WindowEvent::Key(key, _, action, _) => {
                if let Some(code) = KeyCode::from_glfw(*key) {
                    match action {
                        glfw::Action::Press => {
                            self.keys_down.insert(code);
                        }
                        glfw::Action::Release => {
                            self.keys_down.remove(&code);
                        }
                        glfw::Action::Repeat => {}
                    }
                }
            }
            glfw::WindowEvent::Focus(false) => {
                self.keys_down.clear();
            }
            _ => {}
        }
    }

    /// Whether `key` is currently held down
    pub fn key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }
}
