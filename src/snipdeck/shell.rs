//! Capabilities the core needs from whatever UI hosts it.
//!
//! The controller never draws widgets, opens dialogs or touches the system
//! clipboard itself. It asks a [`Shell`] to. A desktop toolkit, a terminal or
//! a test double can all stand in, as long as they provide the four traits
//! below.

use crate::error::Result;
use crate::view::View;

pub trait Prompt {
    /// Modal text input. `None` when the user cancels.
    fn ask_string(&mut self, title: &str, message: &str) -> Option<String>;

    /// Modal yes/no question.
    fn confirm(&mut self, title: &str, message: &str) -> bool;
}

pub trait Notify {
    fn info(&mut self, title: &str, message: &str);
    fn error(&mut self, title: &str, message: &str);
}

pub trait Clipboard {
    fn copy(&mut self, text: &str) -> Result<()>;
}

pub trait Renderer {
    /// Draws both category sections and fills both selectors from `view`.
    fn render(&mut self, view: &View);
}

/// Everything a controller needs from its host.
pub trait Shell: Prompt + Notify + Clipboard + Renderer {}

impl<T: Prompt + Notify + Clipboard + Renderer> Shell for T {}
