// UI module - the surface seam and the session controller
//
// This module contains:
// - RenderSurface: the single injected capability trait a host implements
// - SessionController: reacts to user intents and drives the state machine
// - Notifier: transient notifications with a cancellable auto-dismiss timer
// - ConsoleSurface: the stdout surface used by the binary

pub mod console;
pub mod controller;
pub mod notify;
pub mod surface;

pub use console::ConsoleSurface;
pub use controller::SessionController;
pub use notify::{DISMISS_AFTER, Notifier};
pub use surface::{RenderSurface, Severity};
