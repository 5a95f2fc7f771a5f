//! Input commands
//!
//! The platform layer turns key presses and clicks into these, one command
//! per physical occurrence.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    PauseToggle,
    Begin,
    Quit,
    Confirm,
    /// Click in screen coordinates
    PointerClick { x: i32, y: i32 },
}
