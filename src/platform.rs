//! Platform-specific configuration

/// Submit shortcut display for help text
/// Ctrl+S works on all platforms; macOS terminals do not forward Cmd
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";
