//! The fixed color palette shared by notes and folders.
//!
//! Colors are stored as plain lowercase text; anything outside
//! [`PALETTE`] is rejected at the validation layer.

use rand::Rng;

use crate::error::CoreError;

pub const COLOR_BLUE: &str = "blue";
pub const COLOR_WARM: &str = "warm";
pub const COLOR_PEACH: &str = "peach";
pub const COLOR_PINK: &str = "pink";
pub const COLOR_GREEN: &str = "green";
pub const COLOR_PURPLE: &str = "purple";
pub const COLOR_GREY: &str = "grey";

/// All valid palette values.
pub const PALETTE: &[&str] = &[
    COLOR_BLUE,
    COLOR_WARM,
    COLOR_PEACH,
    COLOR_PINK,
    COLOR_GREEN,
    COLOR_PURPLE,
    COLOR_GREY,
];

/// Default color for notes created without an explicit color.
pub const DEFAULT_NOTE_COLOR: &str = COLOR_GREY;

/// Default color for the "My Notes" folder provisioned at signup.
pub const DEFAULT_FOLDER_COLOR: &str = COLOR_GREY;

/// Whether `color` is a member of the palette.
pub fn is_palette_color(color: &str) -> bool {
    PALETTE.contains(&color)
}

/// Validate an optional color supplied by a client.
///
/// `None` is fine (the store applies its default); an explicit value
/// must be a palette member.
pub fn validate_color(color: Option<&str>) -> Result<(), CoreError> {
    match color {
        None => Ok(()),
        Some(color) if is_palette_color(color) => Ok(()),
        Some(other) => Err(CoreError::Validation(format!("Unknown color '{other}'"))),
    }
}

/// Draw a uniformly random palette color.
///
/// Used for folders created without an explicit color. The draw comes
/// from the thread-local OS-seeded RNG.
pub fn random_color() -> &'static str {
    let idx = rand::rng().random_range(0..PALETTE.len());
    PALETTE[idx]
}
