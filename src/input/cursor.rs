/// Cursor shape the host should show over the wall.
///
/// Ordered by priority: when several photos report a hint, the highest one
/// wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum CursorHint {
    /// Platform default cursor.
    #[default]
    Auto,
    /// Open hand: a photo can be picked up.
    Grab,
    /// Closed hand: a photo is being dragged.
    Grabbing,
}

impl CursorHint {
    /// CSS cursor keyword for web hosts.
    #[must_use]
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Grab => "grab",
            Self::Grabbing => "grabbing",
        }
    }
}
