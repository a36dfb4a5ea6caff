use crate::foundation::core::{Point, SectionBounds, Viewport};

/// Input delivered by the host between frames.
///
/// Handlers only record targets; all derived values are computed on the next frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HostEvent {
    /// The page scrolled; `section` is the observed box relative to the viewport.
    Scroll {
        /// Section bounding box.
        section: SectionBounds,
    },
    /// The viewport changed size or pixel ratio.
    Resize {
        /// New viewport.
        viewport: Viewport,
        /// Section bounding box after relayout.
        section: SectionBounds,
    },
    /// Pointer moved, in container coordinates.
    PointerMove {
        /// Horizontal position.
        x: f64,
        /// Vertical position.
        y: f64,
    },
    /// Pointer left the container or window.
    PointerLeave,
    /// Fraction of the section currently intersecting the viewport.
    Visibility {
        /// Visible ratio in `[0, 1]`.
        ratio: f64,
    },
}

impl HostEvent {
    /// Pointer position carried by a move event.
    pub fn pointer(&self) -> Option<Point> {
        match *self {
            Self::PointerMove { x, y } => Some(Point::new(x, y)),
            _ => None,
        }
    }
}
