//! Widget-configuration value types.
//!
//! These are the validated inputs to the rendering layer: immutable,
//! value-equal, and stably hashable, so they are safe to embed in cache
//! keys. They are created per paint request and discarded after use.

/// The light/dark appearance a widget is rendered for.
///
/// Appearance is threaded explicitly through every render request; there
/// is no global theme state in this crate.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Appearance {
    /// The standard light appearance.
    Aqua,
    /// The dark appearance.
    DarkAqua,
}

impl Appearance {
    /// True for the dark appearance.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::DarkAqua)
    }
}

/// The size class (variant) of a control.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum ControlSize {
    /// The large variant, introduced with the macOS 11 control designs.
    Large,
    /// The default variant.
    Regular,
    /// The small variant.
    Small,
    /// The mini variant.
    Mini,
}

impl ControlSize {
    /// Select a per-size value from a three-way table. The large variant
    /// falls back to the regular value, matching the geometry tables that
    /// predate it.
    pub fn pick(self, regular: f64, small: f64, mini: f64) -> f64 {
        match self {
            Self::Large | Self::Regular => regular,
            Self::Small => small,
            Self::Mini => mini,
        }
    }

    /// Select a per-size value from a four-way table.
    pub fn pick4(self, large: f64, regular: f64, small: f64, mini: f64) -> f64 {
        match self {
            Self::Large => large,
            Self::Regular => regular,
            Self::Small => small,
            Self::Mini => mini,
        }
    }
}

/// The interaction state of a control.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum ControlState {
    /// Enabled, in an active window.
    Active,
    /// Enabled, in an inactive window.
    Inactive,
    /// Disabled, in an active window.
    Disabled,
    /// Disabled, in an inactive window.
    DisabledInactive,
    /// Pressed by the user.
    Pressed,
    /// Under the pointer.
    Rollover,
}

/// The style of a segmented control.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum SegmentedStyle {
    /// Tab buttons.
    Tab,
    /// The standard rounded segmented style.
    Rounded,
    /// Rounded segments drawn as separated buttons.
    Separated,
    /// The inset (rail) style.
    Inset,
    /// The small square style.
    SmallSquare,
    /// The textured style.
    Textured,
    /// The textured style drawn as separated buttons.
    TexturedSeparated,
    /// The toolbar-specific rounded style.
    Toolbar,
    /// The textured style in a toolbar context.
    TexturedToolbar,
    /// The textured separated style in a toolbar context.
    TexturedSeparatedToolbar,
}

impl SegmentedStyle {
    /// True for styles whose segments render as visually separated buttons.
    pub fn is_separated(self) -> bool {
        matches!(
            self,
            Self::Separated | Self::TexturedSeparated | Self::TexturedSeparatedToolbar
        )
    }

    /// True for styles rendered in a toolbar context.
    pub fn in_toolbar(self) -> bool {
        matches!(
            self,
            Self::Toolbar | Self::TexturedToolbar | Self::TexturedSeparatedToolbar
        )
    }
}

/// The position of a segment within its logical control.
///
/// `Only` denotes a one-segment control; everything else is rendered by
/// decomposing a four-slot native primitive.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum SegmentPosition {
    /// The only segment of a one-segment control.
    Only,
    /// The leftmost segment.
    First,
    /// Any interior segment.
    Middle,
    /// The rightmost segment.
    Last,
}

/// The requested presentation of one divider adjacent to a segment.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum DividerState {
    /// The divider is not shown.
    None,
    /// The divider is shown in its ordinary presentation.
    Ordinary,
    /// The divider is shown as it appears next to a selected segment.
    Selected,
}

/// The selection-tracking mode of a segmented control.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum SwitchTracking {
    /// At most one segment is selected (radio behavior).
    SelectOne,
    /// Any subset of segments may be selected.
    SelectAny,
}

/// The full configuration of one segmented button paint request.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SegmentedButtonConfiguration {
    /// The control style.
    pub style: SegmentedStyle,
    /// The size class.
    pub size: ControlSize,
    /// The interaction state.
    pub state: ControlState,
    /// The segment's position in the logical control.
    pub position: SegmentPosition,
    /// True if this segment is selected.
    pub is_selected: bool,
    /// The requested state of the divider on the left edge.
    pub left_divider: DividerState,
    /// The requested state of the divider on the right edge.
    pub right_divider: DividerState,
    /// The selection-tracking mode.
    pub tracking: SwitchTracking,
}
