//! Color constants for the TUI.

use ratatui::style::Color;

use crate::dashboard::{BarTone, SkyPhase};

/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;
/// Inactive flow path.
pub const IDLE_FG: Color = Color::DarkGray;
/// Solar generation curve.
pub const SOLAR_COLOR: Color = Color::Yellow;
/// Household load curve.
pub const LOAD_COLOR: Color = Color::Cyan;
/// Current-time marker.
pub const MARKER_COLOR: Color = Color::White;

/// Bar color for a tone.
pub fn tone_color(tone: BarTone) -> Color {
    match tone {
        BarTone::Positive => Color::Green,
        BarTone::Negative => Color::Red,
        BarTone::Usage => LOAD_COLOR,
        BarTone::Solar => SOLAR_COLOR,
        BarTone::Battery => Color::Green,
        BarTone::BatteryDrain => Color::Red,
    }
}

/// Header accent for the sky behind the house.
pub fn sky_color(sky: SkyPhase) -> Color {
    match sky {
        SkyPhase::Day => Color::LightBlue,
        SkyPhase::Dusk => Color::LightRed,
        SkyPhase::Night => Color::Blue,
    }
}
