//! Indicator bank data model and the fixed state→visual mapping.
//!
//! The FSM-GA panel exposes twelve annunciator buttons, each with an
//! addressable RGB LED.  LED ids are contiguous and start at the HDG
//! button; on the units we have seen that is raw id 10 (an offset field
//! can be added later if other revisions differ).

use crate::rules::DerivedState;

// ---------------------------------------------------------------------------
// Indicator identity
// ---------------------------------------------------------------------------

/// One physical annunciator button, by position on the panel.
/// Raw values are the device LED ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum IndicatorId {
    Hdg = 10,
    Trk = 11,
    Nav = 12,
    Apr = 13,
    Alt = 14,
    Lvl = 15,
    Vnav = 16,
    Ias = 17,
    Ap = 18,
    Fd = 19,
    Yd = 20,
    Vs = 21,
}

impl IndicatorId {
    /// Number of indicators on the panel — sizes the cache and rule table.
    pub const COUNT: usize = 12;

    /// Every indicator in panel order (left column, right column, centre).
    pub const ALL: [Self; Self::COUNT] = [
        Self::Hdg,
        Self::Trk,
        Self::Nav,
        Self::Apr,
        Self::Alt,
        Self::Lvl,
        Self::Vnav,
        Self::Ias,
        Self::Ap,
        Self::Fd,
        Self::Yd,
        Self::Vs,
    ];

    /// Raw LED id on the wire.
    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// Zero-based slot for array-backed lookups.
    pub const fn index(self) -> usize {
        (self as u8 - Self::Hdg as u8) as usize
    }

    /// Button legend, for logs and the self-test walk.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Hdg => "HDG",
            Self::Trk => "TRK",
            Self::Nav => "NAV",
            Self::Apr => "APR",
            Self::Alt => "ALT",
            Self::Lvl => "LVL",
            Self::Vnav => "VNAV",
            Self::Ias => "IAS",
            Self::Ap => "AP",
            Self::Fd => "FD",
            Self::Yd => "YD",
            Self::Vs => "VS",
        }
    }
}

// ---------------------------------------------------------------------------
// LED command model
// ---------------------------------------------------------------------------

/// Colour as (R, G, B) tuple, each 0–255.
pub type Rgb = (u8, u8, u8);

/// Blink behaviour the device firmware supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkPattern {
    /// Constant colour.
    None,
    /// ~1 Hz blink; alternates primary/secondary when a secondary is set.
    Slow,
    /// ~4 Hz blink, primary colour only.
    Fast,
}

/// The full instruction for one LED write.
///
/// `secondary` is only meaningful for two-tone blink states; the device
/// ignores it for constant patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndicatorCommand {
    pub id: IndicatorId,
    pub primary: Rgb,
    pub blink: BlinkPattern,
    pub secondary: Option<Rgb>,
}

// ── Well-known colours ────────────────────────────────────────

/// Engaged modes render solid green.
pub const COLOUR_ON: Rgb = (0, 255, 0);
/// Armed modes blink between dim green and red.
pub const COLOUR_ARMED_PRIMARY: Rgb = (0, 51, 0);
pub const COLOUR_ARMED_SECONDARY: Rgb = (255, 0, 0);
/// Off is rendered as black so the LED is not illuminated.
pub const COLOUR_OFF: Rgb = (0, 0, 0);
/// Self-test attention colour.
pub const COLOUR_TEST: Rgb = (255, 0, 0);

// ---------------------------------------------------------------------------
// State → visual mapping
// ---------------------------------------------------------------------------

/// Render a derived state into the LED command for `id`.
///
/// The mapping is fixed, not configurable: engaged states are solid
/// green, armed states are a two-tone slow blink, everything else is
/// dark.  Returns `None` for [`DerivedState::Unsupported`], which has no
/// visual representation.
pub fn render(id: IndicatorId, state: DerivedState) -> Option<IndicatorCommand> {
    let cmd = match state {
        DerivedState::Off => IndicatorCommand {
            id,
            primary: COLOUR_OFF,
            blink: BlinkPattern::None,
            secondary: None,
        },
        DerivedState::On | DerivedState::Active | DerivedState::Captured => IndicatorCommand {
            id,
            primary: COLOUR_ON,
            blink: BlinkPattern::None,
            secondary: None,
        },
        DerivedState::Armed => IndicatorCommand {
            id,
            primary: COLOUR_ARMED_PRIMARY,
            blink: BlinkPattern::Slow,
            secondary: Some(COLOUR_ARMED_SECONDARY),
        },
        DerivedState::Unsupported => return None,
    };
    Some(cmd)
}

/// The attention pattern used by the self-test walk.  Deliberately not
/// reachable from [`render`] so telemetry can never produce it.
pub fn test_flash(id: IndicatorId) -> IndicatorCommand {
    IndicatorCommand {
        id,
        primary: COLOUR_TEST,
        blink: BlinkPattern::Fast,
        secondary: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_contiguous_from_hdg() {
        for (i, id) in IndicatorId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(id.raw(), IndicatorId::Hdg.raw() + i as u8);
        }
    }

    #[test]
    fn engaged_states_render_solid_green() {
        for state in [DerivedState::On, DerivedState::Active, DerivedState::Captured] {
            let cmd = render(IndicatorId::Ap, state).unwrap();
            assert_eq!(cmd.primary, COLOUR_ON);
            assert_eq!(cmd.blink, BlinkPattern::None);
            assert!(cmd.secondary.is_none());
        }
    }

    #[test]
    fn armed_renders_two_tone_slow_blink() {
        let cmd = render(IndicatorId::Apr, DerivedState::Armed).unwrap();
        assert_eq!(cmd.blink, BlinkPattern::Slow);
        assert_eq!(cmd.secondary, Some(COLOUR_ARMED_SECONDARY));
    }

    #[test]
    fn off_renders_dark() {
        let cmd = render(IndicatorId::Hdg, DerivedState::Off).unwrap();
        assert_eq!(cmd.primary, COLOUR_OFF);
        assert_eq!(cmd.blink, BlinkPattern::None);
    }

    #[test]
    fn unsupported_has_no_visual() {
        assert!(render(IndicatorId::Trk, DerivedState::Unsupported).is_none());
    }

    #[test]
    fn test_flash_is_distinct_from_telemetry_states() {
        let flash = test_flash(IndicatorId::Vs);
        assert_eq!(flash.blink, BlinkPattern::Fast);
        for state in [
            DerivedState::Off,
            DerivedState::On,
            DerivedState::Armed,
            DerivedState::Active,
            DerivedState::Captured,
        ] {
            assert_ne!(render(IndicatorId::Vs, state), Some(flash));
        }
    }
}
