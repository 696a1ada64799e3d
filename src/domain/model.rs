use crate::utils::error::AppError;
use std::fmt;
use std::str::FromStr;

pub const SLOT_GAP: f64 = 18.0;
pub const BANK_WIDTH: f64 = 82.0;
pub const BANK_HEIGHT: f64 = 132.0;
pub const DOCK_PADDING: f64 = 28.0;
/// Extra room below the banks for the logo mark and the shadow.
pub const DOCK_FOOTER: f64 = 28.0;

/// Bank count of the mini dock.
pub const MINI_BANKS: u32 = 2;

/// Named colour palette applied to a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorVariant {
    #[default]
    Grey,
    Black,
    Blue,
}

/// The five colours a dock render is painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub dock: &'static str,
    pub dock_highlight: &'static str,
    pub bank: &'static str,
    pub bank_highlight: &'static str,
    pub logo: &'static str,
}

impl ColorVariant {
    pub const ALL: [ColorVariant; 3] = [ColorVariant::Grey, ColorVariant::Black, ColorVariant::Blue];

    /// Total, case-insensitive lookup. Unknown labels fall back to grey.
    pub fn from_label(label: &str) -> Self {
        match label.to_ascii_lowercase().as_str() {
            "black" => ColorVariant::Black,
            "blue" => ColorVariant::Blue,
            _ => ColorVariant::Grey,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorVariant::Grey => "grey",
            ColorVariant::Black => "black",
            ColorVariant::Blue => "blue",
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            ColorVariant::Black => Palette {
                dock: "#1f2937",
                dock_highlight: "#374151",
                bank: "#111827",
                bank_highlight: "#4b5563",
                logo: "#9ca3af",
            },
            ColorVariant::Blue => Palette {
                dock: "#0f172a",
                dock_highlight: "#1e3a8a",
                bank: "#1d4ed8",
                bank_highlight: "#60a5fa",
                logo: "#93c5fd",
            },
            ColorVariant::Grey => Palette {
                dock: "#e5e7eb",
                dock_highlight: "#9ca3af",
                bank: "#d1d5db",
                bank_highlight: "#9ca3af",
                logo: "#6b7280",
            },
        }
    }
}

impl fmt::Display for ColorVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strict parse used at the HTTP boundary: only the exact lowercase literals are accepted.
impl FromStr for ColorVariant {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorVariant::ALL
            .into_iter()
            .find(|variant| variant.as_str() == s)
            .ok_or_else(|| AppError::InvalidQueryParameter {
                field: "color".to_string(),
                value: s.to_string(),
                reason: "Input should be 'grey', 'black' or 'blue'".to_string(),
            })
    }
}

/// Bank counts the hub endpoint offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HubPack {
    #[default]
    Three,
    Four,
    Six,
}

impl HubPack {
    pub fn banks(&self) -> u32 {
        match self {
            HubPack::Three => 3,
            HubPack::Four => 4,
            HubPack::Six => 6,
        }
    }
}

impl FromStr for HubPack {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidQueryParameter {
            field: "pack".to_string(),
            value: s.to_string(),
            reason: "Input should be 3, 4 or 6".to_string(),
        };

        match s {
            "3" => Ok(HubPack::Three),
            "4" => Ok(HubPack::Four),
            "6" => Ok(HubPack::Six),
            _ => Err(invalid()),
        }
    }
}

/// Status LED of a bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedState {
    Full,
    Charging,
}

impl LedState {
    /// The leftmost bank is shown as full, every other bank as charging.
    pub fn for_bank(index: u32) -> Self {
        if index == 0 {
            LedState::Full
        } else {
            LedState::Charging
        }
    }
}

/// Canvas geometry for a dock with a given number of banks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockLayout {
    bank_count: u32,
}

impl DockLayout {
    /// A zero bank count is clamped to one so the canvas never collapses.
    pub fn new(bank_count: u32) -> Self {
        Self {
            bank_count: bank_count.max(1),
        }
    }

    pub fn bank_count(&self) -> u32 {
        self.bank_count
    }

    pub fn width(&self) -> f64 {
        let n = f64::from(self.bank_count);
        DOCK_PADDING * 2.0 + n * BANK_WIDTH + (n - 1.0) * SLOT_GAP
    }

    pub fn height(&self) -> f64 {
        BANK_HEIGHT + DOCK_PADDING * 2.0 + DOCK_FOOTER
    }

    /// Top-left corner of bank `index`.
    pub fn bank_origin(&self, index: u32) -> (f64, f64) {
        let x = DOCK_PADDING + f64::from(index) * (BANK_WIDTH + SLOT_GAP);
        let y = DOCK_PADDING + 4.0;
        (x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_is_case_insensitive_and_total() {
        assert_eq!(ColorVariant::from_label("BLACK"), ColorVariant::Black);
        assert_eq!(ColorVariant::from_label("Blue"), ColorVariant::Blue);
        assert_eq!(ColorVariant::from_label("grey"), ColorVariant::Grey);
        assert_eq!(ColorVariant::from_label("purple"), ColorVariant::Grey);
        assert_eq!(ColorVariant::from_label(""), ColorVariant::Grey);
    }

    #[test]
    fn test_strict_parse_rejects_other_spellings() {
        assert_eq!("black".parse::<ColorVariant>().unwrap(), ColorVariant::Black);
        assert!("BLACK".parse::<ColorVariant>().is_err());
        assert!("gray".parse::<ColorVariant>().is_err());
    }

    #[test]
    fn test_palettes_have_distinct_bank_colours() {
        for variant in ColorVariant::ALL {
            let palette = variant.palette();
            assert_ne!(palette.bank, palette.dock);
            assert_ne!(palette.bank, palette.bank_highlight);
            assert_ne!(palette.bank, palette.logo);
        }
    }

    #[test]
    fn test_hub_pack_parse() {
        assert_eq!("3".parse::<HubPack>().unwrap().banks(), 3);
        assert_eq!("6".parse::<HubPack>().unwrap().banks(), 6);
        assert!("2".parse::<HubPack>().is_err());
        assert!("five".parse::<HubPack>().is_err());
        assert!(" 3".parse::<HubPack>().is_err());
        assert!("+3".parse::<HubPack>().is_err());
        assert!("03".parse::<HubPack>().is_err());
        assert_eq!(HubPack::default(), HubPack::Three);
    }

    #[test]
    fn test_layout_dimensions() {
        for n in 1..=8u32 {
            let layout = DockLayout::new(n);
            let expected = 56.0 + 82.0 * f64::from(n) + 18.0 * f64::from(n - 1);
            assert_eq!(layout.width(), expected);
            assert_eq!(layout.height(), 188.0);
        }
        assert_eq!(DockLayout::new(3).width(), 338.0);
    }

    #[test]
    fn test_zero_banks_clamped() {
        let layout = DockLayout::new(0);
        assert_eq!(layout.bank_count(), 1);
        assert_eq!(layout.width(), 138.0);
    }

    #[test]
    fn test_bank_origin_steps_by_width_and_gap() {
        let layout = DockLayout::new(3);
        assert_eq!(layout.bank_origin(0), (28.0, 32.0));
        assert_eq!(layout.bank_origin(2), (228.0, 32.0));
    }
}
