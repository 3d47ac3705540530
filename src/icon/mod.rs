//! Feature and contact icons used by the showcase blocks.
//!
//! Each block names its icon with a [`BlockIcon`] variant; the icon asset name
//! and accent palette come from one static table.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum AccentColor {
    Gray,
    Red,
    Pink,
    Violet,
    Indigo,
    Blue,
    Cyan,
    Teal,
    Green,
    Yellow,
    Orange,
}

impl AccentColor {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gray => "gray",
            Self::Red => "red",
            Self::Pink => "pink",
            Self::Violet => "violet",
            Self::Indigo => "indigo",
            Self::Blue => "blue",
            Self::Cyan => "cyan",
            Self::Teal => "teal",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Orange => "orange",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum BlockIcon {
    CreditCard,
    Shield,
    Zap,
    Users,
    Globe,
    Lock,
    Mail,
    Phone,
    MapPin,
    Clock,
    Star,
    Heart,
}

struct IconEntry {
    icon: BlockIcon,
    name: &'static str,
    asset: &'static str,
    accent: AccentColor,
}

static ICON_TABLE: [IconEntry; 12] = [
    IconEntry {
        icon: BlockIcon::CreditCard,
        name: "CreditCard",
        asset: "credit-card",
        accent: AccentColor::Indigo,
    },
    IconEntry {
        icon: BlockIcon::Shield,
        name: "Shield",
        asset: "shield-check",
        accent: AccentColor::Green,
    },
    IconEntry {
        icon: BlockIcon::Zap,
        name: "Zap",
        asset: "bolt",
        accent: AccentColor::Yellow,
    },
    IconEntry {
        icon: BlockIcon::Users,
        name: "Users",
        asset: "users",
        accent: AccentColor::Blue,
    },
    IconEntry {
        icon: BlockIcon::Globe,
        name: "Globe",
        asset: "world",
        accent: AccentColor::Cyan,
    },
    IconEntry {
        icon: BlockIcon::Lock,
        name: "Lock",
        asset: "lock",
        accent: AccentColor::Gray,
    },
    IconEntry {
        icon: BlockIcon::Mail,
        name: "Mail",
        asset: "mail",
        accent: AccentColor::Violet,
    },
    IconEntry {
        icon: BlockIcon::Phone,
        name: "Phone",
        asset: "phone",
        accent: AccentColor::Teal,
    },
    IconEntry {
        icon: BlockIcon::MapPin,
        name: "MapPin",
        asset: "map-pin",
        accent: AccentColor::Red,
    },
    IconEntry {
        icon: BlockIcon::Clock,
        name: "Clock",
        asset: "clock",
        accent: AccentColor::Orange,
    },
    IconEntry {
        icon: BlockIcon::Star,
        name: "Star",
        asset: "star",
        accent: AccentColor::Yellow,
    },
    IconEntry {
        icon: BlockIcon::Heart,
        name: "Heart",
        asset: "heart",
        accent: AccentColor::Pink,
    },
];

impl BlockIcon {
    pub const ALL: [BlockIcon; 12] = [
        BlockIcon::CreditCard,
        BlockIcon::Shield,
        BlockIcon::Zap,
        BlockIcon::Users,
        BlockIcon::Globe,
        BlockIcon::Lock,
        BlockIcon::Mail,
        BlockIcon::Phone,
        BlockIcon::MapPin,
        BlockIcon::Clock,
        BlockIcon::Star,
        BlockIcon::Heart,
    ];

    fn entry(self) -> &'static IconEntry {
        &ICON_TABLE[self as usize]
    }

    /// The variant name, e.g. `"CreditCard"`.
    pub fn name(self) -> &'static str {
        self.entry().name
    }

    /// Outline icon asset rendered for this variant.
    pub fn asset(self) -> &'static str {
        self.entry().asset
    }

    pub fn accent(self) -> AccentColor {
        self.entry().accent
    }

    /// Parses a variant name. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        ICON_TABLE
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.icon)
    }
}

impl Display for BlockIcon {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown block icon `{0}`")]
pub struct UnknownIcon(pub String);

impl FromStr for BlockIcon {
    type Err = UnknownIcon;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::from_name(value).ok_or_else(|| UnknownIcon(value.to_string()))
    }
}
