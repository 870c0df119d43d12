//! # Amenity Catalog
//!
//! Static list of hotel amenities and the categories that group them.
//! Icons are named after the icon families the property's branding uses and
//! resolved to a terminal glyph through [`Icon::glyph`].

/// Icon reference tagged by family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Feather(&'static str),
    Ionicons(&'static str),
    MaterialCommunity(&'static str),
}

/// Shown for any icon name missing from the table.
pub const FALLBACK_GLYPH: &str = "?";

const FEATHER_GLYPHS: &[(&str, &str)] = &[
    ("activity", "♥"),
    ("anchor", "⚓"),
    ("bell", "🔔"),
    ("cloud-snow", "❄"),
    ("coffee", "☕"),
    ("droplet", "💧"),
    ("home", "⌂"),
    ("monitor", "▣"),
    ("music", "♫"),
    ("sun", "☀"),
    ("thermometer", "🌡"),
    ("tool", "🔧"),
    ("tv", "📺"),
    ("users", "👥"),
    ("wifi", "📶"),
    ("wind", "≋"),
    ("zap", "⚡"),
];

const IONICONS_GLYPHS: &[(&str, &str)] = &[
    ("snow-outline", "❄"),
    ("sunny-outline", "☀"),
    ("ticket-outline", "🎟"),
];

const MATERIAL_COMMUNITY_GLYPHS: &[(&str, &str)] = &[("campfire", "🔥"), ("grill", "♨")];

impl Icon {
    pub fn name(self) -> &'static str {
        match self {
            Icon::Feather(name) | Icon::Ionicons(name) | Icon::MaterialCommunity(name) => name,
        }
    }

    pub fn glyph(self) -> &'static str {
        let table = match self {
            Icon::Feather(_) => FEATHER_GLYPHS,
            Icon::Ionicons(_) => IONICONS_GLYPHS,
            Icon::MaterialCommunity(_) => MATERIAL_COMMUNITY_GLYPHS,
        };
        table
            .iter()
            .find(|(name, _)| *name == self.name())
            .map(|(_, glyph)| *glyph)
            .unwrap_or(FALLBACK_GLYPH)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amenity {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub hours: &'static str,
    pub location: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub title: &'static str,
    pub amenities: &'static [&'static str],
    pub icon: Icon,
}

pub const AMENITIES: &[Amenity] = &[
    Amenity {
        id: "sauna",
        title: "Lakeside Sauna",
        description: "Traditional wood-heated sauna with panoramic windows overlooking Lake Syväjärvi. Includes outdoor shower (summer) and ice swimming access.",
        hours: "Available during stay (advance booking recommended)",
        location: "Separate lakeside sauna building",
        icon: Icon::Feather("sun"),
    },
    Amenity {
        id: "beach",
        title: "Private Beach & Water Equipment",
        description: "Sandy beach with kayaks, SUP boards, rowing boat, and swimming gear. Seasonal flotation vests and aqua jogging belts provided.",
        hours: "Daylight hours (summer)",
        location: "Shared lakeshore area",
        icon: Icon::Feather("anchor"),
    },
    Amenity {
        id: "kitchen",
        title: "Fully Equipped Kitchen",
        description: "Modern kitchens with induction cooktops, air fryers, Nespresso machines, and full cookware.",
        hours: "Accessible 24/7",
        location: "In each cottage",
        icon: Icon::Feather("coffee"),
    },
    Amenity {
        id: "fitness",
        title: "Fitness Area",
        description: "Exercise equipment for strength and cardio training.",
        hours: "Accessible 24/7",
        location: "Service building",
        icon: Icon::Feather("activity"),
    },
    Amenity {
        id: "laundry",
        title: "Laundry Facilities",
        description: "Washers and dryers available for guest use.",
        hours: "Accessible 24/7",
        location: "Service building",
        icon: Icon::Feather("wind"),
    },
    Amenity {
        id: "kota",
        title: "Outdoor Kota Kitchen",
        description: "Traditional Finnish grill hut for open-fire cooking.",
        hours: "Daylight hours",
        location: "Lakeside outdoor area",
        icon: Icon::MaterialCommunity("campfire"),
    },
    Amenity {
        id: "charging",
        title: "Electric Vehicle Charging",
        description: "2x Type2 (11kW) and 2x 16A super-schuko charging points.",
        hours: "24/7",
        location: "Illuminated parking area",
        icon: Icon::Feather("zap"),
    },
    Amenity {
        id: "wifi",
        title: "High-Speed WiFi",
        description: "400M mesh network covering all cottages and common areas.",
        hours: "24/7",
        location: "Entire property",
        icon: Icon::Feather("wifi"),
    },
    Amenity {
        id: "terraces",
        title: "Panoramic Terraces",
        description: "Private glass-railed terraces with heaters (select cottages).",
        hours: "Accessible anytime",
        location: "Attached to each cottage",
        icon: Icon::Feather("droplet"),
    },
    Amenity {
        id: "ski",
        title: "Ski Lift Access",
        description: "Two complimentary lift tickets per stay included.",
        hours: "During Ukkohalla Ski Resort operations",
        location: "Adjacent ski slopes",
        icon: Icon::Ionicons("snow-outline"),
    },
    Amenity {
        id: "entertainment",
        title: "In-Cottage Entertainment",
        description: "4K QLED Smart TVs with Netflix and Amazon Prime subscriptions.",
        hours: "Accessible anytime",
        location: "Living area of each cottage",
        icon: Icon::Feather("tv"),
    },
    Amenity {
        id: "climate",
        title: "Air Conditioning/Heat Pump",
        description: "Climate control systems for year-round comfort.",
        hours: "24/7",
        location: "In each cottage",
        icon: Icon::Feather("thermometer"),
    },
    Amenity {
        id: "service",
        title: "Shared Service Building",
        description: "Includes additional toilet, small kitchen, and coffee facilities.",
        hours: "Accessible 24/7",
        location: "Central property area",
        icon: Icon::Feather("home"),
    },
    Amenity {
        id: "grill",
        title: "Weber Gas Grill",
        description: "Outdoor grilling station for communal use.",
        hours: "Daylight hours",
        location: "Lakeside outdoor area",
        icon: Icon::MaterialCommunity("grill"),
    },
    Amenity {
        id: "tickets",
        title: "Complimentary Ski Tickets",
        description: "Two daily lift passes included with winter bookings.",
        hours: "Ski resort operating hours",
        location: "Ukkohalla Ski Resort reception",
        icon: Icon::Ionicons("ticket-outline"),
    },
];

pub const CATEGORIES: &[Category] = &[
    Category {
        id: "wellness",
        title: "Wellness & Recreation",
        amenities: &["sauna", "beach", "fitness"],
        icon: Icon::Feather("anchor"),
    },
    Category {
        id: "comfort",
        title: "Comfort & Convenience",
        amenities: &["kitchen", "laundry", "service", "climate"],
        icon: Icon::Feather("home"),
    },
    Category {
        id: "outdoor",
        title: "Outdoor Activities",
        amenities: &["kota", "grill", "ski", "tickets", "terraces"],
        icon: Icon::Ionicons("sunny-outline"),
    },
    Category {
        id: "tech",
        title: "Technology & Entertainment",
        amenities: &["wifi", "entertainment", "charging"],
        icon: Icon::Feather("monitor"),
    },
];

/// Category expanded when the info page first opens.
pub const DEFAULT_CATEGORY: &str = "wellness";

pub fn amenity(id: &str) -> Option<&'static Amenity> {
    AMENITIES.iter().find(|a| a.id == id)
}

impl Category {
    /// Amenities in display order. Unknown ids are skipped.
    pub fn members(&self) -> impl Iterator<Item = &'static Amenity> + '_ {
        self.amenities.iter().filter_map(|id| amenity(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_member_exists() {
        for category in CATEGORIES {
            assert_eq!(
                category.members().count(),
                category.amenities.len(),
                "category {} references a missing amenity",
                category.id
            );
        }
    }

    #[test]
    fn test_every_catalog_icon_has_a_glyph() {
        let icons = AMENITIES
            .iter()
            .map(|a| a.icon)
            .chain(CATEGORIES.iter().map(|c| c.icon));
        for icon in icons {
            assert_ne!(icon.glyph(), FALLBACK_GLYPH, "no glyph for {:?}", icon);
        }
    }

    #[test]
    fn test_unknown_icon_uses_fallback() {
        assert_eq!(Icon::Feather("help-circle").glyph(), FALLBACK_GLYPH);
        // Same name in another family doesn't match
        assert_eq!(Icon::Ionicons("coffee").glyph(), FALLBACK_GLYPH);
    }

    #[test]
    fn test_default_category_is_in_catalog() {
        assert!(CATEGORIES.iter().any(|c| c.id == DEFAULT_CATEGORY));
    }

    #[test]
    fn test_amenity_lookup() {
        assert_eq!(amenity("kota").map(|a| a.title), Some("Outdoor Kota Kitchen"));
        assert!(amenity("spa").is_none());
    }
}
