use serde::{Deserialize, Serialize};

/// The page's top-level sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionId {
    Hero,
    About,
    Experience,
    Work,
    Skills,
    Hobbies,
    Musings,
    Contact,
}

impl SectionId {
    /// All sections in document order.
    pub const ALL: [SectionId; 8] = [
        SectionId::Hero,
        SectionId::About,
        SectionId::Experience,
        SectionId::Work,
        SectionId::Skills,
        SectionId::Hobbies,
        SectionId::Musings,
        SectionId::Contact,
    ];

    /// Stable anchor identifier, used as region id and group id.
    pub fn anchor(self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::About => "about",
            SectionId::Experience => "experience",
            SectionId::Work => "work",
            SectionId::Skills => "skills",
            SectionId::Hobbies => "hobbies",
            SectionId::Musings => "musings",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_anchor(anchor: &str) -> Option<SectionId> {
        SectionId::ALL.into_iter().find(|s| s.anchor() == anchor)
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.anchor())
    }
}

/// A navbar entry pointing at a section anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub section: SectionId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_round_trip() {
        for section in SectionId::ALL {
            assert_eq!(SectionId::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(SectionId::from_anchor("resume"), None);
    }
}
