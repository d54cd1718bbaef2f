//! Static page content. Everything here is constructed once and never
//! mutated; the view transforms read it directly.

pub mod contact;
pub mod experiences;
pub mod hobbies;
pub mod musings;
pub mod projects;
pub mod tech_stack;

use crate::model::{NavLink, SectionId};

pub const NAME: &str = "Aryan Sarswat";
pub const TAGLINE: &str = "ML Scientist | Gym Rat | Adrenaline Junkie";
pub const RESUME_HREF: &str = "/aryan/resume.pdf";

/// Navbar entries. Musings is reachable by scrolling but intentionally
/// absent from the nav, matching the page design.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        name: "About",
        section: SectionId::About,
    },
    NavLink {
        name: "Experience",
        section: SectionId::Experience,
    },
    NavLink {
        name: "Work",
        section: SectionId::Work,
    },
    NavLink {
        name: "Skills",
        section: SectionId::Skills,
    },
    NavLink {
        name: "Hobbies",
        section: SectionId::Hobbies,
    },
    NavLink {
        name: "Contact",
        section: SectionId::Contact,
    },
];
