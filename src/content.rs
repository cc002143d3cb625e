//! Static landing page copy and section metadata

/// Index of the contact section in [`SECTIONS`]
pub const CONTACT_SECTION: usize = 3;

/// One landing page section: anchor id, nav label, heading and body copy.
pub struct SectionSpec {
    pub id: &'static str,
    pub nav_label: &'static str,
    pub heading: &'static str,
    pub body: &'static [&'static str],
}

/// Landing page sections in document order
pub const SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        id: "home",
        nav_label: "Home",
        heading: "TECHFEST",
        body: &[
            "Asia's largest science and technology festival.",
            "",
            "Three days of competitions, exhibitions and lectures",
            "hosted every winter on the IIT Bombay campus.",
            "",
            "Scroll down or use the menu to explore.",
        ],
    },
    SectionSpec {
        id: "about",
        nav_label: "About",
        heading: "About the Festival",
        body: &[
            "Techfest brings together students, researchers and industry",
            "professionals from across the world. What started as a",
            "campus event has grown into an international platform for",
            "showcasing innovation in science and engineering.",
            "",
            "Competitions span robotics, coding, design and aeromodelling,",
            "with workshops and keynotes running alongside.",
        ],
    },
    SectionSpec {
        id: "highlights",
        nav_label: "Highlights",
        heading: "Highlights",
        body: &[
            "* Robowars         - combat robotics in a bulletproof arena",
            "* Technoholix      - night-time shows and performances",
            "* Exhibitions      - global tech showcased on campus",
            "* Lecture series   - Nobel laureates and industry leaders",
            "* Competitions     - prize pool across 25+ events",
        ],
    },
    SectionSpec {
        id: "contact",
        nav_label: "Contact",
        heading: "Get in Touch",
        body: &[
            "Questions about registration, sponsorship or campus visits?",
            "Fill out the form below and a team member will get back to you.",
        ],
    },
];

/// Vertical extent of a rendered section within the composed document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionExtent {
    pub id: &'static str,
    /// First document row of the section
    pub top: u16,
    /// Number of rows the section occupies
    pub height: u16,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_sections_in_order() {
        let ids: Vec<&str> = SECTIONS.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec!["home", "about", "highlights", "contact"]);
    }

    #[test]
    fn test_contact_section_index() {
        assert_eq!(SECTIONS[CONTACT_SECTION].id, "contact");
    }

    #[test]
    fn test_nav_labels_are_nonempty() {
        for section in SECTIONS {
            assert!(!section.nav_label.is_empty());
            assert!(!section.heading.is_empty());
        }
    }
}
