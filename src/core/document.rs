//! Structure of the landing document, independent of locale.
//!
//! Section order and fragment anchors live here so both locale variants
//! render the same skeleton and bookmarks resolve identically.

/// Id of the element in the hosting document the app mounts into
pub const MOUNT_TARGET_ID: &str = "root";

/// External link targets, baked into the bundle at build time
pub mod links {
    pub const GITHUB_URL: &str = match option_env!("BRIDGE_GITHUB_URL") {
        Some(url) => url,
        None => "#",
    };

    pub const DOCS_URL: &str = match option_env!("BRIDGE_DOCS_URL") {
        Some(url) => url,
        None => "#",
    };

    pub const PLUGIN_DOWNLOAD_URL: &str = match option_env!("BRIDGE_PLUGIN_URL") {
        Some(url) => url,
        None => "#",
    };
}

/// In-page fragment identifiers
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Features,
    CaseStudy,
    Roi,
    Manifesto,
    Download,
    Master,
}

impl Anchor {
    pub const ALL: [Anchor; 6] = [
        Anchor::Features,
        Anchor::CaseStudy,
        Anchor::Roi,
        Anchor::Manifesto,
        Anchor::Download,
        Anchor::Master,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Anchor::Features => "features",
            Anchor::CaseStudy => "case-study",
            Anchor::Roi => "roi",
            Anchor::Manifesto => "manifesto",
            Anchor::Download => "download",
            Anchor::Master => "master",
        }
    }

    /// `href` value for links pointing at this anchor
    pub fn href(&self) -> &'static str {
        match self {
            Anchor::Features => "#features",
            Anchor::CaseStudy => "#case-study",
            Anchor::Roi => "#roi",
            Anchor::Manifesto => "#manifesto",
            Anchor::Download => "#download",
            Anchor::Master => "#master",
        }
    }
}

/// Landing sections in document order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectionKind {
    Navigation,
    Hero,
    Problem,
    Solution,
    Testimonial,
    Manifesto,
    Statistics,
    DevelopmentStory,
    DualCta,
    Footer,
}

impl SectionKind {
    /// Anchor carried by the section element itself
    pub fn anchor(&self) -> Option<Anchor> {
        match self {
            SectionKind::Solution => Some(Anchor::Features),
            SectionKind::Testimonial => Some(Anchor::CaseStudy),
            SectionKind::Manifesto => Some(Anchor::Manifesto),
            SectionKind::Statistics => Some(Anchor::Roi),
            SectionKind::DualCta => Some(Anchor::Download),
            _ => None,
        }
    }

    /// Anchors carried by nested blocks inside the section
    pub fn nested_anchors(&self) -> &'static [Anchor] {
        match self {
            SectionKind::DualCta => &[Anchor::Master],
            _ => &[],
        }
    }
}

pub const SECTION_ORDER: [SectionKind; 10] = [
    SectionKind::Navigation,
    SectionKind::Hero,
    SectionKind::Problem,
    SectionKind::Solution,
    SectionKind::Testimonial,
    SectionKind::Manifesto,
    SectionKind::Statistics,
    SectionKind::DevelopmentStory,
    SectionKind::DualCta,
    SectionKind::Footer,
];

/// Navigation entry: target anchor and the message key of its label
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub anchor: Anchor,
    pub label: &'static str,
}

/// Desktop navigation bar links
pub const DESKTOP_NAV: [NavLink; 3] = [
    NavLink { anchor: Anchor::Features, label: "nav-features" },
    NavLink { anchor: Anchor::CaseStudy, label: "nav-case-study" },
    NavLink { anchor: Anchor::Manifesto, label: "nav-benefits" },
];

/// Mobile menu links (the last one is styled as the call to action)
pub const MOBILE_NAV: [NavLink; 5] = [
    NavLink { anchor: Anchor::Features, label: "nav-features" },
    NavLink { anchor: Anchor::CaseStudy, label: "nav-case-study" },
    NavLink { anchor: Anchor::Roi, label: "nav-roi" },
    NavLink { anchor: Anchor::Master, label: "nav-master" },
    NavLink { anchor: Anchor::Download, label: "nav-get-plugin" },
];

/// Every anchor some element in the document carries, in document order
pub fn document_anchors() -> Vec<Anchor> {
    SECTION_ORDER
        .iter()
        .flat_map(|section| {
            section
                .anchor()
                .into_iter()
                .chain(section.nested_anchors().iter().copied())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_order() {
        assert_eq!(SECTION_ORDER.len(), 10);
        assert_eq!(SECTION_ORDER[0], SectionKind::Navigation);
        assert_eq!(SECTION_ORDER[9], SectionKind::Footer);
    }

    #[test]
    fn test_href_matches_id() {
        for anchor in Anchor::ALL {
            assert_eq!(anchor.href(), format!("#{}", anchor.id()));
        }
    }

    #[test]
    fn test_every_anchor_is_carried_once() {
        let anchors = document_anchors();
        assert_eq!(anchors.len(), Anchor::ALL.len());
        for anchor in Anchor::ALL {
            assert_eq!(anchors.iter().filter(|a| **a == anchor).count(), 1);
        }
    }

    #[test]
    fn test_nav_targets_exist() {
        let anchors = document_anchors();
        for link in DESKTOP_NAV.iter().chain(MOBILE_NAV.iter()) {
            assert!(anchors.contains(&link.anchor), "{:?}", link.anchor);
        }
    }

    #[test]
    fn test_master_nested_in_download() {
        assert_eq!(SectionKind::DualCta.anchor(), Some(Anchor::Download));
        assert_eq!(SectionKind::DualCta.nested_anchors(), &[Anchor::Master]);
    }
}
