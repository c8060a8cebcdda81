use crate::models::{ContentType, SectionKind};

pub const DEFAULT_SECTION_ICON: &str = "☰";
pub const DEFAULT_ITEM_ICON: &str = "•";

impl SectionKind {
    pub fn icon(self) -> &'static str {
        match self {
            SectionKind::Characters => "👤",
            SectionKind::Timeline => "⏳",
            SectionKind::Locations => "📍",
            SectionKind::Objects => "📦",
            SectionKind::Other => DEFAULT_SECTION_ICON,
        }
    }

    pub fn item_icon(self) -> &'static str {
        match self {
            SectionKind::Characters => "◉",
            SectionKind::Timeline => "◷",
            SectionKind::Locations => "⌖",
            SectionKind::Objects => "▣",
            SectionKind::Other => DEFAULT_ITEM_ICON,
        }
    }
}

impl ContentType {
    /// Heading and feature list of the game format suggested for this kind
    /// of material.
    pub fn game_format(self) -> (&'static str, &'static [&'static str]) {
        match self {
            ContentType::Narrative => (
                "Visual novel",
                &[
                    "Plot with characters",
                    "Dialogues and choices",
                    "Event timeline",
                    "Historical locations",
                ],
            ),
            ContentType::Process => (
                "Algorithm simulator",
                &[
                    "Step-by-step execution",
                    "Branches and conditions",
                    "Process visualisation",
                    "Mistakes and consequences",
                ],
            ),
            ContentType::Structure => (
                "Interactive builder",
                &[
                    "Assembly from parts",
                    "Layered structure",
                    "3D modelling",
                    "Build testing",
                ],
            ),
            ContentType::Concept => (
                "Concept-map quest",
                &[
                    "Finding connections",
                    "Logical chains",
                    "Decision tree",
                    "Theories and hypotheses",
                ],
            ),
            ContentType::Mixed => (
                "Combined course",
                &[
                    "Adaptive chapters",
                    "Different formats",
                    "Learning progress",
                    "Game mechanics",
                ],
            ),
            ContentType::Unknown => ("No suggestion", &[]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_section_uses_defaults() {
        assert_eq!(SectionKind::Other.icon(), DEFAULT_SECTION_ICON);
        assert_eq!(SectionKind::Other.item_icon(), DEFAULT_ITEM_ICON);
    }

    #[test]
    fn test_known_sections_have_own_icons() {
        for kind in [
            SectionKind::Characters,
            SectionKind::Timeline,
            SectionKind::Locations,
            SectionKind::Objects,
        ] {
            assert_ne!(kind.icon(), DEFAULT_SECTION_ICON);
            assert_ne!(kind.item_icon(), DEFAULT_ITEM_ICON);
        }
    }

    #[test]
    fn test_every_known_content_type_has_a_format() {
        for kind in [
            ContentType::Narrative,
            ContentType::Process,
            ContentType::Structure,
            ContentType::Concept,
            ContentType::Mixed,
        ] {
            let (title, features) = kind.game_format();
            assert!(!title.is_empty());
            assert_eq!(features.len(), 4);
        }
        assert!(ContentType::Unknown.game_format().1.is_empty());
    }
}
