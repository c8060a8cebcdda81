//! Pure transform of a [`Bundle`] into the view tree the draw functions
//! consume. Nothing here touches the terminal.

use crate::flashcards::CardView;
use crate::models::{Bundle, ContentAnalysis, ContentType, Item, Question, QuestionKind, Section};
use crate::quiz::{QuestionBody, QuestionView};

pub const PARTICIPANT_SEPARATOR: &str = ", ";
pub const MISSING_MATERIALS: &str = "Materials were not created. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Guide,
    Cards,
    Test,
    Export,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Guide, Tab::Cards, Tab::Test, Tab::Export];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Guide => "Guide",
            Tab::Cards => "Cards",
            Tab::Test => "Test",
            Tab::Export => "Export",
        }
    }

    pub fn index(self) -> usize {
        Tab::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Tab {
        Tab::ALL[(self.index() + 1) % Tab::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Tab::ALL[(self.index() + Tab::ALL.len() - 1) % Tab::ALL.len()]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum MaterialView {
    /// The service answered without `all_materials`.
    Missing,
    Ready(Box<ReadyView>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadyView {
    pub stats: Vec<StatView>,
    pub analysis: Option<AnalysisView>,
    pub guide: GuideView,
    pub cards: Vec<CardView>,
    pub test: TestView,
    pub markdown: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatView {
    pub value: String,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisView {
    pub primary: ContentType,
    pub confidence_percent: u32,
    pub reason: String,
    pub secondary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideView {
    pub title: String,
    pub created_at: String,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub icon: &'static str,
    pub title: String,
    pub items: Vec<ItemView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemView {
    pub icon: &'static str,
    pub name: Option<String>,
    pub role: Option<String>,
    pub description: Option<String>,
    pub participants: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestView {
    pub title: String,
    pub description: String,
    pub questions: Vec<QuestionView>,
}

pub fn render(bundle: &Bundle) -> MaterialView {
    let Some(m) = &bundle.all_materials else {
        return MaterialView::Missing;
    };

    let mut stats: Vec<StatView> = [
        (m.stats.total_characters, "characters"),
        (m.stats.total_events, "events"),
        (m.stats.total_flashcards, "cards"),
        (m.stats.total_questions, "questions"),
    ]
    .into_iter()
    .chain(m.stats.total_locations.map(|n| (n, "locations")))
    .map(|(value, label)| StatView {
        value: value.to_string(),
        label,
    })
    .collect();
    if let Some(time) = m.stats.processing_time.clone().filter(|t| !t.is_empty()) {
        stats.push(StatView {
            value: time,
            label: "processed",
        });
    }

    MaterialView::Ready(Box::new(ReadyView {
        stats,
        analysis: bundle.content_analysis.as_ref().map(render_analysis),
        guide: GuideView {
            title: m.study_guide.title.clone(),
            created_at: m.study_guide.created_at.clone(),
            sections: m.study_guide.sections.iter().map(render_section).collect(),
        },
        cards: m
            .flashcards
            .iter()
            .map(|c| CardView {
                front: c.front.clone(),
                back: c.back.clone(),
                hint: c.hint.clone().filter(|h| !h.is_empty()),
            })
            .collect(),
        test: TestView {
            title: m.test.title.clone(),
            description: m.test.description.clone(),
            questions: m
                .test
                .questions
                .iter()
                .enumerate()
                .map(|(i, q)| render_question(i, q))
                .collect(),
        },
        markdown: m.markdown.clone(),
    }))
}

fn render_analysis(analysis: &ContentAnalysis) -> AnalysisView {
    let secondary = if analysis.secondary_types.is_empty() {
        None
    } else {
        Some(
            analysis
                .secondary_types
                .iter()
                .map(|t| t.label())
                .collect::<Vec<_>>()
                .join(", "),
        )
    };

    AnalysisView {
        primary: analysis.primary_type,
        confidence_percent: (analysis.confidence.clamp(0.0, 1.0) * 100.0).round() as u32,
        reason: analysis.reason.clone(),
        secondary,
    }
}

fn render_section(section: &Section) -> SectionView {
    SectionView {
        icon: section.kind.icon(),
        title: section.title.clone(),
        items: section
            .items
            .iter()
            .map(|item| render_item(section.kind.item_icon(), item))
            .collect(),
    }
}

fn render_item(icon: &'static str, item: &Item) -> ItemView {
    let present = |s: &Option<String>| s.clone().filter(|v| !v.is_empty());
    ItemView {
        icon,
        name: present(&item.name),
        role: present(&item.role),
        description: present(&item.description),
        participants: item
            .participants
            .as_ref()
            .map(|p| p.join(PARTICIPANT_SEPARATOR)),
    }
}

fn render_question(index: usize, question: &Question) -> QuestionView {
    let body = match question.kind {
        QuestionKind::Choice => QuestionBody::Choice {
            options: question.options.clone(),
        },
        QuestionKind::TrueFalse => QuestionBody::TrueFalse,
        QuestionKind::Matching => QuestionBody::Matching {
            pairs: question
                .pairs
                .iter()
                .map(|p| {
                    (
                        p.character.clone().unwrap_or_default(),
                        p.description.clone().unwrap_or_default(),
                    )
                })
                .collect(),
        },
        QuestionKind::Unknown => QuestionBody::PromptOnly,
    };

    QuestionView {
        number: index + 1,
        text: question.text.clone(),
        body,
        key: question.correct,
        explanation: question.explanation.clone().filter(|e| !e.is_empty()),
    }
}
