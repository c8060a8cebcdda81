use serde::Deserialize;

/// Response body of `POST /upload`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Bundle {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub content_analysis: Option<ContentAnalysis>,
    #[serde(default)]
    pub all_materials: Option<Materials>,
}

impl Bundle {
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("error")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ContentType {
    Narrative,
    Process,
    Structure,
    Concept,
    Mixed,
    #[serde(other)]
    Unknown,
}

impl ContentType {
    pub fn label(self) -> &'static str {
        match self {
            ContentType::Narrative => "NARRATIVE",
            ContentType::Process => "PROCESS",
            ContentType::Structure => "STRUCTURE",
            ContentType::Concept => "CONCEPT",
            ContentType::Mixed => "MIXED",
            ContentType::Unknown => "UNKNOWN",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentAnalysis {
    pub primary_type: ContentType,
    #[serde(default)]
    pub confidence: f32,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub secondary_types: Vec<ContentType>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Materials {
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub study_guide: StudyGuide,
    #[serde(default)]
    pub flashcards: Vec<Flashcard>,
    #[serde(default)]
    pub test: Test,
    #[serde(default)]
    pub markdown: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub total_characters: u64,
    #[serde(default)]
    pub total_events: u64,
    #[serde(default)]
    pub total_flashcards: u64,
    #[serde(default)]
    pub total_questions: u64,
    #[serde(default)]
    pub total_locations: Option<u64>,
    #[serde(default)]
    pub processing_time: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudyGuide {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Characters,
    Timeline,
    Locations,
    Objects,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Section {
    #[serde(rename = "type")]
    pub kind: SectionKind,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Item {
    pub name: Option<String>,
    pub role: Option<String>,
    pub description: Option<String>,
    pub participants: Option<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Flashcard {
    pub front: String,
    pub back: String,
    #[serde(default)]
    pub hint: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Test {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Choice,
    TrueFalse,
    Matching,
    #[serde(other)]
    Unknown,
}

/// Correct answer as sent by the service: an option index for choice
/// questions, a boolean for true/false ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AnswerKey {
    Option(usize),
    Bool(bool),
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingPair {
    #[serde(default)]
    pub character: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: QuestionKind,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub correct: Option<AnswerKey>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default)]
    pub pairs: Vec<MatchingPair>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Upload,
    Materials,
    GameFormats,
}

#[derive(Debug)]
pub enum UploadRequest {
    Submit { seq: u64, path: std::path::PathBuf },
}

#[derive(Debug)]
pub enum UploadResponse {
    Done { seq: u64, bundle: Box<Bundle> },
    Failed { seq: u64, error: crate::upload::UploadError },
}
