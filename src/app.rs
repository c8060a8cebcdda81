use crate::export;
use crate::flashcards::{Difficulty, FlashcardNavigator};
use crate::logger;
use crate::models::{AppState, ContentType, UploadRequest, UploadResponse};
use crate::notify::{Notification, Notifier, Severity};
use crate::quiz::QuizEvaluator;
use crate::render::{self, MaterialView, ReadyView, Tab};
use crate::upload::validate_pdf;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;

/// Interaction state attached to one rendered bundle. Replaced as a whole on
/// the next successful upload.
#[derive(Debug)]
pub struct MaterialsSession {
    pub view: Box<ReadyView>,
    pub tab: Tab,
    pub navigator: FlashcardNavigator,
    pub quiz: QuizEvaluator,
    pub guide_scroll: u16,
    pub export_scroll: u16,
    pub export_preview: bool,
}

impl MaterialsSession {
    pub fn new(view: Box<ReadyView>) -> Self {
        let navigator = FlashcardNavigator::new(view.cards.clone());
        let quiz = QuizEvaluator::new(view.test.questions.clone());
        Self {
            view,
            tab: Tab::Guide,
            navigator,
            quiz,
            guide_scroll: 0,
            export_scroll: 0,
            export_preview: false,
        }
    }

    pub fn show_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn is_tab_visible(&self, tab: Tab) -> bool {
        self.tab == tab
    }
}

#[derive(Debug)]
pub enum Results {
    Missing,
    Ready(MaterialsSession),
}

pub struct App {
    pub state: AppState,
    pub path_input: String,
    pub cursor_position: usize,
    pub loading: bool,
    pub loading_file: Option<String>,
    pub results: Option<Results>,
    pub notifier: Notifier,
    pub save_dir: PathBuf,
    pub should_quit: bool,
    latest_seq: u64,
    upload_tx: Option<Sender<UploadRequest>>,
}

impl App {
    pub fn new(save_dir: PathBuf, upload_tx: Option<Sender<UploadRequest>>) -> Self {
        Self {
            state: AppState::Upload,
            path_input: String::new(),
            cursor_position: 0,
            loading: false,
            loading_file: None,
            results: None,
            notifier: Notifier::default(),
            save_dir,
            should_quit: false,
            latest_seq: 0,
            upload_tx,
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        self.notifier.notify(Notification::new(message, severity));
    }

    /// Validates the path and hands it to the upload worker. A file without
    /// the `.pdf` extension is rejected here and never reaches the network.
    pub fn start_upload(&mut self, path: &Path) {
        if let Err(e) = validate_pdf(path) {
            logger::log(&format!("Rejected upload: {}", e));
            self.notify(e.to_string(), Severity::Error);
            return;
        }

        let Some(tx) = self.upload_tx.clone() else {
            self.notify("Upload worker is not running", Severity::Error);
            return;
        };

        self.latest_seq += 1;
        let seq = self.latest_seq;
        logger::log(&format!("Dispatching upload #{} for {}", seq, path.display()));

        if tx
            .send(UploadRequest::Submit {
                seq,
                path: path.to_path_buf(),
            })
            .is_err()
        {
            self.loading = false;
            self.loading_file = None;
            self.notify("Upload worker stopped", Severity::Error);
            return;
        }

        self.loading = true;
        self.loading_file = Some(path.display().to_string());
        self.state = AppState::Upload;
    }

    /// Applies a worker response. Only the most recently dispatched upload
    /// may change what is shown.
    pub fn handle_upload_response(&mut self, response: UploadResponse) {
        let seq = match &response {
            UploadResponse::Done { seq, .. } | UploadResponse::Failed { seq, .. } => *seq,
        };
        if seq != self.latest_seq {
            logger::log(&format!(
                "Dropping stale upload #{} (latest is #{})",
                seq, self.latest_seq
            ));
            return;
        }

        self.loading = false;
        self.loading_file = None;

        match response {
            UploadResponse::Done { bundle, .. } => {
                self.results = Some(match render::render(&bundle) {
                    MaterialView::Missing => {
                        logger::log("Upload succeeded without materials");
                        Results::Missing
                    }
                    MaterialView::Ready(view) => Results::Ready(MaterialsSession::new(view)),
                });
                self.path_input.clear();
                self.cursor_position = 0;
                self.state = AppState::Materials;
                self.notify("File processed by AI!", Severity::Success);
            }
            UploadResponse::Failed { error, .. } => {
                self.notifier
                    .notify(Notification::error(format!("Error: {}", error)));
            }
        }
    }

    pub fn results_visible(&self) -> bool {
        !self.loading && self.results.is_some() && self.state != AppState::Upload
    }

    pub fn session_mut(&mut self) -> Option<&mut MaterialsSession> {
        match &mut self.results {
            Some(Results::Ready(session)) => Some(session),
            _ => None,
        }
    }

    pub fn session(&self) -> Option<&MaterialsSession> {
        match &self.results {
            Some(Results::Ready(session)) => Some(session),
            _ => None,
        }
    }

    pub fn primary_content_type(&self) -> Option<ContentType> {
        self.session()
            .and_then(|s| s.view.analysis.as_ref())
            .map(|a| a.primary)
    }

    pub fn rate_current_card(&mut self, level: u8) {
        let Some(difficulty) = Difficulty::from_level(level) else {
            return;
        };
        let Some(session) = self.session_mut() else {
            return;
        };
        let cursor = session.navigator.cursor();
        if session.navigator.is_empty() {
            return;
        }
        let note = session.navigator.rate(cursor, difficulty);
        self.notifier.notify(note);
    }

    pub fn submit_test(&mut self) {
        let Some(session) = self.session_mut() else {
            return;
        };
        let score = session.quiz.submit();
        logger::log(&format!("Test submitted: {}/{}", score.correct, score.total));
        self.notify(
            format!("Result: {} of {} correct", score.correct, score.total),
            Severity::Success,
        );
    }

    fn export_text(&self) -> Option<String> {
        self.session().map(|s| s.view.markdown.clone())
    }

    pub fn copy_export<W: Write>(&mut self, out: &mut W) {
        let Some(text) = self.export_text() else {
            return;
        };
        match export::copy(out, &text) {
            Ok(()) => {
                logger::log(&format!("Copied {} bytes of markdown", text.len()));
                self.notify("Markdown copied to clipboard!", Severity::Success);
            }
            Err(e) => {
                logger::log(&format!("Copy failed: {}", e));
                self.notify(format!("Copy failed: {}", e), Severity::Error);
            }
        }
    }

    pub fn download_export(&mut self) {
        let Some(text) = self.export_text() else {
            return;
        };
        match export::download(&text, &self.save_dir) {
            Ok(path) => {
                logger::log(&format!(
                    "Saved {} export to {}",
                    export::EXPORT_MIME,
                    path.display()
                ));
                self.notify(format!("File saved: {}", path.display()), Severity::Success);
            }
            Err(e) => {
                logger::log(&format!("Save failed: {}", e));
                self.notify(format!("Save failed: {}", e), Severity::Error);
            }
        }
    }

    pub fn print_export(&mut self) {
        let Some(text) = self.export_text() else {
            return;
        };
        match export::print(&text) {
            Ok(path) => {
                logger::log(&format!("Opened print view {}", path.display()));
                self.notify("Print view opened in browser", Severity::Info);
            }
            Err(e) => {
                logger::log(&format!("Print failed: {}", e));
                self.notify(format!("Print failed: {}", e), Severity::Error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Bundle;
    use crate::upload::UploadError;
    use std::sync::mpsc::{self, Receiver};

    fn app() -> (App, Receiver<UploadRequest>) {
        let (tx, rx) = mpsc::channel();
        (App::new(PathBuf::from("."), Some(tx)), rx)
    }

    fn bundle(json: serde_json::Value) -> Box<Bundle> {
        Box::new(serde_json::from_value(json).unwrap())
    }

    fn ready_bundle() -> Box<Bundle> {
        bundle(serde_json::json!({
            "status": "success",
            "all_materials": {
                "flashcards": [{"front": "a", "back": "b"}, {"front": "c", "back": "d"}],
                "test": {"title": "T", "description": "", "questions": [
                    {"type": "choice", "text": "q", "options": ["x", "y"], "correct": 1}
                ]},
                "markdown": "# md\nline two ✓"
            }
        }))
    }

    fn dispatched_seq(rx: &Receiver<UploadRequest>) -> u64 {
        match rx.try_recv().unwrap() {
            UploadRequest::Submit { seq, .. } => seq,
        }
    }

    #[test]
    fn test_non_pdf_is_rejected_without_request() {
        let (mut app, rx) = app();
        app.start_upload(Path::new("notes.txt"));
        assert!(rx.try_recv().is_err());
        assert!(!app.loading);
        let note = app.notifier.current().unwrap();
        assert_eq!(note.severity, Severity::Error);
    }

    #[test]
    fn test_success_renders_materials_with_guide_tab() {
        let (mut app, rx) = app();
        app.start_upload(Path::new("book.pdf"));
        assert!(app.loading);
        assert!(!app.results_visible());
        let seq = dispatched_seq(&rx);

        app.handle_upload_response(UploadResponse::Done {
            seq,
            bundle: ready_bundle(),
        });

        assert!(!app.loading);
        assert!(app.results_visible());
        assert_eq!(app.state, AppState::Materials);
        let session = app.session().unwrap();
        let visible: Vec<Tab> = Tab::ALL
            .into_iter()
            .filter(|t| session.is_tab_visible(*t))
            .collect();
        assert_eq!(visible, vec![Tab::Guide]);
        assert_eq!(session.navigator.counter(), "1 / 2");
        assert_eq!(app.notifier.current().unwrap().severity, Severity::Success);
    }

    #[test]
    fn test_missing_materials_gives_placeholder() {
        let (mut app, rx) = app();
        app.start_upload(Path::new("book.pdf"));
        let seq = dispatched_seq(&rx);
        app.handle_upload_response(UploadResponse::Done {
            seq,
            bundle: bundle(serde_json::json!({"status": "ok", "all_materials": null})),
        });
        assert!(matches!(app.results, Some(Results::Missing)));
        assert!(app.session().is_none());
    }

    #[test]
    fn test_server_error_keeps_previous_results() {
        let (mut app, rx) = app();
        app.start_upload(Path::new("first.pdf"));
        let seq = dispatched_seq(&rx);
        app.handle_upload_response(UploadResponse::Done {
            seq,
            bundle: ready_bundle(),
        });

        app.start_upload(Path::new("second.pdf"));
        let seq = dispatched_seq(&rx);
        app.handle_upload_response(UploadResponse::Failed {
            seq,
            error: UploadError::Server { status_code: 429 },
        });

        assert!(!app.loading);
        let note = app.notifier.current().unwrap();
        assert_eq!(note.severity, Severity::Error);
        assert!(note.message.contains("429"));
        assert!(app.session().is_some());
    }

    #[test]
    fn test_stale_response_is_ignored() {
        let (mut app, rx) = app();
        app.start_upload(Path::new("old.pdf"));
        let old = dispatched_seq(&rx);
        app.start_upload(Path::new("new.pdf"));
        let new = dispatched_seq(&rx);

        app.handle_upload_response(UploadResponse::Done {
            seq: old,
            bundle: ready_bundle(),
        });
        assert!(app.loading);
        assert!(app.results.is_none());

        app.handle_upload_response(UploadResponse::Failed {
            seq: new,
            error: UploadError::Application("boom".into()),
        });
        assert!(!app.loading);
        assert!(app.results.is_none());
        assert_eq!(app.notifier.current().unwrap().message, "Error: boom");
    }

    #[test]
    fn test_without_worker_reports_error() {
        let mut app = App::new(PathBuf::from("."), None);
        app.start_upload(Path::new("book.pdf"));
        assert!(!app.loading);
        assert_eq!(app.notifier.current().unwrap().severity, Severity::Error);
    }

    #[test]
    fn test_rate_and_submit_notify() {
        let (mut app, rx) = app();
        app.start_upload(Path::new("book.pdf"));
        let seq = dispatched_seq(&rx);
        app.handle_upload_response(UploadResponse::Done {
            seq,
            bundle: ready_bundle(),
        });

        app.rate_current_card(1);
        assert!(app.notifier.current().unwrap().message.contains("Hard"));

        app.session_mut().unwrap().quiz.select(0, 1);
        app.submit_test();
        assert_eq!(
            app.notifier.current().unwrap().message,
            "Result: 1 of 1 correct"
        );
    }

    #[test]
    fn test_copy_and_download_export() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, rx) = mpsc::channel();
        let mut app = App::new(dir.path().to_path_buf(), Some(tx));
        app.start_upload(Path::new("book.pdf"));
        let seq = dispatched_seq(&rx);
        app.handle_upload_response(UploadResponse::Done {
            seq,
            bundle: ready_bundle(),
        });

        let mut out = Vec::new();
        app.copy_export(&mut out);
        assert!(!out.is_empty());
        assert!(app.notifier.current().unwrap().message.contains("copied"));

        app.download_export();
        let saved = std::fs::read_to_string(dir.path().join(export::EXPORT_FILE_NAME)).unwrap();
        assert_eq!(saved, "# md\nline two ✓");
    }
}
