pub mod app;
pub mod config;
pub mod export;
pub mod flashcards;
pub mod icons;
pub mod input;
pub mod logger;
pub mod models;
pub mod notify;
pub mod quiz;
pub mod render;
pub mod ui;
pub mod upload;
pub mod upload_worker;
pub mod utils;

// Re-exports for convenience
pub use app::{App, MaterialsSession, Results};
pub use config::Config;
pub use flashcards::{Difficulty, FlashcardNavigator};
pub use input::{handle_key, handle_paste};
pub use models::{AppState, Bundle, UploadRequest, UploadResponse};
pub use notify::{Notification, Notifier, Severity};
pub use quiz::{QuizEvaluator, QuizScore};
pub use render::{render, MaterialView, Tab};
pub use ui::draw;
pub use upload::{HttpMaterialSource, MaterialSource, UploadError};
pub use upload_worker::spawn_upload_worker;
