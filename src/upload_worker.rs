use crate::logger;
use crate::models::{UploadRequest, UploadResponse};
use crate::upload::{MaterialSource, UploadError};
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

/// Runs uploads on a dedicated thread so the draw loop never blocks on the
/// network. Each request becomes its own task, so a slow upload never holds
/// back a later one; the caller decides which answer is still wanted.
pub fn spawn_upload_worker(
    source: Arc<dyn MaterialSource>,
    upload_tx: Sender<UploadResponse>,
    upload_rx: Receiver<UploadRequest>,
) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("learngame::upload_worker".to_string())
        .spawn(move || {
            let rt = match tokio::runtime::Builder::new_multi_thread()
                .worker_threads(2)
                .thread_name("learngame::upload")
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    logger::log(&format!("Upload worker could not start runtime: {}", e));
                    // Fail every request instead of leaving the UI loading forever.
                    while let Ok(UploadRequest::Submit { seq, .. }) = upload_rx.recv() {
                        let _ = upload_tx.send(UploadResponse::Failed {
                            seq,
                            error: UploadError::Transport(format!("runtime unavailable: {}", e)),
                        });
                    }
                    return;
                }
            };

            // Channel disconnected ends the loop; dropping the runtime then
            // cancels uploads still in flight.
            while let Ok(UploadRequest::Submit { seq, path }) = upload_rx.recv() {
                logger::log(&format!(
                    "Worker received upload #{} for {}",
                    seq,
                    path.display()
                ));

                let source = Arc::clone(&source);
                let upload_tx = upload_tx.clone();
                rt.spawn(async move {
                    let response = match source.fetch(&path).await {
                        Ok(bundle) => {
                            logger::log(&format!("Upload #{} succeeded", seq));
                            UploadResponse::Done {
                                seq,
                                bundle: Box::new(bundle),
                            }
                        }
                        Err(error) => {
                            logger::log(&format!("Upload #{} failed: {}", seq, error));
                            UploadResponse::Failed { seq, error }
                        }
                    };

                    if upload_tx.send(response).is_err() {
                        logger::log(&format!("Upload #{} finished after the UI closed", seq));
                    }
                });
            }
            logger::log("Upload worker channel disconnected, exiting");
            rt.shutdown_background();
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Bundle;
    use async_trait::async_trait;
    use std::path::{Path, PathBuf};
    use std::sync::mpsc;
    use std::time::Duration;

    /// Never answers for `slow.pdf`; answers everything else right away.
    struct FakeSource;

    #[async_trait]
    impl MaterialSource for FakeSource {
        async fn fetch(&self, path: &Path) -> Result<Bundle, UploadError> {
            crate::upload::validate_pdf(path)?;
            if path == Path::new("slow.pdf") {
                std::future::pending::<()>().await;
            }
            Ok(Bundle {
                filename: Some(path.display().to_string()),
                ..Bundle::default()
            })
        }
    }

    fn submit(tx: &Sender<UploadRequest>, seq: u64, path: &str) {
        tx.send(UploadRequest::Submit {
            seq,
            path: PathBuf::from(path),
        })
        .unwrap();
    }

    #[test]
    fn test_worker_answers_with_sequence_numbers() {
        let (req_tx, req_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let handle = spawn_upload_worker(Arc::new(FakeSource), resp_tx, req_rx).unwrap();

        submit(&req_tx, 1, "a.pdf");
        submit(&req_tx, 2, "b.txt");

        let mut responses = vec![
            resp_rx.recv_timeout(Duration::from_secs(5)).unwrap(),
            resp_rx.recv_timeout(Duration::from_secs(5)).unwrap(),
        ];
        responses.sort_by_key(|r| match r {
            UploadResponse::Done { seq, .. } | UploadResponse::Failed { seq, .. } => *seq,
        });

        match &responses[0] {
            UploadResponse::Done { seq, bundle } => {
                assert_eq!(*seq, 1);
                assert_eq!(bundle.filename.as_deref(), Some("a.pdf"));
            }
            other => panic!("unexpected response: {:?}", other),
        }
        match &responses[1] {
            UploadResponse::Failed { seq, error } => {
                assert_eq!(*seq, 2);
                assert!(matches!(error, UploadError::Validation(_)));
            }
            other => panic!("unexpected response: {:?}", other),
        }

        drop(req_tx);
        handle.join().unwrap();
    }

    #[test]
    fn test_hung_upload_does_not_block_the_next_one() {
        let (req_tx, req_rx) = mpsc::channel();
        let (resp_tx, resp_rx) = mpsc::channel();
        let handle = spawn_upload_worker(Arc::new(FakeSource), resp_tx, req_rx).unwrap();

        submit(&req_tx, 1, "slow.pdf");
        submit(&req_tx, 2, "fast.pdf");

        match resp_rx.recv_timeout(Duration::from_secs(3)).unwrap() {
            UploadResponse::Done { seq, bundle } => {
                assert_eq!(seq, 2);
                assert_eq!(bundle.filename.as_deref(), Some("fast.pdf"));
            }
            other => panic!("unexpected response: {:?}", other),
        }

        drop(req_tx);
        handle.join().unwrap();
    }
}
