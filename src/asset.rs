//! Asynchronous showpiece model loading.
//!
//! Loading is modelled as a one-shot channel: the loader side holds an
//! [`AssetReporter`] and reports progress, then exactly one of
//! loaded/failed; the stage holds the [`AssetHandle`] and polls it once per
//! frame. The reporter can be fed from a background thread (native
//! [`load_file`]) or from host callbacks (the wasm binding forwards its
//! model loader's progress/load/error callbacks).

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::error::ToqueError;

enum LoadEvent<M> {
    Progress(f32),
    Loaded(M),
    Failed(String),
}

/// Status of a pending load, as seen by the polling side.
#[derive(Debug, PartialEq)]
pub enum LoadStatus<M> {
    /// Still loading.
    Pending {
        /// Last reported completion ratio in `[0, 1]`, if any.
        progress: Option<f32>,
    },
    /// The model is ready.
    Loaded(M),
    /// Loading failed; the reason is human-readable.
    Failed(String),
}

/// Loader side of an asset channel.
pub struct AssetReporter<M> {
    sender: Sender<LoadEvent<M>>,
}

impl<M> Clone for AssetReporter<M> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<M> AssetReporter<M> {
    /// Report the completion ratio. Non-finite values are dropped; others
    /// are clamped to `[0, 1]`.
    pub fn progress(&self, ratio: f32) {
        if ratio.is_finite() {
            let _ = self.sender.send(LoadEvent::Progress(ratio.clamp(0.0, 1.0)));
        }
    }

    /// Deliver the loaded model.
    pub fn loaded(&self, model: M) {
        let _ = self.sender.send(LoadEvent::Loaded(model));
    }

    /// Report that loading failed.
    pub fn failed(&self, reason: impl Into<String>) {
        let _ = self.sender.send(LoadEvent::Failed(reason.into()));
    }
}

/// Polling side of an asset channel.
///
/// Once [`poll`](Self::poll) returns `Loaded` or `Failed` the handle has
/// served its purpose and should be dropped.
pub struct AssetHandle<M> {
    receiver: Receiver<LoadEvent<M>>,
    progress: Option<f32>,
}

impl<M> AssetHandle<M> {
    /// Last reported progress.
    #[must_use]
    pub fn progress(&self) -> Option<f32> {
        self.progress
    }

    /// Drain pending reports without blocking.
    pub fn poll(&mut self) -> LoadStatus<M> {
        loop {
            match self.receiver.try_recv() {
                Ok(LoadEvent::Progress(ratio)) => self.progress = Some(ratio),
                Ok(LoadEvent::Loaded(model)) => return LoadStatus::Loaded(model),
                Ok(LoadEvent::Failed(reason)) => return LoadStatus::Failed(reason),
                Err(TryRecvError::Empty) => {
                    return LoadStatus::Pending {
                        progress: self.progress,
                    }
                }
                Err(TryRecvError::Disconnected) => {
                    return LoadStatus::Failed(
                        "loader finished without producing a model".into(),
                    )
                }
            }
        }
    }
}

/// Create a connected reporter/handle pair.
#[must_use]
pub fn channel<M>() -> (AssetReporter<M>, AssetHandle<M>) {
    let (sender, receiver) = mpsc::channel();
    (
        AssetReporter { sender },
        AssetHandle {
            receiver,
            progress: None,
        },
    )
}

/// Run `job` on a named background thread, delivering its result through
/// the returned handle.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_load<M, F>(name: &str, job: F) -> Result<AssetHandle<M>, ToqueError>
where
    M: Send + 'static,
    F: FnOnce(&AssetReporter<M>) -> Result<M, ToqueError> + Send + 'static,
{
    let (reporter, handle) = channel();
    let _ = std::thread::Builder::new()
        .name(format!("toque-load-{name}"))
        .spawn(move || match job(&reporter) {
            Ok(model) => reporter.loaded(model),
            Err(e) => reporter.failed(e.to_string()),
        })
        .map_err(ToqueError::ThreadSpawn)?;
    Ok(handle)
}

/// Read `path` in the background with progress, then `decode` the bytes.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_file<M, D>(
    path: std::path::PathBuf,
    decode: D,
) -> Result<AssetHandle<M>, ToqueError>
where
    M: Send + 'static,
    D: FnOnce(Vec<u8>) -> Result<M, ToqueError> + Send + 'static,
{
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("model")
        .to_owned();
    spawn_load(&name, move |reporter| {
        let bytes = read_with_progress(&path, reporter).map_err(|e| {
            ToqueError::AssetLoad(format!("{}: {e}", path.display()))
        })?;
        decode(bytes)
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn read_with_progress<M>(
    path: &std::path::Path,
    reporter: &AssetReporter<M>,
) -> std::io::Result<Vec<u8>> {
    use std::io::Read;

    const CHUNK: usize = 64 * 1024;

    let mut file = std::fs::File::open(path)?;
    let total = file.metadata()?.len();
    let mut bytes = Vec::with_capacity(total as usize);
    let mut chunk = vec![0u8; CHUNK];
    loop {
        let n = file.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        bytes.extend_from_slice(&chunk[..n]);
        if total > 0 {
            reporter.progress(bytes.len() as f32 / total as f32);
        }
    }
    Ok(bytes)
}
