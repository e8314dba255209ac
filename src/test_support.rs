//! Shared fakes for unit tests.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::focus::FocusPoint;
use crate::surface::{RenderSurface, SurfaceError};

/// One recorded `animate_to` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub focus: FocusPoint,
    pub zoom: u8,
    pub duration_secs: f64,
}

/// In-memory surface that records every call.
#[derive(Debug, Default)]
pub struct MockSurface {
    not_ready: AtomicBool,
    relayouts: AtomicUsize,
    readiness_checks: AtomicUsize,
    animations: Mutex<Vec<Animation>>,
    next_failure: Mutex<Option<SurfaceError>>,
}

impl MockSurface {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_ready(&self, ready: bool) {
        self.not_ready.store(!ready, Ordering::SeqCst);
    }

    /// Make the next `animate_to` call fail with `err`.
    pub fn fail_next(&self, err: SurfaceError) {
        *lock(&self.next_failure) = Some(err);
    }

    pub fn animations(&self) -> Vec<Animation> {
        lock(&self.animations).clone()
    }

    pub fn animated_focuses(&self) -> Vec<FocusPoint> {
        self.animations().into_iter().map(|a| a.focus).collect()
    }

    pub fn relayouts(&self) -> usize {
        self.relayouts.load(Ordering::SeqCst)
    }

    pub fn readiness_checks(&self) -> usize {
        self.readiness_checks.load(Ordering::SeqCst)
    }
}

impl RenderSurface for MockSurface {
    fn is_container_ready(&self) -> bool {
        self.readiness_checks.fetch_add(1, Ordering::SeqCst);
        !self.not_ready.load(Ordering::SeqCst)
    }

    fn animate_to(&self, focus: FocusPoint, zoom: u8, duration_secs: f64) -> Result<(), SurfaceError> {
        if let Some(err) = lock(&self.next_failure).take() {
            return Err(err);
        }
        lock(&self.animations).push(Animation { focus, zoom, duration_secs });
        Ok(())
    }

    fn force_relayout(&self) {
        self.relayouts.fetch_add(1, Ordering::SeqCst);
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Capture formatted `tracing` output for the current thread.
///
/// Keep the returned guard alive for as long as events should be captured.
pub fn capture_logs() -> (Arc<Mutex<Vec<u8>>>, tracing::subscriber::DefaultGuard) {
    let buf = Arc::new(Mutex::new(Vec::new()));
    let writer_buf = Arc::clone(&buf);
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(move || CaptureWriter(Arc::clone(&writer_buf)))
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buf, guard)
}

pub fn logged(buf: &Mutex<Vec<u8>>) -> String {
    String::from_utf8_lossy(&lock(buf)).into_owned()
}

struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for CaptureWriter {
    fn write(&mut self, data: &[u8]) -> std::io::Result<usize> {
        lock(&self.0).extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
