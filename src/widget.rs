//! The install command widget.
//!
//! The widget holds two pieces of per-view state: the detected platform,
//! which is set once when the widget is mounted, and the copy feedback flag,
//! which turns on after a successful copy and turns itself off again after
//! [`FEEDBACK_WINDOW`].

use log::{debug, error, info};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::{
    command::{command_label, install_command},
    platform::{Platform, PlatformDetector, UserAgentDetector},
    runtime::Runtime,
};

/// How long the "copied" confirmation stays visible after a successful copy.
pub const FEEDBACK_WINDOW: Duration = Duration::from_millis(2000);

/// Snapshot of what the widget currently displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetView {
    pub platform: Option<Platform>,
    pub label: String,
    pub command: String,
    pub copied: bool,
}

#[derive(Debug, Default)]
struct Feedback {
    copied: bool,
    // Bumped on every successful copy so only the newest window can clear `copied`
    generation: u64,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

pub struct InstallWidget<R: Runtime> {
    runtime: Arc<R>,
    detector: Box<dyn PlatformDetector>,
    user_agent: Option<String>,
    platform: OnceLock<Platform>,
    feedback: Arc<Mutex<Feedback>>,
    reset_task: Mutex<Option<JoinHandle<()>>>,
    feedback_window: Duration,
}

impl<R: Runtime> InstallWidget<R> {
    pub fn new(runtime: R) -> Self {
        Self::with_runtime(Arc::new(runtime))
    }

    pub fn with_runtime(runtime: Arc<R>) -> Self {
        Self {
            runtime,
            detector: Box::new(UserAgentDetector),
            user_agent: None,
            platform: OnceLock::new(),
            feedback: Arc::new(Mutex::new(Feedback::default())),
            reset_task: Mutex::new(None),
            feedback_window: FEEDBACK_WINDOW,
        }
    }

    /// Use this string instead of asking the runtime for its user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_detector(mut self, detector: Box<dyn PlatformDetector>) -> Self {
        self.detector = detector;
        self
    }

    /// Pin the platform. Mounting afterwards will not run detection.
    pub fn with_platform(self, platform: Platform) -> Self {
        let _ = self.platform.set(platform);
        self
    }

    /// Attach the widget to its environment and detect the platform.
    /// Detection runs at most once per widget; later calls return the
    /// cached result.
    pub fn mount(&self) -> Platform {
        *self.platform.get_or_init(|| {
            let user_agent = match &self.user_agent {
                Some(ua) => ua.clone(),
                None => self.runtime.user_agent(),
            };
            let platform = self.detector.detect(&user_agent);
            info!("Detected platform {} from {:?}", platform, user_agent);
            platform
        })
    }

    /// The detected platform, or `None` before [`mount`](Self::mount).
    pub fn platform(&self) -> Option<Platform> {
        self.platform.get().copied()
    }

    pub fn command(&self) -> &'static str {
        install_command(self.platform())
    }

    pub fn label(&self) -> String {
        command_label(self.platform())
    }

    pub fn is_copied(&self) -> bool {
        lock(&self.feedback).copied
    }

    pub fn view(&self) -> WidgetView {
        WidgetView {
            platform: self.platform(),
            label: self.label(),
            command: self.command().to_string(),
            copied: self.is_copied(),
        }
    }

    /// Copy the current command to the clipboard.
    ///
    /// On success the feedback flag is set and a fresh feedback window
    /// starts, replacing any window still running. On failure the error is
    /// logged and the feedback state is left as it was. Returns whether the
    /// clipboard accepted the command.
    #[tracing::instrument(skip(self))]
    pub async fn copy(&self) -> bool {
        let command = self.command();
        match self.runtime.write_clipboard(command).await {
            Ok(()) => {
                self.start_feedback();
                true
            }
            Err(e) => {
                error!("Failed to copy: {:#}", e);
                false
            }
        }
    }

    fn start_feedback(&self) {
        let deadline = Instant::now() + self.feedback_window;
        let generation = {
            let mut feedback = lock(&self.feedback);
            feedback.copied = true;
            feedback.generation += 1;
            feedback.generation
        };

        // Holds only a weak reference so a reset after teardown does nothing
        let feedback = Arc::downgrade(&self.feedback);
        let handle = tokio::spawn(async move {
            time::sleep_until(deadline).await;
            if let Some(feedback) = feedback.upgrade() {
                let mut feedback = lock(&feedback);
                if feedback.generation == generation {
                    feedback.copied = false;
                    debug!("Copy feedback window elapsed");
                }
            }
        });

        if let Some(previous) = lock(&self.reset_task).replace(handle) {
            previous.abort();
        }
    }
}

impl<R: Runtime> Drop for InstallWidget<R> {
    fn drop(&mut self) {
        if let Some(task) = lock(&self.reset_task).take() {
            task.abort();
        }
    }
}
