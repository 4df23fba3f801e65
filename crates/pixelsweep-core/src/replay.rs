use std::sync::mpsc;
use std::thread::JoinHandle;

use tracing::debug;

use crate::consts::REPLAY_THREAD_NAME;
use crate::error::{PixelsweepError, Result};

type Job<C> = Box<dyn FnOnce(&mut C) + Send>;

/// Runs closures against a controller owned by one dedicated thread.
///
/// Replay controllers may only be touched from the thread that owns them.
/// [`ReplayThread::block_invoke`] ships work to that thread and blocks the
/// caller until it has run.
pub struct ReplayThread<C> {
    job_tx: Option<mpsc::Sender<Job<C>>>,
    handle: Option<JoinHandle<()>>,
}

impl<C: Send + 'static> ReplayThread<C> {
    /// Move `controller` onto a new owner thread.
    pub fn spawn(controller: C) -> Result<Self> {
        let (job_tx, job_rx) = mpsc::channel::<Job<C>>();

        let handle = std::thread::Builder::new()
            .name(REPLAY_THREAD_NAME.into())
            .spawn(move || {
                let mut controller = controller;
                for job in job_rx {
                    job(&mut controller);
                }
                debug!("Replay thread exiting");
            })?;

        Ok(Self {
            job_tx: Some(job_tx),
            handle: Some(handle),
        })
    }

    /// Run `f` on the owner thread and wait for its result.
    pub fn block_invoke<R, F>(&self, f: F) -> Result<R>
    where
        R: Send + 'static,
        F: FnOnce(&mut C) -> R + Send + 'static,
    {
        let job_tx = self.job_tx.as_ref().ok_or(PixelsweepError::ReplayClosed)?;
        let (result_tx, result_rx) = mpsc::channel::<R>();

        job_tx
            .send(Box::new(move |controller: &mut C| {
                let _ = result_tx.send(f(controller));
            }))
            .map_err(|_| PixelsweepError::ReplayClosed)?;

        // A panicking job drops `result_tx` without sending.
        result_rx.recv().map_err(|_| PixelsweepError::ReplayClosed)
    }
}

impl<C> Drop for ReplayThread<C> {
    fn drop(&mut self) {
        self.job_tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
