use std::path::PathBuf;
use std::thread::{self, JoinHandle};

use bevy::prelude::*;
use bevy::render::view::screenshot::{Screenshot, ScreenshotCaptured};
use bevy::window::PrimaryWindow;
use cc_scene::interaction::export_snapshot;
use crossbeam::channel::{Receiver, Sender, unbounded};
use tracing::{info, warn};

use crate::mount::MountedScene;
use crate::settings::SceneSettings;

/// Request to save the next rendered frame as a PNG.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct ExportSnapshot;

#[derive(Debug)]
struct SnapshotJob {
    path: PathBuf,
    png: Vec<u8>,
}

/// Writes encoded snapshots to disk off the main thread.
///
/// Dropping the writer blocks until every submitted snapshot is on disk.
#[derive(Resource)]
pub struct SnapshotWriter {
    job_tx: Option<Sender<SnapshotJob>>,
    worker: Option<JoinHandle<()>>,
}

impl Default for SnapshotWriter {
    fn default() -> Self {
        let (job_tx, job_rx) = unbounded::<SnapshotJob>();
        let worker = thread::spawn(move || snapshot_worker(job_rx));
        Self {
            job_tx: Some(job_tx),
            worker: Some(worker),
        }
    }
}

impl SnapshotWriter {
    pub fn submit(&self, path: PathBuf, png: Vec<u8>) {
        let sent = self
            .job_tx
            .as_ref()
            .is_some_and(|tx| tx.send(SnapshotJob { path, png }).is_ok());
        if !sent {
            warn!("snapshot writer is gone; dropping export");
        }
    }
}

impl Drop for SnapshotWriter {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain its queue and exit.
        drop(self.job_tx.take());
        if let Some(worker) = self.worker.take()
            && worker.join().is_err()
        {
            warn!("snapshot worker panicked; last export may be incomplete");
        }
    }
}

fn snapshot_worker(job_rx: Receiver<SnapshotJob>) {
    while let Ok(job) = job_rx.recv() {
        match std::fs::write(&job.path, &job.png) {
            Ok(()) => info!("saved snapshot to {:?} ({} bytes)", job.path, job.png.len()),
            Err(err) => warn!("failed to write snapshot {:?}: {err}", job.path),
        }
    }
}

pub fn handle_export_requests(
    mut commands: Commands,
    mut events: EventReader<ExportSnapshot>,
    windows: Query<(), With<PrimaryWindow>>,
    mounted: Option<Res<MountedScene>>,
) {
    if events.read().count() == 0 {
        return;
    }

    if mounted.is_none() || windows.is_empty() {
        if let Err(err) = export_snapshot(None) {
            warn!("export skipped: {err}");
        }
        return;
    }

    commands
        .spawn(Screenshot::primary_window())
        .observe(on_snapshot_captured);
}

fn on_snapshot_captured(
    trigger: Trigger<ScreenshotCaptured>,
    writer: Res<SnapshotWriter>,
    settings: Res<SceneSettings>,
) {
    let frame = match trigger.event().0.clone().try_into_dynamic() {
        Ok(image) => image.to_rgba8(),
        Err(err) => {
            warn!("captured frame is not convertible: {err:?}");
            return;
        }
    };

    match export_snapshot(Some(&frame)) {
        Ok(png) => writer.submit(settings.export_path.clone(), png),
        Err(err) => warn!("export failed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_waits_for_pending_snapshot() {
        let path =
            std::env::temp_dir().join(format!("cc-snapshot-drop-{}.png", std::process::id()));
        let png = vec![0x5a; 16 * 1024 * 1024];

        let writer = SnapshotWriter::default();
        writer.submit(path.clone(), png.clone());
        drop(writer);

        let written = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(written.len(), png.len());
        assert_eq!(written, png);
    }
}
