//! Example showing several simulated downloads drawn as live bars

use color_eyre::Result;
use multibar::{io::ProgressWriter, ProgressManager, ProgressTracker};
use rand::Rng;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const TRACKS: &[&str] = &[
    "01 - Overture.flac",
    "02 - 晴天.flac",
    "03 - A Very Long Track Title That Will Not Fit (Live at the Hall).flac",
    "04 - 七里香.flac",
    "05 - Interlude.flac",
    "06 - Finale.flac",
];

fn main() -> Result<()> {
    color_eyre::install()?;
    // stdout belongs to the bars
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let manager = ProgressManager::default();
    manager.log(format!("Downloading {} tracks", TRACKS.len()));

    let workers: Vec<_> = TRACKS
        .iter()
        .enumerate()
        .map(|(order, name)| {
            let manager = manager.clone();
            thread::spawn(move || -> io::Result<()> {
                let mut rng = rand::rng();
                let size = rng.random_range(512 * 1024..4 * 1024 * 1024);
                let tracker = ProgressTracker::new(size, *name, order as i64);
                manager.add(tracker.clone());

                let mut sink = ProgressWriter::new(io::sink(), tracker.clone());
                let mut left = size as usize;
                while left > 0 {
                    let chunk = rng.random_range(8 * 1024..64 * 1024).min(left);
                    sink.write_all(&vec![0u8; chunk])?;
                    left -= chunk;
                    thread::sleep(Duration::from_millis(rng.random_range(5..40)));
                }

                manager.log(format!("Embedded tags into {name}"));
                manager.finish(&tracker);
                Ok(())
            })
        })
        .collect();

    for worker in workers {
        if let Err(e) = worker.join().expect("worker thread panicked") {
            manager.log(format!("Download failed: {e}"));
        }
    }
    manager.shutdown()?;

    println!("\nDownload complete! Downloaded {} tracks.", TRACKS.len());
    Ok(())
}
