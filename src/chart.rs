//! Bar-chart rendering and the bounded store of recent chart files.

use crate::benchmark::SortTiming;
use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Draw a two-bar timing comparison and write it to `output_path` as PNG.
///
/// Bar height is the measured duration; the y axis is labeled in seconds.
/// Any drawing or encoding failure aborts the render, and the half-written
/// file must not be treated as a valid chart.
pub fn render_comparison(
    timings: &[SortTiming; 2],
    output_path: &Path,
    size: (u32, u32),
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(output_path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let max_secs = timings.iter().map(|t| t.seconds).fold(0.0, f64::max);
    // Headroom above the tallest bar; fall back to a unit axis when both
    // measurements round to zero.
    let y_top = if max_secs > 0.0 { max_secs * 1.2 } else { 1.0 };

    let mut chart = ChartBuilder::on(&root)
        .caption("Sorting time comparison", ("sans-serif", 30).into_font())
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0usize..2usize).into_segmented(), 0.0..y_top)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .y_desc("seconds")
        .x_label_formatter(&|seg| match seg {
            SegmentValue::CenterOf(i) if *i < timings.len() => timings[*i].label.clone(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(timings.iter().enumerate().map(|(i, t)| {
        Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), t.seconds),
            ],
            BLUE.filled(),
        )
    }))?;

    root.present()?;
    Ok(())
}

/// One generated chart file.
#[derive(Debug, Clone)]
pub struct ChartArtifact {
    pub id: u64,
    pub path: PathBuf,
}

/// Rotating cache of recent chart files.
///
/// Charts live in a private temporary directory. Each cycle gets a fresh,
/// uniquely named file; once more than `capacity` files exist the oldest is
/// deleted. The directory itself is removed when the store is dropped, so no
/// chart outlives the process.
#[derive(Debug)]
pub struct ChartStore {
    dir: TempDir,
    recent: VecDeque<ChartArtifact>,
    capacity: usize,
    next_id: u64,
}

impl ChartStore {
    pub fn new(capacity: usize) -> io::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
            recent: VecDeque::new(),
            capacity: capacity.max(1),
            next_id: 0,
        })
    }

    /// Reserve an id and a fresh file path for the next chart.
    ///
    /// The file is not created here; the renderer writes it. Call
    /// [`ChartStore::commit`] once the file exists on disk.
    pub fn allocate(&mut self) -> (u64, PathBuf) {
        let id = self.next_id;
        self.next_id += 1;
        (id, self.dir.path().join(format!("sort_times_{:04}.png", id)))
    }

    /// Record a rendered chart, evicting (and deleting) the oldest past capacity.
    pub fn commit(&mut self, id: u64, path: PathBuf) -> ChartArtifact {
        let artifact = ChartArtifact { id, path };
        self.recent.push_back(artifact.clone());
        while self.recent.len() > self.capacity {
            if let Some(old) = self.recent.pop_front() {
                let _ = std::fs::remove_file(&old.path);
            }
        }
        artifact
    }

    /// Look up the file backing a chart id, if it has not been evicted.
    pub fn path_of(&self, id: u64) -> Option<&Path> {
        self.recent
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.path.as_path())
    }

    pub fn len(&self) -> usize {
        self.recent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_timings() -> [SortTiming; 2] {
        [
            SortTiming {
                label: "Bubble sort".to_string(),
                seconds: 0.0421,
            },
            SortTiming {
                label: "Insertion sort".to_string(),
                seconds: 0.0173,
            },
        ]
    }

    #[test]
    fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");

        render_comparison(&sample_timings(), &path, (640, 480)).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.len() > 0);
        // PNG signature
        assert_eq!(&bytes[..4], b"\x89PNG");
    }

    #[test]
    fn test_render_zero_durations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");
        let timings = [
            SortTiming {
                label: "Bubble sort".to_string(),
                seconds: 0.0,
            },
            SortTiming {
                label: "Insertion sort".to_string(),
                seconds: 0.0,
            },
        ];

        render_comparison(&timings, &path, (640, 480)).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_store_allocates_distinct_paths() {
        let mut store = ChartStore::new(4).unwrap();
        let (id_a, path_a) = store.allocate();
        let (id_b, path_b) = store.allocate();
        assert_ne!(id_a, id_b);
        assert_ne!(path_a, path_b);
    }

    #[test]
    fn test_store_evicts_oldest() {
        let mut store = ChartStore::new(2).unwrap();
        let mut paths = Vec::new();

        for _ in 0..3 {
            let (id, path) = store.allocate();
            std::fs::write(&path, b"png bytes").unwrap();
            store.commit(id, path.clone());
            paths.push((id, path));
        }

        assert_eq!(store.len(), 2);
        assert!(store.path_of(paths[0].0).is_none());
        assert!(!paths[0].1.exists());
        assert!(store.path_of(paths[1].0).is_some());
        assert!(store.path_of(paths[2].0).is_some());
        assert!(paths[2].1.exists());
    }
}
