//! Scrolls a small viewport across the million-by-million grid.
//!
//! Run with `RUST_LOG=u_bucket_grid=debug` to see region population events.

use u_bucket_grid::source::VisibleRegion;
use u_bucket_grid::stats::BucketLoad;
use u_bucket_grid::{GridConfig, GridDataSource};

const VIEW_ROWS: usize = 4;
const VIEW_COLUMNS: usize = 3;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut source = GridDataSource::new(GridConfig::default())?;
    println!(
        "axes: {} rows x {} columns, tasks per bucket {:?}",
        source.row_axis().len(),
        source.column_axis().len(),
        source.config().task_range()
    );

    // Scroll diagonally, then back to the first viewport
    for top in [0, 2, 500_000, 0] {
        let region = VisibleRegion::window(
            source.row_axis(),
            top..top + VIEW_ROWS,
            source.column_axis(),
            top..top + VIEW_COLUMNS,
        );
        let content = source.load_region(&region)?;

        println!("viewport at {top}:");
        for bucket in &content.buckets {
            let load = BucketLoad::of(bucket);
            println!(
                "  {} / {}: {} (capacity {:.1}, load {:.1}{})",
                bucket.row,
                bucket.column,
                bucket,
                load.capacity,
                load.total_consumption,
                if load.is_oversubscribed() { ", over" } else { "" }
            );
        }
    }

    let stats = source.stats();
    println!(
        "cache: {} buckets, {} tasks, hit rate {:.2}",
        stats.buckets,
        stats.tasks,
        stats.hit_rate()
    );
    Ok(())
}
