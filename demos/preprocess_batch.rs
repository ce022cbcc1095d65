//! Example: Preprocess multiple raw 8-bit audio files in parallel
//!
//! Usage:
//!   cargo run --release --example preprocess_batch -- [--jobs N] [--json] <file1> <file2> ...
//!
//! Notes:
//! - Parallelism is across files. Each file still runs the single-threaded pipeline.
//! - Default workers: (available CPU threads - 1), keeping one core free for the system.

use rayon::prelude::*;
use serde::Serialize;
use std::env;
use std::time::Instant;
use stratum_prep::{Pipeline, PipelineConfig};

fn default_jobs() -> usize {
    let n = std::thread::available_parallelism().map(|v| v.get()).unwrap_or(1);
    std::cmp::max(1, n.saturating_sub(1))
}

#[derive(Serialize)]
struct ItemOut {
    file: String,
    ok: bool,
    segments: usize,
    samples: usize,
    processing_time_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut json = false;
    let mut jobs: Option<usize> = None;
    let mut paths: Vec<String> = Vec::new();

    while let Some(a) = args.first().cloned() {
        args.remove(0);
        match a.as_str() {
            "--json" => json = true,
            "--jobs" => {
                let v = args
                    .first()
                    .ok_or("--jobs requires a value")?
                    .parse::<usize>()?;
                args.remove(0);
                jobs = Some(std::cmp::max(1, v));
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: preprocess_batch [--jobs N] [--json] <file1> <file2> ...\n\
                     \n\
                     --jobs N   Parallel workers (default: CPU-1)\n\
                     --json     Emit one JSON object per line (JSONL)\n"
                );
                return Ok(());
            }
            _ => paths.push(a),
        }
    }

    if paths.is_empty() {
        eprintln!("ERROR: Provide at least one file path. Use --help for usage.");
        std::process::exit(2);
    }

    let jobs = jobs.unwrap_or_else(default_jobs);
    eprintln!("Batch: {} files, jobs={}", paths.len(), jobs);

    let pipeline = Pipeline::new(PipelineConfig::default());

    let t0 = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;

    let outs: Vec<ItemOut> = pool.install(|| {
        paths
            .par_iter()
            .map(|path| {
                let start = Instant::now();
                let result = std::fs::read(path)
                    .map_err(|e| format!("read failed: {e}"))
                    .and_then(|bytes| pipeline.process(&bytes).map_err(|e| e.to_string()));
                let processing_time_ms = start.elapsed().as_secs_f64() * 1000.0;

                match result {
                    Ok(segments) => ItemOut {
                        file: path.clone(),
                        ok: true,
                        segments: segments.len(),
                        samples: segments.iter().map(|s| s.len()).sum(),
                        processing_time_ms,
                        error: None,
                    },
                    Err(e) => ItemOut {
                        file: path.clone(),
                        ok: false,
                        segments: 0,
                        samples: 0,
                        processing_time_ms,
                        error: Some(e),
                    },
                }
            })
            .collect()
    });

    if json {
        for o in &outs {
            println!("{}", serde_json::to_string(o)?);
        }
    } else {
        for (idx, o) in outs.iter().enumerate() {
            if o.ok {
                println!(
                    "[{}/{}] {}: segments={} samples={} time={:.2}ms",
                    idx + 1,
                    outs.len(),
                    o.file,
                    o.segments,
                    o.samples,
                    o.processing_time_ms
                );
            } else {
                println!(
                    "[{}/{}] {}: ERROR: {}",
                    idx + 1,
                    outs.len(),
                    o.file,
                    o.error.as_deref().unwrap_or("unknown error")
                );
            }
        }
    }

    let ok = outs.iter().filter(|o| o.ok).count();
    eprintln!(
        "Done: ok={}/{} wall={:.0}ms",
        ok,
        outs.len(),
        t0.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
