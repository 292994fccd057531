//! pitchviz CLI
//!
//! Import a Statcast-style CSV, turn every pitch into 3D trajectory geometry,
//! and export the resulting scene.

use clap::Parser;
use pitchviz_app::{Outcome, RerunLogger, SceneExport, Session};
use pitchviz_core::VisualizeOptions;
use pitchviz_env::MemoryScene;
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

/// Pitch trajectory visualization
#[derive(Parser, Debug)]
#[command(name = "pitchviz")]
#[command(about = "Build 3D pitch trajectories from pitch-tracking CSV data", long_about = None)]
struct Args {
    /// CSV file with one pitch per row
    #[arg(short, long)]
    input: PathBuf,

    /// Group pitches into one container per at-bat
    #[arg(long)]
    group_by_at_bat: bool,

    /// Give each pitch a material based on pitch type
    #[arg(long)]
    assign_materials: bool,

    /// Trajectory samples per pitch
    #[arg(short = 'n', long, default_value = "20")]
    num_points: usize,

    /// Add the strike zone box
    #[arg(long)]
    strike_zone: bool,

    /// Export the scene to a JSON file
    #[arg(long)]
    export: Option<PathBuf>,

    /// JSON summary on stdout
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show the scene in the Rerun viewer
    #[arg(long)]
    rerun: bool,

    /// Save the scene as a Rerun .rrd recording
    #[arg(long)]
    rerun_save: Option<String>,
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Finished(msg) => info!("{}", msg),
        Outcome::Cancelled(msg) => error!("{}", msg),
    }
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let options = VisualizeOptions::default()
        .with_grouping(args.group_by_at_bat)
        .with_materials(args.assign_materials)
        .with_num_points(args.num_points);
    let mut session = Session::with_options(options);
    let mut scene = MemoryScene::new();

    let imported = session.import(&args.input);
    report(&imported);
    if !imported.is_finished() {
        std::process::exit(1);
    }

    let visualized = match session.visualize(&mut scene) {
        Ok(outcome) => outcome,
        Err(e) => {
            error!("Visualization failed: {}", e);
            std::process::exit(1);
        }
    };
    report(&visualized);

    if args.strike_zone {
        match session.add_strike_zone(&mut scene) {
            Ok(outcome) => report(&outcome),
            Err(e) => {
                error!("Strike zone failed: {}", e);
                std::process::exit(1);
            }
        }
    }

    if let Some(path) = &args.export {
        let mut export =
            SceneExport::from_scene(&scene).with_source(args.input.display().to_string());
        if let Some(batch) = session.last_report() {
            export = export.with_report(batch);
        }
        if let Err(e) = export.write_to_file(path) {
            error!("Failed to write export: {:?}", e);
            std::process::exit(1);
        }
        info!("Exported {} objects to {}", export.objects.len(), path.display());
    }

    if args.rerun || args.rerun_save.is_some() {
        let logger = match &args.rerun_save {
            Some(path) => RerunLogger::new_to_file("pitchviz", path),
            None => RerunLogger::new("pitchviz"),
        };
        if logger.is_enabled() {
            let logged = logger.log_scene(&scene);
            info!("Logged {} objects to Rerun", logged);
        }
    }

    if args.json {
        let batch = session.last_report();
        let summary = serde_json::json!({
            "input": args.input.display().to_string(),
            "records": session.record_count(),
            "visualized": batch.map_or(0, |b| b.visualized_count()),
            "skipped": batch.map_or(0, |b| b.skipped_count()),
            "objects": scene.object_count(),
            "groups": scene.group_count(),
            "materials": scene.material_count(),
            "message": visualized.message(),
        });
        match serde_json::to_string_pretty(&summary) {
            Ok(text) => println!("{}", text),
            Err(e) => error!("Failed to encode summary: {}", e),
        }
    }

    if !visualized.is_finished() {
        std::process::exit(1);
    }
}
