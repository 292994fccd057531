//! pitchviz Application Layer
//!
//! The user-facing side of pitchviz: an operator [`Session`] holding imported
//! records and toggles, a JSON [`SceneExport`], and an optional Rerun viewer.
//!
//! # Usage
//!
//! ```ignore
//! use pitchviz_app::Session;
//! use pitchviz_env::MemoryScene;
//!
//! let mut session = Session::new();
//! session.import("statcast.csv");
//! session.set_group_by_at_bat(true);
//!
//! let mut scene = MemoryScene::new();
//! let outcome = session.visualize(&mut scene)?;
//! println!("{}", outcome.message());
//! ```

pub mod exporter;
pub mod session;
pub mod visualizer;

pub use exporter::{BatchSummary, SceneExport};
pub use session::{Outcome, Session};
pub use visualizer::RerunLogger;
