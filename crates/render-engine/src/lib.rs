//! modshot render engine
//!
//! Watermarks mod screenshots with a glowing logo panel.
//!
//! # Pipeline Architecture
//!
//! ```text
//! inputs/foo3.png ──┐
//!                   ├── Resize (max side 1920)
//! Screenshots.yaml ─┘          │
//!                              ├── Geometry plan (margins, padding, font size)
//! logos/foo.png ───────────────┘          │
//!                                         ├── Panel: glow passes + albedo + caption
//!                                         │
//!                                         ├── Place bottom-right
//!                                         ▼
//!                                 outputs/foo3.png
//! ```

pub mod batch;
pub mod filters;
pub mod font;
pub mod geometry;
pub mod logo;
pub mod panel;
pub mod pipeline;
pub mod scene;
pub mod text;

pub use batch::{run_batch, BatchReport, JobOutcome, JobStatus};
pub use geometry::GeometryPlan;
pub use pipeline::{render_screenshot, Renderer};
pub use text::{GlyphPainter, TextPainter};
