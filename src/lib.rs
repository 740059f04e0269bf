//! # MotifKit
//!
//! Procedural 2D vector motifs rendered to SVG.
//!
//! ## Architecture
//!
//! MotifKit is organized as a workspace with multiple crates:
//!
//! 1. **motifkit-designer** - Shapes, transforms, generators, layers, SVG output
//! 2. **motifkit-settings** - Render configuration (TOML / JSON)
//! 3. **motifkit** - Main binary that builds a scene and writes it to disk

pub mod showcase;

pub use motifkit_designer as designer;
pub use motifkit_settings as settings;

use motifkit_designer::{layers_bounding_box, Bounds, Layer, RenderStyle};
use motifkit_settings::{CanvasSettings, StyleSettings};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output on stderr
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Converts configured style settings into renderer style.
pub fn render_style(style: &StyleSettings) -> RenderStyle {
    RenderStyle {
        stroke_color: style.stroke_color.clone(),
        stroke_width: style.stroke_width,
        fill_color: style.fill_color.clone(),
    }
}

/// Resolves the rectangle of model space shown by the canvas.
///
/// When `fit_to_content` is set the view is the drawn content's bounds grown
/// by the margin on every side, so content at negative coordinates stays
/// visible. Otherwise the view starts at the origin with the `default` size.
/// Explicit dimensions replace the width or height in both cases.
pub fn canvas_view(canvas: &CanvasSettings, layers: &[Layer], default: (f64, f64)) -> Bounds {
    let base = if canvas.fit_to_content {
        layers_bounding_box(layers).map(|bb| bb.expand(canvas.margin))
    } else {
        None
    }
    .unwrap_or_else(|| Bounds::new(0.0, 0.0, default.0, default.1));

    let width = canvas.width.unwrap_or(base.width());
    let height = canvas.height.unwrap_or(base.height());
    Bounds::new(base.min_x, base.min_y, base.min_x + width, base.min_y + height)
}
