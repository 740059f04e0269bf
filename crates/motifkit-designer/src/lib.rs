//! # MotifKit Designer
//!
//! Procedural 2D vector shapes: parametric primitives, rigid transforms,
//! composite motifs, layers and SVG output.
//!
//! ## Core Components
//!
//! - **Model**: `Point`, the `Transformable` contract and the closed `Shape`
//!   enum over circles, half circles, rings, polygons, trapezes, diamonds,
//!   drops, petals and composites
//! - **Generators**: `ShapeGenerator` for stars, triangles, flowers and the
//!   basic shapes; `PatternGenerator` for vertical repetition
//! - **Layers**: ordered shape collections used as render groups
//! - **Outline**: `lyon` paths and bounding boxes for canvas fitting
//! - **SVG renderer**: standalone SVG documents from layers
//!
//! ## Architecture
//!
//! ```text
//! ShapeGenerator / PatternGenerator
//!   └── Shape values (immutable, transformed by copy)
//!         └── Layer (z-ordered)
//!               └── svg_renderer (document output)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use motifkit_designer::{Layer, Point, RenderStyle, ShapeGenerator, Transformable};
//! use motifkit_designer::svg_renderer::render_document;
//!
//! let generator = ShapeGenerator::seeded(1);
//! let star = generator
//!     .star_default(Point::new(0.0, 0.0), 5, 60.0)
//!     .move_to(Point::new(100.0, 100.0));
//!
//! let mut layer = Layer::new();
//! layer.push(star);
//!
//! let svg = render_document(&[layer], 200.0, 200.0, &RenderStyle::default()).unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod error;
pub mod layer;
pub mod model;
pub mod outline;
pub mod pattern_generator;
pub mod shape_generator;
pub mod svg_renderer;

pub use error::{RenderError, RenderResult};
pub use layer::Layer;
pub use model::{
    BasicShape, Circle, CompositeShape, Diamond, Drop, HalfCircle, Petal, Point, Polygon, Ring,
    Shape, ShapeType, Transformable, Trapeze,
};
pub use outline::{layers_bounding_box, Bounds};
pub use pattern_generator::PatternGenerator;
pub use shape_generator::{PetalStyle, ShapeGenerator};
pub use svg_renderer::RenderStyle;
