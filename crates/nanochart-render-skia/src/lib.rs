// File: crates/nanochart-render-skia/src/lib.rs
// Summary: Skia renderer crate: CPU raster surfaces, text shaping and themes for nanochart layouts.

pub mod render;
pub mod text;
pub mod theme;

pub use render::{render_layout, RenderOptions, SkiaRender};
pub use text::TextShaper;
pub use theme::Theme;
