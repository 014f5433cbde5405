//! Default pipeline stages.
//!
//! The gemtext conversion pipeline consists of:
//!
//! 1. **SegmentStage** - Tag lines inside fenced preformatted regions
//! 2. **ClassifyStage** - Parse each line into a link, heading, blank or paragraph
//! 3. **ConsolidateStage** - Group lines into blocks, merging runs of links
//! 4. **RenderStage** - Render blocks to Markdown text

mod classify;
mod consolidate;
mod render;
mod segment;

pub use classify::ClassifyStage;
pub use consolidate::ConsolidateStage;
pub use render::RenderStage;
pub use segment::SegmentStage;
