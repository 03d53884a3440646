//! Placing text on pages.
//!
//! [`layout_text_paginated`](crate::layout::layout_text_paginated) is the
//! engine: it wraps text word by word against a
//! [`GlyphMetrics`](crate::GlyphMetrics) provider and spills onto new pages
//! as the cursor runs out of room. It only computes positions; turning a
//! [`TextLayout`](crate::layout::TextLayout) into a PDF happens in
//! [`render`](crate::render()).
//!
//! # Example
//!
//! ```
//! use cv_pdf::StandardFont;
//! use cv_pdf::layout::{layout_text_paginated, LineRole, PageGeometry};
//!
//! let geometry = PageGeometry::default();
//! let layout = layout_text_paginated(
//!     "- Widget Factory\n  - Builds widgets at scale",
//!     &geometry,
//!     &StandardFont::Helvetica,
//! );
//!
//! assert_eq!(layout.page_count(), 1);
//! let first = &layout.pages[0].lines[0];
//! assert_eq!(first.role, LineRole::Title);
//! assert_eq!(first.y, geometry.top());
//! ```

mod margins;
mod text;

pub use margins::*;
pub use text::*;
