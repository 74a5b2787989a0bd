//! A simple, low-level keyword highlighting library for editor decorations.
//!
//! Give [`Highlighter`] a table of [`Pattern`] rules and a piece of text and
//! it computes the exact set of [`Region`] decorations to render: a span
//! region for every match, plus at most one background tint per line. The
//! scan is a deterministic function of its inputs and never fails; malformed
//! rules simply drop out of the result.
//!
//! ```
//! use hilite::{Highlighter, Pattern, RegionKind};
//!
//! let mut h = Highlighter::new(true);
//! h.add(&Pattern::new("TODO", "#000000", "#FFFF00"));
//! let regions = h.run("// TODO: fix this");
//! assert_eq!(regions.len(), 2);
//! assert_eq!(regions[1].kind, RegionKind::Span);
//! assert_eq!((regions[1].start, regions[1].end), (3, 7));
//! ```

pub mod color;
pub mod highlighter;
pub mod lines;
pub mod region;
pub mod settings;

pub use color::Rgb;
pub use highlighter::{highlight, Highlighter};
pub use lines::{LineIndex, LineLookup};
pub use region::{layer_sort, Region, RegionKind};
pub use settings::{Pattern, Settings, SettingsError};
