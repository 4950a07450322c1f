//! Platform-free animation state for the page: reveal-on-scroll, the typing
//! headline, the scroll-aware header and the pointer parallax portrait.
//!
//! Each machine is driven by plain values (reports, metrics, points, ticks) so
//! it can be exercised without a browser; `frontend::hooks` feeds them from DOM
//! events.

pub mod parallax;
pub mod reveal;
pub mod scroll_header;
pub mod typing;

pub use parallax::{Bounds, MoveOutcome, Offset, Point, PointerParallax};
pub use reveal::{IntersectionReport, RevealSet, RevealThreshold};
pub use scroll_header::{NavSection, ScrollHeader, ScrollMetrics};
pub use typing::{NonEmptyPhrases, TypingConfig, TypingMarquee};
