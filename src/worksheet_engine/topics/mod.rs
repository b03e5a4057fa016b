//! Exercise generators, one module per subject.
//!
//! Randomised generators share one shape:
//!
//! ```ignore
//! pub fn generate<R: Rng>(rng: &mut R, config: &<Subject>Config, /* catalog */) -> <Records>
//! ```
//!
//! The tracing-sheet builders are deterministic and take only their config.
//! The dispatcher in `generator.rs` routes to these.

/// MA- arithmetic drills, make-ten / take-ten
pub mod arithmetic;
/// AL- shop word problems over item pools
pub mod algebra;
/// PO- classical poem fill-in-the-blank
pub mod poem;
/// HZ- Chinese character tracing
pub mod hanzi;
/// EN- English word tracing
pub mod english;
