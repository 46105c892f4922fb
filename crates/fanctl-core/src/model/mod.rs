// ── Domain model ──
//
// Canonical representations of everything the console reasons about.
// Numeric wire codes never escape `convert` -- consumers only ever see
// these types.

pub mod fan;

pub use fan::{Fan, FanId, Power, SpeedCount, SpeedTier};
