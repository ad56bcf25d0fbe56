//! Platzierungs-Engine: Kandidaten-Pose, Boden-/Tür-Snapping, Überlappung und Commit.
//!
//! `PlacementState::evaluate` läuft einmal pro Frame. Das Ergebnis ist ein
//! `PlacementCandidate`, aus dem `preview_commands` die Vorschau baut und
//! `commit` bei Bestätigung eine Instanz erzeugt.

mod geometry;
mod preview;
mod state;

pub use geometry::{commit, is_blocked, rotation_multiplier, snap_point_for};
pub use preview::preview_commands;
pub use state::{PlacementCandidate, PlacementParams, PlacementState};

#[cfg(test)]
mod tests;
