//! Handler für Zeiger, Drehung und Bestätigung der Platzierung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Ray;

/// Übernimmt den Zeiger-Strahl des Frames.
pub fn set_pointer_ray(state: &mut AppState, ray: Option<Ray>) {
    use_cases::placement::set_pointer_ray(state, ray);
}

/// Dreht den zu platzierenden Raum.
pub fn rotate(state: &mut AppState, steps: i32) {
    use_cases::placement::rotate(state, steps);
}

/// Merkt die Bestätigung für die Frame-Auswertung vor.
pub fn request_confirm(state: &mut AppState) {
    use_cases::placement::request_confirm(state);
}
