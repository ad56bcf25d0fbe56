//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod content;
pub mod dialog;
pub mod history;
pub mod placement;
pub mod selection;
pub mod view;
