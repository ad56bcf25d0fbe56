//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::SelectionNavigated { command } => {
            vec![AppCommand::NavigateSelection { command }]
        }
        AppIntent::CatalogToggleClicked { target } => {
            vec![AppCommand::ClickCatalogToggle { target }]
        }
        AppIntent::PointerMoved { screen_pos } => {
            let viewport = state.view.viewport();
            let ray = screen_pos.map(|pos| state.view.camera.pointer_ray(pos, viewport));
            vec![AppCommand::SetPointerRay { ray }]
        }
        AppIntent::RotateRequested { steps } => vec![AppCommand::RotatePlacement { steps }],
        AppIntent::PlacementConfirmed => vec![AppCommand::RequestPlacementConfirm],
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomIn],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomOut],
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom {
            factor,
            focus_world,
        } => vec![AppCommand::ZoomCamera {
            factor,
            focus_world,
        }],
        AppIntent::OpenContentFolderRequested => vec![AppCommand::RequestContentFolderDialog],
        AppIntent::ContentFolderSelected { path } => vec![AppCommand::LoadCatalog { root: path }],
        AppIntent::ReloadCatalogRequested => vec![AppCommand::LoadCatalog {
            root: state.content_root.clone(),
        }],
        AppIntent::OpenOptionsDialogRequested => vec![AppCommand::OpenOptionsDialog],
        AppIntent::CloseOptionsDialogRequested => vec![AppCommand::CloseOptionsDialog],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::StatusMessageDismissed => vec![AppCommand::DismissStatusMessage],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
