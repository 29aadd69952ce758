// Hauptschleife - ruft die testbare Controller-Logik aus licht-core auf
use defmt::{error, info};

use crate::BoardController;

/// Endlosschleife der Bedienung
///
/// Während des Haltens wird die Fade-Rampe nachgeführt, nach dem Loslassen
/// kehrt `poll()` erst nach Aktion, Schlaf und Aufwachen zurück.
pub fn run(mut controller: BoardController) -> ! {
    if let Err(e) = controller.start() {
        error!("Failed to initialize outputs: {}", e);
    }
    info!("Ready, waiting for button");

    loop {
        match controller.poll() {
            Ok(Some(interaction)) => {
                info!("{}", interaction);
                info!(
                    "Woke up (wakeups: {})",
                    controller.state().power.wakeups()
                );
            }
            Ok(None) => {}
            Err(e) => error!("Hardware error: {}", e),
        }
    }
}
