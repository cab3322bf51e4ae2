use eframe::egui;

mod app;
mod chat;
mod polygon;
mod scan;

use app::ScanChatApp;

fn main() {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 760.0])
            .with_title("scanchat"),
        ..Default::default()
    };

    eframe::run_native(
        "scanchat",
        options,
        Box::new(|cc| {
            // File-URI loading for the chat's image bubbles.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(ScanChatApp::default()))
        }),
    )
    .expect("Failed to run eframe");
}
