use eframe::egui;
use verdant::gui::VerdantApp;

fn main() -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 840.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Verdant"),
        ..Default::default()
    };

    eframe::run_native("Verdant", options, Box::new(|cc| Ok(Box::new(VerdantApp::new(cc)))))
}
