use eframe::egui;
use kikitori::gui::KikitoriApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Kikitori")
            .with_inner_size([460.0, 760.0])
            .with_min_inner_size([360.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "kikitori",
        options,
        Box::new(|cc| Ok(Box::new(KikitoriApp::new(cc)))),
    )
}
