#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "egui_starmap_demo",
        native_options,
        Box::new(|cc| Ok(Box::new(demo_core::StarMapApp::new(cc)))),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {}
