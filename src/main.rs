use classification_client::impl_http::ClassificationClientHttp;
use classifier_app::core::Event;
use classifier_app::main::ClassifierApp;
use config::Config;
use file_intake::impl_fs::FileReaderFs;
use label_registry::impl_http::LabelRegistryHttp;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use std::sync::{Arc, Mutex};
use view::impl_gui::{run_window, ClassifierWindow, ViewGui};

mod classification_client;
mod classifier_app;
mod config;
mod error;
mod file_intake;
mod label_registry;
mod library;
mod render_projector;
mod result_normalizer;
mod view;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::default();

    let logger: Arc<dyn Logger + Send + Sync> =
        Arc::new(LoggerConsole::new(config.logger_timezone));

    let label_registry = Arc::new(LabelRegistryHttp::new(config.labels_url(), logger.clone()));

    let file_reader = Arc::new(FileReaderFs::new(logger.clone()));

    let classification_client = Arc::new(ClassificationClientHttp::new(
        config.classify_url(),
        logger.clone(),
    ));

    let view = ViewGui::new(logger.clone());
    let view_buffer = view.buffer();

    let app = ClassifierApp::new(
        config.clone(),
        logger.clone(),
        label_registry,
        file_reader,
        classification_client,
        Arc::new(Mutex::new(view)),
    );

    let events = app.sender();
    let window = ClassifierWindow::new(view_buffer, &config, events.clone());
    let classifier = std::thread::spawn(move || app.run());

    let window_result = run_window(&config, window);

    let _ = events.send(Event::WindowClosed);
    match classifier.join() {
        Ok(Ok(_)) => {}
        Ok(Err(e)) => logger.error(&format!("classifier loop failed: {}", e))?,
        Err(_) => logger.error("classifier loop panicked")?,
    }

    window_result
}
