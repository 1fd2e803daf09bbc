mod app;

use app::MyApp;
use flashcards_app::StudySession;
use flashcards_app::config::AppConfig;
use flashcards_app::database::db::init_database;

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::from_args();
    if config.startup_resolved() {
        log::debug!("Startup choices taken from the command line");
    }

    // Without a database there is nothing to show
    let session = match init_database(&config.db_path).and_then(StudySession::open) {
        Ok(session) => session,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([850.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Flashcards App",
        options,
        Box::new(move |_cc| Ok(Box::new(MyApp::new(session, config)))),
    )
}
