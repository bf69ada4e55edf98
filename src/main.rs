// Month Calendar
// Terminal front end entry point

use month_calendar::services::session::CalendarSession;
use month_calendar::services::settings::SettingsService;
use month_calendar::ui_text::TextApp;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Month Calendar");

    let settings_service = SettingsService::at_default_location();
    log::debug!("Reading settings from {}", settings_service.path().display());
    let settings = settings_service.load_or_default();

    let session = CalendarSession::new(&settings);
    let mut app = TextApp::new(session, settings.show_week_numbers);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    app.run(stdin.lock(), stdout.lock())
}
