use std::rc::Rc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use swatchbook::app::App;
use swatchbook::clipboard::SystemClipboard;
use swatchbook::config::Settings;
use swatchbook::source::{SqliteSource, SqliteThemeStore};
use swatchbook::theme::ThemeContext;
use swatchbook::{cli, db, event, logging, tui};

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let settings = Settings::resolve(&cli_opts);
    logging::init(&settings)?;

    let conn = Rc::new(db::init(&settings.db_path)?);
    db::seed_if_empty(&conn)?;
    if let Some(command) = cli_opts.command {
        return cli::run(command, &conn, &settings);
    }

    info!(db = %settings.db_path.display(), "starting palette viewer");
    let theme = ThemeContext::init(Box::new(SqliteThemeStore::new(conn.clone())));
    let mut app = App::new(
        Box::new(SqliteSource::new(conn.clone())),
        Box::new(SystemClipboard::default()),
        theme,
        settings.categories.clone(),
    );
    let mut terminal = tui::init()?;
    let result = event::run(&mut app, &mut terminal);

    tui::restore()?;

    result
}
