use anyhow::{Context, Result};
use log::info;

use calorie_tracker::{logging, ui, App, Config, ItemStorage, LocalStorage};

fn main() -> Result<()> {
    let config = Config::from_env().context("Invalid configuration")?;
    let _logger = logging::init_logging(&config.log_level, &config.log_dir)?;

    let storage = LocalStorage::open(&config.db_path)?;
    info!(
        "event=storage_open module=main status=ok path={}",
        config.db_path.display()
    );

    let mut app = App::new(ItemStorage::new(storage));
    app.init();

    ui::run_ui(&mut app)?;

    info!("event=app_exit module=main status=ok");
    Ok(())
}
