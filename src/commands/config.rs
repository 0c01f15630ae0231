use anyhow::Result;
use tracing::info;

use crate::{cli::ConfigArgs, settings::Settings, AppCtx};

pub async fn handle(args: ConfigArgs, ctx: &AppCtx) -> Result<()> {
    ctx.settings_store.save(&Settings {
        theme: Some(args.theme),
    })?;
    info!("Theme preference saved successfully ✅");
    Ok(())
}
