use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use crate::{cli::GenerateArgs, services::GenerationService, AppCtx};
use qrglass_api::request::{GenerationRequest, Theme};

pub async fn handle(args: GenerateArgs, ctx: &AppCtx) -> Result<()> {
    // Explicit flag beats the saved preference; no preference means dark.
    let theme = match args.theme {
        Some(theme) => theme,
        None => ctx.settings_store.load()?.theme.unwrap_or(Theme::Dark),
    };

    let request = GenerationRequest::new(&args.text, args.badge, theme)?
        .with_output_size(args.size)?;

    let service = GenerationService::with_defaults();
    let composed = service
        .generate(&request)
        .await
        .context("Failed to generate QR. Please check your network and try again")?;

    // A failure above leaves any previously generated file untouched.
    fs::write(&args.out, composed.as_bytes())
        .with_context(|| format!("Failed to write output file: {}", args.out.display()))?;

    info!("Export {0}×{0}", composed.size());
    info!("Saved styled QR code to {} ✅", args.out.display());
    Ok(())
}
