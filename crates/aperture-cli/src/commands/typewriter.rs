use std::io::{self, Write};

use anyhow::Result;
use tokio::sync::watch;
use tracing::info;

use aperture_core::typewriter::{run_typewriter, Phase, Typewriter};
use aperture_core::AppConfig;

pub async fn run(config: &AppConfig, texts: Vec<String>, no_loop: bool) -> Result<()> {
    let mut settings = config.typewriter.clone();
    if !texts.is_empty() {
        settings.texts = texts;
    }
    if no_loop {
        settings.looping = false;
    }

    if settings.texts.is_empty() {
        println!("Nothing to type.");
        return Ok(());
    }

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            let _ = shutdown_tx.send(true);
        }
    });

    info!(texts = settings.texts.len(), looping = settings.looping, "typing");

    let mut stdout = io::stdout();
    let typewriter = run_typewriter(Typewriter::from_config(&settings), shutdown_rx, |state| {
        // Redraw the line in place; a failed write only loses a frame
        let _ = write!(stdout, "\r\x1b[2K{}▌", state.displayed_text);
        let _ = stdout.flush();
    })
    .await;

    println!();
    if typewriter.phase() != Phase::Halted {
        info!("interrupted");
    }
    Ok(())
}
