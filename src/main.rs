/*!
 * Desktop Simulation - Main Entry Point
 *
 * Boots the simulated system and attaches a Command Prompt to stdin/stdout.
 */

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::info;

use desktop_sim::shell::LineKind;
use desktop_sim::{init_tracing, CommandPrompt, SystemApi, SystemConfig};

const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = SystemConfig::from_env();
    info!(?config, "Desktop simulation starting");

    let api = SystemApi::new(config);
    let mut prompt = CommandPrompt::open(api.clone()).context("failed to open Command Prompt")?;

    let mut stdout = tokio::io::stdout();
    let mut stderr = tokio::io::stderr();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let [version, copyright] = CommandPrompt::banner();
    stdout
        .write_all(format!("{}\n{}\n\n", version, copyright).as_bytes())
        .await?;

    loop {
        stdout.write_all(prompt.prompt().as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await.context("failed to read stdin")? else {
            break;
        };

        let outcome = prompt.execute(&line).await;
        if outcome.clear_screen {
            stdout.write_all(CLEAR_SCREEN.as_bytes()).await?;
        }
        for line in &outcome.lines {
            let text = format!("{}\n", line);
            match line.kind {
                LineKind::Output => stdout.write_all(text.as_bytes()).await?,
                LineKind::Error => stderr.write_all(text.as_bytes()).await?,
            }
        }
        stdout.write_all(b"\n").await?;

        if outcome.exit {
            break;
        }
    }

    info!(open_apps = api.open_apps().len(), "Desktop simulation stopped");
    Ok(())
}
