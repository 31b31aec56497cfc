use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::broadcast::error::RecvError;

use crate::console::commands::Command;
use crate::console::dispatcher::dispatch;
use crate::console::render::render_event;
use crate::setup::dependency_injection::DependencyContainer;

pub struct Console;

impl Console {
    pub async fn run(container: DependencyContainer) -> anyhow::Result<()> {
        let mut events = container.product_list.subscribe();
        let renderer = tokio::spawn(async move {
            loop {
                match events.recv().await {
                    Ok(event) => {
                        if let Some(text) = render_event(&event) {
                            println!("{}", text.trim_end());
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::debug!("Renderer skipped {} list events", skipped);
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        });

        println!("Product list console, type 'help' for commands");
        container.product_list.load_page(1).await;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();
        loop {
            stdout.write_all(b"> ").await?;
            stdout.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };
            let command = match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => command,
                Err(err) => {
                    println!("{}", err);
                    continue;
                }
            };

            if let Some(feedback) = dispatch(
                container.product_list.as_ref(),
                &container.product_form,
                command,
            )
            .await
            {
                println!("{}", feedback.trim_end());
            }
        }

        renderer.abort();
        Ok(())
    }
}
