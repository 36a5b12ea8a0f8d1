use crate::cli::HistoryCommand;
use crate::commands::{build_controller, print_view};
use crate::config::Config;
use crate::controller::Trigger;
use crate::error::Result;
use crate::render;
use colored::Colorize;

/// Handle history commands
pub async fn handle_history(config: Config, ephemeral: bool, command: HistoryCommand) -> Result<()> {
    let controller = build_controller(&config, ephemeral)?;

    match command {
        HistoryCommand::List => {
            let history = controller.history()?;
            print!("{}", render::render_history(&history));

            if !history.is_empty() {
                println!();
                println!(
                    "Use {} to search again.",
                    "recipefind history select <N>".cyan()
                );
            }
        }
        HistoryCommand::Select { index, json } => {
            let view = controller.dispatch(Trigger::SelectHistory(index)).await?;
            print_view(&view, json)?;
        }
    }

    Ok(())
}
