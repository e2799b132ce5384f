use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};

use record_cards::config::{CardSettings, StyleConfig};
use record_cards::engine::SelectionEngine;
use record_cards::flow::{FlowAttributeChange, FlowInputs, FlowNotifier};
use record_cards::logging::init_tracing;
use record_cards::ui::events::CardClick;

/// Drive the selection engine the way a host flow would.
#[derive(Parser, Debug)]
#[command(
    name = "record-cards",
    version,
    about = "Replay card clicks against a set of flow inputs and print the resulting flow updates"
)]
struct CliArgs {
    /// JSON file with `selectedRecords` and `unselectedRecords`.
    #[arg(value_name = "INPUTS")]
    inputs: PathBuf,

    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Card settings file (default: <config dir>/record-cards/config.toml)"
    )]
    config: Option<PathBuf>,

    #[arg(
        short = 't',
        long = "toggle",
        value_name = "ID",
        action = ArgAction::Append,
        help = "Click the card with this record id; repeat to click several"
    )]
    toggles: Vec<String>,

    #[arg(long, help = "Lock selection so clicks are ignored")]
    locked: bool,

    #[arg(long, value_name = "FIELD", help = "Record field shown on each card")]
    display_field: Option<String>,

    #[arg(long, help = "Print the final cards as a JSON array")]
    cards: bool,
}

/// Writes each flow update as one JSON line.
struct JsonLines<W: Write> {
    out: W,
}

impl<W: Write> FlowNotifier for JsonLines<W> {
    fn notify(&mut self, change: FlowAttributeChange) {
        let written = serde_json::to_string(&change)
            .map_err(io::Error::from)
            .and_then(|line| writeln!(self.out, "{}", line));
        if let Err(err) = written {
            tracing::warn!(
                attribute = change.name(),
                error = %err,
                "failed to write flow update"
            );
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = CliArgs::parse();

    let mut settings = match &args.config {
        Some(path) => CardSettings::load_from(path)?,
        None => CardSettings::load()?,
    };
    if args.locked {
        settings.selection_locked = true;
    }
    if let Some(field) = args.display_field {
        settings.display_field_api_name = Some(field);
    }

    let inputs = FlowInputs::load_from(&args.inputs)?;
    let notifier = JsonLines {
        out: io::stdout().lock(),
    };
    let style = StyleConfig::resolve(&settings);
    let mut engine = SelectionEngine::initialize(inputs, style, notifier);

    for id in args.toggles {
        engine.handle_card_click(CardClick::on(id));
    }

    if args.cards {
        let cards = serde_json::to_string_pretty(&engine.view_models())
            .context("Failed to serialize cards")?;
        let mut out = engine.into_notifier().out;
        writeln!(out, "{}", cards)?;
    }

    Ok(())
}
