//! Lanceur: an accessible d100 roller with tabbed navigation.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use lanceur_core::{
    Markup, NoSpeech, PanelId, SystemOpener, Widget, WidgetConfig, detect_speaker,
};
use lanceur_tui::app::TuiApp;
use lanceur_tui::error::TuiResult;
use lanceur_tui::{logging, terminal};

#[derive(Parser)]
#[command(
    name = "lanceur",
    about = "Accessible d100 dice roller with tabbed navigation",
    version
)]
struct Cli {
    /// Panel to open first (home, dice, campaign, downloads)
    #[arg(short, long, value_parser = parse_panel)]
    tab: Option<PanelId>,

    /// Seed the dice for reproducible rolls
    #[arg(short, long)]
    seed: Option<u64>,

    /// Do not speak results aloud
    #[arg(long)]
    no_speech: bool,

    /// Where to write the log (default: lanceur.log in the temp directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Print the keyboard shortcuts and exit
    #[arg(long)]
    list_shortcuts: bool,
}

fn parse_panel(name: &str) -> Result<PanelId, String> {
    PanelId::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = PanelId::ALL.iter().map(|p| p.name()).collect();
        format!("unknown panel '{name}' (expected one of: {})", known.join(", "))
    })
}

fn config(cli: &Cli) -> WidgetConfig {
    let mut config = WidgetConfig::default().with_speech(!cli.no_speech);
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(panel) = cli.tab {
        config = config.with_start_panel(panel);
    }
    config
}

fn list_shortcuts(cli: &Cli) -> TuiResult<()> {
    let widget = Widget::new(&Markup::standard(), &config(cli), Box::new(NoSpeech))?;
    for line in widget.shortcut_listing() {
        println!("{line}");
    }
    Ok(())
}

fn run(cli: &Cli) -> TuiResult<()> {
    let log_path = cli.log_file.clone().unwrap_or_else(logging::default_log_path);
    logging::init(&log_path)?;

    let config = config(cli);
    let speaker = detect_speaker(config.speech);
    let widget =
        Widget::new(&Markup::standard(), &config, speaker)?.with_opener(Box::new(SystemOpener));
    terminal::run(TuiApp::new(widget))
}

fn main() {
    let cli = Cli::parse();

    let result = if cli.list_shortcuts {
        list_shortcuts(&cli)
    } else {
        run(&cli)
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
