use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use trackpan::drag::{Effect, PanelKind};
use trackpan::input::InputEvent;
use trackpan::options::Options;
use trackpan::session::BrowserSession;
use trackpan::surface::{MemoryRegistry, Rect};
use trackpan::TrackPanError;

#[derive(Debug, Parser)]
#[command(
    name = "trackpan",
    about = "Replay genome-browser panel gestures against an in-memory page",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Feed a script of input events through a session and print the
    /// resulting effects as JSON lines.
    Replay {
        /// Segment info JSON, as the server sends it.
        #[arg(long)]
        segment: PathBuf,
        /// Replay script JSON.
        #[arg(long)]
        script: PathBuf,
        /// Options preset (TOML). Defaults apply when omitted.
        #[arg(long)]
        options: Option<PathBuf>,
    },
    /// Print the JSON schema of the options file.
    Schema,
    /// Print the default options as TOML.
    Defaults,
}

/// A scripted page: what is laid out, then what the user does.
#[derive(Debug, Deserialize)]
struct Script {
    #[serde(default)]
    viewport: Option<Rect>,
    #[serde(default)]
    panels: Vec<ScriptPanel>,
    #[serde(default)]
    tracks: Vec<String>,
    #[serde(default = "default_true")]
    region_marker: bool,
    events: Vec<InputEvent>,
}

#[derive(Debug, Deserialize)]
struct ScriptPanel {
    kind: PanelKind,
    bounds: Option<Rect>,
}

fn default_true() -> bool {
    true
}

#[derive(Serialize)]
struct StepOutput<'a> {
    step: usize,
    event: &'a InputEvent,
    effects: Vec<Effect>,
    pan_position: f64,
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))
}

fn replay(segment: &Path, script: &Path, options: Option<&Path>) -> Result<()> {
    let options = match options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    let script: Script = serde_json::from_str(&read(script)?)
        .map_err(|e| TrackPanError::Script(e.to_string()))?;

    let mut registry = MemoryRegistry::with_tracks(script.tracks.iter().cloned());
    if !script.region_marker {
        registry = registry.without_region();
    }

    let mut session = BrowserSession::new(options, registry);
    session.load_segment_json(&read(segment)?)?;
    if let Some(viewport) = script.viewport {
        session.set_viewport(viewport);
    }
    for panel in &script.panels {
        if !session.attach_panel(panel.kind, panel.bounds) {
            log::warn!("{:?} panel accepts no selections", panel.kind);
        }
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for (step, event) in script.events.iter().enumerate() {
        let effects = session.handle_event(event.clone());
        let line = StepOutput {
            step,
            event,
            effects,
            pan_position: session.panner().position(),
        };
        serde_json::to_writer(&mut out, &line)?;
        writeln!(out)?;
    }
    serde_json::to_writer(&mut out, session.panner().registry())?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Commands::Replay {
            segment,
            script,
            options,
        } => replay(&segment, &script, options.as_deref()),
        Commands::Schema => {
            let schema = serde_json::to_string_pretty(&Options::json_schema())?;
            writeln!(io::stdout(), "{schema}")?;
            Ok(())
        }
        Commands::Defaults => {
            let defaults = toml::to_string_pretty(&Options::default())
                .context("serializing default options")?;
            write!(io::stdout(), "{defaults}")?;
            Ok(())
        }
    }
}
