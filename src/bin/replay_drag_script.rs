use range_chart::api::{ChartWidget, ChartWidgetConfig};
use range_chart::core::SurfaceOrigin;
use range_chart::render::NullRenderer;
use serde::Deserialize;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

const SCRIPT_SCHEMA_VERSION: u32 = 1;

/// Headless session: a widget, its initial values and the host events to
/// replay against it.
#[derive(Debug, Deserialize)]
struct ReplayScript {
    schema_version: u32,
    #[serde(default)]
    config: Option<ChartWidgetConfig>,
    values: Vec<u8>,
    /// `(offset_left, offset_top)` of each positioned ancestor.
    #[serde(default)]
    offset_chain: Vec<(f64, f64)>,
    events: Vec<ReplayEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ReplayEvent {
    Draw,
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    Leave,
    Update { values: Vec<u8> },
    Frame { timestamp_ms: f64 },
    /// Runs animation frames every `step_ms` until tweens finish.
    Settle { start_ms: f64, step_ms: f64 },
}

#[derive(Debug)]
struct CliArgs {
    script_path: Option<PathBuf>,
}

fn main() {
    let _ = range_chart::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = match &args.script_path {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| format!("failed to read script `{}`: {err}", path.display()))?,
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .map_err(|err| format!("failed to read script from stdin: {err}"))?;
            raw
        }
    };
    let script: ReplayScript =
        serde_json::from_str(&raw).map_err(|err| format!("failed to parse script json: {err}"))?;
    if script.schema_version != SCRIPT_SCHEMA_VERSION {
        return Err(format!(
            "unsupported script schema version: {}",
            script.schema_version
        ));
    }

    let config = script
        .config
        .unwrap_or_else(|| ChartWidgetConfig::for_series_len(script.values.len()));
    let mut widget = ChartWidget::new(NullRenderer::default(), config, script.values)
        .map_err(|err| format!("failed to create widget: {err}"))?
        .with_commit_callback(|series| {
            println!(
                "{}",
                serde_json::json!({ "event": "commit", "series": series })
            );
        });
    widget.set_surface_origin(SurfaceOrigin::from_offset_chain(script.offset_chain));

    for (position, event) in script.events.into_iter().enumerate() {
        apply_event(&mut widget, event)
            .map_err(|err| format!("event #{position} failed: {err}"))?;
    }

    let renderer = widget.renderer();
    println!(
        "{}",
        serde_json::json!({
            "event": "final",
            "series": widget.series(),
            "frames_rendered": renderer.frames_rendered,
            "full_frames_rendered": renderer.full_frames_rendered,
        })
    );
    Ok(())
}

fn apply_event(
    widget: &mut ChartWidget<NullRenderer>,
    event: ReplayEvent,
) -> range_chart::ChartResult<()> {
    match event {
        ReplayEvent::Draw => widget.draw(),
        ReplayEvent::Down { x, y } => widget.pointer_down(x, y),
        ReplayEvent::Move { x, y } => widget.pointer_move(x, y),
        ReplayEvent::Up => widget.pointer_up(),
        ReplayEvent::Leave => widget.pointer_leave(),
        ReplayEvent::Update { values } => widget.update(values),
        ReplayEvent::Frame { timestamp_ms } => widget.animation_frame(timestamp_ms).map(|_| ()),
        ReplayEvent::Settle { start_ms, step_ms } => {
            if !step_ms.is_finite() || step_ms <= 0.0 {
                return Err(range_chart::ChartError::InvalidData(
                    "settle step must be finite and > 0".to_owned(),
                ));
            }
            let mut timestamp_ms = start_ms;
            while widget.animation_frame(timestamp_ms)? {
                timestamp_ms += step_ms;
            }
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut script_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--script" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --script".to_owned())?;
                if value != "-" {
                    script_path = Some(PathBuf::from(value));
                }
            }
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(CliArgs { script_path })
}

fn print_usage() {
    println!(
        "usage: replay_drag_script [--script <path>|-]\n\n\
         Replays pointer, update and animation-frame events from a JSON script\n\
         against a headless chart widget and prints each committed series."
    );
}
