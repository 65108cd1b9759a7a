//! `rangeslider`: enhance one range input, replay slider events and print the
//! resulting document tree.

use anyhow::{Context, Result, bail};
use clap::Parser;
use html::dom_utils::outline_from_dom;
use html::{Id, Node};
use slider::{Key, SliderEvent, SliderGeometry, SliderOptions, SliderParts, init};

const POINTER: u64 = 1;

#[derive(Parser)]
#[command(
    name = "rangeslider",
    about = "Turn a range input into a slider and replay events against it"
)]
struct Cli {
    /// Slider options as JSON, e.g. '{"max": 10, "step": 0.5}'.
    #[arg(long, default_value = "{}")]
    options: String,

    /// Attribute for the input element (repeatable), e.g. --attr value=30.
    #[arg(long = "attr", value_name = "NAME=VALUE")]
    attrs: Vec<String>,

    /// Track length in pixels reported by the layout pass.
    #[arg(long, default_value_t = 200.0)]
    track_px: f64,

    /// Comma-separated events: left, right, up, down, home, end, focus, blur,
    /// press:<px> (track click), grab, move:<px>, release.
    #[arg(long, value_delimiter = ',')]
    events: Vec<String>,

    /// Print only the final value instead of the whole tree.
    #[arg(long, default_value_t = false)]
    value_only: bool,
}

fn page(attrs: &[String]) -> Result<Node> {
    let mut input = Node::element(Id(2), "input").with_attr("type", "range");
    for raw in attrs {
        let Some((name, value)) = raw.split_once('=') else {
            bail!("attribute `{raw}` is not NAME=VALUE");
        };
        input = input.with_attr(name.trim(), value);
    }
    Ok(Node::document(vec![
        Node::element(Id(1), "body").with_child(input),
    ]))
}

fn pixels(raw: &str, arg: &str) -> Result<f64> {
    arg.parse()
        .with_context(|| format!("event `{raw}`: `{arg}` is not a pixel offset"))
}

/// Event and the element it hits.
fn parse_event(raw: &str, parts: &SliderParts) -> Result<(Id, SliderEvent)> {
    let (name, arg) = match raw.split_once(':') {
        Some((name, arg)) => (name, Some(arg)),
        None => (raw, None),
    };
    let key = |k| (parts.slider, SliderEvent::KeyDown(k));
    let event = match (name.trim().to_ascii_lowercase().as_str(), arg) {
        ("left", None) => key(Key::ArrowLeft),
        ("right", None) => key(Key::ArrowRight),
        ("up", None) => key(Key::ArrowUp),
        ("down", None) => key(Key::ArrowDown),
        ("home", None) => key(Key::Home),
        ("end", None) => key(Key::End),
        ("focus", None) => (parts.slider, SliderEvent::Focus),
        ("blur", None) => (parts.slider, SliderEvent::Blur),
        ("press", Some(px)) => (
            parts.track,
            SliderEvent::PointerDown {
                pointer_id: POINTER,
                target: parts.track,
                offset: pixels(raw, px)?,
            },
        ),
        ("grab", None) => (
            parts.thumb,
            SliderEvent::PointerDown {
                pointer_id: POINTER,
                target: parts.thumb,
                offset: 0.0,
            },
        ),
        ("move", Some(px)) => (
            parts.track,
            SliderEvent::PointerMove {
                pointer_id: POINTER,
                offset: pixels(raw, px)?,
            },
        ),
        ("release", None) => (parts.track, SliderEvent::PointerUp { pointer_id: POINTER }),
        _ => bail!("unknown event `{raw}`"),
    };
    Ok(event)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let options: SliderOptions =
        serde_json::from_str(&cli.options).context("parsing --options")?;
    let mut doc = page(&cli.attrs)?;
    let mut index = init(&mut doc, "input[type=range]", &options)?;

    let geometry = SliderGeometry {
        track_extent_px: cli.track_px,
        slider_top: 100.0,
        slider_left: 100.0,
        tooltip_width: 32.0,
        tooltip_height: 20.0,
        ..SliderGeometry::default()
    };
    if index.layout_all(&mut doc, |_| geometry) == 0 {
        bail!("a {}px track cannot host the slider", cli.track_px);
    }
    let Some(parts) = index.get(0).map(|s| *s.parts()) else {
        bail!("no slider was created");
    };

    for raw in &cli.events {
        let (target, event) = parse_event(raw, &parts)?;
        let changed = index.dispatch(&mut doc, target, event);
        log::info!(target: "rangeslider", "{raw}: changed={changed}");
    }

    if cli.value_only {
        if let Some(slider) = index.get(0) {
            println!("{}", slider.display_value());
        }
    } else {
        for line in outline_from_dom(&doc, 256) {
            println!("{line}");
        }
    }
    Ok(())
}
