use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use visual_detect::{query, Detector, DetectorConfig, ElementInfo, ElementType};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Screenshot to analyse
    image: PathBuf,

    /// Directory to write the text report into (created if missing)
    #[arg(short, long)]
    report_dir: Option<PathBuf>,

    /// Only keep elements of this type (button, textfield, image, link)
    #[arg(short = 't', long)]
    element_type: Option<ElementType>,

    /// Only keep elements carrying text
    #[arg(long)]
    text: Option<String>,

    /// Only keep elements containing this point, given as X,Y
    #[arg(long, value_parser = parse_point)]
    at: Option<(i32, i32)>,

    /// Pixel tolerance for --at
    #[arg(long, default_value_t = 0)]
    tolerance: u32,

    /// Sampling window edge length in pixels
    #[arg(long, default_value_t = visual_detect::classifier::WINDOW_WIDTH)]
    window: u32,

    /// Distance between window origins in pixels
    #[arg(long, default_value_t = visual_detect::classifier::SCAN_STEP)]
    step: u32,

    /// Construct the detector disabled (every detection call fails)
    #[arg(long)]
    disabled: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

fn parse_point(s: &str) -> Result<(i32, i32), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got {s:?}"))?;
    let x = x.trim().parse::<i32>().map_err(|e| format!("bad X in {s:?}: {e}"))?;
    let y = y.trim().parse::<i32>().map_err(|e| format!("bad Y in {s:?}: {e}"))?;
    Ok((x, y))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    tracing::info!("Window: {}x{}, step {}", args.window, args.window, args.step);

    let config = DetectorConfig::default()
        .with_name("cli")
        .with_enabled(!args.disabled)
        .with_window(args.window, args.window)
        .with_step(args.step);
    let detector = Detector::new(config);

    let elements = detector
        .detect_elements(&args.image)
        .with_context(|| format!("Failed to detect elements in {}", args.image.display()))?;

    let selected = select(&elements, &args);

    for element in &selected {
        println!(
            "{} {}x{} conf={:.2}",
            element.selector, element.size.width, element.size.height, element.confidence
        );
    }

    let summary: Vec<String> = query::count_by_type(&elements)
        .into_iter()
        .map(|(t, n)| format!("{t}={n}"))
        .collect();
    tracing::info!(
        "{} elements detected ({}), {} selected",
        elements.len(),
        summary.join(", "),
        selected.len()
    );

    if let Some(dir) = &args.report_dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create report directory {}", dir.display()))?;
        let path = detector
            .generate_visual_report(&elements, dir)
            .context("Failed to write report")?;
        tracing::info!("Report written to {}", path.display());
    }

    Ok(())
}

/// Apply the requested filters in order: type, text, position
fn select(elements: &[ElementInfo], args: &Args) -> Vec<ElementInfo> {
    let mut selected = elements.to_vec();

    if let Some(element_type) = args.element_type {
        selected = query::find_by_type(&selected, element_type)
            .into_iter()
            .cloned()
            .collect();
    }

    if let Some(text) = &args.text {
        selected = query::find_by_text(&selected, text)
            .into_iter()
            .cloned()
            .collect();
    }

    if let Some((x, y)) = args.at {
        selected = query::find_by_position(&selected, x, y, args.tolerance)
            .into_iter()
            .cloned()
            .collect();
    }

    selected
}
