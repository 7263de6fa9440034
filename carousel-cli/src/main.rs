use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use tracing::{Level, warn};

#[derive(Parser, Debug)]
#[command(name = "carousel", version, about = "Render one branded carousel slide")]
struct Cli {
    /// Slide index, role (hook, reveal, cta) and text. Title and subtitle are separated by `~~~`.
    ///
    /// Flags go before the index; every token after the role is text, even one starting with `-`.
    #[arg(
        required = true,
        num_args = 3..,
        value_name = "INDEX ROLE TEXT",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    args: Vec<String>,

    /// Named style preset.
    #[arg(long, default_value = "factsmind")]
    style: String,

    /// JSON file overriding any subset of the default style.
    #[arg(long, conflicts_with = "style")]
    style_file: Option<PathBuf>,

    /// Directory holding `slide_{index}.png` source photos.
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Directory receiving `slide_{index}_final.png`.
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Root that relative font and logo paths resolve against.
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Also write a preview JPEG next to the PNG.
    #[arg(long)]
    preview: bool,

    /// Log at debug level.
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    let request = carousel::parse_slide_args(cli.args.as_slice())?;
    let style = match &cli.style_file {
        Some(path) => carousel::StyleConfig::from_json_path(path)?,
        None => carousel::StyleConfig::preset(&cli.style)?,
    };

    let mut paths = carousel::AssetPaths::default();
    if let Some(dir) = cli.input_dir {
        paths.input_dir = dir;
    }
    if let Some(dir) = cli.output_dir {
        paths.output_dir = dir;
    }
    if let Some(dir) = cli.assets_dir {
        paths.assets_root = dir;
    }

    let outcome = carousel::render_slide_to_file(&request, &style, &paths)
        .with_context(|| format!("render slide {} ({})", request.slide_index, request.role))?;
    for d in &outcome.degradations {
        warn!(?d, "degraded");
    }

    if cli.preview {
        let preview = outcome.output_path.with_extension("jpg");
        let img = image::open(&outcome.output_path)
            .with_context(|| format!("reopen '{}'", outcome.output_path.display()))?;
        img.to_rgb8()
            .save_with_format(&preview, image::ImageFormat::Jpeg)
            .with_context(|| format!("write preview '{}'", preview.display()))?;
        eprintln!("wrote {}", preview.display());
    }

    eprintln!("wrote {}", outcome.output_path.display());
    Ok(())
}
