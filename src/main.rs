use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use motifkit::designer::svg_renderer::write_svg_in;
use motifkit::designer::ShapeGenerator;
use motifkit::settings::Config;
use motifkit::showcase::build_showcase;
use motifkit::{canvas_view, init_logging, render_style, BUILD_DATE, VERSION};

#[derive(Parser)]
#[command(name = "motifkit")]
#[command(about = "Render the MotifKit shape showcase to an SVG file", long_about = None)]
#[command(version)]
struct Cli {
    /// Output SVG file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Settings file (.toml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for reproducible flower petals
    #[arg(long)]
    seed: Option<u64>,

    /// Canvas width, overriding the scene size
    #[arg(long)]
    width: Option<f64>,

    /// Canvas height, overriding the scene size
    #[arg(long)]
    height: Option<f64>,

    /// Fit the canvas to the drawn content
    #[arg(long)]
    fit: bool,
}

impl Cli {
    fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from_file(path)
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => Config::new(),
        };

        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if self.seed.is_some() {
            config.output.seed = self.seed;
        }
        if self.width.is_some() {
            config.canvas.width = self.width;
        }
        if self.height.is_some() {
            config.canvas.height = self.height;
        }
        if self.fit {
            config.canvas.fit_to_content = true;
        }

        config.validate().context("Invalid settings")?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    info!("MotifKit {} (built {})", VERSION, BUILD_DATE);

    let config = cli.resolve_config()?;

    let mut generator = match config.output.seed {
        Some(seed) => ShapeGenerator::seeded(seed),
        None => ShapeGenerator::new(),
    };
    let scene = build_showcase(&mut generator);

    let view = canvas_view(&config.canvas, &scene.layers, (scene.width, scene.height));
    let style = render_style(&config.style);
    let path = &config.output.path;

    write_svg_in(path, &scene.layers, &view, &style)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    info!(
        path = %path.display(),
        width = view.width(),
        height = view.height(),
        "wrote showcase"
    );
    Ok(())
}
