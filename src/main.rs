//! tinyraster demo driver.
//!
//! Renders the demo scenes and writes one image per scene. With no
//! arguments it renders the triangle scene to `output3.tga`.

// External crates
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

// STD library
use std::path::{Path, PathBuf};
use std::time::Instant;

// Internal imports
use tinyraster::logging::{LoggingConfig, init_logging};
use tinyraster::render::{DEFAULT_LIGHT, render_flat_shaded, render_random_colors, render_wireframe};
use tinyraster::{Canvas, Color, Model, PixelFormat, TgaEncoding, scene};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Scene {
    Lines,
    Triangles,
    Wireframe,
    Flat,
    Random,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Tga,
    TgaRle,
    Bmp,
    Png,
}

impl Format {
    fn extension(self) -> &'static str {
        match self {
            Format::Tga | Format::TgaRle => "tga",
            Format::Bmp => "bmp",
            Format::Png => "png",
        }
    }
}

/// Minimal software rasterizer demo
#[derive(Parser, Debug)]
#[command(name = "tinyraster")]
#[command(version)]
#[command(about = "Draws lines and triangles into an image file", long_about = None)]
struct Cli {
    /// Scene to render
    #[arg(short, long, value_enum, default_value_t = Scene::Triangles)]
    scene: Scene,

    /// OBJ model for the wireframe, flat and random scenes
    #[arg(short, long, default_value = "obj/octahedron.obj")]
    model: PathBuf,

    /// Directory the images are written to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Image format
    #[arg(short, long, value_enum, default_value_t = Format::Tga)]
    format: Format,

    /// Canvas width override
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height override
    #[arg(long)]
    height: Option<u32>,

    /// Log filter, e.g. "debug" or "tinyraster=debug"
    #[arg(long)]
    log: Option<String>,

    /// Seed for the random color scene
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

impl Cli {
    fn canvas(&self, width: u32, height: u32) -> Result<Canvas> {
        let width = self.width.unwrap_or(width);
        let height = self.height.unwrap_or(height);
        Canvas::new(width, height, PixelFormat::Rgb).context("creating canvas")
    }

    fn load_model(&self) -> Result<Model> {
        let model = Model::load(&self.model).with_context(|| format!("loading model {}", self.model.display()))?;
        info!("loaded {}: {} vertices, {} faces", self.model.display(), model.vertex_count(), model.face_count());
        Ok(model)
    }

    /// Flips to a bottom-left origin and writes `<name>.<ext>`.
    fn save(&self, mut canvas: Canvas, name: &str) -> Result<()> {
        canvas.flip_vertically();
        let path = self.output_dir.join(format!("{name}.{}", self.format.extension()));
        write_canvas(&canvas, &path, self.format).with_context(|| format!("writing {}", path.display()))
    }
}

fn write_canvas(canvas: &Canvas, path: &Path, format: Format) -> tinyraster::Result<()> {
    match format {
        Format::Tga => canvas.write_tga(path, TgaEncoding::Uncompressed),
        Format::TgaRle => canvas.write_tga(path, TgaEncoding::Rle),
        Format::Bmp => canvas.write_bmp(path),
        Format::Png => canvas.save_png(path),
    }
}

fn render_lines(cli: &Cli) -> Result<()> {
    let mut canvas = cli.canvas(500, 500)?;
    scene::lines_star(&mut canvas);
    cli.save(canvas, "output")
}

fn render_triangles(cli: &Cli) -> Result<()> {
    let mut canvas = cli.canvas(200, 200)?;
    scene::triangles(&mut canvas);
    cli.save(canvas, "output3")
}

fn render_model_wireframe(cli: &Cli, model: &Model) -> Result<()> {
    let mut canvas = cli.canvas(800, 600)?;
    render_wireframe(model, &mut canvas, Color::WHITE);
    cli.save(canvas, "output2")
}

fn render_model_flat(cli: &Cli, model: &Model) -> Result<()> {
    let mut canvas = cli.canvas(800, 600)?;
    let stats = render_flat_shaded(model, &mut canvas, Color::WHITE, DEFAULT_LIGHT);
    info!("flat shading: {} faces drawn, {} culled", stats.drawn, stats.culled);
    cli.save(canvas, "output4")
}

fn render_model_random(cli: &Cli, model: &Model) -> Result<()> {
    let mut canvas = cli.canvas(800, 600)?;
    let mut rng = StdRng::seed_from_u64(cli.seed);
    render_random_colors(model, &mut canvas, &mut rng);
    cli.save(canvas, "output5")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig { env_filter: cli.log.clone(), ..Default::default() });

    let start = Instant::now();
    match cli.scene {
        Scene::Lines => render_lines(&cli)?,
        Scene::Triangles => render_triangles(&cli)?,
        Scene::Wireframe => render_model_wireframe(&cli, &cli.load_model()?)?,
        Scene::Flat => render_model_flat(&cli, &cli.load_model()?)?,
        Scene::Random => render_model_random(&cli, &cli.load_model()?)?,
        Scene::All => {
            let model = cli.load_model()?;
            render_lines(&cli)?;
            render_model_wireframe(&cli, &model)?;
            render_triangles(&cli)?;
            render_model_flat(&cli, &model)?;
            render_model_random(&cli, &model)?;
        }
    }

    info!("done in {:.2?}", start.elapsed());
    Ok(())
}
