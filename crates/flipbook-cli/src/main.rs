mod logger;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use flipbook_layout::constants::{
    DEFAULT_FPS, DEFAULT_FRAME_EXTENSION, DEFAULT_FRAME_PREFIX, LAYOUT_FILENAME, SETTINGS_FILENAME,
};
use flipbook_layout::{
    CoverSelection, DirectoryFrames, FfmpegExtractor, FrameExtractor, FrameFilter, LayoutDocument,
    LayoutSettings, LayoutStatistics, calculate_statistics, generate_preview, import_cover,
    layout_from_source, save_document, verify_cover,
};
use log::LevelFilter;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Parent of the working directories created by `build`
const OUTPUT_ROOT: &str = "output";

#[derive(Parser)]
#[command(name = "flipbook", about = "Flipbook page layout CLI", version)]
struct Cli {
    /// Log debug messages
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else if self.quiet {
            LevelFilter::Warn
        } else {
            LevelFilter::Info
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Lay out a directory of frames into flipbook pages
    Layout(LayoutCommand),

    /// Extract numbered frames from a video with ffmpeg
    Extract(ExtractCommand),

    /// Extract frames from a video and lay them out in one go
    Build(BuildCommand),
}

#[derive(Args)]
struct LayoutCommand {
    /// Directory holding the frame images
    #[arg(short, long)]
    dir: PathBuf,

    /// Render context output (default: <dir>/layout.json)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Cover image filename inside the frame directory
    #[arg(long, conflicts_with = "median_cover")]
    cover: Option<String>,

    /// Use the middle frame as the cover
    #[arg(long)]
    median_cover: bool,

    /// Only use frames whose filename starts with this prefix
    #[arg(long)]
    prefix: Option<String>,

    /// Frame image extension
    #[arg(long, default_value = DEFAULT_FRAME_EXTENSION)]
    extension: String,

    /// Print a text preview of the first N pages
    #[arg(long, value_name = "PAGES")]
    preview: Option<usize>,

    /// Show statistics only, don't write any files
    #[arg(long)]
    stats_only: bool,

    /// Don't write settings.json next to the frames
    #[arg(long)]
    no_save_settings: bool,

    #[command(flatten)]
    layout: LayoutArgs,
}

#[derive(Args)]
struct ExtractCommand {
    /// Source video
    #[arg(short, long)]
    input: PathBuf,

    /// Directory to write frames into
    #[arg(short, long)]
    dir: PathBuf,

    /// Frames per second of video
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,

    /// Frame filename prefix
    #[arg(long, default_value = DEFAULT_FRAME_PREFIX)]
    prefix: String,
}

#[derive(Args)]
struct BuildCommand {
    /// Source video
    #[arg(short, long)]
    input: PathBuf,

    /// Working directory (default: output/<timestamp>-<input name>)
    #[arg(short, long)]
    dir: Option<PathBuf>,

    /// Frames per second of video
    #[arg(long, default_value_t = DEFAULT_FPS)]
    fps: u32,

    /// Cover image to copy into the working directory
    #[arg(long, conflicts_with = "median_cover")]
    cover: Option<PathBuf>,

    /// Use the middle frame as the cover
    #[arg(long)]
    median_cover: bool,

    /// Print a text preview of the first N pages
    #[arg(long, value_name = "PAGES")]
    preview: Option<usize>,

    /// Don't write settings.json next to the frames
    #[arg(long)]
    no_save_settings: bool,

    #[command(flatten)]
    layout: LayoutArgs,
}

/// Settings overrides shared by `layout` and `build`
#[derive(Args)]
struct LayoutArgs {
    /// Base settings file; flags override its fields
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Panel rows per page
    #[arg(long)]
    rows: Option<usize>,

    /// Panel columns per page
    #[arg(long)]
    columns: Option<usize>,

    /// Side of the sheet being printed
    #[arg(long, value_enum)]
    page_side: Option<PageSideArg>,

    /// Blank panels at each end of the book
    #[arg(long)]
    flyleaves: Option<usize>,

    /// Frame to panel ordering
    #[arg(long, value_enum)]
    order: Option<OrderArg>,

    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    footer: Option<String>,

    #[arg(long)]
    page_width: Option<String>,

    #[arg(long)]
    page_height: Option<String>,

    #[arg(long)]
    page_padding: Option<String>,

    /// Padding on the handle, under the binding
    #[arg(long)]
    handle_padding: Option<String>,

    #[arg(long)]
    image_width: Option<String>,

    #[arg(long)]
    image_height: Option<String>,

    #[arg(long)]
    image_margin: Option<String>,

    #[arg(long)]
    image_position: Option<String>,

    #[arg(long)]
    image_rotate: Option<String>,

    #[arg(long)]
    image_filter: Option<String>,

    /// Crop images to fill their panel
    #[arg(long, value_name = "BOOL")]
    crop: Option<bool>,

    /// Print cut lines between panels
    #[arg(long, value_name = "BOOL")]
    print_cut_lines: Option<bool>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PageSideArg {
    Front,
    Back,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrderArg {
    Sequential,
    Imposition,
}

impl From<PageSideArg> for flipbook_layout::PageSide {
    fn from(arg: PageSideArg) -> Self {
        match arg {
            PageSideArg::Front => Self::Front,
            PageSideArg::Back => Self::Back,
        }
    }
}

impl From<OrderArg> for flipbook_layout::PanelOrder {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Sequential => Self::Sequential,
            OrderArg::Imposition => Self::Imposition,
        }
    }
}

impl LayoutArgs {
    /// Base settings, flags applied, cover set, validated
    async fn resolve(&self, cover: Option<CoverSelection>) -> Result<LayoutSettings> {
        let mut settings = match &self.settings {
            Some(path) => LayoutSettings::load(path)
                .await
                .with_context(|| format!("Failed to load settings from {}", path.display()))?,
            None => LayoutSettings::default(),
        };

        self.apply(&mut settings);
        if let Some(cover) = cover {
            settings.cover = cover;
        }

        settings.validate()?;
        Ok(settings)
    }

    fn apply(&self, settings: &mut LayoutSettings) {
        overlay(&mut settings.rows, &self.rows);
        overlay(&mut settings.columns, &self.columns);
        overlay(&mut settings.flyleaves_count, &self.flyleaves);
        if let Some(side) = self.page_side {
            settings.page_side = side.into();
        }
        if let Some(order) = self.order {
            settings.order = order.into();
        }

        let presentation = &mut settings.presentation;
        overlay(&mut presentation.title, &self.title);
        overlay(&mut presentation.footer, &self.footer);
        overlay(&mut presentation.page_width, &self.page_width);
        overlay(&mut presentation.page_height, &self.page_height);
        overlay(&mut presentation.page_padding, &self.page_padding);
        overlay(&mut presentation.handle_padding, &self.handle_padding);
        overlay(&mut presentation.image_width, &self.image_width);
        overlay(&mut presentation.image_height, &self.image_height);
        overlay(&mut presentation.image_margin, &self.image_margin);
        overlay(&mut presentation.image_position, &self.image_position);
        overlay(&mut presentation.image_rotate, &self.image_rotate);
        overlay(&mut presentation.image_filter, &self.image_filter);
        overlay(&mut presentation.crop, &self.crop);
        overlay(&mut presentation.print_cut_lines, &self.print_cut_lines);
    }
}

fn overlay<T: Clone>(target: &mut T, value: &Option<T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

fn cover_selection(cover: Option<String>, median_cover: bool) -> Option<CoverSelection> {
    match cover {
        Some(name) => Some(CoverSelection::File(name)),
        None if median_cover => Some(CoverSelection::MedianFrame),
        None => None,
    }
}

/// `<unix-timestamp>-<input stem>`
fn output_dir_name(input: &Path, timestamp: i64) -> Result<String> {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .with_context(|| format!("Cannot derive an output name from {}", input.display()))?;
    Ok(format!("{}-{}", timestamp, stem))
}

fn print_statistics(stats: &LayoutStatistics) {
    println!("Layout Statistics:");
    println!("  Frames: {}", stats.frame_count);
    println!("  Panels: {}", stats.panel_count);
    println!("  Pages: {}", stats.page_count);
    println!("  Panels per page: {}", stats.panels_per_page);
    println!("  Flyleaf panels: {}", stats.flyleaf_panels);
    println!("  Blank panels: {}", stats.blank_panels);
    println!("  Empty slots: {}", stats.empty_slots);
    println!("  Cover: {}", if stats.has_cover { "yes" } else { "no" });
}

/// Print statistics and the optional preview for a built layout
fn report(document: &LayoutDocument, dir: &Path, preview: Option<usize>) {
    let stats = calculate_statistics(document);
    if stats.frame_count == 0 {
        log::warn!("No frames found in {}", dir.display());
    }
    print_statistics(&stats);

    if let Some(pages) = preview {
        println!();
        print!("{}", generate_preview(document, pages));
    }
}

/// Write the settings sidecar and the render context, returning the context path
async fn write_outputs(
    document: &LayoutDocument,
    dir: &Path,
    output: Option<PathBuf>,
    save_settings: bool,
) -> Result<PathBuf> {
    if save_settings {
        let path = dir.join(SETTINGS_FILENAME);
        document.settings().save(&path).await?;
        log::info!("Saved settings to {}", path.display());
    }

    let output = output.unwrap_or_else(|| dir.join(LAYOUT_FILENAME));
    save_document(document, &output).await?;
    Ok(output)
}

impl LayoutCommand {
    async fn run(self) -> Result<()> {
        let cover = cover_selection(self.cover, self.median_cover);
        let settings = self.layout.resolve(cover).await?;

        let mut filter = FrameFilter::default().with_extension(Some(self.extension));
        if let Some(prefix) = self.prefix {
            filter = filter.with_prefix(prefix);
        }
        if let CoverSelection::File(name) = &settings.cover {
            verify_cover(&self.dir, name).await?;
            filter = filter.excluding(name.clone());
        }

        let source = DirectoryFrames::new(&self.dir, filter);
        let document = layout_from_source(&source, &settings).await?;
        report(&document, &self.dir, self.preview);

        if self.stats_only {
            return Ok(());
        }

        let output =
            write_outputs(&document, &self.dir, self.output, !self.no_save_settings).await?;
        println!("Laid out {} pages → {}", document.page_count(), output.display());
        Ok(())
    }
}

impl ExtractCommand {
    async fn run(self) -> Result<()> {
        let extractor = FfmpegExtractor::new(self.fps).with_prefix(self.prefix);
        let count = extractor.extract(&self.input, &self.dir).await?;
        println!("Extracted {} frames → {}", count, self.dir.display());
        Ok(())
    }
}

impl BuildCommand {
    async fn run(self) -> Result<()> {
        let started = Instant::now();

        let dir = match self.dir {
            Some(dir) => dir,
            None => {
                let name = output_dir_name(&self.input, chrono::Utc::now().timestamp())?;
                Path::new(OUTPUT_ROOT).join(name)
            }
        };
        tokio::fs::create_dir_all(&dir)
            .await
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        let cover = match &self.cover {
            Some(path) => Some(CoverSelection::File(import_cover(path, &dir).await?)),
            None if self.median_cover => Some(CoverSelection::MedianFrame),
            None => None,
        };
        // Bad settings should fail before the slow extraction step
        let settings = self.layout.resolve(cover).await?;

        let extractor = FfmpegExtractor::new(self.fps);
        extractor.extract(&self.input, &dir).await?;

        let mut filter = extractor.frame_filter();
        if let CoverSelection::File(name) = &settings.cover {
            filter = filter.excluding(name.clone());
        }

        let source = DirectoryFrames::new(&dir, filter);
        let document = layout_from_source(&source, &settings).await?;
        report(&document, &dir, self.preview);

        let output = write_outputs(&document, &dir, None, !self.no_save_settings).await?;
        println!(
            "Built {} pages in {:.1}s → {}",
            document.page_count(),
            started.elapsed().as_secs_f64(),
            output.display()
        );
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::CliLogger::new(cli.log_level()).init()?;

    match cli.command {
        Commands::Layout(command) => command.run().await,
        Commands::Extract(command) => command.run().await,
        Commands::Build(command) => command.run().await,
    }
}
