//! Command-line interface for rendering one pattern or a batch of random ones

use crate::io::assets::{AssetProvider, DirectoryAssets};
use crate::io::configuration::{DEFAULT_ASSET_DIRS, DEFAULT_LOG_LEVEL, DEFAULT_OUTPUT};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::export_png;
use crate::io::progress::ProgressManager;
use crate::render::compositor::{RenderRequest, render};
use crate::render::layers::LayerSet;
use crate::seed::codec::Seed;
use crate::seed::format::Game;
use crate::seed::randomizer::TrainerIds;
use crate::session::editor::EditingSession;
use clap::Parser;
use rand::Rng;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "spotgen")]
#[command(
    author,
    version,
    about = "Render deterministic spot patterns from 32-bit seeds"
)]
/// Command-line arguments for the pattern renderer
pub struct Cli {
    /// Seed as 1 to 8 hex digits; randomized when omitted
    #[arg(short, long, value_parser = parse_seed)]
    pub seed: Option<Seed>,

    /// Render with the special artwork and palette
    #[arg(short = 'S', long)]
    pub special: bool,

    /// Game whose storage rules apply to randomization
    #[arg(short, long, value_enum, default_value_t = Game::Gen3)]
    pub game: Game,

    /// Trainer public identifier
    #[arg(long, default_value_t = 0)]
    pub tid: u16,

    /// Trainer secret identifier
    #[arg(long, default_value_t = 0)]
    pub sid: u16,

    /// Directory holding the artwork; may be repeated, first existing wins
    #[arg(short, long = "assets", value_name = "DIR")]
    pub asset_dirs: Vec<PathBuf>,

    /// Output PNG path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Number of randomized patterns to render
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Log level used when `RUST_LOG` is unset
    #[arg(long, default_value = DEFAULT_LOG_LEVEL)]
    pub log_level: String,
}

/// Parse a seed argument
///
/// # Errors
///
/// Returns `SpotError::InvalidSeedText` for anything but 1 to 8 hex digits
pub fn parse_seed(text: &str) -> Result<Seed> {
    Seed::from_hex(text)
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Trainer identifiers from the arguments
    pub const fn trainer_ids(&self) -> TrainerIds {
        TrainerIds {
            tid: self.tid,
            sid: self.sid,
        }
    }

    /// Asset provider for the given or default directories
    pub fn asset_provider(&self) -> DirectoryAssets {
        if self.asset_dirs.is_empty() {
            DirectoryAssets::discover(DEFAULT_ASSET_DIRS)
        } else {
            DirectoryAssets::discover(&self.asset_dirs)
        }
    }

    /// Reject argument combinations that cannot be honored
    ///
    /// # Errors
    ///
    /// Returns `SpotError::InvalidParameter` when `count` is zero or a fixed
    /// seed is combined with a batch
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(invalid_parameter(
                "count",
                &self.count,
                &"must be at least 1",
            ));
        }
        if self.count > 1 && self.seed.is_some() {
            return Err(invalid_parameter(
                "count",
                &self.count,
                &"a fixed seed renders a single pattern",
            ));
        }
        Ok(())
    }
}

/// Renders the requested patterns and writes them to disk
pub struct RenderProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl RenderProcessor {
    /// Create a processor for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager =
            (cli.should_show_progress() && cli.count > 1).then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Render according to the CLI arguments, returning the written paths
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation or image export fails
    pub fn process(&mut self) -> Result<Vec<PathBuf>> {
        self.cli.validate()?;

        if !self.cli.game.has_spotted_species() {
            tracing::warn!(game = ?self.cli.game, "spotted species does not appear in this game");
        }

        let layers = self.cli.asset_provider().load_layers();
        tracing::info!(layers = layers.len(), "loaded artwork layers");

        let mut rng = rand::rng();
        let mut session = EditingSession::detached(
            self.cli.game.era(),
            self.cli.trainer_ids(),
            self.cli.seed.unwrap_or_default(),
            self.cli.special,
        );

        if self.cli.count == 1 {
            let request = if self.cli.seed.is_some() {
                session.render_request()
            } else {
                session.randomize(&mut rng)
            };
            let path = self.cli.output.clone();
            Self::write(&request, &layers, &path)?;
            return Ok(vec![path]);
        }

        self.process_batch(session, &layers, &mut rng)
    }

    fn process_batch<G: Rng + ?Sized>(
        &mut self,
        mut session: EditingSession,
        layers: &LayerSet,
        rng: &mut G,
    ) -> Result<Vec<PathBuf>> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(self.cli.count);
        }

        let mut written = Vec::with_capacity(self.cli.count);
        for index in 0..self.cli.count {
            let request = session.randomize(rng);
            let path = Self::get_batch_path(&self.cli.output, index, request.seed);
            Self::write(&request, layers, &path)?;
            written.push(path);

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete(&request.seed.to_hex());
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(written)
    }

    fn write(request: &RenderRequest, layers: &LayerSet, path: &Path) -> Result<()> {
        let img = render(request, layers);
        export_png(&img, path)?;
        tracing::info!(seed = %request.seed, path = %path.display(), "wrote pattern");
        Ok(())
    }

    /// Output path for batch entry `index`: `<stem>_<index>_<SEED>.<ext>`
    pub fn get_batch_path(output: &Path, index: usize, seed: Seed) -> PathBuf {
        let stem = output.file_stem().unwrap_or_default();
        let extension = output
            .extension()
            .map_or_else(|| "png".into(), |ext| ext.to_string_lossy());
        let name = format!("{}_{index}_{seed}.{extension}", stem.to_string_lossy());

        output
            .parent()
            .map_or_else(|| PathBuf::from(&name), |parent| parent.join(&name))
    }
}
