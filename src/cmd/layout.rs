use crate::reports::TerminalSurface;
use clap::{ArgMatches, Args};
use devgalaxy::config::GalaxyConfig;
use devgalaxy::error::GxResult;
use devgalaxy::galaxy::GalaxyScene;
use devgalaxy::store::JsonProfileStore;

#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    #[command(flatten)]
    pub config: GalaxyConfig,

    /// JSON array of profile records (or {"profiles": [...]})
    #[arg(short, long)]
    pub profiles: String,

    /// JSON file with orbit parameters; explicit flags override it
    #[arg(long)]
    pub config_file: Option<String>,

    /// Pretend the viewport is narrow (flat card list)
    #[arg(long, default_value_t = false)]
    pub narrow: bool,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: LayoutArgs, matches: &ArgMatches) -> GxResult<()> {
    let config = match &args.config_file {
        Some(path) => {
            let mut file_config = GalaxyConfig::load_from_file(path)?;
            file_config.merge_from_cli(&args.config, matches);
            file_config.validate()?;
            file_config
        }
        None => args.config.clone(),
    };

    let store = JsonProfileStore::load_from_file(&args.profiles)?;
    let mut scene = GalaxyScene::from_config(&config)?;
    let mut surface = TerminalSurface { json: args.json };
    let wide = !args.narrow;

    scene.refresh(&store, &wide, &mut surface)?;
    Ok(())
}
