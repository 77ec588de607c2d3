//! pridecat CLI.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use pridecat::{FlagVariant, RunConfig};

#[derive(Parser)]
#[command(name = "pridecat")]
#[command(about = "The classic poptart cat in your terminal, flying every pride flag it knows")]
struct Cli {
    /// Show the nyancat with the lesbian flag
    #[arg(short = 'L', long)]
    lesbian: bool,

    /// Show the nyancat with the gay flag
    #[arg(short = 'G', long)]
    gay: bool,

    /// Show the nyancat with the bisexual flag
    #[arg(short = 'B', long)]
    bisexual: bool,

    /// Show the nyancat with the transgender flag
    #[arg(short = 'T', long)]
    transgender: bool,

    /// Show the nyancat with the queer flag
    #[arg(short = 'Q', long)]
    queer: bool,

    /// Show the nyancat with the pansexual flag
    #[arg(short = 'P', long)]
    pansexual: bool,

    /// Show the nyancat with the non-binary flag
    #[arg(short = 'N', long)]
    nonbinary: bool,

    /// Show the nyancat with the asexual flag
    #[arg(short = 'A', long)]
    asexual: bool,

    /// Pride flag by name; supports alternative spellings
    /// (lesbian/l, gay/g, bisexual/bi/b, trans/t, queer/q,
    /// asexual/ace/a, nonbinary/nb, pansexual/pan/p)
    #[arg(short = 'p', long, value_name = "NAME")]
    pride: Option<String>,

    /// Do not display the timer
    #[arg(short = 'n', long = "no-counter")]
    no_counter: bool,

    /// Do not set the titlebar text
    #[arg(short = 's', long = "no-title")]
    no_title: bool,

    /// Do not clear the display between frames
    #[arg(short = 'e', long = "no-clear")]
    no_clear: bool,

    /// Delay between frames, 10 to 1000 milliseconds
    #[arg(short = 'd', long, value_name = "MS")]
    delay: Option<u64>,

    /// Display the requested number of frames, then quit
    #[arg(short = 'f', long, value_name = "N")]
    frames: Option<u32>,

    /// Crop the animation to the given width
    #[arg(short = 'W', long, value_name = "COLS")]
    width: Option<u16>,

    /// Crop the animation to the given height
    #[arg(short = 'H', long, value_name = "ROWS")]
    height: Option<u16>,
}

impl Cli {
    /// The flag to fly: `--pride` spellings win, then the dedicated
    /// switches, then a random pick.
    fn variant(&self) -> Result<FlagVariant, pridecat::Error> {
        if let Some(name) = &self.pride {
            return name.parse();
        }
        let switches = [
            (self.lesbian, FlagVariant::Lesbian),
            (self.gay, FlagVariant::Gay),
            (self.bisexual, FlagVariant::Bisexual),
            (self.transgender, FlagVariant::Transgender),
            (self.queer, FlagVariant::Queer),
            (self.pansexual, FlagVariant::Pansexual),
            (self.nonbinary, FlagVariant::NonBinary),
            (self.asexual, FlagVariant::Asexual),
        ];
        Ok(switches
            .into_iter()
            .find_map(|(set, variant)| set.then_some(variant))
            .unwrap_or_else(FlagVariant::random))
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let variant = cli.variant().map_err(|e| miette::miette!("{}", e))?;

    let mut config = RunConfig::new(variant);
    if let Some(ms) = cli.delay {
        config = config.with_delay_ms(ms);
    }
    config.frame_limit = cli.frames.unwrap_or(0);
    config.crop_width = cli.width;
    config.crop_height = cli.height;
    config.show_counter = !cli.no_counter;
    config.set_title = !cli.no_title;
    config.clear_screen = !cli.no_clear;

    pridecat::run(config).await.map_err(|e| miette::miette!("{}", e))?;

    Ok(())
}
