use anyhow::Result;
use clap::Parser;
use rich_menu_gen::menu::Style;
use rich_menu_gen::rich_menu::{self, Options, DEFAULT_BASE_URL, DEFAULT_OUTPUT};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "rich-menu-gen",
    about = "Render the 3x2 rich menu background image"
)]
struct Args {
    /// Output PNG path. The directory must already exist.
    #[clap(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Visual style of the cells
    #[clap(short, long, value_enum, default_value_t = Style::Badge)]
    style: Style,

    /// Font file to try before the system font list
    #[clap(long, value_name = "FILE")]
    font: Option<PathBuf>,

    /// Also write the rich menu definition (size, tap areas, actions) as JSON
    #[clap(long, value_name = "FILE")]
    menu_json: Option<PathBuf>,

    /// Frontend origin prefixed to each tap action path
    #[clap(long, value_name = "URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

impl From<Args> for Options {
    fn from(args: Args) -> Self {
        Options {
            output: args.output,
            style: args.style,
            font: args.font,
            menu_json: args.menu_json,
            base_url: args.base_url,
        }
    }
}

fn main() -> Result<()> {
    // Info by default, RUST_LOG still wins
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let report = rich_menu::generate_rich_menu(&args.into())?;

    println!(
        "✓ Saved rich menu: {} ({}x{}, {} bytes)",
        report.output.display(),
        report.width,
        report.height,
        report.bytes
    );
    println!("  Style: {}, font: {}", report.style, report.font_source);
    Ok(())
}
