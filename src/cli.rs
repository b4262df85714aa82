use clap::builder::styling::AnsiColor;
use clap::builder::Styles;
use clap::Parser;

const fn extra_build_info() -> &'static str {
    match option_env!("CARGO_BUILD_DESC") {
        Some(e) => e,
        None => env!("CARGO_PKG_VERSION"),
    }
}
pub const VERSION: &str = extra_build_info();
const INFO_STRING: &str = "
🧬 gcq version ";
const AFTER_STRING: &str = "
   ──────────────────────────────────
   interactive GC-content queries over NCBI dataset archives";

// colouring of the help
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().bold())
    .usage(AnsiColor::BrightMagenta.on_default().bold())
    .literal(AnsiColor::BrightMagenta.on_default())
    .placeholder(AnsiColor::White.on_default());

#[derive(Parser)]
#[command(
    version = VERSION,
    about = format!("{}{}{}", INFO_STRING, VERSION, AFTER_STRING),
    styles = STYLES
)]
pub struct Cli {
    /// the NCBI dataset archive to load
    #[arg(default_value = "ncbi_dataset.zip")]
    pub archive: String,
}
