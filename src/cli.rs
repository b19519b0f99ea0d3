use clap::{Parser, Subcommand};

/// MenuFit — builds the daily lunch page and remembers yesterday's protein.
#[derive(Parser, Debug)]
#[command(name = "menu_fit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the weekly menu JSON file.
    #[arg(short, long, default_value = "menus.json")]
    pub menus: String,

    /// Path to the recommendation state JSON file.
    #[arg(short, long, default_value = "state.json")]
    pub state: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the static page and record today's protein choice.
    Build {
        /// Directory the page is written into.
        #[arg(long, default_value = "docs")]
        out: String,

        /// Phone number for the WhatsApp link, digits only.
        #[arg(long, env = "PHONE")]
        phone: String,

        /// Run as if today were this date (yyyy-mm-dd).
        #[arg(long)]
        date: Option<String>,
    },

    /// Print today's message without touching the page or the state.
    Preview {
        /// Run as if today were this date (yyyy-mm-dd).
        #[arg(long)]
        date: Option<String>,
    },

    /// Forget the recorded protein and date.
    Reset,
}

impl Default for Command {
    fn default() -> Self {
        Command::Preview { date: None }
    }
}
