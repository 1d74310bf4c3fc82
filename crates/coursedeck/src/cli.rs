use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "coursedeck")]
#[command(author, version, about)]
#[command(long_about = "A markdown-based course slideshow viewer.\n\n\
    Write your slides in plain markdown and walk through them with arrow\n\
    keys, swipes, or on-screen controls.\n\n\
    Examples:\n  \
    coursedeck slides.md                    Launch presentation (fullscreen)\n  \
    coursedeck slides.md --windowed         Launch in a window\n  \
    coursedeck certificate --name \"Ada\"     Export a completion certificate")]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Markdown file to present
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Launch in a window instead of fullscreen
    #[arg(long)]
    pub windowed: bool,

    /// Start on a specific slide (1-indexed)
    #[arg(long)]
    pub slide: Option<usize>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Export a completion certificate as a PNG image
    Certificate {
        /// Recipient name printed on the certificate
        #[arg(short, long)]
        name: String,

        /// Course title printed on the certificate
        #[arg(short, long, default_value = "the Interactive Web Development course")]
        course: String,

        /// Output PNG path
        #[arg(short, long, default_value = "certificate.png")]
        output: PathBuf,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (theme, start_mode)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Certificate {
                name,
                course,
                output,
            }) => crate::commands::certificate::run(name, course, output),
            Some(Commands::Version) => {
                crate::banner::print_banner_with_version();
                Ok(())
            }
            None => {
                if let Some(file) = self.file {
                    if !file.exists() {
                        anyhow::bail!("File not found: {}", file.display());
                    }
                    crate::app::run(file, self.windowed, self.slide)
                } else {
                    use clap::CommandFactory;
                    let mut cmd = Self::command();
                    cmd.print_help()?;
                    println!();
                    Ok(())
                }
            }
        }
    }
}
