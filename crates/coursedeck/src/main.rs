mod app;
mod banner;
mod certificate;
mod chime;
mod cli;
mod commands;
mod config;
mod deck;
mod navigator;
mod particles;
mod theme;

use clap::Parser;

fn main() -> anyhow::Result<()> {
    cli::Cli::parse().run()
}
