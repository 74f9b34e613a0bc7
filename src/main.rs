// SPDX-License-Identifier: MIT
//
// legible — pick readable foreground colors for a background.
//
// This binary is the presentation side of the contrast engine:
//
//   legible-color    → Color value, hex parsing, RGBA ↔ HSBA
//   legible-contrast → luminance, contrast ratio, role policies
//
// It owns the one piece of state the engine refuses to hold (the current
// background), parses it from the command line or rolls a random one,
// and prints the foreground for each requested role:
//
//   $ legible '#1e293b'
//   background #1e293b
//   primary    #ffffff  ratio  14.62  wcag 14.62
//   ...

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::Rng;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use legible_color::Color;
use legible_contrast::{
    ContrastOptions, ContrastRole, RatioFormula, contrast_ratio, contrasting_color,
    symmetric_contrast_ratio,
};

/// Pick readable foreground colors for a background.
#[derive(Debug, Parser)]
#[command(name = "legible", version, about)]
struct Cli {
    /// Background color: #RGB, #RGBA, #RRGGBB or #RRGGBBAA.
    #[arg(required_unless_present = "random")]
    background: Option<Color>,

    /// Use a random opaque background instead.
    #[arg(long, conflicts_with = "background")]
    random: bool,

    /// Only print these roles (primary, secondary, link, neon-link).
    #[arg(short, long = "role", value_name = "ROLE")]
    roles: Vec<ContrastRole>,

    /// Contrast floor for every selected role.
    #[arg(short, long)]
    threshold: Option<f64>,

    /// Re-check secondary and neon link results and fall back to black/white.
    #[arg(long)]
    strict: bool,

    /// Use the order-independent WCAG ratio for contrast tests.
    #[arg(long)]
    symmetric: bool,

    /// TOML options file.
    #[arg(short, long, env = "LEGIBLE_CONFIG")]
    config: Option<PathBuf>,

    /// Log decisions to stderr (`RUST_LOG` takes precedence).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let roles = if cli.roles.is_empty() {
        ContrastRole::ALL.to_vec()
    } else {
        cli.roles.clone()
    };
    let options = build_options(&cli, &roles)?;
    debug!(?options, "resolved options");

    let background = cli.background.unwrap_or_else(random_background);

    println!("background {background}");
    for role in roles {
        let fg = contrasting_color(background, role, &options);
        println!("{}", role_line(role, fg, background));
    }

    Ok(())
}

/// One output row: role, foreground hex, engine ratio and WCAG ratio.
fn role_line(role: ContrastRole, fg: Color, background: Color) -> String {
    format!(
        "{:<10} {fg}  ratio {:>6.2}  wcag {:>5.2}",
        role.name(),
        contrast_ratio(fg, background),
        symmetric_contrast_ratio(fg, background),
    )
}

/// Install the stderr subscriber. `RUST_LOG` overrides the default level.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Options file first, then command-line flags on top.
fn build_options(cli: &Cli, roles: &[ContrastRole]) -> Result<ContrastOptions> {
    let mut options = match &cli.config {
        Some(path) => load_options(path)?,
        None => ContrastOptions::default(),
    };

    if cli.strict {
        options = options.with_strict(true);
    }
    if cli.symmetric {
        options = options.with_formula(RatioFormula::Symmetric);
    }
    if let Some(threshold) = cli.threshold {
        for &role in roles {
            options = options.with_threshold(role, threshold);
        }
    }

    options.validate().context("invalid command-line options")?;
    Ok(options)
}

fn load_options(path: &Path) -> Result<ContrastOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read options file {}", path.display()))?;
    ContrastOptions::from_toml_str(&text)
        .with_context(|| format!("invalid options file {}", path.display()))
}

/// A uniformly random opaque background.
fn random_background() -> Color {
    let mut rng = rand::rng();
    Color::rgb(rng.random(), rng.random(), rng.random())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_background_and_roles() {
        let cli = Cli::try_parse_from(["legible", "#000", "-r", "link", "--role", "neon-link"])
            .unwrap();
        assert_eq!(cli.background, Some(Color::BLACK));
        assert_eq!(cli.roles, vec![ContrastRole::Link, ContrastRole::NeonLink]);
    }

    #[test]
    fn background_is_required_without_random() {
        assert!(Cli::try_parse_from(["legible"]).is_err());
        assert!(Cli::try_parse_from(["legible", "--random"]).is_ok());
        assert!(Cli::try_parse_from(["legible", "#fff", "--random"]).is_err());
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(Cli::try_parse_from(["legible", "#zzzzzz"]).is_err());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "legible", "#fff", "--strict", "--symmetric", "-t", "7", "-r", "primary",
        ])
        .unwrap();
        let options = build_options(&cli, &cli.roles).unwrap();
        assert!(options.strict);
        assert_eq!(options.formula, RatioFormula::Symmetric);
        assert_eq!(options.threshold(ContrastRole::Primary), Some(7.0));
        assert_eq!(options.threshold(ContrastRole::Secondary), Some(4.5));
    }

    #[test]
    fn threshold_below_one_is_an_error() {
        let cli = Cli::try_parse_from(["legible", "#fff", "-t", "0.5"]).unwrap();
        assert!(build_options(&cli, &ContrastRole::ALL).is_err());
    }

    #[test]
    fn role_line_shows_hex_and_both_ratios() {
        assert_eq!(
            role_line(ContrastRole::Primary, Color::WHITE, Color::BLACK),
            "primary    #ffffff  ratio  21.00  wcag 21.00"
        );
        assert_eq!(
            role_line(ContrastRole::NeonLink, Color::BLACK, Color::WHITE),
            "neon-link  #000000  ratio   0.05  wcag 21.00"
        );
    }

    #[test]
    fn random_background_is_opaque_and_in_range() {
        let c = random_background();
        assert!(c.is_opaque());
        for channel in [c.r, c.g, c.b] {
            assert!((0.0..1.0).contains(&channel));
        }
    }
}
