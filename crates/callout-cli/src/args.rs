//! Command-line argument definitions for the Callout CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the Callout scene renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input scene file (TOML)
    #[arg(help = "Path to the input scene file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["callout", "scene.toml"]);

        assert_eq!(args.input, "scene.toml");
        assert_eq!(args.output, "out.svg");
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_all_flags() {
        let args = Args::parse_from([
            "callout",
            "scene.toml",
            "-o",
            "bubble.svg",
            "--config",
            "custom.toml",
            "--log-level",
            "debug",
        ]);

        assert_eq!(args.output, "bubble.svg");
        assert_eq!(args.config.as_deref(), Some("custom.toml"));
        assert_eq!(args.log_level, "debug");
    }
}
