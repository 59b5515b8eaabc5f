use std::path::PathBuf;

use clap::Parser;
use cc_render::SceneSettings;

#[derive(Parser, Debug, Clone)]
#[command(name = "cc-client")]
#[command(about = "Animated cyber container icon scene", long_about = None)]
pub struct Cli {
    /// Seed for coin and number phases
    #[arg(long)]
    pub seed: Option<u64>,

    /// Where "Download Icon" writes the PNG
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// TOML file with scene settings
    #[arg(long)]
    pub settings: Option<PathBuf>,

    #[arg(long = "no-auto-rotate", default_value = "false")]
    pub no_auto_rotate: bool,

    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    #[arg(long, default_value_t = 1024)]
    pub height: u32,
}

impl Cli {
    /// Settings file first, then flags on top.
    pub fn scene_settings(&self) -> SceneSettings {
        let mut settings = match &self.settings {
            Some(path) => SceneSettings::load(path),
            None => SceneSettings::default(),
        };
        if self.seed.is_some() {
            settings.seed = self.seed;
        }
        if let Some(output) = &self.output {
            settings.export_path = output.clone();
        }
        if self.no_auto_rotate {
            settings.auto_rotate = false;
        }
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from([
            "cc-client",
            "--seed",
            "9",
            "--output",
            "icon.png",
            "--no-auto-rotate",
        ]);
        let settings = cli.scene_settings();
        assert_eq!(settings.seed, Some(9));
        assert_eq!(settings.export_path, PathBuf::from("icon.png"));
        assert!(!settings.auto_rotate);
        assert_eq!(cli.width, 1024);
    }

    #[test]
    fn no_flags_keep_defaults() {
        let cli = Cli::parse_from(["cc-client"]);
        assert_eq!(cli.scene_settings(), SceneSettings::default());
    }
}
