//! Fire-and-forget playback of lesson audio assets

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Host audio facility. Playback is never awaited.
pub trait AudioPlayer {
    fn play(&mut self, asset: &str);
}

/// Resolve a site-absolute asset path (`/audio/hello.mp3`) against `base`
pub fn resolve_asset(base: &Path, asset: &str) -> PathBuf {
    base.join(asset.trim_start_matches('/'))
}

/// Records requested assets instead of playing them
#[derive(Debug, Default, Clone)]
pub struct RecordingPlayer {
    pub played: Vec<String>,
}

impl AudioPlayer for RecordingPlayer {
    fn play(&mut self, asset: &str) {
        log::info!("audio requested: {}", asset);
        self.played.push(asset.to_string());
    }
}

/// Player commands tried in order
const PLAY_COMMANDS: [(&str, &[&str]); 3] = [
    ("afplay", &[]),
    ("mpg123", &["-q"]),
    ("ffplay", &["-nodisp", "-autoexit", "-loglevel", "quiet"]),
];

/// Spawns the first available system player and detaches
#[derive(Debug, Clone)]
pub struct SystemPlayer {
    asset_base: PathBuf,
}

impl SystemPlayer {
    pub fn new(asset_base: impl Into<PathBuf>) -> Self {
        Self {
            asset_base: asset_base.into(),
        }
    }
}

impl AudioPlayer for SystemPlayer {
    fn play(&mut self, asset: &str) {
        let path = resolve_asset(&self.asset_base, asset);
        if !path.exists() {
            log::warn!("audio asset not found: {}", path.display());
            return;
        }

        for (program, args) in PLAY_COMMANDS {
            let spawned = Command::new(program)
                .args(args)
                .arg(&path)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();
            match spawned {
                Ok(_) => {
                    log::debug!("playing {} with {}", path.display(), program);
                    return;
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
                Err(e) => {
                    log::warn!("audio playback failed: {}", e);
                    return;
                }
            }
        }
        log::warn!("no audio player available for {}", path.display());
    }
}
