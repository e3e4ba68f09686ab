use std::fs;
use std::path::{Path, PathBuf};

/// Art leading the score line under the win banner.
pub const SCORE_PREFIX: &str = " ░░░░░░░░░▒▒▒▒▒▒▒▒▒▒▀▀░░░░░░░░ SCORE: ";

/// Decorative screens printed around a game.
#[derive(Clone, Debug, PartialEq)]
pub enum Banner {
    Welcome,
    Won,
    Lost,
}

impl Banner {
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Welcome => "welcome.txt",
            Self::Won => "gamewon.txt",
            Self::Lost => "gameover.txt",
        }
    }
}

/// Directory holding the banner text files.
#[derive(Clone, Debug)]
pub struct Banners {
    dir: PathBuf,
}

impl Banners {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Banner text, `None` when the file is missing or unreadable.
    pub fn load(&self, banner: Banner) -> Option<String> {
        let path = self.dir.join(banner.file_name());
        match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(err) => {
                log::warn!("Could not read banner {}: {}", path.display(), err);
                None
            }
        }
    }

    /// Win screen with the score line appended.
    pub fn won(&self, score: f64) -> String {
        let mut text = self.load(Banner::Won).unwrap_or_default();
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
        text.push_str(&format!("{SCORE_PREFIX}{score:.2}\n"));
        text
    }
}
