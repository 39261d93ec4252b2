use std::{fmt, path::PathBuf};

use tracing::warn;

use crate::storage::{backing_store::DEFAULT_BACKING_STORE, page_constants::MAX_FRAMES};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Opt,
}

impl PolicyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PolicyKind::Fifo => "fifo",
            PolicyKind::Lru => "lru",
            PolicyKind::Opt => "opt",
        }
    }

    // Anything unrecognised, including no argument at all, runs FIFO
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("lru") => PolicyKind::Lru,
            Some("opt") => PolicyKind::Opt,
            Some("fifo") | None => PolicyKind::Fifo,
            Some(other) => {
                warn!(policy = other, "unknown replacement policy, using fifo");
                PolicyKind::Fifo
            }
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the frame count argument. Missing, unparsable, zero, negative or
/// oversized values all fall back to `MAX_FRAMES`.
pub fn frame_count_from_arg(arg: Option<&str>) -> usize {
    let Some(raw) = arg else {
        return MAX_FRAMES;
    };

    match raw.trim().parse::<i64>() {
        Ok(frames) if (1..=MAX_FRAMES as i64).contains(&frames) => frames as usize,
        _ => {
            warn!(frames = raw, fallback = MAX_FRAMES, "invalid frame count");
            MAX_FRAMES
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub reference_file: PathBuf,
    pub backing_store: PathBuf,
    pub frame_count: usize,
    pub policy: PolicyKind,
}

impl SimConfig {
    pub fn new(reference_file: impl Into<PathBuf>) -> Self {
        SimConfig {
            reference_file: reference_file.into(),
            backing_store: PathBuf::from(DEFAULT_BACKING_STORE),
            frame_count: MAX_FRAMES,
            policy: PolicyKind::Fifo,
        }
    }

    pub fn from_args(
        reference_file: impl Into<PathBuf>,
        frames: Option<&str>,
        policy: Option<&str>,
    ) -> Self {
        SimConfig {
            frame_count: frame_count_from_arg(frames),
            policy: PolicyKind::from_arg(policy),
            ..SimConfig::new(reference_file)
        }
    }

    pub fn backing_store(mut self, path: impl Into<PathBuf>) -> Self {
        self.backing_store = path.into();
        self
    }
}
