// tests/test_utils/mod.rs
//
// Shared fixtures for integration tests: scratch directories and WAV files
// synthesised on the fly.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use timbrecheckr::testgen::{self, WavFormat};

/// Scratch directory removed on drop
pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let path = std::env::temp_dir().join(format!("{}-{}", prefix, Uuid::new_v4()));
        fs::create_dir_all(&path).expect("create temp dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

pub fn write_mono(dir: &TempDir, name: &str, samples: &[f32], sample_rate: u32) -> PathBuf {
    let path = dir.join(name);
    testgen::write_wav(&path, samples, sample_rate, 1, WavFormat::Float32).expect("write wav");
    path
}

pub fn write_sine(dir: &TempDir, name: &str, freq: f32, amplitude: f32, sample_rate: u32, secs: f32) -> PathBuf {
    write_mono(dir, name, &testgen::sine(freq, amplitude, sample_rate, secs), sample_rate)
}

pub fn write_noise(dir: &TempDir, name: &str, sample_rate: u32, secs: f32, seed: u64) -> PathBuf {
    write_mono(dir, name, &testgen::white_noise(1.0, sample_rate, secs, seed), sample_rate)
}

pub fn write_silence(dir: &TempDir, name: &str, sample_rate: u32, secs: f32) -> PathBuf {
    write_mono(dir, name, &testgen::silence(sample_rate, secs), sample_rate)
}

pub fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_timbrecheckr"))
}
