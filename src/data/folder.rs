//! Loads a binary image dataset laid out as
//!
//! ```text
//! root/
//!   train/<class_a>/*.png
//!   train/<class_b>/*.png
//!   test/<class_a>/*.png
//!   test/<class_b>/*.png
//! ```
//!
//! Class names are the sorted folder names under `train/`; the first one is
//! label 0. Hidden files (leading `.`) are skipped.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::data::dataset::Dataset;
use crate::data::image::load_rgb_pixels;
use crate::error::{Error, Result};

pub fn load_dataset(root: &Path, size: u32) -> Result<Dataset> {
    let classes = class_names(&root.join("train"))?;

    let (train_images, train_labels) = load_split(&root.join("train"), &classes, size)?;
    let (test_images, test_labels) = load_split(&root.join("test"), &classes, size)?;

    Dataset::from_raw(&train_images, &train_labels, &test_images, &test_labels, classes)
}

fn class_names(dir: &Path) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    names.sort();

    if names.len() != 2 {
        return Err(Error::ClassCount { path: dir.to_path_buf(), found: names.len() });
    }
    Ok(names)
}

/// Reads every image under `dir/<class>/`; a missing class folder contributes
/// no examples.
fn load_split(dir: &Path, classes: &[String], size: u32) -> Result<(Vec<Vec<u8>>, Vec<u8>)> {
    let mut images = Vec::new();
    let mut labels = Vec::new();

    for (label, class) in classes.iter().enumerate() {
        let class_dir = dir.join(class);
        if !class_dir.is_dir() {
            continue;
        }

        let files = image_files(&class_dir)?;
        debug!("{}: {} images", class_dir.display(), files.len());

        for path in files {
            images.push(load_rgb_pixels(&path, size)?);
            labels.push(label as u8);
        }
    }

    if images.is_empty() {
        return Err(Error::EmptyDataset { path: dir.to_path_buf() });
    }
    Ok((images, labels))
}

fn image_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        if entry.file_type()?.is_file() && !hidden {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}
