pub mod dataset;
pub mod folder;
pub mod image;
pub mod preprocess;
pub mod synthetic;

pub use dataset::Dataset;
pub use folder::load_dataset;
pub use synthetic::separable_blobs;
