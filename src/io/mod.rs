/// Command-line arguments and run orchestration
pub mod cli;
/// Fixed file names, markup fragments and slot layout
pub mod configuration;
/// Reading and writing HTML documents
pub mod document;
/// Error type and helpers
pub mod error;
/// Loading the line-oriented image list
pub mod image_list;
/// Progress display across documents
pub mod progress;
