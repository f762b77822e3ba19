//! Building blocks shared by Tabby command-line programs.

pub mod config;
