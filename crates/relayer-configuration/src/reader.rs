use std::fs;
use std::io;
use std::path::Path;

/// Read access to the files the configuration refers to
pub trait FileReader {
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Filesystem;

impl FileReader for Filesystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }
}
