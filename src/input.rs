//! Script sources for the CLI.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when reading a script.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read script from stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read script file {path}: {source}")]
    File {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where the script text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Map the binary's optional positional argument. `None` and `-` mean
    /// stdin.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => Source::Stdin,
            Some(path) => Source::File(PathBuf::from(path)),
        }
    }

    /// Read the whole script into a string.
    pub fn read(&self) -> Result<String, InputError> {
        match self {
            Source::Stdin => {
                let mut script = String::new();
                io::stdin()
                    .read_to_string(&mut script)
                    .map_err(InputError::Stdin)?;
                Ok(script)
            }
            Source::File(path) => fs::read_to_string(path).map_err(|source| InputError::File {
                path: path.clone(),
                source,
            }),
        }
    }
}
