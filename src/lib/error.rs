use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Please specify the input filename on the command line.")]
    MissingArgument,

    #[error("cannot read '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("word list is empty")]
    EmptyWordList,

    #[error("cannot sample {sample} words from a list of {available}")]
    SampleSize { sample: usize, available: usize },

    #[error("failed to write output")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
