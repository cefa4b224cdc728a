// src/errors.rs

//! Crate-wide error type.
//!
//! Interrupted reads and writes are retried where they happen and never
//! reach this type. Everything here is fatal for the process that hits it.
//!
//! Variants wrapping an OS error keep it as `#[source]` only; print with
//! `{:#}` to get the whole chain on one line.

use std::ffi::OsString;
use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinestampError {
    #[error("pipe creation failed")]
    ChannelCreation(#[source] io::Error),

    #[error("pipe {0} endpoint was already taken")]
    EndpointTaken(&'static str),

    #[error("querying pipe capacity failed")]
    PipeCapacity(#[source] io::Error),

    #[error("read failed")]
    Read(#[source] io::Error),

    #[error("write failed")]
    Write(#[source] io::Error),

    #[error("timestamp formatting failed: {0}")]
    Timestamp(String),

    #[error("dup2 onto fd {fd} failed")]
    Redirect {
        fd: i32,
        #[source]
        source: io::Error,
    },

    #[error("spawning capture process failed")]
    SpawnCapture(#[source] io::Error),

    #[error("executing {command:?} failed")]
    Exec {
        command: OsString,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, LinestampError>;
