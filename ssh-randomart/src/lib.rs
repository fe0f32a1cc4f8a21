#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/6ee8e381/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/6ee8e381/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::arithmetic_side_effects,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;

mod direction;
mod error;
mod fingerprint;
mod randomart;
mod walk;

pub use crate::{
    direction::{Direction, Directions, Move},
    error::{DecodeError, Error, Result},
    fingerprint::{Fingerprint, decode_token},
    randomart::{END_SYMBOL, Frames, Randomart, START_SYMBOL, SYMBOLS, symbol},
    walk::{HEIGHT, Position, START_POSITION, Snapshot, Snapshots, VisitCounts, WIDTH, Walk},
};

#[cfg(feature = "rand_core")]
pub use rand_core;
