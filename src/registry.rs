use qtcw_geometry::{QPoint, QRect};
use std::mem::size_of;

/// Namespace prefix shared by every emitted constant.
pub const PREFIX: &str = "QTCW";

/// One (type name, byte size) pair destined for the output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeEntry {
    pub name: &'static str,
    pub size_bytes: usize,
}

macro_rules! size_entries {
    [$($t:ty),* $(,)?] => {
        [$(SizeEntry { name: stringify!($t), size_bytes: size_of::<$t>() }),*]
    };
}

/// The wrapped types whose sizes get emitted, in output order.
pub const REGISTERED_TYPES: [SizeEntry; 2] = size_entries![QPoint, QRect];
