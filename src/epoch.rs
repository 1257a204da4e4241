//! Platform epochs.

/// A discrete id selecting which OS release's rendering and geometry rules
/// apply.
///
/// Detecting the running platform and choosing an epoch is the caller's
/// concern; this crate only consults the per-epoch geometry tables keyed by
/// these ids.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum PlatformEpoch {
    /// The 10.10 (Yosemite) rendering rules.
    MacOS10_10,
    /// The 10.11/10.12 rendering rules.
    MacOS10_11,
    /// The 10.13 rendering rules.
    MacOS10_13,
    /// The 10.14/10.15 rendering rules.
    MacOS10_14,
    /// The macOS 11 and later rendering rules.
    MacOS11,
}

impl std::fmt::Display for PlatformEpoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::MacOS10_10 => "macOS 10.10",
            Self::MacOS10_11 => "macOS 10.11",
            Self::MacOS10_13 => "macOS 10.13",
            Self::MacOS10_14 => "macOS 10.14",
            Self::MacOS11 => "macOS 11",
        };
        f.write_str(name)
    }
}
