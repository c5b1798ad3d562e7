// ── Result envelope ──
//
// Uniform output of every asynchronous operation in the core.

/// Progress of one asynchronous request.
///
/// A request emits `Loading` at most once, then exactly one terminal
/// variant. Consumers are expected to `match` all three arms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NetworkResult<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> NetworkResult<T> {
    /// `true` for `Success` and `Error`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    /// Borrow the payload of a `Success`.
    pub fn data(&self) -> Option<&T> {
        match self {
            Self::Success(data) => Some(data),
            Self::Loading | Self::Error(_) => None,
        }
    }

    /// Transform the payload, keeping the tag.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> NetworkResult<U> {
        match self {
            Self::Loading => NetworkResult::Loading,
            Self::Success(data) => NetworkResult::Success(f(data)),
            Self::Error(reason) => NetworkResult::Error(reason),
        }
    }
}
