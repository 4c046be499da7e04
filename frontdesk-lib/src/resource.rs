use thiserror::Error;

/// Error type for resource loading failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ResourceError {
    pub message: String,
}

impl ResourceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<crate::Error> for ResourceError {
    fn from(err: crate::Error) -> Self {
        Self::new(err.to_string())
    }
}

impl From<&str> for ResourceError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// The state of a loadable resource (rows for a table, the site config).
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ResourceState<T> {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Loaded successfully
    Ready(T),
    /// Failed to load
    Error(ResourceError),
}

impl<T> ResourceState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub fn as_ready(&self) -> Option<&T> {
        match self {
            Self::Ready(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&ResourceError> {
        match self {
            Self::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Map the ready value
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ResourceState<U> {
        match self {
            Self::Idle => ResourceState::Idle,
            Self::Loading => ResourceState::Loading,
            Self::Ready(v) => ResourceState::Ready(f(v)),
            Self::Error(e) => ResourceState::Error(e),
        }
    }

    /// Take the ready value, or nothing.
    ///
    /// A failed load is logged and yields `None`; the caller shows nothing
    /// rather than an error view.
    pub fn into_ready_or_log(self, what: &str) -> Option<T> {
        match self {
            Self::Ready(v) => Some(v),
            Self::Error(e) => {
                log::error!("{} loading error: {}", what, e);
                None
            }
            Self::Idle | Self::Loading => None,
        }
    }
}

impl<T, E: Into<ResourceError>> From<Result<T, E>> for ResourceState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(v) => Self::Ready(v),
            Err(e) => Self::Error(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_result() {
        let ok: ResourceState<u32> = Ok::<_, ResourceError>(3).into();
        assert_eq!(ok.as_ready(), Some(&3));

        let err: ResourceState<u32> = Err::<u32, _>("boom").into();
        assert_eq!(err.as_error().map(|e| e.message.as_str()), Some("boom"));
    }

    #[test]
    fn test_map_keeps_state() {
        let loading: ResourceState<Vec<u8>> = ResourceState::Loading;
        assert!(loading.map(|v| v.len()).is_loading());

        let ready = ResourceState::Ready(vec![1, 2, 3]).map(|v| v.len());
        assert_eq!(ready, ResourceState::Ready(3));
    }

    #[test]
    fn test_error_yields_nothing() {
        let err: ResourceState<u32> = ResourceState::Error(ResourceError::new("offline"));
        assert_eq!(err.into_ready_or_log("config"), None);
    }
}
