use std::fmt;

use crate::error::ViewStateError;

/// Non-empty reference to an enlargeable image.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageId(String);

impl ImageId {
    pub fn new(id: impl Into<String>) -> Result<Self, ViewStateError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ViewStateError::EmptyImageId);
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for ImageId {
    type Error = ViewStateError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(ImageId),
}

impl LightboxState {
    /// Opens `id`, replacing whatever image was open.
    pub fn select(&mut self, id: ImageId) {
        *self = Self::Open(id);
    }

    /// Closes the overlay. Returns false if it was already closed.
    pub fn dismiss(&mut self) -> bool {
        match self {
            Self::Closed => false,
            Self::Open(_) => {
                *self = Self::Closed;
                true
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn current(&self) -> Option<&ImageId> {
        match self {
            Self::Open(id) => Some(id),
            Self::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_then_dismiss() {
        let mut state = LightboxState::default();
        assert_eq!(state, LightboxState::Closed);

        state.select(ImageId::new("x.png").unwrap());
        assert_eq!(state.current().map(ImageId::as_str), Some("x.png"));

        assert!(state.dismiss());
        assert_eq!(state, LightboxState::Closed);
    }

    #[test]
    fn dismiss_when_closed_is_noop() {
        let mut state = LightboxState::Closed;
        assert!(!state.dismiss());
        assert!(!state.is_open());
    }

    #[test]
    fn new_selection_replaces_open_image() {
        let mut state = LightboxState::Closed;
        state.select(ImageId::new("a.png").unwrap());
        state.select(ImageId::new("b.png").unwrap());
        assert_eq!(state, LightboxState::Open(ImageId::new("b.png").unwrap()));
    }

    #[test]
    fn empty_id_is_rejected() {
        assert_eq!(ImageId::new(""), Err(ViewStateError::EmptyImageId));
        assert_eq!(ImageId::try_from("  "), Err(ViewStateError::EmptyImageId));
    }
}
