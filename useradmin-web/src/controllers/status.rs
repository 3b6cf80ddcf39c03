/// User-visible state of one controller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InteractionStatus {
    #[default]
    Idle,
    Pending,
    Succeeded(Option<String>),
    Failed(String),
}

impl InteractionStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Message to show the user, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Succeeded(message) => message.as_deref(),
            Self::Failed(message) => Some(message),
            Self::Idle | Self::Pending => None,
        }
    }
}
