/// Errors crossing or failing to cross the bridge channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChannelError {
    #[error("channel not ready for {method}")]
    NotReady { method: &'static str },

    #[error("channel closed while sending {method}")]
    Closed { method: String },

    #[error("method not implemented: {method}")]
    NotImplemented { method: String },
}
