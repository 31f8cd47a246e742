pub mod clock;
pub mod error;
pub mod message;
pub mod request;
pub mod wire;

pub use clock::{Clock, fixed_clock, format_clock, format_time, system_clock};
pub use error::{CoreError, Result};
pub use message::{Message, ReplyTag, Role};
pub use request::{RequestId, RequestIds};
pub use wire::{AskReply, AskRequest, AskResponse};
