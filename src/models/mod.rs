pub mod requests;
pub mod responses;

pub use requests::{JoinQueueRequest, MoveRequest};
pub use responses::{GameResponse, QueuedPlayerResponse, SnapshotResponse};
