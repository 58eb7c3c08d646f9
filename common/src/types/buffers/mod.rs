pub mod replay_buffer;

pub use crate::types::buffers::replay_buffer::ReplayBuffer;
