//! Public types for the topics API
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct TopicsResponse {
    pub topics: Vec<String>,
}
