use serde::{Deserialize, Serialize};

/// Engagement counters attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Engagement {
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
}

/// One LinkedIn post result.
///
/// `id` is only stable within a single search response; separate searches
/// reuse the same "1".."5" ids. Field order matches the exported JSON layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub url: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub author: String,
    pub engagement: Engagement,
}
