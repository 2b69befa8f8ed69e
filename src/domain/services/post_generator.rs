//! Deterministic post generation
//!
//! The simulated search does not hit LinkedIn. It fills five fixed templates
//! with the user's keyword instead, zipped with a fixed roster of authors,
//! timestamps and engagement counters. Same keyword in, same posts out.

use crate::domain::models::{Engagement, Post};

/// Generate the five synthetic posts for a keyword.
///
/// Always returns exactly five posts in roster order. Ids are "1".."5" and
/// are reused across calls; they are only unique within one response.
pub fn generate_posts(keyword: &str) -> Vec<Post> {
    vec![
        Post {
            id: "1".to_string(),
            title: format!("How {keyword} is transforming the industry"),
            url: "https://linkedin.com/posts/example-1".to_string(),
            date: "2024-01-20".to_string(),
            time: "14:30".to_string(),
            description: format!(
                "Exploring the latest trends in {keyword} and how it's reshaping business \
                 strategies. Key insights from industry leaders and practical applications."
            ),
            author: "Sarah Johnson".to_string(),
            engagement: Engagement {
                likes: 245,
                comments: 32,
                shares: 18,
            },
        },
        Post {
            id: "2".to_string(),
            title: format!("5 Essential {keyword} Skills for 2024"),
            url: "https://linkedin.com/posts/example-2".to_string(),
            date: "2024-01-19".to_string(),
            time: "09:15".to_string(),
            description: format!(
                "A comprehensive guide to mastering {keyword}. From fundamentals to advanced \
                 techniques, here's what you need to know."
            ),
            author: "Michael Chen".to_string(),
            engagement: Engagement {
                likes: 189,
                comments: 24,
                shares: 12,
            },
        },
        Post {
            id: "3".to_string(),
            title: format!("The Future of {keyword}: Predictions and Insights"),
            url: "https://linkedin.com/posts/example-3".to_string(),
            date: "2024-01-18".to_string(),
            time: "16:45".to_string(),
            description: format!(
                "Industry experts share their predictions about {keyword} trends. What to \
                 expect in the coming years and how to prepare."
            ),
            author: "Emily Rodriguez".to_string(),
            engagement: Engagement {
                likes: 312,
                comments: 45,
                shares: 28,
            },
        },
        Post {
            id: "4".to_string(),
            title: format!("Case Study: Successful {keyword} Implementation"),
            url: "https://linkedin.com/posts/example-4".to_string(),
            date: "2024-01-17".to_string(),
            time: "11:20".to_string(),
            description: format!(
                "Real-world example of {keyword} implementation that resulted in 40% \
                 efficiency improvement. Lessons learned and best practices."
            ),
            author: "David Kim".to_string(),
            engagement: Engagement {
                likes: 156,
                comments: 19,
                shares: 15,
            },
        },
        Post {
            id: "5".to_string(),
            title: format!("Common {keyword} Mistakes to Avoid"),
            url: "https://linkedin.com/posts/example-5".to_string(),
            date: "2024-01-16".to_string(),
            time: "13:10".to_string(),
            description: format!(
                "Learn from others' mistakes. Top 10 pitfalls in {keyword} and how to avoid \
                 them. Save time and resources with these insights."
            ),
            author: "Lisa Thompson".to_string(),
            engagement: Engagement {
                likes: 203,
                comments: 31,
                shares: 22,
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_five_posts_in_roster_order() {
        let posts = generate_posts("Leadership");

        assert_eq!(posts.len(), 5);
        let authors: Vec<&str> = posts.iter().map(|p| p.author.as_str()).collect();
        assert_eq!(
            authors,
            [
                "Sarah Johnson",
                "Michael Chen",
                "Emily Rodriguez",
                "David Kim",
                "Lisa Thompson"
            ]
        );
    }

    #[test]
    fn test_keyword_interpolated_into_title_and_description() {
        let posts = generate_posts("Rust");

        for post in &posts {
            assert!(post.title.contains("Rust"), "title: {}", post.title);
            assert!(
                post.description.contains("Rust"),
                "description: {}",
                post.description
            );
        }
    }

    #[test]
    fn test_ids_are_one_through_five() {
        let ids: Vec<String> = generate_posts("AI").into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_urls_are_unique_within_response() {
        let posts = generate_posts("AI");
        let mut urls: Vec<&str> = posts.iter().map(|p| p.url.as_str()).collect();
        urls.sort_unstable();
        urls.dedup();
        assert_eq!(urls.len(), 5);
    }

    #[test]
    fn test_same_keyword_yields_identical_posts() {
        assert_eq!(generate_posts("Marketing"), generate_posts("Marketing"));
    }

    #[test]
    fn test_marketing_example_values() {
        let posts = generate_posts("Marketing");

        let first = &posts[0];
        assert_eq!(first.title, "How Marketing is transforming the industry");
        assert_eq!(first.date, "2024-01-20");
        assert_eq!(first.time, "14:30");
        assert_eq!(
            first.engagement,
            Engagement {
                likes: 245,
                comments: 32,
                shares: 18
            }
        );
    }
}
