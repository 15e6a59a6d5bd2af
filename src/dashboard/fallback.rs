//! Example posts shown when the mention feed cannot be fetched.
//!
//! The dashboard runs on a venue screen, so a failed fetch is masked with these
//! instead of an error message.

use crate::mentions::Post;

const FALLBACK: &[(&str, &str, &str, &str, u64, u64)] = &[
    (
        "techbuilder",
        "Tech Builder",
        "Just submitted our project to @devfolio! 🚀 Amazing experience building with the team #hackathon",
        "2h ago",
        45,
        12,
    ),
    (
        "codewizard",
        "Code Wizard",
        "Shoutout to @devfolio for the smooth platform experience. Our AI project is live! 🎉",
        "3h ago",
        89,
        23,
    ),
    (
        "hackteam",
        "Hack Team",
        "Midnight coding session powered by coffee ☕ Thanks @devfolio for hosting our submissions!",
        "5h ago",
        67,
        15,
    ),
    (
        "innovator_x",
        "Innovator X",
        "First hackathon using @devfolio and I'm impressed! The dashboard is so intuitive 💯",
        "6h ago",
        134,
        31,
    ),
    (
        "student_dev",
        "Student Dev",
        "Learning so much at this hackathon! @devfolio makes project management easy #coding #hackathon",
        "8h ago",
        56,
        9,
    ),
];

/// The fixed fallback feed.
#[must_use]
pub fn fallback_posts() -> Vec<Post> {
    FALLBACK
        .iter()
        .enumerate()
        .map(|(i, &(author, name, content, time, likes, retweets))| Post {
            id: format!("fallback-{}", i + 1),
            author: author.to_string(),
            author_name: Some(name.to_string()),
            author_image: None,
            content: content.to_string(),
            time: time.to_string(),
            likes,
            retweets,
            media: None,
        })
        .collect()
}
