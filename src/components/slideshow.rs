//! Mention slideshow components.
//!
//! Renders the post under the cursor as a card, with prev/next buttons and a
//! position indicator. Every control is a plain form posting to the dashboard
//! routes, so the slideshow works without the live-update script.

use maud::{html, Markup, PreEscaped, Render};

use crate::mentions::{Post, PostMedia};

/// Media items shown in a grid before the rest are hidden.
const MAX_GRID_ITEMS: usize = 3;

const HEART_SVG: &str = r#"<svg fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4.318 6.318a4.5 4.5 0 000 6.364L12 20.364l7.682-7.682a4.5 4.5 0 00-6.364-6.364L12 7.636l-1.318-1.318a4.5 4.5 0 00-6.364 0z"/></svg>"#;

const REPOST_SVG: &str = r#"<svg fill="none" stroke="currentColor" viewBox="0 0 24 24" aria-hidden="true"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 4v5h.582m15.356 2A8.001 8.001 0 004.582 9m0 0H9m11 11v-5h-.581m0 0a8.003 8.003 0 01-15.357-2m15.357 2H15"/></svg>"#;

/// A single post rendered as a slideshow card.
#[derive(Debug, Clone)]
pub struct MentionCard<'a> {
    pub post: &'a Post,
}

impl<'a> MentionCard<'a> {
    #[must_use]
    pub const fn new(post: &'a Post) -> Self {
        Self { post }
    }

    fn render_avatar(&self) -> Markup {
        let post = self.post;
        let initial = post
            .author
            .chars()
            .next()
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_default();

        html! {
            div class="avatar" {
                @if let Some(ref image) = post.author_image {
                    img src=(image) alt=(post.author);
                } @else {
                    (initial)
                }
            }
        }
    }
}

impl Render for MentionCard<'_> {
    fn render(&self) -> Markup {
        let post = self.post;

        html! {
            a class="mention-card"
              href=(post.permalink())
              target="_blank"
              rel="noopener noreferrer"
              data-post-id=(post.id) {
                (self.render_avatar())
                div class="mention-body" {
                    div class="mention-meta" {
                        span class="mention-name" { (post.display_name()) }
                        span class="mention-handle" { "@" (post.author) }
                        span class="mention-time" { "• " (post.time) }
                    }
                    p class="mention-content" { (post.content) }
                    @if let Some(ref media) = post.media {
                        (MediaView::new(media))
                    }
                    div class="metrics" {
                        span class="metric metric-likes" {
                            (PreEscaped(HEART_SVG))
                            span { (post.likes) }
                        }
                        span class="metric metric-retweets" {
                            (PreEscaped(REPOST_SVG))
                            span { (post.retweets) }
                        }
                    }
                }
            }
        }
    }
}

/// Media attached to a post: full width when single, a grid when several.
#[derive(Debug, Clone)]
pub struct MediaView<'a> {
    pub media: &'a PostMedia,
}

impl<'a> MediaView<'a> {
    #[must_use]
    pub const fn new(media: &'a PostMedia) -> Self {
        Self { media }
    }
}

impl Render for MediaView<'_> {
    fn render(&self) -> Markup {
        match self.media {
            PostMedia::Single(item) => html! {
                div class="media-single" data-media-type=(item.kind) {
                    img src=(item.url) alt="Post media";
                }
            },
            PostMedia::Multiple(items) => {
                let grid_class = if items.len() == 2 {
                    "media-grid media-grid-2"
                } else {
                    "media-grid media-grid-3"
                };
                html! {
                    div class=(grid_class) {
                        @for (index, item) in items.iter().take(MAX_GRID_ITEMS).enumerate() {
                            div class="media-item" data-media-type=(item.kind) {
                                img src=(item.url)
                                    alt=(format!("Post media {}", index + 1))
                                    loading=(if index == 0 { "eager" } else { "lazy" });
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A prev/next button posting to a dashboard route.
#[derive(Debug, Clone, Copy)]
pub struct NavButton {
    pub action: &'static str,
    pub label: &'static str,
    pub glyph: &'static str,
}

impl NavButton {
    #[must_use]
    pub const fn prev() -> Self {
        Self {
            action: "/dashboard/prev",
            label: "Previous mention",
            glyph: "‹",
        }
    }

    #[must_use]
    pub const fn next() -> Self {
        Self {
            action: "/dashboard/next",
            label: "Next mention",
            glyph: "›",
        }
    }
}

impl Render for NavButton {
    fn render(&self) -> Markup {
        html! {
            form class="nav-form" method="post" action=(self.action) {
                button class="nav-button" type="submit" aria-label=(self.label) { (self.glyph) }
            }
        }
    }
}

/// Position counter, countdown, and dot indicator under the slideshow.
#[derive(Debug, Clone, Copy)]
pub struct SlideControls {
    pub current_index: Option<usize>,
    pub slide_count: usize,
    pub countdown: u32,
    pub paused: bool,
}

impl Render for SlideControls {
    fn render(&self) -> Markup {
        let position = self.current_index.map_or(0, |i| i + 1);

        html! {
            div class="slide-controls" {
                div class="slide-status" {
                    span class="slide-position" { (position) " / " (self.slide_count) }
                    @if self.paused {
                        span class="slide-paused" { "(Paused)" }
                    } @else {
                        span class="countdown" { "Next in " (self.countdown) "s" }
                    }
                }
                div class="slide-dots" role="tablist" {
                    @for index in 0..self.slide_count {
                        @let is_active = self.current_index == Some(index);
                        form method="post" action=(format!("/dashboard/select/{index}")) {
                            button class=(if is_active { "dot active" } else { "dot" })
                                   type="submit"
                                   role="tab"
                                   aria-label=(format!("Go to mention {}", index + 1))
                                   aria-current=[is_active.then_some("true")] {}
                        }
                    }
                }
            }
        }
    }
}
