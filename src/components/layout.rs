//! Base layout for the dashboard page.
//!
//! The page is a single full-screen view, so the layout carries its own
//! stylesheet and the script that keeps it live.

use maud::{html, Markup, PreEscaped, DOCTYPE};

/// Dashboard stylesheet, inlined so the screen works without a static file server.
const DASHBOARD_STYLE: &str = r#"
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, -apple-system, "Segoe UI", sans-serif; color: #111827;
  background: linear-gradient(135deg, #fff7ed, #ffedd5 50%, #fed7aa); }
.dashboard { display: flex; height: 100vh; }
.schedule-panel { width: 30%; overflow-y: auto; background: rgba(255,255,255,0.8); border-right: 1px solid #fed7aa; }
.mentions-panel { width: 70%; display: flex; flex-direction: column; }
.panel-header { padding: 1.5rem; border-bottom: 1px solid #fed7aa; background: rgba(255,255,255,0.9); }
.panel-header h2 { margin: 0; font-size: 1.5rem; }
.panel-subtitle { font-size: 0.875rem; color: #4b5563; margin-top: 0.25rem; }
.header-row { display: flex; align-items: center; justify-content: space-between; gap: 1rem; }
.countdown { font-family: ui-monospace, monospace; font-weight: 600; color: #ea580c; }
.btn { border: none; cursor: pointer; border-radius: 0.5rem; padding: 0.5rem 1rem; color: #fff;
  background: linear-gradient(90deg, #f97316, #ea580c); font-weight: 500; }
.schedule-list { padding: 1.5rem; display: flex; flex-direction: column; gap: 0.75rem; }
.schedule-event { padding: 1rem; border-radius: 0.5rem; border: 1px solid #fed7aa; background: #fff;
  display: flex; justify-content: space-between; }
.schedule-event-current { background: linear-gradient(90deg, #f97316, #ea580c); color: #fff;
  box-shadow: 0 10px 15px rgba(249,115,22,0.3); }
.schedule-event-past { background: #f3f4f6; border-color: #e5e7eb; opacity: 0.6; color: #6b7280; }
.event-time { font-family: ui-monospace, monospace; font-size: 0.875rem; margin-bottom: 0.25rem; }
.event-title { font-weight: 600; margin-bottom: 0.25rem; }
.event-description { font-size: 0.75rem; }
.now-badge { font-size: 0.75rem; font-weight: 700; white-space: nowrap; }
.stage { flex: 1; display: flex; align-items: center; justify-content: center; padding: 2rem; gap: 1rem; }
.nav-form { margin: 0; }
.nav-button { border: none; cursor: pointer; border-radius: 9999px; padding: 0.75rem; background: rgba(255,255,255,0.8);
  color: #ea580c; font-size: 1.25rem; }
.mention-card { display: flex; gap: 1.5rem; max-width: 48rem; width: 100%; padding: 2rem; border-radius: 1rem;
  border: 2px solid #fed7aa; background: #fff; color: inherit; text-decoration: none;
  box-shadow: 0 25px 50px rgba(0,0,0,0.15); }
.avatar { width: 4rem; height: 4rem; flex-shrink: 0; border-radius: 9999px; display: flex; align-items: center;
  justify-content: center; color: #fff; font-weight: 700; font-size: 1.5rem;
  background: linear-gradient(135deg, #fb923c, #ea580c); overflow: hidden; }
.avatar img { width: 100%; height: 100%; object-fit: cover; }
.mention-meta { display: flex; gap: 0.75rem; align-items: baseline; margin-bottom: 0.75rem; }
.mention-name { font-weight: 700; font-size: 1.25rem; }
.mention-handle { color: #6b7280; }
.mention-time { color: #9ca3af; }
.mention-content { font-size: 1.125rem; line-height: 1.6; color: #374151; white-space: pre-wrap; }
.media-single img { width: 100%; max-height: 24rem; object-fit: cover; border-radius: 0.75rem; }
.media-grid { display: grid; gap: 0.5rem; }
.media-grid-2 { grid-template-columns: repeat(2, 1fr); }
.media-grid-3 { grid-template-columns: repeat(3, 1fr); }
.media-grid img { width: 100%; height: 12rem; object-fit: cover; border-radius: 0.75rem; }
.metrics { display: flex; gap: 2rem; color: #6b7280; font-weight: 600; margin-top: 1rem; }
.metric { display: flex; align-items: center; gap: 0.5rem; }
.metric svg { width: 1.5rem; height: 1.5rem; }
.slide-controls { padding: 1.5rem; border-top: 1px solid #fed7aa; background: rgba(255,255,255,0.9);
  display: flex; justify-content: space-between; align-items: center; }
.slide-status { font-size: 0.875rem; color: #4b5563; display: flex; gap: 0.5rem; }
.slide-dots { display: flex; gap: 0.25rem; }
.slide-dots form { margin: 0; }
.dot { border: none; cursor: pointer; width: 0.5rem; height: 0.5rem; padding: 0; border-radius: 9999px; background: #fed7aa; }
.dot.active { width: 2rem; background: #ea580c; }
.spinner { width: 3rem; height: 3rem; border-radius: 9999px; border-top: 2px solid #f97316;
  border-bottom: 2px solid #f97316; animation: spin 1s linear infinite; }
.empty-state { color: #6b7280; }
@keyframes spin { to { transform: rotate(360deg); } }
"#;

/// Keeps the page live: re-renders the dashboard every second and reports
/// pointer enter/leave on the mention card so the slideshow can pause.
const DASHBOARD_SCRIPT: &str = r#"(function() {
    var root = document.getElementById('dashboard');
    if (!root) return;
    var hovering = false;
    setInterval(function() {
        fetch('/dashboard/fragment')
            .then(function(r) { return r.ok ? r.text() : null; })
            .then(function(html) { if (html !== null) root.innerHTML = html; })
            .catch(function() {});
    }, 1000);
    root.addEventListener('mouseover', function(e) {
        if (!hovering && e.target.closest('.mention-card')) {
            hovering = true;
            fetch('/dashboard/pause', { method: 'POST' });
        }
    });
    root.addEventListener('mouseout', function(e) {
        var card = e.target.closest('.mention-card');
        if (hovering && card && !card.contains(e.relatedTarget)) {
            hovering = false;
            fetch('/dashboard/resume', { method: 'POST' });
        }
    });
})();"#;

/// Base page layout builder.
///
/// # Example
///
/// ```ignore
/// use maud::html;
/// use crate::components::layout::BaseLayout;
///
/// let content = html! { h1 { "Hello World" } };
/// let page = BaseLayout::new("Schedule").render(content);
/// ```
#[derive(Debug, Clone)]
pub struct BaseLayout<'a> {
    title: &'a str,
}

impl<'a> BaseLayout<'a> {
    #[must_use]
    pub fn new(title: &'a str) -> Self {
        Self { title }
    }

    /// Render the complete HTML page with the given content.
    #[must_use]
    pub fn render(self, content: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    meta name="viewport" content="width=device-width, initial-scale=1.0";
                    meta name="robots" content="noindex";
                    title { (self.title) " - Hackathon Dashboard" }
                    link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>📅</text></svg>";
                    style { (PreEscaped(DASHBOARD_STYLE)) }
                }
                body {
                    (content)
                    script { (PreEscaped(DASHBOARD_SCRIPT)) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_layout_basic_structure() {
        let content = html! { h1 { "Test Content" } };
        let html = BaseLayout::new("Test Page").render(content).into_string();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<meta charset="UTF-8">"#));
        assert!(html.contains("<title>Test Page - Hackathon Dashboard</title>"));
        assert!(html.contains("<h1>Test Content</h1>"));
        assert!(html.contains(".mention-card"));
    }

    #[test]
    fn test_live_script_included() {
        let html = BaseLayout::new("Live").render(html! {}).into_string();
        assert!(html.contains("/dashboard/fragment"));
        assert!(html.contains("/dashboard/pause"));
        assert!(html.contains("/dashboard/resume"));
    }
}
