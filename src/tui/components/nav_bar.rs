//! Persistent navigation bar

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::{routes::Route, ui::Styles};

/// Brand plus one link per nav route, the current one highlighted
pub fn nav_line(current: &Route) -> Line<'static> {
    let mut spans = vec![Span::styled(" UpSkill ", Styles::brand()), Span::raw(" │ ")];

    for route in Route::NAV.iter() {
        let shortcut = route.shortcut().map(|c| format!("{}:", c)).unwrap_or_default();
        let style = if route == current {
            Styles::selected()
        } else {
            Styles::inactive()
        };
        spans.push(Span::styled(format!(" {}{} ", shortcut, route.title()), style));
        spans.push(Span::raw(" "));
    }

    Line::from(spans)
}

pub fn draw(f: &mut Frame, area: Rect, current: &Route) {
    let bar = Paragraph::new(nav_line(current)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Styles::inactive_border()),
    );
    f.render_widget(bar, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_all_links_present() {
        let text = text_of(&nav_line(&Route::Home));
        assert!(text.contains("UpSkill"));
        assert!(text.contains("1:Home"));
        assert!(text.contains("2:Users"));
        assert!(text.contains("3:Courses"));
        assert!(text.contains("4:Skills"));
    }

    #[test]
    fn test_current_route_is_highlighted() {
        let line = nav_line(&Route::Courses);
        let highlighted: Vec<&str> = line
            .spans
            .iter()
            .filter(|s| s.style == Styles::selected())
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(highlighted, vec![" 3:Courses "]);

        let unknown = nav_line(&Route::NotFound("/nope".to_string()));
        assert!(unknown.spans.iter().all(|s| s.style != Styles::selected()));
    }
}
