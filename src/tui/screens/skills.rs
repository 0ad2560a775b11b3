//! Skills screen presentation

use ratatui::text::{Line, Span};

use crate::models::Skill;
use crate::tui::{
    traits::{ItemLayout, ItemView},
    ui::Styles,
};

impl ItemView for Skill {
    const LAYOUT: ItemLayout = ItemLayout::List;

    fn heading() -> &'static str {
        "Skills"
    }

    fn list_lines(&self) -> Vec<Line<'static>> {
        vec![Line::from(vec![
            Span::raw(self.name.clone()),
            Span::raw("  "),
            Span::styled(format!(" Proficiency: {} ", self.proficiency), Styles::badge()),
        ])]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Proficiency;

    #[test]
    fn test_skill_entry_carries_badge() {
        let skill = Skill {
            id: 1,
            name: "Rust".to_string(),
            proficiency: Proficiency::Level(4),
            user_id: None,
        };
        let lines = skill.list_lines();
        assert_eq!(lines.len(), 1);
        let text: String = lines[0].spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "Rust   Proficiency: 4 ");
    }
}
