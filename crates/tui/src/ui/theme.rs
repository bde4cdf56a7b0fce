use ratatui::style::Color;

use engine::{Category, Role};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub text: Color,
    pub text_muted: Color,
    pub dim: Color,
    pub border: Color,
    pub accent: Color,
    pub positive: Color,
    pub error: Color,
    pub potential: Color,
    pub not_potential: Color,
    pub resident: Color,
    pub officer: Color,
    pub admin: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: Color::Rgb(220, 220, 220),
            text_muted: Color::Rgb(160, 168, 176),
            dim: Color::Rgb(120, 128, 136),
            border: Color::Rgb(60, 70, 80),
            accent: Color::Rgb(2, 132, 199),
            positive: Color::Rgb(16, 185, 129),
            error: Color::Rgb(200, 80, 80),
            potential: Color::Rgb(244, 63, 94),
            not_potential: Color::Rgb(16, 185, 129),
            resident: Color::Rgb(56, 189, 248),
            officer: Color::Rgb(245, 158, 11),
            admin: Color::Rgb(148, 163, 184),
        }
    }
}

impl Theme {
    pub fn category(&self, category: Category) -> Color {
        match category {
            Category::Potential => self.potential,
            Category::NotPotential => self.not_potential,
        }
    }

    pub fn role(&self, role: Role) -> Color {
        match role {
            Role::Resident => self.resident,
            Role::Officer => self.officer,
            Role::Admin => self.admin,
        }
    }
}
