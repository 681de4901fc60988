// ABOUTME: Color palettes for the dark and light themes
// Every renderer takes a Palette instead of hardcoding colors

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Selectable UI theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(&self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn palette(&self) -> Palette {
        match self {
            Self::Dark => Palette::dark(),
            Self::Light => Palette::light(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub panel: Color,
    pub primary: Color,
    pub accent: Color,
    pub success: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
    pub error: Color,
    pub warning: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(25, 25, 35),
            panel: Color::Rgb(30, 30, 40),
            primary: Color::Rgb(100, 149, 237),
            accent: Color::Rgb(255, 215, 0),
            success: Color::Rgb(100, 200, 100),
            text: Color::Rgb(220, 220, 230),
            muted: Color::Rgb(120, 120, 140),
            border: Color::Rgb(60, 60, 80),
            error: Color::Rgb(220, 80, 80),
            warning: Color::Rgb(220, 180, 80),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(245, 245, 248),
            panel: Color::Rgb(255, 255, 255),
            primary: Color::Rgb(37, 99, 235),
            accent: Color::Rgb(180, 130, 0),
            success: Color::Rgb(22, 140, 70),
            text: Color::Rgb(30, 30, 40),
            muted: Color::Rgb(110, 110, 125),
            border: Color::Rgb(200, 200, 210),
            error: Color::Rgb(200, 40, 40),
            warning: Color::Rgb(190, 130, 20),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}
