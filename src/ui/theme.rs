use ratatui::style::Color;

pub struct Theme {
    #[allow(dead_code)] // Background color field for future use
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub heads: Color,     // Blue coin face
    pub tails: Color,     // Red coin face
    pub border_normal: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    heads: Color::Rgb(137, 180, 250),         // Blue coin face
    tails: Color::Rgb(243, 139, 168),         // Red coin face
    border_normal: Color::Rgb(108, 112, 134), // Grey border
    status_bg: Color::Rgb(50, 50, 70),        // Slightly lighter BG for the status bar
};
