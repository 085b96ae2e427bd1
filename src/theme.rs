use eframe::egui::{self, Color32, FontFamily, FontId, TextStyle};

/// Process-wide look of the app. Swapping providers touches nothing else.
pub trait ThemeProvider {
    fn apply(&self, ctx: &egui::Context);
}

#[derive(Clone, Debug)]
pub struct FitPlannerTheme {
    pub primary: Color32,
    pub primary_dark: Color32,
    pub secondary: Color32,
    pub background: Color32,
    pub paper: Color32,
    pub body_size: f32,
    pub heading_size: f32,
}

impl Default for FitPlannerTheme {
    fn default() -> Self {
        Self {
            primary: Color32::from_rgb(0x21, 0x96, 0xf3),
            primary_dark: Color32::from_rgb(0x19, 0x76, 0xd2),
            secondary: Color32::from_rgb(0xf5, 0x00, 0x57),
            background: Color32::from_rgb(0xf5, 0xf5, 0xf5),
            paper: Color32::WHITE,
            body_size: 16.0,
            heading_size: 26.0,
        }
    }
}

impl ThemeProvider for FitPlannerTheme {
    fn apply(&self, ctx: &egui::Context) {
        ctx.set_theme(egui::Theme::Light);

        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = self.background;
        visuals.window_fill = self.paper;
        visuals.hyperlink_color = self.primary_dark;
        visuals.selection.bg_fill = self.primary;
        visuals.selection.stroke.color = Color32::WHITE;
        visuals.widgets.hovered.bg_stroke.color = self.primary;
        visuals.widgets.active.bg_fill = self.primary_dark;
        visuals.error_fg_color = self.secondary;
        ctx.set_visuals(visuals);

        let mut style = (*ctx.style()).clone();
        style.text_styles.insert(
            TextStyle::Body,
            FontId::new(self.body_size, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Button,
            FontId::new(self.body_size, FontFamily::Proportional),
        );
        style.text_styles.insert(
            TextStyle::Heading,
            FontId::new(self.heading_size, FontFamily::Proportional),
        );
        ctx.set_style(style);
    }
}
