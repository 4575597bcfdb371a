use eframe::egui::{
    self,
    Color32,
    RichText,
};

/// Moss palette for the catalog browser. Applied once at startup through
/// `set_theme`; widgets pull accent colors from the accessor methods.
#[derive(Clone)]
pub struct Theme {
    background: Color32,
    panel: Color32,
    foreground: Color32,
    muted: Color32,
    leaf: Color32,
    blossom: Color32,
    bark: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::moss()
    }
}

impl Theme {
    pub fn moss() -> Self {
        Self {
            background: Color32::from_rgb(0x1d, 0x24, 0x1f),
            panel: Color32::from_rgb(0x24, 0x2d, 0x26),
            foreground: Color32::from_rgb(0xe6, 0xec, 0xe4),
            muted: Color32::from_rgb(0x92, 0xa1, 0x93),
            leaf: Color32::from_rgb(0x7f, 0xc9, 0x7a),
            blossom: Color32::from_rgb(0xe8, 0x8a, 0x9a),
            bark: Color32::from_rgb(0xc9, 0xa8, 0x7f),
        }
    }

    pub fn heading(&self, content: &str) -> RichText {
        RichText::new(content).color(self.leaf).strong()
    }

    pub fn muted(&self, content: &str) -> RichText {
        RichText::new(content).color(self.muted)
    }

    pub fn botanical(&self, content: &str) -> RichText {
        RichText::new(content).color(self.bark).italics()
    }

    pub fn favorite_color(&self, favorited: bool) -> Color32 {
        if favorited {
            self.blossom
        } else {
            self.muted
        }
    }

    pub fn panel_fill(&self) -> Color32 {
        self.panel
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    let mut visuals = egui::Visuals::dark();

    visuals.panel_fill = theme.background;
    visuals.window_fill = theme.panel;
    visuals.extreme_bg_color = theme.background;
    visuals.faint_bg_color = theme.panel;
    visuals.override_text_color = Some(theme.foreground);
    visuals.selection.bg_fill = theme.leaf.linear_multiply(0.4);
    visuals.hyperlink_color = theme.leaf;
    visuals.widgets.hovered.bg_stroke = egui::Stroke::new(1.0, theme.leaf);
    visuals.widgets.active.bg_stroke = egui::Stroke::new(1.0, theme.leaf);

    ctx.set_visuals(visuals);
}
