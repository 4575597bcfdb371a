use eframe::egui;

use crate::{
    core::BrowseState,
    favorites::FavoritesStore,
    gui::theme::Theme,
};

pub struct TopBar;

impl TopBar {
    /// Renders the search box, favorites-only toggle, and clear control.
    /// Returns true when any query input changed this frame.
    pub fn show(
        ctx: &egui::Context,
        browse: &mut BrowseState,
        favorites: &FavoritesStore,
        result_count: usize,
        loading: bool,
        theme: &Theme,
    ) -> bool {
        let mut changed = false;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(theme.heading("Verdant"));
                ui.separator();

                let search_response = ui.add(
                    egui::TextEdit::singleline(browse.search_query_mut())
                        .hint_text("Search by English or botanical name...")
                        .desired_width(260.0),
                );
                if search_response.changed() {
                    changed = true;
                }

                let heart = if browse.show_favorites_only() { "♥" } else { "♡" };
                let favorites_label = format!("{} Favorites ({})", heart, favorites.len());
                let favorites_button = egui::Button::new(
                    egui::RichText::new(favorites_label)
                        .color(theme.favorite_color(browse.show_favorites_only())),
                );
                if ui.add(favorites_button).clicked() {
                    browse.toggle_favorites_only();
                    changed = true;
                }

                let clear = egui::Button::new("Clear filters");
                if ui.add_enabled(browse.has_active_filters(), clear).clicked() {
                    browse.clear_all();
                    changed = true;
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if loading {
                        ui.add(egui::Spinner::new().size(14.0));
                    } else if result_count == 1 {
                        ui.label(theme.muted("1 plant"));
                    } else {
                        ui.label(theme.muted(&format!("{} plants", result_count)));
                    }
                });
            });
            ui.add_space(4.0);
        });

        changed
    }
}
