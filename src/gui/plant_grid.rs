use eframe::egui;
use egui_flex::{
    item,
    Flex,
};

use crate::{
    catalog::api,
    core::PlantRecord,
    favorites::FavoritesStore,
    gui::theme::Theme,
};

const CARD_WIDTH: f32 = 210.0;
const IMAGE_SIZE: f32 = 186.0;

pub enum GridAction {
    ToggleFavorite(String),
    OpenDetail(usize),
}

pub struct PlantGrid;

impl PlantGrid {
    pub fn show(
        ui: &mut egui::Ui,
        plants: &[PlantRecord],
        favorites: &FavoritesStore,
        base_url: &str,
        theme: &Theme,
    ) -> Option<GridAction> {
        if plants.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label(theme.muted("No plants match the current filters."));
            });
            return None;
        }

        let mut action = None;

        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            Flex::horizontal().wrap(true).show(ui, |flex| {
                for (index, plant) in plants.iter().enumerate() {
                    flex.add_ui(item(), |ui| {
                        if let Some(card_action) =
                            Self::card(ui, index, plant, favorites, base_url, theme)
                        {
                            action = Some(card_action);
                        }
                    });
                }
            });
        });

        action
    }

    fn card(
        ui: &mut egui::Ui,
        index: usize,
        plant: &PlantRecord,
        favorites: &FavoritesStore,
        base_url: &str,
        theme: &Theme,
    ) -> Option<GridAction> {
        let mut action = None;

        egui::Frame::group(ui.style()).fill(theme.panel_fill()).show(ui, |ui| {
            ui.set_width(CARD_WIDTH);
            ui.vertical(|ui| {
                if !plant.image_name.is_empty() {
                    let image = egui::Image::from_uri(api::image_url(base_url, &plant.image_name))
                        .fit_to_exact_size(egui::vec2(IMAGE_SIZE, IMAGE_SIZE))
                        .corner_radius(4.0);
                    let response = ui.add(image.sense(egui::Sense::click()));
                    if response.clicked() {
                        action = Some(GridAction::OpenDetail(index));
                    }
                }

                if ui.link(theme.heading(&plant.english_name)).clicked() {
                    action = Some(GridAction::OpenDetail(index));
                }
                ui.label(theme.botanical(&plant.botanical_name));
                ui.label(theme.muted(&plant.plant_family));

                ui.horizontal(|ui| {
                    ui.label(theme.muted(&plant.origin));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let favorited = favorites.contains(&plant.botanical_name);
                        let heart = egui::RichText::new(if favorited { "♥" } else { "♡" })
                            .size(18.0)
                            .color(theme.favorite_color(favorited));
                        if ui
                            .add(egui::Button::new(heart).frame(false))
                            .on_hover_text("Toggle favorite")
                            .clicked()
                        {
                            action = Some(GridAction::ToggleFavorite(plant.botanical_name.clone()));
                        }
                    });
                });
            });
        });

        action
    }
}
