use eframe::egui;

use crate::{
    catalog::api,
    core::{
        FilterAttribute,
        PlantRecord,
    },
    favorites::FavoritesStore,
    gui::theme::Theme,
};

pub enum DetailAction {
    ToggleFavorite(String),
}

/// Full-record overlay. Closes on the button, Escape, or a click outside
/// the window.
pub struct DetailModal {
    open: bool,
    plant: Option<PlantRecord>,
}

impl DetailModal {
    pub fn new() -> Self {
        Self { open: false, plant: None }
    }

    pub fn open_plant(&mut self, plant: PlantRecord) {
        self.plant = Some(plant);
        self.open = true;
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        favorites: &FavoritesStore,
        base_url: &str,
        theme: &Theme,
    ) -> Option<DetailAction> {
        if !self.open {
            return None;
        }

        let Some(plant) = self.plant.clone() else {
            self.open = false;
            return None;
        };

        let mut action = None;

        let modal = egui::Modal::new(egui::Id::new("plant_detail_modal")).show(ctx, |ui| {
            ui.set_width(420.0);

            ui.horizontal(|ui| {
                ui.label(theme.heading(&plant.english_name).size(20.0));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let favorited = favorites.contains(&plant.botanical_name);
                    let heart = egui::RichText::new(if favorited { "♥" } else { "♡" })
                        .size(22.0)
                        .color(theme.favorite_color(favorited));
                    if ui.add(egui::Button::new(heart).frame(false)).clicked() {
                        action = Some(DetailAction::ToggleFavorite(plant.botanical_name.clone()));
                    }
                });
            });
            ui.label(theme.botanical(&plant.botanical_name));
            ui.add_space(8.0);

            if !plant.image_name.is_empty() {
                ui.add(
                    egui::Image::from_uri(api::image_url(base_url, &plant.image_name))
                        .fit_to_exact_size(egui::vec2(300.0, 300.0))
                        .corner_radius(4.0),
                );
                ui.add_space(8.0);
            }

            egui::Grid::new("plant_detail_grid").num_columns(2).spacing([16.0, 4.0]).show(
                ui,
                |ui| {
                    for attr in FilterAttribute::ALL {
                        ui.label(theme.muted(attr.label()));
                        ui.label(plant.attribute(attr));
                        ui.end_row();
                    }
                },
            );

            if !plant.image_prompt.is_empty() {
                ui.add_space(6.0);
                ui.collapsing("Image prompt", |ui| {
                    ui.label(theme.muted(&plant.image_prompt));
                });
            }

            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Close").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
            self.plant = None;
        }

        action
    }
}

impl Default for DetailModal {
    fn default() -> Self {
        Self::new()
    }
}
