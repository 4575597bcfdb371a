use eframe::egui;

use crate::{
    core::{
        BrowseState,
        FilterAttribute,
        FilterOptions,
    },
    gui::theme::Theme,
};

pub struct FilterPanel;

impl FilterPanel {
    /// One checkbox list per attribute. Each change replaces that
    /// attribute's full selection set. Returns true when any selection
    /// changed this frame. The panel stays empty until the filter options
    /// have loaded.
    pub fn show(
        ctx: &egui::Context,
        options: Option<&FilterOptions>,
        browse: &mut BrowseState,
        theme: &Theme,
    ) -> bool {
        let mut changed = false;

        egui::SidePanel::left("filter_panel").default_width(230.0).show(ctx, |ui| {
            ui.add_space(6.0);
            ui.label(theme.heading("Filters"));
            ui.separator();

            let Some(options) = options else {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new().size(12.0));
                    ui.label(theme.muted("Loading filters..."));
                });
                return;
            };

            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                for attr in FilterAttribute::ALL {
                    if Self::attribute_section(ui, options, browse, attr) {
                        changed = true;
                    }
                }
            });
        });

        changed
    }

    fn attribute_section(
        ui: &mut egui::Ui,
        options: &FilterOptions,
        browse: &mut BrowseState,
        attr: FilterAttribute,
    ) -> bool {
        let current = browse.filters().selected(attr).to_vec();
        let mut selection = current.clone();

        let header = if current.is_empty() {
            attr.label().to_string()
        } else {
            format!("{} ({})", attr.label(), current.len())
        };

        egui::CollapsingHeader::new(header).id_salt(attr.key()).show(ui, |ui| {
            for value in options.values(attr) {
                let mut on = selection.iter().any(|v| v == value);
                if ui.checkbox(&mut on, value).changed() {
                    if on {
                        selection.push(value.clone());
                    } else {
                        selection.retain(|v| v != value);
                    }
                }
            }
        });

        if selection != current {
            browse.set_filter_values(attr, selection);
            true
        } else {
            false
        }
    }
}
