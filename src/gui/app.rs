use std::time::Instant;

use eframe::egui;

use super::{
    detail_modal::{
        DetailAction,
        DetailModal,
    },
    filter_panel::FilterPanel,
    plant_grid::{
        GridAction,
        PlantGrid,
    },
    theme::{
        set_theme,
        Theme,
    },
    top_bar::TopBar,
};
use crate::{
    core::{
        config,
        sync::{
            plan_fetch,
            Debouncer,
            FetchPlan,
            FetchSequence,
        },
        tasks::{
            TaskManager,
            TaskResult,
        },
        BrowseState,
        FilterOptions,
        PlantRecord,
    },
    favorites::FavoritesStore,
};

pub struct VerdantApp {
    base_url: String,

    // Browse inputs and their durable companion
    browse: BrowseState,
    favorites: FavoritesStore,

    // Data fetched from the catalog
    filter_options: Option<FilterOptions>,
    plants: Vec<PlantRecord>,

    // Sync controller
    debounce: Debouncer,
    sequence: FetchSequence,
    loading: bool,

    // UI
    detail: DetailModal,
    theme: Theme,

    task_manager: TaskManager,
}

impl VerdantApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let theme = Theme::moss();
        set_theme(&cc.egui_ctx, &theme);

        let base_url = config::base_url().to_string();
        let task_manager = TaskManager::new();
        task_manager.load_filter_options(base_url.clone());

        let mut app = Self {
            base_url,
            browse: BrowseState::default(),
            favorites: FavoritesStore::load(),
            filter_options: None,
            plants: Vec::new(),
            debounce: Debouncer::default(),
            sequence: FetchSequence::default(),
            loading: false,
            detail: DetailModal::new(),
            theme,
            task_manager,
        };

        // Initial unfiltered listing, no debounce needed at startup.
        app.start_fetch();
        app
    }

    fn start_fetch(&mut self) {
        match plan_fetch(&self.browse, &self.favorites) {
            FetchPlan::ShowEmpty => {
                // Retire any in-flight fetch so a late response can't
                // repopulate the emptied list.
                self.sequence.invalidate();
                self.plants.clear();
                self.loading = false;
            }
            FetchPlan::Fetch(query) => {
                let seq = self.sequence.next();
                self.loading = true;
                self.task_manager.fetch_plants(self.base_url.clone(), seq, query);
            }
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::FilterOptionsLoaded(Ok(options)) => {
                self.filter_options = Some(options);
            }
            TaskResult::FilterOptionsLoaded(Err(e)) => {
                // Panel stays unrendered; no retry is scheduled.
                eprintln!("Failed to load filter options: {}", e);
            }
            TaskResult::PlantsFetched { seq, result } => {
                if !self.sequence.is_current(seq) {
                    // A newer fetch was issued after this one; last writer
                    // wins, stale responses are dropped.
                    return;
                }

                self.loading = false;
                match result {
                    Ok(plants) => self.plants = plants,
                    Err(e) => {
                        // Previous list stays on screen.
                        eprintln!("Failed to fetch plants: {}", e);
                    }
                }
            }
        }
    }

    fn toggle_favorite(&mut self, id: &str) -> bool {
        let favorited = self.favorites.toggle(id);

        // In the favorites-only view membership changes what is visible, so
        // the list is recomputed through the normal debounced cycle.
        if self.browse.show_favorites_only() {
            self.debounce.schedule(Instant::now());
        }

        favorited
    }
}

impl eframe::App for VerdantApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        let mut query_changed = false;

        if TopBar::show(
            ctx,
            &mut self.browse,
            &self.favorites,
            self.plants.len(),
            self.loading,
            &self.theme,
        ) {
            query_changed = true;
        }

        if FilterPanel::show(ctx, self.filter_options.as_ref(), &mut self.browse, &self.theme) {
            query_changed = true;
        }

        let mut favorite_to_toggle = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.loading {
                ui.centered_and_justified(|ui| {
                    ui.add(egui::Spinner::new().size(32.0));
                });
                return;
            }

            match PlantGrid::show(ui, &self.plants, &self.favorites, &self.base_url, &self.theme) {
                Some(GridAction::ToggleFavorite(id)) => favorite_to_toggle = Some(id),
                Some(GridAction::OpenDetail(index)) => {
                    if let Some(plant) = self.plants.get(index) {
                        self.detail.open_plant(plant.clone());
                    }
                }
                None => {}
            }
        });

        if let Some(DetailAction::ToggleFavorite(id)) =
            self.detail.show(ctx, &self.favorites, &self.base_url, &self.theme)
        {
            favorite_to_toggle = Some(id);
        }

        if let Some(id) = favorite_to_toggle {
            self.toggle_favorite(&id);
        }

        let now = Instant::now();
        if query_changed {
            self.debounce.schedule(now);
        }

        if self.debounce.fire(now) {
            self.start_fetch();
        } else if let Some(remaining) = self.debounce.remaining(now) {
            // Wake up again when the quiet window elapses.
            ctx.request_repaint_after(remaining);
        }
    }
}
