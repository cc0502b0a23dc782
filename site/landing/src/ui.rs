//! UI module - navigation menu, sub-pages and the easter-egg page
//!
//! All screens are drawn with nannou_egui on top of the scene.

use nannou_egui::egui;

/// Screens reachable from the landing menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Projects,
    UilAnalyzer,
    Contact,
}

impl Route {
    /// The four outbound links, in menu order
    pub const LINKS: [Route; 4] = [
        Route::About,
        Route::Projects,
        Route::UilAnalyzer,
        Route::Contact,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Projects => "Projects",
            Route::UilAnalyzer => "UIL Analyzer",
            Route::Contact => "Contact",
        }
    }
}

/// Columns of the easter-egg page's key-links grid: three links in the
/// first row, the fourth alone in the second
const KEY_LINK_COLUMNS: usize = 3;

/// Result of drawing the easter-egg page
#[derive(Default)]
pub struct EggPageResult {
    /// If Some, the user followed one of the key links
    pub selected: Option<Route>,
    /// If true, the user clicked the return-home affordance
    pub go_home: bool,
}

/// Draw the landing title and navigation menu over the scene
///
/// Returns the route the user clicked, if any.
pub fn draw_landing_overlay(ctx: &egui::Context, owner_name: &str) -> Option<Route> {
    let mut selected = None;

    egui::Area::new(egui::Id::new("landing_title"))
        .anchor(egui::Align2::CENTER_TOP, [0.0, 48.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(owner_name)
                        .size(42.0)
                        .strong()
                        .color(egui::Color32::WHITE),
                );
                ui.label(
                    egui::RichText::new("Personal Website")
                        .size(16.0)
                        .color(egui::Color32::from_rgba_unmultiplied(255, 255, 255, 180)),
                );
            });
        });

    egui::Area::new(egui::Id::new("landing_menu"))
        .anchor(egui::Align2::CENTER_CENTER, [0.0, -20.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                for route in Route::LINKS {
                    let button = egui::Button::new(
                        egui::RichText::new(route.label())
                            .size(20.0)
                            .color(egui::Color32::WHITE),
                    )
                    .min_size(egui::vec2(220.0, 40.0))
                    .fill(egui::Color32::from_rgba_unmultiplied(15, 23, 42, 140));

                    if ui.add(button).clicked() {
                        selected = Some(route);
                    }
                    ui.add_space(10.0);
                }
            });
        });

    selected
}

/// Draw a placeholder sub-page
///
/// Returns true when the user clicked back to the menu.
pub fn draw_sub_page(ctx: &egui::Context, route: Route, owner_name: &str) -> bool {
    let mut back = false;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.add_space(32.0);
        ui.vertical_centered(|ui| {
            ui.heading(egui::RichText::new(route.label()).size(34.0));
            ui.add_space(16.0);

            match route {
                Route::UilAnalyzer => {
                    ui.label("Your UIL Analyzer content goes here.");
                }
                Route::About => {
                    ui.label(format!("About {} - coming soon.", owner_name));
                }
                Route::Projects => {
                    ui.label("Projects - coming soon.");
                }
                Route::Contact => {
                    ui.label("Contact - coming soon.");
                }
                Route::Home => {}
            }

            ui.add_space(24.0);
            if ui.link("← Back to menu").clicked() {
                back = true;
            }
        });
    });

    back
}

/// Draw the retro easter-egg page
///
/// Mimics a classic course-page layout: a bordered one-table header, a
/// welcome note, a bordered "Key Links:" grid, a rule and the homepage link.
pub fn draw_easter_egg_page(ctx: &egui::Context, owner_name: &str) -> EggPageResult {
    let mut result = EggPageResult::default();

    let border = egui::Stroke::new(2.0, egui::Color32::from_rgb(60, 50, 20));
    let text_color = egui::Color32::from_rgb(40, 30, 10);

    egui::Area::new(egui::Id::new("easter_egg_page"))
        .anchor(egui::Align2::CENTER_TOP, [0.0, 40.0])
        .show(ctx, |ui| {
            ui.set_max_width(520.0);

            // One-table header
            egui::Frame::none()
                .stroke(border)
                .inner_margin(egui::Margin::same(12.0))
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(owner_name)
                                .size(30.0)
                                .strong()
                                .color(text_color),
                        );
                        ui.label(
                            egui::RichText::new("Personal Website")
                                .size(16.0)
                                .color(text_color),
                        );
                    });
                });

            ui.add_space(12.0);
            ui.label(
                egui::RichText::new(
                    "Welcome to my website! You found the easter egg - you dragged the sun.",
                )
                .color(text_color),
            );
            ui.add_space(12.0);

            // Key links grid
            egui::Frame::none()
                .stroke(border)
                .inner_margin(egui::Margin::same(12.0))
                .show(ui, |ui| {
                    ui.label(egui::RichText::new("Key Links:").strong().color(text_color));
                    ui.add_space(6.0);
                    egui::Grid::new("key_links")
                        .num_columns(KEY_LINK_COLUMNS)
                        .spacing([28.0, 8.0])
                        .show(ui, |ui| {
                            for (i, route) in Route::LINKS.iter().enumerate() {
                                if ui.link(route.label()).clicked() {
                                    result.selected = Some(*route);
                                }
                                if (i + 1) % KEY_LINK_COLUMNS == 0 {
                                    ui.end_row();
                                }
                            }
                        });
                });

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(6.0);

            if ui.link("Take me back to the home page").clicked() {
                result.go_home = true;
            }
        });

    result
}
